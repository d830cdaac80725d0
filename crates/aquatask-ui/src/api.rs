use aquatask_core::{
  ApiRequest,
  ApiResponse,
  Method,
  TaskTransport,
  TransportError
};
use gloo::net::http::{
  Request,
  RequestBuilder
};
use url::Url;

/// Sends [`ApiRequest`]s with the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  base: Option<Url>
}

impl HttpTransport {
  /// `configured` may be empty, meaning the page's own origin.
  pub fn new(configured: &str) -> Self {
    let base = match configured.trim() {
      | "" => page_origin(),
      | configured => Some(configured.to_string())
    }
    .and_then(|base| {
      Url::parse(&base)
        .map_err(|err| {
          tracing::error!(
            base = %base,
            error = %err,
            "unusable api base url"
          );
        })
        .ok()
    });

    Self {
      base
    }
  }

  fn builder(
    &self,
    request: &ApiRequest
  ) -> Result<RequestBuilder, TransportError>
  {
    let base =
      self.base.as_ref().ok_or_else(|| {
        TransportError::Request(
          "no api base url".to_string()
        )
      })?;
    let url = request
      .url(base)
      .map_err(|err| {
        TransportError::Request(
          err.to_string()
        )
      })?;

    Ok(match request.method {
      | Method::Get => Request::get(url.as_str()),
      | Method::Post => {
        Request::post(url.as_str())
      }
      | Method::Put => Request::put(url.as_str()),
      | Method::Patch => {
        Request::patch(url.as_str())
      }
      | Method::Delete => {
        Request::delete(url.as_str())
      }
    })
  }
}

fn page_origin() -> Option<String> {
  web_sys::window()
    .and_then(|window| {
      window.location().origin().ok()
    })
}

impl TaskTransport for HttpTransport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> Result<ApiResponse, TransportError>
  {
    let builder = self.builder(&request)?;
    let prepared = match &request.body {
      | Some(body) => builder.json(body),
      | None => builder.build()
    }
    .map_err(|err| {
      TransportError::Request(format!(
        "{err:?}"
      ))
    })?;

    let response =
      prepared.send().await.map_err(|err| {
        TransportError::Network(format!(
          "{err:?}"
        ))
      })?;

    let status = response.status();
    let body =
      response.text().await.map_err(|err| {
        TransportError::Body(format!(
          "{err:?}"
        ))
      })?;

    tracing::debug!(
      method = %request.method,
      target = %request.target(),
      status,
      "api round trip"
    );
    Ok(ApiResponse::new(status, body))
  }
}
