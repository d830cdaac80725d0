use std::fmt;
use std::future::Future;

use serde::Serialize;
use url::{
  Url,
  form_urlencoded
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Patch,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

impl fmt::Display for Method {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One call against the task API, independent of how it travels.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  pub method: Method,
  pub path:   String,
  pub query:  Vec<(String, String)>,
  pub body:   Option<serde_json::Value>
}

impl ApiRequest {
  pub fn new(
    method: Method,
    path: impl Into<String>
  ) -> Self {
    Self {
      method,
      path: path.into(),
      query: Vec::new(),
      body: None
    }
  }

  pub fn query(
    mut self,
    key: &str,
    value: &str
  ) -> Self {
    self.query.push((
      key.to_string(),
      value.to_string()
    ));
    self
  }

  pub fn json<B>(
    mut self,
    body: &B
  ) -> Result<Self, serde_json::Error>
  where
    B: Serialize + ?Sized
  {
    self.body =
      Some(serde_json::to_value(body)?);
    Ok(self)
  }

  pub fn query_value(
    &self,
    key: &str
  ) -> Option<&str> {
    self
      .query
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
  }

  fn encoded_query(&self) -> Option<String> {
    if self.query.is_empty() {
      return None;
    }
    Some(
      form_urlencoded::Serializer::new(
        String::new()
      )
      .extend_pairs(&self.query)
      .finish()
    )
  }

  /// Path plus query string, relative to the API origin.
  pub fn target(&self) -> String {
    match self.encoded_query() {
      | Some(query) => {
        format!("{}?{query}", self.path)
      }
      | None => self.path.clone()
    }
  }

  /// Absolute URL against `base`. Paths are rooted, so any path on the
  /// base is replaced.
  pub fn url(
    &self,
    base: &Url
  ) -> Result<Url, url::ParseError> {
    let mut url = base.join(&self.path)?;
    url.set_query(
      self.encoded_query().as_deref()
    );
    Ok(url)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
  pub status: u16,
  pub body:   String
}

impl ApiResponse {
  pub fn new(
    status: u16,
    body: impl Into<String>
  ) -> Self {
    Self {
      status,
      body: body.into()
    }
  }

  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
  #[error("request could not be built: {0}")]
  Request(String),
  #[error("network error: {0}")]
  Network(String),
  #[error("response body unreadable: {0}")]
  Body(String)
}

/// Carries [`ApiRequest`]s to the task API.
///
/// The browser build sends them with `fetch`; tests answer them in memory.
/// Futures are not required to be `Send` since everything runs on the UI
/// thread.
pub trait TaskTransport {
  fn send(
    &self,
    request: ApiRequest
  ) -> impl Future<
    Output = Result<
      ApiResponse,
      TransportError
    >
  >;
}
