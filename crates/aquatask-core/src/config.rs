use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

use crate::toast::DEFAULT_TOAST_MS;
use crate::view::DEFAULT_STAGGER_MS;

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct ClientConfig {
  #[serde(default)]
  pub api:    ApiConfig,
  #[serde(default)]
  pub timing: TimingConfig
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct ApiConfig {
  /// Prefix for `/api/...` paths; empty means same origin.
  #[serde(default)]
  pub base_url: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
pub struct TimingConfig {
  #[serde(default = "default_toast_ms")]
  pub toast_ms:            u32,
  #[serde(
    default = "default_delete_animation_ms"
  )]
  pub delete_animation_ms: u32,
  #[serde(
    default = "default_refresh_feedback_ms"
  )]
  pub refresh_feedback_ms: u32,
  #[serde(default = "default_stagger_ms")]
  pub stagger_ms:          u32
}

impl Default for TimingConfig {
  fn default() -> Self {
    Self {
      toast_ms:            default_toast_ms(),
      delete_animation_ms:
        default_delete_animation_ms(),
      refresh_feedback_ms:
        default_refresh_feedback_ms(),
      stagger_ms:          default_stagger_ms()
    }
  }
}

impl ClientConfig {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self = toml::from_str(text)
      .context(
        "failed to parse client config"
      )?;
    debug!(
      base_url = %cfg.api.base_url,
      toast_ms = cfg.timing.toast_ms,
      "loaded client config"
    );
    Ok(cfg)
  }

  /// Parses `text`, falling back to defaults when it is malformed.
  pub fn from_toml_or_default(
    text: &str
  ) -> Self {
    Self::from_toml_str(text)
      .unwrap_or_else(|err| {
        warn!(
          error = %format!("{err:#}"),
          "invalid client config; using \
           defaults"
        );
        Self::default()
      })
  }
}

fn default_toast_ms() -> u32 {
  DEFAULT_TOAST_MS
}

fn default_delete_animation_ms() -> u32 {
  300
}

fn default_refresh_feedback_ms() -> u32 {
  500
}

fn default_stagger_ms() -> u32 {
  DEFAULT_STAGGER_MS
}

#[cfg(test)]
mod tests {
  use super::{
    ClientConfig,
    TimingConfig
  };

  #[test]
  fn partial_file_keeps_remaining_defaults() {
    let cfg = ClientConfig::from_toml_str(
      r#"
        [api]
        base_url = "http://127.0.0.1:5000"

        [timing]
        toast_ms = 1500
      "#
    )
    .expect("parse config");

    assert_eq!(
      cfg.api.base_url,
      "http://127.0.0.1:5000"
    );
    assert_eq!(cfg.timing.toast_ms, 1500);
    assert_eq!(
      cfg.timing.delete_animation_ms,
      300
    );
    assert_eq!(cfg.timing.stagger_ms, 50);
  }

  #[test]
  fn malformed_file_falls_back_to_defaults() {
    let cfg =
      ClientConfig::from_toml_or_default(
        "[timing\ntoast_ms = "
      );
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(
      cfg.timing,
      TimingConfig::default()
    );
  }

  #[test]
  fn empty_file_is_all_defaults() {
    let cfg = ClientConfig::from_toml_str("")
      .expect("parse empty config");
    assert_eq!(cfg.api.base_url, "");
    assert_eq!(
      cfg.timing.refresh_feedback_ms,
      500
    );
  }
}
