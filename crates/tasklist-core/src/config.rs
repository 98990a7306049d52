use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str =
  "http://localhost:8080";
pub const DEFAULT_TOKEN_COOKIE: &str =
  "token";
pub const DEFAULT_TIMEZONE: &str =
  "Asia/Tokyo";

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
  api:     Option<ApiSection>,
  display: Option<DisplaySection>
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
  base_url:     Option<String>,
  token_cookie: Option<String>
}

#[derive(Debug, Default, Deserialize)]
struct DisplaySection {
  timezone: Option<String>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  pub api_base_url: String,
  pub token_cookie: String,
  pub timezone:     Tz
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL
        .to_string(),
      token_cookie: DEFAULT_TOKEN_COOKIE
        .to_string(),
      timezone:     chrono_tz::Asia::Tokyo
    }
  }
}

impl ClientConfig {
  /// Parses a config document; absent keys keep their defaults.
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let parsed: RawConfig =
      toml::from_str(raw)?;
    let mut cfg = Self::default();

    if let Some(api) = parsed.api {
      if let Some(base_url) = api.base_url
      {
        cfg.set_api_base_url(&base_url)?;
      }
      if let Some(cookie) =
        api.token_cookie
        && !cookie.trim().is_empty()
      {
        cfg.token_cookie =
          cookie.trim().to_string();
      }
    }

    if let Some(display) = parsed.display
      && let Some(name) = display.timezone
    {
      cfg.timezone = parse_timezone(&name)?;
    }

    debug!(
      api_base_url = %cfg.api_base_url,
      token_cookie = %cfg.token_cookie,
      timezone = %cfg.timezone.name(),
      "loaded client config"
    );
    Ok(cfg)
  }

  /// Like [`Self::from_toml_str`], falling back to defaults on error.
  pub fn from_toml_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        warn!(
          %error,
          "invalid client config; \
           using defaults"
        );
        Self::default()
      }
    }
  }

  pub fn set_api_base_url(
    &mut self,
    raw: &str
  ) -> Result<(), ConfigError> {
    let trimmed =
      raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
      return Err(
        ConfigError::EmptyBaseUrl
      );
    }
    self.api_base_url =
      trimmed.to_string();
    Ok(())
  }

  pub fn lists_url(&self) -> String {
    format!("{}/lists", self.api_base_url)
  }

  pub fn tasks_url(
    &self,
    list_id: &crate::model::ListId
  ) -> String {
    format!(
      "{}/lists/{}/tasks",
      self.api_base_url,
      crate::route::encode_segment(
        list_id.as_str()
      )
    )
  }
}

fn parse_timezone(
  raw: &str
) -> Result<Tz, ConfigError> {
  raw.trim().parse::<Tz>().map_err(|_| {
    ConfigError::Timezone(
      raw.trim().to_string()
    )
  })
}
