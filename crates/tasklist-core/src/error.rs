use thiserror::Error;

/// Failure of a single request against the task API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),

  #[error(
    "request to {url} failed with \
     status {status}"
  )]
  Status { status: u16, url: String },

  #[error("decode error: {0}")]
  Decode(String),

  #[error(
    "no auth token in cookie \
     `{cookie}`"
  )]
  MissingToken { cookie: String }
}

impl From<serde_json::Error> for ApiError {
  fn from(err: serde_json::Error) -> Self {
    ApiError::Decode(err.to_string())
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid config toml: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("unknown timezone `{0}`")]
  Timezone(String),

  #[error("api base url is empty")]
  EmptyBaseUrl
}
