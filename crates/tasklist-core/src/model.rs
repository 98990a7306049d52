use std::fmt;

use serde::{
  Deserialize,
  Deserializer
};

use crate::datetime::Deadline;
use crate::error::ApiError;

macro_rules! opaque_id {
  ($name:ident) => {
    #[derive(
      Debug,
      Clone,
      PartialEq,
      Eq,
      Hash,
      PartialOrd,
      Ord,
    )]
    pub struct $name(String);

    impl $name {
      pub fn new(
        raw: impl Into<String>
      ) -> Self {
        Self(raw.into())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>
      ) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(raw: &str) -> Self {
        Self::new(raw)
      }
    }

    impl<'de> Deserialize<'de> for $name {
      fn deserialize<D>(
        deserializer: D
      ) -> Result<Self, D::Error>
      where
        D: Deserializer<'de>
      {
        RawId::deserialize(deserializer)
          .map(|raw| Self(raw.into_string()))
      }
    }
  };
}

opaque_id!(ListId);
opaque_id!(TaskId);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
  Text(String),
  Unsigned(u64),
  Signed(i64)
}

impl RawId {
  fn into_string(self) -> String {
    match self {
      | RawId::Text(text) => text,
      | RawId::Unsigned(n) => n.to_string(),
      | RawId::Signed(n) => n.to_string()
    }
  }
}

#[derive(
  Debug, Clone, Deserialize, PartialEq, Eq,
)]
pub struct TaskList {
  pub id:    ListId,
  #[serde(default)]
  pub title: String
}

#[derive(
  Debug, Clone, Deserialize, PartialEq, Eq,
)]
pub struct Task {
  pub id:     TaskId,
  #[serde(default)]
  pub title:  String,
  #[serde(default)]
  pub detail: Option<String>,
  pub done:   bool,
  pub limit:  Deadline
}

#[derive(
  Debug, Clone, Deserialize, PartialEq, Eq,
)]
pub struct TasksResponse {
  #[serde(default)]
  pub tasks: Option<Vec<Task>>
}

/// Decodes the body of `GET /lists`.
pub fn decode_lists(
  body: &str
) -> Result<Vec<TaskList>, ApiError> {
  Ok(serde_json::from_str(body)?)
}

/// Decodes the body of `GET /lists/{id}/tasks`.
pub fn decode_tasks(
  body: &str
) -> Result<TasksResponse, ApiError> {
  Ok(serde_json::from_str(body)?)
}
