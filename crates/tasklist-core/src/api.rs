use crate::error::ApiError;
use crate::model::{
  ListId,
  TaskList,
  TasksResponse
};

/// Read side of the remote lists/tasks API.
///
/// Implementations own transport and credentials. Futures are not
/// required to be `Send`; the browser client runs them on the event loop.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
  async fn fetch_lists(
    &self
  ) -> Result<Vec<TaskList>, ApiError>;

  async fn fetch_tasks(
    &self,
    list_id: &ListId
  ) -> Result<TasksResponse, ApiError>;
}

pub fn bearer_header(token: &str) -> String {
  format!("Bearer {token}")
}

/// Maps a non-2xx status to [`ApiError::Status`].
pub fn check_status(
  status: u16,
  url: &str
) -> Result<(), ApiError> {
  if (200..300).contains(&status) {
    Ok(())
  } else {
    Err(ApiError::Status {
      status,
      url: url.to_string()
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_outside_2xx_is_an_error() {
    assert_eq!(
      check_status(204, "/lists"),
      Ok(())
    );
    assert_eq!(
      check_status(401, "/lists"),
      Err(ApiError::Status {
        status: 401,
        url:    "/lists".to_string()
      })
    );
    assert_eq!(
      bearer_header("abc"),
      "Bearer abc"
    );
  }
}
