use gloo::net::http::Request;
use tasklist_core::api::{
  TaskApi,
  bearer_header,
  check_status
};
use tasklist_core::cookie::read_cookie;
use tasklist_core::model::{
  decode_lists,
  decode_tasks
};
use tasklist_core::{
  ApiError,
  ClientConfig,
  ListId,
  TaskList,
  TasksResponse
};
use wasm_bindgen::JsCast;

/// `TaskApi` over `fetch`, authenticated with the token cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
  config: ClientConfig
}

impl HttpApi {
  pub fn new(config: ClientConfig) -> Self {
    Self { config }
  }

  fn token(&self) -> Result<String, ApiError> {
    let header = document_cookie();
    read_cookie(
      &header,
      &self.config.token_cookie
    )
    .ok_or_else(|| {
      ApiError::MissingToken {
        cookie: self
          .config
          .token_cookie
          .clone()
      }
    })
  }

  async fn get_text(
    &self,
    url: &str
  ) -> Result<String, ApiError> {
    let token = self.token()?;
    let response = Request::get(url)
      .header(
        "Authorization",
        &bearer_header(&token)
      )
      .send()
      .await
      .map_err(|e| {
        ApiError::Network(e.to_string())
      })?;

    check_status(response.status(), url)?;

    response.text().await.map_err(|e| {
      ApiError::Network(e.to_string())
    })
  }
}

impl TaskApi for HttpApi {
  #[tracing::instrument(skip(self))]
  async fn fetch_lists(
    &self
  ) -> Result<Vec<TaskList>, ApiError> {
    let url = self.config.lists_url();
    let body = self.get_text(&url).await?;
    decode_lists(&body)
  }

  #[tracing::instrument(skip(self))]
  async fn fetch_tasks(
    &self,
    list_id: &ListId
  ) -> Result<TasksResponse, ApiError> {
    let url =
      self.config.tasks_url(list_id);
    let body = self.get_text(&url).await?;
    decode_tasks(&body)
  }
}

fn document_cookie() -> String {
  gloo::utils::document()
    .dyn_into::<web_sys::HtmlDocument>()
    .ok()
    .and_then(|document| {
      document.cookie().ok()
    })
    .unwrap_or_default()
}
