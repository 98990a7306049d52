pub mod api;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod datetime;
pub mod display;
pub mod error;
pub mod model;
pub mod navigation;
pub mod route;
pub mod session;

pub use api::TaskApi;
pub use config::ClientConfig;
pub use controller::{
  ControllerState,
  FetchTasks,
  HomeController,
  KeyOutcome
};
pub use datetime::Deadline;
pub use display::{
  FilterMode,
  TaskEntry
};
pub use error::{
  ApiError,
  ConfigError
};
pub use model::{
  ListId,
  Task,
  TaskId,
  TaskList,
  TasksResponse
};
pub use navigation::NavKey;
pub use session::{
  HomeEvent,
  HomeSession,
  TicketedFetch
};
