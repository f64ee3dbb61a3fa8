use {
  super::*,
  axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
  },
};

#[derive(Debug, PartialEq)]
pub(crate) enum ServerError {
  NotFound { path: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::NotFound { path } => {
        log::debug!("{path} not found");
        (StatusCode::NOT_FOUND, format!("{path} not found")).into_response()
      }
    }
  }
}
