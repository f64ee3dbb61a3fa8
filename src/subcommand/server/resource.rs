use {
  super::*,
  axum::response::{IntoResponse, Response},
};

#[derive(Debug)]
pub(crate) struct Resource {
  pub(crate) content_type: Mime,
  pub(crate) content: Vec<u8>,
}

impl Resource {
  pub(crate) fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}
