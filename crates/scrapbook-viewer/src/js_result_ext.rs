use super::*;

pub(crate) trait JsResultExt<T> {
  fn dom(self, operation: &'static str) -> Result<T, Error>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
  fn dom(self, operation: &'static str) -> Result<T, Error> {
    self.map_err(|value| {
      error::Dom {
        operation,
        message: format!("{value:?}"),
      }
      .build()
    })
  }
}
