use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("`{operation}` failed: {message}"))]
  Dom {
    operation: &'static str,
    message: String,
  },
  #[snafu(display("document missing"))]
  DocumentMissing,
  #[snafu(display("element `#{id}` missing"))]
  ElementMissing { id: &'static str },
  #[snafu(display("failed to set logger"))]
  SetLogger { source: log::SetLoggerError },
  #[snafu(display("window missing"))]
  WindowMissing,
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
