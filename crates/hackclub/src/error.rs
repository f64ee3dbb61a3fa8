use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    url: Url,
    status: StatusCode,
  },
  #[snafu(display("invalid API URL `{base}{path}`"))]
  InvalidUrl {
    base: Url,
    path: String,
    source: ParseError,
  },
}

impl Error {
  /// The server answered, but not with something shaped like a scrapbook.
  pub fn is_malformed(&self) -> bool {
    matches!(self, Self::Deserialize { .. })
  }
}
