use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
  Home,
  Scrapbook,
}

impl Route {
  pub const ALL: [Self; 2] = [Self::Home, Self::Scrapbook];

  /// Paths match without regard to case or a trailing slash.
  pub fn from_path(path: &str) -> Option<Self> {
    match path.trim_end_matches('/').to_ascii_lowercase().as_str() {
      "" => Some(Self::Home),
      "/scrapbook" => Some(Self::Scrapbook),
      _ => None,
    }
  }

  pub fn path(self) -> &'static str {
    match self {
      Self::Home => "/",
      Self::Scrapbook => "/scrapbook",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Self::Home => "Home",
      Self::Scrapbook => "My Hack-Club scrapbook",
    }
  }
}

impl Display for Route {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.path())
  }
}
