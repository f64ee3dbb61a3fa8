use super::*;

pub const DEFAULT_USERNAME: &str = "orpheus";

/// Number of columns in the post grid. Placeholders pad the post list to a
/// multiple of this.
pub const DEFAULT_COLUMNS: NonZeroUsize = match NonZeroUsize::new(3) {
  Some(columns) => columns,
  None => unreachable!(),
};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  pub username: String,
  pub columns: NonZeroUsize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      username: DEFAULT_USERNAME.into(),
      columns: DEFAULT_COLUMNS,
    }
  }
}

impl Config {
  /// Build from the `data-username` and `data-columns` attributes of the root
  /// element. Missing or unusable values fall back to the defaults.
  pub fn from_attributes(username: Option<String>, columns: Option<String>) -> Self {
    let username = username
      .map(|username| username.trim().to_owned())
      .filter(|username| !username.is_empty())
      .unwrap_or_else(|| DEFAULT_USERNAME.into());

    let columns = match columns {
      None => DEFAULT_COLUMNS,
      Some(columns) => match columns.trim().parse::<NonZeroUsize>() {
        Ok(columns) => columns,
        Err(err) => {
          log::warn!("invalid column count `{columns}`, using {DEFAULT_COLUMNS}: {err}");
          DEFAULT_COLUMNS
        }
      },
    };

    Self { username, columns }
  }
}
