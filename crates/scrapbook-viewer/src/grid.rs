use super::*;

/// Layout of a post's attachments, chosen by how many there are.
///
/// More than four attachments still use `Quad`. The extra cells land in the
/// same two by two box and are clipped by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentGrid {
  Single,
  Pair,
  Feature,
  Quad,
}

impl AttachmentGrid {
  pub fn for_count(count: usize) -> Option<Self> {
    match count {
      0 => None,
      1 => Some(Self::Single),
      2 => Some(Self::Pair),
      3 => Some(Self::Feature),
      _ => Some(Self::Quad),
    }
  }

  pub fn columns(self) -> usize {
    match self {
      Self::Single => 1,
      Self::Pair | Self::Feature | Self::Quad => 2,
    }
  }

  pub fn rows(self) -> usize {
    match self {
      Self::Single | Self::Pair => 1,
      Self::Feature | Self::Quad => 2,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Single => "single",
      Self::Pair => "pair",
      Self::Feature => "feature",
      Self::Quad => "quad",
    }
  }

  /// Class of the cell holding attachment `index`.
  pub fn cell(self, index: usize) -> &'static str {
    match (self, index) {
      (Self::Single, _) => "cell natural",
      (Self::Feature, 0) => "cell lead",
      _ => "cell square",
    }
  }
}

impl Display for AttachmentGrid {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
