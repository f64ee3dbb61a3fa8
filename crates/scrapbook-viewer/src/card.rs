use {super::*, std::collections::HashSet};

pub const PLACEHOLDER_TEXT: &str = "More to come…";

pub const PLACEHOLDER_ATTACHMENT: &str = "/static/placeholder.svg";

/// One cell of the post grid. Placeholders pad the grid to a whole number of
/// rows and exist only in the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Card {
  Post(Post),
  Placeholder(Post),
}

impl Card {
  pub fn post(&self) -> &Post {
    match self {
      Self::Post(post) | Self::Placeholder(post) => post,
    }
  }

  pub fn is_placeholder(&self) -> bool {
    matches!(self, Self::Placeholder(_))
  }
}

/// Number of placeholders needed to bring `posts` up to a multiple of
/// `columns`.
pub fn placeholder_count(posts: usize, columns: NonZeroUsize) -> usize {
  let columns = columns.get();
  (columns - posts % columns) % columns
}

pub fn placeholder(index: usize) -> Post {
  Post {
    id: format!("placeholder-{index}"),
    text: PLACEHOLDER_TEXT.into(),
    attachments: vec![PLACEHOLDER_ATTACHMENT.into()],
    ..Post::default()
  }
}

/// The posts followed by enough placeholders to fill the last row.
/// Placeholder ids skip any id already taken by a post.
pub fn cards(posts: &[Post], columns: NonZeroUsize) -> Vec<Card> {
  let ids = posts
    .iter()
    .map(|post| post.id.as_str())
    .collect::<HashSet<&str>>();

  let placeholders = (0..)
    .map(placeholder)
    .filter(|placeholder| !ids.contains(placeholder.id.as_str()))
    .take(placeholder_count(posts.len(), columns))
    .map(Card::Placeholder);

  posts
    .iter()
    .cloned()
    .map(Card::Post)
    .chain(placeholders)
    .collect()
}
