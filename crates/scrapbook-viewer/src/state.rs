use super::*;

/// Identifies the fetch cycle a result belongs to. Only results from the
/// latest generation are committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Display for Generation {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug)]
pub struct State {
  columns: NonZeroUsize,
  generation: Generation,
  posts: Vec<Post>,
  profile: Option<Profile>,
}

impl State {
  pub fn new(columns: NonZeroUsize) -> Self {
    Self {
      columns,
      generation: Generation::default(),
      posts: Vec::new(),
      profile: None,
    }
  }

  /// Start over with an empty snapshot, as when the view is first shown.
  pub fn mount(&mut self) -> Generation {
    self.profile = None;
    self.posts.clear();
    self.reload()
  }

  /// Start a new fetch cycle. The current snapshot stays until results for
  /// the new generation arrive.
  pub fn reload(&mut self) -> Generation {
    self.generation.0 += 1;
    self.generation
  }

  pub fn generation(&self) -> Generation {
    self.generation
  }

  pub fn commit_profile(&mut self, generation: Generation, profile: Option<Profile>) -> bool {
    if !self.current(generation, "profile") {
      return false;
    }

    self.profile = profile;

    true
  }

  pub fn commit_posts(&mut self, generation: Generation, posts: Option<Vec<Post>>) -> bool {
    if !self.current(generation, "posts") {
      return false;
    }

    self.posts = posts.unwrap_or_default();

    true
  }

  fn current(&self, generation: Generation, what: &str) -> bool {
    if generation == self.generation {
      true
    } else {
      log::debug!(
        "discarding {what} from generation {generation}, current generation is {}",
        self.generation
      );
      false
    }
  }

  pub fn profile(&self) -> Option<&Profile> {
    self.profile.as_ref()
  }

  pub fn posts(&self) -> &[Post] {
    &self.posts
  }

  pub fn cards(&self) -> Vec<Card> {
    cards(&self.posts, self.columns)
  }

  pub fn html(&self) -> ScrapbookHtml {
    ScrapbookHtml {
      cards: self.cards(),
      columns: self.columns,
      profile: self.profile.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, hackclub::User};

  const USER: &str = r#"{
    "profile": { "id": "p", "username": "orpheus" },
    "posts": [
      {
        "id": "one",
        "user": "p",
        "postedAt": "2024-01-01T00:00:00.000Z",
        "text": "first",
        "attachments": ["https://example.com/a.png"],
        "reactions": [{ "name": "+1", "usersReacted": ["U1"], "char": "👍" }]
      },
      {
        "id": "two",
        "user": "p",
        "postedAt": "2024-01-02T00:00:00.000Z",
        "text": "second",
        "attachments": [
          "https://example.com/b.png",
          "https://example.com/c.png",
          "https://example.com/d.png"
        ],
        "reactions": []
      }
    ]
  }"#;

  fn user() -> User {
    serde_json::from_str(USER).unwrap()
  }

  fn state(k: usize) -> State {
    State::new(NonZeroUsize::new(k).unwrap())
  }

  #[test]
  fn fetched_posts_are_padded() {
    let mut state = state(3);

    let generation = state.mount();

    assert!(state.commit_posts(generation, Some(user().posts)));

    let cards = state.cards();

    assert_eq!(cards.len(), 3);
    assert!(!cards[0].is_placeholder());
    assert!(!cards[1].is_placeholder());
    assert!(cards[2].is_placeholder());

    assert_eq!(
      AttachmentGrid::for_count(cards[1].post().attachments.len()),
      Some(AttachmentGrid::Feature)
    );
    assert_eq!(
      AttachmentGrid::for_count(cards[2].post().attachments.len()),
      Some(AttachmentGrid::Single)
    );
  }

  #[test]
  fn failed_fetch_leaves_empty_posts() {
    let mut state = state(3);

    let generation = state.mount();

    assert!(state.commit_posts(generation, None));
    assert!(state.commit_profile(generation, None));

    assert!(state.posts().is_empty());
    assert!(state.cards().is_empty());
    assert_eq!(state.profile(), None);
  }

  #[test]
  fn failed_reload_replaces_snapshot() {
    let mut state = state(2);

    let generation = state.mount();
    state.commit_posts(generation, Some(user().posts));
    assert_eq!(state.posts().len(), 2);

    let generation = state.reload();
    assert_eq!(state.posts().len(), 2);

    state.commit_posts(generation, None);
    assert!(state.posts().is_empty());
  }

  #[test]
  fn stale_results_are_discarded() {
    let mut state = state(3);

    let first = state.mount();
    let second = state.reload();

    assert!(first < second);
    assert_eq!(state.generation(), second);

    assert!(state.commit_posts(second, Some(Vec::new())));
    assert!(!state.commit_posts(first, Some(user().posts)));
    assert!(state.posts().is_empty());

    assert!(!state.commit_profile(first, Some(user().profile)));
    assert_eq!(state.profile(), None);
  }

  #[test]
  fn fetches_commit_independently() {
    let mut state = state(3);

    let generation = state.mount();

    assert!(state.commit_profile(generation, Some(user().profile)));
    assert!(state.commit_posts(generation, None));

    assert_eq!(state.profile().unwrap().username, "orpheus");
    assert!(state.posts().is_empty());

    let generation = state.reload();

    assert!(state.commit_posts(generation, Some(user().posts)));
    assert!(state.commit_profile(generation, None));

    assert_eq!(state.profile(), None);
    assert_eq!(state.posts().len(), 2);
  }

  #[test]
  fn mount_clears_snapshot() {
    let mut state = state(3);

    let generation = state.mount();
    state.commit_profile(generation, Some(user().profile));
    state.commit_posts(generation, Some(user().posts));

    let remounted = state.mount();

    assert!(remounted > generation);
    assert_eq!(state.profile(), None);
    assert!(state.posts().is_empty());
    assert!(!state.commit_posts(generation, Some(user().posts)));
  }
}
