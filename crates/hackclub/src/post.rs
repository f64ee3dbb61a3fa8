use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub id: String,
  #[serde(rename = "user")]
  pub author: Author,
  #[serde(default)]
  pub timestamp: f64,
  #[serde(rename = "slackUrl")]
  pub source: Option<String>,
  pub posted_at: String,
  #[serde(default)]
  pub text: String,
  #[serde(default)]
  pub attachments: Vec<String>,
  #[serde(default)]
  pub reactions: Vec<Reaction>,
}

/// Either a bare user id or the author's embedded profile, depending on the
/// endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Author {
  Id(String),
  Profile(Box<Profile>),
}

impl Default for Author {
  fn default() -> Self {
    Self::Id(String::new())
  }
}

impl Author {
  pub fn id(&self) -> &str {
    match self {
      Self::Id(id) => id,
      Self::Profile(profile) => &profile.id,
    }
  }
}

impl Post {
  /// Calendar date of `posted_at`, without the time of day.
  pub fn date(&self) -> &str {
    self
      .posted_at
      .split_once('T')
      .map_or(self.posted_at.as_str(), |(date, _time)| date)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn author() {
    let user = serde_json::from_str::<User>(USER_JSON).unwrap();

    assert_eq!(user.posts[0].author, Author::Id("clk0profile".into()));
    assert!(matches!(user.posts[1].author, Author::Profile(_)));

    for post in &user.posts {
      assert_eq!(post.author.id(), "clk0profile");
    }
  }

  #[test]
  fn date() {
    let mut post = Post {
      posted_at: "2023-07-22T04:26:40.000Z".into(),
      ..Post::default()
    };

    assert_eq!(post.date(), "2023-07-22");

    post.posted_at = "yesterday".into();

    assert_eq!(post.date(), "yesterday");
  }

  #[test]
  fn fields() {
    let user = serde_json::from_str::<User>(USER_JSON).unwrap();

    let post = &user.posts[0];

    assert_eq!(post.id, "clk0post1");
    assert_eq!(post.timestamp, 1690000000.5);
    assert_eq!(
      post.source.as_deref(),
      Some("https://hackclub.slack.com/archives/C01/p1690000000")
    );
    assert_eq!(post.text, "shipped a **thing**");
    assert_eq!(post.reactions.len(), 2);

    assert_eq!(user.posts[1].source, None);
  }
}
