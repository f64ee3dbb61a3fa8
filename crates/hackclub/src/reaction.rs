use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "Wire", into = "Wire")]
pub struct Reaction {
  pub name: String,
  pub users_reacted: BTreeSet<String>,
  pub glyph: Glyph,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Glyph {
  Char(String),
  Image(String),
}

impl Reaction {
  /// Page listing every post with this reaction.
  pub fn page(&self) -> String {
    format!("{REACTION_BASE}{}", urlencoding::encode(&self.name))
  }
}

impl Display for Reaction {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.glyph {
      Glyph::Char(c) => write!(f, "{c}"),
      Glyph::Image(_) => write!(f, ":{}:", self.name),
    }
  }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct Wire {
  name: String,
  #[serde(default)]
  users_reacted: BTreeSet<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  char: Option<String>,
}

impl TryFrom<Wire> for Reaction {
  type Error = String;

  fn try_from(wire: Wire) -> Result<Self, Self::Error> {
    let glyph = match (wire.char, wire.url) {
      (Some(c), None) => Glyph::Char(c),
      (None, Some(url)) => Glyph::Image(url),
      (Some(_), Some(_)) => {
        return Err(format!(
          "reaction `{}` has both a character and an image",
          wire.name
        ))
      }
      (None, None) => {
        return Err(format!(
          "reaction `{}` has neither a character nor an image",
          wire.name
        ))
      }
    };

    Ok(Self {
      name: wire.name,
      users_reacted: wire.users_reacted,
      glyph,
    })
  }
}

impl From<Reaction> for Wire {
  fn from(reaction: Reaction) -> Self {
    let (char, url) = match reaction.glyph {
      Glyph::Char(c) => (Some(c), None),
      Glyph::Image(url) => (None, Some(url)),
    };

    Self {
      name: reaction.name,
      users_reacted: reaction.users_reacted,
      url,
      char,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn char() {
    let reaction = serde_json::from_str::<Reaction>(
      r#"{"name": "+1", "usersReacted": ["U1", "U2", "U1"], "char": "👍"}"#,
    )
    .unwrap();

    assert_eq!(reaction.glyph, Glyph::Char("👍".into()));
    assert_eq!(reaction.users_reacted.len(), 2);
    assert_eq!(reaction.to_string(), "👍");
  }

  #[test]
  fn image() {
    let reaction = serde_json::from_str::<Reaction>(
      r#"{"name": "orpheus-dance", "usersReacted": [], "url": "https://example.com/dance.gif"}"#,
    )
    .unwrap();

    assert_eq!(
      reaction.glyph,
      Glyph::Image("https://example.com/dance.gif".into())
    );
    assert_eq!(
      reaction.page(),
      "https://scrapbook.hackclub.com/r/orpheus-dance"
    );
    assert_eq!(reaction.to_string(), ":orpheus-dance:");
  }

  #[test]
  fn both() {
    let err = serde_json::from_str::<Reaction>(
      r#"{"name": "x", "usersReacted": [], "url": "https://example.com/x.png", "char": "x"}"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("both"), "{err}");
  }

  #[test]
  fn neither() {
    let err = serde_json::from_str::<Reaction>(r#"{"name": "x", "usersReacted": []}"#).unwrap_err();

    assert!(err.to_string().contains("neither"), "{err}");
  }

  #[test]
  fn wire_shape() {
    let reaction = Reaction {
      name: "+1".into(),
      users_reacted: BTreeSet::new(),
      glyph: Glyph::Char("👍".into()),
    };

    assert_eq!(
      serde_json::to_string(&reaction).unwrap(),
      r#"{"name":"+1","usersReacted":[],"char":"👍"}"#,
    );
  }
}
