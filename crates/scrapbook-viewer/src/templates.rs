use super::*;

#[derive(Boilerplate)]
pub struct PageHtml {
  pub route: Option<Route>,
  pub main: String,
}

impl PageHtml {
  fn class(&self, route: Route) -> &'static str {
    if self.route == Some(route) {
      "current"
    } else {
      ""
    }
  }
}

#[derive(Boilerplate)]
pub struct HomeHtml;

#[derive(Boilerplate)]
pub struct ScrapbookHtml {
  pub cards: Vec<Card>,
  pub columns: NonZeroUsize,
  pub profile: Option<Profile>,
}

#[derive(Boilerplate)]
pub(crate) struct ProfileHtml {
  pub(crate) profile: Option<Profile>,
}

#[derive(Boilerplate)]
pub(crate) struct CardHtml {
  pub(crate) card: Card,
}

impl CardHtml {
  fn class(&self) -> &'static str {
    if self.card.is_placeholder() {
      "card placeholder"
    } else {
      "card"
    }
  }

  fn text(&self) -> String {
    Markdown::sanitized().render(&self.card.post().text)
  }
}

#[derive(Boilerplate)]
pub(crate) struct ReactionHtml {
  pub(crate) reaction: Reaction,
}
