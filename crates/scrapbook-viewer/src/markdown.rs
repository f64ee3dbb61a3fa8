use super::*;

/// Decides whether a link or image target may be emitted.
pub type LinkFilter = fn(&str) -> bool;

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Markdown to HTML with a pluggable link policy.
///
/// Links and images whose target the filter rejects are rendered as their
/// text alone. Raw HTML in the source is always escaped.
#[derive(Clone, Copy)]
pub struct Markdown {
  filter: LinkFilter,
}

impl Default for Markdown {
  fn default() -> Self {
    Self::sanitized()
  }
}

impl Markdown {
  pub fn new(filter: LinkFilter) -> Self {
    Self { filter }
  }

  pub fn sanitized() -> Self {
    Self::new(safe_url)
  }

  pub fn unfiltered() -> Self {
    Self::new(|_| true)
  }

  pub fn render(&self, text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut dropped = Vec::new();

    let events = Parser::new_ext(text, options).filter_map(|event| {
      match &event {
        Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
          let allowed = (self.filter)(dest_url);
          if !allowed {
            log::debug!("dropping link to `{dest_url}`");
          }
          dropped.push(!allowed);
          if !allowed {
            return None;
          }
        }
        Event::End(TagEnd::Link | TagEnd::Image) => {
          if dropped.pop().unwrap_or_default() {
            return None;
          }
        }
        Event::Html(html) | Event::InlineHtml(html) => return Some(Event::Text(html.clone())),
        _ => {}
      }
      Some(event)
    });

    let mut output = String::new();
    html::push_html(&mut output, events);
    output
  }
}

/// False for `javascript:`, `vbscript:` and `data:` targets, however they are
/// cased, percent-encoded or padded, and for targets that don't decode.
pub fn safe_url(url: &str) -> bool {
  let Ok(decoded) = urlencoding::decode(url) else {
    return false;
  };

  let scheme = decoded
    .chars()
    .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ':')
    .collect::<String>()
    .to_lowercase();

  !UNSAFE_SCHEMES
    .iter()
    .any(|unsafe_scheme| scheme.starts_with(unsafe_scheme))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[track_caller]
  fn case(text: &str, expected: &str) {
    assert_eq!(Markdown::sanitized().render(text), expected);
  }

  #[test]
  fn unsafe_urls() {
    for url in [
      "javascript:alert(1)",
      "JaVaScRiPt:alert(1)",
      " javascript:alert(1)",
      "java\tscript:alert(1)",
      "%6Aavascript:alert(1)",
      "data:text/html,<script>alert(1)</script>",
      "DATA:image/png;base64,AAAA",
      "vbscript:foo",
      "%ff",
    ] {
      assert!(!safe_url(url), "{url}");
    }
  }

  #[test]
  fn safe_urls() {
    for url in [
      "https://example.com",
      "http://example.com/javascript:",
      "/scrapbook",
      "mailto:orpheus@hackclub.com",
      "#top",
    ] {
      assert!(safe_url(url), "{url}");
    }
  }

  #[test]
  fn allowed_link() {
    case(
      "[click](https://example.com)",
      "<p><a href=\"https://example.com\">click</a></p>\n",
    );
  }

  #[test]
  fn dropped_links() {
    case("[x](javascript:alert(1))", "<p>x</p>\n");
    case("[x](JaVaScRiPt:alert(1))", "<p>x</p>\n");
    case("[x](vbscript:foo)", "<p>x</p>\n");
    case("[x](data:text/html;base64,PHNjcmlwdD4=)", "<p>x</p>\n");
    case("[x](%6Aavascript:alert(1))", "<p>x</p>\n");
    case("<javascript:alert(1)>", "<p>javascript:alert(1)</p>\n");
  }

  #[test]
  fn dropped_link_keeps_formatting() {
    case(
      "see [**this**](javascript:alert(1)) now",
      "<p>see <strong>this</strong> now</p>\n",
    );
  }

  #[test]
  fn following_links_survive() {
    case(
      "[a](javascript:x) [b](https://example.com)",
      "<p>a <a href=\"https://example.com\">b</a></p>\n",
    );
  }

  #[test]
  fn images() {
    case("![alt](javascript:alert(1))", "<p>alt</p>\n");

    assert!(Markdown::sanitized()
      .render("![alt](https://example.com/a.png)")
      .contains("<img src=\"https://example.com/a.png\" alt=\"alt\""));
  }

  #[test]
  fn raw_html_is_escaped() {
    let html = Markdown::sanitized().render("<script>alert(1)</script>");
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains("&lt;script&gt;"), "{html}");

    let html = Markdown::unfiltered().render("hi <b onclick=\"x()\">there</b>");
    assert!(!html.contains("<b"), "{html}");
    assert!(html.contains("&lt;b onclick="), "{html}");
  }

  #[test]
  fn formatting() {
    case(
      "shipped a **thing**",
      "<p>shipped a <strong>thing</strong></p>\n",
    );
    case("~~gone~~", "<p><del>gone</del></p>\n");
  }

  #[test]
  fn unfiltered() {
    let html = Markdown::unfiltered().render("[x](javascript:alert(1))");
    assert!(html.contains("<a href=\"javascript:"), "{html}");
  }

  #[test]
  fn custom_filter() {
    let https_only = Markdown::new(|url| url.starts_with("https://"));

    assert_eq!(
      https_only.render("[a](http://example.com) [b](https://example.com)"),
      "<p>a <a href=\"https://example.com\">b</a></p>\n",
    );
  }
}
