use {
  boilerplate::{Boilerplate, Trusted},
  hackclub::{Glyph, Post, Profile, Reaction},
  html_escaper::Escape,
  pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd},
  snafu::{ErrorCompat, Snafu},
  std::{
    fmt::{self, Display, Formatter},
    num::NonZeroUsize,
  },
};

#[cfg(target_arch = "wasm32")]
use {
  self::{app::App, event_target_ext::EventTargetExt, js_result_ext::JsResultExt},
  hackclub::Api,
  snafu::{OptionExt, ResultExt},
  std::{
    cell::{Cell, RefCell},
    rc::Rc,
  },
  wasm_bindgen::{
    closure::Closure, convert::FromWasmAbi, prelude::wasm_bindgen, JsCast, JsError, JsValue,
  },
  wasm_bindgen_futures::spawn_local,
  web_sys::{Element, EventTarget, Window},
};

pub use self::{
  card::{cards, placeholder, placeholder_count, Card, PLACEHOLDER_ATTACHMENT, PLACEHOLDER_TEXT},
  config::{Config, DEFAULT_COLUMNS, DEFAULT_USERNAME},
  error::Error,
  grid::AttachmentGrid,
  markdown::{safe_url, LinkFilter, Markdown},
  route::Route,
  state::{Generation, State},
  templates::{HomeHtml, PageHtml, ScrapbookHtml},
};

#[cfg(target_arch = "wasm32")]
mod app;
mod card;
mod config;
mod error;
#[cfg(target_arch = "wasm32")]
mod event_target_ext;
mod grid;
#[cfg(target_arch = "wasm32")]
mod js_result_ext;
mod markdown;
mod route;
mod state;
mod templates;

/// Id of the element the app renders into.
pub const ROOT: &str = "app";

/// Collapse a failed fetch into an absent value, logging it once.
pub fn logged<T>(result: Result<T, hackclub::Error>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(err) => {
      let mut message = err.to_string();

      for cause in err.iter_chain().skip(1) {
        message.push_str(": ");
        message.push_str(&cause.to_string());
      }

      log::error!("{message}");

      None
    }
  }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(log::Level::Info).context(error::SetLogger)?;

  let root = window()?
    .document()
    .context(error::DocumentMissing)?
    .get_element_by_id(ROOT)
    .context(error::ElementMissing { id: ROOT })?;

  App::new(root).run()?;

  Ok(())
}

#[cfg(target_arch = "wasm32")]
fn window() -> Result<Window, Error> {
  web_sys::window().context(error::WindowMissing)
}
