#![allow(clippy::result_large_err)]

use {
  self::{error::Error, subcommand::Subcommand, templates::IndexHtml},
  axum::http::{header, HeaderValue},
  boilerplate::Boilerplate,
  clap::Parser,
  html_escaper::Escape,
  libc::EXIT_FAILURE,
  mime_guess::{mime, Mime},
  scrapbook_viewer::{Route, DEFAULT_COLUMNS, DEFAULT_USERNAME, ROOT},
  snafu::{ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    io,
    net::SocketAddr,
    num::NonZeroUsize,
    process,
    sync::Arc,
  },
};


mod error;
mod subcommand;
mod templates;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
