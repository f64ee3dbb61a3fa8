use super::*;

#[derive(RustEmbed)]
#[folder = "static/"]
pub(crate) struct Assets;
