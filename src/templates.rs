use super::*;

#[derive(Boilerplate)]
pub(crate) struct IndexHtml {
  pub(crate) columns: NonZeroUsize,
  pub(crate) username: String,
}
