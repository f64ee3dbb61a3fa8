use {
  self::{assets::Assets, resource::Resource, server_error::ServerError},
  super::*,
  axum::{
    extract::{Extension, Path},
    http::Uri,
    routing::get,
    Router,
  },
  rust_embed::RustEmbed,
  tokio::runtime::Runtime,
  tower_http::set_header::SetResponseHeaderLayer,
};

mod assets;
mod resource;
mod server_error;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
  script-src 'self' 'wasm-unsafe-eval'; \
  style-src 'self' 'unsafe-inline'; \
  img-src 'self' https: data:; \
  connect-src 'self' https://scrapbook.hackclub.com";

#[derive(Debug, Parser)]
pub struct Server {
  #[arg(
    long,
    default_value = "127.0.0.1:8000",
    help = "Listen on <ADDRESS> for incoming requests."
  )]
  address: SocketAddr,
  #[arg(long, default_value = DEFAULT_USERNAME, help = "Show scrapbook of <USERNAME>.")]
  username: String,
  #[arg(long, default_value_t = DEFAULT_COLUMNS, help = "Lay posts out in <COLUMNS> columns.")]
  columns: NonZeroUsize,
  #[arg(long, help = "Open server in browser.")]
  open: bool,
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Server {
  pub fn run(self) -> Result {
    let router = self.router();

    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    log::info!("listening on http://{}/", self.address);

    Runtime::new().context(error::Runtime)?.block_on(async {
      axum_server::Server::bind(self.address)
        .serve(router.into_make_service())
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  fn router(&self) -> Router {
    Router::new()
      .route("/static/*path", get(Self::asset))
      .fallback(Self::page)
      .layer(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
      ))
      .layer(Extension(Arc::new(IndexHtml {
        columns: self.columns,
        username: self.username.clone(),
      })))
  }

  async fn page(Extension(index): Extension<Arc<IndexHtml>>, uri: Uri) -> ServerResult {
    let path = uri.path();

    let Some(route) = Route::from_path(path) else {
      return Err(ServerError::NotFound { path: path.into() });
    };

    log::debug!("serving shell for {route} at {path}");

    Ok(Resource::new(
      mime::TEXT_HTML_UTF_8,
      index.to_string().into_bytes(),
    ))
  }

  async fn asset(Path(path): Path<String>) -> ServerResult {
    let file = Assets::get(&path).ok_or_else(|| ServerError::NotFound {
      path: format!("/static/{path}"),
    })?;

    Ok(Resource::new(
      mime_guess::from_path(&path).first_or_octet_stream(),
      file.data.into_owned(),
    ))
  }
}
