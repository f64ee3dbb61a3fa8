use super::*;

pub struct Api {
  base: Url,
  client: reqwest::Client,
}

impl Default for Api {
  fn default() -> Self {
    Self::new(Url::parse(Self::SCRAPBOOK).unwrap())
  }
}

impl Api {
  pub const SCRAPBOOK: &'static str = "https://scrapbook.hackclub.com/";

  pub fn new(base: Url) -> Self {
    Self {
      base,
      client: reqwest::Client::new(),
    }
  }

  pub fn url(&self, username: &str) -> Result<Url, Error> {
    let path = format!("api/users/{}", urlencoding::encode(username));

    self
      .base
      .join(&path)
      .with_context(|_| error::InvalidUrl {
        base: self.base.clone(),
        path,
      })
  }

  pub async fn user(&self, username: &str) -> Result<User, Error> {
    self.get(self.url(username)?).await
  }

  pub async fn posts(&self, username: &str) -> Result<Vec<Post>, Error> {
    Ok(self.user(username).await?.posts)
  }

  async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
    log::debug!("GET {url}");

    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    serde_json::from_slice(&body).with_context(|_| error::Deserialize { url: url.clone() })
  }
}
