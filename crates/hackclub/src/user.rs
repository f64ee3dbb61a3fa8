use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
  pub profile: Profile,
  #[serde(default)]
  pub webring: Vec<Profile>,
  #[serde(default)]
  pub posts: Vec<Post>,
}
