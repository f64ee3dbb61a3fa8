use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id: String,
  pub username: String,
  #[serde(default)]
  pub streak_count: u64,
  #[serde(default)]
  pub max_streaks: u64,
  #[serde(default)]
  pub display_streak: bool,
  #[serde(default)]
  pub streaks_toggled_off: bool,
  pub custom_domain: Option<String>,
  #[serde(rename = "cssURL")]
  pub css_url: Option<String>,
  #[serde(rename = "customAudioURL")]
  pub custom_audio_url: Option<String>,
  pub website: Option<String>,
  pub github: Option<String>,
  pub image: Option<String>,
  pub avatar: Option<String>,
  pub pronouns: Option<String>,
  #[serde(rename = "slackID")]
  pub slack_id: Option<String>,
  pub timezone: Option<String>,
  #[serde(default)]
  pub full_slack_member: bool,
  #[serde(default)]
  pub new_member: bool,
  #[serde(default)]
  pub webring: Vec<String>,
}

impl Profile {
  /// The streak to show, if the user hasn't hidden it.
  pub fn streak(&self) -> Option<u64> {
    (self.display_streak && !self.streaks_toggled_off).then_some(self.streak_count)
  }

  pub fn page(&self) -> String {
    format!("{}{}", Api::SCRAPBOOK, self.username)
  }
}
