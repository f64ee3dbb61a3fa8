use {
  serde::{de::DeserializeOwned, Deserialize, Serialize},
  snafu::{ensure, ResultExt, Snafu},
  std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
  },
  url::ParseError,
};

pub use {
  api::Api,
  error::Error,
  post::{Author, Post},
  profile::Profile,
  reaction::{Glyph, Reaction},
  reqwest::{StatusCode, Url},
  user::User,
};

mod api;
mod error;
mod post;
mod profile;
mod reaction;
mod user;

/// Where custom reactions are browsable, one page per reaction name.
pub const REACTION_BASE: &str = "https://scrapbook.hackclub.com/r/";

#[cfg(test)]
const USER_JSON: &str = r#"{
  "profile": {
    "id": "clk0profile",
    "username": "orpheus",
    "streakCount": 4,
    "maxStreaks": 12,
    "displayStreak": true,
    "streaksToggledOff": false,
    "website": "https://hackclub.com",
    "github": "https://github.com/hackclub",
    "avatar": "https://example.com/orpheus.png",
    "pronouns": "she/her",
    "webring": ["clk0friend"],
    "fullSlackMember": true
  },
  "webring": [
    { "id": "clk0friend", "username": "heidi" }
  ],
  "posts": [
    {
      "id": "clk0post1",
      "user": "clk0profile",
      "timestamp": 1690000000.5,
      "slackUrl": "https://hackclub.slack.com/archives/C01/p1690000000",
      "postedAt": "2023-07-22T04:26:40.000Z",
      "text": "shipped a **thing**",
      "attachments": ["https://example.com/1.png"],
      "mux": [],
      "reactions": [
        { "name": "+1", "usersReacted": ["U1", "U2"], "char": "👍" },
        { "name": "orpheus-dance", "usersReacted": ["U3"], "url": "https://example.com/dance.gif" }
      ]
    },
    {
      "id": "clk0post2",
      "user": { "id": "clk0profile", "username": "orpheus" },
      "timestamp": 1690086400,
      "postedAt": "2023-07-23T04:26:40.000Z",
      "text": "three pictures",
      "attachments": [
        "https://example.com/a.png",
        "https://example.com/b.png",
        "https://example.com/c.png"
      ],
      "reactions": []
    }
  ]
}"#;
