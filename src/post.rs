use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Post {
  pub(crate) author: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) flair: Option<String>,
  pub(crate) num_comments: u64,
  pub(crate) score: i64,
  pub(crate) selftext: String,
  pub(crate) subreddit: String,
  pub(crate) timestamp: i64,
  pub(crate) title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) url: Option<String>,
}

impl Post {
  pub(crate) fn with_url(self, url: String) -> Self {
    Self {
      url: Some(url),
      ..self
    }
  }
}

impl From<LinkData> for Post {
  fn from(data: LinkData) -> Self {
    Self {
      author: Comment::resolve_author(data.author),
      flair: data
        .author_flair_text
        .map(|flair| decode_text(flair.trim()))
        .filter(|flair| !flair.is_empty()),
      num_comments: data.num_comments.unwrap_or_default(),
      score: data.score.unwrap_or_default(),
      selftext: data
        .selftext
        .map(|text| decode_text(&text))
        .unwrap_or_default(),
      subreddit: data.subreddit.unwrap_or_default(),
      timestamp: data.created_utc,
      title: decode_text(&data.title),
      url: None,
    }
  }
}
