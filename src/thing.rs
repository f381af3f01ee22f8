use super::*;

/// A node of the Reddit listing API, dispatched on its `kind` tag.
///
/// Nested containers (`children` of a listing, `replies` of a comment) are
/// detached from the raw node before it is deserialized, so dispatching a node
/// never walks its subtree. The tree builder fills them back in as raw values
/// and dispatches them one at a time.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub(crate) enum Thing {
  #[serde(rename = "t1")]
  Comment(CommentData),
  #[serde(rename = "t3")]
  Link(LinkData),
  #[serde(rename = "Listing")]
  Listing(ListingData),
  #[serde(rename = "more")]
  More(MoreData),
}

impl Thing {
  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Comment(_) => "t1",
      Self::Link(_) => "t3",
      Self::Listing(_) => "Listing",
      Self::More(_) => "more",
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentData {
  pub(crate) author: Option<String>,
  pub(crate) author_flair_text: Option<String>,
  pub(crate) body: Option<String>,
  #[serde(default, deserialize_with = "deserialize_timestamp")]
  pub(crate) created_utc: i64,
  pub(crate) id: String,
  #[serde(skip)]
  pub(crate) replies: Option<Value>,
  pub(crate) score: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LinkData {
  pub(crate) author: Option<String>,
  pub(crate) author_flair_text: Option<String>,
  #[serde(default, deserialize_with = "deserialize_timestamp")]
  pub(crate) created_utc: i64,
  pub(crate) num_comments: Option<u64>,
  pub(crate) score: Option<i64>,
  pub(crate) selftext: Option<String>,
  pub(crate) subreddit: Option<String>,
  pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
  #[serde(skip)]
  pub(crate) children: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreData {
  #[serde(default)]
  pub(crate) count: u64,
}
