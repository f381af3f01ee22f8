use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Comment {
  pub(crate) author: String,
  #[serde(rename = "replies")]
  pub(crate) children: Vec<Comment>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) flair: Option<String>,
  pub(crate) id: String,
  pub(crate) score: i64,
  pub(crate) text: String,
  pub(crate) timestamp: i64,
}

impl Comment {
  pub(crate) const DELETED: &str = "[deleted]";

  pub(crate) fn resolve_author(author: Option<String>) -> String {
    author
      .filter(|author| !author.is_empty())
      .unwrap_or_else(|| Self::DELETED.to_string())
  }

  /// Pre-order traversal of a forest in source order, yielding each comment
  /// with its depth.
  pub(crate) fn walk(forest: &[Comment]) -> Walk<'_> {
    Walk {
      stack: forest.iter().rev().map(|comment| (0, comment)).collect(),
    }
  }
}

impl From<CommentData> for Comment {
  fn from(data: CommentData) -> Self {
    Self {
      author: Self::resolve_author(data.author),
      children: Vec::new(),
      flair: data
        .author_flair_text
        .map(|flair| decode_text(flair.trim()))
        .filter(|flair| !flair.is_empty()),
      id: data.id,
      score: data.score.unwrap_or_default(),
      text: data
        .body
        .map(|body| decode_text(&body))
        .unwrap_or_default(),
      timestamp: data.created_utc,
    }
  }
}

pub(crate) struct Walk<'a> {
  stack: Vec<(usize, &'a Comment)>,
}

impl<'a> Iterator for Walk<'a> {
  type Item = (usize, &'a Comment);

  fn next(&mut self) -> Option<Self::Item> {
    let (depth, comment) = self.stack.pop()?;

    self.stack.extend(
      comment
        .children
        .iter()
        .rev()
        .map(|child| (depth.saturating_add(1), child)),
    );

    Some((depth, comment))
  }
}
