use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Stats {
  pub(crate) comments_by_depth: BTreeMap<usize, usize>,
  pub(crate) max_depth: i64,
  pub(crate) top_level_comments: usize,
  pub(crate) total_comments: usize,
}

impl Stats {
  pub(crate) fn aggregate(forest: &[Comment]) -> Self {
    let mut comments_by_depth = BTreeMap::new();
    let mut total_comments = 0;

    for (depth, _) in Comment::walk(forest) {
      *comments_by_depth.entry(depth).or_insert(0) += 1;
      total_comments += 1;
    }

    let max_depth = comments_by_depth
      .last_key_value()
      .and_then(|(depth, _)| i64::try_from(*depth).ok())
      .unwrap_or(-1);

    Self {
      comments_by_depth,
      max_depth,
      top_level_comments: forest.len(),
      total_comments,
    }
  }

  /// Difference between the count the source reports and the number of
  /// comments actually present in the forest.
  pub(crate) fn unfetched(&self, reported: u64) -> i64 {
    let extracted = i64::try_from(self.total_comments).unwrap_or(i64::MAX);
    i64::try_from(reported)
      .unwrap_or(i64::MAX)
      .saturating_sub(extracted)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_comment(id: &str, children: Vec<Comment>) -> Comment {
    Comment {
      author: "user".to_string(),
      children,
      flair: None,
      id: id.to_string(),
      score: 0,
      text: String::new(),
      timestamp: 0,
    }
  }

  fn leaf(id: &str) -> Comment {
    make_comment(id, Vec::new())
  }

  #[test]
  fn empty_forest() {
    let stats = Stats::aggregate(&[]);

    assert_eq!(stats.total_comments, 0);
    assert_eq!(stats.top_level_comments, 0);
    assert_eq!(stats.max_depth, -1);
    assert!(stats.comments_by_depth.is_empty());
  }

  #[test]
  fn chain_under_first_root() {
    let forest = vec![
      make_comment("a", vec![make_comment("a1", vec![leaf("a1x")])]),
      leaf("b"),
    ];

    let stats = Stats::aggregate(&forest);

    assert_eq!(stats.total_comments, 4);
    assert_eq!(stats.top_level_comments, 2);
    assert_eq!(stats.max_depth, 2);
    assert_eq!(
      stats.comments_by_depth,
      BTreeMap::from([(0, 2), (1, 1), (2, 1)])
    );
  }

  #[test]
  fn histogram_is_consistent_with_totals() {
    let forest = vec![
      make_comment(
        "a",
        vec![leaf("a1"), make_comment("a2", vec![leaf("a2x"), leaf("a2y")])],
      ),
      make_comment("b", vec![leaf("b1")]),
      leaf("c"),
    ];

    let stats = Stats::aggregate(&forest);

    assert_eq!(
      stats.total_comments,
      stats.comments_by_depth.values().sum::<usize>()
    );

    assert_eq!(
      usize::try_from(stats.max_depth + 1).unwrap(),
      stats.comments_by_depth.len()
    );

    assert_eq!(
      stats.comments_by_depth.keys().copied().collect::<Vec<_>>(),
      vec![0, 1, 2]
    );
  }

  #[test]
  fn aggregation_is_idempotent() {
    let forest = vec![make_comment("a", vec![leaf("a1")]), leaf("b")];

    assert_eq!(Stats::aggregate(&forest), Stats::aggregate(&forest));
  }

  #[test]
  fn serializes_depth_keys_as_strings() {
    let stats = Stats::aggregate(&[make_comment("a", vec![leaf("a1")])]);

    assert_eq!(
      serde_json::to_value(&stats).unwrap(),
      json!({
        "comments_by_depth": {"0": 1, "1": 1},
        "max_depth": 1,
        "top_level_comments": 1,
        "total_comments": 2,
      })
    );
  }

  #[test]
  fn unfetched_reports_the_gap() {
    let stats = Stats::aggregate(&[leaf("a"), leaf("b")]);

    assert_eq!(stats.unfetched(10), 8);
    assert_eq!(stats.unfetched(1), -1);
  }
}
