use super::*;

/// A scraped thread: the post, its comment forest, and statistics derived
/// from that forest.
#[derive(Debug, Serialize)]
pub(crate) struct Thread {
  pub(crate) comments: Vec<Comment>,
  pub(crate) post: Post,
  pub(crate) stats: Stats,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) url: Option<String>,
}

impl Thread {
  const SNIPPET_CHARS: usize = 80;

  /// Parses the listing document without a nesting limit: threads may be
  /// nested arbitrarily deep, and each comment level adds five levels of
  /// JSON.
  fn document(payload: &[u8]) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(payload);
    deserializer.disable_recursion_limit();

    let document =
      Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;

    deserializer.end()?;

    Ok(document)
  }

  pub(crate) fn parse(
    payload: &[u8],
    reference: Option<&ThreadReference>,
  ) -> Result<Self, Error> {
    let document = Self::document(payload).map_err(|error| {
      let snippet = String::from_utf8_lossy(payload);

      Error::malformed(
        "$",
        format!(
          "{error} (payload starts with `{}`)",
          truncate(snippet.trim(), Self::SNIPPET_CHARS)
        ),
      )
    })?;

    let (post, comments) = TreeBuilder::build(document)?;

    let url = reference.map(ThreadReference::permalink);

    let post = match &url {
      Some(url) => post.with_url(url.clone()),
      None => post,
    };

    let stats = Stats::aggregate(&comments);

    info!(
      extracted = stats.total_comments,
      reported = post.num_comments,
      max_depth = stats.max_depth,
      "built comment tree"
    );

    let unfetched = stats.unfetched(post.num_comments);

    if unfetched > 0 {
      debug!(unfetched, "comments reported by the post are not in the payload");
    }

    Ok(Self {
      comments,
      post,
      stats,
      url,
    })
  }

  pub(crate) async fn scrape(
    fetcher: &impl Fetch,
    input: &str,
  ) -> Result<Self, Error> {
    let reference = ThreadReference::normalize(input)?;

    let payload = fetcher.fetch(&reference).await?;

    Self::parse(&payload, Some(&reference))
  }
}
