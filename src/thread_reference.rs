use {super::*, reqwest::Url};

/// A validated reference to a single Reddit post, always rendered in the
/// canonical `old.reddit.com` JSON form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ThreadReference {
  post_id: String,
  subreddit: String,
}

impl ThreadReference {
  const CANONICAL_HOST: &str = "old.reddit.com";

  const COMMENT_LIMIT: usize = 500;

  const DOMAIN: &str = "reddit.com";

  const FRONT_ENDS: &[&str] = &["i", "m", "new", "np", "old", "www"];

  fn is_forum_host(host: &str) -> bool {
    host == Self::DOMAIN
      || host
        .strip_suffix(Self::DOMAIN)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .is_some_and(|subdomain| Self::FRONT_ENDS.contains(&subdomain))
  }

  fn is_valid_post_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|ch| ch.is_ascii_alphanumeric())
  }

  fn is_valid_subreddit(name: &str) -> bool {
    !name.is_empty()
      && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
  }

  pub(crate) fn json_url(&self) -> String {
    format!("{}.json?limit={}", self.permalink(), Self::COMMENT_LIMIT)
  }

  pub(crate) fn normalize(input: &str) -> Result<Self, Error> {
    let input = input.trim();

    let url = Url::parse(input)
      .map_err(|error| Error::invalid_reference(input, error.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
      return Err(Error::invalid_reference(
        input,
        format!("unsupported scheme `{}`", url.scheme()),
      ));
    }

    let host = url
      .host_str()
      .ok_or_else(|| Error::invalid_reference(input, "missing host"))?;

    if !Self::is_forum_host(host) {
      return Err(Error::invalid_reference(
        input,
        format!("`{host}` is not a reddit host"),
      ));
    }

    let mut segments = url
      .path_segments()
      .into_iter()
      .flatten()
      .filter(|segment| !segment.is_empty());

    let (Some("r"), Some(subreddit), Some("comments"), Some(post_id)) = (
      segments.next(),
      segments.next(),
      segments.next(),
      segments.next(),
    ) else {
      return Err(Error::invalid_reference(
        input,
        "expected a path of the form /r/<subreddit>/comments/<id>",
      ));
    };

    let post_id = post_id.strip_suffix(".json").unwrap_or(post_id);

    if !Self::is_valid_subreddit(subreddit) {
      return Err(Error::invalid_reference(
        input,
        format!("`{subreddit}` is not a valid subreddit name"),
      ));
    }

    if !Self::is_valid_post_id(post_id) {
      return Err(Error::invalid_reference(
        input,
        format!("`{post_id}` is not a valid post id"),
      ));
    }

    Ok(Self {
      post_id: post_id.to_string(),
      subreddit: subreddit.to_string(),
    })
  }

  pub(crate) fn permalink(&self) -> String {
    format!(
      "https://{}/r/{}/comments/{}",
      Self::CANONICAL_HOST,
      self.subreddit,
      self.post_id
    )
  }

  pub(crate) fn post_id(&self) -> &str {
    &self.post_id
  }

  pub(crate) fn subreddit(&self) -> &str {
    &self.subreddit
  }
}

impl Display for ThreadReference {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.json_url())
  }
}

impl FromStr for ThreadReference {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::normalize(s)
  }
}
