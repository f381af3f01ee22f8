use {super::*, thiserror::Error as ThisError};

/// Failures produced while turning a thread reference into a [`Thread`].
#[derive(Debug, ThisError)]
pub(crate) enum Error {
  #[error("request to {url} failed")]
  Fetch {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("invalid thread reference `{input}`: {reason}")]
  InvalidReference { input: String, reason: String },
  #[error("malformed payload at {path}: {reason}")]
  MalformedPayload { path: String, reason: String },
  #[error("request to {url} returned {status}")]
  Status {
    status: reqwest::StatusCode,
    url: String,
  },
}

impl Error {
  pub(crate) fn invalid_reference(
    input: &str,
    reason: impl Into<String>,
  ) -> Self {
    Self::InvalidReference {
      input: input.to_string(),
      reason: reason.into(),
    }
  }

  pub(crate) fn is_client_error(&self) -> bool {
    matches!(self, Self::InvalidReference { .. })
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Fetch { .. } | Self::Status { .. } => "upstream",
      Self::InvalidReference { .. } => "invalid_reference",
      Self::MalformedPayload { .. } => "malformed_payload",
    }
  }

  pub(crate) fn malformed(
    path: impl Into<String>,
    reason: impl Display,
  ) -> Self {
    Self::MalformedPayload {
      path: path.into(),
      reason: reason.to_string(),
    }
  }
}
