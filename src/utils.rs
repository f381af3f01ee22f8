use super::*;

pub(crate) fn decode_text(text: &str) -> String {
  html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Array(_) => "an array",
    Value::Bool(_) => "a boolean",
    Value::Null => "null",
    Value::Number(_) => "a number",
    Value::Object(_) => "an object",
    Value::String(_) => "a string",
  }
}

/// Reddit sends an empty string instead of a listing when a comment has no
/// replies. The listing itself is handed back untouched.
pub(crate) fn replies_listing(
  replies: Option<Value>,
) -> Result<Option<Value>, String> {
  match replies {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) if s.is_empty() => Ok(None),
    Some(listing @ Value::Object(_)) => Ok(Some(listing)),
    Some(other) => Err(format!(
      "expected an empty string or a listing, found {}",
      kind_of(&other)
    )),
  }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(0),
    Some(Value::Number(n)) => n
      .as_i64()
      .or_else(|| n.as_f64().map(|seconds| seconds.trunc() as i64))
      .ok_or_else(|| {
        de::Error::invalid_value(Unexpected::Other("number"), &"epoch seconds")
      }),
    Some(Value::String(s)) => Err(de::Error::invalid_type(
      Unexpected::Str(&s),
      &"epoch seconds",
    )),
    Some(Value::Bool(b)) => {
      Err(de::Error::invalid_type(Unexpected::Bool(b), &"epoch seconds"))
    }
    Some(Value::Array(_)) => {
      Err(de::Error::invalid_type(Unexpected::Seq, &"epoch seconds"))
    }
    Some(Value::Object(_)) => {
      Err(de::Error::invalid_type(Unexpected::Map, &"epoch seconds"))
    }
  }
}

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 | -1 => format!("{score} point"),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct TimestampWrapper {
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    created_utc: i64,
  }

  fn parse_timestamp(input: &str) -> Result<i64, serde_json::Error> {
    serde_json::from_str::<TimestampWrapper>(input)
      .map(|wrapper| wrapper.created_utc)
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn format_points_handles_singular_plural_and_negative() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(-1), "-1 point");
    assert_eq!(format_points(0), "0 points");
    assert_eq!(format_points(-7), "-7 points");
  }

  #[test]
  fn decode_text_unescapes_reddit_entities() {
    assert_eq!(
      decode_text("&gt; quoted &amp; &lt;tagged&gt;"),
      "> quoted & <tagged>"
    );
    assert_eq!(decode_text("[removed]"), "[removed]");
  }

  #[test]
  fn replies_listing_treats_empty_string_as_none() {
    assert_eq!(replies_listing(Some(json!(""))).unwrap(), None);
    assert_eq!(replies_listing(Some(Value::Null)).unwrap(), None);
    assert_eq!(replies_listing(None).unwrap(), None);

    assert_eq!(
      replies_listing(Some(json!({"kind": "Listing"}))).unwrap(),
      Some(json!({"kind": "Listing"}))
    );

    assert_eq!(
      replies_listing(Some(json!("oops"))).unwrap_err(),
      "expected an empty string or a listing, found a string"
    );
    assert!(replies_listing(Some(json!([]))).is_err());
  }

  #[test]
  fn deserialize_timestamp_accepts_integers_and_floats() {
    assert_eq!(
      parse_timestamp(r#"{"created_utc": 1700000000}"#).unwrap(),
      1_700_000_000
    );
    assert_eq!(
      parse_timestamp(r#"{"created_utc": 1700000000.75}"#).unwrap(),
      1_700_000_000
    );
    assert_eq!(parse_timestamp("{}").unwrap(), 0);
    assert!(parse_timestamp(r#"{"created_utc": "yesterday"}"#).is_err());
  }
}
