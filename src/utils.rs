use super::*;

pub(crate) fn deserialize_identifier<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(n.to_string()),
    Value::Null => Err(de::Error::invalid_type(
      Unexpected::Unit,
      &"string or number",
    )),
    Value::Bool(b) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Value::Object(_) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

/// Null and missing text both read as the empty string.
pub(crate) fn deserialize_text<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Replaces control characters such as newlines and tabs with spaces.
pub(crate) fn single_line(text: &str) -> String {
  text
    .chars()
    .map(|ch| if ch.is_control() { ' ' } else { ch })
    .collect()
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
  struct IdentifierWrapper {
    #[serde(deserialize_with = "deserialize_identifier")]
    value: String,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct TextWrapper {
    #[serde(default, deserialize_with = "deserialize_text")]
    value: String,
  }

  fn parse_identifier(input: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<IdentifierWrapper>(input).map(|w| w.value)
  }

  fn parse_text(input: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<TextWrapper>(input).map(|w| w.value)
  }

  #[test]
  fn single_line_replaces_control_characters() {
    assert_eq!(single_line("a\nb\tc\r"), "a b c ");
    assert_eq!(single_line("plain"), "plain");
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
  fn identifier_accepts_strings_and_numbers() {
    assert_eq!(parse_identifier(r#"{"value": "abc"}"#).unwrap(), "abc");
    assert_eq!(parse_identifier(r#"{"value": 17}"#).unwrap(), "17");
  }

  #[test]
  fn identifier_rejects_null_and_bools() {
    assert!(parse_identifier(r#"{"value": null}"#).is_err());
    assert!(parse_identifier(r#"{"value": false}"#).is_err());
    assert!(parse_identifier("{}").is_err());
  }

  #[test]
  fn text_reads_null_and_missing_as_empty() {
    assert_eq!(parse_text(r#"{"value": "Hello"}"#).unwrap(), "Hello");
    assert_eq!(parse_text(r#"{"value": null}"#).unwrap(), "");
    assert_eq!(parse_text("{}").unwrap(), "");
  }
}
