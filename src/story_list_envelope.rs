use super::*;

/// The story list reply. It must be a JSON object carrying `stories`.
#[derive(Debug, Deserialize)]
#[serde(try_from = "serde_json::Map<String, Value>")]
pub(crate) struct StoryListEnvelope {
  pub(crate) stories: Vec<StoryRecord>,
  total_count: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeObject {
  stories: Vec<StoryRecord>,
  #[serde(default)]
  total_count: Option<u64>,
}

impl TryFrom<serde_json::Map<String, Value>> for StoryListEnvelope {
  type Error = serde_json::Error;

  fn try_from(
    object: serde_json::Map<String, Value>,
  ) -> Result<Self, Self::Error> {
    let EnvelopeObject {
      stories,
      total_count,
    } = serde_json::from_value(Value::Object(object))?;

    Ok(Self {
      stories,
      total_count,
    })
  }
}

impl StoryListEnvelope {
  /// Server-reported size of the full collection, which may exceed the
  /// number of stories returned.
  pub(crate) fn total_count(&self) -> u64 {
    self
      .total_count
      .unwrap_or_else(|| u64::try_from(self.stories.len()).unwrap_or(u64::MAX))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(input: &str) -> StoryListEnvelope {
    serde_json::from_str(input).unwrap()
  }

  #[test]
  fn parses_single_story() {
    let envelope = parse(
      r#"{"stories":[{"storyId":1,"body":"http://x","title":"Hello"}],"totalCount":1}"#,
    );

    assert_eq!(
      envelope.stories,
      vec![StoryRecord {
        body: "http://x".into(),
        story_id: "1".into(),
        title: "Hello".into(),
      }]
    );
    assert_eq!(envelope.total_count(), 1);
  }

  #[test]
  fn total_count_may_exceed_returned_stories() {
    let envelope = parse(
      r#"{"stories":[{"storyId":"a","body":"b","title":"t"}],"totalCount":40}"#,
    );

    assert_eq!(envelope.stories.len(), 1);
    assert_eq!(envelope.total_count(), 40);
  }

  #[test]
  fn missing_total_count_falls_back_to_story_count() {
    let envelope = parse(
      r#"{"stories":[{"storyId":1,"title":"a"},{"storyId":2,"body":null}]}"#,
    );

    assert_eq!(envelope.total_count(), 2);
    assert_eq!(envelope.stories[0].body, "");
    assert_eq!(envelope.stories[1].title, "");
  }

  #[test]
  fn empty_stories_parse_without_error() {
    let envelope = parse(r#"{"stories":[],"totalCount":0}"#);

    assert!(envelope.stories.is_empty());
    assert_eq!(envelope.total_count(), 0);
  }

  #[test]
  fn replies_without_stories_are_rejected() {
    for input in ["{}", r#"{"error":"not found"}"#, r#"{"totalCount":3}"#] {
      assert!(
        serde_json::from_str::<StoryListEnvelope>(input).is_err(),
        "{input} should not decode"
      );
    }
  }

  #[test]
  fn array_replies_are_rejected() {
    assert!(serde_json::from_str::<StoryListEnvelope>("[[], 7]").is_err());
  }

  #[test]
  fn story_order_is_preserved() {
    let envelope = parse(
      r#"{"stories":[{"storyId":3},{"storyId":1},{"storyId":2}],"totalCount":3}"#,
    );

    let ids: Vec<&str> =
      envelope.stories.iter().map(|s| s.story_id.as_str()).collect();

    assert_eq!(ids, ["3", "1", "2"]);
  }
}
