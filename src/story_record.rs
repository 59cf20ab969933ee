use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoryRecord {
  #[serde(default, deserialize_with = "deserialize_text")]
  pub(crate) body: String,
  #[serde(deserialize_with = "deserialize_identifier")]
  pub(crate) story_id: String,
  #[serde(default, deserialize_with = "deserialize_text")]
  pub(crate) title: String,
}

impl StoryRecord {
  pub(crate) fn value(&self, index: DataIndex) -> &str {
    match index {
      DataIndex::Body => &self.body,
      DataIndex::Title => &self.title,
    }
  }
}
