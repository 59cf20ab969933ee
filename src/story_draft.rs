#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StoryDraft {
  pub(crate) story_link: String,
  pub(crate) story_title: String,
}
