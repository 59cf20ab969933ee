#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  HideHelp,
  None,
  OpenSelectedStory,
  Quit,
  ShowHelp,
  ShowStories,
  ShowSubmission,
  Submit,
}
