use super::*;

pub(crate) enum Event {
  Stories { result: Result<StoryListEnvelope> },
}
