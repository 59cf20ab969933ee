use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  FetchStories { params: LoadParams },
  Navigate { url: Url },
}
