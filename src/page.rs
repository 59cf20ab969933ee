#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Page {
  Stories,
  Submission,
}

impl Page {
  pub(crate) fn all() -> &'static [Page] {
    &[Page::Stories, Page::Submission]
  }

  pub(crate) fn index(self) -> usize {
    Self::all()
      .iter()
      .position(|page| *page == self)
      .unwrap_or(0)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Page::Stories => "stories",
      Page::Submission => "submit",
    }
  }
}
