use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoadParams {
  pub(crate) max_results: Option<NonZeroU32>,
}

impl LoadParams {
  const MAX_RESULTS: &str = "maxresults";

  pub(crate) fn apply(self, url: &mut Url) {
    if let Some(max_results) = self.max_results {
      url
        .query_pairs_mut()
        .append_pair(Self::MAX_RESULTS, &max_results.to_string());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn list_url() -> Url {
    Url::parse("http://localhost:8080/liststory").unwrap()
  }

  #[test]
  fn default_params_leave_query_untouched() {
    let mut url = list_url();

    LoadParams::default().apply(&mut url);

    assert_eq!(url.as_str(), "http://localhost:8080/liststory");
    assert_eq!(url.query(), None);
  }

  #[test]
  fn max_results_is_appended_as_query_parameter() {
    let mut url = list_url();

    LoadParams {
      max_results: NonZeroU32::new(25),
    }
    .apply(&mut url);

    assert_eq!(url.query(), Some("maxresults=25"));
  }
}
