use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  const LIST_PATH: &str = "/liststory";
  const SUBMIT_PATH: &str = "/savestory";

  pub(crate) async fn fetch_stories(
    &self,
    params: LoadParams,
  ) -> Result<StoryListEnvelope> {
    let url = self.list_url(params)?;

    tracing::debug!(%url, "requesting story list");

    let envelope = self
      .client
      .get(url.clone())
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?
      .error_for_status()?
      .json::<StoryListEnvelope>()
      .await
      .with_context(|| format!("response from {url} is not a story list"))?;

    Ok(envelope)
  }

  pub(crate) fn list_url(&self, params: LoadParams) -> Result<Url> {
    let mut url = self.base_url.join(Self::LIST_PATH)?;

    params.apply(&mut url);

    Ok(url)
  }

  pub(crate) fn new(base_url: Url) -> Self {
    Self {
      base_url,
      client: reqwest::Client::new(),
    }
  }

  pub(crate) fn submission_action(&self) -> Result<Url> {
    Ok(self.base_url.join(Self::SUBMIT_PATH)?)
  }
}
