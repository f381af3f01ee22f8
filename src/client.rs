use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(user_agent)
      .timeout(timeout)
      .build()?;

    Ok(Self { client })
  }
}

impl Fetch for Client {
  async fn fetch(&self, reference: &ThreadReference) -> Result<Vec<u8>, Error> {
    let url = reference.json_url();

    info!(%url, "fetching thread");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|source| Error::Fetch {
        url: url.clone(),
        source,
      })?;

    let status = response.status();

    if !status.is_success() {
      return Err(Error::Status { status, url });
    }

    let body = response
      .bytes()
      .await
      .map_err(|source| Error::Fetch { url, source })?;

    debug!(bytes = body.len(), "received payload");

    Ok(body.to_vec())
  }
}
