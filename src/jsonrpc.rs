use super::*;

#[derive(Debug, Serialize)]
struct Request<'a, P> {
  id: u64,
  jsonrpc: &'static str,
  method: &'a str,
  params: P,
}

#[derive(Debug, Deserialize)]
struct Response<R> {
  result: Option<R>,
  error: Option<ResponseError>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct ResponseError {
  code: i64,
  message: String,
}

impl<R> Response<R> {
  fn into_result(self, method: &str) -> Result<R> {
    if let Some(error) = self.error {
      bail!(
        "{method} failed with code {}: {}",
        error.code,
        error.message
      );
    }

    self
      .result
      .ok_or_else(|| anyhow!("{method} response has no result"))
  }
}

#[derive(Debug, Clone)]
pub(crate) struct JsonRpcClient {
  client: reqwest::Client,
  url: String,
}

impl JsonRpcClient {
  pub(crate) fn new(url: impl Into<String>) -> Result<Self> {
    let url = url.into();

    ensure!(
      url.starts_with("http://") || url.starts_with("https://"),
      "JSON-RPC url `{url}` must use http or https"
    );

    Ok(Self {
      client: reqwest::Client::new(),
      url,
    })
  }

  pub(crate) fn url(&self) -> &str {
    &self.url
  }

  pub(crate) async fn call<P: Serialize, R: DeserializeOwned>(
    &self,
    method: &str,
    params: P,
  ) -> Result<R> {
    log::debug!("Calling {method} at {}", self.url);

    let response = self
      .client
      .post(&self.url)
      .json(&Request {
        id: 1,
        jsonrpc: "2.0",
        method,
        params,
      })
      .send()
      .await
      .with_context(|| format!("failed to send {method} request to {}", self.url))?
      .error_for_status()?
      .json::<Response<R>>()
      .await
      .with_context(|| format!("failed to decode {method} response"))?;

    response.into_result(method)
  }
}
