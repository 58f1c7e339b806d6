pub mod endpoint;
pub mod error;
pub mod response;

use crate::status::StatusCodes;
use endpoint::Endpoint;
pub use error::Error;
use http::StatusCode;
use std::time::Duration;

/// Status and body of a completed GET request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues a single GET request.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn get(&self, url: &str) -> Result<RawResponse, Error>;
}

/// `Fetcher` backed by `reqwest`. Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        reqwest::ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map(|client| HttpFetcher { client })
            .map_err(|e| Error::NetworkError(format!("Unable to build HTTP client: {}", e)))
    }
}

impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<RawResponse, Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::NetworkError(format!("Error reading API response: {}", e)))?;

        log::trace!("url: {}, status: {}, response_text: {}", url, status, body);

        Ok(RawResponse { status, body })
    }
}

/// Map non-2xx status to `Error::StatusError` carrying the translated description.
fn map_response_status(codes: &StatusCodes, url: &str, status: StatusCode) -> Result<(), Error> {
    if status.is_success() {
        return Ok(());
    }

    match codes.describe(status.as_u16()) {
        Ok(description) => {
            log::error!("Status error on connect to {}: {}", url, description);
            Err(Error::StatusError(status.as_u16(), description.to_owned()))
        }
        Err(e) => {
            log::error!("Status error on connect to {}: {}", url, e);
            Err(e)
        }
    }
}

/// Fetch `endpoint` and decode its body. Any non-success status aborts before decoding.
pub async fn request<F: Fetcher, E: Endpoint>(
    fetcher: &F,
    codes: &StatusCodes,
    endpoint: &E,
) -> Result<E::Output, Error> {
    let url = endpoint.url()?;
    let response = fetcher.get(&url).await?;
    map_response_status(codes, &url, response.status)?;
    endpoint.decode(&response.body)
}
