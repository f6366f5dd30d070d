use futures::future::{BoxFuture, FutureExt};
use reqwest::{Client, Request, Response};

use crate::error::Error;
use crate::http_client::HttpClient;
use crate::{ClientConfig, Result};

pub struct ReqwestHttpClient {
    client: Client,
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        ReqwestHttpClient {
            client: Client::new(),
        }
    }
}

impl From<Client> for ReqwestHttpClient {
    fn from(client: Client) -> Self {
        ReqwestHttpClient { client }
    }
}

impl ReqwestHttpClient {
    pub fn create(config: &ClientConfig) -> Result<ReqwestHttpClient> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .build()
            .map_err(Error::HttpClientBuild)?;

        Ok(ReqwestHttpClient { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: Request) -> BoxFuture<'_, reqwest::Result<Response>> {
        self.client.execute(request).boxed()
    }
}
