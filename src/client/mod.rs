use std::collections::HashMap;
use std::fmt;

use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use crate::cookies::{parse_cookies, CookieSource};
use crate::error::Error;
use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::HttpClient;
use crate::interceptor::Interceptors;
use crate::{ClientConfig, RequestConfig, Response, Result};


/// JSON client bound to one base URL.
///
/// Build it once at startup, register interceptors, then share it (behind an
/// `Arc` if needed). Registering needs `&mut self`, so the chains cannot change
/// while requests are in flight.
pub struct Client {
    base_url: String,
    pub interceptors: Interceptors,
    http_client: Box<dyn HttpClient>,
    cookies: Option<Box<dyn CookieSource>>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Client> {
        Self::from_config(ClientConfig::new(base_url, true))
    }

    pub fn from_config(config: ClientConfig) -> Result<Client> {
        let http_client = ReqwestHttpClient::create(&config)?;
        Ok(Self::with_http_client(config.base_url, http_client))
    }

    pub fn with_http_client<C>(base_url: impl Into<String>, http_client: C) -> Client
    where
        C: HttpClient + 'static,
    {
        Client {
            base_url: base_url.into(),
            interceptors: Interceptors::default(),
            http_client: Box::new(http_client),
            cookies: None,
        }
    }

    /// Gives the client access to the embedding application's cookie store.
    pub fn with_cookie_source<S>(mut self, source: S) -> Client
    where
        S: CookieSource + 'static,
    {
        self.cookies = Some(Box::new(source));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn create_url(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        create_url(&self.base_url, path, params)
    }

    /// Runs one call through the request chain, the transport and the response
    /// chain, returning the whole envelope.
    pub async fn request<T>(&self, path: &str, config: RequestConfig) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let method = config.method.clone();
        debug!(%method, path, "sending request");

        match self.execute(path, config).await {
            Ok(response) => {
                debug!(%method, status = %response.status, url = %response.url, "request completed");
                Ok(response)
            }
            Err(err) => {
                error!(%method, path, error = %err, "There was a problem with the fetch operation");
                Err(err)
            }
        }
    }

    async fn execute<T>(&self, path: &str, config: RequestConfig) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let RequestConfig {
            method,
            headers,
            body,
            params,
            base_url,
        } = self.interceptors.request.run(config).await?;

        let base_url = base_url.as_deref().unwrap_or(&self.base_url);
        let url = create_url(base_url, path, &params)?;

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let response = self.http_client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed {
                status,
                url: response.url().to_string(),
            });
        }

        let version = response.version();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body).map_err(Error::MalformedResponse)?;

        let response = self
            .interceptors
            .response
            .run(Response {
                status,
                version,
                headers,
                url,
                data,
            })
            .await?;

        response.decode()
    }

    pub async fn get<T>(&self, path: &str, config: RequestConfig) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request(path, config.method(Method::GET)).await?;
        Ok(response.data)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, config: RequestConfig) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let config = json_body(config.method(Method::POST), body)?;
        let response = self.request(path, config).await?;
        Ok(response.data)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, config: RequestConfig) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let config = json_body(config.method(Method::PUT), body)?;
        let response = self.request(path, config).await?;
        Ok(response.data)
    }

    pub async fn delete<T>(&self, path: &str, config: RequestConfig) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request(path, config.method(Method::DELETE)).await?;
        Ok(response.data)
    }

    /// Cookies visible through the configured [`CookieSource`]; empty when the
    /// client has none.
    pub fn get_cookies(&self) -> HashMap<String, String> {
        self.cookies
            .as_ref()
            .and_then(|source| source.cookie_string())
            .map(|cookies| parse_cookies(&cookies))
            .unwrap_or_default()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors)
            .field("cookies", &self.cookies.is_some())
            .finish()
    }
}

fn create_url(base_url: &str, path: &str, params: &[(String, String)]) -> Result<Url> {
    let invalid = |url: &str, source: url::ParseError| Error::InvalidUrl {
        url: url.to_string(),
        source,
    };

    let mut url = if base_url.is_empty() {
        Url::parse(path).map_err(|source| invalid(path, source))?
    } else {
        Url::parse(base_url)
            .map_err(|source| invalid(base_url, source))?
            .join(path)
            .map_err(|source| invalid(path, source))?
    };

    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    }

    Ok(url)
}

/// Serializes `body` and defaults the content type to JSON. Headers already in
/// `config` replace the default.
fn json_body<B>(mut config: RequestConfig, body: &B) -> Result<RequestConfig>
where
    B: Serialize + ?Sized,
{
    let body = serde_json::to_string(body).map_err(|err| {
        error!(error = %err, "Failed to serialize request body");
        Error::Serialize(err)
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(std::mem::take(&mut config.headers));

    config.headers = headers;
    config.body = Some(body);
    Ok(config)
}
