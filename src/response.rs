use http::{HeaderMap, StatusCode, Version};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;

/// A completed response together with its parsed JSON body.
///
/// Only built once the body has been parsed, so `data` is always present.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub url: Url,
    pub data: T,
}

impl<T> Response<T> {
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            status: self.status,
            version: self.version,
            headers: self.headers,
            url: self.url,
            data: f(self.data),
        }
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<Response<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(Response {
            status: self.status,
            version: self.version,
            headers: self.headers,
            url: self.url,
            data: f(self.data)?,
        })
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl Response<serde_json::Value> {
    /// Converts the untyped body into `T`.
    pub fn decode<T>(self) -> crate::Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.try_map(serde_json::from_value)
            .map_err(Error::MalformedResponse)
    }
}
