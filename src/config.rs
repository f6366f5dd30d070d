use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;

pub const BASE_URL_VAR: &str = "API_ENDPOINT_URL";
pub const SSL_CHECK_VAR: &str = "API_SSL_CHECK";

/// Settings fixed for the lifetime of a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base every request path is resolved against. Empty means paths must be
    /// absolute URLs.
    pub base_url: String,
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            ssl_check: true,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, ssl_check: bool) -> Self {
        Self {
            base_url: base_url.into(),
            ssl_check,
        }
    }

    /// Reads `API_ENDPOINT_URL` and `API_SSL_CHECK` from the process
    /// environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_default();
        let ssl_check = match lookup(SSL_CHECK_VAR) {
            Some(value) => !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no"),
            None => true,
        };
        Self::new(base_url.trim(), ssl_check)
    }
}

/// Options for a single call. Interceptors receive and return the whole value,
/// so anything set here (headers, params, even the method) can be rewritten
/// before the request goes out.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
    /// Query parameters, appended to the URL in this order.
    pub params: Vec<(String, String)>,
    /// Overrides the client's base URL for this call only.
    pub base_url: Option<String>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a query parameter. An existing key keeps its position and gets the
    /// new value.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }
}
