//! # base-fetch
//!
//! base-fetch is a small asynchronous JSON HTTP client. Every call goes through
//! an ordered chain of request interceptors, one network round trip, and an
//! ordered chain of response interceptors before the parsed body is handed
//! back.
//!
//! ## Usage
//!
//! Build one [`Client`] at startup, register interceptors, then share it with
//! the code that issues requests.
//!
//! ```rust,no_run
//! use base_fetch::http::header::{HeaderValue, AUTHORIZATION};
//! use base_fetch::{Client, RequestConfig};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Employee {
//!     id: String,
//!     name: String,
//! }
//!
//! # async fn run() -> base_fetch::Result<()> {
//! let mut client = Client::new("https://api.example.com")?;
//!
//! client.interceptors.request.register_sync(|mut config: RequestConfig| {
//!     config
//!         .headers
//!         .insert(AUTHORIZATION, HeaderValue::from_static("Bearer token"));
//!     Ok(config)
//! });
//!
//! let employees: Vec<Employee> = client
//!     .get("/employees", RequestConfig::new().param("page", "2"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Interceptors
//!
//! Handlers run one at a time in registration order, each receiving the output
//! of the previous one. [`InterceptorChain::register`] returns an id that can
//! later be passed to [`InterceptorChain::eject`]; ejecting leaves an identity
//! handler in the slot, so other ids stay valid.
//!
//! ### Errors
//!
//! Nothing is swallowed. A status outside of 2xx is
//! [`Error::RequestFailed`] and carries the status code, transport failures are
//! [`Error::Network`], a body that is not the expected JSON is
//! [`Error::MalformedResponse`], and a failing handler is
//! [`Error::Interceptor`]. Each failure is logged through `tracing` before it
//! is returned.
//!
//! ### Configuration
//!
//! [`ClientConfig::from_env`] reads the base URL from `API_ENDPOINT_URL` and
//! certificate checking from `API_SSL_CHECK`.
//!
//! ## License
//! [Apache License 2.0](https://www.apache.org/licenses/LICENSE-2.0)

pub use http;

pub mod client;
pub mod config;
pub mod cookies;
pub mod employees;
pub mod error;
pub mod http_client;
pub mod interceptor;
pub mod response;

pub use client::Client;
pub use config::{ClientConfig, RequestConfig};
pub use cookies::{parse_cookies, CookieJar, CookieSource};
pub use error::{Error, Stage};
pub use interceptor::{InterceptorChain, InterceptorId, Interceptors};
pub use response::Response;

pub type Result<T> = std::result::Result<T, Error>;
