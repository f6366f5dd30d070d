use futures::future::BoxFuture;


pub mod reqwest;

/// The transport a [`Client`](crate::Client) sends its requests through.
///
/// Implementations perform exactly one round trip per call; interception,
/// status checks and body parsing happen in the client.
pub trait HttpClient: Send + Sync {
    fn execute(
        &self,
        request: ::reqwest::Request,
    ) -> BoxFuture<'_, ::reqwest::Result<::reqwest::Response>>;
}
