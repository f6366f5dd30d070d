use base_fetch::{Client, ClientConfig};
use httpmock::MockServer;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn client_for(server: &MockServer) -> Client {
    init_tracing();
    Client::from_config(ClientConfig::new(server.base_url(), true)).unwrap()
}
