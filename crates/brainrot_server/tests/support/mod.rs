//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use brainrot_server::{create_app, AppState, Config};

pub(crate) fn test_config() -> Config {
    Config { port: 0 }
}

pub(crate) fn setup_test_server() -> TestServer {
    let state = AppState::new(test_config());
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}
