use std::sync::Arc;

use axum_test::TestServer;
use skinsafe_core::domain::conflict::value_objects::DEFAULT_MIN_FRAGMENT_LEN;

use crate::{
    application::http::server::http_server::{router, state},
    args::{Args, ConflictArgs, LogArgs, ServerArgs},
};

/// Settings for the test server, built in code so the shell's environment cannot change them.
pub fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
        conflict: ConflictArgs {
            rules_path: None,
            min_fragment_len: DEFAULT_MIN_FRAGMENT_LEN,
        },
    }
}

/// Server over the real router with the built-in rule table and no root path.
pub fn test_server() -> TestServer {
    test_server_with(test_args())
}

pub fn test_server_with(args: Args) -> TestServer {
    let app = router(state(Arc::new(args)).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}
