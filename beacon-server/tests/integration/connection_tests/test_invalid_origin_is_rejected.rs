use crate::integration::init_tracing;
use beacon_server::{ServerConfig, ServerError, build_router};

#[tokio::test]
async fn test_invalid_origin_is_rejected() {
    init_tracing();

    let config = ServerConfig {
        allowed_origin: "not\nan origin".into(),
        ..ServerConfig::default()
    };

    match build_router(&config) {
        Err(ServerError::InvalidOrigin(origin)) => assert_eq!(origin, config.allowed_origin),
        Err(other) => panic!("expected invalid-origin error, got {:?}", other),
        Ok(_) => panic!("a header-invalid origin must not build"),
    }

    assert!(build_router(&ServerConfig::default()).is_ok());
}
