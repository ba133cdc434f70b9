use hofkit::errors::HofError;
use hofkit::logging::{self, LogLevel};

#[test]
fn second_init_is_rejected() {
    logging::init(LogLevel::Warn).expect("first init succeeds");
    tracing::warn!("logger installed");
    let err = logging::init(LogLevel::Debug).unwrap_err();
    assert!(matches!(err, HofError::InitLogging(_)));
}
