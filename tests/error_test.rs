//! Tests for error classification and formatting.

use rootroulette::EtymologyError;

#[test]
fn transport_faults_are_transient() {
    assert!(EtymologyError::Http("connection reset".to_string()).is_transient());
}

#[test]
fn server_side_statuses_are_transient() {
    for status in [429, 500, 502, 503, 504] {
        let err = EtymologyError::Api {
            status,
            message: "busy".to_string(),
        };
        assert!(err.is_transient(), "HTTP {status} should be transient");
    }
}

#[test]
fn client_side_statuses_are_not_transient() {
    for status in [400, 403, 404] {
        let err = EtymologyError::Api {
            status,
            message: "no".to_string(),
        };
        assert!(!err.is_transient(), "HTTP {status} should not be transient");
    }
}

#[test]
fn data_and_setup_errors_are_not_transient() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let errors = [
        EtymologyError::from(json),
        EtymologyError::MalformedResponse("no parse key".to_string()),
        EtymologyError::Configuration("bad".to_string()),
        EtymologyError::PoolExhausted {
            requested: 5,
            available: 2,
        },
        EtymologyError::Prefetch("gone".to_string()),
    ];
    for err in errors {
        assert!(!err.is_transient(), "{err} should not be transient");
    }
}

#[test]
fn io_errors_convert() {
    let err: EtymologyError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(err, EtymologyError::Io(_)));
    assert_eq!(err.to_string(), "I/O error: gone");
}

#[test]
fn messages_carry_their_details() {
    let api = EtymologyError::Api {
        status: 503,
        message: "service unavailable".to_string(),
    };
    assert_eq!(api.to_string(), "API error (503): service unavailable");

    let exhausted = EtymologyError::PoolExhausted {
        requested: 10,
        available: 3,
    };
    assert_eq!(
        exhausted.to_string(),
        "word pool exhausted: 10 words requested, 3 available"
    );

    let config = EtymologyError::Configuration("game.rounds must be at least 1".to_string());
    assert_eq!(
        config.to_string(),
        "configuration error: game.rounds must be at least 1"
    );
}
