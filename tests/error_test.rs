use tempconv::{Result, TempconvError, TemperatureUnit, UnitRole};

#[test]
fn test_error_display() {
    let err = TempconvError::InvalidUnit("X".to_string());
    assert!(err.to_string().contains("X"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(TempconvError::Timeout)
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Client error classification
// ============================================================================

#[test]
fn client_errors() {
    assert!(TempconvError::InvalidUnit("X".into()).is_client_error());
    assert!(TempconvError::UnsupportedUnit(UnitRole::Destination).is_client_error());
    assert!(TempconvError::InvalidInput("unsupported source unit".into()).is_client_error());
}

#[test]
fn service_errors() {
    assert!(!TempconvError::Transport("connection refused".into()).is_client_error());
    assert!(!TempconvError::Timeout.is_client_error());
    assert!(
        !TempconvError::Rpc {
            code: 13,
            message: "internal".into()
        }
        .is_client_error()
    );
    assert!(!TempconvError::Configuration("bad port".into()).is_client_error());
}

#[test]
fn unit_codes_parse_before_any_call() {
    let err = "X".parse::<TemperatureUnit>().unwrap_err();
    assert!(matches!(err, TempconvError::InvalidUnit(ref code) if code == "X"));
    assert_eq!("k".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
}
