use alehouse::{AlehouseError, ErrorClass, Result, ValidationError};

#[test]
fn test_error_display() {
    let err = AlehouseError::NotFound("abc".to_string());
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_validation_message_is_verbatim() {
    let err = AlehouseError::validation("beer ID is empty");
    assert_eq!(err.to_string(), "beer ID is empty");
}

#[test]
fn test_validation_error_converts() {
    let err: AlehouseError = ValidationError::new("page number less than one").into();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "page number less than one");
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(AlehouseError::Storage("disk full".to_string()))
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn only_validation_is_invalid_argument() {
    assert_eq!(
        AlehouseError::validation("bad").class(),
        ErrorClass::InvalidArgument
    );

    let internal = [
        AlehouseError::NotFound("id".into()),
        AlehouseError::Storage("something unexpected happened".into()),
        AlehouseError::Transport("connection reset".into()),
        AlehouseError::Configuration("missing".into()),
        AlehouseError::Io(std::io::Error::other("io")),
    ];
    for err in internal {
        assert_eq!(err.class(), ErrorClass::Internal, "{err}");
        assert!(!err.is_validation());
    }
}

#[test]
fn json_errors_are_internal() {
    let err: AlehouseError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
    assert_eq!(err.class(), ErrorClass::Internal);
}
