use super::*;

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(err.to_string(), "I/O error: pipe closed");
}

#[test]
fn test_app_result_propagates_with_question_mark() {
    fn inner() -> AppResult<u32> {
        Err(AppError::InvalidInput("unknown command".into()))
    }

    fn outer() -> AppResult<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    let err = outer().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(err.exit_code(), 2);
}
