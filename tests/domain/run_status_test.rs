use path_lemmatizer::domain::RunStatus;

#[test]
fn given_status_when_formatting_then_uses_lowercase_wire_value() {
    assert_eq!(RunStatus::Success.to_string(), "success");
    assert_eq!(RunStatus::Error.as_str(), "error");
}

#[test]
fn given_stored_value_when_parsing_then_returns_status() {
    assert_eq!("success".parse::<RunStatus>(), Ok(RunStatus::Success));
    assert_eq!("error".parse::<RunStatus>(), Ok(RunStatus::Error));
}

#[test]
fn given_unknown_value_when_parsing_then_returns_error() {
    assert!("progress".parse::<RunStatus>().is_err());
}
