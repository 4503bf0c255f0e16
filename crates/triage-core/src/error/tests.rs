use super::*;

#[test]
fn test_external_call_message() {
    let error = Error::external("read_email", "file not found: inbox/a.txt");

    assert_eq!(
        error.to_string(),
        "external call failed for read_email: file not found: inbox/a.txt"
    );
    let msg = error.user_message();
    assert!(msg.contains("read_email"));
    assert!(error.suggestion().unwrap().contains("rerun"));
}

#[test]
fn test_configuration_message() {
    let error = Error::Configuration("no transition rule for stage ARCHIVE_EMAIL".to_string());

    assert!(error.user_message().contains("ARCHIVE_EMAIL"));
    assert!(error.suggestion().unwrap().contains("transition rule"));
}

#[test]
fn test_invariant_violation_has_no_suggestion() {
    let error = Error::InvariantViolation("no current file to analyze".to_string());
    assert!(error.suggestion().is_none());
}

#[test]
fn test_format_error_for_cli() {
    let error = Error::InvalidInitialState("either goal or workflow must be provided".to_string());

    let output = format_error_for_cli(&error);
    assert!(output.contains("Cannot start the workflow"));
    assert!(output.contains("goal or a workflow"));
}
