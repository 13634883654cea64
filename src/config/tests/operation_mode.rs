//! Tests for operation mode determination.

use rstest::rstest;

use crate::FeedbackConfig;
use crate::config::OperationMode;

#[rstest]
fn interactive_when_no_fields_set() {
    let config = FeedbackConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::Interactive,
        "should be Interactive when no fields are set"
    );
}

#[rstest]
fn submit_when_text_present() {
    let config = FeedbackConfig {
        text: Some("this is a long enough review".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Submit);
}

#[rstest]
fn list_when_requested() {
    let config = FeedbackConfig {
        list: true,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::List);
}

#[rstest]
fn text_takes_precedence_over_list() {
    let config = FeedbackConfig {
        text: Some("this is a long enough review".to_owned()),
        list: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Submit,
        "text should take precedence over list"
    );
}

#[rstest]
fn display_options_do_not_change_mode() {
    let config = FeedbackConfig {
        reverse: true,
        telemetry: true,
        store_path: Some("feedback.json".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Interactive);
}
