//! Tests for the feedback TUI application model.

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use camino::Utf8PathBuf;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};
use unicode_width::UnicodeWidthStr;

use super::*;
use crate::feedback::FeedbackPayload;
use crate::feedback::storage::load_items;
use crate::feedback::test_support::store_with_reviews;
use crate::form::TEXT_TOO_SHORT_MESSAGE;

const LONG_REVIEW: &str = "this is a long enough review";

/// App with two stored reviews; "second review here" (id 2) is listed first.
#[fixture]
fn app() -> FeedbackApp {
    FeedbackApp::new(store_with_reviews(&[
        ("first review text", 4),
        ("second review here", 8),
    ]))
}

fn type_text(app: &mut FeedbackApp, text: &str) {
    for character in text.chars() {
        app.handle_message(&AppMsg::InsertChar(character));
    }
}

fn press(app: &mut FeedbackApp, code: KeyCode) -> Option<Cmd> {
    app.update(Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    }))
}

#[rstest]
fn typed_keys_reach_the_form(mut app: FeedbackApp) {
    press(&mut app, KeyCode::Char('h'));
    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Char('q'));

    assert_eq!(app.form().text(), "hiq");
    assert_eq!(app.form().validation_message(), Some(TEXT_TOO_SHORT_MESSAGE));
}

#[rstest]
fn backspace_removes_last_character(mut app: FeedbackApp) {
    type_text(&mut app, "abc");

    app.handle_message(&AppMsg::Backspace);

    assert_eq!(app.form().text(), "ab");
}

#[rstest]
fn enter_submits_new_feedback(mut app: FeedbackApp) {
    type_text(&mut app, LONG_REVIEW);
    app.handle_message(&AppMsg::RatingDigit('4'));

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store().len(), 3);
    let newest = app.store().items().first().map(|item| item.payload());
    assert_eq!(newest, Some(FeedbackPayload::new(LONG_REVIEW, 4)));
    assert_eq!(app.form().text(), "");
    assert_eq!(app.form().rating(), 0);
    assert_eq!(app.selected_rating(), 0);
    assert_eq!(app.status_message(), Some("Feedback submitted"));
}

#[rstest]
fn short_submission_is_rejected(mut app: FeedbackApp) {
    type_text(&mut app, "short");

    app.handle_message(&AppMsg::Submit);

    assert_eq!(app.store().len(), 2);
    assert_eq!(app.form().text(), "short");
    assert_eq!(app.form().validation_message(), Some(TEXT_TOO_SHORT_MESSAGE));
}

#[rstest]
#[case(AppMsg::RatingDigit('0'), 10)]
#[case(AppMsg::RatingDigit('7'), 7)]
#[case(AppMsg::RatingNext, 1)]
#[case(AppMsg::RatingPrevious, 1)]
fn rating_messages_update_form(mut app: FeedbackApp, #[case] msg: AppMsg, #[case] expected: u8) {
    app.handle_message(&msg);

    assert_eq!(app.form().rating(), expected);
    assert_eq!(app.selected_rating(), expected);
}

#[rstest]
fn cursor_navigation_stays_in_bounds(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::CursorDown);
    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 1);

    app.handle_message(&AppMsg::CursorUp);
    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
fn edit_loads_selected_item_into_form(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::FocusList);

    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.editing_id(), Some(2));
    assert_eq!(app.form().text(), "second review here");
    assert_eq!(app.form().rating(), 8);
    assert_eq!(app.selected_rating(), 8);
    assert!(app.form().is_submit_enabled());
    assert_eq!(app.focus(), Focus::Text);
}

#[rstest]
fn submit_while_editing_updates_item(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::EditSelected);
    type_text(&mut app, " and more");

    app.handle_message(&AppMsg::Submit);

    assert_eq!(app.store().len(), 2);
    let updated = app.store().get(2).map(|item| item.text.clone());
    assert_eq!(updated.as_deref(), Some("second review here and more"));
    assert_eq!(app.editing_id(), None);
    assert_eq!(app.status_message(), Some("Feedback #2 updated"));
    assert_eq!(app.form().text(), "");
}

#[rstest]
fn reactive_rule_fires_once_per_revision(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::EditSelected);
    type_text(&mut app, "!");

    app.handle_message(&AppMsg::CursorDown);
    app.handle_message(&AppMsg::FocusNext);

    assert_eq!(app.form().text(), "second review here!");
}

#[rstest]
fn delete_removes_item_and_clamps_cursor(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::CursorDown);

    app.handle_message(&AppMsg::DeleteSelected);

    assert_eq!(app.store().len(), 1);
    assert_eq!(app.cursor_position(), 0);
    assert!(app.store().get(1).is_none());
}

#[rstest]
fn deleting_edited_item_leaves_draft(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::EditSelected);

    app.handle_message(&AppMsg::DeleteSelected);

    assert_eq!(app.editing_id(), None);
    assert_eq!(app.form().text(), "second review here");
}

#[rstest]
fn escape_in_list_cancels_edit(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::EditSelected);
    app.handle_message(&AppMsg::FocusList);

    let cmd = press(&mut app, KeyCode::Esc);

    assert!(cmd.is_none());
    assert_eq!(app.editing_id(), None);
}

#[rstest]
fn escape_in_list_quits_when_not_editing(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::FocusList);

    assert!(press(&mut app, KeyCode::Esc).is_some());
}

#[rstest]
fn escape_in_text_returns_to_list(mut app: FeedbackApp) {
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.focus(), Focus::List);
}

#[rstest]
fn tab_cycles_focus(mut app: FeedbackApp) {
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Rating);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::List);
}

#[rstest]
fn any_key_closes_help(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Char('x'));

    assert!(!app.show_help);
    assert_eq!(app.form().text(), "");
}

#[rstest]
fn submission_is_saved_to_store_path(app: FeedbackApp) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("feedback.json"))
        .expect("temp path is UTF-8");
    let mut app_with_path = app.with_store_path(path.clone());
    type_text(&mut app_with_path, LONG_REVIEW);

    app_with_path.handle_message(&AppMsg::Submit);

    let saved = load_items(&path).expect("load saved items");
    assert_eq!(saved.len(), 3);
    assert!(app_with_path.error_message().is_none());
}

#[rstest]
fn view_shows_card_stats_and_list(app: FeedbackApp) {
    let view = app.view();

    assert!(view.contains("How would you rate your service with us?"));
    assert!(view.contains("2 reviews | Average rating: 6.0"));
    assert!(view.contains("( 8) second review here"));
}

#[rstest]
fn view_fills_terminal_exactly(mut app: FeedbackApp) {
    app.handle_message(&AppMsg::WindowResized {
        width: 40,
        height: 12,
    });

    let view = app.view();

    assert_eq!(view.lines().count(), 12);
    assert!(view.lines().all(|line| line.width() == 39));
}
