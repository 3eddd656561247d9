// state machine tests for the tui app (no terminal, no network)

use profcheck::tui::{App, DETECT_DEBOUNCE, Lane, LogLevel, Tab};
use profcheck::{Classification, Detection, Error, Language, LlmVerification};
use std::time::Duration;

fn app() -> App {
    App::new("http://localhost:9")
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.insert_char(c);
    }
}

fn clean_result() -> Classification {
    Classification {
        is_profane: false,
        category: "clean".to_string(),
        confidence: 98.2,
    }
}

fn llm_result() -> LlmVerification {
    LlmVerification {
        is_profane: false,
        category: "clean".to_string(),
        confidence: 95.0,
        reasoning: "ordinary greeting".to_string(),
    }
}

fn json_error() -> Error {
    Error::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
}

#[test]
fn whitespace_only_submit_sets_local_error() {
    let mut app = app();
    type_str(&mut app, "   ");

    assert_eq!(app.submit(), None);
    assert_eq!(
        app.validation_error.as_deref(),
        Some("Please enter a word to check")
    );
    assert_eq!(app.check, Lane::Idle);
}

#[test]
fn submit_trims_and_arms_the_check_lane() {
    let mut app = app();
    type_str(&mut app, "  hello ");

    assert_eq!(app.submit(), Some("hello".to_string()));
    assert_eq!(app.check, Lane::Busy);
    assert_eq!(app.llm, Lane::Idle);
    assert!(app.validation_error.is_none());
}

#[test]
fn new_submission_discards_llm_verification() {
    let mut app = app();
    type_str(&mut app, "hello");
    app.submit().unwrap();
    app.set_check_result(clean_result());
    app.begin_verify();
    app.set_llm_result(llm_result());
    assert!(app.llm.result().is_some());

    // the old verification was computed against the prior input
    type_str(&mut app, " again");
    app.submit().unwrap();
    assert_eq!(app.llm, Lane::Idle);
    assert_eq!(app.check, Lane::Busy);
}

#[test]
fn switch_tab_resets_everything() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();
    app.cycle_language();
    type_str(&mut app, "hello");
    app.submit().unwrap();
    app.set_check_result(clean_result());
    app.set_detection(Detection {
        language: Some(Language::English),
        raw: "english".to_string(),
    });
    app.begin_verify();
    app.set_llm_result(llm_result());

    app.switch_tab(Tab::Basic);
    assert_eq!(app.check, Lane::Idle);
    assert_eq!(app.llm, Lane::Idle);
    assert_eq!(app.detected_language, None);
    assert_eq!(app.selected_language, None);
    assert!(!app.auto_detect);
    assert!(app.pending_detection.is_none());
}

#[test]
fn detection_needs_five_settled_chars() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();

    type_str(&mut app, "hell");
    assert!(app.pending_detection.is_none());

    app.insert_char('o');
    let pending = app.pending_detection.as_ref().unwrap();
    assert_eq!(pending.text, "hello");

    // dropping below the threshold clears detected state, no request
    app.set_detection(Detection {
        language: Some(Language::English),
        raw: "english".to_string(),
    });
    app.delete_char();
    assert!(app.pending_detection.is_none());
    assert_eq!(app.detected_language, None);
}

#[test]
fn detection_debounce_keeps_only_the_latest_input() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();

    type_str(&mut app, "hello");
    type_str(&mut app, " world  ");

    // trailing whitespace never reaches the wire
    assert_eq!(app.pending_detection.as_ref().unwrap().text, "hello world");

    // still inside the debounce window
    assert_eq!(app.take_due_detection(), None);
    assert!(app.pending_detection.is_some());

    std::thread::sleep(DETECT_DEBOUNCE + Duration::from_millis(100));
    assert_eq!(app.take_due_detection(), Some("hello world".to_string()));
    assert!(app.pending_detection.is_none());
}

#[test]
fn toggling_auto_detect_off_clears_detected_language() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();
    type_str(&mut app, "hello");
    app.set_detection(Detection {
        language: Some(Language::Indic),
        raw: "indic".to_string(),
    });

    app.toggle_auto_detect();
    assert!(!app.auto_detect);
    assert_eq!(app.detected_language, None);
    assert!(app.pending_detection.is_none());
}

#[test]
fn unrecognized_detection_clears_without_error() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();
    app.set_detection(Detection {
        language: Some(Language::English),
        raw: "english".to_string(),
    });

    app.set_detection(Detection {
        language: None,
        raw: "spanish".to_string(),
    });
    assert_eq!(app.detected_language, None);
    assert_eq!(app.check, Lane::Idle);
}

#[test]
fn effective_language_prefers_detected_while_auto_detect_is_on() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);

    assert_eq!(app.effective_language(), None);

    app.cycle_language();
    assert_eq!(app.selected_language, Some(Language::English));
    assert_eq!(app.effective_language(), Some(Language::English));

    app.toggle_auto_detect();
    type_str(&mut app, "hello");
    app.set_detection(Detection {
        language: Some(Language::Indic),
        raw: "indic".to_string(),
    });
    assert_eq!(app.effective_language(), Some(Language::Indic));

    // no detected value: fall back to the manual selection
    app.set_detection(Detection {
        language: None,
        raw: "spanish".to_string(),
    });
    assert_eq!(app.effective_language(), Some(Language::English));
}

#[test]
fn clear_resets_input_and_derived_state() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();
    type_str(&mut app, "hello");
    app.submit().unwrap();
    app.set_check_result(clean_result());
    app.set_detection(Detection {
        language: Some(Language::English),
        raw: "english".to_string(),
    });

    app.clear();
    assert!(app.input.is_empty());
    assert_eq!(app.check, Lane::Idle);
    assert_eq!(app.llm, Lane::Idle);
    assert_eq!(app.detected_language, None);
    assert!(app.pending_detection.is_none());
    assert!(app.validation_error.is_none());
    // the toggle is a user setting, not derived state
    assert!(app.auto_detect);
}

#[test]
fn api_error_message_is_shown_verbatim() {
    let mut app = app();
    type_str(&mut app, "hello");
    app.submit().unwrap();

    app.fail_check(Error::Api("unsupported language".to_string()));
    assert_eq!(app.check.error(), Some("unsupported language"));
}

#[test]
fn transport_fault_shows_generic_message_and_logs_detail() {
    let mut app = app();
    type_str(&mut app, "hello");
    app.submit().unwrap();

    app.fail_check(json_error());
    assert_eq!(
        app.check.error(),
        Some("Failed to check word. Please try again.")
    );
    assert!(app.logs.iter().any(|e| e.message.contains("JSON error")));
}

#[test]
fn llm_failure_does_not_touch_the_primary_lane() {
    let mut app = app();
    type_str(&mut app, "hello");
    app.submit().unwrap();
    app.set_check_result(clean_result());

    app.begin_verify();
    app.fail_llm(json_error());
    assert_eq!(
        app.llm.error(),
        Some("Failed to verify with LLM. Please try again.")
    );
    assert!(app.check.result().is_some());
}

#[test]
fn verify_needs_a_resolved_check() {
    let mut app = app();
    assert_eq!(app.verify_target(), None);

    type_str(&mut app, "hello");
    app.submit().unwrap();
    assert_eq!(app.verify_target(), None);

    app.set_check_result(clean_result());
    assert_eq!(app.verify_target(), Some("hello".to_string()));

    app.begin_verify();
    assert_eq!(app.verify_target(), None);
}

#[test]
fn multibyte_input_edits_stay_on_char_boundaries() {
    let mut app = app();
    type_str(&mut app, "नमस्ते");
    assert_eq!(app.input, "नमस्ते");

    app.delete_char();
    assert_eq!(app.input, "नमस्त");

    app.move_cursor_left();
    app.insert_char('स');
    assert_eq!(app.input, "नमस्सत");

    // cursor is mid-string after the insert; stepping right lands on
    // the end, where forward delete is a no-op
    app.move_cursor_right();
    app.delete_char_forward();
    assert_eq!(app.input, "नमस्सत");

    app.move_cursor_start();
    app.delete_char_forward();
    assert_eq!(app.input, "मस्सत");

    assert_eq!(app.submit(), Some("मस्सत".to_string()));
}

#[test]
fn multibyte_input_schedules_detection() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();

    type_str(&mut app, "नमस्ते");
    assert_eq!(app.pending_detection.as_ref().unwrap().text, "नमस्ते");
}

#[test]
fn log_scroll_follows_the_bottom_of_the_viewport() {
    let mut app = app();
    for i in 0..30 {
        app.log(LogLevel::Info, format!("entry {i}"));
    }

    // a new entry always requests the bottom
    assert_eq!(app.log_scroll, app.logs.len());

    // render-side clamp anchors to the last full page
    let len = app.logs.len();
    app.clamp_log_scroll(8);
    assert_eq!(app.log_scroll, len - 8);

    // viewport taller than the log: no scrolling at all
    app.clamp_log_scroll(len + 10);
    assert_eq!(app.log_scroll, 0);
}

#[test]
fn detection_failure_only_logs() {
    let mut app = app();
    app.switch_tab(Tab::Transformer);
    app.toggle_auto_detect();
    type_str(&mut app, "hello");
    app.submit().unwrap();
    app.set_check_result(clean_result());

    app.fail_detection(json_error());
    assert_eq!(app.detected_language, None);
    // other lanes are untouched
    assert!(app.check.result().is_some());
    assert_eq!(app.llm, Lane::Idle);
}
