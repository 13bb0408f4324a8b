use super::*;
use crate::SessionError;
use chatwidget_common::{Author, ValidationError};

fn identified() -> Session {
    let mut session = Session::new();
    session
        .identify("Jean Dupont", Some("+243 810 000 000"), None)
        .unwrap();
    session
}

#[test]
fn new_session_is_anonymous_and_closed() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::Anonymous);
    assert!(!session.is_open());
    assert!(!session.is_chatting());
    assert!(session.user_info().is_none());
    assert_eq!(session.message_count(), 0);
    assert!(session.id().as_str().starts_with("session_"));
}

#[test]
fn identify_sets_user_info() {
    let mut session = Session::new();
    let info = session
        .identify("  Jean Dupont ", Some("+243 810 000 000"), Some(""))
        .unwrap();
    assert_eq!(info.name, "Jean Dupont");
    assert_eq!(info.phone.as_deref(), Some("+243 810 000 000"));
    assert_eq!(info.email, None);
    assert_eq!(session.phase(), Phase::Identified);
    assert!(session.is_chatting());
}

#[test]
fn blank_name_keeps_session_anonymous() {
    let mut session = Session::new();
    for name in ["", "   "] {
        let err = session.identify(name, None, None).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::EmptyField("name"))
        ));
    }
    assert_eq!(session.phase(), Phase::Anonymous);
    assert!(session.user_info().is_none());
}

#[test]
fn identify_only_once() {
    let mut session = identified();
    let err = session.identify("Autre", None, None).unwrap_err();
    assert!(matches!(err, SessionError::AlreadyIdentified));
    assert_eq!(session.user_info().unwrap().name, "Jean Dupont");
}

#[test]
fn identify_after_end_is_rejected() {
    let mut session = Session::new();
    session.mark_ended();
    let err = session.identify("Jean", None, None).unwrap_err();
    assert!(matches!(err, SessionError::Ended));
}

#[test]
fn record_requires_identification() {
    let mut session = Session::new();
    let err = session.record_message("Bonjour", Author::User).unwrap_err();
    assert!(matches!(err, SessionError::NotIdentified));
    assert_eq!(session.message_count(), 0);
}

#[test]
fn first_message_activates_session() {
    let mut session = identified();
    session.record_message("Bonjour Jean", Author::Bot).unwrap();
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn log_is_append_only_in_order() {
    let mut session = identified();
    session.record_message("Bonjour", Author::Bot).unwrap();
    session.record_message("Quels sont vos prix?", Author::User).unwrap();
    session.record_message("Nos prix...", Author::Bot).unwrap();

    let texts: Vec<_> = session.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Bonjour", "Quels sont vos prix?", "Nos prix..."]);
    let authors: Vec<_> = session.messages().iter().map(|m| m.author).collect();
    assert_eq!(authors, [Author::Bot, Author::User, Author::Bot]);
    assert!(session
        .messages()
        .windows(2)
        .all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn record_after_end_is_rejected() {
    let mut session = identified();
    session.record_message("Bonjour", Author::Bot).unwrap();
    session.mark_ended();
    let err = session.record_message("encore", Author::User).unwrap_err();
    assert!(matches!(err, SessionError::Ended));
    assert_eq!(session.message_count(), 1);
}

#[test]
fn warned_session_reactivates_on_user_message() {
    let mut session = identified();
    session.record_message("Bonjour", Author::Bot).unwrap();
    assert!(session.mark_warned());
    assert_eq!(session.phase(), Phase::Warned);

    session.record_message("avertissement", Author::Bot).unwrap();
    assert_eq!(session.phase(), Phase::Warned);

    session.record_message("je suis là", Author::User).unwrap();
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn touch_clears_warning() {
    let mut session = identified();
    assert!(session.mark_warned());
    session.touch().unwrap();
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn touch_before_identify_fails() {
    let mut session = Session::new();
    assert!(matches!(session.touch(), Err(SessionError::NotIdentified)));
}

#[test]
fn mark_warned_requires_live_identified_session() {
    let mut session = Session::new();
    assert!(!session.mark_warned());

    let mut session = identified();
    assert!(session.mark_warned());
    assert!(!session.mark_warned());

    session.mark_ended();
    assert!(!session.mark_warned());
    assert_eq!(session.phase(), Phase::Ended);
}

#[test]
fn mark_ended_is_idempotent() {
    let mut session = identified();
    assert!(session.mark_ended());
    assert!(!session.mark_ended());
    assert!(session.ended());
    assert!(!session.is_chatting());
}

#[test]
fn end_report_snapshots_conversation() {
    let mut session = identified();
    session.record_message("Bonjour", Author::Bot).unwrap();
    session.record_message("Merci", Author::User).unwrap();
    session.mark_ended();

    let report = session.end_report(true);
    assert_eq!(&report.session_id, session.id());
    assert_eq!(report.messages.len(), 2);
    assert_eq!(report.user_info.as_ref().unwrap().name, "Jean Dupont");
    assert!(report.auto_ended);
}

#[test]
fn set_open_reports_changes() {
    let mut session = Session::new();
    assert!(session.set_open(true));
    assert!(!session.set_open(true));
    assert!(session.is_open());
    assert!(session.set_open(false));
}
