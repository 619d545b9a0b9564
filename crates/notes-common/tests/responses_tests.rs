use notes_common::responses::*;

#[test]
fn first_matching_rule_wins() {
    let script = ChatScript::default();
    assert!(script
        .reply_to("Any good DBMS notes?")
        .unwrap()
        .starts_with("I found several DBMS notes"));
    assert!(script
        .reply_to("please summarize this")
        .unwrap()
        .starts_with("I can summarize"));
    // "database" and "exam" both match; the database rule comes first.
    assert!(script
        .reply_to("database exam tomorrow")
        .unwrap()
        .starts_with("I found several DBMS notes"));
}

#[test]
fn unmatched_message_gets_fallback() {
    let script = ChatScript::default();
    assert_eq!(script.reply_to("hello"), Some(CHAT_FALLBACK));
}

#[test]
fn blank_message_gets_no_reply() {
    let script = ChatScript::default();
    assert_eq!(script.reply_to("   "), None);
}

#[test]
fn custom_script() {
    let script = ChatScript::new(&[(&["Hi"], "hey")], "?");
    assert_eq!(script.reply_to("HI there"), Some("hey"));
    assert_eq!(script.reply_to("yo"), Some("?"));
}

#[test]
fn chat_log_starts_with_greeting_and_skips_blank_lines() {
    let mut log = ChatLog::default();
    assert_eq!(log.messages(), &[ChatMessage::bot(CHAT_GREETING)]);
    assert!(!log.push_user(" "));
    assert!(log.push_user("exam tips"));
    log.push_bot("ok");
    assert_eq!(log.messages().len(), 3);
    assert_eq!(log.messages()[1].role, ChatRole::User);
}

#[test]
fn canned_payloads() {
    let summary = canned_summary();
    assert_eq!(summary.key_points.len(), 5);
    assert!(SCANNED_TEXT.starts_with("Database Management Systems"));
}
