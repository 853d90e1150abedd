//! Integration tests for decode failures.
//!
//! Every rejected input must yield an error and nothing else, with a
//! message that names the problem.

use ircproto::{Message, MessageParseError, MessageRef, Origin, PrefixError, ProtocolError};

#[test]
fn test_malformed_origins_surface_unchanged() {
    let cases = [
        (":x!x!foo@test PING :a\r\n", PrefixError::MultipleNickSeparators),
        (":x@y@z PING :a\r\n", PrefixError::MultipleHostSeparators),
        (":ni.ck!user@host PING :a\r\n", PrefixError::DottedNickname),
        (":us.er@host PING :a\r\n", PrefixError::DottedUsername),
        (":nick!user PING :a\r\n", PrefixError::InvalidMask),
    ];

    for (line, expected) in cases {
        let err = Message::decode(line).unwrap_err();
        assert_eq!(err, MessageParseError::Prefix(expected), "line {line:?}");
        assert_eq!(err.to_string(), expected.to_string());
        assert_eq!(MessageRef::decode(line).unwrap_err(), err);
    }
}

#[test]
fn test_reserved_characters_in_origin() {
    for mask in ["nick\x01!u@h", "nick!u\x7f@h", "nick!u@h\0st"] {
        let err = Origin::decode(mask).unwrap_err();
        assert!(
            matches!(err, PrefixError::ReservedCharacter { .. }),
            "mask {mask:?} gave {err:?}"
        );
        assert_eq!(err.to_string(), "reserved characters");
    }
}

#[test]
fn test_verb_errors() {
    let cases = [
        ("12 nick :x\r\n", MessageParseError::InvalidNumeric),
        ("1234 nick :x\r\n", MessageParseError::InvalidNumeric),
        (":server.test 00A nick\r\n", MessageParseError::InvalidNumeric),
        ("PRIV_MSG #a :x\r\n", MessageParseError::InvalidCommand),
        ("PING1 :x\r\n", MessageParseError::InvalidCommand),
        ("QUIT\r\n", MessageParseError::InvalidCommand),
        (":server.test  001 nick\r\n", MessageParseError::EmptyCommand),
    ];

    for (line, expected) in cases {
        assert_eq!(Message::decode(line), Err(expected), "line {line:?}");
    }
}

#[test]
fn test_verb_error_messages() {
    assert_eq!(
        Message::decode("12 x\r\n").unwrap_err().to_string(),
        "command type is not a valid numeric"
    );
    assert_eq!(
        Message::decode("P1NG x\r\n").unwrap_err().to_string(),
        "command type contains invalid characters"
    );
}

#[test]
fn test_termination_checked_after_clean_parse() {
    for line in [
        "PING :BOOP",
        "PING :BOOP\n",
        "PING :BOOP\r",
        "PRIVMSG #a b",
        ":server.test 001 TestUser :Hello",
    ] {
        assert_eq!(
            Message::decode(line),
            Err(MessageParseError::MissingCrlf),
            "line {line:?}"
        );
    }
}

#[test]
fn test_earlier_failure_wins_over_missing_crlf() {
    assert_eq!(
        Message::decode(":a!b!c@d PING"),
        Err(MessageParseError::Prefix(PrefixError::MultipleNickSeparators))
    );
}

#[test]
fn test_unterminated_prefix() {
    assert_eq!(
        Message::decode(":server.test\r\n"),
        Err(MessageParseError::UnterminatedOrigin)
    );
}

#[test]
fn test_protocol_error_keeps_line() {
    let err = ":x!x!foo@test PRIVMSG TestUser :Hello\r\n"
        .parse::<Message>()
        .unwrap_err();

    match &err {
        ProtocolError::InvalidMessage { string, cause } => {
            assert!(string.starts_with(":x!x!foo@test"));
            assert_eq!(
                cause,
                &MessageParseError::Prefix(PrefixError::MultipleNickSeparators)
            );
        }
        other => panic!("unexpected error {other:?}"),
    }

    let source = std::error::Error::source(&err).expect("cause is the source");
    assert_eq!(source.to_string(), "multiple nick/user separators");
}

#[test]
fn test_garbage_never_panics() {
    let inputs = [
        "",
        "\r\n",
        ":",
        ": ",
        ":\r\n",
        " \r\n",
        "\u{1F600} \r\n",
        ":\u{e9}\u{e9} PING :x\r\n",
        "PING :\u{1F600}\r\n",
        "PING \u{1F600}\u{1F600} a\r\n",
    ];

    for input in inputs {
        let _ = Message::decode(input);
        let _ = Origin::decode(input);
    }
}
