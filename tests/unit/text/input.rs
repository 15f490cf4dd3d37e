use super::*;

#[test]
fn alphabet_indices_follow_sheet_order() {
    for (idx, ch) in ALPHABET.chars().enumerate() {
        assert_eq!(glyph_index(ch), Some(idx));
    }
    assert_eq!(ALPHABET.chars().count(), 30);
    assert_eq!(glyph_index('A'), None);
    assert_eq!(glyph_index('?'), None);
}

#[test]
fn parse_accepts_supported_text() {
    for ok in ["", "level up!", "it's me.", "   "] {
        assert_eq!(RevealText::parse(ok).unwrap().as_str(), ok);
    }
}

#[test]
fn parse_rejects_uppercase_digits_and_unicode() {
    for bad in ["Level", "lv 99", "héllo", "tab\there", "what?"] {
        let err = RevealText::parse(bad).unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{bad:?}");
    }
}

#[test]
fn user_input_is_lowercased_first() {
    assert_eq!(
        RevealText::from_user_input("LEVEL Up!").unwrap().as_str(),
        "level up!"
    );
    assert!(RevealText::from_user_input("LV 2").is_err());
}

#[test]
fn default_is_level_up() {
    assert_eq!(RevealText::default().as_str(), DEFAULT_TEXT);
    let parsed: RevealText = "go".parse().unwrap();
    assert_eq!(parsed.to_string(), "go");
}

#[test]
fn syntax_error_message_names_every_allowed_symbol() {
    for sym in ["alpha", "\".\"", "\"!\"", "\"'\"", "\" \""] {
        assert!(SYNTAX_ERROR_MESSAGE.contains(sym), "{sym}");
    }
    assert!(SYNTAX_ERROR_MESSAGE.starts_with("Syntax Error:"));
}
