use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Comments: 0-15
    assert_eq!(RawTag::BlockComment as u8, 0);
    assert_eq!(RawTag::LineComment as u8, 1);

    // Literals: 16-31
    assert_eq!(RawTag::String as u8, 16);
    assert_eq!(RawTag::Char as u8, 17);

    // Trivia: 32-47
    assert_eq!(RawTag::Newline as u8, 32);
    assert_eq!(RawTag::Text as u8, 33);

    // Errors: 240-254
    assert_eq!(RawTag::UnterminatedComment as u8, 240);
    assert_eq!(RawTag::UnterminatedChar as u8, 242);

    // Control: 255
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Classification ===

const ALL: [RawTag; 10] = [
    RawTag::BlockComment,
    RawTag::LineComment,
    RawTag::String,
    RawTag::Char,
    RawTag::Newline,
    RawTag::Text,
    RawTag::UnterminatedComment,
    RawTag::UnterminatedString,
    RawTag::UnterminatedChar,
    RawTag::Eof,
];

#[test]
fn unterminated_classification() {
    let errors: Vec<RawTag> = ALL.into_iter().filter(|t| t.is_unterminated()).collect();
    assert_eq!(
        errors,
        vec![
            RawTag::UnterminatedComment,
            RawTag::UnterminatedString,
            RawTag::UnterminatedChar,
        ]
    );
}

// === RawToken ===

#[test]
fn raw_token_is_copy() {
    let tok = RawToken {
        tag: RawTag::LineComment,
        len: 8,
    };
    let tok2 = tok; // Copy
    assert_eq!(tok, tok2);
}
