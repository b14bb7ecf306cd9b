use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source and collect all tokens (excluding Eof).
fn scan(source: &[u8]) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return tags only.
fn scan_tags(source: &[u8]) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and pair each tag with its text.
fn scan_texts(source: &[u8]) -> Vec<(RawTag, &[u8])> {
    let mut pos = 0usize;
    scan(source)
        .into_iter()
        .map(|tok| {
            let end = pos + tok.len as usize;
            let text = &source[pos..end];
            pos = end;
            (tok.tag, text)
        })
        .collect()
}

// ─── Basics ────────────────────────────────────────────────────

#[test]
fn empty_source_is_eof() {
    assert!(scan(b"").is_empty());
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new(b"");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn plain_code_is_one_text_run() {
    assert_eq!(
        scan_texts(b"int x = 1;"),
        vec![(RawTag::Text, &b"int x = 1;"[..])]
    );
}

#[test]
fn newlines_split_text() {
    assert_eq!(
        scan_tags(b"a\nb\n"),
        vec![RawTag::Text, RawTag::Newline, RawTag::Text, RawTag::Newline]
    );
}

#[test]
fn carriage_return_is_text() {
    assert_eq!(
        scan_texts(b"a\r\n"),
        vec![(RawTag::Text, &b"a\r"[..]), (RawTag::Newline, &b"\n"[..])]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn line_comment_excludes_newline() {
    assert_eq!(
        scan_texts(b"x // note\ny"),
        vec![
            (RawTag::Text, &b"x "[..]),
            (RawTag::LineComment, &b"// note"[..]),
            (RawTag::Newline, &b"\n"[..]),
            (RawTag::Text, &b"y"[..]),
        ]
    );
}

#[test]
fn line_comment_at_eof() {
    assert_eq!(scan_texts(b"//"), vec![(RawTag::LineComment, &b"//"[..])]);
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan_texts(b"/* a\nb */x"),
        vec![
            (RawTag::BlockComment, &b"/* a\nb */"[..]),
            (RawTag::Text, &b"x"[..]),
        ]
    );
}

#[test]
fn block_comment_closes_at_first_closer() {
    assert_eq!(
        scan_texts(b"/* a */ b */"),
        vec![
            (RawTag::BlockComment, &b"/* a */"[..]),
            (RawTag::Text, &b" b *"[..]),
            (RawTag::Text, &b"/"[..]),
        ]
    );
}

#[test]
fn block_opener_star_does_not_close() {
    // `/*/` is an opener followed by `/`, not a complete comment.
    assert_eq!(
        scan_texts(b"/*/ x */"),
        vec![(RawTag::BlockComment, &b"/*/ x */"[..])]
    );
}

#[test]
fn shortest_block_comment() {
    assert_eq!(scan_tags(b"/**/"), vec![RawTag::BlockComment]);
}

#[test]
fn block_comment_inside_line_comment() {
    assert_eq!(scan_tags(b"// /* x"), vec![RawTag::LineComment]);
}

#[test]
fn line_comment_inside_block_comment() {
    assert_eq!(scan_tags(b"/* // */"), vec![RawTag::BlockComment]);
}

#[test]
fn unterminated_block_comment_is_opener_only() {
    assert_eq!(
        scan_texts(b"/* abc"),
        vec![
            (RawTag::UnterminatedComment, &b"/*"[..]),
            (RawTag::Text, &b" abc"[..]),
        ]
    );
}

#[test]
fn lone_slash_is_text() {
    assert_eq!(
        scan_texts(b"a / b"),
        vec![
            (RawTag::Text, &b"a "[..]),
            (RawTag::Text, &b"/"[..]),
            (RawTag::Text, &b" b"[..]),
        ]
    );
}

#[test]
fn trailing_slash_is_text() {
    assert_eq!(scan_texts(b"/"), vec![(RawTag::Text, &b"/"[..])]);
}

// ─── Literals ──────────────────────────────────────────────────

#[test]
fn string_hides_comment_openers() {
    assert_eq!(
        scan_texts(b"s = \"/* not // a comment\";"),
        vec![
            (RawTag::Text, &b"s = "[..]),
            (RawTag::String, &b"\"/* not // a comment\""[..]),
            (RawTag::Text, &b";"[..]),
        ]
    );
}

#[test]
fn string_with_escaped_quote() {
    assert_eq!(
        scan_texts(br#""a\"b" // c"#),
        vec![
            (RawTag::String, &br#""a\"b""#[..]),
            (RawTag::Text, &b" "[..]),
            (RawTag::LineComment, &b"// c"[..]),
        ]
    );
}

#[test]
fn string_with_escaped_backslash() {
    assert_eq!(
        scan_tags(br#""\\" x"#),
        vec![RawTag::String, RawTag::Text]
    );
}

#[test]
fn empty_literals() {
    assert_eq!(scan_tags(b"\"\"''"), vec![RawTag::String, RawTag::Char]);
}

#[test]
fn char_literal_may_hold_several_characters() {
    assert_eq!(
        scan_texts(b"'ab' '/*'"),
        vec![
            (RawTag::Char, &b"'ab'"[..]),
            (RawTag::Text, &b" "[..]),
            (RawTag::Char, &b"'/*'"[..]),
        ]
    );
}

#[test]
fn other_quote_inside_literal_is_content() {
    assert_eq!(scan_tags(b"\"it's\""), vec![RawTag::String]);
    assert_eq!(scan_tags(b"'say \"hi\"'"), vec![RawTag::Char]);
}

#[test]
fn multibyte_literal_content() {
    let source = "'\u{20AC}' \"\u{1F600}\"";
    assert_eq!(
        scan_tags(source.as_bytes()),
        vec![RawTag::Char, RawTag::Text, RawTag::String]
    );
}

#[test]
fn string_broken_by_newline_is_unterminated() {
    assert_eq!(
        scan_texts(b"\"abc\n\""),
        vec![
            (RawTag::UnterminatedString, &b"\""[..]),
            (RawTag::Text, &b"abc"[..]),
            (RawTag::Newline, &b"\n"[..]),
            (RawTag::UnterminatedString, &b"\""[..]),
        ]
    );
}

#[test]
fn escaped_newline_does_not_continue_string() {
    assert_eq!(
        scan_tags(b"\"a\\\nb\""),
        vec![
            RawTag::UnterminatedString,
            RawTag::Text,
            RawTag::Newline,
            RawTag::Text,
            RawTag::UnterminatedString,
        ]
    );
}

#[test]
fn backslash_at_eof_is_unterminated() {
    assert_eq!(scan_tags(b"'\\")[0], RawTag::UnterminatedChar);
}

#[test]
fn lone_quote_at_eof() {
    assert_eq!(scan_texts(b"'"), vec![(RawTag::UnterminatedChar, &b"'"[..])]);
    assert_eq!(
        scan_texts(b"\""),
        vec![(RawTag::UnterminatedString, &b"\""[..])]
    );
}

// ─── skip_rest ─────────────────────────────────────────────────

#[test]
fn skip_rest_consumes_remaining_bytes() {
    let buf = SourceBuffer::new(b"/* x\n// y");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::UnterminatedComment);
    assert_eq!(scanner.pos(), 2);
    assert_eq!(scanner.skip_rest(), 7);
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}

// ─── Properties ────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources: [&[u8]; 8] = [
        b"",
        b"x",
        b"int main() { return 0; } // done",
        b"/* a\n * b\n */\nint x;",
        b"\"str\" 'c' \"/*\"",
        b"/* unterminated",
        b"\"broken\n'also",
        b"a\0b /\0 \"\0\"",
    ];
    for source in sources {
        let total: u32 = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "for {source:?}");
    }
}

mod proptest_scanner {
    use super::scan;
    use crate::RawTag;
    use proptest::prelude::*;

    fn code_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![
                Just(b'/'),
                Just(b'*'),
                Just(b'"'),
                Just(b'\''),
                Just(b'\\'),
                Just(b'\n'),
                Just(b'a'),
                Just(b' '),
                Just(0xE2),
                Just(0x82),
                Just(0xAC),
            ],
            0..128,
        )
    }

    proptest! {
        #[test]
        fn tokens_partition_input(bytes in code_bytes()) {
            let tokens = scan(&bytes);
            let total: usize = tokens.iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, bytes.len());
        }

        #[test]
        fn every_token_has_positive_length(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            for tok in scan(&bytes) {
                prop_assert!(tok.len > 0, "zero-length token {:?}", tok);
            }
        }

        #[test]
        fn comments_have_delimiters(bytes in code_bytes()) {
            let mut pos = 0usize;
            for tok in scan(&bytes) {
                let text = &bytes[pos..pos + tok.len as usize];
                pos += tok.len as usize;
                match tok.tag {
                    RawTag::BlockComment => {
                        prop_assert!(text.starts_with(b"/*") && text.ends_with(b"*/") && text.len() >= 4);
                    }
                    RawTag::LineComment => {
                        prop_assert!(text.starts_with(b"//") && !text.contains(&b'\n'));
                    }
                    RawTag::String | RawTag::Char => {
                        prop_assert!(!text.contains(&b'\n'));
                    }
                    _ => {}
                }
            }
        }
    }
}
