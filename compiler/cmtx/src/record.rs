//! Comment records: what the scan produces.

/// One comment, borrowed from the input it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentRecord<'a> {
    /// Label of the input. `None` for unlabeled in-memory sources.
    pub filename: Option<&'a str>,
    /// Line the comment starts on (1-based).
    pub line: u64,
    /// Codepoint offset of the comment's first byte.
    pub char_index: u64,
    /// Raw comment bytes, delimiters included.
    pub text: &'a [u8],
}

impl CommentRecord<'_> {
    pub fn to_owned_record(&self) -> OwnedCommentRecord {
        OwnedCommentRecord {
            filename: self.filename.map(str::to_owned),
            line: self.line,
            char_index: self.char_index,
            text: self.text.to_vec(),
        }
    }
}

/// A [`CommentRecord`] that outlives its input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedCommentRecord {
    pub filename: Option<String>,
    pub line: u64,
    pub char_index: u64,
    pub text: Vec<u8>,
}
