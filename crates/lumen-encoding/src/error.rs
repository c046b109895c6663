//! Encoding error taxonomy
//!
//! Every conversion failure carries the offending index into the input, an
//! owned copy of the input sequence, the source position it was raised from,
//! and an optional causal predecessor forming a singly linked chain.
//!
//! The chain is flattened to readable text with [`EncodingError::text`].

use thiserror::Error;

use crate::code_pos::CodePos;
use crate::strings::{UnicodeString, Utf8String, Utf16String};

/// A malformed UTF-8 byte sequence, raised on decode.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Utf8EncodingError {
    message: String,
    #[source]
    previous: Option<Box<EncodingError>>,
    location: CodePos,
    index: usize,
    sequence: Utf8String,
}

impl Utf8EncodingError {
    /// Create an error for `sequence` failing at `index`.
    pub fn new(
        message: impl Into<String>,
        location: CodePos,
        sequence: Utf8String,
        index: usize,
    ) -> Self {
        let message = message.into();
        tracing::trace!("UTF-8 error at index {index}: {message}");
        Self {
            message,
            previous: None,
            location,
            index,
            sequence,
        }
    }

    /// Attach the error that led to this one.
    #[must_use]
    pub fn caused_by(mut self, previous: EncodingError) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// The message text of this error alone.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the codec the error was raised.
    pub fn location(&self) -> CodePos {
        self.location
    }

    /// The error that led to this one, if any.
    pub fn previous(&self) -> Option<&EncodingError> {
        self.previous.as_deref()
    }

    /// Index of the offending byte in the input sequence.
    pub fn offending_index(&self) -> usize {
        self.index
    }

    /// The input sequence that failed to convert.
    pub fn offending_bytes(&self) -> &[u8] {
        &self.sequence
    }
}

/// A malformed UTF-16 surrogate sequence, raised on decode.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Utf16EncodingError {
    message: String,
    #[source]
    previous: Option<Box<EncodingError>>,
    location: CodePos,
    index: usize,
    sequence: Utf16String,
}

impl Utf16EncodingError {
    /// Create an error for `sequence` failing at `index`.
    pub fn new(
        message: impl Into<String>,
        location: CodePos,
        sequence: Utf16String,
        index: usize,
    ) -> Self {
        let message = message.into();
        tracing::trace!("UTF-16 error at index {index}: {message}");
        Self {
            message,
            previous: None,
            location,
            index,
            sequence,
        }
    }

    /// Attach the error that led to this one.
    #[must_use]
    pub fn caused_by(mut self, previous: EncodingError) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// The message text of this error alone.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the codec the error was raised.
    pub fn location(&self) -> CodePos {
        self.location
    }

    /// The error that led to this one, if any.
    pub fn previous(&self) -> Option<&EncodingError> {
        self.previous.as_deref()
    }

    /// Index of the offending code unit in the input sequence.
    pub fn offending_index(&self) -> usize {
        self.index
    }

    /// The input sequence that failed to convert.
    pub fn offending_units(&self) -> &[u16] {
        &self.sequence
    }
}

/// A codepoint outside the Unicode range, raised on encode to either target.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UnicodeEncodingError {
    message: String,
    #[source]
    previous: Option<Box<EncodingError>>,
    location: CodePos,
    index: usize,
    sequence: UnicodeString,
}

impl UnicodeEncodingError {
    /// Create an error for `sequence` failing at `index`.
    pub fn new(
        message: impl Into<String>,
        location: CodePos,
        sequence: UnicodeString,
        index: usize,
    ) -> Self {
        let message = message.into();
        tracing::trace!("codepoint error at index {index}: {message}");
        Self {
            message,
            previous: None,
            location,
            index,
            sequence,
        }
    }

    /// Attach the error that led to this one.
    #[must_use]
    pub fn caused_by(mut self, previous: EncodingError) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// The message text of this error alone.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the codec the error was raised.
    pub fn location(&self) -> CodePos {
        self.location
    }

    /// The error that led to this one, if any.
    pub fn previous(&self) -> Option<&EncodingError> {
        self.previous.as_deref()
    }

    /// Index of the offending codepoint in the input sequence.
    pub fn offending_index(&self) -> usize {
        self.index
    }

    /// The input sequence that failed to convert.
    pub fn offending_codepoints(&self) -> &[u32] {
        &self.sequence
    }
}

/// Umbrella error for every conversion failure.
///
/// Each variant wraps the sequence-typed error of the stage that failed.
/// Composed conversions surface the failing stage's error unchanged.
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// Malformed UTF-8 input.
    #[error(transparent)]
    Utf8(#[from] Utf8EncodingError),

    /// Malformed UTF-16 input.
    #[error(transparent)]
    Utf16(#[from] Utf16EncodingError),

    /// A codepoint outside the Unicode range.
    #[error(transparent)]
    Unicode(#[from] UnicodeEncodingError),
}

impl EncodingError {
    /// The message text of this error alone.
    pub fn message(&self) -> &str {
        match self {
            EncodingError::Utf8(err) => err.message(),
            EncodingError::Utf16(err) => err.message(),
            EncodingError::Unicode(err) => err.message(),
        }
    }

    /// Where in the codec the error was raised.
    pub fn location(&self) -> CodePos {
        match self {
            EncodingError::Utf8(err) => err.location(),
            EncodingError::Utf16(err) => err.location(),
            EncodingError::Unicode(err) => err.location(),
        }
    }

    /// The error that led to this one, if any.
    pub fn previous(&self) -> Option<&EncodingError> {
        match self {
            EncodingError::Utf8(err) => err.previous(),
            EncodingError::Utf16(err) => err.previous(),
            EncodingError::Unicode(err) => err.previous(),
        }
    }

    /// Index of the offending unit in the input sequence.
    pub fn offending_index(&self) -> usize {
        match self {
            EncodingError::Utf8(err) => err.offending_index(),
            EncodingError::Utf16(err) => err.offending_index(),
            EncodingError::Unicode(err) => err.offending_index(),
        }
    }

    /// Flatten the causal chain into readable text.
    ///
    /// With `recursive` set, the chain's messages are joined
    /// oldest-to-newest with a newline; otherwise only this error's own
    /// message is returned.
    pub fn text(&self, recursive: bool) -> String {
        if !recursive {
            return self.message().to_owned();
        }
        let mut messages = vec![self.message()];
        let mut current = self.previous();
        while let Some(err) = current {
            messages.push(err.message());
            current = err.previous();
        }
        messages.reverse();
        messages.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_pos;

    fn utf8_error(message: &str, index: usize) -> Utf8EncodingError {
        Utf8EncodingError::new(message, code_pos!(), vec![0xC2, 0x20], index)
    }

    #[test]
    fn test_accessors() {
        let err = utf8_error("bad continuation byte", 1);
        assert_eq!(err.message(), "bad continuation byte");
        assert_eq!(err.offending_index(), 1);
        assert_eq!(err.offending_bytes(), &[0xC2, 0x20]);
        assert!(err.location().is_provided());
        assert!(err.previous().is_none());
    }

    #[test]
    fn test_display_is_message() {
        let err: EncodingError = utf8_error("bad continuation byte", 1).into();
        assert_eq!(err.to_string(), "bad continuation byte");
    }

    #[test]
    fn test_chain_text_recursive() {
        let first: EncodingError = utf8_error("first failure", 0).into();
        let second: EncodingError =
            Utf16EncodingError::new("second failure", code_pos!(), vec![0xD800], 0)
                .caused_by(first)
                .into();

        assert_eq!(second.text(false), "second failure");
        assert_eq!(second.text(true), "first failure\nsecond failure");
    }

    #[test]
    fn test_chain_depth_three() {
        let a: EncodingError = utf8_error("a", 0).into();
        let b: EncodingError = utf8_error("b", 0).caused_by(a).into();
        let c: EncodingError = utf8_error("c", 0).caused_by(b).into();

        assert_eq!(c.text(true), "a\nb\nc");
        assert_eq!(c.previous().unwrap().message(), "b");
        assert_eq!(c.previous().unwrap().previous().unwrap().message(), "a");
    }

    #[test]
    fn test_std_error_source() {
        use std::error::Error as _;

        let first: EncodingError = utf8_error("root cause", 0).into();
        let second: EncodingError = utf8_error("followup", 1).caused_by(first).into();
        let source = second.source().expect("chained error has a source");
        assert_eq!(source.to_string(), "root cause");
    }

    #[test]
    fn test_unicode_error_sequence() {
        let err = UnicodeEncodingError::new(
            "codepoint out of range",
            CodePos::NOT_PROVIDED,
            vec![0x41, 0x110000],
            1,
        );
        assert_eq!(err.offending_codepoints(), &[0x41, 0x110000]);
        assert!(!err.location().is_provided());
    }
}
