use thiserror::Error;

/// Classifies a path parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    /// Syntactic defect in the path text (unterminated quote, stray
    /// character, negative index, empty path).
    Parse,
    /// A segment used where it is structurally forbidden (root or anchor
    /// away from the start, too many items in a set or selection).
    Section,
}

/// Error returned by [`Path::parse`](crate::Path::parse).
///
/// Carries the byte offset into the path text at which the problem was
/// detected, so callers can render a caret diagnostic. The offset never
/// exceeds the length of the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{message} [at position {pos}]")]
pub struct PathError {
    /// Whether the failure was syntactic or structural.
    pub kind: PathErrorKind,
    /// Human-readable description of the problem.
    pub message: &'static str,
    /// Byte offset of the first offending character.
    pub pos: usize,
}

impl PathError {
    pub(crate) fn parse(message: &'static str, pos: usize) -> Self {
        Self {
            kind: PathErrorKind::Parse,
            message,
            pos,
        }
    }

    pub(crate) fn section(message: &'static str, pos: usize) -> Self {
        Self {
            kind: PathErrorKind::Section,
            message,
            pos,
        }
    }
}
