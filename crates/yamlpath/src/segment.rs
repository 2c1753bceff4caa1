use alloc::{string::String, vec::Vec};
use core::fmt;

/// One step of a compiled [`Path`](crate::Path).
///
/// `Root` and `Anchor` are entry points and only ever appear as the first
/// segment; the parser prepends an implicit `Root` when the text starts with
/// a bare key or bracket, so every parsed path begins with one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// The document root.
    Root,
    /// The first node carrying this anchor name.
    Anchor(String),
    /// A specific key within a mapping.
    Key(String),
    /// Any of the listed keys within a mapping; an empty list is the `*`
    /// wildcard matching every key.
    Selection(Vec<String>),
    /// One sequence element by position.
    Index(usize),
    /// The listed sequence positions; an empty list is the `:` wildcard
    /// matching every element.
    Set(Vec<usize>),
}

/// Characters that force a key into bracketed quoting when printed.
const KEY_SPECIALS: &[char] = &['[', ']', '(', ')', '.', '$', '&', '*'];

fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    if key.contains('\'') {
        write!(f, "\"{key}\"")
    } else {
        write!(f, "'{key}'")
    }
}

impl fmt::Display for Segment {
    /// Canonical textual form: `$`, `&name`, `.name` (or `['name']` when the
    /// key needs quoting), `[i]`, `[:]`/`[i1,i2,…]`, `.*`/`['k1','k2',…]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root => f.write_str("$"),
            Segment::Anchor(name) => write!(f, "&{name}"),
            Segment::Key(name) => {
                if name.contains(KEY_SPECIALS) {
                    f.write_str("[")?;
                    write_quoted(f, name)?;
                    f.write_str("]")
                } else {
                    write!(f, ".{name}")
                }
            }
            Segment::Index(index) => write!(f, "[{index}]"),
            Segment::Set(indices) => {
                if indices.is_empty() {
                    return f.write_str("[:]");
                }
                f.write_str("[")?;
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{index}")?;
                }
                f.write_str("]")
            }
            Segment::Selection(keys) => {
                if keys.is_empty() {
                    return f.write_str(".*");
                }
                f.write_str("[")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                }
                f.write_str("]")
            }
        }
    }
}
