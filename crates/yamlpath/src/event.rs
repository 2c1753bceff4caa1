//! The event surface consumed by the filter.
//!
//! [`Event`] mirrors the event classes of a libyaml-style streaming parser.
//! It borrows its strings from the caller, so adapting a concrete parser's
//! event type is a cheap per-event conversion.

/// One unit emitted by a streaming YAML parser, as seen by the filter.
///
/// Only `Scalar`, `MappingStart` and `SequenceStart` can define an anchor;
/// `Alias` carries an anchor *reference*, which the filter never treats as a
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The parser produced no event. Kept so the filter is total over the
    /// full libyaml event vocabulary.
    Nothing,
    /// Start of the event stream.
    StreamStart,
    /// End of the event stream.
    StreamEnd,
    /// Start of a document.
    DocumentStart,
    /// End of a document.
    DocumentEnd,
    /// Reference to a previously anchored node.
    Alias {
        /// Name of the referenced anchor.
        anchor: &'a str,
    },
    /// A scalar value (or mapping key).
    Scalar {
        /// The scalar text.
        value: &'a str,
        /// Anchor defined on this node, if any.
        anchor: Option<&'a str>,
    },
    /// Start of a sequence node.
    SequenceStart {
        /// Anchor defined on this node, if any.
        anchor: Option<&'a str>,
    },
    /// End of a sequence node.
    SequenceEnd,
    /// Start of a mapping node.
    MappingStart {
        /// Anchor defined on this node, if any.
        anchor: Option<&'a str>,
    },
    /// End of a mapping node.
    MappingEnd,
}

impl<'a> Event<'a> {
    /// The anchor name this event defines, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&'a str> {
        match self {
            Event::Scalar { anchor, .. }
            | Event::SequenceStart { anchor }
            | Event::MappingStart { anchor } => *anchor,
            _ => None,
        }
    }

    /// The scalar text, for scalar events.
    #[must_use]
    pub fn scalar_value(&self) -> Option<&'a str> {
        match self {
            Event::Scalar { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn is_content(&self) -> bool {
        matches!(
            self,
            Event::Scalar { .. }
                | Event::Alias { .. }
                | Event::MappingStart { .. }
                | Event::SequenceStart { .. }
        )
    }
}
