use yamlpath::Event;

/// Owned YAML parse event.
///
/// Everything the emitter needs to reproduce the node is preserved: anchor,
/// tag, scalar style and container style. Tags absent on the parsed event
/// stay absent on output, which keeps implicitly typed scalars implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlEvent {
    /// libyaml produced no event.
    Nothing,
    /// Start of the stream.
    StreamStart,
    /// End of the stream.
    StreamEnd,
    /// Start of a document.
    DocumentStart,
    /// End of a document.
    DocumentEnd,
    /// Reference to an anchored node.
    Alias {
        /// The referenced anchor name.
        anchor: String,
    },
    /// A scalar node.
    Scalar(Scalar),
    /// Start of a sequence node.
    SequenceStart(SequenceStart),
    /// End of a sequence node.
    SequenceEnd,
    /// Start of a mapping node.
    MappingStart(MappingStart),
    /// End of a mapping node.
    MappingEnd,
}

/// A scalar node and its presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    /// Anchor defined on the node, if any.
    pub anchor: Option<String>,
    /// Explicit tag, if the input carried one.
    pub tag: Option<String>,
    /// The scalar text.
    pub value: String,
    /// Presentation style from the input.
    pub style: ScalarStyle,
}

/// Start of a sequence node and its presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStart {
    /// Anchor defined on the node, if any.
    pub anchor: Option<String>,
    /// Explicit tag, if the input carried one.
    pub tag: Option<String>,
    /// Flow or block, from the input.
    pub style: SequenceStyle,
}

/// Start of a mapping node and its presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingStart {
    /// Anchor defined on the node, if any.
    pub anchor: Option<String>,
    /// Explicit tag, if the input carried one.
    pub tag: Option<String>,
    /// Flow or block, from the input.
    pub style: MappingStyle,
}

/// Scalar presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Let the emitter choose.
    Any,
    /// Unquoted.
    Plain,
    /// `'…'`
    SingleQuoted,
    /// `"…"`
    DoubleQuoted,
    /// `|` block.
    Literal,
    /// `>` block.
    Folded,
}

/// Sequence presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStyle {
    /// Let the emitter choose.
    Any,
    /// Indented items.
    Block,
    /// `[…]`
    Flow,
}

/// Mapping presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStyle {
    /// Let the emitter choose.
    Any,
    /// Indented entries.
    Block,
    /// `{…}`
    Flow,
}

impl YamlEvent {
    /// Borrowed view of this event for the path filter.
    #[must_use]
    pub fn as_filter_event(&self) -> Event<'_> {
        match self {
            YamlEvent::Nothing => Event::Nothing,
            YamlEvent::StreamStart => Event::StreamStart,
            YamlEvent::StreamEnd => Event::StreamEnd,
            YamlEvent::DocumentStart => Event::DocumentStart,
            YamlEvent::DocumentEnd => Event::DocumentEnd,
            YamlEvent::Alias { anchor } => Event::Alias { anchor },
            YamlEvent::Scalar(scalar) => Event::Scalar {
                value: &scalar.value,
                anchor: scalar.anchor.as_deref(),
            },
            YamlEvent::SequenceStart(sequence) => Event::SequenceStart {
                anchor: sequence.anchor.as_deref(),
            },
            YamlEvent::SequenceEnd => Event::SequenceEnd,
            YamlEvent::MappingStart(mapping) => Event::MappingStart {
                anchor: mapping.anchor.as_deref(),
            },
            YamlEvent::MappingEnd => Event::MappingEnd,
        }
    }
}
