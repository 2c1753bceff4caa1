//! The filtering loop: parse, classify, re-emit.
//!
//! Besides forwarding the events the filter lets through, the driver owns
//! the two null-synthesis rules that keep the output well-formed:
//!
//! - a document whose every content event was dropped (start immediately
//!   followed by end) gets a single `null` scalar as its root;
//! - after a dangling mapping key, a `null` value is inserted before the
//!   next container end or the next dangling key.

use std::borrow::Cow;
use std::io::Write;

use thiserror::Error;
use yamlpath::{FilterResult, Path};

use crate::libyaml;
use crate::libyaml::event::{MappingStyle, Scalar, ScalarStyle, SequenceStyle, YamlEvent};
use crate::libyaml::{Emitter, Parser};

/// Output options for [`filter_stream`].
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Force flow style on every emitted container.
    pub flow: bool,
    /// Preferred emitter line width; negative means unlimited.
    pub width: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            flow: false,
            width: -1,
        }
    }
}

/// Failure while streaming a document through the filter.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The input is not well-formed YAML.
    #[error("Parser error: {0}")]
    Parser(libyaml::Error),
    /// The emitter rejected an event or the sink failed.
    #[error("Emitter error: {0}")]
    Emitter(libyaml::Error),
}

/// Filter the YAML stream in `input` through `path`, writing the selected
/// fragment to `output`.
///
/// The path is consumed from whatever state it is in; call
/// [`Path::reset`] first when reusing one across streams.
///
/// # Errors
///
/// Returns a [`StreamError`] when the input cannot be parsed or the output
/// cannot be emitted. Filtering itself cannot fail.
pub fn filter_stream<W: Write>(
    input: &[u8],
    path: &mut Path,
    output: W,
    options: Options,
) -> Result<(), StreamError> {
    let mut parser = Parser::new(Cow::Borrowed(input));
    let mut emitter = Emitter::new(Box::new(output), options.width);

    let mut prev_result = FilterResult::Out;
    let mut prev_was_document_start = false;
    loop {
        let (mut event, _mark) = parser.next_event().map_err(StreamError::Parser)?;
        let result = path.filter_event(&event.as_filter_event());
        let stream_end = matches!(event, YamlEvent::StreamEnd);

        if result != FilterResult::Out {
            let closes_container = matches!(event, YamlEvent::MappingEnd | YamlEvent::SequenceEnd);
            let empty_document =
                prev_was_document_start && matches!(event, YamlEvent::DocumentEnd);
            let owed_null = prev_result == FilterResult::InDanglingKey
                && (closes_container || result == FilterResult::InDanglingKey);
            if empty_document || owed_null {
                emitter.emit(null_scalar()).map_err(StreamError::Emitter)?;
            }
            prev_result = result;
            prev_was_document_start = matches!(event, YamlEvent::DocumentStart);
            if options.flow {
                force_flow(&mut event);
            }
            emitter.emit(event).map_err(StreamError::Emitter)?;
        }

        if stream_end {
            break;
        }
    }
    emitter.flush().map_err(StreamError::Emitter)?;
    Ok(())
}

/// The synthetic value paired with dangling keys and empty documents.
fn null_scalar() -> YamlEvent {
    YamlEvent::Scalar(Scalar {
        anchor: None,
        tag: None,
        value: "null".to_owned(),
        style: ScalarStyle::Plain,
    })
}

fn force_flow(event: &mut YamlEvent) {
    match event {
        YamlEvent::SequenceStart(sequence) => sequence.style = SequenceStyle::Flow,
        YamlEvent::MappingStart(mapping) => mapping.style = MappingStyle::Flow,
        _ => {}
    }
}
