use std::borrow::Cow;
use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::ptr::addr_of_mut;
use std::slice;

use unsafe_libyaml as sys;

use super::error::{Error, Mark, Result};
use super::event::{
    MappingStart, MappingStyle, Scalar, ScalarStyle, SequenceStart, SequenceStyle, YamlEvent,
};
use super::util::Owned;

/// Pull parser over an in-memory YAML stream.
pub struct Parser<'input> {
    pin: Owned<ParserPinned<'input>>,
}

struct ParserPinned<'input> {
    sys: sys::yaml_parser_t,
    // Keeps the bytes libyaml reads from alive and in place.
    _input: Cow<'input, [u8]>,
}

impl<'input> Parser<'input> {
    /// Create a parser reading the given bytes as a UTF-8 YAML stream.
    ///
    /// # Panics
    ///
    /// Panics if libyaml cannot allocate its parser state.
    #[must_use]
    pub fn new(input: Cow<'input, [u8]>) -> Parser<'input> {
        let owned = Owned::<ParserPinned>::new_uninit();
        let pin = unsafe {
            let parser = addr_of_mut!((*owned.ptr).sys);
            if sys::yaml_parser_initialize(parser).fail {
                panic!("malloc error: {}", Error::parse_error(parser));
            }
            sys::yaml_parser_set_encoding(parser, sys::YAML_UTF8_ENCODING);
            sys::yaml_parser_set_input_string(parser, input.as_ptr(), input.len() as u64);
            addr_of_mut!((*owned.ptr)._input).write(input);
            Owned::assume_init(owned)
        };
        Parser { pin }
    }

    /// Pull the next event.
    ///
    /// # Errors
    ///
    /// Returns the libyaml reader/scanner/parser problem, with its mark,
    /// when the input is not well-formed YAML.
    pub fn next_event(&mut self) -> Result<(YamlEvent, Mark)> {
        let mut event = MaybeUninit::<sys::yaml_event_t>::uninit();
        unsafe {
            let parser = addr_of_mut!((*self.pin.ptr).sys);
            if (&(*parser)).error != sys::YAML_NO_ERROR {
                return Err(Error::parse_error(parser));
            }
            let event = event.as_mut_ptr();
            if sys::yaml_parser_parse(parser, event).fail {
                return Err(Error::parse_error(parser));
            }
            let converted = convert_event(&*event);
            let mark = Mark {
                line: (*event).start_mark.line,
                column: (*event).start_mark.column,
            };
            sys::yaml_event_delete(event);
            Ok((converted, mark))
        }
    }
}

unsafe fn convert_event(sys: &sys::yaml_event_t) -> YamlEvent {
    match sys.type_ {
        sys::YAML_STREAM_START_EVENT => YamlEvent::StreamStart,
        sys::YAML_STREAM_END_EVENT => YamlEvent::StreamEnd,
        sys::YAML_DOCUMENT_START_EVENT => YamlEvent::DocumentStart,
        sys::YAML_DOCUMENT_END_EVENT => YamlEvent::DocumentEnd,
        sys::YAML_ALIAS_EVENT => YamlEvent::Alias {
            anchor: unsafe { optional_string(sys.data.alias.anchor) }
                .unwrap_or_default(),
        },
        sys::YAML_SCALAR_EVENT => YamlEvent::Scalar(Scalar {
            anchor: unsafe { optional_string(sys.data.scalar.anchor) },
            tag: unsafe { optional_string(sys.data.scalar.tag) },
            value: String::from_utf8_lossy(unsafe {
                slice::from_raw_parts(sys.data.scalar.value, sys.data.scalar.length as usize)
            })
            .into_owned(),
            style: match unsafe { sys.data.scalar.style } {
                sys::YAML_SINGLE_QUOTED_SCALAR_STYLE => ScalarStyle::SingleQuoted,
                sys::YAML_DOUBLE_QUOTED_SCALAR_STYLE => ScalarStyle::DoubleQuoted,
                sys::YAML_LITERAL_SCALAR_STYLE => ScalarStyle::Literal,
                sys::YAML_FOLDED_SCALAR_STYLE => ScalarStyle::Folded,
                _ => ScalarStyle::Plain,
            },
        }),
        sys::YAML_SEQUENCE_START_EVENT => YamlEvent::SequenceStart(SequenceStart {
            anchor: unsafe { optional_string(sys.data.sequence_start.anchor) },
            tag: unsafe { optional_string(sys.data.sequence_start.tag) },
            style: match unsafe { sys.data.sequence_start.style } {
                sys::YAML_FLOW_SEQUENCE_STYLE => SequenceStyle::Flow,
                _ => SequenceStyle::Block,
            },
        }),
        sys::YAML_SEQUENCE_END_EVENT => YamlEvent::SequenceEnd,
        sys::YAML_MAPPING_START_EVENT => YamlEvent::MappingStart(MappingStart {
            anchor: unsafe { optional_string(sys.data.mapping_start.anchor) },
            tag: unsafe { optional_string(sys.data.mapping_start.tag) },
            style: match unsafe { sys.data.mapping_start.style } {
                sys::YAML_FLOW_MAPPING_STYLE => MappingStyle::Flow,
                _ => MappingStyle::Block,
            },
        }),
        sys::YAML_MAPPING_END_EVENT => YamlEvent::MappingEnd,
        _ => YamlEvent::Nothing,
    }
}

unsafe fn optional_string(ptr: *const u8) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let cstr = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(cstr.to_string_lossy().into_owned())
}

impl Drop for ParserPinned<'_> {
    fn drop(&mut self) {
        unsafe { sys::yaml_parser_delete(&mut self.sys) }
    }
}
