use std::ffi::{CString, c_void};
use std::io;
use std::mem::MaybeUninit;
use std::ptr::{self, addr_of_mut};
use std::slice;

use unsafe_libyaml as sys;

use super::error::{Error, Result};
use super::event::{MappingStyle, Scalar, ScalarStyle, SequenceStyle, YamlEvent};
use super::util::Owned;

/// Event emitter writing a YAML stream to an [`io::Write`] sink.
pub struct Emitter<'a> {
    pin: Owned<EmitterPinned<'a>>,
}

struct EmitterPinned<'a> {
    sys: sys::yaml_emitter_t,
    write: Box<dyn io::Write + 'a>,
    write_error: Option<io::Error>,
}

impl<'a> Emitter<'a> {
    /// Create an emitter. `width` is the preferred line width; negative
    /// means unlimited.
    ///
    /// # Panics
    ///
    /// Panics if libyaml cannot allocate its emitter state.
    #[must_use]
    pub fn new(write: Box<dyn io::Write + 'a>, width: i32) -> Emitter<'a> {
        let owned = Owned::<EmitterPinned>::new_uninit();
        let pin = unsafe {
            let emitter = addr_of_mut!((*owned.ptr).sys);
            if sys::yaml_emitter_initialize(emitter).fail {
                panic!("malloc error: {}", Error::emit_error(emitter));
            }
            sys::yaml_emitter_set_unicode(emitter, true);
            sys::yaml_emitter_set_width(emitter, width);
            addr_of_mut!((*owned.ptr).write).write(write);
            addr_of_mut!((*owned.ptr).write_error).write(None);
            sys::yaml_emitter_set_output(emitter, write_handler, owned.ptr.cast());
            Owned::assume_init(owned)
        };
        Emitter { pin }
    }

    /// Emit one event.
    ///
    /// [`YamlEvent::Nothing`] is ignored. Anchors and tags are copied by
    /// libyaml during event initialization, scalars are passed with explicit
    /// length; tagless nodes are emitted as implicit so the output carries
    /// no spurious type annotations.
    ///
    /// # Errors
    ///
    /// Returns the emitter problem, or the I/O error from the sink.
    pub fn emit(&mut self, event: YamlEvent) -> Result<()> {
        let mut sys_event = MaybeUninit::<sys::yaml_event_t>::uninit();
        let sys_event = sys_event.as_mut_ptr();
        unsafe {
            let emitter = addr_of_mut!((*self.pin.ptr).sys);
            let initialize_status = match event {
                YamlEvent::Nothing => return Ok(()),
                YamlEvent::StreamStart => {
                    sys::yaml_stream_start_event_initialize(sys_event, sys::YAML_UTF8_ENCODING)
                }
                YamlEvent::StreamEnd => sys::yaml_stream_end_event_initialize(sys_event),
                YamlEvent::DocumentStart => sys::yaml_document_start_event_initialize(
                    sys_event,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                    true,
                ),
                YamlEvent::DocumentEnd => {
                    sys::yaml_document_end_event_initialize(sys_event, true)
                }
                YamlEvent::Alias { anchor } => {
                    let anchor = cstring(&anchor)?;
                    sys::yaml_alias_event_initialize(sys_event, anchor.as_ptr().cast())
                }
                YamlEvent::Scalar(Scalar {
                    anchor,
                    tag,
                    value,
                    style,
                }) => {
                    let anchor = optional_cstring(anchor.as_deref())?;
                    let tag = optional_cstring(tag.as_deref())?;
                    let implicit = tag.is_none();
                    sys::yaml_scalar_event_initialize(
                        sys_event,
                        anchor.as_ref().map_or_else(ptr::null, |a| a.as_ptr().cast()),
                        tag.as_ref().map_or_else(ptr::null, |t| t.as_ptr().cast()),
                        value.as_ptr(),
                        value.len() as i32,
                        implicit,
                        implicit,
                        match style {
                            ScalarStyle::Any => sys::YAML_ANY_SCALAR_STYLE,
                            ScalarStyle::Plain => sys::YAML_PLAIN_SCALAR_STYLE,
                            ScalarStyle::SingleQuoted => sys::YAML_SINGLE_QUOTED_SCALAR_STYLE,
                            ScalarStyle::DoubleQuoted => sys::YAML_DOUBLE_QUOTED_SCALAR_STYLE,
                            ScalarStyle::Literal => sys::YAML_LITERAL_SCALAR_STYLE,
                            ScalarStyle::Folded => sys::YAML_FOLDED_SCALAR_STYLE,
                        },
                    )
                }
                YamlEvent::SequenceStart(sequence) => {
                    let anchor = optional_cstring(sequence.anchor.as_deref())?;
                    let tag = optional_cstring(sequence.tag.as_deref())?;
                    let implicit = tag.is_none();
                    sys::yaml_sequence_start_event_initialize(
                        sys_event,
                        anchor.as_ref().map_or_else(ptr::null, |a| a.as_ptr().cast()),
                        tag.as_ref().map_or_else(ptr::null, |t| t.as_ptr().cast()),
                        implicit,
                        match sequence.style {
                            SequenceStyle::Any => sys::YAML_ANY_SEQUENCE_STYLE,
                            SequenceStyle::Block => sys::YAML_BLOCK_SEQUENCE_STYLE,
                            SequenceStyle::Flow => sys::YAML_FLOW_SEQUENCE_STYLE,
                        },
                    )
                }
                YamlEvent::SequenceEnd => sys::yaml_sequence_end_event_initialize(sys_event),
                YamlEvent::MappingStart(mapping) => {
                    let anchor = optional_cstring(mapping.anchor.as_deref())?;
                    let tag = optional_cstring(mapping.tag.as_deref())?;
                    let implicit = tag.is_none();
                    sys::yaml_mapping_start_event_initialize(
                        sys_event,
                        anchor.as_ref().map_or_else(ptr::null, |a| a.as_ptr().cast()),
                        tag.as_ref().map_or_else(ptr::null, |t| t.as_ptr().cast()),
                        implicit,
                        match mapping.style {
                            MappingStyle::Any => sys::YAML_ANY_MAPPING_STYLE,
                            MappingStyle::Block => sys::YAML_BLOCK_MAPPING_STYLE,
                            MappingStyle::Flow => sys::YAML_FLOW_MAPPING_STYLE,
                        },
                    )
                }
                YamlEvent::MappingEnd => sys::yaml_mapping_end_event_initialize(sys_event),
            };
            if initialize_status.fail {
                return Err(Error::emit_error(emitter));
            }
            if sys::yaml_emitter_emit(emitter, sys_event).fail {
                return Err(self.take_error());
            }
        }
        Ok(())
    }

    /// Flush buffered output to the sink.
    ///
    /// # Errors
    ///
    /// Returns the emitter problem, or the I/O error from the sink.
    pub fn flush(&mut self) -> Result<()> {
        unsafe {
            let emitter = addr_of_mut!((*self.pin.ptr).sys);
            if sys::yaml_emitter_flush(emitter).fail {
                return Err(self.take_error());
            }
        }
        Ok(())
    }

    /// Prefer the stored I/O error over libyaml's generic write problem.
    fn take_error(&mut self) -> Error {
        unsafe {
            if let Some(io_error) = (*self.pin.ptr).write_error.take() {
                Error::Io(io_error)
            } else {
                Error::emit_error(addr_of_mut!((*self.pin.ptr).sys))
            }
        }
    }
}

fn cstring(text: &str) -> Result<CString> {
    CString::new(text).map_err(|_| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            "string with interior NUL cannot be passed to libyaml",
        ))
    })
}

fn optional_cstring(text: Option<&str>) -> Result<Option<CString>> {
    text.map(cstring).transpose()
}

unsafe fn write_handler(data: *mut c_void, buffer: *mut u8, size: u64) -> i32 {
    let data = data.cast::<EmitterPinned>();
    let result = unsafe {
        let buffer = slice::from_raw_parts(buffer, size as usize);
        (*data).write.write_all(buffer)
    };
    match result {
        Ok(()) => 1,
        Err(err) => {
            unsafe {
                (*data).write_error = Some(err);
            }
            0
        }
    }
}

impl Drop for EmitterPinned<'_> {
    fn drop(&mut self) {
        unsafe { sys::yaml_emitter_delete(&mut self.sys) }
    }
}
