use std::ffi::CStr;
use std::fmt::{self, Display};
use std::io;

use unsafe_libyaml as sys;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure reported by the libyaml parser or emitter.
///
/// The problem string and marks are copied out of the C state as soon as the
/// failure is observed, so the error owns everything it reports.
#[derive(Debug)]
pub enum Error {
    /// libyaml rejected the stream or could not emit an event.
    Libyaml {
        /// libyaml's description of the problem.
        problem: String,
        /// Byte offset reported with the problem, when meaningful.
        problem_offset: u64,
        /// Position in the input the problem points at.
        problem_mark: Mark,
        /// Enclosing context, when libyaml provides one.
        context: Option<String>,
    },
    /// The output callback failed.
    Io(io::Error),
}

/// A position in the input stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mark {
    /// 0-based line.
    pub line: u64,
    /// 0-based column.
    pub column: u64,
}

unsafe fn string_from_ptr(ptr: *const i8) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        let cstr = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(cstr.to_string_lossy().into_owned())
    }
}

impl Error {
    pub(crate) unsafe fn parse_error(parser: *const sys::yaml_parser_t) -> Self {
        unsafe {
            Error::Libyaml {
                problem: string_from_ptr((&(*parser)).problem.cast())
                    .unwrap_or_else(|| "libyaml parser failed but reported no problem".to_owned()),
                problem_offset: (&(*parser)).problem_offset,
                problem_mark: Mark {
                    line: (&(*parser)).problem_mark.line,
                    column: (&(*parser)).problem_mark.column,
                },
                context: string_from_ptr((&(*parser)).context.cast()),
            }
        }
    }

    pub(crate) unsafe fn emit_error(emitter: *const sys::yaml_emitter_t) -> Self {
        unsafe {
            Error::Libyaml {
                problem: string_from_ptr((&(*emitter)).problem.cast())
                    .unwrap_or_else(|| "libyaml emitter failed but reported no problem".to_owned()),
                problem_offset: 0,
                problem_mark: Mark::default(),
                context: None,
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Libyaml {
                problem,
                problem_mark,
                context,
                ..
            } => {
                write!(f, "{problem}")?;
                if problem_mark.line != 0 || problem_mark.column != 0 {
                    write!(
                        f,
                        " at line {} column {}",
                        problem_mark.line + 1,
                        problem_mark.column + 1
                    )?;
                }
                if let Some(context) = context {
                    write!(f, " ({context})")?;
                }
                Ok(())
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Libyaml { .. } => None,
        }
    }
}
