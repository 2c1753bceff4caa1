//! Streaming YAML path filtering.
//!
//! A [`Path`] is the compiled form of a compact path expression such as
//! `.users[0].name` or `.servers[:]['host','port']`. Fed the events of a
//! streaming YAML parser one by one, it classifies each event as inside or
//! outside the selected subtree(s) without ever materialising the document,
//! so that a thin driver can forward, drop, or synthesise events and produce
//! a well-formed YAML projection of the input.
//!
//! ```
//! use yamlpath::{Event, FilterResult, Path};
//!
//! let mut path = Path::parse(".a")?;
//! assert_eq!(path.to_string(), "$.a");
//!
//! // Filtering `{a: 1, b: 2}` keeps only the scalar `1`.
//! let events = [
//!     Event::StreamStart,
//!     Event::DocumentStart,
//!     Event::MappingStart { anchor: None },
//!     Event::Scalar { value: "a", anchor: None },
//!     Event::Scalar { value: "1", anchor: None },
//!     Event::Scalar { value: "b", anchor: None },
//!     Event::Scalar { value: "2", anchor: None },
//!     Event::MappingEnd,
//!     Event::DocumentEnd,
//!     Event::StreamEnd,
//! ];
//! let kept: Vec<FilterResult> = events.iter().map(|e| path.filter_event(e)).collect();
//! assert_eq!(kept[4], FilterResult::In); // the value of `a`
//! assert_eq!(kept[2], FilterResult::Out); // the enclosing mapping is not
//! # Ok::<(), yamlpath::PathError>(())
//! ```
//!
//! The crate is `no_std` (with `alloc`); it performs no I/O and depends on no
//! particular YAML parser. See [`Event`] for the adapter surface.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod event;
mod filter;
mod parse;
mod path;
mod segment;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathErrorKind};
pub use event::Event;
pub use filter::FilterResult;
pub use path::Path;
pub use segment::Segment;
