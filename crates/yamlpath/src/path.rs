use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::filter::Track;
use crate::{PathError, Segment, parse};

/// A compiled path expression: an ordered, non-empty list of [`Segment`]s
/// plus the runtime state the event filter needs.
///
/// A `Path` is built once with [`Path::parse`] and then driven through a
/// YAML event stream with [`filter_event`](Path::filter_event). It owns all
/// of its strings and carries no global state, so independent paths can
/// filter independent streams concurrently.
///
/// ```
/// use yamlpath::{Path, Segment};
///
/// let path = Path::parse("servers[0]['host','port']")?;
/// assert_eq!(path.segments().len(), 4); // implicit root included
/// assert_eq!(path.segments()[2], Segment::Index(0));
/// assert_eq!(path.to_string(), "$.servers[0]['host','port']");
/// # Ok::<(), yamlpath::PathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    pub(crate) segments: Vec<Segment>,
    pub(crate) track: Vec<Track>,
    pub(crate) current_level: usize,
    pub(crate) start_level: usize,
}

impl Path {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] with a static message and the byte offset of
    /// the first offending character when the text is not a valid path.
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let segments = parse::parse(text)?;
        let track = vec![Track::default(); segments.len()];
        Ok(Self {
            segments,
            track,
            current_level: 0,
            start_level: 0,
        })
    }

    /// The parsed segments, in order. The first is always `Root` or `Anchor`.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Clear all filtering state so the path can be applied to another
    /// event stream. Without a reset, feeding a second stream continues from
    /// wherever the first one left the state machine.
    pub fn reset(&mut self) {
        self.current_level = 0;
        self.start_level = 0;
        for track in &mut self.track {
            *track = Track::default();
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Path {
    /// The canonical form of the path. Parsing the canonical form yields a
    /// path that prints identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
