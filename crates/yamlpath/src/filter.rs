//! The streaming event filter.
//!
//! The filter never materialises the document. It keeps one small state
//! record per path segment and tracks the input depth; each event updates
//! the record of the segment at the current depth and is then classified by
//! comparing depth against the path length and the accumulated match flags.
//!
//! Two details make the scheme work on an event stream:
//!
//! - mapping events alternate key/value, and whether a *value* belongs to
//!   the selection was decided one event earlier, on its key. The match is
//!   parked in `next_valid` and promoted when the value arrives.
//! - `Selection` and `Set` reproduce the shape of their container, so the
//!   container's start/end events must be forwarded even when nothing inside
//!   matches ("mandatory containers"), and a selected key whose value is
//!   dropped must be reported as [`FilterResult::InDanglingKey`] so the
//!   caller can pair it with a synthetic null.

use crate::{Event, Path, Segment};

/// Decision for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterResult {
    /// Drop the event.
    Out,
    /// Forward the event unchanged.
    In,
    /// Forward the event, but it is a mapping key whose value may not
    /// follow: if the next forwarded event is a container end or another
    /// dangling key, the caller must first emit a synthetic `null` scalar to
    /// keep the output well-formed.
    InDanglingKey,
}

/// Kind of container a segment is currently matching against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Mapping,
    Sequence,
}

/// Per-segment runtime state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Track {
    /// Set when the container this segment selects within is opened;
    /// `None` until then.
    pub(crate) node: Option<Container>,
    /// Content events consumed inside the container: keys and values both
    /// count for mappings, elements count for sequences.
    pub(crate) counter: usize,
    /// Whether this segment matches the event under consideration.
    pub(crate) valid: bool,
    /// Match decided on a mapping key, applied to the following value.
    pub(crate) next_valid: bool,
}

impl Path {
    /// Classify one parser event.
    ///
    /// Events must arrive in parser order; skipping or reordering events
    /// invalidates the state. The filter itself never fails: runtime
    /// mismatches (a key segment against a sequence, an index against a
    /// mapping, an anchor that never appears) simply never match.
    pub fn filter_event(&mut self, event: &Event<'_>) -> FilterResult {
        self.try_anchor(event);
        self.update_current_match(event);

        match event {
            Event::Nothing | Event::StreamStart | Event::StreamEnd => FilterResult::In,
            Event::DocumentStart => {
                if self.start_level == 1 {
                    self.current_level += 1;
                }
                FilterResult::In
            }
            Event::DocumentEnd => {
                if self.start_level == 1 {
                    self.current_level = self.current_level.saturating_sub(1);
                }
                FilterResult::In
            }
            Event::MappingStart { .. } => self.enter_container(Container::Mapping),
            Event::SequenceStart { .. } => self.enter_container(Container::Sequence),
            Event::MappingEnd | Event::SequenceEnd => self.leave_container(),
            Event::Scalar { .. } | Event::Alias { .. } => self.node_decision(),
        }
    }

    /// Until the path has anchored, watch for its entry point: `Root` waits
    /// for the first document, `Anchor` for the first matching anchor name.
    /// An anchor found at depth 0 leaves the path unanchored.
    fn try_anchor(&mut self, event: &Event<'_>) {
        if self.start_level != 0 {
            return;
        }
        match self.segments.first() {
            Some(Segment::Root) => {
                if matches!(event, Event::DocumentStart) {
                    self.start_level = 1;
                    if let Some(track) = self.track.first_mut() {
                        track.valid = true;
                    }
                }
            }
            Some(Segment::Anchor(name)) => {
                if event.anchor().is_some_and(|anchor| anchor == name) {
                    self.start_level = self.current_level;
                }
            }
            _ => {}
        }
    }

    /// Index of the segment at the current depth, if the stream is within
    /// the path.
    fn current_index(&self) -> Option<usize> {
        if self.start_level == 0 {
            return None;
        }
        let level = (self.current_level + 1).checked_sub(self.start_level)?;
        (1..=self.segments.len()).contains(&level).then(|| level - 1)
    }

    /// Re-evaluate the current segment's match against a content event and
    /// advance its counter.
    fn update_current_match(&mut self, event: &Event<'_>) {
        if !event.is_content() {
            return;
        }
        let Some(idx) = self.current_index() else {
            return;
        };
        let segment = &self.segments[idx];
        let track = &mut self.track[idx];
        match track.node {
            // No container opened at this depth yet: the segment is facing
            // the anchored node itself.
            None => {
                track.valid = match segment {
                    Segment::Anchor(name) => {
                        event.anchor().is_some_and(|anchor| anchor == name)
                    }
                    _ => true,
                };
            }
            Some(Container::Mapping) => match segment {
                Segment::Key(name) => {
                    if track.counter % 2 == 1 {
                        track.valid = track.next_valid;
                        track.next_valid = false;
                    } else {
                        track.next_valid =
                            event.scalar_value().is_some_and(|value| value == name);
                        track.valid = false;
                    }
                }
                Segment::Selection(keys) => {
                    if track.counter % 2 == 1 {
                        track.valid = track.next_valid;
                        track.next_valid = false;
                    } else {
                        track.next_valid = keys.is_empty()
                            || event
                                .scalar_value()
                                .is_some_and(|value| keys.iter().any(|key| key == value));
                        // The key itself belongs to the selection's output.
                        track.valid = track.next_valid;
                    }
                }
                _ => track.valid = false,
            },
            Some(Container::Sequence) => match segment {
                Segment::Index(index) => track.valid = *index == track.counter,
                Segment::Set(indices) => {
                    track.valid = indices.is_empty() || indices.contains(&track.counter);
                }
                _ => track.valid = false,
            },
        }
        track.counter += 1;
    }

    fn enter_container(&mut self, kind: Container) -> FilterResult {
        let mut result = FilterResult::Out;
        if let Some(idx) = self.current_index() {
            if self.is_last(idx) && self.all_valid() {
                result = FilterResult::In;
            }
        } else if self.current_level > self.start_level && self.all_valid() {
            // Deeper than the path, inside the selected subtree.
            result = FilterResult::In;
        }
        self.current_level += 1;
        if let Some(idx) = self.current_index() {
            let track = &mut self.track[idx];
            track.node = Some(kind);
            track.counter = 0;
            if self.is_mandatory(idx) && self.preceding_valid(idx) {
                result = FilterResult::In;
            }
        }
        result
    }

    fn leave_container(&mut self) -> FilterResult {
        let mut result = FilterResult::Out;
        if let Some(idx) = self.current_index() {
            if self.is_mandatory(idx) && self.preceding_valid(idx) {
                result = FilterResult::In;
            }
        }
        self.current_level = self.current_level.saturating_sub(1);
        if let Some(idx) = self.current_index() {
            if self.is_last(idx) && self.all_valid() {
                result = FilterResult::In;
            }
        } else if self.current_level > self.start_level && self.all_valid() {
            result = FilterResult::In;
        }
        result
    }

    fn node_decision(&self) -> FilterResult {
        let Some(idx) = self.current_index() else {
            return if self.current_level >= self.start_level && self.all_valid() {
                FilterResult::In
            } else {
                FilterResult::Out
            };
        };
        let mut result = if self.is_last(idx) && self.all_valid() {
            FilterResult::In
        } else {
            FilterResult::Out
        };
        let track = &self.track[idx];
        // A key matched by a selection is forwarded even though its value
        // may not be; the odd counter means the event just consumed was a
        // key, so the value is still owed.
        if track.valid
            && track.node == Some(Container::Mapping)
            && track.counter % 2 == 1
            && self.is_mandatory(idx)
            && self.preceding_valid(idx)
        {
            result = FilterResult::InDanglingKey;
        }
        result
    }

    /// A segment whose selection semantics force the enclosing container's
    /// scaffold into the output even when nothing inside matches.
    fn is_mandatory(&self, idx: usize) -> bool {
        matches!(
            (&self.segments[idx], self.track[idx].node),
            (Segment::Selection(_), Some(Container::Mapping))
                | (Segment::Set(_), Some(Container::Sequence))
        )
    }

    fn preceding_valid(&self, idx: usize) -> bool {
        self.track[..idx].iter().all(|track| track.valid)
    }

    fn all_valid(&self) -> bool {
        self.track.iter().all(|track| track.valid)
    }

    fn is_last(&self, idx: usize) -> bool {
        idx + 1 == self.segments.len()
    }
}
