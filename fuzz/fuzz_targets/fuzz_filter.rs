//! Filter totality: any path driven over any event sequence, in any order,
//! must keep producing decisions without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yamlpath::{Event, Path};

#[derive(Arbitrary, Debug)]
enum RawEvent {
    Nothing,
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias(String),
    Scalar(String, Option<String>),
    SequenceStart(Option<String>),
    SequenceEnd,
    MappingStart(Option<String>),
    MappingEnd,
}

impl RawEvent {
    fn as_event(&self) -> Event<'_> {
        match self {
            RawEvent::Nothing => Event::Nothing,
            RawEvent::StreamStart => Event::StreamStart,
            RawEvent::StreamEnd => Event::StreamEnd,
            RawEvent::DocumentStart => Event::DocumentStart,
            RawEvent::DocumentEnd => Event::DocumentEnd,
            RawEvent::Alias(anchor) => Event::Alias { anchor },
            RawEvent::Scalar(value, anchor) => Event::Scalar {
                value,
                anchor: anchor.as_deref(),
            },
            RawEvent::SequenceStart(anchor) => Event::SequenceStart {
                anchor: anchor.as_deref(),
            },
            RawEvent::SequenceEnd => Event::SequenceEnd,
            RawEvent::MappingStart(anchor) => Event::MappingStart {
                anchor: anchor.as_deref(),
            },
            RawEvent::MappingEnd => Event::MappingEnd,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    path: String,
    events: Vec<RawEvent>,
    reset_at: Option<usize>,
}

fuzz_target!(|input: Input| {
    let Ok(mut path) = Path::parse(&input.path) else {
        return;
    };
    for (i, raw) in input.events.iter().enumerate() {
        if input.reset_at == Some(i) {
            path.reset();
        }
        let _ = path.filter_event(&raw.as_event());
    }
});
