use alloc::string::{String, ToString};
use alloc::vec;

use quickcheck_macros::quickcheck;

use crate::{Path, Segment};

use super::arbitrary::ArbitrarySegments;

#[test]
fn segment_canonical_forms() {
    assert_eq!(Segment::Root.to_string(), "$");
    assert_eq!(Segment::Anchor("anc".into()).to_string(), "&anc");
    assert_eq!(Segment::Key("plain".into()).to_string(), ".plain");
    assert_eq!(Segment::Key("needs$quote".into()).to_string(), "['needs$quote']");
    assert_eq!(Segment::Key("it's".into()).to_string(), "[\"it's\"]");
    assert_eq!(Segment::Index(42).to_string(), "[42]");
    assert_eq!(Segment::Set(vec![]).to_string(), "[:]");
    assert_eq!(Segment::Set(vec![1, 2, 30]).to_string(), "[1,2,30]");
    assert_eq!(Segment::Selection(vec![]).to_string(), ".*");
    assert_eq!(
        Segment::Selection(vec!["a".into(), "b's".into()]).to_string(),
        "['a',\"b's\"]"
    );
}

#[test]
fn bracket_quoting_covers_every_special() {
    for special in ['[', ']', '(', ')', '.', '$', '&', '*'] {
        let mut key = String::from("k");
        key.push(special);
        let printed = Segment::Key(key).to_string();
        assert!(printed.starts_with("['"), "{printed} should be bracketed");
    }
}

/// Printing a parsed path is a fixed point.
#[quickcheck]
fn canonical_print_round_trips(segments: ArbitrarySegments) -> bool {
    let text: String = segments.0.iter().map(ToString::to_string).collect();
    let Ok(parsed) = Path::parse(&text) else {
        return false;
    };
    parsed.to_string() == text
}

/// Printing also preserves the segment structure for the generated paths
/// (which never use the one-item bracket form that canonicalises to `Key`).
#[quickcheck]
fn parse_preserves_generated_segments(segments: ArbitrarySegments) -> bool {
    let text: String = segments.0.iter().map(ToString::to_string).collect();
    let Ok(parsed) = Path::parse(&text) else {
        return false;
    };
    parsed.segments() == segments.0
}
