use alloc::format;
use alloc::string::String;

use rstest::rstest;

use crate::{Path, PathError, PathErrorKind};

fn fail(text: &str) -> PathError {
    Path::parse(text).expect_err("path must be rejected")
}

/// Every rejected form. Reported positions must point inside the input (or
/// at its end for truncated paths).
#[rstest]
#[case("")]
#[case(".")]
#[case("$.")]
#[case("$$")]
#[case("$&")]
#[case("&")]
#[case("element[")]
#[case("[1,]")]
#[case("[,]")]
#[case("[1,:]")]
#[case("[1,2:]")]
#[case("[-1]")]
#[case("[0.]")]
#[case("[0:0]")]
#[case("[3:2]")]
#[case("[0:-1]")]
#[case("[::]")]
#[case("el[&]")]
#[case("el[&")]
#[case("el[&wrong.")]
#[case("el[&anchor]")]
#[case("el[&anchor].key")]
#[case("el[&anchor][100]")]
#[case("el[']")]
#[case("el['key].wrong")]
#[case("el['key.wrong")]
#[case("el['key'")]
#[case("el['key\"]")]
#[case("el[\"key']")]
#[case("el['k'ey']")]
#[case("el['key';'wrong']")]
#[case("el['key',]")]
#[case("el['key',invalid]")]
#[case("el['first',]")]
#[case("el[*]")]
#[case(".foo.&anc")]
#[case("el['a']x")]
fn rejected_path_reports_position_in_range(#[case] text: &str) {
    let err = fail(text);
    assert!(
        err.pos <= text.len(),
        "position {} beyond input of length {} for {text:?}",
        err.pos,
        text.len()
    );
}

#[rstest]
#[case("", PathErrorKind::Parse, 0)]
#[case(".", PathErrorKind::Parse, 0)]
#[case("$.", PathErrorKind::Parse, 1)]
#[case("$$", PathErrorKind::Section, 1)]
#[case("$&", PathErrorKind::Section, 1)]
#[case("&", PathErrorKind::Parse, 0)]
#[case("element[", PathErrorKind::Parse, 8)]
#[case("[1,]", PathErrorKind::Parse, 3)]
#[case("[,]", PathErrorKind::Parse, 1)]
#[case("[1,:]", PathErrorKind::Parse, 3)]
#[case("[-1]", PathErrorKind::Parse, 1)]
#[case("[0.]", PathErrorKind::Parse, 2)]
#[case("el[&anchor]", PathErrorKind::Section, 3)]
#[case("el['k'ey']", PathErrorKind::Parse, 6)]
#[case("el['key].wrong", PathErrorKind::Parse, 3)]
#[case("el['key',invalid]", PathErrorKind::Parse, 9)]
#[case("el[*]", PathErrorKind::Parse, 3)]
#[case(".foo.&anc", PathErrorKind::Section, 5)]
fn rejected_path_reports_kind_and_position(
    #[case] text: &str,
    #[case] kind: PathErrorKind,
    #[case] pos: usize,
) {
    let err = fail(text);
    assert_eq!(err.kind, kind, "kind for {text:?}");
    assert_eq!(err.pos, pos, "position for {text:?}");
}

#[test]
fn item_limits_are_section_errors() {
    let big_set = format!("[0:{}]", 300);
    assert_eq!(fail(&big_set).kind, PathErrorKind::Section);

    let keys: String = (0..300).map(|i| format!("'k{i}',")).collect();
    let big_selection = format!("el[{}'last']", keys);
    assert_eq!(fail(&big_selection).kind, PathErrorKind::Section);

    let indices: String = (0..300).map(|i| format!("{i},")).collect();
    let big_list = format!("el[{}9999]", indices);
    assert_eq!(fail(&big_list).kind, PathErrorKind::Section);
}

#[test]
fn error_message_displays_with_position() {
    let err = fail("$.");
    assert_eq!(format!("{err}"), format!("{} [at position 1]", err.message));
}
