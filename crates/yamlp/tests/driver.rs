//! Driver-level behaviors that don't need the big fixed document: block
//! input, forced flow style, stream reuse, and error propagation.

use yamlp::driver::{self, Options, StreamError};
use yamlpath::Path;

fn filter(input: &str, path: &mut Path, options: Options) -> Result<String, StreamError> {
    let mut output = Vec::new();
    driver::filter_stream(input.as_bytes(), path, &mut output, options)?;
    Ok(String::from_utf8(output).expect("emitter writes UTF-8"))
}

fn trimmed(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_whitespace() || c == '.')
}

#[test]
fn block_style_input() {
    let mut path = Path::parse(".a").unwrap();
    let out = filter("a: 1\nb: 2\n", &mut path, Options::default()).unwrap();
    assert_eq!(trimmed(&out), "1");
}

#[test]
fn block_subtree_is_reproduced_in_block_style() {
    let mut path = Path::parse(".b").unwrap();
    let out = filter("a: 1\nb:\n  x: 1\n  y: 2\n", &mut path, Options::default()).unwrap();
    assert_eq!(trimmed(&out), "x: 1\ny: 2");
}

#[test]
fn forced_flow_style() {
    let mut path = Path::parse(".b").unwrap();
    let options = Options {
        flow: true,
        ..Options::default()
    };
    let out = filter("a: 1\nb:\n  x: 1\n  y: 2\n", &mut path, options).unwrap();
    assert_eq!(trimmed(&out), "{x: 1, y: 2}");
}

#[test]
fn missing_selection_yields_null_document() {
    let mut path = Path::parse(".absent").unwrap();
    let out = filter("a: 1\n", &mut path, Options::default()).unwrap();
    assert_eq!(trimmed(&out), "null");
}

#[test]
fn quoting_styles_survive_the_round_trip() {
    let mut path = Path::parse(".a").unwrap();
    let out = filter("a: ['x', \"y\", z]\n", &mut path, Options::default()).unwrap();
    assert_eq!(trimmed(&out), "['x', \"y\", z]");
}

#[test]
fn path_reuse_needs_reset() {
    let mut path = Path::parse(".a").unwrap();
    let first = filter("a: 1\n", &mut path, Options::default()).unwrap();
    path.reset();
    let second = filter("a: 1\n", &mut path, Options::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_input_is_a_parser_error() {
    let mut path = Path::parse(".a").unwrap();
    let err = filter("a: [1, 2\n", &mut path, Options::default()).unwrap_err();
    assert!(matches!(err, StreamError::Parser(_)), "{err}");
}

#[test]
fn parser_error_mentions_the_problem() {
    let mut path = Path::parse(".a").unwrap();
    let err = filter("'unterminated\n", &mut path, Options::default()).unwrap_err();
    assert!(err.to_string().starts_with("Parser error:"), "{err}");
}
