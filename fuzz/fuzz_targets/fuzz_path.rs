//! Parser round-trip: any accepted path must print canonically, and the
//! canonical form must reparse to the same canonical form.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yamlpath::Path;

fuzz_target!(|text: &str| {
    match Path::parse(text) {
        Ok(path) => {
            let canonical = path.to_string();
            let reparsed = Path::parse(&canonical).expect("canonical form must reparse");
            assert_eq!(canonical, reparsed.to_string());
        }
        Err(err) => assert!(err.pos <= text.len()),
    }
});
