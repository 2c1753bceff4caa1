//! The `yamlp` driver: plumb a YAML document through a [`yamlpath::Path`].
//!
//! The core filter is parser-agnostic; this crate supplies the concrete
//! plumbing around it: a safe wrapper over libyaml's event parser and
//! emitter (which preserves anchors, aliases, tags and node styles, all of
//! which the filtered output must reproduce), and the [`driver`] loop that
//! forwards, drops, and synthesises events according to the filter's
//! decisions.

pub mod driver;
pub mod libyaml;
