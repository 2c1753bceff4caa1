//! Safe wrapper over `unsafe-libyaml`'s event API.
//!
//! Only the slice of libyaml this tool needs: pull-parsing a byte buffer
//! into [`event::YamlEvent`]s and emitting those events back out. Events are
//! owned and carry anchors, tags and styles so a parsed event can be handed
//! straight back to the emitter.

pub mod emitter;
pub mod error;
pub mod event;
pub mod parser;
mod util;

pub use emitter::Emitter;
pub use error::{Error, Mark, Result};
pub use event::YamlEvent;
pub use parser::Parser;
