//! Text-input engine for caret.
//!
//! [`TextEditor`] owns a line buffer and a two-point selection, consumes
//! [`caret_keyboard::KeyPress`] input, and emits a [`Snapshot`] of the full
//! buffer plus the normalized selection after every handled key. Dispatch
//! goes through [`EditorCommand`], a plain enumerated command set.
//!
//! The engine is single-threaded and synchronous: each key press is handled
//! to completion (buffer edited, cursor repositioned, snapshot emitted)
//! before the next one is looked at.

mod command;
mod engine;
mod snapshot;

pub use command::EditorCommand;
pub use engine::TextEditor;
pub use snapshot::{Snapshot, SnapshotBus};
