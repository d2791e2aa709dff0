//! Line-oriented text buffer with a two-point cursor for caret.
//!
//! Provides the storage ([`LineBuffer`]), the selection geometry
//! ([`Selection`], [`Position`]) and the edit operations ([`edit`]) that the
//! editor engine composes. The buffer is an ordered sequence of rows and is
//! never empty; selection endpoints always satisfy
//! `0 <= col <= row length`, so no operation here can fail.

pub mod edit;

mod line_buffer;
mod selection;

pub use line_buffer::LineBuffer;
pub use selection::{Direction, Position, Selection};
