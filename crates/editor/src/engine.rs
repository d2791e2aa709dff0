//! The text-input engine.

use std::sync::mpsc::Receiver;

use caret_buffer::{edit, LineBuffer, Selection};
use caret_keyboard::KeyPress;

use crate::{EditorCommand, Snapshot, SnapshotBus};

/// Line buffer plus two-point cursor, driven by key presses.
///
/// The editor is the sole owner of its buffer and selection; every mutation
/// goes through [`TextEditor::handle_key`], which edits the buffer and
/// repositions the cursor atomically and then emits one [`Snapshot`] to the
/// subscribers. All index arithmetic self-clamps, so no key sequence can
/// produce an out-of-bounds state and nothing here returns an error.
#[derive(Debug)]
pub struct TextEditor {
    buffer: LineBuffer,
    selection: Selection,
    bus: SnapshotBus,
}

impl TextEditor {
    /// Editor over a single empty row, cursor collapsed at the origin.
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            selection: Selection::new(),
            bus: SnapshotBus::new(),
        }
    }

    /// Subscribe to the snapshot stream.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        self.bus.subscribe()
    }

    /// Current rows, without copying.
    pub fn rows(&self) -> &[String] {
        self.buffer.rows()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Snapshot of the current state with the cursor normalized.
    pub fn snapshot(&self) -> Snapshot {
        let (start, end) = self.selection.normalized();
        Snapshot {
            data: self.buffer.to_rows(),
            start,
            end,
        }
    }

    /// Handle one key press.
    ///
    /// Ignored keys (bare modifiers, Escape, dead keys) change nothing and
    /// emit nothing. Every other key mutates the state and publishes one
    /// snapshot; building the snapshot is skipped when nobody subscribed.
    pub fn handle_key(&mut self, press: KeyPress) {
        let command = EditorCommand::from_key_press(&press);
        if command == EditorCommand::Ignore {
            return;
        }

        self.apply(command);

        if self.bus.has_subscribers() {
            let snapshot = self.snapshot();
            self.bus.publish(snapshot);
        }
    }

    fn apply(&mut self, command: EditorCommand) {
        match command {
            // A plain arrow collapses an active window instead of moving;
            // with no window both endpoints travel together.
            EditorCommand::MoveRight => {
                if self.selection.is_windowed() {
                    self.selection.collapse_right();
                } else {
                    self.selection.move_both_col(1, &self.buffer);
                }
            }
            EditorCommand::MoveLeft => {
                if self.selection.is_windowed() {
                    self.selection.collapse_left();
                } else {
                    self.selection.move_both_col(-1, &self.buffer);
                }
            }
            EditorCommand::MoveDown => {
                if self.selection.is_windowed() {
                    self.selection.collapse_down(&self.buffer);
                } else {
                    self.selection.move_both_row(1, &self.buffer);
                }
            }
            EditorCommand::MoveUp => {
                if self.selection.is_windowed() {
                    self.selection.collapse_up(&self.buffer);
                } else {
                    self.selection.move_both_row(-1, &self.buffer);
                }
            }

            // Shift-extended movement only touches the moving endpoint.
            EditorCommand::ExtendRight => self.selection.move_end_col(1, &self.buffer),
            EditorCommand::ExtendLeft => self.selection.move_end_col(-1, &self.buffer),
            EditorCommand::ExtendDown => self.selection.move_end_row(1, &self.buffer),
            EditorCommand::ExtendUp => self.selection.move_end_row(-1, &self.buffer),

            EditorCommand::Backspace => {
                self.selection.normalize();
                // With no window, widen the range one char to the left first.
                let step: isize = if self.selection.is_windowed() { 0 } else { 1 };
                self.selection.move_start_col(-step, &self.buffer);
                self.buffer = edit::delete_range(&self.buffer, &mut self.selection);
                self.selection.sync_remembered();
            }
            EditorCommand::Delete => {
                self.selection.normalize();
                let step: isize = if self.selection.is_windowed() { 0 } else { 1 };
                self.selection.move_end_col(step, &self.buffer);
                self.buffer = edit::delete_range(&self.buffer, &mut self.selection);
                self.selection.sync_remembered();
            }
            EditorCommand::InsertNewline => {
                if self.selection.is_windowed() {
                    self.selection.normalize();
                    self.buffer = edit::delete_range(&self.buffer, &mut self.selection);
                }
                self.buffer = edit::split_line(&self.buffer, &mut self.selection);
                self.selection.sync_remembered();
            }
            EditorCommand::Insert(text) => {
                if self.selection.is_windowed() {
                    self.selection.normalize();
                    self.buffer = edit::replace_text(&self.buffer, &mut self.selection, &text);
                } else {
                    self.buffer = edit::insert_text(&self.buffer, &mut self.selection, &text);
                }
                self.selection.sync_remembered();
            }

            EditorCommand::Ignore => {}
        }
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}
