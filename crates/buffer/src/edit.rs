//! Edit operations over a [`LineBuffer`] and a [`Selection`].
//!
//! Each operation takes the buffer by reference and returns a new buffer
//! (copy-on-write at the row level), repositioning the selection so it stays
//! consistent with the edited rows. Destructive range operations assume the
//! selection has been normalized by the caller.

use crate::{LineBuffer, Selection};

/// Byte offset of char index `col` in `line`, or the line end past it.
fn byte_at(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}

/// Delete the text between the selection endpoints.
///
/// Same-row ranges splice `[start.col, end.col)` out of the row. Multi-row
/// ranges merge the first row's prefix with the last row's suffix and drop
/// every row in between. Collapses `end` onto `start`.
pub fn delete_range(buf: &LineBuffer, sel: &mut Selection) -> LineBuffer {
    let (start, end) = (sel.start, sel.end);
    let mut rows = buf.to_rows();

    if start.row == end.row {
        let line = &rows[start.row];
        let head = byte_at(line, start.col);
        let tail = byte_at(line, end.col);
        let mut merged = String::with_capacity(line.len());
        merged.push_str(&line[..head]);
        merged.push_str(&line[tail..]);
        rows[start.row] = merged;
    } else {
        let merged = {
            let first = &rows[start.row];
            let last = &rows[end.row];
            let mut merged = String::from(&first[..byte_at(first, start.col)]);
            merged.push_str(&last[byte_at(last, end.col)..]);
            merged
        };
        rows.splice(start.row..=end.row, std::iter::once(merged));
    }

    sel.end = sel.start;
    LineBuffer::from_rows(rows)
}

/// Insert `text` at `start`.
///
/// `text` never contains embedded newlines; a line break is [`split_line`].
/// Advances `start` past the inserted text and collapses `end` onto it.
pub fn insert_text(buf: &LineBuffer, sel: &mut Selection, text: &str) -> LineBuffer {
    let mut rows = buf.to_rows();
    let line = &rows[sel.start.row];
    let at = byte_at(line, sel.start.col);

    let mut spliced = String::with_capacity(line.len() + text.len());
    spliced.push_str(&line[..at]);
    spliced.push_str(text);
    spliced.push_str(&line[at..]);
    rows[sel.start.row] = spliced;

    sel.start.col += text.chars().count();
    sel.end.col = sel.start.col;
    LineBuffer::from_rows(rows)
}

/// Delete the selected range, then insert `text` at the collapsed point.
pub fn replace_text(buf: &LineBuffer, sel: &mut Selection, text: &str) -> LineBuffer {
    let deleted = delete_range(buf, sel);
    insert_text(&deleted, sel, text)
}

/// Split the row at `start` into two rows.
///
/// The prefix keeps the row index, the suffix becomes a new row below it.
/// The cursor collapses to column 0 of the new row.
pub fn split_line(buf: &LineBuffer, sel: &mut Selection) -> LineBuffer {
    let mut rows = buf.to_rows();
    let line = std::mem::take(&mut rows[sel.start.row]);
    let at = byte_at(&line, sel.start.col);
    let (head, tail) = line.split_at(at);
    rows.splice(
        sel.start.row..=sel.start.row,
        [head.to_string(), tail.to_string()],
    );

    sel.start.row += 1;
    sel.start.col = 0;
    sel.end = sel.start;
    LineBuffer::from_rows(rows)
}
