//! Selection geometry: a pair of positions over a [`LineBuffer`] plus the
//! remembered ("sticky") column used by vertical movement.

use crate::LineBuffer;

/// A position within a line buffer.
///
/// `col` may equal the length of its row (caret after the last char) but
/// never exceeds it. Ordering is document order: row first, then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Position at the given row and column.
    pub fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Relationship between the two selection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Both endpoints coincide; no window is active.
    Collapsed,
    /// `start` precedes `end` in document order (built left-to-right).
    Forward,
    /// `start` follows `end` in document order (built right-to-left).
    Backward,
}

/// Two-point cursor over a [`LineBuffer`].
///
/// `start` is the anchored endpoint, `end` the moving one; shift-extended
/// movement only touches `end`. Movement primitives borrow the owning buffer
/// for row geometry and clamp every result, so both endpoints always stay
/// within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
    remembered: usize,
}

impl Selection {
    /// Collapsed selection at the buffer origin.
    pub fn new() -> Self {
        Self {
            start: Position::default(),
            end: Position::default(),
            remembered: 0,
        }
    }

    /// True when the two endpoints differ (a range is windowed).
    pub fn is_windowed(&self) -> bool {
        self.start != self.end
    }

    /// Direction of the active window, or [`Direction::Collapsed`].
    pub fn direction(&self) -> Direction {
        if !self.is_windowed() {
            Direction::Collapsed
        } else if self.start > self.end {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// The endpoints in document order, without reordering them in place.
    pub fn normalized(&self) -> (Position, Position) {
        if self.start > self.end {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    /// Swap the endpoints in place so that `start <= end` in document order.
    ///
    /// Idempotent; callers normalize before destructive range operations.
    pub fn normalize(&mut self) {
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    /// The remembered column used by vertical movement.
    pub fn remembered(&self) -> usize {
        self.remembered
    }

    /// Resync the remembered column from `start`.
    ///
    /// Always reads `start.col`, even when `end` was the endpoint that just
    /// moved. Preserved from the observed behavior of the widget this engine
    /// replaces; see DESIGN.md.
    pub fn sync_remembered(&mut self) {
        self.remembered = self.start.col;
    }

    // === Movement primitives ===

    /// Horizontal move of a single point by `delta` columns.
    ///
    /// Wraps across row boundaries, consuming one virtual newline char per
    /// wrap: moving left past column 0 lands at the end of the previous row,
    /// moving right past the row length carries the remaining distance onto
    /// the next row. The final column clamps to `[0, row length]`. Does not
    /// touch the remembered column.
    fn shift_col(&self, point: Position, delta: isize, buf: &LineBuffer) -> Position {
        let mut row = point.row;
        let mut col = point.col as isize + delta;
        let mut carry = delta;

        while col < 0 && row > 0 && buf.is_valid_row(row - 1) {
            row -= 1;
            col += buf.row_len(row) as isize + 1;
        }

        while col > buf.row_len(row) as isize && buf.is_valid_row(row + 1) {
            carry -= buf.row_len(row) as isize + 1 - (col - carry);
            col = carry;
            row += 1;
        }

        let len = buf.row_len(row) as isize;
        if col < 0 {
            col = 0;
        }
        if col >= len {
            col = len;
        }

        Position::at(row, col as usize)
    }

    /// Vertical move of a single point by `delta` rows.
    ///
    /// The target row clamps to `[0, last row]`. The column becomes the
    /// remembered column when it fits in the target row, else the row length.
    /// Does not touch the remembered column.
    fn shift_row(&self, point: Position, delta: isize, buf: &LineBuffer) -> Position {
        let target = point.row as isize + delta;
        let row = if target >= 0 && buf.is_valid_row(target as usize) {
            target as usize
        } else if target < 0 {
            0
        } else {
            buf.row_count() - 1
        };

        let len = buf.row_len(row);
        let col = if self.remembered <= len {
            self.remembered
        } else {
            len
        };

        Position::at(row, col)
    }

    // === Single-endpoint moves ===

    pub fn move_start_col(&mut self, delta: isize, buf: &LineBuffer) {
        self.start = self.shift_col(self.start, delta, buf);
    }

    /// Move `end` horizontally. Resyncs the remembered column from `start`.
    pub fn move_end_col(&mut self, delta: isize, buf: &LineBuffer) {
        self.end = self.shift_col(self.end, delta, buf);
        self.sync_remembered();
    }

    pub fn move_start_row(&mut self, delta: isize, buf: &LineBuffer) {
        self.start = self.shift_row(self.start, delta, buf);
    }

    pub fn move_end_row(&mut self, delta: isize, buf: &LineBuffer) {
        self.end = self.shift_row(self.end, delta, buf);
    }

    // === Both-endpoint moves ===

    /// Move both endpoints horizontally by `delta`.
    ///
    /// When collapsed, `end` leads and `start` follows it, so the remembered
    /// column picks up the pre-move column of `start`.
    pub fn move_both_col(&mut self, delta: isize, buf: &LineBuffer) {
        if self.start == self.end {
            self.move_end_col(delta, buf);
            self.start = self.end;
        } else {
            self.move_end_col(delta, buf);
            self.move_start_col(delta, buf);
        }
    }

    /// Move both endpoints vertically by `delta`.
    pub fn move_both_row(&mut self, delta: isize, buf: &LineBuffer) {
        if self.start == self.end {
            self.move_start_row(delta, buf);
            self.end = self.start;
        } else {
            self.move_start_row(delta, buf);
            self.move_end_row(delta, buf);
        }
    }

    // === Endpoint collapsing ===

    /// Collapse `end` onto `start`. Resyncs the remembered column.
    pub fn move_end_to_start(&mut self) {
        self.end = self.start;
        self.sync_remembered();
    }

    /// Collapse `start` onto `end`.
    pub fn move_start_to_end(&mut self) {
        self.start = self.end;
    }

    /// Collapse an active window for a plain ArrowRight.
    ///
    /// The caret lands on the endpoint the window ended at, with no further
    /// step. A collapsed selection is left untouched.
    pub fn collapse_right(&mut self) {
        match self.direction() {
            Direction::Forward => self.move_start_to_end(),
            Direction::Backward => self.move_end_to_start(),
            Direction::Collapsed => {}
        }
    }

    /// Collapse an active window for a plain ArrowLeft.
    ///
    /// Identical to [`Self::collapse_right`]: the caret lands on the endpoint
    /// the window ended at regardless of travel direction. Preserved from the
    /// observed behavior; see DESIGN.md.
    pub fn collapse_left(&mut self) {
        match self.direction() {
            Direction::Forward => self.move_start_to_end(),
            Direction::Backward => self.move_end_to_start(),
            Direction::Collapsed => {}
        }
    }

    /// Collapse an active window to its low edge, then move one row up.
    pub fn collapse_up(&mut self, buf: &LineBuffer) {
        if self.direction() == Direction::Backward {
            self.move_start_to_end();
        } else {
            self.move_end_to_start();
        }
        self.move_both_row(-1, buf);
    }

    /// Collapse an active window to its high edge, then move one row down.
    pub fn collapse_down(&mut self, buf: &LineBuffer) {
        if self.direction() == Direction::Backward {
            self.move_end_to_start();
        } else {
            self.move_start_to_end();
        }
        self.move_both_row(1, buf);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(rows: &[&str]) -> LineBuffer {
        LineBuffer::from_rows(rows.iter().map(|r| r.to_string()).collect())
    }

    fn selection_at(row: usize, col: usize) -> Selection {
        let mut sel = Selection::new();
        sel.start = Position::at(row, col);
        sel.end = sel.start;
        sel.sync_remembered();
        sel
    }

    #[test]
    fn test_document_order() {
        assert!(Position::at(1, 0) > Position::at(0, 9));
        assert!(Position::at(2, 3) > Position::at(2, 2));
        assert_eq!(Position::at(1, 1), Position::at(1, 1));
    }

    #[test]
    fn test_direction() {
        let mut sel = selection_at(0, 2);
        assert_eq!(sel.direction(), Direction::Collapsed);

        sel.end = Position::at(0, 6);
        assert_eq!(sel.direction(), Direction::Forward);

        sel.start = Position::at(1, 0);
        assert_eq!(sel.direction(), Direction::Backward);
    }

    #[test]
    fn test_normalize_reorders_backward_selection() {
        let mut sel = selection_at(1, 3);
        sel.end = Position::at(0, 5);
        sel.normalize();
        assert_eq!(sel.start, Position::at(0, 5));
        assert_eq!(sel.end, Position::at(1, 3));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut sel = selection_at(2, 1);
        sel.end = Position::at(0, 4);
        sel.normalize();
        let once = sel.clone();
        sel.normalize();
        assert_eq!(sel, once);
    }

    #[test]
    fn test_normalized_view_does_not_reorder_in_place() {
        let mut sel = selection_at(1, 0);
        sel.end = Position::at(0, 2);
        let (low, high) = sel.normalized();
        assert_eq!(low, Position::at(0, 2));
        assert_eq!(high, Position::at(1, 0));
        // Endpoint identities untouched.
        assert_eq!(sel.start, Position::at(1, 0));
        assert_eq!(sel.end, Position::at(0, 2));
    }

    #[test]
    fn test_shift_col_clamps_at_buffer_edges() {
        let b = buf(&["abc"]);
        let mut sel = selection_at(0, 0);
        sel.move_both_col(-1, &b);
        assert_eq!(sel.start, Position::at(0, 0));

        let mut sel = selection_at(0, 3);
        sel.move_both_col(5, &b);
        assert_eq!(sel.start, Position::at(0, 3));
    }

    #[test]
    fn test_shift_col_wraps_left_to_previous_row_end() {
        let b = buf(&["hello", "x"]);
        let mut sel = selection_at(1, 0);
        sel.move_both_col(-1, &b);
        assert_eq!(sel.start, Position::at(0, 5));
        assert_eq!(sel.end, Position::at(0, 5));
    }

    #[test]
    fn test_shift_col_wraps_right_to_next_row_start() {
        let b = buf(&["ab", "cdef"]);
        let mut sel = selection_at(0, 2);
        sel.move_both_col(1, &b);
        assert_eq!(sel.start, Position::at(1, 0));
    }

    #[test]
    fn test_shift_col_long_jump_wraps_multiple_rows() {
        // From (0,1): one step to the end of "ab", one for its newline,
        // three across "cd" and its newline, two into "efgh".
        let b = buf(&["ab", "cd", "efgh"]);
        let mut sel = selection_at(0, 1);
        sel.move_both_col(7, &b);
        assert_eq!(sel.start, Position::at(2, 2));
    }

    #[test]
    fn test_shift_row_clamps_to_first_and_last_row() {
        let b = buf(&["aa", "bb", "cc"]);
        let mut sel = selection_at(1, 1);
        sel.move_both_row(-5, &b);
        assert_eq!(sel.start.row, 0);

        let mut sel = selection_at(1, 1);
        sel.move_both_row(5, &b);
        assert_eq!(sel.start.row, 2);
    }

    #[test]
    fn test_sticky_column_restored_through_short_row() {
        let b = buf(&["hello world", "ab", "hello again"]);
        let mut sel = selection_at(0, 5);

        sel.move_both_row(1, &b);
        assert_eq!(sel.start, Position::at(1, 2));

        sel.move_both_row(1, &b);
        assert_eq!(sel.start, Position::at(2, 5));

        sel.move_both_row(-2, &b);
        assert_eq!(sel.start, Position::at(0, 5));
    }

    #[test]
    fn test_collapse_right_lands_on_window_edge() {
        let mut sel = selection_at(0, 2);
        sel.end = Position::at(0, 6);

        sel.collapse_right();
        assert_eq!(sel.start, Position::at(0, 6));
        assert_eq!(sel.end, Position::at(0, 6));
        assert!(!sel.is_windowed());
    }

    #[test]
    fn test_collapse_left_matches_collapse_right() {
        // Both horizontal collapses land on the endpoint the window ended
        // at; ArrowLeft is not the mirror image.
        let mut right = selection_at(0, 2);
        right.end = Position::at(0, 6);
        right.collapse_right();

        let mut left = selection_at(0, 2);
        left.end = Position::at(0, 6);
        left.collapse_left();

        assert_eq!(left, right);
    }

    #[test]
    fn test_collapse_up_lands_on_low_edge_then_moves() {
        let b = buf(&["aaaa", "bbbb", "cccc"]);
        let mut sel = selection_at(1, 2);
        sel.end = Position::at(2, 1);

        sel.collapse_up(&b);
        // Low edge is (1,2); one row up from there is row 0.
        assert_eq!(sel.start.row, 0);
        assert!(!sel.is_windowed());
    }

    #[test]
    fn test_collapse_down_lands_on_high_edge_then_moves() {
        let b = buf(&["aaaa", "bbbb", "cccc"]);
        let mut sel = selection_at(0, 1);
        sel.end = Position::at(1, 2);

        sel.collapse_down(&b);
        assert_eq!(sel.start.row, 2);
        assert!(!sel.is_windowed());
    }

    #[test]
    fn test_shift_extend_moves_only_end() {
        let b = buf(&["abcdef"]);
        let mut sel = selection_at(0, 2);
        sel.move_end_col(2, &b);
        assert_eq!(sel.start, Position::at(0, 2));
        assert_eq!(sel.end, Position::at(0, 4));
        assert_eq!(sel.direction(), Direction::Forward);
    }

    #[test]
    fn test_remembered_resyncs_from_start_after_end_move() {
        let b = buf(&["abcdef"]);
        let mut sel = selection_at(0, 2);
        sel.move_end_col(3, &b);
        // Resync reads start.col, not the endpoint that moved.
        assert_eq!(sel.remembered(), 2);
    }

    #[test]
    fn test_remembered_trails_collapsed_horizontal_moves() {
        // With a collapsed cursor, end leads the move and the resync picks
        // up start's pre-move column.
        let b = buf(&["abcdef"]);
        let mut sel = selection_at(0, 3);
        sel.move_both_col(1, &b);
        assert_eq!(sel.start, Position::at(0, 4));
        assert_eq!(sel.remembered(), 3);
    }

    #[test]
    fn test_column_bounds_hold_after_mixed_movement() {
        let b = buf(&["hello", "", "a much longer row here"]);
        let mut sel = selection_at(0, 4);
        let moves: [(isize, bool); 8] = [
            (1, false),
            (1, true),
            (-3, false),
            (2, true),
            (-1, true),
            (4, false),
            (-2, false),
            (1, true),
        ];
        for (delta, vertical) in moves {
            if vertical {
                sel.move_both_row(delta, &b);
            } else {
                sel.move_both_col(delta, &b);
            }
            for point in [sel.start, sel.end] {
                assert!(point.row < b.row_count());
                assert!(point.col <= b.row_len(point.row));
            }
        }
    }
}
