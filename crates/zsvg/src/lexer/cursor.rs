//! Forward-only byte cursor that maps offsets to line/column positions

use crate::error::Pos;

/// Cursor over the raw markup, tracking line and column as it advances
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor from byte slice
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Advance until `offset` (clamped to the input length).
    ///
    /// Offsets behind the cursor are ignored; the cursor never rewinds.
    pub fn advance_to(&mut self, offset: usize) {
        let target = offset.min(self.input.len());
        while self.pos < target {
            self.advance();
        }
    }

    /// Position of `offset`, advancing the cursor to it first
    pub fn locate(&mut self, offset: usize) -> Pos {
        self.advance_to(offset);
        self.position()
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }
}
