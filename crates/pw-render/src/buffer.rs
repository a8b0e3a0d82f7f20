// SPDX-License-Identifier: MIT
//
// Markup buffering.
//
// MarkupBuffer accumulates a whole document in memory so it reaches the
// destination in a single write, and tracks element nesting so pretty
// output gets consistent indentation without every writer function
// knowing its depth.
//
// Element bodies are written by the pure functions in `svg`; this type
// only decides where lines start and end.

use std::io::{self, Write};

const DEFAULT_CAPACITY: usize = 4096;
const INDENT: &[u8] = b"  ";

/// A byte buffer for one markup document.
#[derive(Debug, Clone)]
pub struct MarkupBuffer {
    buf: Vec<u8>,
    depth: usize,
    pretty: bool,
}

impl MarkupBuffer {
    /// Create an empty buffer. `pretty` puts each element on its own
    /// indented line.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
            depth: 0,
            pretty,
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Current nesting depth.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Write an opening tag and nest one level.
    ///
    /// # Errors
    ///
    /// Propagates errors from `write`.
    pub fn open(&mut self, write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<()> {
        self.line(write)?;
        self.depth += 1;
        Ok(())
    }

    /// Write a self-closing element at the current depth.
    ///
    /// # Errors
    ///
    /// Propagates errors from `write`.
    pub fn leaf(&mut self, write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<()> {
        self.line(write)
    }

    /// Un-nest one level and write a closing tag.
    ///
    /// # Errors
    ///
    /// Propagates errors from `write`.
    pub fn close(&mut self, write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<()> {
        debug_assert!(self.depth > 0, "close without matching open");
        self.depth = self.depth.saturating_sub(1);
        self.line(write)
    }

    fn line(&mut self, write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<()> {
        if self.pretty {
            for _ in 0..self.depth {
                self.buf.extend_from_slice(INDENT);
            }
        }
        write(&mut self.buf)?;
        if self.pretty {
            self.buf.push(b'\n');
        }
        Ok(())
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
        self.depth = 0;
    }

    /// Write accumulated output to `w` and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut dyn Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.clear();
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
