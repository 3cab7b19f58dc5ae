use bytes::Buf;

use crate::PktBuf;

/// A read-only cursor over a byte slice.
///
/// The cursor remembers its offset into the original slice, so a header walk
/// can advance over headers, step back after a misclassified tag, and trim
/// length-framed padding off the tail without losing the full buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            start: 0,
            end: buf.len(),
        }
    }

    /// All bytes from the start of the original slice up to the current
    /// trailing edge, regardless of the cursor position.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        &self.buf[..self.end]
    }

    /// The remaining bytes, borrowed with the lifetime of the underlying
    /// slice rather than the lifetime of the cursor.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.start..self.end]
    }

    /// Current offset from the start of the original slice.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for Cursor<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}
