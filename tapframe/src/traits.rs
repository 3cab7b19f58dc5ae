pub use bytes::Buf;

/// Extends [`Buf`] with the two extra cursor motions the frame decoder
/// needs: stepping back over a header that turned out not to be one, and
/// dropping trailing padding that 802.3 length framing excludes.
pub trait PktBuf: Buf {
    /// Move the cursor back towards the start of the buffer.
    fn move_back(&mut self, cnt: usize);

    /// Remove trailing bytes from the buffer.
    fn trim_off(&mut self, cnt: usize);
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        (**self).move_back(cnt)
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        (**self).trim_off(cnt);
    }
}
