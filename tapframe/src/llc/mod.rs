//! IEEE 802.2 LLC and SNAP header support.
//!
//! In 802.3 length-framed packets the payload starts with a 3-byte LLC
//! header (DSAP, SSAP, control). When both service access points carry the
//! SNAP value, a 5-byte SNAP extension follows with an organizationally
//! unique identifier and the real EtherType of the payload.

use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::EtherType;
use crate::{Buf, PktBuf};

/// The service access point value that marks a SNAP extension header.
pub const SNAP_SAP: u8 = 0xaa;

/// A constant that defines the fixed byte length of the Llc protocol header.
pub const LLC_HEADER_LEN: usize = 3;

/// A read-only container for the 3-byte LLC header.
#[derive(Debug)]
pub struct Llc<T> {
    buf: T,
}
impl<T: Buf> Llc<T> {
    /// Parse the buffer, requiring the full header to be present.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < LLC_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    /// A reference to the contained buffer.
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    /// Give back the contained buffer.
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    /// The destination service access point.
    #[inline]
    pub fn dsap(&self) -> u8 {
        self.buf.chunk()[0]
    }
    /// The source service access point.
    #[inline]
    pub fn ssap(&self) -> u8 {
        self.buf.chunk()[1]
    }
    /// The control field.
    #[inline]
    pub fn control(&self) -> u8 {
        self.buf.chunk()[2]
    }
    /// Query whether both service access points announce a SNAP header.
    ///
    /// The low-order bit of a SAP is the individual/group bit, so it is
    /// masked out before the comparison.
    #[inline]
    pub fn is_snap(&self) -> bool {
        (self.dsap() & 0xfe) == SNAP_SAP && (self.ssap() & 0xfe) == SNAP_SAP
    }
}
impl<T: PktBuf> Llc<T> {
    /// Advance past the header and give back the buffer.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(LLC_HEADER_LEN);
        buf
    }
}

/// A constant that defines the fixed byte length of the SNAP extension
/// header.
pub const SNAP_HEADER_LEN: usize = 5;

/// A read-only container for the 5-byte SNAP extension header that follows
/// an LLC header with SNAP service access points.
#[derive(Debug)]
pub struct Snap<T> {
    buf: T,
}
impl<T: Buf> Snap<T> {
    /// Parse the buffer, requiring the full header to be present.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < SNAP_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    /// A reference to the contained buffer.
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    /// Give back the contained buffer.
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    /// The organizationally unique identifier.
    ///
    /// Packed as `b0 << 8 | b1 << 4 | b2`, not as a plain big-endian merge.
    #[inline]
    pub fn oui(&self) -> u32 {
        let chunk = self.buf.chunk();
        (chunk[0] as u32) << 8 | (chunk[1] as u32) << 4 | (chunk[2] as u32)
    }
    /// The EtherType of the encapsulated payload.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[3..5]))
    }
}
impl<T: PktBuf> Snap<T> {
    /// Advance past the header and give back the buffer.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(SNAP_HEADER_LEN);
        buf
    }
}
