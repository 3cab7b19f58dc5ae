//! 802.1Q and 802.1QinQ tag support.
//!
//! A tag sits between the Ethernet header and the encapsulated payload and
//! carries a 16-bit tag control value (priority, drop-eligible indicator and
//! VLAN id) followed by the EtherType of whatever comes next. QinQ stacks a
//! second tag, with the outer one announced by one of several tag protocol
//! identifiers.

use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::EtherType;
use crate::{Buf, PktBuf};

/// Tag protocol identifiers that announce an outer (QinQ-style) tag.
///
/// `0x8100` and `0x88a8` are the standard 802.1Q/802.1ad values; `0x9100`
/// and `0x9200` show up on older provider-bridge equipment.
pub const QINQ_TPIDS: [u16; 4] = [0x8100, 0x88a8, 0x9100, 0x9200];

/// Query whether `ethertype` announces an outer QinQ-style tag.
#[inline]
pub fn is_qinq_tpid(ethertype: EtherType) -> bool {
    QINQ_TPIDS.contains(&ethertype.raw())
}

/// The 16-bit tag control value carried by an 802.1Q tag.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct TagControl(pub u16);

impl TagControl {
    /// The 3-bit priority code point.
    #[inline]
    pub fn priority(&self) -> u8 {
        (self.0 >> 13) as u8
    }

    /// The drop eligible indicator (historically the CFI bit).
    #[inline]
    pub fn dei_flag(&self) -> bool {
        self.0 & 0x1000 != 0
    }

    /// The 12-bit VLAN identifier.
    #[inline]
    pub fn vlan_id(&self) -> u16 {
        self.0 & 0xfff
    }

    /// Get the raw value.
    #[inline]
    pub fn raw(&self) -> u16 {
        self.0
    }
}

/// A constant that defines the fixed byte length of a VLAN tag.
pub const VLAN_TAG_HEADER_LEN: usize = 4;

/// A read-only container for the 4-byte tag that follows a recognized tag
/// protocol identifier: the tag control value plus the inner EtherType.
#[derive(Debug)]
pub struct VlanTag<T> {
    buf: T,
}
impl<T: Buf> VlanTag<T> {
    /// Parse the buffer, requiring the full tag to be present.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < VLAN_TAG_HEADER_LEN {
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
    /// The tag control value.
    #[inline]
    pub fn tag_control(&self) -> TagControl {
        TagControl(NetworkEndian::read_u16(&self.buf.chunk()[0..2]))
    }
    /// The 3-bit priority code point.
    #[inline]
    pub fn priority(&self) -> u8 {
        self.buf.chunk()[0] >> 5
    }
    /// The drop eligible indicator.
    #[inline]
    pub fn dei_flag(&self) -> bool {
        self.buf.chunk()[0] & 0x10 != 0
    }
    /// The 12-bit VLAN identifier.
    #[inline]
    pub fn vlan_id(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.chunk()[0..2]) & 0xfff
    }
    /// The EtherType of whatever the tag encapsulates.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[2..4]))
    }
}
impl<T: PktBuf> VlanTag<T> {
    /// Advance past the tag and give back the buffer.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(VLAN_TAG_HEADER_LEN);
        buf
    }
}
