use core::fmt;

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Buf, PktBuf};

enum_sim! {
    /// An enum-like type for representing the 16-bit EtherType of an
    /// Ethernet frame.
    ///
    /// Covers the protocols commonly seen on a TAP device, plus the two
    /// standard tag protocol identifiers.
    pub struct EtherType (u16) {
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Arp protocol.
        ARP = 0x0806,
        /// Frame payload is reverse Arp protocol.
        RARP = 0x8035,
        /// Frame payload is AppleTalk protocol.
        APPLETALK = 0x809b,
        /// Frame payload is AppleTalk Arp protocol.
        AARP = 0x80f3,
        /// Frame payload is Novell IPX protocol.
        IPX = 0x8137,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86dd,
        /// Frame payload is CobraNet audio protocol.
        COBRANET = 0x8819,
        /// An 802.1Q VLAN tag follows the header.
        VLAN = 0x8100,
        /// An 802.1ad service tag follows the header.
        QINQ = 0x88a8,
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut parts = s.as_ref().split(':');
        for octet in result.iter_mut() {
            let part = parts.next()?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            *octet = u8::from_str_radix(part, 16).ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

/// A constant that defines the fixed byte length of the Ethernet header.
pub const ETHER_HEADER_LEN: usize = 14;

/// A read-only container for the 14-byte Ethernet header at the front of a
/// buffer.
#[derive(Debug)]
pub struct EtherFrame<T> {
    buf: T,
}
impl<T: Buf> EtherFrame<T> {
    /// Parse the buffer, requiring the full fixed header to be present.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < ETHER_HEADER_LEN {
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
    /// The fixed header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..14]
    }
    /// The destination address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.chunk()[0..6])
    }
    /// The source address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.chunk()[6..12])
    }
    /// The EtherType field, either a protocol id or an 802.3 length.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[12..14]))
    }
}
impl<T: PktBuf> EtherFrame<T> {
    /// Advance past the fixed header and give back the buffer.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(ETHER_HEADER_LEN);
        buf
    }
}
