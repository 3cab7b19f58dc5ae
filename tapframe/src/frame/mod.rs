//! Classification and decomposition of captured link-layer frames.
//!
//! [`Frame::parse`] walks the headers of a raw frame once and returns an
//! owned, immutable description: the framing variant, both hardware
//! addresses, the 802.1Q/QinQ tag stack, the LLC/SNAP fields where they
//! apply, and a copy of the payload.

use crate::ether::{EtherAddr, EtherFrame, EtherType};
use crate::llc::{Llc, Snap, LLC_HEADER_LEN, SNAP_HEADER_LEN};
use crate::vlan::{is_qinq_tpid, TagControl, VlanTag, VLAN_TAG_HEADER_LEN};
use crate::{Buf, Cursor, Error, PktBuf};

/// The framing variant of a decoded frame.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum FrameType {
    /// An Ethernet II frame; the EtherType field is a protocol id.
    EthernetII,
    /// A legacy raw 802.3 frame, by convention always carrying IPX.
    EthernetRaw,
    /// An IEEE 802.2/802.3 length-framed packet with an LLC header.
    EthernetIeee,
    /// An IEEE 802.2 packet whose LLC header announces a SNAP extension.
    EthernetSnap,
}

/// The outer tag of a QinQ-tagged frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct QinqTag {
    /// The tag protocol identifier that announced the tag.
    pub tpid: EtherType,
    /// The tag control value carried by the tag.
    pub tag_control: TagControl,
}

/// The LLC header fields of an IEEE 802.2 frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct LlcInfo {
    /// The destination service access point.
    pub dsap: u8,
    /// The source service access point.
    pub ssap: u8,
    /// The control field.
    pub control: u8,
}

/// A decoded link-layer frame.
///
/// Produced by [`Frame::parse`] and immutable afterwards. The payload is an
/// owned copy, so a `Frame` does not borrow the capture buffer it was
/// decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    frame_type: FrameType,
    dst_addr: EtherAddr,
    src_addr: EtherAddr,
    ethertype: EtherType,
    qinq: Option<QinqTag>,
    vlan: Option<TagControl>,
    llc: Option<LlcInfo>,
    oui: Option<u32>,
    payload: Vec<u8>,
}

impl Frame {
    /// Decode a raw frame as read from a TAP device.
    ///
    /// Every multi-byte read is bounds-checked; the function fails with
    /// [`Error::TruncatedFrame`] whenever the input ends before a header, a
    /// tag or a length-framed payload could be read in full.
    pub fn parse(data: &[u8]) -> Result<Frame, Error> {
        let ether = EtherFrame::parse(Cursor::new(data)).map_err(|_| Error::TruncatedFrame)?;
        let dst_addr = ether.dst_addr();
        let src_addr = ether.src_addr();
        let link_ethertype = ether.ethertype();
        let mut ethertype = link_ethertype;
        let mut cur = ether.payload();

        // Outer QinQ-style tag.
        let mut qinq = None;
        if is_qinq_tpid(ethertype) {
            let tag = VlanTag::parse(cur).map_err(|_| Error::TruncatedFrame)?;
            qinq = Some(QinqTag {
                tpid: ethertype,
                tag_control: tag.tag_control(),
            });
            ethertype = tag.ethertype();
            cur = tag.payload();
        }

        // Inner 802.1Q tag.
        let mut vlan = None;
        if ethertype == EtherType::VLAN {
            let tag = VlanTag::parse(cur).map_err(|_| Error::TruncatedFrame)?;
            vlan = Some(tag.tag_control());
            ethertype = tag.ethertype();
            cur = tag.payload();
        } else if let Some(outer) = qinq.take() {
            if outer.tpid == EtherType::VLAN {
                // The outer tag was a bare 802.1Q tag after all.
                vlan = Some(outer.tag_control);
            } else {
                // Nothing recognizable follows the outer tag; undo the
                // detection and continue with the untagged layout.
                cur.move_back(VLAN_TAG_HEADER_LEN);
                ethertype = link_ethertype;
            }
        }

        let frame_type;
        let mut llc = None;
        let mut oui = None;
        let payload;
        if ethertype.raw() >= 0x0800 {
            frame_type = FrameType::EthernetII;
            payload = cur.chunk().to_vec();
        } else {
            // The EtherType is an 802.3 length field.
            let mut len = ethertype.raw() as usize;
            if cur.remaining() < 2 {
                return Err(Error::TruncatedFrame);
            }
            if cur.chunk()[0] == 0xff && cur.chunk()[1] == 0xff {
                // Raw 802.3; the two 0xff bytes stay in the payload.
                frame_type = FrameType::EthernetRaw;
                ethertype = EtherType::IPX;
            } else {
                let hdr = Llc::parse(cur).map_err(|_| Error::TruncatedFrame)?;
                llc = Some(LlcInfo {
                    dsap: hdr.dsap(),
                    ssap: hdr.ssap(),
                    control: hdr.control(),
                });
                let has_snap = hdr.is_snap();
                len = len.checked_sub(LLC_HEADER_LEN).ok_or(Error::TruncatedFrame)?;
                cur = hdr.payload();
                if has_snap {
                    frame_type = FrameType::EthernetSnap;
                    let snap = Snap::parse(cur).map_err(|_| Error::TruncatedFrame)?;
                    oui = Some(snap.oui());
                    ethertype = snap.ethertype();
                    len = len
                        .checked_sub(SNAP_HEADER_LEN)
                        .ok_or(Error::TruncatedFrame)?;
                    cur = snap.payload();
                } else {
                    frame_type = FrameType::EthernetIeee;
                }
            }
            if len > cur.remaining() {
                return Err(Error::TruncatedFrame);
            }
            // Everything past the declared length is line padding.
            cur.trim_off(cur.remaining() - len);
            payload = cur.chunk().to_vec();
        }

        Ok(Frame {
            frame_type,
            dst_addr,
            src_addr,
            ethertype,
            qinq,
            vlan,
            llc,
            oui,
            payload,
        })
    }

    /// The framing variant.
    #[inline]
    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    /// The destination hardware address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        self.dst_addr
    }

    /// The source hardware address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        self.src_addr
    }

    /// The EtherType of the frame.
    ///
    /// A protocol id for [`FrameType::EthernetII`] and
    /// [`FrameType::EthernetSnap`], forced to [`EtherType::IPX`] for
    /// [`FrameType::EthernetRaw`], and the raw 802.3 length field for
    /// [`FrameType::EthernetIeee`].
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        self.ethertype
    }

    /// Query whether an outer QinQ tag survived decoding.
    #[inline]
    pub fn has_qinq(&self) -> bool {
        self.qinq.is_some()
    }

    /// The outer QinQ tag, when present.
    #[inline]
    pub fn qinq_tag(&self) -> Option<QinqTag> {
        self.qinq
    }

    /// Query whether an 802.1Q tag applies to the frame.
    #[inline]
    pub fn has_vlan(&self) -> bool {
        self.vlan.is_some()
    }

    /// The 802.1Q tag control value, when present.
    #[inline]
    pub fn vlan_tag(&self) -> Option<TagControl> {
        self.vlan
    }

    /// The LLC header fields, present for IEEE 802.2 and SNAP frames.
    #[inline]
    pub fn llc(&self) -> Option<LlcInfo> {
        self.llc
    }

    /// The SNAP organizationally unique identifier, present for SNAP
    /// frames.
    #[inline]
    pub fn oui(&self) -> Option<u32> {
        self.oui
    }

    /// The payload bytes left over once all headers are consumed.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take ownership of the payload bytes.
    #[inline]
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}
