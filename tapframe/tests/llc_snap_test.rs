mod common;
use common::*;

use tapframe::ether::*;
use tapframe::frame::*;
use tapframe::llc::SNAP_SAP;

#[test]
fn raw_ipx_frame_parse() {
    let packet = file_to_packet("RawIpx.dat");

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetRaw);
    assert_eq!(frame.ethertype(), EtherType::IPX);
    assert_eq!(frame.has_vlan(), false);
    assert_eq!(frame.has_qinq(), false);
    assert_eq!(frame.llc(), None);
    assert_eq!(frame.oui(), None);

    // The payload spans the declared 0x26 bytes, checksum words included.
    assert_eq!(frame.payload().len(), 0x26);
    assert_eq!(frame.payload(), &packet[ETHER_HEADER_LEN..]);
    assert_eq!(&frame.payload()[..2], &[0xff, 0xff]);
}

#[test]
fn llc_frame_parse() {
    let packet = file_to_packet("LlcStp.dat");

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetIeee);
    assert_eq!(
        frame.dst_addr(),
        EtherAddr([0x01, 0x80, 0xc2, 0x00, 0x00, 0x00])
    );
    assert_eq!(frame.dst_addr().is_multicast(), true);

    // For 802.2 frames the EtherType field keeps the raw 802.3 length.
    assert_eq!(frame.ethertype(), EtherType::from(0x0026));

    let llc = frame.llc().unwrap();
    assert_eq!(llc.dsap, 0x42);
    assert_eq!(llc.ssap, 0x42);
    assert_eq!(llc.control, 0x03);

    assert_eq!(frame.oui(), None);
    assert_eq!(frame.payload().len(), 0x26 - 3);
    assert_eq!(frame.payload(), &packet[ETHER_HEADER_LEN + 3..]);
}

#[test]
fn snap_frame_parse() {
    let packet = file_to_packet("SnapAppletalk.dat");

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetSnap);

    let llc = frame.llc().unwrap();
    assert_eq!(llc.dsap, SNAP_SAP);
    assert_eq!(llc.ssap, SNAP_SAP);
    assert_eq!(llc.control, 0x03);

    // OUI bytes 08:00:07 under the historical packing.
    assert_eq!(frame.oui(), Some(0x08 << 8 | 0x00 << 4 | 0x07));
    assert_eq!(frame.ethertype(), EtherType::APPLETALK);

    // Ten payload bytes; the four padding bytes past the declared length
    // are dropped.
    assert_eq!(
        frame.payload(),
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a]
    );
}

#[test]
fn snap_group_saps_still_parse_as_snap() {
    // The low-order bit of each SAP is the individual/group bit and does
    // not affect SNAP detection.
    let mut packet = file_to_packet("SnapAppletalk.dat");
    packet[14] = 0xab;
    packet[15] = 0xab;

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetSnap);
    assert_eq!(frame.llc().map(|llc| llc.dsap), Some(0xab));
}
