mod common;
use common::*;

use tapframe::ether::*;
use tapframe::frame::*;

#[test]
fn minimal_frame_parse() {
    let packet = file_to_packet("Ipv4Tiny.dat");
    assert_eq!(packet.len(), ETHER_HEADER_LEN);

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetII);
    assert_eq!(
        frame.dst_addr(),
        EtherAddr::parse_from("aa:bb:cc:dd:ee:ff").unwrap()
    );
    assert_eq!(
        frame.src_addr(),
        EtherAddr::parse_from("11:22:33:44:55:66").unwrap()
    );
    assert_eq!(frame.ethertype(), EtherType::IPV4);
    assert_eq!(frame.has_vlan(), false);
    assert_eq!(frame.has_qinq(), false);
    assert_eq!(frame.payload().is_empty(), true);
}

#[test]
fn ipv4_frame_parse() {
    let packet = file_to_packet("Ipv4Payload.dat");

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetII);
    assert_eq!(
        frame.dst_addr(),
        EtherAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
    );
    assert_eq!(
        frame.src_addr(),
        EtherAddr([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
    );
    assert_eq!(frame.ethertype(), EtherType::IPV4);
    assert_eq!(frame.llc(), None);
    assert_eq!(frame.oui(), None);
    assert_eq!(frame.payload(), &[0x01, 0x02, 0x03]);
}

#[test]
fn unknown_ethertype_is_still_ether2() {
    // Anything at or above 0x0800 is a protocol id, recognized or not.
    let mut packet = file_to_packet("Ipv4Tiny.dat");
    packet[12] = 0xab;
    packet[13] = 0xcd;

    let frame = Frame::parse(&packet[..]).unwrap();
    assert_eq!(frame.frame_type(), FrameType::EthernetII);
    assert_eq!(frame.ethertype(), EtherType::from(0xabcd));
}

#[test]
fn owned_payload_outlives_capture_buffer() {
    let packet = file_to_packet("Ipv4Payload.dat");
    let frame = Frame::parse(&packet[..]).unwrap();
    drop(packet);
    assert_eq!(frame.into_payload(), vec![0x01, 0x02, 0x03]);
}
