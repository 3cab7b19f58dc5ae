use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tapframe::frame::{Frame, FrameType};

static VLAN_FRAME_BYTES: [u8; 64] = [
    0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x81, 0x00, 0xb2,
    0x9a, 0x08, 0x00, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

static SNAP_FRAME_BYTES: [u8; 60] = [
    0x09, 0x00, 0x07, 0xff, 0xff, 0xff, 0x08, 0x00, 0x07, 0xa1, 0xb2, 0xc3, 0x00, 0x2e, 0xaa,
    0xaa, 0x03, 0x08, 0x00, 0x07, 0x80, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn parse_vlan_frame(buf: &[u8]) {
    let frame = Frame::parse(buf).unwrap();
    assert!(frame.frame_type() == FrameType::EthernetII);
    assert!(frame.has_vlan());
    assert!(frame.vlan_tag().unwrap().vlan_id() == 666);
}

fn parse_snap_frame(buf: &[u8]) {
    let frame = Frame::parse(buf).unwrap();
    assert!(frame.frame_type() == FrameType::EthernetSnap);
    assert!(frame.oui().is_some());
}

fn bench_frame_parse(c: &mut Criterion) {
    c.bench_function("parse vlan tagged frame", |b| {
        b.iter(|| parse_vlan_frame(black_box(&VLAN_FRAME_BYTES[..])))
    });
    c.bench_function("parse snap frame", |b| {
        b.iter(|| parse_snap_frame(black_box(&SNAP_FRAME_BYTES[..])))
    });
}

criterion_group!(benches, bench_frame_parse);
criterion_main!(benches);
