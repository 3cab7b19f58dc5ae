//! Decode a hex dump of a captured frame and print its structure.
//!
//! The input file holds pairs of hex digits, the same format as the packet
//! fixtures under `tapframe/tests/packet_examples`.

use std::env;
use std::fs;
use std::process;

use tapframe::frame::{Frame, FrameType};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: framedump <hexdump-file>");
            process::exit(1);
        }
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("framedump: {}: {}", path, err);
            process::exit(1);
        }
    };

    let mut raw = Vec::new();
    for pair in content.trim().as_bytes().chunks(2) {
        let byte = std::str::from_utf8(pair)
            .ok()
            .and_then(|p| u8::from_str_radix(p, 16).ok());
        match byte {
            Some(byte) => raw.push(byte),
            None => {
                eprintln!("framedump: {}: not a hex dump", path);
                process::exit(1);
            }
        }
    }

    let frame = match Frame::parse(&raw[..]) {
        Ok(frame) => frame,
        Err(err) => {
            eprintln!("framedump: {}", err);
            process::exit(1);
        }
    };

    let kind = match frame.frame_type() {
        FrameType::EthernetII => "Ethernet II",
        FrameType::EthernetRaw => "raw 802.3 (IPX)",
        FrameType::EthernetIeee => "IEEE 802.2",
        FrameType::EthernetSnap => "IEEE 802.2 SNAP",
    };
    println!("type:      {}", kind);
    println!("dst:       {}", frame.dst_addr());
    println!("src:       {}", frame.src_addr());
    println!("ethertype: 0x{:04x}", frame.ethertype().raw());
    if let Some(outer) = frame.qinq_tag() {
        println!(
            "qinq:      tpid 0x{:04x}, tag control 0x{:04x}",
            outer.tpid.raw(),
            outer.tag_control.raw()
        );
    }
    if let Some(tag) = frame.vlan_tag() {
        println!(
            "vlan:      id {}, priority {}, dei {}",
            tag.vlan_id(),
            tag.priority(),
            tag.dei_flag()
        );
    }
    if let Some(llc) = frame.llc() {
        println!(
            "llc:       dsap 0x{:02x}, ssap 0x{:02x}, control 0x{:02x}",
            llc.dsap, llc.ssap, llc.control
        );
    }
    if let Some(oui) = frame.oui() {
        println!("oui:       0x{:06x}", oui);
    }
    println!("payload:   {} bytes", frame.payload().len());
}
