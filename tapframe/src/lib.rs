#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Decode raw Ethernet frames captured from a TAP device.
//!
//! A TAP device hands user space complete link-layer frames. This crate
//! classifies such a frame (Ethernet II, raw 802.3, IEEE 802.2 or SNAP),
//! peels off any 802.1Q/802.1QinQ tag stack, and returns the result as an
//! owned [`frame::Frame`] value.
//!
//! ```
//! use tapframe::frame::{Frame, FrameType};
//!
//! let raw = [
//!     0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // destination
//!     0x11, 0x22, 0x33, 0x44, 0x55, 0x66, // source
//!     0x08, 0x00, // IPv4
//!     0x01, 0x02, 0x03,
//! ];
//! let frame = Frame::parse(&raw[..]).unwrap();
//! assert_eq!(frame.frame_type(), FrameType::EthernetII);
//! assert_eq!(frame.payload(), &[0x01, 0x02, 0x03]);
//! ```

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf};

mod cursors;
pub use cursors::Cursor;

mod error;
pub use error::Error;

pub mod ether;
pub mod frame;
pub mod llc;
pub mod vlan;
