//! Composable protocol data units for crafting and parsing layered packets
//!
//! This crate models network protocol headers as protocol data units (PDUs)
//! arranged in a strict layering chain: an outer frame owns its inner packet,
//! which owns its own payload, down to a terminal opaque payload. One chain
//! serializes bit-exactly into wire bytes, and wire bytes parse back into a
//! chain by discriminant dispatch with an opaque fallback for anything
//! unmodeled.
//!
//! The worked concrete layer is the IEEE 802.3 frame, whose big-endian
//! length field is computed from the inner chain at serialization time
//! unless explicitly overridden.
//!
//! # Building and serializing a chain
//!
//! ```rust
//! use pdustack::{Dot3Frame, Interface, MacAddr, Pdu};
//!
//! let src = MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
//! let frame = Dot3Frame::new(
//!     Interface::named("eth0"),
//!     MacAddr::BROADCAST,
//!     src,
//!     Some(Pdu::raw(b"hi".to_vec())),
//! );
//!
//! let pdu = Pdu::from(frame);
//! assert_eq!(pdu.size(), 16); // 14-byte header + 2-byte payload
//! let bytes = pdu.serialize();
//! assert_eq!(&bytes[12..14], &[0x00, 0x02]); // automatic length field
//! ```
//!
//! # Parsing captured bytes
//!
//! ```rust
//! use pdustack::{Pdu, PduKind};
//!
//! let bytes = [
//!     0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // dst
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // src
//!     0x00, 0x02, // length
//!     0x68, 0x69, // payload
//! ];
//!
//! let pdu = Pdu::parse(PduKind::Dot3, &bytes).unwrap();
//! assert_eq!(pdu.header_size(), 14);
//! assert_eq!(pdu.serialize(), bytes); // byte-for-byte round trip
//! ```

pub mod addr;
pub mod dot3;
pub mod error;
pub mod iface;
pub mod pdu;
pub mod raw;
pub mod sender;

// Re-export commonly used types
pub use addr::{HwAddress, MacAddr};
pub use dot3::Dot3Frame;
pub use error::{Error, Result};
pub use iface::Interface;
pub use pdu::{Pdu, PduKind};
pub use raw::RawPayload;
pub use sender::{ChannelSender, PacketSender};
