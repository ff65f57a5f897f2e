//! IEEE 802.3 frame construction and parsing
//!
//! The 802.3 header is 14 bytes: destination MAC, source MAC and a
//! big-endian length field. Unlike Ethernet II the third field carries the
//! payload length rather than an EtherType, so it depends on the rest of
//! the chain: by default it is computed from the inner PDU's byte size at
//! serialization time.

use bytes::BufMut;

use crate::addr::MacAddr;
use crate::error::{Error, Result};
use crate::iface::Interface;
use crate::pdu::{inner_from_wire, Pdu};

/// IEEE 802.3 frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot3Frame {
    /// Destination MAC address
    pub dst: MacAddr,
    /// Source MAC address
    pub src: MacAddr,
    /// Length field value; 0 selects automatic length (see
    /// [`Dot3Frame::wire_length`])
    pub length: u16,
    /// Interface to send this frame from. Outbound metadata only, never
    /// serialized.
    pub iface: Interface,
    inner: Option<Box<Pdu>>,
}

impl Dot3Frame {
    /// Fixed header size (dst + src + length)
    pub const HEADER_SIZE: usize = 14;

    /// Create a new 802.3 frame, taking ownership of the inner PDU chain.
    ///
    /// The length field starts at 0, meaning it is computed from the inner
    /// chain's byte size when the frame is serialized.
    pub fn new(iface: Interface, dst: MacAddr, src: MacAddr, inner: Option<Pdu>) -> Self {
        Self {
            dst,
            src,
            length: 0,
            iface,
            inner: inner.map(Box::new),
        }
    }

    /// Parse an 802.3 frame from bytes.
    ///
    /// Consumes exactly [`Dot3Frame::HEADER_SIZE`] bytes into the fixed
    /// header; any remaining bytes are handed to the inner-protocol dispatch
    /// keyed on the length field, falling back to an opaque payload for
    /// anything unrecognized. A buffer of exactly 14 bytes yields a frame
    /// with no inner PDU.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::HEADER_SIZE {
            return Err(Error::MalformedPacket {
                needed: Self::HEADER_SIZE,
                available: data.len(),
            });
        }

        let dst = MacAddr::from_slice(&data[0..6])?;
        let src = MacAddr::from_slice(&data[6..12])?;
        let length = u16::from_be_bytes([data[12], data[13]]);

        let rest = &data[Self::HEADER_SIZE..];
        let inner = if rest.is_empty() {
            None
        } else {
            Some(Box::new(inner_from_wire(length, rest)))
        };

        Ok(Self {
            dst,
            src,
            length,
            iface: Interface::default(),
            inner,
        })
    }

    /// Get the inner PDU, if any
    pub fn inner(&self) -> Option<&Pdu> {
        self.inner.as_deref()
    }

    /// Get the inner PDU mutably, if any
    pub fn inner_mut(&mut self) -> Option<&mut Pdu> {
        self.inner.as_deref_mut()
    }

    /// Set the inner PDU, taking ownership of its chain
    pub fn set_inner(&mut self, inner: Pdu) {
        self.inner = Some(Box::new(inner));
    }

    /// Remove and return the inner PDU chain
    pub fn take_inner(&mut self) -> Option<Pdu> {
        self.inner.take().map(|boxed| *boxed)
    }

    /// Byte size of the inner PDU chain
    pub fn payload_size(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.size())
    }

    /// Total frame size: fixed header plus the inner chain
    pub fn size(&self) -> usize {
        Self::HEADER_SIZE + self.payload_size()
    }

    /// The length value that goes on the wire.
    ///
    /// A stored length of 0 with an inner PDU present means "automatic":
    /// the inner chain's actual byte size is written instead. An explicit
    /// nonzero length always wins. An inner chain longer than the 2-byte
    /// field can express saturates at `u16::MAX` rather than wrapping.
    pub fn wire_length(&self) -> u16 {
        if self.length == 0 && self.inner.is_some() {
            u16::try_from(self.payload_size()).unwrap_or(u16::MAX)
        } else {
            self.length
        }
    }

    /// Write the frame header followed by the inner chain
    pub(crate) fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self.dst.as_bytes());
        buf.put_slice(self.src.as_bytes());
        buf.put_u16(self.wire_length());
        if let Some(inner) = &self.inner {
            inner.write(buf);
        }
    }

    /// Check whether `data` plausibly holds a response to this frame.
    ///
    /// Default policy, not a correctness guarantee: the candidate must be at
    /// least a full header and its destination must equal this frame's
    /// destination; the rest of the decision is delegated to the inner PDU,
    /// and a frame without an inner PDU accepts any sufficiently long
    /// candidate.
    pub fn matches_response(&self, data: &[u8]) -> bool {
        if data.len() < Self::HEADER_SIZE {
            return false;
        }
        if data[0..6] != self.dst.octets() {
            return false;
        }
        match &self.inner {
            Some(inner) => inner.matches_response(&data[Self::HEADER_SIZE..]),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawPayload;

    fn test_frame(payload: &[u8]) -> Dot3Frame {
        Dot3Frame::new(
            Interface::named("eth0"),
            MacAddr::BROADCAST,
            MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            Some(Pdu::Raw(RawPayload::new(payload))),
        )
    }

    #[test]
    fn test_broadcast_scenario() {
        // Frame with dst ff:ff:ff:ff:ff:ff, src 00:11:22:33:44:55 and the
        // payload "hi" must serialize to exactly these 16 bytes.
        let frame = test_frame(b"hi");
        assert_eq!(Dot3Frame::HEADER_SIZE, 14);
        assert_eq!(frame.size(), 16);

        let mut buf = Vec::new();
        frame.write(&mut buf);
        assert_eq!(
            buf,
            vec![
                0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // dst
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // src
                0x00, 0x02, // auto length
                0x68, 0x69, // "hi"
            ]
        );
    }

    #[test]
    fn test_auto_length() {
        for n in [0usize, 1, 46, 1500] {
            let frame = test_frame(&vec![0xAB; n]);
            assert_eq!(frame.wire_length(), n as u16);
        }
    }

    #[test]
    fn test_auto_length_saturates_oversized_payload() {
        let frame = test_frame(&vec![0u8; 70_000]);
        assert_eq!(frame.wire_length(), u16::MAX);
        assert_eq!(frame.size(), 14 + 70_000);
    }

    #[test]
    fn test_explicit_length_wins() {
        let mut frame = test_frame(b"hi");
        frame.length = 1000;
        assert_eq!(frame.wire_length(), 1000);
    }

    #[test]
    fn test_length_zero_without_inner() {
        let frame = Dot3Frame::new(
            Interface::default(),
            MacAddr::ZERO,
            MacAddr::ZERO,
            None,
        );
        assert_eq!(frame.wire_length(), 0);
        assert_eq!(frame.size(), 14);
    }

    #[test]
    fn test_parse_header_only() {
        let mut data = vec![0u8; 14];
        data[0..6].copy_from_slice(&[0xAA; 6]);
        data[12] = 0x01;
        data[13] = 0x02;

        let frame = Dot3Frame::parse(&data).unwrap();
        assert_eq!(frame.dst, MacAddr::new([0xAA; 6]));
        assert_eq!(frame.length, 0x0102);
        assert!(frame.inner().is_none());
        assert!(frame.iface.is_unspecified());
    }

    #[test]
    fn test_parse_too_short() {
        let err = Dot3Frame::parse(&[0u8; 13]).unwrap_err();
        match err {
            Error::MalformedPacket { needed, available } => {
                assert_eq!(needed, 14);
                assert_eq!(available, 13);
            }
            other => panic!("expected MalformedPacket, got {other}"),
        }
    }

    #[test]
    fn test_parse_with_payload() {
        let frame = test_frame(b"hi");
        let mut bytes = Vec::new();
        frame.write(&mut bytes);

        let parsed = Dot3Frame::parse(&bytes).unwrap();
        assert_eq!(parsed.dst, frame.dst);
        assert_eq!(parsed.src, frame.src);
        assert_eq!(parsed.length, 2);
        match parsed.inner().unwrap() {
            Pdu::Raw(raw) => assert_eq!(raw.data, b"hi"),
            other => panic!("expected raw payload, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_matches_response_dst_prefix() {
        let frame = Dot3Frame::new(
            Interface::default(),
            MacAddr::new([0xAA; 6]),
            MacAddr::ZERO,
            None,
        );

        let mut candidate = vec![0u8; 14];
        candidate[0..6].copy_from_slice(&[0xAA; 6]);
        assert!(frame.matches_response(&candidate));

        candidate[5] = 0xAB;
        assert!(!frame.matches_response(&candidate));

        // shorter than a full header never matches
        assert!(!frame.matches_response(&[0xAA; 13]));
    }

    #[test]
    fn test_take_inner() {
        let mut frame = test_frame(b"hi");
        let inner = frame.take_inner().unwrap();
        assert_eq!(inner.size(), 2);
        assert!(frame.inner().is_none());
        assert_eq!(frame.size(), 14);
    }
}
