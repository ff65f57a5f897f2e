//! Protocol data unit chaining
//!
//! A [`Pdu`] is one protocol layer paired with zero or one owned inner PDU,
//! forming a chain that mirrors header order on the wire: the outermost PDU
//! owns the first header's bytes, its inner PDU the next, down to a terminal
//! opaque payload. The chain is a recursive sum type over the known concrete
//! layers, so parsing dispatch stays exhaustive and dropping the outermost
//! PDU recursively drops the whole chain.
//!
//! Serialization is two-pass: the total size is computed bottom-up with
//! [`Pdu::size`], then headers are written top-down, each layer free to
//! consult its inner chain's already-known size for context-dependent fields
//! such as the 802.3 length.

use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use crate::dot3::Dot3Frame;
use crate::error::{Error, Result};
use crate::iface::Interface;
use crate::raw::RawPayload;
use crate::sender::PacketSender;

/// Discriminant identifying a concrete PDU kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PduKind {
    /// IEEE 802.3 frame
    Dot3,
    /// Opaque raw payload
    Raw,
}

impl PduKind {
    /// Concrete kind selected by a wire discriminant, if any.
    ///
    /// This is the single dispatch table for parsing inner protocols. For an
    /// 802.3 frame the discriminant is the length/EtherType field of the
    /// enclosing header.
    pub fn from_discriminant(discriminant: u16) -> Option<PduKind> {
        match discriminant {
            // Modeled inner protocols get an arm here. None are recognized
            // yet: LLC (length-side values) and the EtherType suite are out
            // of scope, so every discriminant falls through and the inner
            // bytes stay opaque.
            _ => None,
        }
    }
}

/// One protocol layer and its owned inner chain.
///
/// Construct the innermost PDU first and wrap it in outer layers; each
/// constructor takes ownership of the chain it encloses. `Clone` deep-clones
/// the entire remaining chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pdu {
    /// IEEE 802.3 frame
    Dot3(Dot3Frame),
    /// Opaque raw payload, the terminal link of every parsed chain
    Raw(RawPayload),
}

impl Pdu {
    /// Create an opaque payload PDU from any byte source
    pub fn raw<T: Into<Vec<u8>>>(data: T) -> Pdu {
        Pdu::Raw(RawPayload::new(data))
    }

    /// This PDU's type discriminant
    pub fn kind(&self) -> PduKind {
        match self {
            Pdu::Dot3(_) => PduKind::Dot3,
            Pdu::Raw(_) => PduKind::Raw,
        }
    }

    /// This layer's own fixed header length, excluding any inner PDU
    pub fn header_size(&self) -> usize {
        match self {
            Pdu::Dot3(_) => Dot3Frame::HEADER_SIZE,
            Pdu::Raw(raw) => raw.header_size(),
        }
    }

    /// Total on-wire size of this PDU and its inner chain.
    ///
    /// Recomputed on every call; header fields and inner PDUs may be
    /// mutated between calls, so the value is never cached.
    pub fn size(&self) -> usize {
        match self {
            Pdu::Dot3(frame) => frame.size(),
            Pdu::Raw(raw) => raw.size(),
        }
    }

    /// The inner PDU one layer down, if any
    pub fn inner(&self) -> Option<&Pdu> {
        match self {
            Pdu::Dot3(frame) => frame.inner(),
            Pdu::Raw(_) => None,
        }
    }

    /// Parse a buffer as a chain whose outermost layer is `kind`.
    ///
    /// Inner layers are selected recursively through
    /// [`PduKind::from_discriminant`]; unrecognized inner protocols are kept
    /// verbatim as opaque payloads rather than failing, preserving
    /// byte-for-byte round-trip fidelity.
    pub fn parse(kind: PduKind, data: &[u8]) -> Result<Pdu> {
        match kind {
            PduKind::Dot3 => Ok(Pdu::Dot3(Dot3Frame::parse(data)?)),
            PduKind::Raw => Ok(Pdu::Raw(RawPayload::new(data.to_vec()))),
        }
    }

    /// Serialize the full chain into a freshly allocated buffer
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(self.size());
        self.write(&mut buf);
        buf.to_vec()
    }

    /// Serialize the full chain into `buf`, returning the bytes written.
    ///
    /// Fails with [`Error::BufferTooSmall`] if `buf` cannot hold
    /// [`Pdu::size`] bytes; nothing is written in that case.
    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<usize> {
        let needed = self.size();
        if buf.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        let mut dst = &mut buf[..needed];
        self.write(&mut dst);
        Ok(needed)
    }

    /// Top-down write step: this layer's header, then the inner chain
    pub(crate) fn write<B: BufMut>(&self, buf: &mut B) {
        match self {
            Pdu::Dot3(frame) => frame.write(buf),
            Pdu::Raw(raw) => raw.write(buf),
        }
    }

    /// Re-parse `data` as this PDU's own concrete kind.
    ///
    /// Materializes a matched response as an owned chain with no aliasing of
    /// the input buffer.
    pub fn clone_packet(&self, data: &[u8]) -> Result<Pdu> {
        Pdu::parse(self.kind(), data)
    }

    /// Check whether `data` plausibly holds a response to this chain acting
    /// as a request.
    ///
    /// Each layer checks its own invariant fields against the corresponding
    /// buffer prefix and delegates the remainder to its inner PDU; the chain
    /// matches only if every layer matches. The per-layer checks are default
    /// policies (see the concrete layers), not correctness guarantees.
    pub fn matches_response(&self, data: &[u8]) -> bool {
        match self {
            Pdu::Dot3(frame) => frame.matches_response(data),
            Pdu::Raw(raw) => raw.matches_response(data),
        }
    }

    /// Outbound interface of the outermost layer, if it carries one
    pub fn interface(&self) -> Option<&Interface> {
        match self {
            Pdu::Dot3(frame) => Some(&frame.iface),
            Pdu::Raw(_) => None,
        }
    }

    /// Serialize the chain and hand it to the sender collaborator along with
    /// the outbound interface
    pub fn send(&self, sender: &mut dyn PacketSender) -> Result<()> {
        let frame = self.serialize();
        let unspecified = Interface::default();
        let iface = self.interface().unwrap_or(&unspecified);
        debug!("sending {} bytes on {}", frame.len(), iface);
        sender.send(&frame, iface)
    }

    /// Receive candidate buffers from the sender until one matches this
    /// chain as a response, then return it as an owned PDU.
    ///
    /// Blocks on the collaborator's receive primitive; when the
    /// collaborator's own timeout elapses first the outcome is
    /// [`Error::NoMatchingResponse`]. Cancellation is entirely the
    /// collaborator's responsibility.
    pub fn recv_response(&self, sender: &mut dyn PacketSender) -> Result<Pdu> {
        loop {
            match sender.recv_timeout()? {
                Some(candidate) => {
                    if self.matches_response(&candidate) {
                        debug!("matched a {}-byte response", candidate.len());
                        return self.clone_packet(&candidate);
                    }
                    trace!("ignoring non-matching {}-byte frame", candidate.len());
                }
                None => return Err(Error::NoMatchingResponse),
            }
        }
    }
}

impl From<Dot3Frame> for Pdu {
    fn from(frame: Dot3Frame) -> Self {
        Pdu::Dot3(frame)
    }
}

impl From<RawPayload> for Pdu {
    fn from(raw: RawPayload) -> Self {
        Pdu::Raw(raw)
    }
}

/// Parse the inner bytes of a layer using the wire discriminant it carries.
///
/// The one factory behind every layer's parsing constructor: a recognized
/// discriminant instantiates the mapped concrete kind, anything else keeps
/// the bytes as an opaque payload. Unrecognized is explicitly not an error.
pub(crate) fn inner_from_wire(discriminant: u16, data: &[u8]) -> Pdu {
    match PduKind::from_discriminant(discriminant) {
        Some(kind) => {
            Pdu::parse(kind, data).unwrap_or_else(|_| Pdu::Raw(RawPayload::new(data.to_vec())))
        }
        None => Pdu::Raw(RawPayload::new(data.to_vec())),
    }
}
