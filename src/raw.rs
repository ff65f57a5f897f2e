//! Opaque payload PDU
//!
//! Terminal link of a PDU chain: bytes the library cannot interpret as a
//! known protocol, retained verbatim so unmodeled protocols survive a
//! parse/serialize round trip byte for byte.

use bytes::BufMut;

/// Opaque raw payload, the innermost PDU of a chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    /// Payload bytes, written to the wire unmodified
    pub data: Vec<u8>,
}

impl RawPayload {
    /// Create a raw payload from any byte source
    pub fn new<T: Into<Vec<u8>>>(data: T) -> Self {
        Self { data: data.into() }
    }

    /// Payload length in bytes.
    ///
    /// A raw payload has no structure, so its header is the whole payload.
    pub fn header_size(&self) -> usize {
        self.data.len()
    }

    /// Total size; identical to [`RawPayload::header_size`]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Write the payload bytes
    pub(crate) fn write<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.data);
    }

    /// Response check for an opaque payload.
    ///
    /// Default policy only: without protocol knowledge any candidate is
    /// accepted. A modeled protocol layer should replace the raw payload if
    /// stronger matching is needed.
    pub fn matches_response(&self, _data: &[u8]) -> bool {
        true
    }
}
