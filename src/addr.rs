//! Fixed-width hardware addresses

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Fixed-width hardware address of `N` raw bytes.
///
/// Pure value type: equality and ordering compare the byte content, the
/// default value is all zeroes and [`HwAddress::BROADCAST`] is all `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HwAddress<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for HwAddress<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// MAC address (6 bytes)
pub type MacAddr = HwAddress<6>;

impl<const N: usize> HwAddress<N> {
    /// Address width in bytes
    pub const WIDTH: usize = N;

    /// Broadcast address (all bytes 0xFF)
    pub const BROADCAST: Self = Self([0xFF; N]);

    /// Zero address (all bytes 0x00)
    pub const ZERO: Self = Self([0x00; N]);

    /// Create a new address from a byte array
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Create an address from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::address(format!(
                "expected {} bytes, got {}",
                N,
                slice.len()
            )));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Get the address as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to a byte array
    pub fn octets(&self) -> [u8; N] {
        self.0
    }

    /// Check if this is the broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; N]
    }
}

impl<const N: usize> fmt::Display for HwAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for HwAddress<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != N {
            return Err(Error::address(format!(
                "expected {} colon-separated groups, got {}",
                N,
                parts.len()
            )));
        }

        let mut bytes = [0u8; N];
        for (i, part) in parts.iter().enumerate() {
            // from_str_radix tolerates a leading sign; only bare hex
            // digits are a valid address group
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::address(format!("invalid hex group '{}'", part)));
            }
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| Error::address(format!("invalid hex group '{}'", part)))?;
        }

        Ok(Self(bytes))
    }
}

impl<const N: usize> From<[u8; N]> for HwAddress<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<HwAddress<N>> for [u8; N] {
    fn from(addr: HwAddress<N>) -> Self {
        addr.0
    }
}
