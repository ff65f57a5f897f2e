//! Outbound interface identifier

use std::fmt;

/// Opaque identifier for the interface a frame should be sent from.
///
/// The core stores the identifier on a frame and hands it to the
/// [`PacketSender`](crate::sender::PacketSender) collaborator unmodified; it
/// never interprets the contents or touches the OS. Resolution of a name to
/// an actual device belongs to the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Interface {
    /// Interface name (e.g., "eth0", "en0")
    pub name: String,
    /// OS interface index, 0 when unknown
    pub index: u32,
}

impl Interface {
    /// Create a new interface identifier
    pub fn new<S: Into<String>>(name: S, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Create an interface identifier from a name only
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self::new(name, 0)
    }

    /// Check if this is the "unspecified" sentinel (the default value)
    pub fn is_unspecified(&self) -> bool {
        self.name.is_empty() && self.index == 0
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            write!(f, "<unspecified>")
        } else if self.index != 0 {
            write!(f, "{} (#{})", self.name, self.index)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
