//! Raw frame send/receive collaborator
//!
//! The PDU core consumes this contract but does not depend on any particular
//! transport: [`Pdu::send`](crate::Pdu::send) and
//! [`Pdu::recv_response`](crate::Pdu::recv_response) accept any
//! [`PacketSender`]. [`ChannelSender`] is the batteries-included
//! implementation over a datalink channel.

use std::io;
use std::time::Duration;

use pnet_datalink::{self, Channel, Config, DataLinkReceiver, DataLinkSender};
use tracing::debug;

use crate::error::{Error, Result};
use crate::iface::Interface;

/// Raw send and receive-with-timeout primitive.
///
/// `recv_timeout` returns `Ok(None)` when the implementation's own timeout
/// elapses without a frame; that is the normal "nothing arrived" outcome,
/// distinct from a transport failure (`Err`). Implementations on targets
/// without raw I/O capability should return
/// [`Error::UnsupportedOperation`] rather than panic or misbehave.
pub trait PacketSender {
    /// Send a fully serialized frame out of `iface`
    fn send(&mut self, frame: &[u8], iface: &Interface) -> Result<()>;

    /// Receive the next raw frame, or `None` once the timeout elapses
    fn recv_timeout(&mut self) -> Result<Option<Vec<u8>>>;
}

/// Packet sender over a datalink Ethernet channel.
///
/// Opens the channel once and reuses it for every send and receive; the
/// channel's read timeout is what bounds
/// [`Pdu::recv_response`](crate::Pdu::recv_response).
pub struct ChannelSender {
    iface: Interface,
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
}

impl ChannelSender {
    /// Open a channel on the named interface with the given read timeout.
    ///
    /// Degrades to [`Error::UnsupportedOperation`] when the platform hands
    /// back a non-Ethernet channel type.
    pub fn open(iface: &Interface, read_timeout: Duration) -> Result<Self> {
        let nic = pnet_datalink::interfaces()
            .into_iter()
            .find(|i| i.name == iface.name)
            .ok_or_else(|| Error::interface(format!("interface '{}' not found", iface)))?;

        let config = Config {
            read_timeout: Some(read_timeout),
            ..Default::default()
        };

        match pnet_datalink::channel(&nic, config) {
            Ok(Channel::Ethernet(tx, rx)) => {
                debug!("opened datalink channel on {}", iface);
                Ok(Self {
                    iface: iface.clone(),
                    tx,
                    rx,
                })
            }
            Ok(_) => Err(Error::unsupported(format!(
                "datalink channel on '{}' is not Ethernet",
                iface
            ))),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// The interface this channel is bound to
    pub fn interface(&self) -> &Interface {
        &self.iface
    }
}

impl PacketSender for ChannelSender {
    fn send(&mut self, frame: &[u8], iface: &Interface) -> Result<()> {
        // The channel was bound at open time; a caller asking for a
        // different specific interface is handing the frame to the wrong
        // sender.
        if !iface.is_unspecified() && *iface != self.iface {
            return Err(Error::interface(format!(
                "frame addressed to {} but channel is bound to {}",
                iface, self.iface
            )));
        }

        self.tx
            .send_to(frame, None)
            .ok_or_else(|| Error::unsupported("datalink channel cannot send"))?
            .map_err(Error::Io)?;

        debug!("sent {} bytes on {}", frame.len(), self.iface);
        Ok(())
    }

    fn recv_timeout(&mut self) -> Result<Option<Vec<u8>>> {
        match self.rx.next() {
            Ok(frame) => Ok(Some(frame.to_vec())),
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}
