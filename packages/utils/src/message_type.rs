use cosmwasm_std::HexBinary;
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// Length in bytes of a message type identifier
pub const MESSAGE_TYPE_LEN: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Message type must be {} bytes long, got {len}", MESSAGE_TYPE_LEN)]
pub struct InvalidMessageType {
    pub len: usize,
}

/// Fixed size identifier of the kind of message a price applies to.
/// Travels as a hex string in messages and event attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageType([u8; MESSAGE_TYPE_LEN]);

impl MessageType {
    pub const fn new(bytes: [u8; MESSAGE_TYPE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MESSAGE_TYPE_LEN] {
        &self.0
    }

    pub fn to_hex_binary(&self) -> HexBinary {
        HexBinary::from(self.0.as_slice())
    }
}

impl TryFrom<&[u8]> for MessageType {
    type Error = InvalidMessageType;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; MESSAGE_TYPE_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| InvalidMessageType { len: bytes.len() })
    }
}

impl TryFrom<HexBinary> for MessageType {
    type Error = InvalidMessageType;

    fn try_from(hex: HexBinary) -> Result<Self, Self::Error> {
        Self::try_from(hex.as_slice())
    }
}

impl FromStr for MessageType {
    type Err = crate::event::EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = HexBinary::from_hex(s)?;
        Ok(Self::try_from(hex)?)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_binary().to_hex())
    }
}
