//! Frame classification and encoder options.

use std::ops::BitOr;

use super::{Fin, OpCode};
use crate::error::{FrameError, HandshakeError};

/// Outcome of a single parse or build attempt.
///
/// The first six variants map to wire opcodes, `Opening` marks a
/// completed handshake, `Incomplete` and `Error` never appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    Continuation,
    Text,
    Binary,
    Closing,
    Ping,
    Pong,

    Opening,
    Incomplete,
    Error,
}

impl FrameType {
    /// Classify an opcode.
    #[inline]
    pub const fn from_opcode(opcode: OpCode) -> Self {
        use FrameType::*;
        match opcode {
            OpCode::Continue => Continuation,
            OpCode::Text => Text,
            OpCode::Binary => Binary,
            OpCode::Close => Closing,
            OpCode::Ping => Ping,
            OpCode::Pong => Pong,
        }
    }

    /// Opcode to put on the wire.
    ///
    /// `Incomplete` is written as opcode 0, like a continuation.
    /// `Opening` and `Error` have no wire form.
    #[inline]
    pub const fn to_opcode(self) -> Result<OpCode, FrameError> {
        use FrameType::*;
        let opcode = match self {
            Continuation | Incomplete => OpCode::Continue,
            Text => OpCode::Text,
            Binary => OpCode::Binary,
            Closing => OpCode::Close,
            Ping => OpCode::Ping,
            Pong => OpCode::Pong,
            Opening | Error => return Err(FrameError::IllegalFrameType),
        };
        Ok(opcode)
    }
}

impl From<OpCode> for FrameType {
    fn from(opcode: OpCode) -> Self { FrameType::from_opcode(opcode) }
}

impl From<&FrameError> for FrameType {
    fn from(e: &FrameError) -> Self {
        if e.is_incomplete() {
            FrameType::Incomplete
        } else {
            FrameType::Error
        }
    }
}

impl From<FrameError> for FrameType {
    fn from(e: FrameError) -> Self { FrameType::from(&e) }
}

impl From<&HandshakeError> for FrameType {
    fn from(_: &HandshakeError) -> Self { FrameType::Error }
}

impl From<HandshakeError> for FrameType {
    fn from(_: HandshakeError) -> Self { FrameType::Error }
}

/// Encoder options, a bitmask.
///
/// Only [`Options::FINAL_FRAME`] is recognized, any other
/// bit makes [`make_frame`](super::make_frame) fail with
/// [`FrameError::InvalidOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options(u32);

impl Options {
    /// Not the last fragment.
    pub const NONE: Options = Options(0);

    /// Mark this as the last fragment of a message.
    pub const FINAL_FRAME: Options = Options(0x01);

    /// Take raw bits as they are, unrecognized ones included.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self { Options(bits) }

    #[inline]
    pub const fn bits(self) -> u32 { self.0 }

    #[inline]
    pub const fn contains(self, other: Options) -> bool { self.0 & other.0 == other.0 }

    /// Fin flag selected by these options.
    #[inline]
    pub const fn fin(self) -> Result<Fin, FrameError> {
        match self.0 {
            0x00 => Ok(Fin::N),
            0x01 => Ok(Fin::Y),
            _ => Err(FrameError::InvalidOptions),
        }
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options { Options(self.0 | rhs.0) }
}
