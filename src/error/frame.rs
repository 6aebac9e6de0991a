use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    // read
    Incomplete,

    TruncatedPayload,

    UnsupportedOpcode,

    IllegalRsv,

    TooLarge,

    // write
    IllegalFrameType,

    InvalidOptions,

    EmptyPayload,

    NotEnoughCapacity,
}

impl FrameError {
    /// More bytes may turn this into a successful decode.
    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, FrameError::Incomplete | FrameError::TruncatedPayload)
    }
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use FrameError::*;
        match self {
            Incomplete => write!(f, "Not enough data to parse frame head"),
            TruncatedPayload => write!(f, "Declared payload length exceeds available data"),
            UnsupportedOpcode => write!(f, "Unsupported opcode value"),
            IllegalRsv => write!(f, "Reserved bits set without an extension"),
            TooLarge => write!(f, "Payload length out of range"),
            IllegalFrameType => write!(f, "Frame type has no opcode"),
            InvalidOptions => write!(f, "Unrecognized frame options"),
            EmptyPayload => write!(f, "Empty payload"),
            NotEnoughCapacity => write!(f, "Not enough space to write to"),
        }
    }
}

// use default impl
impl std::error::Error for FrameError {}
