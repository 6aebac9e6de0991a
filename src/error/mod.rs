#![allow(missing_docs)]
//! Errors

mod frame;
mod handshake;

pub use frame::FrameError;
pub use handshake::HandshakeError;

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Frame(FrameError),

    Handshake(HandshakeError),
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self { Error::Frame(e) }
}

impl From<HandshakeError> for Error {
    fn from(e: HandshakeError) -> Self { Error::Handshake(e) }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            Frame(e) => write!(f, "Frame error: {}", e),
            Handshake(e) => write!(f, "Handshake error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match self {
            Frame(e) => Some(e),
            Handshake(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn incomplete_class() {
        assert!(FrameError::Incomplete.is_incomplete());
        assert!(FrameError::TruncatedPayload.is_incomplete());
        assert!(!FrameError::UnsupportedOpcode.is_incomplete());
        assert!(!FrameError::EmptyPayload.is_incomplete());
    }

    #[test]
    fn malformed_class() {
        assert!(HandshakeError::RequestLine.is_malformed());
        assert!(HandshakeError::UnterminatedLine.is_malformed());
        assert!(HandshakeError::Origin.is_malformed());
        assert!(!HandshakeError::MissingKey.is_malformed());
    }

    #[test]
    fn wrap_and_display() {
        let e: Error = FrameError::EmptyPayload.into();
        assert_eq!(e.to_string(), "Frame error: Empty payload");
        assert!(std::error::Error::source(&e).is_some());

        let e: Error = HandshakeError::MissingKey.into();
        assert_eq!(e, Error::Handshake(HandshakeError::MissingKey));
    }
}
