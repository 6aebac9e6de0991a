//! Client upgrade request.
//!
//! From [RFC-6455 Section 4.1](https://datatracker.ietf.org/doc/html/rfc6455#section-4.1):
//!
//! Once a connection to the server has been established (including a
//! connection via a proxy or over a TLS-encrypted tunnel), the client
//! MUST send an opening handshake to the server.  The handshake consists
//! of an HTTP Upgrade request, along with a list of required and
//! optional header fields.
//!
//! Example:
//!
//! ```text
//! GET /chat HTTP/1.1
//! Host: server.example.com
//! Upgrade: websocket
//! Connection: Upgrade
//! Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==
//! Origin: http://example.com
//! Sec-WebSocket-Protocol: chat, superchat
//! Sec-WebSocket-Version: 13
//! ```
//!
//! Header names are matched case sensitively, as written above.

use std::fmt::{Display, Formatter};

use log::{debug, trace};

use super::scan::{next_line, scan_field};
use super::{HTTP_METHOD, HTTP_VERSION};

use crate::error::HandshakeError;
use crate::frame::FrameType;

/// Upgrade request presentation.
///
/// Created empty, filled line by line by [`Handshake::decode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handshake {
    pub resource: Option<String>,
    pub host: Option<String>,
    pub origin: Option<String>,
    pub protocol: Option<String>,
    pub key: Option<String>,
    pub(super) upgrade_connection: bool,
    pub(super) upgrade_protocol: bool,
}

impl Handshake {
    /// Create with every field left empty.
    #[inline]
    pub fn new() -> Self { Self::default() }

    /// `Connection` header carries the `upgrade` token.
    #[inline]
    pub const fn is_connection_upgrade(&self) -> bool { self.upgrade_connection }

    /// `Upgrade` header starts with `websocket`.
    #[inline]
    pub const fn is_upgrade_websocket(&self) -> bool { self.upgrade_protocol }

    /// Check that every required field is present.
    ///
    /// `resource`, `host`, `origin`, `key` and both upgrade flags are
    /// required, `protocol` is optional. An empty value counts as missing.
    pub fn validate(&self) -> Result<(), HandshakeError> {
        use HandshakeError::*;
        macro_rules! handshake_check {
            ($ok: expr, $e: expr) => {
                if !$ok {
                    return Err($e);
                }
            };
        }

        let present = |v: &Option<String>| v.as_ref().is_some_and(|v| !v.is_empty());

        handshake_check!(present(&self.resource), RequestLine);
        handshake_check!(present(&self.host), HttpHost);
        handshake_check!(present(&self.origin), Origin);
        handshake_check!(present(&self.key), SecWebSocketKey);
        handshake_check!(self.upgrade_connection, Connection);
        handshake_check!(self.upgrade_protocol, Upgrade);
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool { self.validate().is_ok() }

    /// [`FrameType::Opening`] if valid, [`FrameType::Error`] otherwise.
    #[inline]
    pub fn frame_type(&self) -> FrameType {
        if self.is_valid() {
            FrameType::Opening
        } else {
            FrameType::Error
        }
    }

    /// Parse from a provided buffer, save the results, and
    /// return the number of bytes parsed, the empty line included.
    ///
    /// Scanning stops at the empty line or at the end of the buffer.
    /// Any line without a CRLF yields [`HandshakeError::UnterminatedLine`].
    /// Fields already read stay in `self` when an error is returned.
    pub fn decode(&mut self, buf: &[u8]) -> Result<usize, HandshakeError> {
        // GET {resource} HTTP/1.1
        let (line, mut rest) = next_line(buf).map_err(|_| HandshakeError::RequestLine)?;
        self.resource = Some(parse_request_line(line)?);

        while !rest.is_empty() {
            let (line, next) = next_line(rest)?;
            rest = next;

            if line.is_empty() {
                break;
            }

            scan_field(self, line)?;
        }

        self.validate()?;

        Ok(buf.len() - rest.len())
    }
}

/// Resource of `GET {resource} HTTP/1.1`.
fn parse_request_line(line: &[u8]) -> Result<String, HandshakeError> {
    let mut parts = line.split(|b| *b == b' ');

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(resource), Some(version), None)
            if method == HTTP_METHOD && !resource.is_empty() && version == HTTP_VERSION =>
        {
            String::from_utf8(resource.to_vec()).map_err(|_| HandshakeError::Encoding)
        }
        _ => Err(HandshakeError::RequestLine),
    }
}

impl Display for Handshake {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| String::from("-"));
        write!(
            f,
            "GET {} host={} origin={} protocol={}",
            opt(&self.resource),
            opt(&self.host),
            opt(&self.origin),
            opt(&self.protocol)
        )
    }
}

/// Parse an upgrade request.
///
/// On success the handshake classifies as [`FrameType::Opening`];
/// every error classifies as [`FrameType::Error`].
pub fn parse_handshake(buf: &[u8]) -> Result<Handshake, HandshakeError> {
    let mut hs = Handshake::new();
    match hs.decode(buf) {
        Ok(_) => {
            trace!("handshake accepted: {}", hs);
            Ok(hs)
        }
        Err(e) => {
            debug!("handshake rejected: {}, {}", e, hs);
            Err(e)
        }
    }
}
