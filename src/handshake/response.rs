//! Server handshake.
//!
//! From [RFC-6455 Section 4.2](https://datatracker.ietf.org/doc/html/rfc6455#section-4.2):
//!
//! If the server chooses to accept the incoming connection, it MUST
//! reply with a valid HTTP response.
//!
//! Example:
//!
//! ```text
//! HTTP/1.1 101 Switching Protocols
//! Upgrade: websocket
//! Connection: Upgrade
//! Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=
//! ```
//!

use log::{debug, trace};

use super::key::derive_accept_key;
use super::request::Handshake;
use super::static_headers::*;
use super::{HTTP_STATUS_LINE, HTTP_LINE_BREAK, HTTP_HEADER_SP};

use crate::cursor::Writer;
use crate::error::HandshakeError;

macro_rules! write_header {
    ($w: expr, $name: expr, $value: expr) => {
        for part in [$name, HTTP_HEADER_SP, $value, HTTP_LINE_BREAK] {
            $w.write_or_err(part, || HandshakeError::NotEnoughCapacity)?;
        }
    };
}

/// Http response presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub sec_accept: String,
}

impl Response {
    /// Derive the accept key from the handshake.
    /// A handshake without a key, or with an empty one,
    /// gives [`HandshakeError::MissingKey`].
    pub fn new(hs: &Handshake) -> Result<Self, HandshakeError> {
        let key = hs
            .key
            .as_ref()
            .filter(|key| !key.is_empty())
            .ok_or(HandshakeError::MissingKey)?;
        Ok(Self {
            sec_accept: derive_accept_key(key.as_bytes()),
        })
    }

    /// Total number of bytes, the final CRLF included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let header = |name: &[u8], value: &[u8]| {
            name.len() + HTTP_HEADER_SP.len() + value.len() + HTTP_LINE_BREAK.len()
        };
        HTTP_STATUS_LINE.len()
            + HTTP_LINE_BREAK.len()
            + header(HEADER_UPGRADE_NAME, HEADER_UPGRADE_VALUE)
            + header(HEADER_CONNECTION_NAME, HEADER_CONNECTION_VALUE)
            + header(HEADER_SEC_WEBSOCKET_ACCEPT_NAME, self.sec_accept.as_bytes())
            + HTTP_LINE_BREAK.len()
    }

    /// Encode to a provided buffer, return the number of written bytes.
    ///
    /// Caller should make sure the buffer is large enough,
    /// otherwise a [`HandshakeError::NotEnoughCapacity`] error will be returned.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, HandshakeError> {
        let mut w = Writer::new(buf);

        // HTTP/1.1 101 Switching Protocols
        w.write_or_err(HTTP_STATUS_LINE, || HandshakeError::NotEnoughCapacity)?;
        w.write_or_err(HTTP_LINE_BREAK, || HandshakeError::NotEnoughCapacity)?;

        // Upgrade: websocket
        write_header!(w, HEADER_UPGRADE_NAME, HEADER_UPGRADE_VALUE);

        // Connection: Upgrade
        write_header!(w, HEADER_CONNECTION_NAME, HEADER_CONNECTION_VALUE);

        // Sec-WebSocket-Accept: {sec_accept}
        write_header!(w, HEADER_SEC_WEBSOCKET_ACCEPT_NAME, self.sec_accept.as_bytes());

        // finish with CRLF
        w.write_or_err(HTTP_LINE_BREAK, || HandshakeError::NotEnoughCapacity)?;

        Ok(w.pos())
    }

    /// Encode to a new buffer of the exact size.
    pub fn to_vec(&self) -> Result<Vec<u8>, HandshakeError> {
        let mut buf = vec![0_u8; self.len()];
        let n = self.encode(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }
}

/// Build the `101 Switching Protocols` response for a parsed handshake.
pub fn make_handshake_response(hs: &Handshake) -> Result<Vec<u8>, HandshakeError> {
    let response = Response::new(hs).map_err(|e| {
        debug!("handshake response: {}", e);
        e
    })?;
    let buf = response.to_vec()?;
    trace!("handshake response: {} bytes", buf.len());
    Ok(buf)
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::parse_handshake;
    use super::super::test::TEMPLATE_REQUEST;

    const TEMPLATE_RESPONSE: &str = "\
        HTTP/1.1 101 Switching Protocols\r\n\
        Upgrade: websocket\r\n\
        Connection: Upgrade\r\n\
        Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=\r\n\
        \r\n";

    #[test]
    fn server_response() {
        let hs = parse_handshake(TEMPLATE_REQUEST.as_bytes()).unwrap();
        let buf = make_handshake_response(&hs).unwrap();
        assert_eq!(buf, TEMPLATE_RESPONSE.as_bytes());
    }

    #[test]
    fn server_response2() {
        macro_rules! run {
            ($key: expr) => {{
                let hs = Handshake {
                    key: Some(String::from($key)),
                    ..Handshake::default()
                };
                let response = Response::new(&hs).unwrap();
                assert_eq!(response.sec_accept, derive_accept_key($key.as_bytes()));

                let mut buf: Vec<u8> = vec![0; 0x400];
                let encode_n = response.encode(&mut buf).unwrap();
                assert_eq!(encode_n, response.len());
                assert_eq!(&buf[..encode_n], &make_handshake_response(&hs).unwrap()[..]);
            }};
        }

        run!("aaa");
        run!("bbbbbbbbbb");
        run!("x3JJHMbDL1EzLkh9GBhXDw==");
    }

    #[test]
    fn missing_key() {
        let hs = Handshake::default();
        assert_eq!(make_handshake_response(&hs), Err(HandshakeError::MissingKey));

        let hs = Handshake {
            key: Some(String::new()),
            ..Handshake::default()
        };
        assert_eq!(make_handshake_response(&hs), Err(HandshakeError::MissingKey));
    }

    #[test]
    fn not_enough_capacity() {
        let hs = parse_handshake(TEMPLATE_REQUEST.as_bytes()).unwrap();
        let response = Response::new(&hs).unwrap();
        for n in [0, 10, TEMPLATE_RESPONSE.len() - 1] {
            let mut buf = vec![0_u8; n];
            assert_eq!(response.encode(&mut buf), Err(HandshakeError::NotEnoughCapacity));
        }
    }
}
