//! Websocket opening handshake, server side.
//!
//! [`parse_handshake`] reads the client upgrade request into a
//! [`Handshake`], [`make_handshake_response`] answers it with
//! `101 Switching Protocols`.

mod scan;

pub mod key;
pub mod request;
pub mod response;

pub use request::{Handshake, parse_handshake};
pub use response::{Response, make_handshake_response};
pub use key::derive_accept_key;

/// 258EAFA5-E914-47DA-95CA-C5AB0DC85B11
pub const GUID: &[u8] = b"258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// GET
pub const HTTP_METHOD: &[u8] = b"GET";

/// HTTP/1.1
pub const HTTP_VERSION: &[u8] = b"HTTP/1.1";

/// CRLF
pub const HTTP_LINE_BREAK: &[u8] = b"\r\n";

/// A colon + one SP is preferred
pub const HTTP_HEADER_SP: &[u8] = b": ";

/// HTTP/1.1 101 Switching Protocols
pub const HTTP_STATUS_LINE: &[u8] = b"HTTP/1.1 101 Switching Protocols";

/// Header names, matched case sensitively at the start of a line.
pub mod static_headers {
    macro_rules! header {
        (   $(
                $(#[$docs: meta])*
                ($hdr_name: ident => $name: expr);
            )+
        ) => {
            $(
                $(#[$docs])*
                pub const $hdr_name: &[u8] = $name;
            )+
        };
    }

    // header name
    header! {
        /// Host
        (HEADER_HOST_NAME => b"Host");

        /// Origin
        (HEADER_ORIGIN_NAME => b"Origin");

        /// Sec-WebSocket-Protocol
        (HEADER_SEC_WEBSOCKET_PROTOCOL_NAME => b"Sec-WebSocket-Protocol");

        /// Sec-WebSocket-Key
        (HEADER_SEC_WEBSOCKET_KEY_NAME => b"Sec-WebSocket-Key");

        /// Sec-WebSocket-Accept
        (HEADER_SEC_WEBSOCKET_ACCEPT_NAME => b"Sec-WebSocket-Accept");

        /// Connection
        (HEADER_CONNECTION_NAME => b"Connection");

        /// Upgrade
        (HEADER_UPGRADE_NAME => b"Upgrade");
    }

    // header value
    header! {
        /// websocket
        (HEADER_UPGRADE_VALUE => b"websocket");

        /// Upgrade
        (HEADER_CONNECTION_VALUE => b"Upgrade");
    }
}
