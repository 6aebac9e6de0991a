// #![warn(missing_docs)]

//! Sans-io websocket codec.
//!
//! ## Features
//! - No I/O, bytes in and bytes (or structured data) out.
//! - Bounds checked everywhere, malformed input is an error, never a panic.
//! - Unmask in place, borrow the payload from the input buffer.
//!
//! ## Handshake
//!
//! - [`parse_handshake`]
//! - [`make_handshake_response`]
//!
//! ```
//! use wscodec::{parse_handshake, make_handshake_response};
//!
//! let request = b"GET /chat HTTP/1.1\r\n\
//!     Host: server.example.com\r\n\
//!     Upgrade: websocket\r\n\
//!     Connection: Upgrade\r\n\
//!     Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
//!     Origin: http://example.com\r\n\r\n";
//!
//! let hs = parse_handshake(request).unwrap();
//! let response = make_handshake_response(&hs).unwrap();
//! assert!(response.starts_with(b"HTTP/1.1 101 Switching Protocols\r\n"));
//! ```
//!
//! ## Frame
//!
//! - [`make_frame`]
//! - [`parse_frame_type`]
//! - [`extract_payload`]
//!
//! ```
//! use wscodec::{make_frame, parse_frame_type, extract_payload};
//! use wscodec::{FrameType, Options};
//!
//! let mut frame = make_frame(b"hello", FrameType::Text, Options::FINAL_FRAME).unwrap();
//! assert_eq!(parse_frame_type(&frame), FrameType::Text);
//! assert_eq!(extract_payload(&mut frame).unwrap(), b"hello");
//! ```
//!
//! Lower level building blocks live in [`frame`] and [`handshake`].

mod cursor;

pub mod error;
pub mod frame;
pub mod handshake;

pub use error::{Error, FrameError, HandshakeError};
pub use frame::{FrameType, Options};
pub use frame::{make_frame, parse_frame_type, extract_payload, parse_frame};
pub use handshake::{Handshake, parse_handshake, make_handshake_response};
