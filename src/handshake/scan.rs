//! Line and field scanner.

use super::request::Handshake;
use super::static_headers::*;
use super::HTTP_LINE_BREAK;

use crate::error::HandshakeError;

/// Store a header value into the handshake.
type Setter = fn(&mut Handshake, &[u8]) -> Result<(), HandshakeError>;

/// Header names consulted for every line, in order.
/// The name is followed by a colon on the wire.
pub(super) const FIELDS: [(&[u8], Setter); 6] = [
    (HEADER_HOST_NAME, set_host),
    (HEADER_ORIGIN_NAME, set_origin),
    (HEADER_SEC_WEBSOCKET_PROTOCOL_NAME, set_protocol),
    (HEADER_SEC_WEBSOCKET_KEY_NAME, set_key),
    (HEADER_CONNECTION_NAME, set_connection),
    (HEADER_UPGRADE_NAME, set_upgrade),
];

/// Split off the first line, without its CRLF.
pub(super) fn next_line(buf: &[u8]) -> Result<(&[u8], &[u8]), HandshakeError> {
    buf.windows(HTTP_LINE_BREAK.len())
        .position(|w| w == HTTP_LINE_BREAK)
        .map(|n| (&buf[..n], &buf[n + HTTP_LINE_BREAK.len()..]))
        .ok_or(HandshakeError::UnterminatedLine)
}

/// Value of `line` if it starts with `name` and a colon.
/// One SP after the colon is skipped, the rest is kept verbatim.
pub(super) fn field_value<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    let rest = line.strip_prefix(name)?.strip_prefix(b":")?;
    Some(rest.strip_prefix(b" ").unwrap_or(rest))
}

/// Look the line up in [`FIELDS`] and store its value.
/// Unknown lines are skipped.
pub(super) fn scan_field(hs: &mut Handshake, line: &[u8]) -> Result<(), HandshakeError> {
    for (name, set) in FIELDS.iter() {
        if let Some(value) = field_value(line, name) {
            return set(hs, value);
        }
    }
    Ok(())
}

fn contains_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}

fn to_owned_str(v: &[u8]) -> Result<String, HandshakeError> {
    String::from_utf8(v.to_vec()).map_err(|_| HandshakeError::Encoding)
}

fn set_host(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    hs.host = Some(to_owned_str(v)?);
    Ok(())
}

fn set_origin(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    hs.origin = Some(to_owned_str(v)?);
    Ok(())
}

fn set_protocol(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    hs.protocol = Some(to_owned_str(v)?);
    Ok(())
}

fn set_key(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    hs.key = Some(to_owned_str(v)?);
    Ok(())
}

// the token may appear anywhere in a list, e.g. "keep-alive, Upgrade"
fn set_connection(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    if contains_ignore_ascii_case(v, HEADER_CONNECTION_VALUE) {
        hs.upgrade_connection = true;
    }
    Ok(())
}

fn set_upgrade(hs: &mut Handshake, v: &[u8]) -> Result<(), HandshakeError> {
    let n = HEADER_UPGRADE_VALUE.len();
    if v.len() >= n && v[..n].eq_ignore_ascii_case(HEADER_UPGRADE_VALUE) {
        hs.upgrade_protocol = true;
    }
    Ok(())
}
