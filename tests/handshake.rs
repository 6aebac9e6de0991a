use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use wscodec::handshake::derive_accept_key;
use wscodec::{parse_handshake, make_handshake_response};
use wscodec::{FrameType, Handshake, HandshakeError};

use log::debug;

const REQUEST: &str = "\
    GET /chat HTTP/1.1\r\n\
    Host: server.example.com\r\n\
    Upgrade: websocket\r\n\
    Connection: Upgrade\r\n\
    Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
    Origin: http://example.com\r\n\
    Sec-WebSocket-Protocol: chat, superchat\r\n\
    Sec-WebSocket-Version: 13\r\n\
    \r\n";

const RESPONSE: &str = "\
    HTTP/1.1 101 Switching Protocols\r\n\
    Upgrade: websocket\r\n\
    Connection: Upgrade\r\n\
    Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=\r\n\
    \r\n";

fn init_log() { let _ = env_logger::builder().is_test(true).try_init(); }

#[test]
fn handshake_exchange() {
    init_log();

    let hs = parse_handshake(REQUEST.as_bytes()).unwrap();
    debug!("server: handshake parsed: {}", hs);
    assert_eq!(hs.frame_type(), FrameType::Opening);

    let response = make_handshake_response(&hs).unwrap();
    debug!("server: response {} bytes", response.len());
    assert_eq!(std::str::from_utf8(&response).unwrap(), RESPONSE);
}

#[test]
fn handshake_random_key() {
    init_log();

    for _ in 0..64 {
        let key = STANDARD.encode(rand::random::<[u8; 16]>());
        let request = REQUEST.replace("dGhlIHNhbXBsZSBub25jZQ==", &key);

        let hs = parse_handshake(request.as_bytes()).unwrap();
        assert_eq!(hs.key.as_deref(), Some(key.as_str()));

        let response = String::from_utf8(make_handshake_response(&hs).unwrap()).unwrap();
        let accept = format!(
            "Sec-WebSocket-Accept: {}\r\n",
            derive_accept_key(key.as_bytes())
        );
        assert!(response.contains(&accept));
        assert!(response.ends_with("\r\n\r\n"));
    }
}

#[test]
fn handshake_missing_any_header() {
    init_log();

    let required = ["Host:", "Origin:", "Sec-WebSocket-Key:", "Connection:", "Upgrade:"];
    for name in required {
        let request: String = REQUEST
            .split_inclusive("\r\n")
            .filter(|line| !line.starts_with(name))
            .collect();

        let e = parse_handshake(request.as_bytes()).unwrap_err();
        debug!("missing {}: {}", name, e);
        assert!(e.is_malformed());
        assert_eq!(FrameType::from(e), FrameType::Error);
    }
}

#[test]
fn handshake_garbage() {
    init_log();

    let inputs: [&[u8]; 6] = [
        b"",
        b"\r\n\r\n",
        b"GET",
        b"GET / HTTP/1.1",
        b"GET / HTTP/1.1\r\nHost: a",
        b"\x00\xff\xfe\r\n\r\n",
    ];
    for input in inputs {
        assert!(parse_handshake(input).is_err());
    }

    // a prefix cut inside a line fails cleanly
    for n in 0..REQUEST.len() {
        if REQUEST[..n].ends_with("\r\n") {
            continue;
        }
        assert!(parse_handshake(&REQUEST.as_bytes()[..n]).is_err(), "{}", n);
    }
}

#[test]
fn response_without_key() {
    init_log();

    let hs = Handshake::new();
    assert_eq!(make_handshake_response(&hs), Err(HandshakeError::MissingKey));
}
