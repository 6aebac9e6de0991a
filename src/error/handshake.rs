use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeError {
    // http error
    RequestLine,

    UnterminatedLine,

    Encoding,

    HttpHost,

    // websocket error
    Origin,

    SecWebSocketKey,

    Connection,

    Upgrade,

    // response
    MissingKey,

    NotEnoughCapacity,
}

impl HandshakeError {
    /// The request itself is unusable, as opposed to a failure
    /// while building the response.
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        !matches!(
            self,
            HandshakeError::MissingKey | HandshakeError::NotEnoughCapacity
        )
    }
}

impl Display for HandshakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use HandshakeError::*;
        match self {
            // http error
            RequestLine => write!(f, "Missing or illegal request line"),

            UnterminatedLine => write!(f, "Header line without line break"),

            Encoding => write!(f, "Header value is not valid utf-8"),

            HttpHost => write!(f, "Missing http host header"),

            // websocket error
            Origin => write!(f, "Missing origin header"),

            SecWebSocketKey => write!(f, "Missing sec-websocket-key header"),

            Connection => write!(f, "Missing or illegal connection header"),

            Upgrade => write!(f, "Missing or illegal upgrade header"),

            // response
            MissingKey => write!(f, "No key to derive sec-websocket-accept from"),

            NotEnoughCapacity => write!(f, "Not enough space to write to"),
        }
    }
}

// use default impl
impl std::error::Error for HandshakeError {}
