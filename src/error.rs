use thiserror::Error;

/// Things that can go wrong while encoding or decoding a packet.
///
/// Any of these indicates either a corrupted transport or a bug on one side
/// of the connection; JDWP-level errors travel in the reply header instead
/// and are surfaced as [ErrorCode](crate::enums::ErrorCode) values, never as
/// this type.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The packet data ended before a field could be fully read.
    #[error("packet data ended prematurely")]
    InsufficientData,
    /// A value tag byte outside the JDWP tag table.
    #[error("unknown value tag {0:#04x}")]
    InvalidTag(u8),
    /// An event kind byte with no composite event shape.
    #[error("unknown event kind {0}")]
    InvalidEventType(u8),
    /// A wire construct decoded to something it must not hold, e.g. a bad
    /// enum discriminant or invalid UTF-8. Carries the name of the
    /// construct.
    #[error("malformed {0} on the wire")]
    InvalidData(&'static str),
    /// A reply body was longer than its shape; decoding must consume the
    /// body exactly.
    #[error("{0} trailing bytes after the end of the packet body")]
    TrailingData(usize),
}
