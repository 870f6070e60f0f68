//! A bit-exact packet codec for the Java Debug Wire Protocol.
//!
//! This crate turns typed command structs into complete framed JDWP
//! packets and framed reply/event bodies back into typed structs. It does
//! no I/O and holds no session state: a transport layer owns the socket,
//! assigns packet ids (see [packet::write_id]), correlates replies and
//! hands event packets to [JdwpCodec::decode_composite].
//!
//! The only piece of negotiated state is [types::IdSizes], fixed per
//! session by the `VirtualMachine.IDSizes` reply; a [JdwpCodec] is an
//! immutable value parameterized by it, so sessions with different widths
//! coexist by holding different codecs, and one codec can be shared by any
//! number of threads.

#![deny(missing_debug_implementations)]

extern crate self as jdwp_codec;

use crate::{
    codec::{Buffer, JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    commands::{event::Composite, Command},
    error::CodecError,
    types::IdSizes,
};

pub mod codec;
pub mod commands;
pub mod enums;
pub mod error;
pub mod jvm;
pub mod packet;
pub mod types;

/// The codec for one session, parameterized by the session's negotiated
/// identifier widths.
#[derive(Debug, Copy, Clone, Default)]
pub struct JdwpCodec {
    id_sizes: IdSizes,
}

impl JdwpCodec {
    pub fn new(id_sizes: IdSizes) -> Self {
        Self { id_sizes }
    }

    pub fn id_sizes(&self) -> &IdSizes {
        &self.id_sizes
    }

    /// Encodes a command into a complete framed packet.
    ///
    /// The header is written first with a zero length and id, the body is
    /// appended, and the length is patched afterwards; the id stays zero
    /// for the transport to stamp with [packet::write_id].
    pub fn encode<C: Command + JdwpWritable>(&self, command: &C) -> Buffer {
        let mut buf = packet::new_command(C::ID, self.id_sizes);
        command.write(&mut JdwpWriter::new(&mut buf, self.id_sizes));
        packet::finish_packet(&mut buf);
        log::trace!("encoded command {}, {} bytes", C::ID, buf.len());
        buf
    }

    /// Decodes the body of a reply packet (everything after the header)
    /// into the command's typed reply.
    ///
    /// The body must be consumed exactly; for acknowledgement-only
    /// commands (`Output = ()`) this means the body must be empty. Replies
    /// carrying a JDWP error code have empty bodies too and are expected
    /// to be routed by the transport via [packet::read_error_code] before
    /// ever reaching this call.
    pub fn decode_reply<C: Command>(&self, body: &[u8]) -> Result<C::Output, CodecError>
    where
        C::Output: JdwpReadable,
    {
        let mut read = JdwpReader::new(body, self.id_sizes);
        let reply = C::Output::read(&mut read)?;
        if read.remaining() != 0 {
            return Err(CodecError::TrailingData(read.remaining()));
        }
        log::trace!("decoded {} reply from {} bytes", C::ID, body.len());
        Ok(reply)
    }

    /// Decodes the body of a composite event packet (everything after the
    /// header).
    pub fn decode_composite(&self, body: &[u8]) -> Result<Composite, CodecError> {
        let mut read = JdwpReader::new(body, self.id_sizes);
        let composite = Composite::read(&mut read)?;
        if read.remaining() != 0 {
            return Err(CodecError::TrailingData(read.remaining()));
        }
        log::trace!(
            "decoded composite event, {} event(s)",
            composite.events.len()
        );
        Ok(composite)
    }
}
