//! Packet framing: the 11-byte header, the handshake, and the slice-level
//! helpers a transport needs to route packets without decoding them.
//!
//! A framed packet is `u32 length || u32 id || u8 flags || 2 bytes`, where
//! the two trailing header bytes are the command set and command for a
//! command packet (`flags == 0x00`) or the big-endian error code for a
//! reply packet (`flags == 0x80`). The length counts the header itself, so
//! it is always at least 11.

use std::fmt::{self, Display};

use byteorder::{BigEndian, ByteOrder};

use crate::{
    codec::{Buffer, JdwpReadable, JdwpWritable, JdwpWriter},
    enums::ErrorCode,
    error::CodecError,
    types::IdSizes,
};

/// The 14 ASCII bytes both sides must exchange, verbatim, as the very
/// first traffic on a fresh connection.
pub const HANDSHAKE: [u8; 14] = *b"JDWP-Handshake";

/// The handshake bytes to send.
pub const fn encode_handshake() -> &'static [u8] {
    &HANDSHAKE
}

/// Whether the received bytes are exactly the JDWP handshake.
pub fn is_handshake(bytes: &[u8]) -> bool {
    bytes == HANDSHAKE
}

/// The reply bit of the header flags byte; command packets have flags 0.
pub const FLAG_REPLY: u8 = 0x80;

/// Identifies a command: one byte of command set, one byte of command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, JdwpReadable, JdwpWritable)]
pub struct CommandId {
    command_set: u8,
    command: u8,
}

impl CommandId {
    pub const fn new(command_set: u8, command: u8) -> CommandId {
        CommandId {
            command_set,
            command,
        }
    }

    pub const fn command_set(&self) -> u8 {
        self.command_set
    }

    pub const fn command(&self) -> u8 {
        self.command
    }
}

impl Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.command_set, self.command)
    }
}

/// The composite event pseudo-command the back-end sends (64, 100).
pub const EVENT_COMPOSITE: CommandId = CommandId::new(64, 100);

/// The flags byte fused with the two header bytes whose meaning depends
/// on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, JdwpReadable, JdwpWritable)]
#[repr(u8)]
pub enum PacketMeta {
    Command(CommandId) = 0x00,
    Reply(ErrorCode) = 0x80,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, JdwpReadable, JdwpWritable)]
pub struct PacketHeader {
    length: u32,
    id: u32,
    meta: PacketMeta,
}

impl PacketHeader {
    /// Header size on the wire: length, id, flags, error code or command.
    pub const JDWP_SIZE: usize = 4 + 4 + 1 + 2;

    pub const fn new(length: u32, id: u32, meta: PacketMeta) -> PacketHeader {
        PacketHeader { length, id, meta }
    }

    pub const fn length(&self) -> u32 {
        self.length
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn meta(&self) -> PacketMeta {
        self.meta
    }
}

fn header_field(bytes: &[u8], from: usize, width: usize) -> Result<&[u8], CodecError> {
    // short prefixes can't be routed, don't index past them
    bytes
        .get(from..from + width)
        .ok_or(CodecError::InsufficientData)
}

/// Total packet length claimed by the header, in bytes.
pub fn read_length(bytes: &[u8]) -> Result<u32, CodecError> {
    header_field(bytes, 0, 4).map(BigEndian::read_u32)
}

/// The correlation id chosen by whoever sent the packet.
pub fn read_id(bytes: &[u8]) -> Result<u32, CodecError> {
    header_field(bytes, 4, 4).map(BigEndian::read_u32)
}

pub fn read_flags(bytes: &[u8]) -> Result<u8, CodecError> {
    header_field(bytes, 8, 1).map(|b| b[0])
}

/// The raw error code of a reply packet. Only meaningful when
/// [is_reply] holds; map it with [ErrorCode::from] or [ErrorCode::text].
pub fn read_error_code(bytes: &[u8]) -> Result<u16, CodecError> {
    header_field(bytes, 9, 2).map(BigEndian::read_u16)
}

/// The command set byte of a command packet.
pub fn read_command_set(bytes: &[u8]) -> Result<u8, CodecError> {
    header_field(bytes, 9, 1).map(|b| b[0])
}

/// The command byte of a command packet.
pub fn read_command_id(bytes: &[u8]) -> Result<u8, CodecError> {
    header_field(bytes, 10, 1).map(|b| b[0])
}

pub fn is_reply(bytes: &[u8]) -> Result<bool, CodecError> {
    read_flags(bytes).map(|flags| flags == FLAG_REPLY)
}

/// Whether this is a composite event packet: a command packet carrying
/// the Event.Composite (64, 100) pseudo-command.
pub fn is_event(bytes: &[u8]) -> Result<bool, CodecError> {
    Ok(!is_reply(bytes)?
        && read_command_set(bytes)? == EVENT_COMPOSITE.command_set()
        && read_command_id(bytes)? == EVENT_COMPOSITE.command())
}

/// Patches the packet id in place.
///
/// Encoded packets leave the id zeroed; the transport owns id allocation
/// and stamps packets just before writing them out, without re-encoding.
pub fn write_id(bytes: &mut [u8], id: u32) -> Result<(), CodecError> {
    let field = bytes
        .get_mut(4..8)
        .ok_or(CodecError::InsufficientData)?;
    BigEndian::write_u32(field, id);
    Ok(())
}

/// Starts a command packet: a buffer holding the 11-byte header with the
/// length and id still zeroed.
///
/// The command body is appended directly after; [finish_packet] fixes the
/// length up once the body is complete, which keeps every encoder a
/// straight-line sequence of appends.
pub fn new_command(command: CommandId, id_sizes: IdSizes) -> Buffer {
    let mut buf = Buffer::with_capacity(64);
    let mut write = JdwpWriter::new(&mut buf, id_sizes);
    PacketHeader::new(0, 0, PacketMeta::Command(command)).write(&mut write);
    buf
}

/// Patches the final packet length into the first four header bytes.
pub fn finish_packet(buf: &mut Buffer) {
    buf.set_u32(0, buf.len() as u32);
}
