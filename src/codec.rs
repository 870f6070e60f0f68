//! The byte-level machinery everything else is built from: a growable
//! [Buffer], the [JdwpReader]/[JdwpWriter] cursors that carry the negotiated
//! [IdSizes], and the [JdwpReadable]/[JdwpWritable] traits with impls for
//! primitives, strings, tuples and length-prefixed lists.
//!
//! Everything on the wire is big-endian. Reads are bounds-checked against
//! the input slice and fail with [CodecError::InsufficientData]; writes go
//! to an in-memory buffer and cannot fail.

use byteorder::{BigEndian, ByteOrder};
use paste::paste;

pub use jdwp_codec_macros::{JdwpReadable, JdwpWritable};

use crate::{error::CodecError, types::IdSizes};

/// A growable byte buffer used as the in-progress packet.
///
/// Besides appending, it supports absolute patching, which is how the
/// packet length (and, in the transport, the packet id) is fixed up after
/// the body has been encoded without a two-pass size computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Buffer {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn get(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    /// Overwrites a single already-written byte.
    ///
    /// # Panics
    /// Panics if `pos` is past the end of the buffer.
    pub fn set_u8(&mut self, pos: usize, byte: u8) {
        self.bytes[pos] = byte;
    }

    /// Overwrites four already-written bytes with a big-endian `u32`.
    ///
    /// # Panics
    /// Panics if `pos + 4` is past the end of the buffer.
    pub fn set_u32(&mut self, pos: usize, value: u32) {
        BigEndian::write_u32(&mut self.bytes[pos..pos + 4], value);
    }

    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buf: Buffer) -> Self {
        buf.bytes
    }
}

/// A decoding cursor over a byte slice.
///
/// Carries the negotiated [IdSizes] so identifier codecs know their width,
/// and the current position so decoders can thread it forward without
/// out-parameters.
#[derive(Debug)]
pub struct JdwpReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    pub(crate) id_sizes: IdSizes,
}

impl<'a> JdwpReader<'a> {
    pub fn new(bytes: &'a [u8], id_sizes: IdSizes) -> Self {
        Self {
            bytes,
            pos: 0,
            id_sizes,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::InsufficientData);
        }
        let bytes = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub(crate) fn peek_u8(&self) -> Result<u8, CodecError> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or(CodecError::InsufficientData)
    }

    /// Reads an unsigned big-endian integer of `size` bytes, zero-extended;
    /// the value is the low `size` bytes of an 8-byte register.
    ///
    /// # Panics
    /// Panics if `size` is not in `1..=8`.
    pub fn read_uint_sized(&mut self, size: usize) -> Result<u64, CodecError> {
        self.take(size).map(|bytes| BigEndian::read_uint(bytes, size))
    }
}

/// An encoding cursor appending to a [Buffer].
#[derive(Debug)]
pub struct JdwpWriter<'a> {
    buf: &'a mut Buffer,
    pub(crate) id_sizes: IdSizes,
}

impl<'a> JdwpWriter<'a> {
    pub fn new(buf: &'a mut Buffer, id_sizes: IdSizes) -> Self {
        Self { buf, id_sizes }
    }

    /// Appends the low `size` bytes of `value`, big-endian.
    ///
    /// # Panics
    /// Panics if `size` is not in `1..=8` or `value` does not fit in it.
    pub fn write_uint_sized(&mut self, value: u64, size: usize) {
        let mut scratch = [0; 8];
        BigEndian::write_uint(&mut scratch, value, size);
        self.buf.extend_from_slice(&scratch[..size]);
    }
}

pub trait JdwpReadable: Sized {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError>;
}

pub trait JdwpWritable {
    fn write(&self, write: &mut JdwpWriter<'_>);
}

impl JdwpReadable for () {
    #[inline]
    fn read(_: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        Ok(())
    }
}

impl JdwpWritable for () {
    #[inline]
    fn write(&self, _: &mut JdwpWriter<'_>) {}
}

impl JdwpReadable for u8 {
    #[inline]
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        read.take(1).map(|bytes| bytes[0])
    }
}

impl JdwpWritable for u8 {
    #[inline]
    fn write(&self, write: &mut JdwpWriter<'_>) {
        write.buf.push(*self);
    }
}

impl JdwpReadable for i8 {
    #[inline]
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        u8::read(read).map(|n| n as i8)
    }
}

impl JdwpWritable for i8 {
    #[inline]
    fn write(&self, write: &mut JdwpWriter<'_>) {
        (*self as u8).write(write);
    }
}

impl JdwpReadable for bool {
    #[inline]
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        u8::read(read).map(|n| n != 0)
    }
}

impl JdwpWritable for bool {
    #[inline]
    fn write(&self, write: &mut JdwpWriter<'_>) {
        u8::from(*self).write(write);
    }
}

// floats included: ByteOrder does the IEEE 754 bit-casting for us
macro_rules! int_io {
    ($($types:ident: $size:literal),* $(,)?) => {
        $(
            impl JdwpReadable for $types {
                #[inline]
                fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                    paste! {
                        read.take($size).map(BigEndian::[<read_ $types>])
                    }
                }
            }

            impl JdwpWritable for $types {
                #[inline]
                fn write(&self, write: &mut JdwpWriter<'_>) {
                    let mut scratch = [0; $size];
                    paste! {
                        BigEndian::[<write_ $types>](&mut scratch, *self);
                    }
                    write.buf.extend_from_slice(&scratch);
                }
            }
        )*
    };
}

int_io![i16: 2, u16: 2, i32: 4, u32: 4, i64: 8, u64: 8, f32: 4, f64: 8];

impl JdwpReadable for String {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        let len = u32::read(read)? as usize;
        let bytes = read.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| CodecError::InvalidData("utf-8 string"))
    }
}

impl JdwpWritable for String {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        self.as_str().write(write);
    }
}

impl JdwpWritable for &str {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        (self.len() as u32).write(write);
        write.buf.extend_from_slice(self.as_bytes());
    }
}

impl<T> JdwpReadable for Vec<T>
where
    T: JdwpReadable,
{
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        let len = u32::read(read)? as usize;
        // the length is attacker-controlled, don't preallocate blindly
        let mut res = Vec::with_capacity(len.min(read.remaining()));
        for _ in 0..len {
            res.push(T::read(read)?);
        }
        Ok(res)
    }
}

impl<T> JdwpWritable for Vec<T>
where
    T: JdwpWritable,
{
    fn write(&self, write: &mut JdwpWriter<'_>) {
        self.as_slice().write(write);
    }
}

// writable-only to allow using slices as command arguments
impl<T> JdwpWritable for &[T]
where
    T: JdwpWritable,
{
    fn write(&self, write: &mut JdwpWriter<'_>) {
        (self.len() as u32).write(write);
        for item in *self {
            item.write(write);
        }
    }
}

impl<A, B> JdwpReadable for (A, B)
where
    A: JdwpReadable,
    B: JdwpReadable,
{
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        Ok((A::read(read)?, B::read(read)?))
    }
}

impl<A, B> JdwpWritable for (A, B)
where
    A: JdwpWritable,
    B: JdwpWritable,
{
    fn write(&self, write: &mut JdwpWriter<'_>) {
        self.0.write(write);
        self.1.write(write);
    }
}
