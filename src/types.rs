//! Identifier newtypes and the polymorphic value shapes whose wire layout
//! depends on the [Tag] table and the negotiated [IdSizes].

use std::{
    fmt::{Debug, Formatter},
    ops::Deref,
};

use crate::{
    codec::{JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    enums::{Tag, TypeTag},
    error::CodecError,
};

/// The negotiated byte widths of the five variably-sized identifier kinds.
///
/// Fixed per session by the `VirtualMachine.IDSizes` reply, which must be
/// the first identifier-relevant exchange on a fresh connection; every
/// codec instance is parameterized by one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq, JdwpReadable, JdwpWritable)]
pub struct IdSizes {
    /// field_id size in bytes
    pub field_id_size: u32,
    /// method_id size in bytes
    pub method_id_size: u32,
    /// object_id size in bytes
    pub object_id_size: u32,
    /// reference_type_id size in bytes
    pub reference_type_id_size: u32,
    /// frame_id size in bytes
    pub frame_id_size: u32,
}

impl Default for IdSizes {
    /// All-eights, which is what every modern HotSpot reports.
    fn default() -> Self {
        Self {
            field_id_size: 8,
            method_id_size: 8,
            object_id_size: 8,
            reference_type_id_size: 8,
            frame_id_size: 8,
        }
    }
}

/// Common surface of the identifier newtypes.
pub trait JdwpId: Clone + Copy {
    /// Type of the underlying raw ID.
    type Raw;

    /// Creates an instance of Self from an arbitrary number.
    ///
    /// This cannot cause UB, but it is up to the caller to ensure the id is
    /// valid for the target JVM; ids are opaque, defined by the JVM, and
    /// never transfer between sessions.
    fn from_raw(raw: Self::Raw) -> Self;

    /// The underlying raw value.
    fn raw(self) -> Self::Raw;
}

/// Uniquely identifies an object in the target VM.
///
/// A particular object is identified by exactly one [ObjectID] throughout
/// its lifetime (or until the id is explicitly disposed); the id does not
/// prevent the object from being garbage collected, and accessing a
/// collected object yields the `InvalidObject` error code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectID(u64);

/// Uniquely identifies a method in some class in the target VM.
///
/// Not necessarily unique on its own; it is always paired with a
/// [ReferenceTypeID] (the declaring type or a subtype).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MethodID(u64);

/// Uniquely identifies a field in some class in the target VM, paired with
/// a [ReferenceTypeID] the same way [MethodID] is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FieldID(u64);

/// Uniquely identifies a frame in the target VM; valid only while the
/// frame's thread is suspended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FrameID(u64);

/// Uniquely identifies a reference type in the target VM. Not reused even
/// after the class is unloaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ReferenceTypeID(u64);

// one parametric codec, five widths
macro_rules! ids {
    ($($id:ident: $tpe:ident),* $(,)?) => {
        $(
            impl JdwpId for $tpe {
                type Raw = u64;

                fn from_raw(raw: u64) -> Self {
                    Self(raw)
                }

                fn raw(self) -> u64 {
                    self.0
                }
            }

            impl JdwpReadable for $tpe {
                fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                    let id_size = read.id_sizes.$id as usize;
                    read.read_uint_sized(id_size).map($tpe)
                }
            }

            impl JdwpWritable for $tpe {
                fn write(&self, write: &mut JdwpWriter<'_>) {
                    let id_size = write.id_sizes.$id as usize;
                    write.write_uint_sized(self.0, id_size);
                }
            }

            impl JdwpReadable for Option<$tpe> {
                fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                    let id = $tpe::read(read)?;
                    Ok(if id.0 == 0 { None } else { Some(id) })
                }
            }

            impl JdwpWritable for Option<$tpe> {
                #[inline]
                fn write(&self, write: &mut JdwpWriter<'_>) {
                    self.unwrap_or($tpe(0)).write(write)
                }
            }
        )*
    };
}

ids! {
    field_id_size: FieldID,
    method_id_size: MethodID,
    object_id_size: ObjectID,
    reference_type_id_size: ReferenceTypeID,
    frame_id_size: FrameID,
}

/// Uniquely identifies an object in the target VM that is known to be a
/// thread.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ThreadID(ObjectID);

/// Uniquely identifies an object in the target VM that is known to be a
/// thread group.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ThreadGroupID(ObjectID);

/// Uniquely identifies an object in the target VM that is known to be a
/// string object.
///
/// Note: this is very different from string, which is a value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct StringID(ObjectID);

/// Uniquely identifies an object in the target VM that is known to be a
/// class loader object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ClassLoaderID(ObjectID);

/// Uniquely identifies an object in the target VM that is known to be a
/// class object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ClassObjectID(ObjectID);

/// Uniquely identifies an object in the target VM that is known to be an
/// array.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ArrayID(ObjectID);

/// Uniquely identifies a reference type in the target VM that is known to
/// be a class type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ClassID(ReferenceTypeID);

/// Uniquely identifies a reference type in the target VM that is known to
/// be an interface type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct InterfaceID(ReferenceTypeID);

/// Uniquely identifies a reference type in the target VM that is known to
/// be an array type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct ArrayTypeID(ReferenceTypeID);

macro_rules! wrapper_ids {
    ($($deref:ident {$($tpe:ident),* $(,)?})*) => {
        $($(
            impl JdwpId for $tpe {
                type Raw = u64;

                fn from_raw(raw: u64) -> Self {
                    Self($deref(raw))
                }

                fn raw(self) -> u64 {
                    self.0.0
                }
            }

            impl Debug for $tpe {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!(stringify!($tpe), "({})"), self.0.0)
                }
            }

            impl Deref for $tpe {
                type Target = $deref;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl JdwpReadable for Option<$tpe> {
                fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                    let id = $tpe::read(read)?;
                    Ok(if id.0.0 == 0 { None } else { Some(id) })
                }
            }

            impl JdwpWritable for Option<$tpe> {
                fn write(&self, write: &mut JdwpWriter<'_>) {
                    self.unwrap_or($tpe($deref(0))).write(write)
                }
            }
        )*)*
    };
}

wrapper_ids! {
    ObjectID {
        ThreadID,
        ThreadGroupID,
        StringID,
        ClassLoaderID,
        ClassObjectID,
        ArrayID,
    }
    ReferenceTypeID {
        ClassID,
        InterfaceID,
        ArrayTypeID,
    }
}

/// An opaque id for an event request, represented in the JDWP docs as a raw
/// integer. A value of zero marks an automatically generated event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
#[repr(transparent)]
pub struct RequestID(i32);

impl JdwpId for RequestID {
    type Raw = i32;

    fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    fn raw(self) -> i32 {
        self.0
    }
}

/// A value retrieved from or sent to the target VM: a primitive carried
/// inline or an object id, selected by a leading [Tag] byte.
///
/// One variant per tag, so any tagged value round-trips byte-exact,
/// including the reference tags beyond plain `L` that JVMs use for
/// strings, threads and friends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    /// a void value (no bytes)
    Void,
    /// a byte value (1 byte)
    Byte(u8),
    /// a boolean value (1 byte)
    Boolean(bool),
    /// a character value (2 bytes)
    Char(u16),
    /// a short value (2 bytes)
    Short(i16),
    /// an int value (4 bytes)
    Int(i32),
    /// a long value (8 bytes)
    Long(i64),
    /// a float value (4 bytes)
    Float(f32),
    /// a double value (8 bytes)
    Double(f64),
    /// an object ([ObjectID] size)
    Object(ObjectID),
    /// an array object
    Array(ArrayID),
    /// a String object
    String(StringID),
    /// a Thread object
    Thread(ThreadID),
    /// a ThreadGroup object
    ThreadGroup(ThreadGroupID),
    /// a ClassLoader object
    ClassLoader(ClassLoaderID),
    /// a class object object
    ClassObject(ClassObjectID),
}

impl Value {
    pub fn tag(self) -> Tag {
        match self {
            Value::Void => Tag::Void,
            Value::Byte(_) => Tag::Byte,
            Value::Boolean(_) => Tag::Boolean,
            Value::Char(_) => Tag::Char,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::Object(_) => Tag::Object,
            Value::Array(_) => Tag::Array,
            Value::String(_) => Tag::String,
            Value::Thread(_) => Tag::Thread,
            Value::ThreadGroup(_) => Tag::ThreadGroup,
            Value::ClassLoader(_) => Tag::ClassLoader,
            Value::ClassObject(_) => Tag::ClassObject,
        }
    }

    /// Decodes a value whose tag is known from context and is not present
    /// on the wire (the JDWP `untagged-value` shape).
    pub fn read_untagged(read: &mut JdwpReader<'_>, tag: Tag) -> Result<Self, CodecError> {
        use JdwpReadable as R;

        let value = match tag {
            Tag::Void => Value::Void,
            Tag::Byte => Value::Byte(R::read(read)?),
            Tag::Boolean => Value::Boolean(R::read(read)?),
            Tag::Char => Value::Char(R::read(read)?),
            Tag::Short => Value::Short(R::read(read)?),
            Tag::Int => Value::Int(R::read(read)?),
            Tag::Long => Value::Long(R::read(read)?),
            Tag::Float => Value::Float(R::read(read)?),
            Tag::Double => Value::Double(R::read(read)?),
            Tag::Object => Value::Object(R::read(read)?),
            Tag::Array => Value::Array(R::read(read)?),
            Tag::String => Value::String(R::read(read)?),
            Tag::Thread => Value::Thread(R::read(read)?),
            Tag::ThreadGroup => Value::ThreadGroup(R::read(read)?),
            Tag::ClassLoader => Value::ClassLoader(R::read(read)?),
            Tag::ClassObject => Value::ClassObject(R::read(read)?),
        };
        Ok(value)
    }
}

macro_rules! tagged_io {
    ($enum:ident <-> $tag:ident, $($tpe:ident),* $(,)? { $($read_extras:tt)* } { $w:ident, $($write_extras:tt)* }) => {
        impl JdwpReadable for $enum {
            fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                match $tag::read(read)? {
                    $($tag::$tpe => JdwpReadable::read(read).map(Self::$tpe),)*
                    $($read_extras)*
                }
            }
        }

        impl JdwpWritable for $enum {
            fn write(&self, $w: &mut JdwpWriter<'_>) {
                match self {
                    $(Self::$tpe(v) => {
                        $tag::$tpe.write($w);
                        v.write($w);
                    },)*
                    $($write_extras)*
                }
            }
        }
    };
}

tagged_io! {
    Value <-> Tag,
    Byte, Boolean, Char, Short, Int, Long, Float, Double,
    Object, Array, String, Thread, ThreadGroup, ClassLoader, ClassObject
    { Tag::Void => Ok(Value::Void) }
    { write, Self::Void => Tag::Void.write(write) }
}

/// A write-only wrapper around [Value] that writes the value payload
/// without its tag.
///
/// Used where JDWP specifies an `untagged-value` and the tag is derived
/// from context; the read direction is [Value::read_untagged].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UntaggedValue(pub Value);

impl From<Value> for UntaggedValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Deref for UntaggedValue {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl JdwpWritable for UntaggedValue {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        match self.0 {
            Value::Void => {}
            Value::Byte(v) => v.write(write),
            Value::Boolean(v) => v.write(write),
            Value::Char(v) => v.write(write),
            Value::Short(v) => v.write(write),
            Value::Int(v) => v.write(write),
            Value::Long(v) => v.write(write),
            Value::Float(v) => v.write(write),
            Value::Double(v) => v.write(write),
            Value::Object(v) => v.write(write),
            Value::Array(v) => v.write(write),
            Value::String(v) => v.write(write),
            Value::Thread(v) => v.write(write),
            Value::ThreadGroup(v) => v.write(write),
            Value::ClassLoader(v) => v.write(write),
            Value::ClassObject(v) => v.write(write),
        }
    }
}

/// An [ObjectID] prefixed with the [Tag] identifying what kind of object
/// it is.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum TaggedObjectID {
    /// an array object
    Array(ArrayID),
    /// an object
    Object(ObjectID),
    /// a String object
    String(StringID),
    /// a Thread object
    Thread(ThreadID),
    /// a ThreadGroup object
    ThreadGroup(ThreadGroupID),
    /// a ClassLoader object
    ClassLoader(ClassLoaderID),
    /// a class object object
    ClassObject(ClassObjectID),
}

impl TaggedObjectID {
    pub fn tag(self) -> Tag {
        use TaggedObjectID::*;
        match self {
            Array(_) => Tag::Array,
            Object(_) => Tag::Object,
            String(_) => Tag::String,
            Thread(_) => Tag::Thread,
            ThreadGroup(_) => Tag::ThreadGroup,
            ClassLoader(_) => Tag::ClassLoader,
            ClassObject(_) => Tag::ClassObject,
        }
    }

    pub fn decompose(self) -> (Tag, ObjectID) {
        (self.tag(), *self)
    }
}

impl Deref for TaggedObjectID {
    type Target = ObjectID;

    fn deref(&self) -> &Self::Target {
        use TaggedObjectID::*;
        match self {
            Array(id) => id,
            Object(id) => id,
            String(id) => id,
            Thread(id) => id,
            ThreadGroup(id) => id,
            ClassLoader(id) => id,
            ClassObject(id) => id,
        }
    }
}

impl Debug for TaggedObjectID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use TaggedObjectID::*;
        match self {
            Array(id) => write!(f, "Array({})", id.0.0),
            Object(id) => write!(f, "Object({})", id.0),
            String(id) => write!(f, "String({})", id.0.0),
            Thread(id) => write!(f, "Thread({})", id.0.0),
            ThreadGroup(id) => write!(f, "ThreadGroup({})", id.0.0),
            ClassLoader(id) => write!(f, "ClassLoader({})", id.0.0),
            ClassObject(id) => write!(f, "ClassObject({})", id.0.0),
        }
    }
}

tagged_io! {
    TaggedObjectID <-> Tag,
    Array, Object, String, Thread, ThreadGroup, ClassLoader, ClassObject
    { tag => Err(CodecError::InvalidTag(tag as u8)) }
    { write, }
}

/// JDWP writes "null object" either as a zero tag byte (field watch
/// events on statics) or as a zero id behind a normal tag byte (invoke
/// replies), so both decode to `None`. The construct is fixed-width: the
/// null case still consumes the tag byte plus a full object id.
impl JdwpReadable for Option<TaggedObjectID> {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        if read.peek_u8()? == 0 {
            let object_size = read.id_sizes.object_id_size as usize;
            u8::read(read)?;
            read.read_uint_sized(object_size)?;
            return Ok(None);
        }
        let tagged = TaggedObjectID::read(read)?;
        Ok(if tagged.raw() == 0 { None } else { Some(tagged) })
    }
}

impl JdwpWritable for Option<TaggedObjectID> {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        match self {
            Some(tagged) => tagged.write(write),
            None => TaggedObjectID::Object(ObjectID(0)).write(write),
        }
    }
}

/// A [ReferenceTypeID] prefixed with the [TypeTag] identifying whether it
/// is a class, an interface or an array type.
///
/// Not a separate value type in the JDWP spec, which passes it around as a
/// `(TypeTag, ReferenceTypeID)` pair; fusing the two makes impossible
/// combinations unrepresentable.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum TaggedReferenceTypeID {
    /// a class reference
    Class(ClassID),
    /// an interface reference
    Interface(InterfaceID),
    /// an array reference
    Array(ArrayTypeID),
}

impl TaggedReferenceTypeID {
    pub fn tag(self) -> TypeTag {
        use TaggedReferenceTypeID::*;
        match self {
            Class(_) => TypeTag::Class,
            Interface(_) => TypeTag::Interface,
            Array(_) => TypeTag::Array,
        }
    }

    pub fn decompose(self) -> (TypeTag, ReferenceTypeID) {
        (self.tag(), *self)
    }
}

impl Deref for TaggedReferenceTypeID {
    type Target = ReferenceTypeID;

    fn deref(&self) -> &Self::Target {
        use TaggedReferenceTypeID::*;
        match self {
            Class(id) => &id.0,
            Interface(id) => &id.0,
            Array(id) => &id.0,
        }
    }
}

impl Debug for TaggedReferenceTypeID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use TaggedReferenceTypeID::*;
        match self {
            Class(id) => write!(f, "Class({})", id.0.0),
            Interface(id) => write!(f, "Interface({})", id.0.0),
            Array(id) => write!(f, "Array({})", id.0.0),
        }
    }
}

tagged_io! {
    TaggedReferenceTypeID <-> TypeTag,
    Class, Interface, Array
    {} { write, }
}

/// A compact representation of values used with some array operations.
///
/// Primitive regions carry their elements untagged, back to back; object
/// regions carry one full tagged id per element and remember the region
/// tag they arrived with (`[`, `s`, `t`, ...) so they re-encode byte-exact.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayRegion {
    Byte(Vec<u8>),
    Boolean(Vec<bool>),
    Char(Vec<u16>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Object(Tag, Vec<TaggedObjectID>),
}

impl ArrayRegion {
    pub fn tag(&self) -> Tag {
        use ArrayRegion::*;
        match self {
            Byte(_) => Tag::Byte,
            Boolean(_) => Tag::Boolean,
            Char(_) => Tag::Char,
            Short(_) => Tag::Short,
            Int(_) => Tag::Int,
            Long(_) => Tag::Long,
            Float(_) => Tag::Float,
            Double(_) => Tag::Double,
            Object(tag, _) => *tag,
        }
    }

    pub fn len(&self) -> usize {
        use ArrayRegion::*;
        match self {
            Byte(v) => v.len(),
            Boolean(v) => v.len(),
            Char(v) => v.len(),
            Short(v) => v.len(),
            Int(v) => v.len(),
            Long(v) => v.len(),
            Float(v) => v.len(),
            Double(v) => v.len(),
            Object(_, v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JdwpReadable for ArrayRegion {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        use JdwpReadable as R;

        let tag = Tag::read(read)?;
        let region = match tag {
            Tag::Byte => ArrayRegion::Byte(R::read(read)?),
            Tag::Boolean => ArrayRegion::Boolean(R::read(read)?),
            Tag::Char => ArrayRegion::Char(R::read(read)?),
            Tag::Short => ArrayRegion::Short(R::read(read)?),
            Tag::Int => ArrayRegion::Int(R::read(read)?),
            Tag::Long => ArrayRegion::Long(R::read(read)?),
            Tag::Float => ArrayRegion::Float(R::read(read)?),
            Tag::Double => ArrayRegion::Double(R::read(read)?),
            Tag::Void => return Err(CodecError::InvalidTag(Tag::Void as u8)),
            Tag::Object
            | Tag::Array
            | Tag::String
            | Tag::Thread
            | Tag::ThreadGroup
            | Tag::ClassLoader
            | Tag::ClassObject => ArrayRegion::Object(tag, R::read(read)?),
        };
        Ok(region)
    }
}

impl JdwpWritable for ArrayRegion {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        use ArrayRegion::*;

        self.tag().write(write);
        match self {
            Byte(v) => v.write(write),
            Boolean(v) => v.write(write),
            Char(v) => v.write(write),
            Short(v) => v.write(write),
            Int(v) => v.write(write),
            Long(v) => v.write(write),
            Float(v) => v.write(write),
            Double(v) => v.write(write),
            Object(_, v) => v.write(write),
        }
    }
}

/// An executable location: a type tag, a class id, a method id and an
/// 8-byte unsigned index into the method.
///
/// Index values within a method grow monotonically from the first
/// executable point to the last; the type tag exists because interfaces
/// can carry executable code in their static initializers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, JdwpReadable, JdwpWritable)]
pub struct Location {
    pub reference_id: TaggedReferenceTypeID,
    pub method_id: MethodID,
    pub index: u64,
}

impl Location {
    pub fn new(reference_id: TaggedReferenceTypeID, method_id: MethodID, index: u64) -> Self {
        Self {
            reference_id,
            method_id,
            index,
        }
    }
}

/// JDWP writes "no location" (e.g. the catch location of an uncaught
/// exception) as a zero type-tag byte followed by zeros. The construct is
/// fixed-width: the null case still spans the full
/// `1 + reference_type_id_size + method_id_size + 8` bytes, so all of
/// them are consumed to keep subsequent fields in sync.
impl JdwpReadable for Option<Location> {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        if read.peek_u8()? != 0 {
            return Location::read(read).map(Some);
        }
        let reference_size = read.id_sizes.reference_type_id_size as usize;
        let method_size = read.id_sizes.method_id_size as usize;
        u8::read(read)?;
        read.read_uint_sized(reference_size)?;
        read.read_uint_sized(method_size)?;
        u64::read(read)?;
        Ok(None)
    }
}

impl JdwpWritable for Option<Location> {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        match self {
            Some(location) => location.write(write),
            None => {
                let reference_size = write.id_sizes.reference_type_id_size as usize;
                let method_size = write.id_sizes.method_id_size as usize;
                0u8.write(write);
                write.write_uint_sized(0, reference_size);
                write.write_uint_sized(0, method_size);
                0u64.write(write);
            }
        }
    }
}

/// The shared reply shape of the three method invocation commands: either
/// the returned value or the thrown exception.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvokeMethodReply {
    /// The value returned by the invoked method, possibly [Value::Void].
    Value(Value),
    /// The exception thrown by the invoked method.
    Exception(TaggedObjectID),
}

impl JdwpReadable for InvokeMethodReply {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        let value = Value::read(read)?;
        let exception = Option::<TaggedObjectID>::read(read)?;
        Ok(match exception {
            Some(exception) => InvokeMethodReply::Exception(exception),
            None => InvokeMethodReply::Value(value),
        })
    }
}
