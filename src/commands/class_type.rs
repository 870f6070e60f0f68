//! ClassType command set (3)

use crate::{
    codec::{JdwpReadable, JdwpReader, JdwpWritable},
    enums::InvokeOptions,
    error::CodecError,
    types::{
        ClassID, FieldID, InvokeMethodReply, MethodID, TaggedObjectID, ThreadID, UntaggedValue,
        Value,
    },
};

use super::jdwp_command;

/// Returns the immediate superclass of a class, or `None` for
/// `java.lang.Object`.
#[jdwp_command(Option<ClassID>, 3, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Superclass {
    /// The class type ID.
    class_id: ClassID,
}

/// Sets the value of one or more static fields.
///
/// Each field must be a member of the class type or one of its supertypes;
/// access control is not enforced and final fields cannot be set. The
/// values are untagged: the field's declared type provides the tag.
#[jdwp_command((), 3, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetValues<'a> {
    /// The class type ID.
    class_id: ClassID,
    /// Fields to set and their values.
    values: &'a [(FieldID, UntaggedValue)],
}

/// Invokes a static method in the specified thread, which must be
/// suspended by an event.
///
/// The invocation is synchronous: the reply is not sent until the method
/// returns, carrying either the return value or the thrown exception. By
/// default all previously suspended threads are resumed for the duration
/// of the call; [InvokeOptions::SINGLE_THREADED] restricts that to the
/// invoking thread at the cost of deadlock risk.
#[jdwp_command(InvokeMethodReply, 3, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct InvokeMethod<'a> {
    /// The class type ID
    class_id: ClassID,
    /// The thread in which to invoke
    thread_id: ThreadID,
    /// The method to invoke
    method_id: MethodID,
    /// Arguments to the method
    arguments: &'a [Value],
    /// Invocation options
    options: InvokeOptions,
}

/// Creates a new object of this type, invoking the given constructor with
/// the same threading and suspension rules as [InvokeMethod].
#[jdwp_command(3, 4)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct NewInstance<'a> {
    /// The class type ID.
    class_id: ClassID,
    /// The thread in which to invoke the constructor.
    thread_id: ThreadID,
    /// The constructor to invoke.
    method_id: MethodID,
    /// Arguments for the constructor method.
    arguments: &'a [Value],
    /// Constructor invocation options
    options: InvokeOptions,
}

#[derive(Debug)]
pub enum NewInstanceReply {
    /// The newly created object.
    NewObject(TaggedObjectID),
    /// The thrown exception.
    Exception(TaggedObjectID),
}

impl JdwpReadable for NewInstanceReply {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        let new_object = Option::<TaggedObjectID>::read(read)?;
        let exception = Option::<TaggedObjectID>::read(read)?;

        match (new_object, exception) {
            (Some(new_object), None) => Ok(NewInstanceReply::NewObject(new_object)),
            (None, Some(exception)) => Ok(NewInstanceReply::Exception(exception)),
            _ => Err(CodecError::InvalidData("new instance reply")),
        }
    }
}
