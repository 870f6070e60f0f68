//! ObjectReference command set (9)

use crate::{
    codec::{JdwpReadable, JdwpWritable},
    enums::InvokeOptions,
    types::{
        ClassID, FieldID, InvokeMethodReply, MethodID, ObjectID, TaggedObjectID,
        TaggedReferenceTypeID, ThreadID, UntaggedValue, Value,
    },
};

use super::jdwp_command;

/// Returns the runtime type of the object, which will be a class or an
/// array.
#[jdwp_command(TaggedReferenceTypeID, 9, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ReferenceType {
    /// The object ID
    object: ObjectID,
}

/// Returns the value of one or more instance fields.
///
/// Each field must be a member of the object's type or one of its
/// supertypes; access control is not enforced.
#[jdwp_command(Vec<Value>, 9, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct GetValues<'a> {
    /// The object ID
    object: ObjectID,
    /// Fields to get
    fields: &'a [FieldID],
}

/// Sets the value of one or more instance fields.
///
/// The values are untagged: the field's declared type provides the tag.
#[jdwp_command((), 9, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetValues<'a> {
    /// The object ID
    object: ObjectID,
    /// Fields and the values to set them to
    fields: &'a [(FieldID, UntaggedValue)],
}

/// Returns monitor information for an object.
///
/// All threads in the VM must be suspended. Requires the
/// `can_get_monitor_info` capability.
#[jdwp_command(9, 5)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct MonitorInfo {
    /// The object ID
    object: ObjectID,
}

#[derive(Debug, JdwpReadable)]
pub struct MonitorInfoReply {
    /// The monitor owner, or `None` if it is not currently owned
    pub owner: Option<ThreadID>,
    /// The number of times the monitor has been entered.
    pub entry_count: i32,
    /// The threads that are waiting for the monitor; empty if there is no
    /// current owner
    pub waiters: Vec<ThreadID>,
}

/// Invokes an instance method in the specified thread, which must be
/// suspended by an event.
///
/// The method must be a member of the object's type or one of its
/// supertypes. Threading, suspension and reply semantics are the same as
/// for [ClassType.InvokeMethod](super::class_type::InvokeMethod);
/// [InvokeOptions::NONVIRTUAL] additionally suppresses dynamic dispatch.
#[jdwp_command(InvokeMethodReply, 9, 6)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct InvokeMethod<'a> {
    /// The object ID
    object: ObjectID,
    /// The thread in which to invoke
    thread_id: ThreadID,
    /// The class whose method is invoked
    class_id: ClassID,
    /// The method to invoke
    method_id: MethodID,
    /// The arguments
    arguments: &'a [Value],
    /// Invocation options
    options: InvokeOptions,
}

/// Prevents garbage collection for the given object.
///
/// While the VM is suspended no collection happens anyway; this command
/// alters the collection pattern of a running VM, so use it sparingly.
/// Undone by [EnableCollection].
#[jdwp_command((), 9, 7)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct DisableCollection {
    /// The object ID
    object: ObjectID,
}

/// Permits garbage collection for this object again after a
/// [DisableCollection].
#[jdwp_command((), 9, 8)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct EnableCollection {
    /// The object ID
    object: ObjectID,
}

/// Determines whether an object has been garbage collected in the target
/// VM.
#[jdwp_command(bool, 9, 9)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct IsCollected {
    /// The object ID
    object: ObjectID,
}

/// Returns objects that directly reference this object; only reachable
/// referrers are returned, and non-object referrers such as stack frame
/// locals or JNI globals are not.
///
/// Since JDWP version 1.6. Requires the `can_get_instance_info`
/// capability.
#[jdwp_command(Vec<TaggedObjectID>, 9, 10)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ReferringObjects {
    /// The object ID
    object: ObjectID,
    /// Maximum number of referring objects to return. Must be
    /// non-negative. If zero, all referring objects are returned.
    max_referrers: u32,
}
