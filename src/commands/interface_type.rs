//! InterfaceType command set (5)

use crate::{
    codec::JdwpWritable,
    enums::InvokeOptions,
    types::{InterfaceID, InvokeMethodReply, MethodID, ThreadID, Value},
};

use super::jdwp_command;

/// Invokes a static interface method, which must not be a static
/// initializer.
///
/// Threading, suspension and reply semantics are the same as for
/// [ClassType.InvokeMethod](super::class_type::InvokeMethod).
///
/// Since JDWP version 1.8.
#[jdwp_command(InvokeMethodReply, 5, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct InvokeMethod<'a> {
    /// The interface type ID
    interface_id: InterfaceID,
    /// The thread in which to invoke
    thread_id: ThreadID,
    /// The method to invoke
    method_id: MethodID,
    /// The argument values
    arguments: &'a [Value],
    /// Invocation options
    options: InvokeOptions,
}
