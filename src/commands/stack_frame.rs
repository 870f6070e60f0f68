//! StackFrame command set (16)

use crate::{
    codec::JdwpWritable,
    enums::Tag,
    types::{FrameID, TaggedObjectID, ThreadID, Value},
};

use super::jdwp_command;

/// Returns the value of one or more local variables in a given frame.
///
/// Each variable must be visible at the frame's code index. Values can be
/// retrieved even without local variable information if the front-end can
/// determine the slot indices (for method arguments, typically from the
/// signature).
#[jdwp_command(Vec<Value>, 16, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct GetValues<'a> {
    /// The frame's thread.
    pub thread_id: ThreadID,
    /// The frame ID.
    pub frame_id: FrameID,
    /// Local variable indices and types to get.
    pub slots: &'a [(u32, Tag)],
}

/// Sets the value of one or more local variables.
///
/// Each variable must be visible at the current frame code index, and
/// primitive values must match the variable's type exactly.
#[jdwp_command((), 16, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetValues<'a> {
    /// The frame's thread.
    pub thread_id: ThreadID,
    /// The frame ID.
    pub frame_id: FrameID,
    /// Local variable indices and values to set.
    pub slots: &'a [(u32, Value)],
}

/// Returns the value of the 'this' reference for this frame, or `None`
/// for static and native methods.
#[jdwp_command(Option<TaggedObjectID>, 16, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ThisObject {
    /// The frame's thread.
    pub thread_id: ThreadID,
    /// The frame ID.
    pub frame_id: FrameID,
}

/// Pop the top-most stack frames of the thread stack, up to and including
/// `frame`; the operand stack and program counter are restored to the
/// invoke instruction.
///
/// The thread must be suspended.
///
/// Since JDWP version 1.4. Requires the `can_pop_frames` capability.
#[jdwp_command((), 16, 4)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct PopFrames {
    /// The frame's thread.
    pub thread_id: ThreadID,
    /// The frame ID.
    pub frame_id: FrameID,
}
