//! ThreadReference command set (11)

use crate::{
    codec::{JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    enums::{SuspendStatus, ThreadStatus},
    error::CodecError,
    types::{FrameID, Location, TaggedObjectID, ThreadGroupID, ThreadID, Value},
};

use super::jdwp_command;

/// Returns the thread name.
#[jdwp_command(String, 11, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Name {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Suspends the thread.
///
/// Suspensions are counted, and the thread is guaranteed to stay suspended
/// until resumed through JDWP; the usual `Thread.suspend` deadlock caveats
/// apply if it holds a monitor another running thread needs.
#[jdwp_command((), 11, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Suspend {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Resumes the execution of a given thread, decrementing its pending
/// suspend count; a no-op if the front-end never suspended it.
#[jdwp_command((), 11, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Resume {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns the current status of a thread: what it was last doing, plus
/// whether it is suspended.
#[jdwp_command((ThreadStatus, SuspendStatus), 11, 4)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Status {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns the thread group that contains a given thread.
#[jdwp_command(ThreadGroupID, 11, 5)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ThreadGroup {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns the current call stack of a suspended thread, from the
/// currently executing frame down towards its callers.
///
/// The returned frame ids are valid only while the thread stays
/// suspended.
#[jdwp_command(Vec<(FrameID, Location)>, 11, 6)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Frames {
    /// The thread object ID.
    pub thread: ThreadID,
    /// The index of the first frame to retrieve.
    pub start_frame: u32,
    /// The amount of frames to retrieve.
    pub limit: FrameLimit,
}

/// A readable stand-in for the raw `i32` with a special meaning for -1.
#[derive(Debug, Clone)]
pub enum FrameLimit {
    Limit(u32),
    AllRemaining,
}

impl JdwpWritable for FrameLimit {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        match self {
            FrameLimit::Limit(n) => n.write(write),
            FrameLimit::AllRemaining => (-1i32).write(write),
        }
    }
}

/// Returns the count of frames on this thread's stack.
///
/// The thread must be suspended; errors with `ThreadNotSuspended`
/// otherwise.
#[jdwp_command(u32, 11, 7)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct FrameCount {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns the objects whose monitors have been entered by this thread.
///
/// The thread must be suspended. Requires the
/// `can_get_owned_monitor_info` capability.
#[jdwp_command(Vec<TaggedObjectID>, 11, 8)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct OwnedMonitors {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns the object, if any, for which this thread is waiting, either to
/// enter its monitor or for `Object.notify` on it.
///
/// The thread must be suspended. Requires the
/// `can_get_current_contended_monitor` capability.
#[jdwp_command(Option<TaggedObjectID>, 11, 9)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct CurrentContendedMonitor {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Stops the thread with an asynchronous exception, as if done by
/// `java.lang.Thread.stop`.
#[jdwp_command((), 11, 10)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Stop {
    /// The thread object ID.
    pub thread: ThreadID,
    /// Asynchronous exception; must be an instance of `Throwable`.
    pub throwable: TaggedObjectID,
}

/// Interrupt the thread, as if done by `java.lang.Thread.interrupt`.
#[jdwp_command((), 11, 11)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Interrupt {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Get the suspend count for this thread: the number of suspends without a
/// corresponding resume.
#[jdwp_command(u32, 11, 12)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SuspendCount {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// Returns monitor objects owned by the thread, along with the stack
/// depth at which each was acquired.
///
/// The thread must be suspended. Requires the
/// `can_get_monitor_frame_info` capability.
///
/// Since JDWP version 1.6.
#[jdwp_command(Vec<(TaggedObjectID, StackDepth)>, 11, 13)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct OwnedMonitorsStackDepthInfo {
    /// The thread object ID.
    pub thread: ThreadID,
}

/// A monitor acquisition depth; unknown e.g. for monitors acquired by JNI
/// MonitorEnter.
#[derive(Debug, Clone)]
pub enum StackDepth {
    Depth(u32),
    Unknown,
}

impl JdwpReadable for StackDepth {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        let depth = match i32::read(read)? {
            -1 => StackDepth::Unknown,
            n => StackDepth::Depth(n as u32),
        };
        Ok(depth)
    }
}

/// Force a method to return before it reaches a return statement.
///
/// The thread must be suspended and the return happens when its execution
/// resumes; no further instructions run in the called method, finally
/// blocks included, though its monitors are released. The value must
/// match the method's return type, with [Value::Void] for void methods.
///
/// Since JDWP version 1.6. Requires the `can_force_early_return`
/// capability.
#[jdwp_command((), 11, 14)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ForceEarlyReturn {
    /// The thread object ID.
    pub thread: ThreadID,
    /// The value to return.
    pub value: Value,
}
