//! Event command set (64), sent by the back-end.

use crate::{
    codec::{JdwpReadable, JdwpReader},
    enums::{ClassStatus, EventKind, SuspendPolicy},
    error::CodecError,
    types::{
        FieldID, Location, RequestID, TaggedObjectID, TaggedReferenceTypeID, ThreadID, Value,
    },
};

use super::jdwp_command;

/// One event of a composite event packet, dispatched on a leading
/// [EventKind] byte.
///
/// The JDWP field order puts the discriminator before the request id,
/// which is why the request id lives inside every variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Notification of step completion in the target VM, generated before
    /// the code at the stepped-to location is executed.
    SingleStep(
        /// Request that generated the event
        RequestID,
        /// Stepped thread
        ThreadID,
        /// Location stepped to
        Location,
    ),
    /// Notification of a breakpoint in the target VM, generated before
    /// the code at its location is executed.
    Breakpoint(
        /// Request that generated the event
        RequestID,
        /// Thread which hit the breakpoint
        ThreadID,
        /// Location hit
        Location,
    ),
    /// Notification of an exception in the target VM.
    ///
    /// Thrown from a native method, the event is generated at the first
    /// non-native location reached afterwards.
    Exception(
        /// Request that generated the event
        RequestID,
        /// Thread with exception
        ThreadID,
        /// Location of the throw
        Location,
        /// Thrown exception
        TaggedObjectID,
        /// Location of the catch clause that will handle the exception,
        /// or `None` if it is uncaught.
        ///
        /// An exception counts as caught when the throw location is
        /// dynamically enclosed in a try statement handling it. With
        /// native frames on the stack this is best-effort: the catch
        /// location may never be reached, and "uncaught" exceptions may
        /// still be handled natively.
        Option<Location>,
    ),
    /// Notification of a new running thread in the target VM.
    ///
    /// Generated by the new thread some time before its execution starts,
    /// so other events for the thread can arrive first.
    ThreadStart(
        /// Request that generated the event
        RequestID,
        /// Started thread
        ThreadID,
    ),
    /// Notification of a completed thread, generated by the dying thread
    /// itself before it terminates.
    ThreadDeath(
        /// Request that generated the event
        RequestID,
        /// Ending thread
        ThreadID,
    ),
    /// Notification of a class prepare in the target VM; not generated
    /// for primitive classes.
    ClassPrepare(
        /// Request that generated the event
        RequestID,
        /// Preparing thread
        ThreadID,
        /// Type being prepared
        TaggedReferenceTypeID,
        /// Type signature
        String,
        /// Status of type
        ClassStatus,
    ),
    /// Notification of a class unload in the target VM; garbage
    /// collection constraints limit the information to the signature.
    ClassUnload(
        /// Request that generated the event
        RequestID,
        /// Type signature
        String,
    ),
    /// Notification of a field access in the target VM; modifications do
    /// not count as accesses.
    ///
    /// Requires the `can_watch_field_access` capability.
    FieldAccess(
        /// Request that generated the event
        RequestID,
        /// Accessing thread
        ThreadID,
        /// Location of access
        Location,
        /// Type in which the field is declared
        TaggedReferenceTypeID,
        /// Field being accessed
        FieldID,
        /// Object being accessed, `None` for statics
        Option<TaggedObjectID>,
    ),
    /// Notification of a field modification in the target VM.
    ///
    /// Requires the `can_watch_field_modification` capability.
    FieldModification(
        /// Request that generated the event
        RequestID,
        /// Modifying thread
        ThreadID,
        /// Location of modify
        Location,
        /// Type in which the field is declared
        TaggedReferenceTypeID,
        /// Field being modified
        FieldID,
        /// Object being modified, `None` for statics
        Option<TaggedObjectID>,
        /// Value to be assigned
        Value,
    ),
    /// Notification of a method invocation in the target VM, generated
    /// before any code in the method executes; native methods included.
    MethodEntry(
        /// Request that generated the event
        RequestID,
        /// Thread which entered the method
        ThreadID,
        /// The initial executable location in the method
        Location,
    ),
    /// Notification of a method return, generated after all code in the
    /// method has executed; not generated when the method terminates with
    /// a thrown exception.
    MethodExit(
        /// Request that generated the event
        RequestID,
        /// Thread which exited the method
        ThreadID,
        /// Location of exit
        Location,
    ),
    /// [Event::MethodExit] plus the value the method will return.
    ///
    /// Since JDWP version 1.6.
    MethodExitWithReturnValue(
        /// Request that generated the event
        RequestID,
        /// Thread which exited the method
        ThreadID,
        /// Location of exit
        Location,
        /// Value that will be returned by the method
        Value,
    ),
    /// Notification that a thread is attempting to enter a monitor
    /// already acquired by another thread.
    ///
    /// Requires the `can_request_monitor_events` capability. Since JDWP
    /// version 1.6.
    MonitorContendedEnter(
        /// Request that generated the event
        RequestID,
        /// Thread which is trying to enter the monitor
        ThreadID,
        /// Monitor object reference
        TaggedObjectID,
        /// Location of contended monitor enter
        Location,
    ),
    /// Notification that a thread is entering a monitor after waiting for
    /// another thread to release it.
    ///
    /// Requires the `can_request_monitor_events` capability. Since JDWP
    /// version 1.6.
    MonitorContendedEntered(
        /// Request that generated the event
        RequestID,
        /// Thread which entered the monitor
        ThreadID,
        /// Monitor object reference
        TaggedObjectID,
        /// Location of contended monitor enter
        Location,
    ),
    /// Notification of a thread about to wait on a monitor object.
    ///
    /// Requires the `can_request_monitor_events` capability. Since JDWP
    /// version 1.6.
    MonitorWait(
        /// Request that generated the event
        RequestID,
        /// Thread which is about to wait
        ThreadID,
        /// Monitor object reference
        TaggedObjectID,
        /// Location at which the wait will occur
        Location,
        /// Thread wait time in milliseconds
        i64,
    ),
    /// Notification that a thread has finished waiting on a monitor
    /// object.
    ///
    /// Requires the `can_request_monitor_events` capability. Since JDWP
    /// version 1.6.
    MonitorWaited(
        /// Request that generated the event
        RequestID,
        /// Thread which waited
        ThreadID,
        /// Monitor object reference
        TaggedObjectID,
        /// Location at which the wait occurred
        Location,
        /// True if timed out
        bool,
    ),
    /// Notification of initialization of a target VM, received before the
    /// main thread is started and before any application code has
    /// executed.
    ///
    /// Always generated by the target VM, even if not explicitly
    /// requested (then with a zero request id).
    VmStart(
        /// Request that generated the event
        RequestID,
        /// Initial thread
        ThreadID,
    ),
    /// Notification of VM termination; the last event sent.
    VmDeath(
        /// Request that generated the event
        RequestID,
    ),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        use Event::*;
        match self {
            SingleStep(..) => EventKind::SingleStep,
            Breakpoint(..) => EventKind::Breakpoint,
            Exception(..) => EventKind::Exception,
            ThreadStart(..) => EventKind::ThreadStart,
            ThreadDeath(..) => EventKind::ThreadDeath,
            ClassPrepare(..) => EventKind::ClassPrepare,
            ClassUnload(..) => EventKind::ClassUnload,
            FieldAccess(..) => EventKind::FieldAccess,
            FieldModification(..) => EventKind::FieldModification,
            MethodEntry(..) => EventKind::MethodEntry,
            MethodExit(..) => EventKind::MethodExit,
            MethodExitWithReturnValue(..) => EventKind::MethodExitWithReturnValue,
            MonitorContendedEnter(..) => EventKind::MonitorContendedEnter,
            MonitorContendedEntered(..) => EventKind::MonitorContendedEntered,
            MonitorWait(..) => EventKind::MonitorWait,
            MonitorWaited(..) => EventKind::MonitorWaited,
            VmStart(..) => EventKind::VmStart,
            VmDeath(..) => EventKind::VmDeath,
        }
    }
}

// hand-rolled so that event kinds without a composite body (FramePop,
// UserDefined, ...) fail the same way as unknown bytes
impl JdwpReadable for Event {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        use JdwpReadable as R;

        let raw = u8::read(read)?;
        let event = match EventKind::from(raw) {
            Some(EventKind::SingleStep) => {
                Event::SingleStep(R::read(read)?, R::read(read)?, R::read(read)?)
            }
            Some(EventKind::Breakpoint) => {
                Event::Breakpoint(R::read(read)?, R::read(read)?, R::read(read)?)
            }
            Some(EventKind::Exception) => Event::Exception(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::ThreadStart) => Event::ThreadStart(R::read(read)?, R::read(read)?),
            Some(EventKind::ThreadDeath) => Event::ThreadDeath(R::read(read)?, R::read(read)?),
            Some(EventKind::ClassPrepare) => Event::ClassPrepare(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::ClassUnload) => Event::ClassUnload(R::read(read)?, R::read(read)?),
            Some(EventKind::FieldAccess) => Event::FieldAccess(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::FieldModification) => Event::FieldModification(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::MethodEntry) => {
                Event::MethodEntry(R::read(read)?, R::read(read)?, R::read(read)?)
            }
            Some(EventKind::MethodExit) => {
                Event::MethodExit(R::read(read)?, R::read(read)?, R::read(read)?)
            }
            Some(EventKind::MethodExitWithReturnValue) => Event::MethodExitWithReturnValue(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::MonitorContendedEnter) => Event::MonitorContendedEnter(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::MonitorContendedEntered) => Event::MonitorContendedEntered(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::MonitorWait) => Event::MonitorWait(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::MonitorWaited) => Event::MonitorWaited(
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
                R::read(read)?,
            ),
            Some(EventKind::VmStart) => Event::VmStart(R::read(read)?, R::read(read)?),
            Some(EventKind::VmDeath) => Event::VmDeath(R::read(read)?),
            _ => return Err(CodecError::InvalidEventType(raw)),
        };
        Ok(event)
    }
}

/// Several events may occur at a given time in the target VM, e.g. two
/// breakpoint requests for the same location, and are then delivered
/// together; for uniformity events are always delivered in a composite,
/// even alone.
///
/// The VM Start and VM Death events are generated automatically, without a
/// corresponding [Set](super::event_request::Set) request; requesting them
/// anyway yields additional events with real request ids. The
/// automatically generated VM Death event has suspend policy
/// [SuspendPolicy::None].
#[jdwp_command((), 64, 100)]
#[derive(Debug, Clone, PartialEq, JdwpReadable)]
pub struct Composite {
    /// Which threads were suspended by this composite event
    pub suspend_policy: SuspendPolicy,
    /// Events in the set
    pub events: Vec<Event>,
}
