//! EventRequest command set (15)

use crate::{
    codec::{JdwpReadable, JdwpWritable},
    enums::{EventKind, ModifierKind, StepDepth, StepSize, SuspendPolicy},
    types::{FieldID, Location, ObjectID, ReferenceTypeID, RequestID, ThreadID},
};

use super::jdwp_command;

/// A constraint on the events generated by a [Set] request, dispatched on
/// a leading [ModifierKind] byte.
///
/// Modifiers are applied in the order they appear in the request, and only
/// events satisfying all of them are reported; filtering in the VM can cut
/// event traffic to the debugger dramatically.
#[derive(Debug, Clone, PartialEq, JdwpReadable, JdwpWritable)]
#[repr(u8)]
pub enum Modifier {
    /// Limit the requested event to be reported at most once after a
    /// given number of occurrences.
    ///
    /// The event is not reported the first `count - 1` times this filter
    /// is reached; once the count reaches 0, any subsequent filters are
    /// applied and, if none suppress it, the event is reported. Subsequent
    /// events for this request are never reported.
    ///
    /// A count of 1 makes a one-off request. Usable with any event kind.
    Count(
        /// Count before event. One for one-off
        i32,
    ) = ModifierKind::Count as u8,

    /// Conditional on expression
    Conditional {
        /// For the future
        expr_id: i32,
    } = ModifierKind::Conditional as u8,

    /// Restricts reported events to those in the given thread.
    ///
    /// Usable with any event kind except class unload.
    ThreadOnly(
        /// Required thread
        ThreadID,
    ) = ModifierKind::ThreadOnly as u8,

    /// Restricts reported events to the given reference type and its
    /// subtypes: the prepared type for class prepare events, the monitor
    /// object's type for monitor events, the location's type otherwise.
    ///
    /// Usable with any event kind except class unload, thread start and
    /// thread end.
    ClassOnly(
        /// Required class
        ReferenceTypeID,
    ) = ModifierKind::ClassOnly as u8,

    /// Restricts reported events to those for classes whose name matches
    /// the given restricted regular expression: an exact match, or a
    /// pattern beginning or ending with `*`, such as `*.Foo` or `java.*`.
    ///
    /// Usable with any event kind except thread start and thread end.
    ClassMatch(
        /// Required class pattern.
        String,
    ) = ModifierKind::ClassMatch as u8,

    /// The negation of [Modifier::ClassMatch]: restricts reported events
    /// to classes whose name does *not* match the pattern.
    ///
    /// Usable with any event kind except thread start and thread end.
    ClassExclude(
        /// Disallowed class pattern.
        String,
    ) = ModifierKind::ClassExclude as u8,

    /// Restricts reported events to those that occur at the given
    /// location.
    ///
    /// Usable with breakpoint, field access, field modification, step and
    /// exception event kinds.
    LocationOnly(
        /// Required location
        Location,
    ) = ModifierKind::LocationOnly as u8,

    /// Restricts reported exceptions by their class and whether they are
    /// caught or uncaught.
    ///
    /// Usable with exception event kinds only.
    ExceptionOnly {
        /// Exception to report. `None` means report exceptions of all
        /// types; a specific type also reports its subtypes.
        exception: Option<ReferenceTypeID>,
        /// Report caught exceptions
        caught: bool,
        /// Report uncaught exceptions.
        ///
        /// It is not always possible to determine whether an exception is
        /// caught or uncaught at the time it is thrown; see the exception
        /// event's catch location for the caveats.
        uncaught: bool,
    } = ModifierKind::ExceptionOnly as u8,

    /// Restricts reported events to those that occur for a given field.
    ///
    /// Usable with field access and field modification event kinds only.
    FieldOnly(
        /// Type in which field is declared
        ReferenceTypeID,
        /// Required field
        FieldID,
    ) = ModifierKind::FieldOnly as u8,

    /// Restricts reported step events to those which satisfy depth and
    /// size constraints.
    ///
    /// Usable with step event kinds only.
    Step(
        /// Thread in which to step
        ThreadID,
        /// Size of each step
        StepSize,
        /// Relative call stack limit
        StepDepth,
    ) = ModifierKind::Step as u8,

    /// Restricts reported events to those whose active 'this' object is
    /// the given object; match value is the null object for static
    /// methods.
    ///
    /// Usable with any event kind except class prepare, class unload,
    /// thread start, and thread end. Introduced in JDWP version 1.4.
    InstanceOnly(
        /// Required 'this' object
        ObjectID,
    ) = ModifierKind::InstanceOnly as u8,

    /// Restricts reported class prepare events to those for reference
    /// types which have a source name matching the given restricted
    /// regular expression, as determined by the type's
    /// SourceDebugExtension.
    ///
    /// Usable with class prepare events only. Since JDWP version 1.6;
    /// requires the `can_use_source_name_filters` capability.
    SourceNameMatch(
        /// Required source name pattern
        String,
    ) = ModifierKind::SourceNameMatch as u8,
}

/// Set an event request.
///
/// When the event described by this request occurs, an event is sent from
/// the target VM; events that were never requested are not sent, with the
/// exception of the automatically generated VM Start and VM Death events
/// (see [Composite](super::event::Composite)).
#[jdwp_command(RequestID, 15, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Set<'a> {
    /// Event kind to request. Some events may require a capability in
    /// order to be requested.
    event_kind: EventKind,
    /// What threads are suspended when this event occurs?
    ///
    /// The order of events and command replies accurately reflects the
    /// order in which threads are suspended and resumed.
    suspend_policy: SuspendPolicy,
    /// Constraints used to control the number of generated events, applied
    /// in order; an empty list means an unfiltered request.
    modifiers: &'a [Modifier],
}

/// Clear an event request.
///
/// Only the request matching both the event kind and the request id is
/// cleared; a missing match is a no-op, not an error. Automatically
/// generated events cannot be cleared.
#[jdwp_command((), 15, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Clear {
    /// Event kind to clear
    event_kind: EventKind,
    /// ID of request to clear
    request_id: RequestID,
}

/// Removes all set breakpoints, a no-op if there are no breakpoints set.
#[jdwp_command((), 15, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClearAllBreakpoints;
