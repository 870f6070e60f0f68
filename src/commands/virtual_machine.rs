//! VirtualMachine command set (1)

use std::fmt::Debug;

use crate::{
    codec::{JdwpReadable, JdwpWritable},
    enums::ClassStatus,
    types::{
        IdSizes, ObjectID, ReferenceTypeID, StringID, TaggedReferenceTypeID, ThreadGroupID,
        ThreadID,
    },
};

use super::jdwp_command;

/// Returns the JDWP version implemented by the target VM.
///
/// The version string format is implementation dependent.
#[jdwp_command(1, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Version;

#[derive(Debug, JdwpReadable)]
pub struct VersionReply {
    /// Text information on the VM version
    pub description: String,
    /// Major JDWP Version number
    pub version_major: u32,
    /// Minor JDWP Version number
    pub version_minor: u32,
    /// Target VM JRE version, as in the java.version property
    pub vm_version: String,
    /// Target VM name, as in the java.vm.name property
    pub vm_name: String,
}

/// Returns reference types for all loaded classes matching the given
/// signature.
///
/// Multiple types are returned when several class loaders have loaded a
/// class of the same name; the search never loads new classes.
#[jdwp_command(Vec<(TaggedReferenceTypeID, ClassStatus)>, 1, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClassesBySignature {
    /// JNI signature of the class to find (for example, "Ljava/lang/String;")
    signature: String,
}

/// Returns reference types for all classes currently loaded by the target
/// VM.
#[jdwp_command(Vec<Class>, 1, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct AllClasses;

#[derive(Debug, JdwpReadable)]
pub struct Class {
    /// Matching loaded reference type
    pub type_id: TaggedReferenceTypeID,
    /// The JNI signature of the loaded reference type
    pub signature: String,
    /// The current class status
    pub status: ClassStatus,
}

/// Returns all threads currently running in the target VM.
///
/// Includes all native threads attached through JNI and system threads;
/// threads that have not yet started or have finished are not in the list.
#[jdwp_command(Vec<ThreadID>, 1, 4)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct AllThreads;

/// Returns all thread groups that do not have a parent, the roots of the
/// thread group tree.
#[jdwp_command(Vec<ThreadGroupID>, 1, 5)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct TopLevelThreadGroups;

/// Invalidates this virtual machine mirror.
///
/// All event requests are cancelled, suspended threads are resumed as many
/// times as necessary for them to run, and garbage collection is
/// re-enabled everywhere it was disabled. Ids originating in this session
/// become invalid.
#[jdwp_command((), 1, 6)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Dispose;

/// Returns the sizes of variably-sized data types in the target VM.
///
/// Must be the first identifier-relevant command of a session; its reply
/// parameterizes every identifier codec afterwards.
#[jdwp_command(IdSizes, 1, 7)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct IDSizes;

/// Suspends the execution of the application running in the target VM.
///
/// Suspensions are counted: a thread runs again only after as many resumes
/// as it was suspended.
#[jdwp_command((), 1, 8)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Suspend;

/// Resumes execution of the application after the suspend command or an
/// event has stopped it.
#[jdwp_command((), 1, 9)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Resume;

/// Terminates the target VM with the given exit code.
///
/// Threads are terminated abruptly: no thread death exceptions, no finally
/// blocks.
#[jdwp_command((), 1, 10)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Exit {
    exit_code: i32,
}

/// Creates a new string object in the target VM and returns its id.
#[jdwp_command(StringID, 1, 11)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct CreateString {
    /// UTF-8 characters to use in the created string
    string: String,
}

/// Retrieve this VM's capabilities.
///
/// Commands associated with an absent capability return the
/// `NotImplemented` error.
#[jdwp_command(1, 12)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Capabilities;

#[derive(Debug, JdwpReadable)]
pub struct CapabilitiesReply {
    /// Can the VM watch field modification, and therefore can it send the
    /// Modification Watchpoint Event?
    pub can_watch_field_modification: bool,
    /// Can the VM watch field access, and therefore can it send the
    /// Access Watchpoint Event?
    pub can_watch_field_access: bool,
    /// Can the VM get the bytecodes of a given method?
    pub can_get_bytecodes: bool,
    /// Can the VM determine whether a field or method is synthetic?
    pub can_get_synthetic_attribute: bool,
    /// Can the VM get the owned monitors information for a thread?
    pub can_get_owned_monitor_info: bool,
    /// Can the VM get the current contended monitor of a thread?
    pub can_get_current_contended_monitor: bool,
    /// Can the VM get the monitor information for a given object?
    pub can_get_monitor_info: bool,
}

/// Retrieve the classpath and bootclasspath of the target VM.
///
/// Either list is empty when the corresponding path is not defined.
#[jdwp_command(1, 13)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClassPaths;

#[derive(Debug, JdwpReadable)]
pub struct ClassPathsReply {
    /// Base directory used to resolve relative paths in either of the
    /// following lists.
    pub base_dir: String,
    /// Components of the classpath
    pub classpaths: Vec<String>,
    /// Components of the bootclasspath
    pub bootclasspaths: Vec<String>,
}

/// Releases a list of object IDs.
///
/// For each object, the back-end's reference count is decremented by the
/// given amount and the id is freed once it reaches zero; the sender
/// promises not to reference a freed id again. Most useful to shed
/// back-end load after retrieving very many objects.
#[jdwp_command((), 1, 14)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct DisposeObjects<'a> {
    requests: &'a [(ObjectID, u32)],
}

/// Tells the target VM to stop sending events.
///
/// Events are not discarded, they are held until a subsequent
/// [ReleaseEvents]; command replies are never held. Already-held events
/// make this a no-op.
#[jdwp_command((), 1, 15)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct HoldEvents;

/// Tells the target VM to continue sending events, undoing [HoldEvents].
#[jdwp_command((), 1, 16)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ReleaseEvents;

/// Retrieve all of this VM's capabilities, including the ones added after
/// JDWP 1.4.
#[jdwp_command(1, 17)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct CapabilitiesNew;

#[derive(JdwpReadable)]
pub struct CapabilitiesNewReply {
    /// The prefix of [CapabilitiesNew] is identical to that of old
    /// [Capabilities]
    pub capabilities: CapabilitiesReply,
    /// Can the VM redefine classes?
    pub can_redefine_classes: bool,
    /// Can the VM add methods when redefining classes?
    pub can_add_method: bool,
    /// Can the VM redefine classes in arbitrary ways?
    pub can_unrestrictedly_redefine_classes: bool,
    /// Can the VM pop stack frames?
    pub can_pop_frames: bool,
    /// Can the VM filter events by specific object?
    pub can_use_instance_filters: bool,
    /// Can the VM get the source debug extension?
    pub can_get_source_debug_extension: bool,
    /// Can the VM request VM death events?
    pub can_request_vmdeath_event: bool,
    /// Can the VM set a default stratum?
    pub can_set_default_stratum: bool,
    /// Can the VM return instances, counts of instances of classes and
    /// referring objects?
    pub can_get_instance_info: bool,
    /// Can the VM request monitor events?
    pub can_request_monitor_events: bool,
    /// Can the VM get monitors with frame depth info?
    pub can_get_monitor_frame_info: bool,
    /// Can the VM filter class prepare events by source name?
    pub can_use_source_name_filters: bool,
    /// Can the VM return the constant pool information?
    pub can_get_constant_pool: bool,
    /// Can the VM force early return from a method?
    pub can_force_early_return: bool,
    /// Reserved for future capability
    _reserved_22: bool,
    /// Reserved for future capability
    _reserved_23: bool,
    /// Reserved for future capability
    _reserved_24: bool,
    /// Reserved for future capability
    _reserved_25: bool,
    /// Reserved for future capability
    _reserved_26: bool,
    /// Reserved for future capability
    _reserved_27: bool,
    /// Reserved for future capability
    _reserved_28: bool,
    /// Reserved for future capability
    _reserved_29: bool,
    /// Reserved for future capability
    _reserved_30: bool,
    /// Reserved for future capability
    _reserved_31: bool,
    /// Reserved for future capability
    _reserved_32: bool,
}

// skip reserved fields from Debug
impl Debug for CapabilitiesNewReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilitiesNewReply")
            .field("capabilities", &self.capabilities)
            .field("can_redefine_classes", &self.can_redefine_classes)
            .field("can_add_method", &self.can_add_method)
            .field(
                "can_unrestrictedly_redefine_classes",
                &self.can_unrestrictedly_redefine_classes,
            )
            .field("can_pop_frames", &self.can_pop_frames)
            .field("can_use_instance_filters", &self.can_use_instance_filters)
            .field(
                "can_get_source_debug_extension",
                &self.can_get_source_debug_extension,
            )
            .field("can_request_vmdeath_event", &self.can_request_vmdeath_event)
            .field("can_set_default_stratum", &self.can_set_default_stratum)
            .field("can_get_instance_info", &self.can_get_instance_info)
            .field(
                "can_request_monitor_events",
                &self.can_request_monitor_events,
            )
            .field(
                "can_get_monitor_frame_info",
                &self.can_get_monitor_frame_info,
            )
            .field(
                "can_use_source_name_filters",
                &self.can_use_source_name_filters,
            )
            .field("can_get_constant_pool", &self.can_get_constant_pool)
            .field("can_force_early_return", &self.can_force_early_return)
            .finish()
    }
}

/// Installs new class definitions.
///
/// Active frames keep running the old bytecodes as obsolete methods, all
/// breakpoints in the redefined classes are cleared, and new invokes use
/// the new definitions.
///
/// Requires the `can_redefine_classes` capability, plus `can_add_method`
/// or `can_unrestrictedly_redefine_classes` for the matching kinds of
/// change.
#[jdwp_command((), 1, 18)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct RedefineClasses<'a> {
    classes: &'a [(ReferenceTypeID, Vec<u8>)],
}

/// Set the default stratum. Requires the `can_set_default_stratum`
/// capability.
#[jdwp_command((), 1, 19)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetDefaultStratum {
    /// default stratum, or empty string to use reference type default.
    stratum_id: String,
}

/// Returns reference types plus generic signatures for all classes
/// currently loaded by the target VM.
///
/// Since JDWP version 1.5.
#[jdwp_command(Vec<GenericClass>, 1, 20)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct AllClassesWithGeneric;

#[derive(Debug, JdwpReadable)]
pub struct GenericClass {
    /// Loaded reference type
    pub type_id: TaggedReferenceTypeID,
    /// The JNI signature of the loaded reference type
    pub signature: String,
    /// The generic signature of the loaded reference type or an empty
    /// string if there is none.
    pub generic_signature: String,
    /// The current class status
    pub status: ClassStatus,
}

/// Returns the number of reachable instances of each reference type in the
/// input list; an invalid (e.g. unloaded) type counts zero.
///
/// Since JDWP version 1.6. Requires the `can_get_instance_info`
/// capability.
#[jdwp_command(Vec<u64>, 1, 21)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct InstanceCounts<'a> {
    /// A list of reference type IDs.
    ref_types: &'a [ReferenceTypeID],
}
