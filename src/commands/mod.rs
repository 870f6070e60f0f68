//! The command catalog: one module per JDWP command set, each command a
//! thin data struct wired to its reply type by `#[jdwp_command]`.

use jdwp_codec_macros::jdwp_command;

use crate::packet::CommandId;

pub mod array_reference;
pub mod array_type;
pub mod class_loader_reference;
pub mod class_object_reference;
pub mod class_type;
pub mod event;
pub mod event_request;
pub mod interface_type;
pub mod method;
pub mod object_reference;
pub mod reference_type;
pub mod stack_frame;
pub mod string_reference;
pub mod thread_group_reference;
pub mod thread_reference;
pub mod virtual_machine;

pub mod field {
    // no commands defined in this set
}

/// A JDWP command: its wire id and the shape of its reply.
///
/// Acknowledgement-only commands use `Output = ()`, which decodes from an
/// empty reply body and nothing else. The composite event pseudo-command
/// is read-only, so encodability is asked for at the encoding call site
/// rather than here.
pub trait Command {
    const ID: CommandId;

    type Output;
}
