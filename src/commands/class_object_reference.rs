//! ClassObjectReference command set (17)

use crate::{codec::JdwpWritable, types::{ClassObjectID, TaggedReferenceTypeID}};

use super::jdwp_command;

/// Returns the reference type reflected by this class object.
#[jdwp_command(TaggedReferenceTypeID, 17, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ReflectedType {
    /// The class object
    class_object_id: ClassObjectID,
}
