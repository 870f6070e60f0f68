//! ClassLoaderReference command set (14)

use crate::{codec::JdwpWritable, types::{ClassLoaderID, TaggedReferenceTypeID}};

use super::jdwp_command;

/// Returns a list of all classes which this class loader has been
/// requested to load.
///
/// This loader is the initiating class loader for each class in the list:
/// types it defined itself plus types whose loading it delegated. A
/// particular type name occurs at most once, and no ordering is
/// guaranteed.
#[jdwp_command(Vec<TaggedReferenceTypeID>, 14, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct VisibleClasses {
    /// The class loader object ID
    class_loader_id: ClassLoaderID,
}
