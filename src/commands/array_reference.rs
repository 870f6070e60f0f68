//! ArrayReference command set (13)

use crate::{
    codec::JdwpWritable,
    types::{ArrayID, ArrayRegion, UntaggedValue},
};

use super::jdwp_command;

/// Returns the number of components in a given array.
#[jdwp_command(u32, 13, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Length {
    /// The array object ID
    array_id: ArrayID,
}

/// Returns a range of array components, which must be within the bounds
/// of the array.
#[jdwp_command(ArrayRegion, 13, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct GetValues {
    /// The array object ID
    array_id: ArrayID,
    /// The first index to retrieve
    first_index: u32,
    /// The number of components to retrieve
    length: u32,
}

/// Sets a range of array components, which must be within the bounds of
/// the array.
///
/// The values are untagged: the array component type provides the tag.
#[jdwp_command((), 13, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SetValues<'a> {
    /// The array object ID
    array_id: ArrayID,
    /// The first index to set
    first_index: u32,
    /// Values to set
    values: &'a [UntaggedValue],
}
