//! ReferenceType command set (2)

use std::{fmt, fmt::Debug, num::NonZeroU32};

use crate::{
    codec::{JdwpReadable, JdwpWritable, JdwpWriter},
    enums::ClassStatus,
    jvm::{FieldModifiers, MethodModifiers, TypeModifiers},
    types::{
        ClassLoaderID, ClassObjectID, FieldID, InterfaceID, MethodID, ReferenceTypeID,
        TaggedObjectID, TaggedReferenceTypeID, Value,
    },
};

use super::jdwp_command;

/// Returns the JNI signature of a reference type, e.g.
/// "Ljava/lang/String;".
///
/// For primitive classes the returned signature is that of the
/// corresponding primitive type, e.g. "I" for `java.lang.Integer.TYPE`.
#[jdwp_command(String, 2, 1)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Signature {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the instance of `java.lang.ClassLoader` which loaded a given
/// reference type; `None` for the system class loader.
#[jdwp_command(Option<ClassLoaderID>, 2, 2)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClassLoader {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the modifiers (also known as access flags) for a reference
/// type; undefined for arrays and primitive classes.
#[jdwp_command(TypeModifiers, 2, 3)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Modifiers {
    ref_type: ReferenceTypeID,
}

/// Returns information for each field in a reference type, in class file
/// order.
///
/// Inherited fields are not included; synthetic fields are.
#[jdwp_command(Vec<Field>, 2, 4)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Fields {
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct Field {
    /// Field ID
    pub field_id: FieldID,
    /// Name of field
    pub name: String,
    /// JNI Signature of field.
    pub signature: String,
    /// The modifier bit flags (also known as access flags); the
    /// 0xf0000000 bit marks the field synthetic when that capability is
    /// available.
    pub mod_bits: FieldModifiers,
}

/// Returns information for each method in a reference type, in class file
/// order.
///
/// Inherited methods are not included; constructors, static initializers
/// and synthetic methods are.
#[jdwp_command(Vec<Method>, 2, 5)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Methods {
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct Method {
    /// Method ID
    pub method_id: MethodID,
    /// Name of method
    pub name: String,
    /// JNI Signature of method.
    pub signature: String,
    /// The modifier bit flags (also known as access flags); the
    /// 0xf0000000 bit marks the method synthetic when that capability is
    /// available.
    pub mod_bits: MethodModifiers,
}

/// Returns the value of one or more static fields of the reference type.
///
/// Each field must be a member of the type or one of its supertypes;
/// access control is not enforced.
#[jdwp_command(Vec<Value>, 2, 6)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct GetValues<'a> {
    /// The reference type ID
    ref_type: ReferenceTypeID,
    /// Field IDs of fields to get
    fields: &'a [FieldID],
}

/// Returns the source file name in which a reference type was declared.
#[jdwp_command(String, 2, 7)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SourceFile {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the classes and interfaces directly nested within this type;
/// types further nested within those are not included.
#[jdwp_command(Vec<TaggedReferenceTypeID>, 2, 8)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct NestedTypes {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the current initialization status of the reference type.
///
/// Undefined for array types and primitive classes.
#[jdwp_command(ClassStatus, 2, 9)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Status {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the interfaces declared as implemented by this class;
/// indirectly implemented ones are not included.
#[jdwp_command(Vec<InterfaceID>, 2, 10)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Interfaces {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the class object corresponding to this type.
#[jdwp_command(ClassObjectID, 2, 11)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClassObject {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the value of the SourceDebugExtension attribute.
///
/// Since JDWP version 1.4. Requires the `can_get_source_debug_extension`
/// capability.
#[jdwp_command(String, 2, 12)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SourceDebugExtension {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

/// Returns the JNI signature of a reference type along with the generic
/// signature if there is one.
///
/// Since JDWP version 1.5.
#[jdwp_command(2, 13)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct SignatureWithGeneric {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct SignatureWithGenericReply {
    /// The JNI signature for the reference type.
    pub signature: String,
    /// The generic signature for the reference type or an empty string if
    /// there is none.
    pub generic_signature: String,
}

/// Returns information, including the generic signature if any, for each
/// field in a reference type, in class file order.
///
/// Since JDWP version 1.5.
#[jdwp_command(Vec<FieldWithGeneric>, 2, 14)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct FieldsWithGeneric {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct FieldWithGeneric {
    /// The field ID
    pub field_id: FieldID,
    /// The name of the field
    pub name: String,
    /// The JNI signature of the field
    pub signature: String,
    /// The generic signature of the field, or an empty string if there is
    /// none
    pub generic_signature: String,
    /// The modifier bit flags (also known as access flags)
    pub mod_bits: FieldModifiers,
}

/// Returns information, including the generic signature if any, for each
/// method in a reference type, in class file order.
///
/// Since JDWP version 1.5.
#[jdwp_command(Vec<MethodWithGeneric>, 2, 15)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct MethodsWithGeneric {
    /// The reference type ID
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct MethodWithGeneric {
    /// The method ID
    pub method_id: MethodID,
    /// The name of the method
    pub name: String,
    /// The JNI signature of the method
    pub signature: String,
    /// The generic signature of the method, or an empty string if there is
    /// none
    pub generic_signature: String,
    /// The modifier bit flags (also known as access flags)
    pub mod_bits: MethodModifiers,
}

/// Returns instances of this reference type that are reachable for the
/// purposes of garbage collection.
///
/// Since JDWP version 1.6. Requires the `can_get_instance_info`
/// capability.
#[jdwp_command(Vec<TaggedObjectID>, 2, 16)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct Instances {
    /// The reference type ID
    ref_type: ReferenceTypeID,
    /// Maximum number of instances to return.
    max_instances: InstanceLimit,
}

#[derive(Debug, Clone)]
pub enum InstanceLimit {
    All,
    Limit(NonZeroU32),
}

impl InstanceLimit {
    /// A shorthand for `InstanceLimit::Limit`; zero means no limit, same
    /// as on the wire.
    pub fn limit(limit: u32) -> Self {
        match NonZeroU32::new(limit) {
            Some(limit) => InstanceLimit::Limit(limit),
            None => InstanceLimit::All,
        }
    }
}

impl JdwpWritable for InstanceLimit {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        match self {
            InstanceLimit::All => 0u32.write(write),
            InstanceLimit::Limit(limit) => limit.get().write(write),
        }
    }
}

/// Returns the class file version numbers of the reference type.
///
/// Since JDWP version 1.6.
#[jdwp_command(2, 17)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ClassFileVersion {
    /// The class
    ref_type: ReferenceTypeID,
}

#[derive(Debug, JdwpReadable)]
pub struct ClassFileVersionReply {
    /// Major version number
    pub major_version: u32,
    /// Minor version number
    pub minor_version: u32,
}

/// Return the raw bytes of the constant pool in the class file format.
///
/// Since JDWP version 1.6. Requires the `can_get_constant_pool`
/// capability.
#[jdwp_command(2, 18)]
#[derive(Debug, Clone, JdwpWritable)]
pub struct ConstantPool {
    /// The class
    ref_type: ReferenceTypeID,
}

#[derive(JdwpReadable)]
pub struct ConstantPoolReply {
    /// Total number of constant pool entries plus one.
    pub count: u32,
    /// Raw bytes of the constant pool
    pub bytes: Vec<u8>,
}

// special debug so that trace logs dont take a quadrillion lines
impl Debug for ConstantPoolReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_bytes = self
            .bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();

        struct Unquoted(String);

        impl Debug for Unquoted {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        f.debug_struct("ConstantPoolReply")
            .field("count", &self.count)
            .field("bytes", &Unquoted(hex_bytes))
            .finish()
    }
}
