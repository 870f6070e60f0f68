//! Wire-level enums: every single/double-byte discriminant the protocol
//! defines, plus the bit-flag sets. The unknown-discriminant error each
//! enum maps to is part of its contract, so the macro takes it explicitly.

use std::fmt::{Display, Formatter};

use bitflags::bitflags;

use crate::{
    codec::{JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    error::CodecError,
    types::IdSizes,
};

macro_rules! wire_enum {
    ($e:ident: $repr:ident, err = $err:expr, $($name:ident = $id:literal | $string:literal),* $(,)?) => {
        #[repr($repr)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $e {
            $(
                #[doc = $string]
                $name = $id,
            )*
        }

        impl $e {
            pub fn from(n: $repr) -> Option<Self> {
                match n {
                    $($id => Some($e::$name),)*
                    _ => None
                }
            }
        }

        impl JdwpReadable for $e {
            fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
                let raw = $repr::read(read)?;
                Self::from(raw).ok_or_else(|| ($err)(raw))
            }
        }

        impl JdwpWritable for $e {
            fn write(&self, write: &mut JdwpWriter<'_>) {
                (*self as $repr).write(write)
            }
        }
    };
    ($e:ident: $repr:ident, err = $err:expr, $($name:ident = $id:literal),* $(,)?) => {
        wire_enum!($e: $repr, err = $err, $($name = $id | "",)*);
    };
    ($e:ident: $repr:ident | Display, err = $err:expr, $($name:ident = $id:literal | $string:literal),* $(,)?) => {
        wire_enum!($e: $repr, err = $err, $($name = $id | $string,)*);

        impl $e {
            /// The human-readable text for this code.
            pub fn message(&self) -> &'static str {
                match self {
                    $($e::$name => $string,)*
                }
            }
        }

        impl Display for $e {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.message())
            }
        }
    };
}

wire_enum! {
    ErrorCode: u16 | Display,
    err = |_| CodecError::InvalidData("error code"),

    None = 0 | "No error has occurred",
    InvalidThread = 10 | "Passed thread is null, is not a valid thread or has exited",
    InvalidThreadGroup = 11 | "Thread group invalid",
    InvalidPriority = 12 | "Invalid priority",
    ThreadNotSuspended = 13 | "If the specified thread has not been suspended by an event",
    ThreadSuspended = 14 | "Thread already suspended",
    ThreadNotAlive = 15 | "Thread has not been started or is now dead",
    InvalidObject = 20 | "If this reference type has been unloaded and garbage collected",
    InvalidClass = 21 | "Invalid class",
    ClassNotPrepared = 22 | "Class has been loaded but not yet prepared",
    InvalidMethodid = 23 | "Invalid method",
    InvalidLocation = 24 | "Invalid location",
    InvalidFieldid = 25 | "Invalid field",
    InvalidFrameid = 30 | "Invalid jframeID",
    NoMoreFrames = 31 | "There are no more Java or JNI frames on the call stack",
    OpaqueFrame = 32 | "Information about the frame is not available",
    NotCurrentFrame = 33 | "Operation can only be performed on current frame",
    TypeMismatch = 34 | "The variable is not an appropriate type for the function used",
    InvalidSlot = 35 | "Invalid slot",
    Duplicate = 40 | "Item already set",
    NotFound = 41 | "Desired element not found",
    InvalidMonitor = 50 | "Invalid monitor",
    NotMonitorOwner = 51 | "This thread doesn't own the monitor",
    Interrupt = 52 | "The call has been interrupted before completion",
    InvalidClassFormat = 60 | "The virtual machine attempted to read a class file and determined that the file is malformed or otherwise cannot be interpreted as a class file",
    CircularClassDefinition = 61 | "A circularity has been detected while initializing a class",
    FailsVerification = 62 | "The verifier detected that a class file, though well formed, contained some sort of internal inconsistency or security problem",
    AddMethodNotImplemented = 63 | "Adding methods has not been implemented",
    SchemaChangeNotImplemented = 64 | "Schema change has not been implemented",
    InvalidTypestate = 65 | "The state of the thread has been modified, and is now inconsistent",
    HierarchyChangeNotImplemented = 66 | "A direct superclass is different for the new class version, or the set of directly implemented interfaces is different and canUnrestrictedlyRedefineClasses is false",
    DeleteMethodNotImplemented = 67 | "The new class version does not declare a method declared in the old class version and canUnrestrictedlyRedefineClasses is false",
    UnsupportedVersion = 68 | "A class file has a version number not supported by this VM",
    NamesDontMatch = 69 | "The class name defined in the new class file is different from the name in the old class object",
    ClassModifiersChangeNotImplemented = 70 | "The new class version has different modifiers and canUnrestrictedlyRedefineClasses is false",
    MethodModifiersChangeNotImplemented = 71 | "A method in the new class version has different modifiers than its counterpart in the old class version and canUnrestrictedlyRedefineClasses is false",
    NotImplemented = 99 | "The functionality is not implemented in this virtual machine",
    NullPointer = 100 | "Invalid pointer",
    AbsentInformation = 101 | "Desired information is not available",
    InvalidEventType = 102 | "The specified event type id is not recognized",
    IllegalArgument = 103 | "Illegal argument",
    OutOfMemory = 110 | "The function needed to allocate memory and no more memory was available for allocation",
    AccessDenied = 111 | "Debugging has not been enabled in this virtual machine. JVMTI cannot be used",
    VmDead = 112 | "The virtual machine is not running",
    Internal = 113 | "An unexpected internal error has occurred",
    UnattachedThread = 115 | "The thread being used to call this function is not attached to the virtual machine. Calls must be made from attached threads",
    InvalidTag = 500 | "object type id or class tag",
    AlreadyInvoking = 502 | "Previous invoke not complete",
    InvalidIndex = 503 | "Index is invalid",
    InvalidLength = 504 | "The length is invalid",
    InvalidString = 506 | "The string is invalid",
    InvalidClassLoader = 507 | "The class loader is invalid",
    InvalidArray = 508 | "The array is invalid",
    TransportLoad = 509 | "Unable to load the transport",
    TransportInit = 510 | "Unable to initialize the transport",
    NativeMethod = 511 | "NATIVE_METHOD",
    InvalidCount = 512 | "The count is invalid",
}

impl ErrorCode {
    /// The diagnostic text for a raw reply-header error code.
    pub fn text(code: u16) -> &'static str {
        match Self::from(code) {
            Some(code) => code.message(),
            Option::None => "Unknown error",
        }
    }
}

wire_enum! {
    EventKind: u8,
    err = CodecError::InvalidEventType,

    SingleStep = 1,
    Breakpoint = 2,
    FramePop = 3,
    Exception = 4,
    UserDefined = 5,
    ThreadStart = 6,
    ThreadDeath = 7,
    ClassPrepare = 8,
    ClassUnload = 9,
    ClassLoad = 10,
    FieldAccess = 20,
    FieldModification = 21,
    ExceptionCatch = 30,
    MethodEntry = 40,
    MethodExit = 41,
    MethodExitWithReturnValue = 42,
    MonitorContendedEnter = 43,
    MonitorContendedEntered = 44,
    MonitorWait = 45,
    MonitorWaited = 46,
    VmStart = 90,
    VmDeath = 99,
    VmDisconnected = 100,
}

wire_enum! {
    ThreadStatus: u32,
    err = |_| CodecError::InvalidData("thread status"),

    Zombie = 0,
    Running = 1,
    Sleeping = 2,
    Monitor = 3,
    Wait = 4,
}

wire_enum! {
    SuspendStatus: u32,
    err = |_| CodecError::InvalidData("suspend status"),

    NotSuspended = 0,
    Suspended = 1,
}

wire_enum! {
    TypeTag: u8,
    err = |_| CodecError::InvalidData("type tag"),

    Class = 1 | "ReferenceType is a class",
    Interface = 2 | "ReferenceType is an interface",
    Array = 3 | "ReferenceType is an array",
}

wire_enum! {
    Tag: u8,
    err = CodecError::InvalidTag,

    Array = 91 | "'[' - an array object ([ObjectID](crate::types::ObjectID) size).",
    Byte = 66 | "'B' - a byte value (1 byte).",
    Char = 67 | "'C' - a character value (2 bytes).",
    Object = 76 | "'L' - an object ([ObjectID](crate::types::ObjectID) size).",
    Float = 70 | "'F' - a float value (4 bytes).",
    Double = 68 | "'D' - a double value (8 bytes).",
    Int = 73 | "'I' - an int value (4 bytes).",
    Long = 74 | "'J' - a long value (8 bytes).",
    Short = 83 | "'S' - a short value (2 bytes).",
    Void = 86 | "'V' - a void value (no bytes).",
    Boolean = 90 | "'Z' - a boolean value (1 byte).",
    String = 115 | "'s' - a String object ([ObjectID](crate::types::ObjectID) size).",
    Thread = 116 | "'t' - a Thread object ([ObjectID](crate::types::ObjectID) size).",
    ThreadGroup = 103 | "'g' - a ThreadGroup object ([ObjectID](crate::types::ObjectID) size).",
    ClassLoader = 108 | "'l' - a ClassLoader object ([ObjectID](crate::types::ObjectID) size).",
    ClassObject = 99 | "'c' - a class object object ([ObjectID](crate::types::ObjectID) size).",
}

impl Tag {
    /// True for the tags whose payload is an inline primitive rather than
    /// an object id.
    pub fn is_primitive(self) -> bool {
        use Tag::*;
        matches!(
            self,
            Byte | Char | Float | Double | Int | Long | Short | Void | Boolean
        )
    }

    /// The payload width in bytes of a value with this tag, excluding the
    /// tag byte itself. Reference tags all take `object_id_size`.
    pub fn payload_size(self, id_sizes: &IdSizes) -> usize {
        use Tag::*;
        match self {
            Void => 0,
            Byte | Boolean => 1,
            Char | Short => 2,
            Float | Int => 4,
            Double | Long => 8,
            Object | Array | String | Thread | ThreadGroup | ClassLoader | ClassObject => {
                id_sizes.object_id_size as usize
            }
        }
    }
}

wire_enum! {
    StepDepth: u32,
    err = |_| CodecError::InvalidData("step depth"),

    Into = 0 | "Step into any method calls that occur before the end of the step",
    Over = 1 | "Step over any method calls that occur before the end of the step",
    Out = 2 | "Step out of the current method",
}

wire_enum! {
    StepSize: u32,
    err = |_| CodecError::InvalidData("step size"),

    Min = 0 | "Step by the minimum possible amount (often a byte code instruction)",
    Line = 1 | "Step to the next source line unless there is no line number information in which case a MIN step is done instead",
}

wire_enum! {
    SuspendPolicy: u8,
    err = |_| CodecError::InvalidData("suspend policy"),

    None = 0 | "Suspend no threads when this event is encountered",
    EventThread = 1 | "Suspend the event thread when this event is encountered",
    All = 2 | "Suspend all threads when this event is encountered",
}

wire_enum! {
    ModifierKind: u8,
    err = |_| CodecError::InvalidData("modifier kind"),

    Count = 1 | "Limit the requested event to be reported at most once after a given number of occurrences",
    Conditional = 2 | "Conditional on expression",
    ThreadOnly = 3 | "Restricts reported events to those in the given thread",
    ClassOnly = 4 | "Restricts reported events to a given class and its subtypes",
    ClassMatch = 5 | "Restricts reported events to classes whose name matches the given restricted regular expression",
    ClassExclude = 6 | "Restricts reported events to classes whose name does not match the given restricted regular expression",
    LocationOnly = 7 | "Restricts reported events to those that occur at the given location",
    ExceptionOnly = 8 | "Restricts reported exceptions by their class and whether they are caught or uncaught",
    FieldOnly = 9 | "Restricts reported events to those that occur for a given field",
    Step = 10 | "Restricts reported step events to those which satisfy depth and size constraints",
    InstanceOnly = 11 | "Restricts reported events to those whose active 'this' object is the given object",
    SourceNameMatch = 12 | "Restricts reported class prepare events by the type's source name",
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClassStatus: u32 {
        const VERIFIED = 1;
        const PREPARED = 2;
        const INITIALIZED = 4;
        const ERROR = 8;

        const OK = Self::VERIFIED.bits() | Self::PREPARED.bits() | Self::INITIALIZED.bits();
    }
}

impl JdwpReadable for ClassStatus {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        Self::from_bits(u32::read(read)?).ok_or(CodecError::InvalidData("class status"))
    }
}

impl JdwpWritable for ClassStatus {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        self.bits().write(write)
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InvokeOptions: u32 {
        /// otherwise, all threads started
        const SINGLE_THREADED = 0x01;
        /// otherwise, normal virtual invoke (instance methods only)
        const NONVIRTUAL = 0x02;
    }
}

impl JdwpReadable for InvokeOptions {
    fn read(read: &mut JdwpReader<'_>) -> Result<Self, CodecError> {
        Self::from_bits(u32::read(read)?).ok_or(CodecError::InvalidData("invoke options"))
    }
}

impl JdwpWritable for InvokeOptions {
    fn write(&self, write: &mut JdwpWriter<'_>) {
        self.bits().write(write)
    }
}
