use jdwp_codec::{
    codec::{Buffer, JdwpWritable, JdwpWriter},
    commands::{
        class_type, event_request, object_reference, reference_type, stack_frame,
        thread_group_reference, thread_reference,
        virtual_machine::{self, IDSizes},
        Command,
    },
    enums::{ClassStatus, EventKind, SuspendPolicy, Tag, ThreadStatus, TypeTag},
    error::CodecError,
    packet,
    types::{
        ClassID, FieldID, IdSizes, InvokeMethodReply, JdwpId, MethodID, ObjectID, ReferenceTypeID,
        TaggedObjectID, ThreadID, UntaggedValue, Value,
    },
    JdwpCodec,
};

fn body_of(packet: &Buffer) -> &[u8] {
    &packet.as_slice()[packet::PacketHeader::JDWP_SIZE..]
}

/// Builds a reply body the way a back-end would.
fn reply(write_body: impl FnOnce(&mut JdwpWriter<'_>)) -> Vec<u8> {
    let mut buf = Buffer::new();
    let mut write = JdwpWriter::new(&mut buf, IdSizes::default());
    write_body(&mut write);
    buf.into_vec()
}

#[test]
fn command_ids_match_the_spec_tables() {
    assert_eq!(virtual_machine::Version::ID, packet::CommandId::new(1, 1));
    assert_eq!(virtual_machine::Exit::ID, packet::CommandId::new(1, 10));
    assert_eq!(reference_type::Signature::ID, packet::CommandId::new(2, 1));
    assert_eq!(class_type::InvokeMethod::ID, packet::CommandId::new(3, 3));
    assert_eq!(
        object_reference::ReferenceType::ID,
        packet::CommandId::new(9, 1)
    );
    assert_eq!(event_request::Set::ID, packet::CommandId::new(15, 1));
    assert_eq!(stack_frame::PopFrames::ID, packet::CommandId::new(16, 4));
    assert_eq!(
        jdwp_codec::commands::event::Composite::ID,
        packet::CommandId::new(64, 100)
    );
}

#[test]
fn get_values_body_layout() {
    let codec = JdwpCodec::default();
    let fields = [FieldID::from_raw(0x10), FieldID::from_raw(0x20)];
    let packet = codec.encode(&reference_type::GetValues::new(
        ReferenceTypeID::from_raw(0xAB),
        &fields,
    ));

    let body = body_of(&packet);
    assert_eq!(body.len(), 8 + 4 + 2 * 8);
    assert_eq!(&body[..8], [0, 0, 0, 0, 0, 0, 0, 0xAB]);
    assert_eq!(&body[8..12], [0, 0, 0, 2]);
    assert_eq!(body[19], 0x10);
    assert_eq!(body[27], 0x20);
}

#[test]
fn event_request_set_encodes_ordered_modifiers() {
    let codec = JdwpCodec::default();
    let modifiers = [
        event_request::Modifier::Count(1),
        event_request::Modifier::ThreadOnly(ThreadID::from_raw(0x42)),
    ];
    let packet = codec.encode(&event_request::Set::new(
        EventKind::Breakpoint,
        SuspendPolicy::All,
        &modifiers,
    ));

    assert_eq!(&packet.as_slice()[9..11], [0x0F, 0x01]);

    let body = body_of(&packet);
    let expected = [
        0x02, // event kind: breakpoint
        0x02, // suspend policy: all
        0x00, 0x00, 0x00, 0x02, // two modifiers
        0x01, 0x00, 0x00, 0x00, 0x01, // Count(1)
        0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x42, // ThreadOnly
    ];
    assert_eq!(body, expected);
}

#[test]
fn event_request_modifier_bodies() {
    let codec = JdwpCodec::default();
    let modifiers = [
        event_request::Modifier::ClassMatch("java.*".to_owned()),
        event_request::Modifier::ExceptionOnly {
            exception: None,
            caught: true,
            uncaught: false,
        },
        event_request::Modifier::Step(
            ThreadID::from_raw(1),
            jdwp_codec::enums::StepSize::Line,
            jdwp_codec::enums::StepDepth::Over,
        ),
    ];
    let packet = codec.encode(&event_request::Set::new(
        EventKind::SingleStep,
        SuspendPolicy::EventThread,
        &modifiers,
    ));

    let body = body_of(&packet);
    let mut expected = vec![0x01, 0x01, 0x00, 0x00, 0x00, 0x03];
    expected.extend([0x05, 0x00, 0x00, 0x00, 0x06]); // ClassMatch + length
    expected.extend(*b"java.*");
    expected.extend([0x08]); // ExceptionOnly
    expected.extend([0; 8]); // null exception filter
    expected.extend([0x01, 0x00]); // caught, uncaught
    expected.extend([0x0A]); // Step
    expected.extend([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]); // thread
    expected.extend([0x00, 0x00, 0x00, 0x01]); // size: line
    expected.extend([0x00, 0x00, 0x00, 0x01]); // depth: over
    assert_eq!(body, expected);
}

#[test]
fn event_request_clear_and_clear_all() {
    let codec = JdwpCodec::default();

    let packet = codec.encode(&event_request::Clear::new(
        EventKind::Breakpoint,
        jdwp_codec::types::RequestID::from_raw(7),
    ));
    assert_eq!(body_of(&packet), [0x02, 0x00, 0x00, 0x00, 0x07]);

    let packet = codec.encode(&event_request::ClearAllBreakpoints);
    assert_eq!(packet.len(), 11);
    assert_eq!(&packet.as_slice()[9..11], [0x0F, 0x03]);
}

#[test]
fn untagged_set_values_bodies() {
    let codec = JdwpCodec::default();

    // static field set: field id then untagged value
    let values = [(FieldID::from_raw(5), UntaggedValue(Value::Int(0x0102_0304)))];
    let packet = codec.encode(&class_type::SetValues::new(ClassID::from_raw(1), &values));
    let body = body_of(&packet);
    assert_eq!(body.len(), 8 + 4 + 8 + 4);
    assert_eq!(&body[body.len() - 4..], [0x01, 0x02, 0x03, 0x04]);

    // array element set: untagged floats
    let elements = [
        UntaggedValue(Value::Float(1.0)),
        UntaggedValue(Value::Float(2.0)),
    ];
    let packet = codec.encode(&jdwp_codec::commands::array_reference::SetValues::new(
        jdwp_codec::types::ArrayID::from_raw(3),
        0,
        &elements,
    ));
    // array id + first index + count + two bare floats
    assert_eq!(body_of(&packet).len(), 8 + 4 + 4 + 2 * 4);
}

#[test]
fn stack_frame_get_values_body() {
    let codec = JdwpCodec::default();
    let slots = [(0u32, Tag::Object), (2u32, Tag::Int)];
    let packet = codec.encode(&stack_frame::GetValues::new(
        ThreadID::from_raw(1),
        jdwp_codec::types::FrameID::from_raw(2),
        &slots,
    ));

    let body = body_of(&packet);
    // thread + frame + count + 2 * (slot + tag byte)
    assert_eq!(body.len(), 8 + 8 + 4 + 2 * 5);
    assert_eq!(body[20..25], [0x00, 0x00, 0x00, 0x00, 0x4C]);
    assert_eq!(body[25..30], [0x00, 0x00, 0x00, 0x02, 0x49]);
}

#[test]
fn instance_limit_of_zero_means_all() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&reference_type::Instances::new(
        ReferenceTypeID::from_raw(1),
        reference_type::InstanceLimit::limit(0),
    ));

    // the unlimited request is a zero max-instances word
    assert_eq!(&body_of(&packet)[8..], [0, 0, 0, 0]);
}

#[test]
fn version_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        "mock vm".to_owned().write(w);
        1u32.write(w);
        8u32.write(w);
        "1.8.0".to_owned().write(w);
        "MockVM".to_owned().write(w);
    });

    let version = codec.decode_reply::<virtual_machine::Version>(&body).unwrap();
    assert_eq!(version.description, "mock vm");
    assert_eq!(version.version_major, 1);
    assert_eq!(version.version_minor, 8);
    assert_eq!(version.vm_version, "1.8.0");
    assert_eq!(version.vm_name, "MockVM");
}

#[test]
fn id_sizes_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        for size in [8u32, 8, 8, 8, 4] {
            size.write(w);
        }
    });

    let sizes = codec.decode_reply::<IDSizes>(&body).unwrap();
    assert_eq!(sizes.field_id_size, 8);
    assert_eq!(sizes.frame_id_size, 4);
}

#[test]
fn classes_by_signature_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        1u32.write(w);
        (TypeTag::Class as u8).write(w);
        ReferenceTypeID::from_raw(0x1234).write(w);
        ClassStatus::OK.write(w);
    });

    let classes = codec
        .decode_reply::<virtual_machine::ClassesBySignature>(&body)
        .unwrap();
    assert_eq!(classes.len(), 1);
    let (type_id, status) = classes[0];
    assert_eq!(type_id.raw(), 0x1234);
    assert_eq!(type_id.tag(), TypeTag::Class);
    assert_eq!(status, ClassStatus::OK);
}

#[test]
fn class_paths_reply_lists_are_siblings() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        "/work".to_owned().write(w);
        vec!["a.jar".to_owned(), "b.jar".to_owned()].write(w);
        vec!["rt.jar".to_owned()].write(w);
    });

    let paths = codec
        .decode_reply::<virtual_machine::ClassPaths>(&body)
        .unwrap();
    assert_eq!(paths.base_dir, "/work");
    assert_eq!(paths.classpaths, ["a.jar", "b.jar"]);
    assert_eq!(paths.bootclasspaths, ["rt.jar"]);
}

#[test]
fn thread_status_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        2u32.write(w); // sleeping
        1u32.write(w); // suspended
    });

    let (thread, suspend) = codec
        .decode_reply::<thread_reference::Status>(&body)
        .unwrap();
    assert_eq!(thread, ThreadStatus::Sleeping);
    assert_eq!(suspend, jdwp_codec::enums::SuspendStatus::Suspended);
}

#[test]
fn frames_reply_decodes() {
    let codec = JdwpCodec::default();
    let location = jdwp_codec::types::Location::new(
        jdwp_codec::types::TaggedReferenceTypeID::Class(ClassID::from_raw(1)),
        MethodID::from_raw(2),
        3,
    );
    let body = reply(|w| {
        1u32.write(w);
        jdwp_codec::types::FrameID::from_raw(0x99).write(w);
        location.write(w);
    });

    let frames = codec.decode_reply::<thread_reference::Frames>(&body).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0.raw(), 0x99);
    assert_eq!(frames[0].1, location);
}

#[test]
fn monitor_info_reply_with_no_owner() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        ObjectID::from_raw(0).write(w); // null owner
        0i32.write(w);
        vec![ThreadID::from_raw(5)].write(w);
    });

    let info = codec
        .decode_reply::<object_reference::MonitorInfo>(&body)
        .unwrap();
    assert_eq!(info.owner, None);
    assert_eq!(info.entry_count, 0);
    assert_eq!(info.waiters.len(), 1);
}

#[test]
fn children_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        vec![ThreadID::from_raw(1), ThreadID::from_raw(2)].write(w);
        vec![jdwp_codec::types::ThreadGroupID::from_raw(3)].write(w);
    });

    let children = codec
        .decode_reply::<thread_group_reference::Children>(&body)
        .unwrap();
    assert_eq!(children.child_threads.len(), 2);
    assert_eq!(children.child_groups.len(), 1);
}

#[test]
fn invoke_reply_returns_the_value_when_no_exception() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        Value::Int(41).write(w);
        Option::<TaggedObjectID>::None.write(w);
    });

    let result = codec
        .decode_reply::<class_type::InvokeMethod>(&body)
        .unwrap();
    assert_eq!(result, InvokeMethodReply::Value(Value::Int(41)));
}

#[test]
fn invoke_reply_returns_the_exception_when_thrown() {
    let codec = JdwpCodec::default();
    let thrown = TaggedObjectID::Object(ObjectID::from_raw(0xBAD));
    let body = reply(|w| {
        Value::Void.write(w);
        thrown.write(w);
    });

    let result = codec
        .decode_reply::<object_reference::InvokeMethod>(&body)
        .unwrap();
    assert_eq!(result, InvokeMethodReply::Exception(thrown));
}

#[test]
fn new_instance_reply_rejects_contradictions() {
    let codec = JdwpCodec::default();
    let body = reply(|w| {
        TaggedObjectID::Object(ObjectID::from_raw(1)).write(w);
        TaggedObjectID::Object(ObjectID::from_raw(2)).write(w);
    });

    let result = codec.decode_reply::<class_type::NewInstance>(&body);
    assert!(matches!(result, Err(CodecError::InvalidData(_))));
}

#[test]
fn stack_depth_reads_minus_one_as_unknown() {
    let codec = JdwpCodec::default();
    let monitor = TaggedObjectID::Object(ObjectID::from_raw(9));
    let body = reply(|w| {
        2u32.write(w);
        monitor.write(w);
        (-1i32).write(w);
        monitor.write(w);
        3u32.write(w);
    });

    let monitors = codec
        .decode_reply::<thread_reference::OwnedMonitorsStackDepthInfo>(&body)
        .unwrap();
    assert!(matches!(
        monitors[0].1,
        thread_reference::StackDepth::Unknown
    ));
    assert!(matches!(
        monitors[1].1,
        thread_reference::StackDepth::Depth(3)
    ));
}

#[test]
fn instance_counts_reply_decodes() {
    let codec = JdwpCodec::default();
    let body = reply(|w| vec![3u64, 0].write(w));

    let counts = codec
        .decode_reply::<virtual_machine::InstanceCounts>(&body)
        .unwrap();
    assert_eq!(counts, [3, 0]);
}

#[test]
fn reply_bodies_must_be_fully_consumed() {
    let codec = JdwpCodec::default();
    let mut body = reply(|w| "ok".to_owned().write(w));
    body.extend([1, 2, 3]);

    assert_eq!(
        codec.decode_reply::<reference_type::Signature>(&body),
        Err(CodecError::TrailingData(3))
    );
}

#[test]
fn truncated_reply_bodies_are_insufficient() {
    let codec = JdwpCodec::default();
    let body = reply(|w| 1u32.write(w)); // claims one class, delivers none

    assert_eq!(
        codec
            .decode_reply::<virtual_machine::AllClasses>(&body)
            .unwrap_err(),
        CodecError::InsufficientData
    );
}
