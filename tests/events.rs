use jdwp_codec::{
    codec::{Buffer, JdwpWritable, JdwpWriter},
    commands::event::Event,
    enums::{ClassStatus, EventKind, SuspendPolicy, Tag},
    error::CodecError,
    types::{
        ClassID, FieldID, IdSizes, JdwpId, Location, MethodID, ObjectID, RequestID,
        TaggedObjectID, TaggedReferenceTypeID, ThreadID, Value,
    },
    JdwpCodec,
};

fn composite(suspend_policy: SuspendPolicy, events: &[&dyn Fn(&mut JdwpWriter<'_>)]) -> Vec<u8> {
    let mut buf = Buffer::new();
    let mut write = JdwpWriter::new(&mut buf, IdSizes::default());
    (suspend_policy as u8).write(&mut write);
    (events.len() as u32).write(&mut write);
    for event in events {
        event(&mut write);
    }
    buf.into_vec()
}

fn location() -> Location {
    Location::new(
        TaggedReferenceTypeID::Class(ClassID::from_raw(0x11)),
        MethodID::from_raw(0x22),
        7,
    )
}

#[test]
fn single_breakpoint_event_decodes() {
    let codec = JdwpCodec::default();
    let body = composite(SuspendPolicy::All, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::Breakpoint as u8).write(w);
        RequestID::from_raw(3).write(w);
        ThreadID::from_raw(5).write(w);
        location().write(w);
    }]);

    let composite = codec.decode_composite(&body).unwrap();
    assert_eq!(composite.suspend_policy, SuspendPolicy::All);
    assert_eq!(composite.events.len(), 1);

    let event = &composite.events[0];
    assert_eq!(event.kind(), EventKind::Breakpoint);
    assert_eq!(
        *event,
        Event::Breakpoint(RequestID::from_raw(3), ThreadID::from_raw(5), location())
    );
}

#[test]
fn multiple_events_share_one_composite() {
    let codec = JdwpCodec::default();
    let body = composite(
        SuspendPolicy::EventThread,
        &[
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::SingleStep as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                location().write(w);
            },
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::MethodExitWithReturnValue as u8).write(w);
                RequestID::from_raw(3).write(w);
                ThreadID::from_raw(2).write(w);
                location().write(w);
                Value::Long(-7).write(w);
            },
        ],
    );

    let composite = codec.decode_composite(&body).unwrap();
    assert_eq!(composite.events.len(), 2);
    assert_eq!(composite.events[0].kind(), EventKind::SingleStep);
    assert_eq!(
        composite.events[1],
        Event::MethodExitWithReturnValue(
            RequestID::from_raw(3),
            ThreadID::from_raw(2),
            location(),
            Value::Long(-7),
        )
    );
}

#[test]
fn caught_exception_event_carries_both_locations() {
    let codec = JdwpCodec::default();
    let thrown = TaggedObjectID::Object(ObjectID::from_raw(0xEE));
    let catch_location = Location::new(
        TaggedReferenceTypeID::Class(ClassID::from_raw(0x33)),
        MethodID::from_raw(0x44),
        2,
    );
    let body = composite(SuspendPolicy::All, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::Exception as u8).write(w);
        RequestID::from_raw(9).write(w);
        ThreadID::from_raw(5).write(w);
        location().write(w);
        thrown.write(w);
        catch_location.write(w);
    }]);

    match &codec.decode_composite(&body).unwrap().events[0] {
        Event::Exception(request, _, throw_location, exception, caught_at) => {
            assert_eq!(*request, RequestID::from_raw(9));
            assert_eq!(*throw_location, location());
            assert_eq!(*exception, thrown);
            assert_eq!(*caught_at, Some(catch_location));
        }
        other => panic!("expected an exception event, got {other:?}"),
    }
}

#[test]
fn uncaught_exception_event_has_a_zero_tag_catch_location() {
    let codec = JdwpCodec::default();
    let thrown = TaggedObjectID::Object(ObjectID::from_raw(0xEE));
    let body = composite(
        SuspendPolicy::All,
        &[
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::Exception as u8).write(w);
                RequestID::from_raw(9).write(w);
                ThreadID::from_raw(5).write(w);
                location().write(w);
                thrown.write(w);
                // "not caught" on the wire: a zero type-tag byte, then the
                // location stays at its fixed width
                0u8.write(w);
                0u64.write(w); // class id
                0u64.write(w); // method id
                0u64.write(w); // index
            },
            // a second event proves the null location kept the cursor in
            // sync
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::ThreadStart as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(5).write(w);
            },
        ],
    );

    let events = codec.decode_composite(&body).unwrap().events;
    match &events[0] {
        Event::Exception(.., caught_at) => assert_eq!(*caught_at, None),
        other => panic!("expected an exception event, got {other:?}"),
    }
    assert_eq!(
        events[1],
        Event::ThreadStart(RequestID::from_raw(1), ThreadID::from_raw(5))
    );
}

#[test]
fn class_prepare_and_unload_events_decode() {
    let codec = JdwpCodec::default();
    let body = composite(
        SuspendPolicy::None,
        &[
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::ClassPrepare as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                TaggedReferenceTypeID::Class(ClassID::from_raw(3)).write(w);
                "Lcom/example/Main;".to_owned().write(w);
                ClassStatus::OK.write(w);
            },
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::ClassUnload as u8).write(w);
                RequestID::from_raw(4).write(w);
                "Lcom/example/Gone;".to_owned().write(w);
            },
        ],
    );

    let events = codec.decode_composite(&body).unwrap().events;
    match &events[0] {
        Event::ClassPrepare(_, _, type_id, signature, status) => {
            assert_eq!(type_id.raw(), 3);
            assert_eq!(signature, "Lcom/example/Main;");
            assert_eq!(*status, ClassStatus::OK);
        }
        other => panic!("expected a class prepare event, got {other:?}"),
    }
    assert_eq!(
        events[1],
        Event::ClassUnload(RequestID::from_raw(4), "Lcom/example/Gone;".to_owned())
    );
}

#[test]
fn field_watch_events_decode() {
    let codec = JdwpCodec::default();
    let declaring = TaggedReferenceTypeID::Class(ClassID::from_raw(0x10));
    let object = TaggedObjectID::Object(ObjectID::from_raw(0x20));
    let body = composite(
        SuspendPolicy::EventThread,
        &[
            // a static field access: the object on the wire is a zero tag
            // byte followed by a zero object id
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::FieldAccess as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                location().write(w);
                declaring.write(w);
                FieldID::from_raw(0x30).write(w);
                0u8.write(w);
                0u64.write(w);
            },
            // an instance field modification, which also proves the null
            // object above kept the cursor in sync
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::FieldModification as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                location().write(w);
                declaring.write(w);
                FieldID::from_raw(0x30).write(w);
                object.write(w);
                Value::Boolean(true).write(w);
            },
        ],
    );

    let events = codec.decode_composite(&body).unwrap().events;
    match &events[0] {
        Event::FieldAccess(_, _, _, declaring_type, field, target) => {
            assert_eq!(*declaring_type, declaring);
            assert_eq!(field.raw(), 0x30);
            assert_eq!(*target, None);
        }
        other => panic!("expected a field access event, got {other:?}"),
    }
    match &events[1] {
        Event::FieldModification(_, _, _, _, _, target, value_to_be) => {
            assert_eq!(*target, Some(object));
            assert_eq!(*value_to_be, Value::Boolean(true));
        }
        other => panic!("expected a field modification event, got {other:?}"),
    }
}

#[test]
fn monitor_events_decode() {
    let codec = JdwpCodec::default();
    let monitor = TaggedObjectID::Object(ObjectID::from_raw(0x40));
    let body = composite(
        SuspendPolicy::EventThread,
        &[
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::MonitorWait as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                monitor.write(w);
                location().write(w);
                5000i64.write(w);
            },
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::MonitorWaited as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(2).write(w);
                monitor.write(w);
                location().write(w);
                true.write(w);
            },
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::MonitorContendedEnter as u8).write(w);
                RequestID::from_raw(1).write(w);
                ThreadID::from_raw(3).write(w);
                monitor.write(w);
                location().write(w);
            },
        ],
    );

    let events = codec.decode_composite(&body).unwrap().events;
    assert_eq!(
        events[0],
        Event::MonitorWait(
            RequestID::from_raw(1),
            ThreadID::from_raw(2),
            monitor,
            location(),
            5000,
        )
    );
    assert_eq!(
        events[1],
        Event::MonitorWaited(
            RequestID::from_raw(1),
            ThreadID::from_raw(2),
            monitor,
            location(),
            true,
        )
    );
    assert_eq!(events[2].kind(), EventKind::MonitorContendedEnter);
}

#[test]
fn vm_lifecycle_events_decode() {
    let codec = JdwpCodec::default();
    let body = composite(
        SuspendPolicy::None,
        &[
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::VmStart as u8).write(w);
                RequestID::from_raw(0).write(w); // automatically generated
                ThreadID::from_raw(1).write(w);
            },
            &|w: &mut JdwpWriter<'_>| {
                (EventKind::VmDeath as u8).write(w);
                RequestID::from_raw(0).write(w);
            },
        ],
    );

    let events = codec.decode_composite(&body).unwrap().events;
    assert_eq!(
        events[0],
        Event::VmStart(RequestID::from_raw(0), ThreadID::from_raw(1))
    );
    assert_eq!(events[1], Event::VmDeath(RequestID::from_raw(0)));
}

#[test]
fn thread_events_decode() {
    let codec = JdwpCodec::default();
    let body = composite(SuspendPolicy::None, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::ThreadDeath as u8).write(w);
        RequestID::from_raw(2).write(w);
        ThreadID::from_raw(8).write(w);
    }]);

    let events = codec.decode_composite(&body).unwrap().events;
    assert_eq!(
        events[0],
        Event::ThreadDeath(RequestID::from_raw(2), ThreadID::from_raw(8))
    );
}

#[test]
fn unknown_event_kind_is_rejected() {
    let codec = JdwpCodec::default();
    let body = composite(SuspendPolicy::None, &[&|w: &mut JdwpWriter<'_>| {
        77u8.write(w);
    }]);

    assert_eq!(
        codec.decode_composite(&body).unwrap_err(),
        CodecError::InvalidEventType(77)
    );
}

#[test]
fn event_kind_without_a_composite_shape_is_rejected() {
    let codec = JdwpCodec::default();
    // FramePop is a known kind byte, but it never appears in composites
    let body = composite(SuspendPolicy::None, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::FramePop as u8).write(w);
    }]);

    assert_eq!(
        codec.decode_composite(&body).unwrap_err(),
        CodecError::InvalidEventType(EventKind::FramePop as u8)
    );
}

#[test]
fn trailing_bytes_after_the_events_are_rejected() {
    let codec = JdwpCodec::default();
    let mut body = composite(SuspendPolicy::None, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::VmDeath as u8).write(w);
        RequestID::from_raw(0).write(w);
    }]);
    body.push(0xAA);

    assert_eq!(
        codec.decode_composite(&body).unwrap_err(),
        CodecError::TrailingData(1)
    );
}

#[test]
fn truncated_event_bodies_are_insufficient() {
    let codec = JdwpCodec::default();
    // claims one breakpoint event but stops after the request id
    let body = composite(SuspendPolicy::All, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::Breakpoint as u8).write(w);
        RequestID::from_raw(1).write(w);
    }]);

    assert_eq!(
        codec.decode_composite(&body).unwrap_err(),
        CodecError::InsufficientData
    );
}

#[test]
fn value_tag_decides_the_return_value_shape() {
    let codec = JdwpCodec::default();
    // a method exit returning a string reference: tag 's' + object id
    let returned = Value::String(jdwp_codec::types::StringID::from_raw(0x66));
    let body = composite(SuspendPolicy::None, &[&|w: &mut JdwpWriter<'_>| {
        (EventKind::MethodExitWithReturnValue as u8).write(w);
        RequestID::from_raw(1).write(w);
        ThreadID::from_raw(2).write(w);
        location().write(w);
        returned.write(w);
    }]);

    match &codec.decode_composite(&body).unwrap().events[0] {
        Event::MethodExitWithReturnValue(.., value) => {
            assert_eq!(*value, returned);
            assert_eq!(value.tag(), Tag::String);
        }
        other => panic!("expected a method exit event, got {other:?}"),
    }
}
