use jdwp_codec::{
    codec::{JdwpReadable, JdwpReader},
    commands::virtual_machine::{ClassesBySignature, Exit, IDSizes, Suspend},
    enums::ErrorCode,
    error::CodecError,
    packet::{self, PacketHeader, PacketMeta},
    types::IdSizes,
    JdwpCodec,
};

#[test]
fn handshake_is_the_fixed_fourteen_bytes() {
    let expected = [
        0x4A, 0x44, 0x57, 0x50, 0x2D, 0x48, 0x61, 0x6E, 0x64, 0x73, 0x68, 0x61, 0x6B, 0x65,
    ];
    assert_eq!(packet::encode_handshake(), expected);
    assert!(packet::is_handshake(&expected));
}

#[test]
fn handshake_rejects_any_other_bytes() {
    assert!(!packet::is_handshake(b"JDWP-handshake"));
    assert!(!packet::is_handshake(b"JDWP-Handshak"));
    assert!(!packet::is_handshake(b"JDWP-Handshake\n"));
    assert!(!packet::is_handshake(b""));
}

#[test]
fn id_sizes_packet_bytes() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&IDSizes);
    assert_eq!(
        packet.as_slice(),
        [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x07]
    );
}

#[test]
fn suspend_packet_bytes() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&Suspend);
    assert_eq!(
        packet.as_slice(),
        [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x08]
    );
}

#[test]
fn exit_packet_bytes() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&Exit::new(42));
    assert_eq!(
        packet.as_slice(),
        [0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0A, 0x00, 0x00, 0x00, 0x2A]
    );
}

#[test]
fn classes_by_signature_packet_bytes() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&ClassesBySignature::new("Ljava/lang/String;"));

    // 11 header + 4 length prefix + 18 utf-8 bytes
    assert_eq!(packet.len(), 33);
    assert_eq!(&packet.as_slice()[..4], [0x00, 0x00, 0x00, 0x21]);
    assert_eq!(&packet.as_slice()[9..11], [0x01, 0x02]);
    assert_eq!(&packet.as_slice()[11..15], [0x00, 0x00, 0x00, 0x12]);
    assert_eq!(&packet.as_slice()[15..], *b"Ljava/lang/String;");
}

#[test]
fn encoded_packets_uphold_the_header_invariants() {
    let codec = JdwpCodec::default();
    let packet = codec.encode(&ClassesBySignature::new("I"));
    let bytes = packet.as_slice();

    assert_eq!(packet::read_length(bytes).unwrap() as usize, packet.len());
    assert_eq!(packet::read_id(bytes).unwrap(), 0);
    assert_eq!(packet::read_flags(bytes).unwrap(), 0x00);
    assert_eq!(packet::read_command_set(bytes).unwrap(), 1);
    assert_eq!(packet::read_command_id(bytes).unwrap(), 2);
    assert!(!packet::is_reply(bytes).unwrap());
    assert!(!packet::is_event(bytes).unwrap());
}

#[test]
fn transport_patches_the_packet_id_in_place() {
    let codec = JdwpCodec::default();
    let mut packet = codec.encode(&Suspend);
    packet::write_id(packet.as_mut_slice(), 0xDEAD_BEEF).unwrap();

    assert_eq!(packet::read_id(packet.as_slice()).unwrap(), 0xDEAD_BEEF);
    // the id bytes are the only thing that changed
    assert_eq!(&packet.as_slice()[..4], [0x00, 0x00, 0x00, 0x0B]);
    assert_eq!(&packet.as_slice()[8..], [0x00, 0x01, 0x08]);
}

#[test]
fn short_buffers_are_not_headers() {
    assert_eq!(packet::read_length(&[]), Err(CodecError::InsufficientData));
    assert_eq!(
        packet::read_error_code(&[0; 10]),
        Err(CodecError::InsufficientData)
    );
    assert_eq!(
        packet::write_id(&mut [0; 7], 1),
        Err(CodecError::InsufficientData)
    );
}

#[test]
fn reply_packets_are_classified_as_replies() {
    // length 11, id 2, flags 0x80, error code 0
    let reply = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x02, 0x80, 0x00, 0x00];
    assert!(packet::is_reply(&reply).unwrap());
    assert!(!packet::is_event(&reply).unwrap());
    assert_eq!(packet::read_error_code(&reply).unwrap(), 0);
}

#[test]
fn error_replies_surface_their_code() {
    // flags 0x80, error code 112 (VM_DEAD)
    let reply = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x02, 0x80, 0x00, 0x70];
    let code = packet::read_error_code(&reply).unwrap();
    assert_eq!(ErrorCode::from(code), Some(ErrorCode::VmDead));
    assert_eq!(ErrorCode::text(code), "The virtual machine is not running");
    assert_eq!(ErrorCode::text(0xFFFF), "Unknown error");
}

#[test]
fn event_packets_are_commands_from_set_64() {
    let event = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x09, 0x00, 0x40, 0x64];
    assert!(packet::is_event(&event).unwrap());
    assert!(!packet::is_reply(&event).unwrap());

    // same command id behind reply flags is not an event
    let reply = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x09, 0x80, 0x40, 0x64];
    assert!(!packet::is_event(&reply).unwrap());
}

#[test]
fn header_struct_round_trips_through_the_codec() {
    let reply = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x2A, 0x80, 0x00, 0x70];
    let mut read = JdwpReader::new(&reply, IdSizes::default());
    let header = PacketHeader::read(&mut read).unwrap();

    assert_eq!(header.length(), 11);
    assert_eq!(header.id(), 42);
    assert_eq!(header.meta(), PacketMeta::Reply(ErrorCode::VmDead));
}

#[test]
fn bad_flags_are_rejected() {
    let junk = [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x2A, 0x42, 0x00, 0x00];
    let mut read = JdwpReader::new(&junk, IdSizes::default());
    assert_eq!(
        PacketHeader::read(&mut read),
        Err(CodecError::InvalidData("PacketMeta"))
    );
}

#[test]
fn empty_ack_replies_decode_to_unit() {
    let codec = JdwpCodec::default();
    assert_eq!(codec.decode_reply::<Suspend>(&[]), Ok(()));
}

#[test]
fn non_empty_ack_replies_are_rejected() {
    let codec = JdwpCodec::default();
    assert_eq!(
        codec.decode_reply::<Suspend>(&[0x00]),
        Err(CodecError::TrailingData(1))
    );
}
