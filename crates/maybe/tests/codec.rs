use maybe::codec::{ABSENT_TAG, PRESENT_TAG};
use maybe::{absent, present, DecodeField, EncodeField, Maybe, MaybeError};

#[test]
fn encode_present_writes_tag_then_payload() {
    let value: Maybe<u32> = present(0xdead_beef);
    let mut buf = [0u8; 8];
    let mut offset = 0;
    value.encode_field(&mut buf, &mut offset);

    assert_eq!(offset, 5);
    assert_eq!(value.encoded_len(), 5);
    assert_eq!(&buf[..5], &[PRESENT_TAG, 0xef, 0xbe, 0xad, 0xde]);
}

#[test]
fn encode_absent_writes_single_tag() {
    let value: Maybe<u64> = absent();
    let mut buf = [0xffu8; 4];
    let mut offset = 0;
    value.encode_field(&mut buf, &mut offset);

    assert_eq!(offset, 1);
    assert_eq!(buf[0], ABSENT_TAG);
    assert_eq!(buf[1], 0xff);
}

#[test]
fn encode_skips_when_buffer_too_small() {
    let mut buf = [0u8; 3];
    let mut offset = 0;
    present(7u32).encode_field(&mut buf, &mut offset);
    assert_eq!(offset, 0);
    assert_eq!(buf, [0u8; 3]);
}

#[test]
fn decode_sequence_of_fields() {
    let mut buf = [0u8; 32];
    let mut offset = 0;
    present([0xaau8; 4]).encode_field(&mut buf, &mut offset);
    absent::<u16>().encode_field(&mut buf, &mut offset);
    present(present(-3i64)).encode_field(&mut buf, &mut offset);
    present(true).encode_field(&mut buf, &mut offset);
    let written = offset;

    let mut offset = 0;
    assert_eq!(Maybe::<[u8; 4]>::decode_field(&buf, &mut offset), Ok(present([0xaa; 4])));
    assert_eq!(Maybe::<u16>::decode_field(&buf, &mut offset), Ok(absent()));
    assert_eq!(Maybe::<Maybe<i64>>::decode_field(&buf, &mut offset), Ok(present(present(-3))));
    assert_eq!(Maybe::<bool>::decode_field(&buf, &mut offset), Ok(present(true)));
    assert_eq!(offset, written);
}

#[test]
fn decode_unknown_tag_is_illegal_construction() {
    let buf = [2u8, 0, 0, 0, 0];
    let mut offset = 0;
    let result = Maybe::<u32>::decode_field(&buf, &mut offset);
    println!("decode with tag 2: {:?}", result);
    assert_eq!(result, Err(MaybeError::IllegalConstruction { tag: 2 }));
    assert_eq!(offset, 0, "offset is restored on failure");
}

#[test]
fn decode_truncated_payload() {
    let buf = [PRESENT_TAG, 0x01, 0x02];
    let mut offset = 0;
    let result = Maybe::<u32>::decode_field(&buf, &mut offset);
    assert_eq!(result, Err(MaybeError::Truncated { needed: 4, remaining: 2 }));
    assert_eq!(offset, 0);

    let mut offset = 3;
    assert_eq!(
        Maybe::<u8>::decode_field(&buf, &mut offset),
        Err(MaybeError::Truncated { needed: 1, remaining: 0 })
    );
}

#[test]
fn decode_zero_width_field_past_end_is_truncated() {
    let mut offset = 5;
    assert_eq!(
        <[u8; 0]>::decode_field(&[], &mut offset),
        Err(MaybeError::Truncated { needed: 0, remaining: 0 })
    );
    assert_eq!(offset, 5);

    let buf = [PRESENT_TAG];
    let mut offset = 0;
    assert_eq!(Maybe::<[u8; 0]>::decode_field(&buf, &mut offset), Ok(present([])));
    assert_eq!(offset, 1);
}

#[test]
fn encode_at_huge_offset_is_skipped() {
    let mut buf = [0u8; 4];
    let mut offset = usize::MAX;
    7u32.encode_field(&mut buf, &mut offset);
    [1u8; 2].encode_field(&mut buf, &mut offset);
    present(1u8).encode_field(&mut buf, &mut offset);
    assert_eq!(offset, usize::MAX);
    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn decode_bool_accepts_only_zero_and_one() {
    let buf = [0u8, 1, 2];
    let mut offset = 0;
    assert_eq!(bool::decode_field(&buf, &mut offset), Ok(false));
    assert_eq!(bool::decode_field(&buf, &mut offset), Ok(true));
    assert_eq!(bool::decode_field(&buf, &mut offset), Err(MaybeError::InvalidBool { byte: 2 }));
    assert_eq!(offset, 2, "offset stays on the rejected byte");
}

#[test]
fn decode_present_bool_with_bad_payload_fails() {
    let buf = [PRESENT_TAG, 2];
    let mut offset = 0;
    let result = Maybe::<bool>::decode_field(&buf, &mut offset);
    println!("decode present bool with byte 2: {:?}", result);
    assert_eq!(result, Err(MaybeError::InvalidBool { byte: 2 }));
    assert_eq!(offset, 0);

    let mut buf = [0u8; 2];
    let mut offset = 0;
    present(true).encode_field(&mut buf, &mut offset);
    let mut offset = 0;
    assert_eq!(Maybe::<bool>::decode_field(&buf, &mut offset), Ok(present(true)));
}
