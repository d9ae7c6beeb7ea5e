//! Integration tests for derive macros.

use bytestream::{ByteStream, Decode, Encode, StreamError};

// =============================================================================
// Struct tests
// =============================================================================

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct UnitStruct;

#[test]
fn test_derive_unit_struct() {
    let mut st = ByteStream::new();
    st.write(&UnitStruct);
    assert!(st.is_empty());

    let decoded: UnitStruct = st.read();
    assert_eq!(decoded, UnitStruct);
    assert!(st.is_ok());
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct Foo {
    id: i32,
    name: String,
}

#[test]
fn test_derive_named_struct_wire_layout() {
    let a = Foo {
        id: 42,
        name: "I am a struct Foo".into(),
    };
    let b = Foo {
        id: 13,
        name: "me too".into(),
    };

    let mut st = ByteStream::new();
    st.write(&a).write(&b);
    assert!(st.is_ok());

    let mut decoded_a = Foo::default();
    let mut decoded_b = Foo::default();
    st.read_into(&mut decoded_a).read_into(&mut decoded_b);
    assert!(st.is_ok());

    assert_eq!(decoded_a, a);
    assert_eq!(decoded_b, b);
    assert_eq!(
        st.to_string(),
        "2a000000\
         114920616d20612073747275637420466f6f\
         0d000000\
         066d6520746f6f"
    );
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct TupleStruct(u32, u8);

#[test]
fn test_derive_tuple_struct() {
    let mut st = ByteStream::new();
    st.write(&TupleStruct(42, 7));
    assert_eq!(st.as_bytes(), &[42, 0, 0, 0, 7]);

    let decoded: TupleStruct = st.read();
    assert_eq!(decoded, TupleStruct(42, 7));
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct Header {
    status: u8,
    id: i32,
    flags: bool,
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct Message {
    header: Header,
    body: String,
}

#[test]
fn test_derive_nested_struct() {
    let msg = Message {
        header: Header {
            status: 1,
            id: 42,
            flags: true,
        },
        body: "hello".into(),
    };

    let mut st = ByteStream::new();
    st.write(&msg);
    assert_eq!(st.to_string(), "012a000000010568656c6c6f");

    let decoded: Message = st.read();
    assert!(st.is_ok());
    assert_eq!(decoded, msg);
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct WithSkip {
    id: u16,
    #[bytestream(skip)]
    cached: u64,
    tag: u8,
}

#[test]
fn test_derive_skip_field() {
    let value = WithSkip {
        id: 0xabcd,
        cached: 99,
        tag: 5,
    };

    let mut st = ByteStream::new();
    st.write(&value);
    assert_eq!(st.as_bytes(), &[0xcd, 0xab, 5]);

    let mut decoded = WithSkip {
        cached: 7,
        ..WithSkip::default()
    };
    st.read_into(&mut decoded);
    assert_eq!(decoded.id, 0xabcd);
    assert_eq!(decoded.tag, 5);
    assert_eq!(decoded.cached, 7);
}

#[test]
fn test_derive_underflow_keeps_later_fields() {
    let mut st = ByteStream::from(vec![1, 0x2a, 0]);

    let mut decoded = Header {
        status: 0,
        id: 0,
        flags: true,
    };
    st.read_into(&mut decoded);

    assert!(st.is_failed());
    assert_eq!(
        st.error(),
        Some(StreamError::Underflow {
            needed: 4,
            available: 2
        })
    );
    assert_eq!(decoded.status, 1);
    // Partial integer is zero-filled
    assert_eq!(decoded.id, 0x2a);
    // Read after the failure leaves the field alone
    assert!(decoded.flags);
}

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct Generic<T> {
    value: T,
    count: u8,
}

#[test]
fn test_derive_generic_struct() {
    let mut st = ByteStream::new();
    st.write(&Generic {
        value: -2i16,
        count: 3,
    });
    assert_eq!(st.to_string(), "feff03");

    let decoded: Generic<i16> = st.read();
    assert_eq!(
        decoded,
        Generic {
            value: -2,
            count: 3
        }
    );
}
