use crate::{ByteStream, Status, StreamError};

#[test]
fn test_new_stream_is_ok_and_empty() {
    let st = ByteStream::new();
    assert!(st.is_ok());
    assert_eq!(st.status(), Status::Ok);
    assert_eq!(st.check(), Ok(()));
    assert!(st.is_empty());
    assert_eq!(st.position(), 0);
    assert_eq!(st.to_string(), "");
}

#[test]
fn test_read_past_end_consumes_what_exists() {
    let mut st = ByteStream::from(vec![0x2a, 0x01]);

    let mut value = 0xffff_ffff_u32;
    st.read_into(&mut value);

    assert!(st.is_failed());
    assert_eq!(st.status(), Status::Failed);
    assert_eq!(value, 0x012a);
    assert_eq!(st.position(), 2);
    assert_eq!(st.remaining(), 0);
}

#[test]
fn test_failure_is_sticky() {
    let mut st = ByteStream::new();
    st.write(&1u8);

    let mut a = 0u16;
    st.read_into(&mut a);
    assert!(st.is_failed());

    // New data does not revive the stream
    st.write(&0x1234u16).write("abc");
    let mut b = 0xaaaa_u16;
    let mut s = String::from("unchanged");
    st.read_into(&mut b).read_into(&mut s);

    assert!(st.is_failed());
    assert_eq!(b, 0xaaaa);
    assert_eq!(s, "unchanged");
    assert_eq!(st.position(), 1);
    assert_eq!(
        st.check(),
        Err(StreamError::Underflow {
            needed: 2,
            available: 1
        })
    );
}

#[test]
fn test_first_error_is_kept() {
    let mut st = ByteStream::from(vec![1]);
    let _: u32 = st.read();
    let _: u64 = st.read();

    assert_eq!(
        st.error(),
        Some(StreamError::Underflow {
            needed: 4,
            available: 1
        })
    );
}

#[test]
fn test_swap_exchanges_full_state() {
    let mut payload = ByteStream::new();
    payload
        .write_bytes(&[0x1, 0x2a, 0x0, 0x0, 0x0])
        .write_bytes(&[5, b'h', b'e', b'l', b'l', b'o']);

    let status: u8 = payload.read();
    let id: i32 = payload.read();
    assert!(payload.is_ok());
    assert_eq!((status, id), (1, 42));

    let mut copy = ByteStream::new();
    copy.swap(&mut payload);

    assert_eq!(copy.to_string(), "012a0000000568656c6c6f");
    assert_eq!(copy.position(), 5);
    assert_eq!(payload.to_string(), "");
    assert_eq!(payload.position(), 0);
    assert!(payload.is_ok());

    let s: String = copy.read();
    assert!(copy.is_ok());
    assert_eq!(s, "hello");
}

#[test]
fn test_swap_carries_failed_status() {
    let mut failed = ByteStream::new();
    let _: u8 = failed.read();
    assert!(failed.is_failed());

    let mut fresh = ByteStream::new();
    fresh.write(&9u8);

    fresh.swap(&mut failed);
    assert!(fresh.is_failed());
    assert!(fresh.is_empty());
    assert!(failed.is_ok());
    assert_eq!(failed.read::<u8>(), 9);
}

#[test]
fn test_take_leaves_empty_stream() {
    let mut st = ByteStream::new();
    st.write(&7u16);

    let taken = st.take();
    assert_eq!(taken.as_bytes(), &[7, 0]);
    assert!(st.is_empty());
    assert!(st.is_ok());
}

#[test]
fn test_hex_and_debug_rendering() {
    let mut st = ByteStream::new();
    st.write_bytes(&[0x00, 0x0f, 0xab]);
    let _: u8 = st.read();

    assert_eq!(format!("{st}"), "000fab");
    assert_eq!(format!("{st:x}"), "000fab");
    assert_eq!(
        format!("{st:?}"),
        "ByteStream { len: 3, position: 1, status: Ok }"
    );
}

#[test]
fn test_conversions() {
    let st = ByteStream::from(&[1u8, 2, 3][..]);
    assert_eq!(st.unread(), &[1, 2, 3]);

    let mut st = ByteStream::with_capacity(16);
    st.extend([4u8, 5]);
    st.extend(&[6u8]);
    let bytes: Vec<u8> = st.into();
    assert_eq!(bytes, vec![4, 5, 6]);
}

#[test]
fn test_error_display() {
    let err = StreamError::Underflow {
        needed: 4,
        available: 1,
    };
    assert_eq!(
        err.to_string(),
        "stream underflow: needed 4 bytes, only 1 available"
    );
    assert_eq!(
        StreamError::TooLong { len: 300 }.to_string(),
        "length 300 does not fit a one-byte prefix (max 255)"
    );
}
