use bytestream::{ByteStream, Decode, Encode};

#[derive(Encode, Decode, Debug, Default, PartialEq)]
struct Login {
    version: u8,
    session: u32,
    user: String,
    remember: bool,
}

fn main() {
    let login = Login {
        version: 1,
        session: 0xdeadbeef,
        user: "alice".into(),
        remember: true,
    };

    let mut st = ByteStream::new();
    st.write(&login);
    println!("encoded: {st}");

    // Split the payload into fixed-size frames, as a transport would
    let mut frames = Vec::new();
    while st.remaining() > 0 {
        frames.push(st.extract(4));
    }
    println!("frames: {frames:?}");

    let mut received = ByteStream::new();
    for frame in &frames {
        received.write_bytes(frame);
    }

    let decoded: Login = received.read();
    if let Err(e) = received.check() {
        eprintln!("decode failed: {e}");
        return;
    }
    println!("decoded: {decoded:?}");

    assert_eq!(login, decoded);
}
