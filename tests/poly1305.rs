use brine::poly1305::{Poly1305, mac};

fn decode_32(hex_str: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_str).expect("valid hex");
    bytes.as_slice().try_into().expect("32 bytes")
}

// -------------------------------------------------------
// 1. RFC 8439 SECTION 2.5.2 TEST VECTOR
// -------------------------------------------------------

const RFC8439_KEY: &str = "85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b";
const RFC8439_MSG: &[u8] = b"Cryptographic Forum Research Group";
const RFC8439_TAG: &str = "a8061dc1305136c6c22b8baf0c0127a9";

#[test]
fn poly1305_rfc8439_vector() {
    let tag = mac::authenticate(RFC8439_MSG, &decode_32(RFC8439_KEY));

    assert_eq!(hex::encode(tag), RFC8439_TAG);
}

// -------------------------------------------------------
// 2. NACL ONETIMEAUTH TEST VECTOR
// -------------------------------------------------------

const NACL_KEY: &str = "eea6a7251c1e72916d11c2cb214d3c252539121d8e234e652d651fa4c8cff880";
const NACL_MSG: &str = "8e993b9f48681273c29650ba32fc76ce48332ea7164d96a4476fb8c531a1186a\
                        c0dfc17c98dce87b4da7f011ec48c97271d2c20f9b928fe2270d6fb863d51738\
                        b48eeee314a7cc8ab932164548e526ae90224368517acfeabd6bb3732bc0e9da\
                        99832b61ca01b6de56244a9e88d5f9b37973f622a43d14a6599b1f654cb45a74\
                        e355a5";
const NACL_TAG: &str = "f3ffc7703f9400e52a7dfb4b3d3305d9";

#[test]
fn poly1305_nacl_vector() {
    let message = hex::decode(NACL_MSG).expect("valid hex");
    let tag = mac::authenticate(&message, &decode_32(NACL_KEY));

    assert_eq!(hex::encode(tag), NACL_TAG);
}

// -------------------------------------------------------
// 3. INCREMENTAL UPDATES
// -------------------------------------------------------

#[test]
fn poly1305_incremental_matches_one_shot() {
    let key = decode_32(NACL_KEY);
    let message = hex::decode(NACL_MSG).expect("valid hex");
    let expected = mac::authenticate(&message, &key);

    for chunk_size in [1, 7, 15, 16, 17, 32, 64, 130] {
        let mut ctx = Poly1305::new(&key);
        for chunk in message.chunks(chunk_size) {
            ctx.update(chunk);
        }

        assert_eq!(
            ctx.finish(),
            expected,
            "chunk size {chunk_size} must not change the tag",
        );
    }
}

#[test]
fn poly1305_empty_update_calls_are_neutral() {
    let key = decode_32(RFC8439_KEY);

    let mut ctx = Poly1305::new(&key);
    ctx.update(&[]);
    ctx.update(RFC8439_MSG);
    ctx.update(&[]);

    assert_eq!(hex::encode(ctx.finish()), RFC8439_TAG);
}

// -------------------------------------------------------
// 4. EDGE CASES
// -------------------------------------------------------

#[test]
fn poly1305_empty_message_tag_is_the_pad() {
    // With no blocks absorbed the accumulator stays zero, so the tag is
    // exactly the second half of the key.
    let key = decode_32(NACL_KEY);
    let tag = mac::authenticate(&[], &key);

    assert_eq!(&tag[..], &key[16..32]);
}

#[test]
fn poly1305_block_boundary_lengths() {
    // Exercise the partial-block padding on either side of a boundary.
    let key = decode_32(RFC8439_KEY);

    for length in [1, 15, 16, 17, 31, 32, 33, 48] {
        let message = vec![0x5au8; length];
        let one_shot = mac::authenticate(&message, &key);

        let mut ctx = Poly1305::new(&key);
        ctx.update(&message);

        assert_eq!(ctx.finish(), one_shot);
    }
}

// -------------------------------------------------------
// 5. VERIFICATION
// -------------------------------------------------------

#[test]
fn poly1305_verify_accepts_valid_tag() {
    let key = decode_32(RFC8439_KEY);
    let tag = mac::authenticate(RFC8439_MSG, &key);

    assert!(mac::verify(&tag, RFC8439_MSG, &key));
}

#[test]
fn poly1305_verify_rejects_forgeries() {
    let key = decode_32(RFC8439_KEY);
    let mut tag = mac::authenticate(RFC8439_MSG, &key);

    tag[7] ^= 0x01;
    assert!(!mac::verify(&tag, RFC8439_MSG, &key));

    tag[7] ^= 0x01;
    assert!(!mac::verify(&tag, b"Cryptographic Forum Research Groupe", &key));
}
