use brine::x25519::{BASEPOINT, scalarmult, scalarmult_base};

fn decode_32(hex_str: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_str).expect("valid hex");
    bytes.as_slice().try_into().expect("32 bytes")
}

fn expect_scalarmult_eq(scalar: &str, point: &str, expected: &str) {
    let got = scalarmult(&decode_32(scalar), &decode_32(point));

    assert_eq!(
        hex::encode(got),
        expected,
        "scalarmult mismatch for scalar {scalar} and point {point}",
    );
}

// -------------------------------------------------------
// 1. RFC 7748 SECTION 5.2 TEST VECTORS
// -------------------------------------------------------

#[test]
fn x25519_rfc7748_vector_1() {
    expect_scalarmult_eq(
        "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
    );
}

#[test]
fn x25519_rfc7748_vector_2() {
    // The point encoding has its top bit set, which must be ignored.
    expect_scalarmult_eq(
        "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
        "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
        "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
    );
}

// -------------------------------------------------------
// 2. RFC 7748 ITERATED LADDER VECTORS
// -------------------------------------------------------

fn iterate_ladder(count: usize) -> [u8; 32] {
    let mut k = BASEPOINT;
    let mut u = BASEPOINT;

    for _ in 0..count {
        let next = scalarmult(&k, &u);
        u = k;
        k = next;
    }

    k
}

#[test]
fn x25519_iterated_once() {
    assert_eq!(
        hex::encode(iterate_ladder(1)),
        "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079",
    );
}

#[test]
fn x25519_iterated_1000() {
    assert_eq!(
        hex::encode(iterate_ladder(1000)),
        "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51",
    );
}

#[test]
#[ignore = "takes minutes; run explicitly with --ignored"]
fn x25519_iterated_1000000() {
    assert_eq!(
        hex::encode(iterate_ladder(1_000_000)),
        "7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424",
    );
}

// -------------------------------------------------------
// 3. RFC 7748 SECTION 6.1 KEY AGREEMENT
// -------------------------------------------------------

#[test]
fn x25519_rfc7748_key_agreement() {
    let alice_private =
        decode_32("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob_private = decode_32("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_public = scalarmult_base(&alice_private);
    let bob_public = scalarmult_base(&bob_private);

    assert_eq!(
        hex::encode(alice_public),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
    );
    assert_eq!(
        hex::encode(bob_public),
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
    );

    let alice_shared = scalarmult(&alice_private, &bob_public);
    let bob_shared = scalarmult(&bob_private, &alice_public);

    assert_eq!(alice_shared, bob_shared);
    assert_eq!(
        hex::encode(alice_shared),
        "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
    );
}

// -------------------------------------------------------
// 4. STRUCTURAL PROPERTIES
// -------------------------------------------------------

#[test]
fn x25519_commutes_for_arbitrary_scalars() {
    let pairs = [
        ([0x11u8; 32], [0x22u8; 32]),
        ([0x01u8; 32], [0xfeu8; 32]),
        ([0xa5u8; 32], [0x5au8; 32]),
    ];

    for (a, b) in pairs {
        let shared_ab = scalarmult(&a, &scalarmult_base(&b));
        let shared_ba = scalarmult(&b, &scalarmult_base(&a));

        assert_eq!(shared_ab, shared_ba, "shared secrets must agree");
    }
}

#[test]
fn x25519_base_matches_explicit_basepoint() {
    let scalar = decode_32("0900000000000000000000000000000000000000000000000000000000000000");

    assert_eq!(scalarmult_base(&scalar), scalarmult(&scalar, &BASEPOINT));
}

#[test]
fn x25519_clamping_ignores_masked_bits() {
    // Bits 0-2 and 255 are cleared and bit 254 is set before the ladder,
    // so scalars differing only in those bits produce the same output.
    let mut low = [0x42u8; 32];
    let mut high = low;

    low[0] &= 248;
    low[31] = (low[31] & 127) | 64;
    high[0] |= 7;
    high[31] |= 128;

    assert_eq!(scalarmult_base(&low), scalarmult_base(&high));
}
