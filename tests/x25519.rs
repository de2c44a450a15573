use curvex::Error;
use curvex::rng::{Csprng, OsRandom, RandomSource};
use curvex::x25519::{
    BASE_POINT, ExchangeParams, KeyPair, clamp_scalar, compute_shared_secret, exchange,
    generate_keypair, scalar_mult, scalar_mult_base,
};

fn bytes32(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut out).unwrap();
    out
}

const ALICE_PRIVATE: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_PRIVATE: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

/// RFC 7748 §5.2 single-call vectors.
#[test]
fn test_rfc7748_scalar_mult_vectors() {
    let vectors = [
        (
            "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
            "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
            "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
        ),
        (
            "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
            "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
            "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
        ),
    ];

    for (scalar, point, expected) in vectors {
        assert_eq!(
            scalar_mult(&bytes32(scalar), &bytes32(point)),
            bytes32(expected)
        );
    }
}

/// RFC 7748 §6.1 Diffie–Hellman example.
#[test]
fn test_rfc7748_key_agreement() {
    let alice_private = bytes32(ALICE_PRIVATE);
    let bob_private = bytes32(BOB_PRIVATE);

    assert_eq!(scalar_mult_base(&alice_private), bytes32(ALICE_PUBLIC));
    assert_eq!(scalar_mult_base(&bob_private), bytes32(BOB_PUBLIC));

    assert_eq!(
        compute_shared_secret(&alice_private, &bytes32(BOB_PUBLIC)),
        bytes32(SHARED)
    );
    assert_eq!(
        compute_shared_secret(&bob_private, &bytes32(ALICE_PUBLIC)),
        bytes32(SHARED)
    );
}

/// RFC 7748 §5.2 iterated test: k, u <- X25519(k, u), k.
#[test]
fn test_rfc7748_iterated() {
    let mut k = BASE_POINT;
    let mut u = BASE_POINT;

    for iteration in 1..=1000 {
        let next = scalar_mult(&k, &u);
        u = k;
        k = next;

        if iteration == 1 {
            assert_eq!(
                k,
                bytes32("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
            );
        }
    }

    assert_eq!(
        k,
        bytes32("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
    );
}

#[test]
fn test_x25519_key_exchange() {
    let mut rng = OsRandom;

    let alice = generate_keypair(&mut rng).unwrap();
    let bob = generate_keypair(&mut rng).unwrap();

    let alice_shared = compute_shared_secret(alice.private_key(), bob.public_key());
    let bob_shared = compute_shared_secret(bob.private_key(), alice.public_key());

    assert_eq!(alice_shared, bob_shared);
    assert_eq!(
        alice.diffie_hellman(bob.public_key()).to_bytes(),
        bob.diffie_hellman(alice.public_key()).to_bytes()
    );
}

#[test]
fn test_shared_secret_symmetry_over_many_scalars() {
    let mut rng = Csprng::from_seed([0x5a; 32]);

    for _ in 0..8 {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        rng.fill_bytes(&mut a);
        rng.fill_bytes(&mut b);

        assert_eq!(
            compute_shared_secret(&a, &scalar_mult_base(&b)),
            compute_shared_secret(&b, &scalar_mult_base(&a))
        );
    }
}

#[test]
fn test_scalar_mult_base_is_deterministic() {
    let scalar = bytes32(ALICE_PRIVATE);

    assert_eq!(scalar_mult_base(&scalar), scalar_mult_base(&scalar));
}

#[test]
fn test_generate_keypair_is_reproducible_from_seed() {
    let first = generate_keypair(&mut Csprng::from_seed([7; 32])).unwrap();
    let second = generate_keypair(&mut Csprng::from_seed([7; 32])).unwrap();

    assert_eq!(first.private_key(), second.private_key());
    assert_eq!(first.public_key(), second.public_key());
    assert_eq!(
        KeyPair::from_private(*first.private_key()).public_key(),
        first.public_key()
    );
}

#[test]
fn test_clamping_invariant() {
    let mut rng = Csprng::from_seed([0x13; 32]);
    let mut samples = vec![[0u8; 32], [0xff; 32]];
    for _ in 0..16 {
        let mut scalar = [0u8; 32];
        rng.fill_bytes(&mut scalar);
        samples.push(scalar);
    }

    for scalar in samples {
        let clamped = clamp_scalar(&scalar);

        assert_eq!(clamped[0] & 0b111, 0);
        assert_eq!(clamped[31] >> 7, 0);
        assert_eq!((clamped[31] >> 6) & 1, 1);
    }
}

#[test]
fn test_zero_scalar_is_clamped_before_use() {
    // Clamped zero is 2^254, which does not map the base point to infinity.
    let public = scalar_mult_base(&[0u8; 32]);

    assert_ne!(public, [0u8; 32]);
    assert_eq!(public, scalar_mult_base(&clamp_scalar(&[0u8; 32])));
}

#[test]
fn test_scalar_bits_removed_by_clamping_are_ignored() {
    let scalar = bytes32(ALICE_PRIVATE);
    let mut flipped = scalar;
    flipped[0] ^= 0b111;
    flipped[31] ^= 0b1100_0000;

    assert_eq!(scalar_mult_base(&scalar), scalar_mult_base(&flipped));
}

#[test]
fn test_top_bit_of_point_is_ignored() {
    let scalar = bytes32(ALICE_PRIVATE);
    let peer = bytes32(BOB_PUBLIC);
    let mut peer_high = peer;
    peer_high[31] |= 0x80;

    assert_eq!(
        compute_shared_secret(&scalar, &peer),
        compute_shared_secret(&scalar, &peer_high)
    );
}

fn low_order_points() -> Vec<[u8; 32]> {
    let zero = [0u8; 32];

    let mut one = [0u8; 32];
    one[0] = 1;

    // p - 1
    let mut minus_one = [0xffu8; 32];
    minus_one[0] = 0xec;
    minus_one[31] = 0x7f;

    // p, a non-canonical encoding of zero
    let mut p = [0xffu8; 32];
    p[0] = 0xed;
    p[31] = 0x7f;

    vec![zero, one, minus_one, p]
}

#[test]
fn test_low_order_points_give_zero_secret() {
    let private = bytes32(ALICE_PRIVATE);

    for point in low_order_points() {
        assert_eq!(compute_shared_secret(&private, &point), [0u8; 32]);

        let secret = exchange(&private, &point, &ExchangeParams::default()).unwrap();
        assert!(secret.is_zero());
    }
}

#[test]
fn test_contributory_check_rejects_low_order_points() {
    let private = bytes32(ALICE_PRIVATE);
    let params = ExchangeParams::contributory();

    for point in low_order_points() {
        assert_eq!(
            exchange(&private, &point, &params).unwrap_err(),
            Error::LowOrderPoint
        );
    }

    let secret = exchange(&private, &bytes32(BOB_PUBLIC), &params).unwrap();
    assert!(!secret.is_zero());
    assert_eq!(secret.as_bytes(), &bytes32(SHARED));
}

#[test]
fn test_exchange_params_default_is_permissive() {
    assert!(!ExchangeParams::default().reject_low_order);
    assert!(ExchangeParams::contributory().reject_low_order);
}

struct FailingSource;

impl RandomSource for FailingSource {
    fn fill(&mut self, _buf: &mut [u8]) -> curvex::Result<()> {
        Err(Error::EntropyUnavailable {
            backend: "test",
            code: -1,
        })
    }
}

#[test]
fn test_entropy_failure_propagates() {
    let err = generate_keypair(&mut FailingSource).unwrap_err();

    assert_eq!(
        err,
        Error::EntropyUnavailable {
            backend: "test",
            code: -1
        }
    );
    assert!(err.to_string().contains("entropy unavailable"));
}

#[test]
fn test_secret_types_do_not_print_key_material() {
    let pair = KeyPair::from_private(bytes32(ALICE_PRIVATE));
    let secret = pair.diffie_hellman(&bytes32(BOB_PUBLIC));

    assert_eq!(format!("{pair:?}"), "KeyPair { .. }");
    assert_eq!(format!("{secret:?}"), "SharedSecret(..)");
}

#[test]
fn test_concurrent_exchanges_agree() {
    let alice = KeyPair::from_private(bytes32(ALICE_PRIVATE));
    let bob_public = bytes32(BOB_PUBLIC);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let private = *alice.private_key();
            std::thread::spawn(move || compute_shared_secret(&private, &bob_public))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), bytes32(SHARED));
    }
}
