use std::io;

use msgdigest::{oneshot, Algorithm, Engine, Error, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn hex_of(alg: Algorithm, data: &[u8]) -> String {
    oneshot(alg, data).to_hex()
}

#[test]
fn test_known_vectors() {
    assert_eq!(hex_of(Algorithm::Md5, b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex_of(Algorithm::Md5, b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        hex_of(Algorithm::Sha1, b"abc"),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
    assert_eq!(
        hex_of(Algorithm::Sha256, b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex_of(Algorithm::Sha256, b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

// (length of a run of b'a', md5, sha1, sha256)
const BOUNDARY_VECTORS: [(usize, &str, &str, &str); 12] = [
    (
        0,
        "d41d8cd98f00b204e9800998ecf8427e",
        "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    (
        1,
        "0cc175b9c0f1b6a831c399e269772661",
        "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8",
        "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb",
    ),
    (
        55,
        "ef1772b6dff9a122358552954ad0df65",
        "c1c8bbdc22796e28c0e15163d20899b65621d65a",
        "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    ),
    (
        56,
        "3b0c8ac703f828b04c6c197006d17218",
        "c2db330f6083854c99d4b5bfb6e8f29f201be699",
        "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
    ),
    (
        57,
        "652b906d60af96844ebd21b674f35e93",
        "f08f24908d682555111be7ff6f004e78283d989a",
        "f13b2d724659eb3bf47f2dd6af1accc87b81f09f59f2b75e5c0bed6589dfe8c6",
    ),
    (
        63,
        "b06521f39153d618550606be297466d5",
        "03f09f5b158a7a8cdad920bddc29b81c18a551f5",
        "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34",
    ),
    (
        64,
        "014842d480b571495a4a0363793f7367",
        "0098ba824b5c16427bd7a1122a5a442a25ec644d",
        "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    ),
    (
        65,
        "c743a45e0d2e6a95cb859adae0248435",
        "11655326c708d70319be2610e8a57d9a5b959d3b",
        "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0",
    ),
    (
        119,
        "8a7bd0732ed6a28ce75f6dabc90e1613",
        "ee971065aaa017e0632a8ca6c77bb3bf8b1dfc56",
        "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb",
    ),
    (
        120,
        "5f61c0ccad4cac44c75ff505e1f1e537",
        "f34c1488385346a55709ba056ddd08280dd4c6d6",
        "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c",
    ),
    (
        127,
        "020406e1d05cdc2aa287641f7ae2cc39",
        "89d95fa32ed44a7c610b7ee38517ddf57e0bb975",
        "c57e9278af78fa3cab38667bef4ce29d783787a2f731d4e12200270f0c32320a",
    ),
    (
        128,
        "e510683b3f5ffe4093d021808bc6ff70",
        "ad5b3fdbcb526778c2839d2f151ea753995e26a0",
        "6836cf13bac400e9105071cd6af47084dfacad4e5e302c94bfed24e013afb73e",
    ),
];

#[test]
fn test_boundary_lengths() {
    for &(len, md5, sha1, sha256) in BOUNDARY_VECTORS.iter() {
        let data = vec![b'a'; len];
        assert_eq!(hex_of(Algorithm::Md5, &data), md5, "MD5 of {} bytes", len);
        assert_eq!(hex_of(Algorithm::Sha1, &data), sha1, "SHA-1 of {} bytes", len);
        assert_eq!(hex_of(Algorithm::Sha256, &data), sha256, "SHA-256 of {} bytes", len);
    }
}

#[test]
fn test_byte_sequence_vector() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    assert_eq!(hex_of(Algorithm::Md5, &data), "a24f1e3ef66950e1327f210e3997ba2c");
    assert_eq!(
        hex_of(Algorithm::Sha1, &data),
        "c9c960a0b925474fab83942cc27d504fc24ac37b"
    );
    assert_eq!(
        hex_of(Algorithm::Sha256, &data),
        "4e4c294b331f7a2099a379bec34b9f9fc03dc46ab465d998f4d683da53487e6d"
    );
}

#[test]
fn test_million_a_streamed() {
    let chunk = [b'a'; 1000];
    let expected = [
        (Algorithm::Md5, "7707d6ae4e027c70eea2a935c2296f21"),
        (Algorithm::Sha1, "34aa973cd4c4daa4f61eeb2bdbad27316534016f"),
        (
            Algorithm::Sha256,
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        ),
    ];

    for (alg, hex) in expected {
        let mut engine = Engine::new(alg);
        for _ in 0..1000 {
            engine.update(&chunk).unwrap();
        }
        assert_eq!(engine.bytes_processed(), 1_000_000);
        assert_eq!(engine.finalize().unwrap().to_hex(), hex, "{}", alg);
    }
}

#[test]
fn test_incremental_equivalence_random_splits() {
    let mut rng = StdRng::seed_from_u64(0x5EED_D16E);

    for alg in Algorithm::ALL {
        for _ in 0..50 {
            let len = rng.gen_range(0..400);
            let mut data = vec![0u8; len];
            rng.fill(&mut data[..]);

            let expected = oneshot(alg, &data);

            let mut engine = Engine::new(alg);
            let mut rest = &data[..];
            while !rest.is_empty() {
                let take = rng.gen_range(0..=rest.len().min(150));
                engine.update(&rest[..take]).unwrap();
                rest = &rest[take..];
            }
            assert_eq!(engine.finalize().unwrap(), expected, "{} len {}", alg, len);
        }
    }
}

#[test]
fn test_byte_at_a_time_equivalence() {
    let data: Vec<u8> = (0..=255u8).cycle().take(300).collect();
    for alg in Algorithm::ALL {
        let mut engine = Engine::new(alg);
        for byte in &data {
            engine.update(std::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(engine.finalize().unwrap(), oneshot(alg, &data));
    }
}

#[test]
fn test_determinism() {
    let data = b"the same input twice";
    for alg in Algorithm::ALL {
        assert_eq!(oneshot(alg, data), oneshot(alg, data));
    }
}

#[test]
fn test_fixed_output_length() {
    let big = vec![0x5Au8; 1 << 20];
    for alg in Algorithm::ALL {
        for len in [0usize, 1, 63, 64, 1000, 1 << 20] {
            let digest = oneshot(alg, &big[..len]);
            assert_eq!(digest.as_bytes().len(), alg.output_size());
            assert_eq!(digest.len(), alg.output_size());
        }
    }
}

#[test]
fn test_avalanche() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for alg in Algorithm::ALL {
        let mut changed = 0u32;
        let mut total = 0u32;

        for _ in 0..64 {
            let len = rng.gen_range(1..200);
            let mut data = vec![0u8; len];
            rng.fill(&mut data[..]);
            let before = oneshot(alg, &data);

            let bit = rng.gen_range(0..len * 8);
            data[bit / 8] ^= 1 << (bit % 8);
            let after = oneshot(alg, &data);

            changed += before
                .as_bytes()
                .iter()
                .zip(after.as_bytes())
                .map(|(x, y)| (x ^ y).count_ones())
                .sum::<u32>();
            total += (alg.output_size() * 8) as u32;
        }

        let ratio = changed as f64 / total as f64;
        assert!(
            (0.4..0.6).contains(&ratio),
            "{} flipped {:.3} of output bits",
            alg,
            ratio
        );
    }
}

#[test]
fn test_misuse_is_reported() {
    for alg in Algorithm::ALL {
        let mut engine = Engine::new(alg);
        engine.update(b"abc").unwrap();
        engine.finalize().unwrap();
        assert_eq!(engine.phase(), Phase::Finalized);

        assert_eq!(engine.update(b"x"), Err(Error::Finalized { algorithm: alg }));
        assert_eq!(engine.finalize(), Err(Error::Finalized { algorithm: alg }));
    }
}

#[test]
fn test_io_copy_streams_reader() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    let mut engine = Engine::new(Algorithm::Sha256);
    let copied = io::copy(&mut &data[..], &mut engine).unwrap();
    assert_eq!(copied, 1000);
    assert_eq!(
        engine.finalize().unwrap().to_hex(),
        "4e4c294b331f7a2099a379bec34b9f9fc03dc46ab465d998f4d683da53487e6d"
    );
}

#[test]
fn test_independent_engines_on_threads() {
    let data = vec![b'a'; 10_000];
    std::thread::scope(|s| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&alg| {
                let data = &data;
                s.spawn(move || {
                    let mut engine = Engine::new(alg);
                    for chunk in data.chunks(333) {
                        engine.update(chunk).unwrap();
                    }
                    (alg, engine.finalize().unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (alg, digest) = handle.join().unwrap();
            assert_eq!(digest, oneshot(alg, &data));
        }
    });
}

#[test]
fn test_fixed_size_helpers_agree_with_engine() {
    let data = b"fixed size helpers";
    assert_eq!(
        &msgdigest::md5_digest(data)[..],
        oneshot(Algorithm::Md5, data).as_bytes()
    );
    assert_eq!(
        &msgdigest::sha1_digest(data)[..],
        oneshot(Algorithm::Sha1, data).as_bytes()
    );
    assert_eq!(
        &msgdigest::sha256_digest(data)[..],
        oneshot(Algorithm::Sha256, data).as_bytes()
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_batch_matches_oneshot() {
    let inputs: Vec<String> = (0..32).map(|i| "x".repeat(i * 7)).collect();
    let digests = msgdigest::digest_all(Algorithm::Sha1, &inputs);
    assert_eq!(digests.len(), inputs.len());
    for (input, digest) in inputs.iter().zip(&digests) {
        assert_eq!(*digest, oneshot(Algorithm::Sha1, input.as_bytes()));
    }
}
