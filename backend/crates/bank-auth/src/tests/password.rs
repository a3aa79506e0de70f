use crate::{HashParams, PasswordHasher};

fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

#[test]
fn given_hashed_password_when_verified_with_same_password_then_true() {
    let hasher = fast_hasher();
    let hash = hasher.hash("hunter2").unwrap();

    assert!(hasher.verify("hunter2", &hash));
}

#[test]
fn given_hashed_password_when_verified_with_other_password_then_false() {
    let hasher = fast_hasher();
    let hash = hasher.hash("hunter2").unwrap();

    assert!(!hasher.verify("hunter3", &hash));
}

#[test]
fn given_same_password_twice_when_hashed_then_salts_differ() {
    let hasher = fast_hasher();

    let first = hasher.hash("hunter2").unwrap();
    let second = hasher.hash("hunter2").unwrap();

    assert_ne!(first, second);
    assert!(first.starts_with("$argon2id$"));
}

#[test]
fn given_malformed_stored_hash_when_verified_then_false() {
    assert!(!fast_hasher().verify("hunter2", "plaintext-not-a-hash"));
}

#[test]
fn given_hash_from_different_params_when_verified_then_still_true() {
    let hash = fast_hasher().hash("hunter2").unwrap();
    let stronger = PasswordHasher::new(HashParams {
        memory_kib: 2048,
        iterations: 2,
        parallelism: 1,
    })
    .unwrap();

    assert!(stronger.verify("hunter2", &hash));
}

#[test]
fn given_zero_iterations_when_building_hasher_then_error() {
    let result = PasswordHasher::new(HashParams {
        memory_kib: 1024,
        iterations: 0,
        parallelism: 1,
    });

    assert!(result.is_err());
}

#[test]
fn given_defaults_when_read_then_match_argon2id_recommendation() {
    let params = HashParams::default();

    assert_eq!(params.memory_kib, 19456);
    assert_eq!(params.iterations, 2);
    assert_eq!(params.parallelism, 1);
}
