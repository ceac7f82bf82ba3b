use ridedesk::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_roundtrip() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(verify_password("correct horse battery staple", &hash).unwrap());
}

#[test]
fn test_wrong_password_fails_verification() {
    let hash = hash_password("hunter2").unwrap();
    assert!(!verify_password("hunter3", &hash).unwrap());
}

#[test]
fn test_hash_is_salted() {
    let first = hash_password("same-input").unwrap();
    let second = hash_password("same-input").unwrap();
    assert_ne!(first, second);
    assert!(verify_password("same-input", &first).unwrap());
    assert!(verify_password("same-input", &second).unwrap());
}

#[test]
fn test_hash_never_stores_plaintext() {
    let hash = hash_password("p@ssw0rd!").unwrap();
    assert!(!hash.contains("p@ssw0rd!"));
    assert!(hash.starts_with("$2"));
}
