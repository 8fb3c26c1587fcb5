use super::*;

#[test]
fn token_secrets_are_random_hex() {
    let a = generate_token_secret().expect("generate token");
    let b = generate_token_secret().expect("generate token");
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn hash_token_is_stable_and_not_the_secret() {
    let h = hash_token("secret");
    assert_eq!(h, hash_token("secret"));
    assert_ne!(h, hash_token("secret2"));
    assert_ne!(h, "secret");
}
