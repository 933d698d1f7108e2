//! # Password Hashing
//!
//! Argon2id with a random salt per hash. Stored values are PHC strings
//! (`$argon2id$v=19$...`), so the salt and parameters travel with the hash.
//!
//! A login for an unknown username still runs one verify, against a dummy
//! hash, so it costs the same as a wrong password for a real account.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use std::sync::OnceLock;

use crate::error::{DbError, DbResult};

#[cfg(test)]
thread_local! {
    static VERIFY_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Argon2 verifications run on this thread so far.
#[cfg(test)]
pub(crate) fn verify_calls() -> usize {
    VERIFY_CALLS.with(|calls| calls.get())
}

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> DbResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Hashing(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// A stored value that doesn't parse never matches.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parsed_hash = match PasswordHash::new(stored) {
        Ok(h) => h,
        Err(_) => return false,
    };

    #[cfg(test)]
    VERIFY_CALLS.with(|calls| calls.set(calls.get() + 1));

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Checks a password against an account's stored hash, if there is one.
///
/// With no stored hash the password is verified against a dummy hash
/// and the result discarded. Always `false` in that case.
pub fn verify_stored_password(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(stored) => verify_password(password, stored),
        None => {
            let _ = verify_password(password, dummy_hash());
            false
        }
    }
}

/// Hash with the same parameters as stored accounts, built on first use.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("stockroom-unknown-account").unwrap_or_default())
}
