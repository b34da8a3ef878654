//! Password verifier inputs.
//!
//! Passwords are never stored. The account row holds the keyed HMAC of a
//! canonical input that binds the password to the normalised email, so a
//! verifier cannot be replayed against another account.
//!
//! The HMAC is a single fast hash, not a slow password hash. Secrecy of the
//! OpenBao transit key is the only barrier against offline brute force of a
//! leaked verifier, so the key must never leave OpenBao.

use zeroize::Zeroizing;

const PASSWORD_INPUT_VERSION: &str = "v1";

/// Build the HMAC input for `password` on the account identified by `email`.
#[must_use]
pub fn build_password_input(email: &str, password: &str) -> Zeroizing<Vec<u8>> {
    let email = wave::accounts::normalize_email(email);

    let mut input = Zeroizing::new(Vec::with_capacity(
        email.len() + password.len() + PASSWORD_INPUT_VERSION.len() + 10,
    ));

    input.extend_from_slice(b"password:");
    input.extend_from_slice(PASSWORD_INPUT_VERSION.as_bytes());
    input.push(b':');
    input.extend_from_slice(email.as_bytes());
    input.push(b':');
    input.extend_from_slice(password.as_bytes());

    input
}
