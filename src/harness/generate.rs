//! Randomized test fixtures.
//!
//! Fresh values per test keep assertions honest: a test that accidentally
//! compares against a hardcoded constant fails as soon as the fixture varies.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generated credentials for populating a login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFixture {
    /// Generated username.
    pub username: String,
    /// Generated password.
    pub password: String,
}

/// Random username/password pair.
#[must_use]
pub fn login_form() -> LoginFixture {
    LoginFixture {
        username: random_string(8),
        password: random_string(16),
    }
}

/// Random alphanumeric string of the given length.
#[must_use]
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
