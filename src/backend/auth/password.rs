/**
 * Password Hashing
 *
 * Salted one-way hashing of user passwords with bcrypt. Every call to
 * `hash` draws a fresh salt, so two hashes of the same password differ while
 * both verify.
 *
 * Both operations run on tokio's blocking pool instead of an async worker
 * thread.
 */

use bcrypt::BcryptError;
use thiserror::Error;

/// Errors raised while hashing or verifying passwords
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input (for example a malformed stored hash)
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    /// The blocking task running bcrypt panicked or was cancelled
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a freshly generated salt
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hashed)
    }

    /// Check a plaintext candidate against a stored hash
    ///
    /// A wrong password yields `Ok(false)`; only a stored hash bcrypt cannot
    /// parse is an error.
    pub async fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let stored_hash = stored_hash.to_owned();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &stored_hash)).await??;
        Ok(matches)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
