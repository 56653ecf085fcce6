use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Credential verification front for a password hasher.
///
/// Wraps hashing and verification so callers never branch on whether an
/// account exists: verification runs either way.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    absent_user_hash: String,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// Hashes a throwaway password up front so that verification against
    /// a missing account costs the same as verification against a real
    /// one.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher configured with the deployment's cost
    ///
    /// # Errors
    /// * `PasswordError` - Hashing the throwaway password failed
    pub fn new(password_hasher: PasswordHasher) -> Result<Self, PasswordError> {
        let absent_user_hash = password_hasher.hash("placeholder-credential")?;

        Ok(Self {
            password_hasher,
            absent_user_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against an optionally present stored hash.
    ///
    /// When no hash is available (unknown account), the password is
    /// verified against a fixed placeholder hash and the result is
    /// discarded, keeping the timing profile of lookup misses aligned
    /// with mismatches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored hash, if an account was found
    ///
    /// # Returns
    /// True only when an account hash was present and the password matches
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is malformed or verification failed
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<bool, PasswordError> {
        match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                let _ = self
                    .password_hasher
                    .verify(password, &self.absent_user_hash)?;
                Ok(false)
            }
        }
    }
}
