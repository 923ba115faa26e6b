use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Memory cost in KiB.
const MEMORY_COST_KIB: u32 = 19 * 1024;
/// Number of passes over memory.
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing with Argon2id. The cost parameters
/// are fixed at construction and written into every PHC hash string, so
/// verification always uses the parameters the hash was produced with.
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher configured with the fixed Argon2id work factor
    pub fn new() -> Self {
        Self {
            params: Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
                .unwrap_or_default(),
        }
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside the ranges Argon2 accepts
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        Params::new(memory_kib, iterations, parallelism, None)
            .map(|params| Self { params })
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Abcd1234!";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains(password));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("Abcd1234?", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("Abcd1234!").unwrap();
        let second = hasher.hash("Abcd1234!").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_embeds_fixed_work_factor() {
        let hash = PasswordHasher::new().hash("Abcd1234!").unwrap();
        assert!(hash.contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn test_verify_hash_from_other_params() {
        let cheap = PasswordHasher::with_params(1024, 1, 1).unwrap();
        let hash = cheap.hash("Abcd1234!").unwrap();

        assert!(PasswordHasher::new().verify("Abcd1234!", &hash).unwrap());
    }

    #[test]
    fn test_with_params_rejects_out_of_range() {
        let result = PasswordHasher::with_params(1, 0, 1);
        assert!(matches!(result, Err(PasswordError::InvalidParams(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
