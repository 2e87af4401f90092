use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher as HasherTrait};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let params = Params::new(4 * 1024, 3, 1, None).expect("Invalid Argon2 params");

        Self { params }
    }

    /// Create with custom params (for testing or different environments)
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).expect("Invalid Argon2 params");

        Self { params }
    }

    /// Environment-based configuration
    pub fn from_env() -> Self {
        let memory_kib: u32 = std::env::var("ARGON2_MEMORY_KIB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4 * 1024);

        let iterations: u32 = std::env::var("ARGON2_ITERATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let parallelism: u32 = std::env::var("ARGON2_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let parsed = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            Ok(argon2.verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
