use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_TOKEN_LIFETIME_SECS,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Session token lifetime; `exp - iat` of every issued token
    pub token_lifetime_secs: u64,
    /// RSA private key (PEM). Only the identity service loads this.
    pub private_key_path: Option<String>,
    /// RSA public key (PEM) used by every verifying service
    pub public_key_path: Option<String>,
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            private_key_path: None,
            public_key_path: None,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_lifetime_secs == 0 {
            return Err(ConfigError::auth("auth.token_lifetime_secs must be > 0"));
        }

        if i64::try_from(self.token_lifetime_secs).is_err() {
            return Err(ConfigError::auth("auth.token_lifetime_secs is out of range"));
        }

        if self.hash_iterations == 0 || self.hash_parallelism == 0 {
            return Err(ConfigError::auth(
                "auth.hash_iterations and auth.hash_parallelism must be > 0",
            ));
        }

        // Argon2 needs at least 8 KiB per lane
        let min_memory_kib = self.hash_parallelism.saturating_mul(8);
        if self.hash_memory_kib < min_memory_kib {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be >= {} for parallelism {}",
                min_memory_kib, self.hash_parallelism
            )));
        }

        Ok(())
    }

    /// Read the private key PEM, resolving relative paths against `config_dir`.
    pub fn load_private_key(&self, config_dir: &Path) -> ConfigErrorResult<String> {
        let path = self
            .private_key_path
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.private_key_path is required"))?;
        Self::read_key(config_dir, path, "auth.private_key_path")
    }

    /// Read the public key PEM, resolving relative paths against `config_dir`.
    pub fn load_public_key(&self, config_dir: &Path) -> ConfigErrorResult<String> {
        let path = self
            .public_key_path
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.public_key_path is required"))?;
        Self::read_key(config_dir, path, "auth.public_key_path")
    }

    fn read_key(config_dir: &Path, path: &str, setting: &str) -> ConfigErrorResult<String> {
        let resolved = Self::resolve(config_dir, path);

        if !resolved.exists() {
            return Err(ConfigError::auth(format!(
                "{} file not found: {}",
                setting,
                resolved.display()
            )));
        }

        let pem = std::fs::read_to_string(&resolved).map_err(|e| ConfigError::Io {
            path: resolved.clone(),
            source: e,
        })?;

        if !pem.contains("-----BEGIN") {
            return Err(ConfigError::auth(format!(
                "{} does not contain a PEM key: {}",
                setting,
                resolved.display()
            )));
        }

        Ok(pem)
    }

    fn resolve(config_dir: &Path, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }
}
