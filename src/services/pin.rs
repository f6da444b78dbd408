//! PIN service
//!
//! Manages the access PIN used to gate the app. Only an Argon2id hash is
//! persisted, never the PIN itself. Biometric prompts are handled by the
//! platform; this service owns the fallback credential.
//!
//! The PIN lives under its own storage key and deliberately survives
//! `clear_all_data`: wiping medication data must not lock the user out.

use crate::config::{MAX_PIN_LENGTH, MIN_PIN_LENGTH, PIN_KEY};
use crate::error::{AppError, Result};
use crate::storage::KvStore;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use serde::{Deserialize, Serialize};

/// Persisted PIN credential (PHC-format Argon2id hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PinRecord {
    hash: String,
}

/// Service for managing the access PIN
#[derive(Clone)]
pub struct PinService {
    store: KvStore,
}

impl PinService {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Hash and persist a new PIN, replacing any existing one
    pub async fn set_pin(&self, pin: &str) -> Result<()> {
        if pin.len() < MIN_PIN_LENGTH || pin.len() > MAX_PIN_LENGTH {
            return Err(AppError::Generic(format!(
                "PIN must be between {} and {} characters",
                MIN_PIN_LENGTH, MAX_PIN_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| AppError::Generic(format!("PIN hashing failed: {}", e)))?
            .to_string();

        self.store.set_value(PIN_KEY, &PinRecord { hash }).await?;

        tracing::info!("Access PIN updated");
        Ok(())
    }

    /// Verify a PIN attempt against the stored hash
    pub async fn verify_pin(&self, pin: &str) -> Result<bool> {
        let record: PinRecord = self
            .store
            .get_value(PIN_KEY)
            .await?
            .ok_or(AppError::PinNotSet)?;

        let parsed = PasswordHash::new(&record.hash)
            .map_err(|e| AppError::Generic(format!("Stored PIN hash is invalid: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(pin.as_bytes(), &parsed)
            .is_ok())
    }

    /// Whether a PIN has been set
    pub async fn has_pin(&self) -> Result<bool> {
        Ok(self.store.get_value::<PinRecord>(PIN_KEY).await?.is_some())
    }

    /// Remove the stored PIN. Removing an absent PIN succeeds.
    pub async fn clear_pin(&self) -> Result<()> {
        self.store.remove(PIN_KEY).await?;
        tracing::info!("Access PIN removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_service() -> (PinService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = KvStore::new(temp_dir.path().join("data"));
        store.initialize().await.unwrap();
        (PinService::new(store), temp_dir)
    }

    #[tokio::test]
    async fn test_set_and_verify_pin() {
        let (service, _temp) = create_test_service().await;

        service.set_pin("2468").await.unwrap();

        assert!(service.verify_pin("2468").await.unwrap());
        assert!(!service.verify_pin("1357").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_without_pin_is_an_error() {
        let (service, _temp) = create_test_service().await;

        let result = service.verify_pin("2468").await;
        assert!(matches!(result, Err(AppError::PinNotSet)));
    }

    #[tokio::test]
    async fn test_pin_length_limits() {
        let (service, _temp) = create_test_service().await;

        assert!(service.set_pin("123").await.is_err());
        assert!(service.set_pin(&"9".repeat(33)).await.is_err());
        assert!(service.set_pin("1234").await.is_ok());
    }

    #[tokio::test]
    async fn test_has_and_clear_pin() {
        let (service, _temp) = create_test_service().await;

        assert!(!service.has_pin().await.unwrap());

        service.set_pin("2468").await.unwrap();
        assert!(service.has_pin().await.unwrap());

        service.clear_pin().await.unwrap();
        assert!(!service.has_pin().await.unwrap());

        // Clearing again is a no-op
        service.clear_pin().await.unwrap();
    }

    #[tokio::test]
    async fn test_set_pin_replaces_existing() {
        let (service, _temp) = create_test_service().await;

        service.set_pin("2468").await.unwrap();
        service.set_pin("8642").await.unwrap();

        assert!(!service.verify_pin("2468").await.unwrap());
        assert!(service.verify_pin("8642").await.unwrap());
    }
}
