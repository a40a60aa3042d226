//! In-memory configuration store.
//!
//! Implements [`ConfigPort`] over a RAM blob encoded with `postcard`,
//! mirroring what a flash-backed store persists.  Used on the host and
//! as the fallback when persistent storage is unavailable.

use core::cell::RefCell;

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::WatchConfig;

#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blob: RefCell<Option<Vec<u8>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self {
            blob: RefCell::new(None),
        }
    }

    /// Seed the store with raw bytes (e.g. a blob read back from flash).
    pub fn with_blob(bytes: Vec<u8>) -> Self {
        Self {
            blob: RefCell::new(Some(bytes)),
        }
    }

    /// Whether a config has been saved.
    pub fn has_config(&self) -> bool {
        self.blob.borrow().is_some()
    }
}

impl ConfigPort for MemoryConfigStore {
    fn load(&self) -> Result<WatchConfig, ConfigError> {
        match self.blob.borrow().as_deref() {
            Some(bytes) => {
                let cfg: WatchConfig =
                    postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
                cfg.validate()?;
                info!("MemoryConfigStore: loaded config ({} bytes)", bytes.len());
                Ok(cfg)
            }
            None => {
                info!("MemoryConfigStore: no stored config, using defaults");
                Ok(WatchConfig::default())
            }
        }
    }

    fn save(&self, config: &WatchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        info!("MemoryConfigStore: config saved ({} bytes)", bytes.len());
        *self.blob.borrow_mut() = Some(bytes);
        Ok(())
    }
}
