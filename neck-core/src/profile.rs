//! Neck profile persistence.
//!
//! A profile is the serializable wrapper a front end saves to disk and
//! loads back: a neck configuration plus an optional display name. File
//! and JSON handling live with the caller; this module only defines the
//! shape.

use serde::{Deserialize, Serialize};

use crate::error::NeckError;
use crate::neck::{Neck, NeckConfig};

/// A saved neck setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeckProfile {
    /// Optional display name, e.g. "practice bass".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub config: NeckConfig,
}

impl NeckProfile {
    pub fn new(config: NeckConfig) -> Self {
        Self { name: None, config }
    }

    /// Build the neck this profile describes, re-validating the config
    /// in case it was edited on disk.
    pub fn build(&self) -> Result<Neck, NeckError> {
        Neck::new(self.config.clone())
    }
}
