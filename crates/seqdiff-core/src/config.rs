//! Engine options
//!
//! [`DiffOptions`] is handed to [`Diff::with_options`](crate::Diff::with_options)
//! and can be loaded from TOML. Missing keys take the same values as
//! [`DiffOptions::default`]:
//!
//! ```
//! use seqdiff_core::config::DiffOptions;
//!
//! let opts = DiffOptions::from_toml_str("[popularity]\nmin_len = 50\ndivisor = 10\n").unwrap();
//! assert_eq!(opts.popularity.limit(50), Some(6));
//!
//! let off = DiffOptions::from_toml_str("[popularity]\nenabled = false\n").unwrap();
//! assert_eq!(off, DiffOptions::unpruned());
//! ```

use crate::errors::{DiffError, Result};
use serde::{Deserialize, Serialize};

/// Rule for dropping very frequent elements from the B index.
///
/// While `enabled` and once B holds at least `min_len` elements, any
/// identity occurring more than `floor(len(B) / divisor) + 1` times is never
/// used as an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularityPolicy {
    pub enabled: bool,
    pub min_len: usize,
    pub divisor: usize,
}

impl PopularityPolicy {
    pub const DEFAULT: PopularityPolicy = PopularityPolicy {
        enabled: true,
        min_len: 200,
        divisor: 100,
    };

    /// Default thresholds, switched off.
    pub const DISABLED: PopularityPolicy = PopularityPolicy {
        enabled: false,
        ..Self::DEFAULT
    };

    /// Maximum allowed occurrence count for a B of length `b_len`, or `None`
    /// when pruning does not apply.
    pub fn limit(&self, b_len: usize) -> Option<usize> {
        if !self.enabled || self.divisor == 0 || b_len < self.min_len {
            return None;
        }
        Some(b_len / self.divisor + 1)
    }

    fn validate(&self) -> Result<()> {
        if self.enabled && self.divisor == 0 {
            return Err(DiffError::InvalidConfig {
                reason: "popularity.divisor must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PopularityPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Options shared by every engine instantiation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Popularity pruning for the B index
    pub popularity: PopularityPolicy,
}

impl DiffOptions {
    /// Options used by [`Diff::new`](crate::Diff::new): default pruning.
    pub fn pruned() -> Self {
        Self {
            popularity: PopularityPolicy::DEFAULT,
        }
    }

    /// Options used by [`Diff::with_key`](crate::Diff::with_key): no pruning.
    pub fn unpruned() -> Self {
        Self {
            popularity: PopularityPolicy::DISABLED,
        }
    }

    /// Parse and validate options from a TOML document.
    ///
    /// Absent tables and keys fall back to [`DiffOptions::default`];
    /// `popularity.enabled = false` turns pruning off.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the document is not valid TOML, has the wrong
    /// shape, or enables pruning with `popularity.divisor = 0`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let opts: DiffOptions = toml::from_str(text).map_err(|e| DiffError::InvalidConfig {
            reason: e.to_string(),
        })?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check option values that serde cannot express.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when pruning is enabled with a zero divisor.
    pub fn validate(&self) -> Result<()> {
        self.popularity.validate()
    }
}
