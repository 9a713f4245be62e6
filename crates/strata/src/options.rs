//! Layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_ITERATIONS: usize = 4;
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_BALANCE_MIN_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Upper bound on forward+backward barycenter passes.
    pub max_iterations: usize,
    pub balance: BalanceOptions,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            balance: BalanceOptions::default(),
        }
    }
}

/// Controls the split of overly wide layers after layer assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BalanceOptions {
    pub enabled: bool,
    /// A layer is split when its node count exceeds `threshold * layer_count`.
    pub threshold: f64,
    /// Layers narrower than this are never split.
    pub min_width: usize,
}

impl Default for BalanceOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_BALANCE_THRESHOLD,
            min_width: DEFAULT_BALANCE_MIN_WIDTH,
        }
    }
}

impl BalanceOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

impl LayoutOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_balance(mut self, balance: BalanceOptions) -> Self {
        self.balance = balance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::InvalidOptions {
                message: "maxIterations must be at least 1".to_string(),
            });
        }
        let threshold = self.balance.threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(Error::InvalidOptions {
                message: format!("balance.threshold must be a positive number, got {threshold}"),
            });
        }
        if self.balance.min_width < 2 {
            return Err(Error::InvalidOptions {
                message: format!(
                    "balance.minWidth must be at least 2, got {}",
                    self.balance.min_width
                ),
            });
        }
        Ok(())
    }
}
