//! LP solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::solver::HighsOptions;
use crate::error::{ConfigError, Result};

/// Settings for the HiGHS backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Solve the integral problem instead of the LP relaxation.
    ///
    /// The relaxation of the degree-constrained assignment is usually
    /// integral already; enable this when fractional output shows up.
    #[serde(default)]
    pub integral: bool,

    /// Wall-clock limit per solve in seconds. Unlimited when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<f64>,

    /// Forward the solver's own progress log to stdout.
    ///
    /// Ignored by `match --json`, which owns stdout.
    #[serde(default)]
    pub verbose: bool,
}

impl SolverConfig {
    /// Configured time limit as a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns an error when the limit is not positive or does not fit a
    /// `Duration`.
    #[allow(clippy::result_large_err)]
    pub fn time_limit(&self) -> Result<Option<Duration>> {
        let Some(secs) = self.time_limit_secs else {
            return Ok(None);
        };
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: "time_limit_secs",
            reason,
        };
        if !(secs.is_finite() && secs > 0.0) {
            return Err(invalid("must be greater than 0".to_string()).into());
        }
        Duration::try_from_secs_f64(secs)
            .map(Some)
            .map_err(|e| invalid(e.to_string()).into())
    }

    /// Convert to HiGHS adapter options.
    ///
    /// # Errors
    ///
    /// Returns an error when the time limit is invalid.
    #[allow(clippy::result_large_err)]
    pub fn highs_options(&self) -> Result<HighsOptions> {
        Ok(HighsOptions {
            time_limit: self.time_limit()?,
            verbose: self.verbose,
        })
    }
}
