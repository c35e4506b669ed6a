// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Configuration of the driver.

use crate::{FibError, Index, Steps};

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration the `fibonacci` binary runs with.
pub static DEFAULT_CONFIG: Config = Config::new();

/// Parameters of a driver run.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Index of the Fibonacci number to compute
    pub index: Index,

    /// Step budget given to each strategy, unbounded when absent
    pub step_limit: Option<Steps>,
}

impl Config {
    /// Creates a new [`Config`] with default values
    pub const fn new() -> Self {
        Self {
            index: 10,
            step_limit: None,
        }
    }

    /// Reads a [`Config`] from a TOML file. Missing keys keep their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FibError> {
        let path = path.as_ref();
        let config_string = fs::read_to_string(path).map_err(|e| {
            FibError::ConfigurationError(format!(
                "could not read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&config_string)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parses a [`Config`] from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, FibError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
