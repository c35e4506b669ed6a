// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::Index;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
/// The errors that can happen while computing a Fibonacci number
pub enum FibError {
    /// The sequence is only defined for non-negative indices
    #[error("Fibonacci is not defined for negative index {0}")]
    NegativeIndex(Index),
    /// The value at the given index does not fit in a `Value`
    #[error("Fibonacci({0}) overflows a u64")]
    Overflow(Index),
    /// The computation exhausted its step budget
    #[error("Computation ran out of steps")]
    OutOfSteps,
    /// Input / Output error
    #[error("Input / Output error")]
    IOError(#[from] io::Error),
    /// The configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<toml::de::Error> for FibError {
    fn from(e: toml::de::Error) -> Self {
        FibError::ConfigurationError(format!(
            "error when parsing configuration file: {}",
            e
        ))
    }
}
