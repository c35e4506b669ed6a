// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! #Fibonacci-Ref
//!
//! Fibonacci numbers computed by naive recursion and by iterative
//! accumulation, for cross-checking one against the other.
#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod meter;
mod sequence;
mod strategy;

pub use config::{Config, DEFAULT_CONFIG};
pub use driver::run;
pub use error::FibError;
pub use meter::{MeterResult, StepMeter, Steps};
pub use sequence::{
    iterative, iterative_metered, recursive, recursive_metered, Index, Value,
    MAX_INDEX,
};
pub use strategy::{Report, Strategy};
