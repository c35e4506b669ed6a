// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::FibError;

/// Type alias for computation steps
pub type Steps = u64;

#[derive(Debug, PartialEq, Eq)]
/// Outcome of charging a [`StepMeter`]
pub enum MeterResult {
    /// There were enough steps left
    Proceed,
    /// The budget is exhausted
    OutOfSteps,
}

impl MeterResult {
    /// Returns `true` if the charge exhausted the budget
    pub const fn is_out_of_steps(&self) -> bool {
        match *self {
            MeterResult::OutOfSteps => true,
            MeterResult::Proceed => false,
        }
    }
}

#[derive(Debug)]
/// Struct to keep track of the steps a computation performs
pub struct StepMeter {
    /// Initial budget of steps.
    initial: Steps,
    /// Steps left from the initial budget. Can reach zero.
    steps_left: Steps,
}

impl StepMeter {
    /// Creates a new `StepMeter` with the given budget.
    pub fn with_limit(initial: Steps) -> StepMeter {
        StepMeter {
            initial,
            steps_left: initial,
        }
    }

    /// Creates a meter that never runs out in practice.
    pub fn unlimited() -> StepMeter {
        Self::with_limit(Steps::MAX)
    }

    /// Deduct the specified amount of steps from the meter
    pub fn charge(&mut self, amount: Steps) -> MeterResult {
        match self.steps_left.checked_sub(amount) {
            // Falling below zero consumes whatever was left.
            None => {
                self.steps_left = 0;
                MeterResult::OutOfSteps
            }
            Some(val) => {
                self.steps_left = val;
                MeterResult::Proceed
            }
        }
    }

    pub(crate) fn try_charge(&mut self, amount: Steps) -> Result<(), FibError> {
        if self.charge(amount).is_out_of_steps() {
            return Err(FibError::OutOfSteps);
        }
        Ok(())
    }

    /// Returns how many steps are left from the initial budget.
    pub fn steps_left(&self) -> Steps {
        self.steps_left
    }

    /// Returns how many steps were spent.
    pub fn spent(&self) -> Steps {
        self.initial - self.steps_left
    }
}
