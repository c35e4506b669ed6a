// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::{Config, FibError, Report, StepMeter, Strategy};

use std::io::Write;
use tracing::{info, trace_span};

/// Computes `Fibonacci(config.index)` with every [`Strategy`] and writes one
/// line per strategy to `out`.
///
/// Each strategy gets its own meter when `config.step_limit` is set.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), FibError> {
    let _span = trace_span!("run", index = config.index).entered();

    for strategy in Strategy::ALL {
        let report = match config.step_limit {
            Some(limit) => {
                let mut meter = StepMeter::with_limit(limit);
                Report::compute_metered(strategy, config.index, &mut meter)?
            }
            None => Report::compute(strategy, config.index)?,
        };

        info!(%strategy, value = report.value, "computed");
        writeln!(out, "{}", report)?;
    }

    Ok(())
}
