// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use fibonacci_ref::{
    iterative, recursive, FibError, Report, Strategy, MAX_INDEX,
};

fn fibonacci_reference(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fibonacci_reference(n - 1) + fibonacci_reference(n - 2)
    }
}

#[test]
fn strategies_agree() {
    for n in 0..=30 {
        let r = recursive(n).unwrap();
        let i = iterative(n).unwrap();

        assert_eq!(r, i, "strategies disagree at {}", n);
        assert_eq!(r, fibonacci_reference(n as u64));
    }
}

#[test]
fn base_cases() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.compute(0).unwrap(), 0);
        assert_eq!(strategy.compute(1).unwrap(), 1);
    }
}

#[test]
fn known_values() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.compute(2).unwrap(), 1);
        assert_eq!(strategy.compute(10).unwrap(), 55);
        assert_eq!(strategy.compute(20).unwrap(), 6765);
    }

    assert_eq!(iterative(50).unwrap(), 12_586_269_025);
}

#[test]
fn monotonic() {
    for n in 0..25 {
        assert!(recursive(n + 1).unwrap() >= recursive(n).unwrap());
    }

    for n in 0..MAX_INDEX {
        assert!(iterative(n + 1).unwrap() >= iterative(n).unwrap());
    }
}

#[test]
fn negative_index() {
    for strategy in Strategy::ALL {
        assert!(matches!(
            strategy.compute(-1),
            Err(FibError::NegativeIndex(-1))
        ));
        assert!(matches!(
            strategy.compute(i64::MIN),
            Err(FibError::NegativeIndex(i64::MIN))
        ));
    }
}

#[test]
fn overflow_boundary() {
    assert_eq!(iterative(MAX_INDEX).unwrap(), 12_200_160_415_121_876_738);

    assert!(matches!(
        iterative(MAX_INDEX + 1),
        Err(FibError::Overflow(94))
    ));
    assert!(matches!(iterative(1_000), Err(FibError::Overflow(1_000))));

    assert!(matches!(
        recursive(MAX_INDEX + 1),
        Err(FibError::Overflow(94))
    ));
    assert!(matches!(
        recursive(1_000_000),
        Err(FibError::Overflow(1_000_000))
    ));
}

#[test]
fn report_display() {
    let recursive = Report::compute(Strategy::Recursive, 10).unwrap();
    let iterative = Report::compute(Strategy::Iterative, 10).unwrap();

    assert_eq!(recursive.value, 55);
    assert_eq!(recursive.to_string(), "Fibonacci(10) = 55 (recursive)");
    assert_eq!(iterative.to_string(), "Fibonacci(10) = 55 (iterative)");
}

#[test]
fn error_messages() {
    assert_eq!(
        FibError::NegativeIndex(-3).to_string(),
        "Fibonacci is not defined for negative index -3"
    );
    assert_eq!(FibError::Overflow(94).to_string(), "Fibonacci(94) overflows a u64");
}
