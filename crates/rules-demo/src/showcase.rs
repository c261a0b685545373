//! Constant rules and operators, evaluated once each.

use behavior_rules::{Status, execute, fail, running, success};

/// Labelled results for the operator showcase, in display order.
pub fn rows() -> Vec<(&'static str, Status)> {
    let complicated = !!!!!!!!success();

    vec![
        ("true", execute(&success())),
        ("false", execute(&fail())),
        ("it's complicated", execute(&complicated)),
        ("false & false", execute(&(fail() & fail()))),
        ("true & false", execute(&(success() & fail()))),
        ("true & true", execute(&(success() & success()))),
        ("running & true", execute(&(running() & success()))),
    ]
}
