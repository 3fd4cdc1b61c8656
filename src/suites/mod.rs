//! Declared test scenarios.

pub mod login;
pub mod rooms;

use crate::runner::TestCase;

/// Every declared case, in execution order.
pub fn all_cases() -> Vec<TestCase> {
    let mut cases = rooms::cases();
    cases.extend(login::cases());
    cases
}
