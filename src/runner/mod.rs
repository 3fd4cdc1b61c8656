//! Sequential test executor.
//!
//! One worker, declared order, one browser session for the whole run and a
//! fresh page per test attempt. A failed or timed-out test is re-executed
//! once in full (login through logout); only the final outcome reaches the
//! observer. Test failures never halt the run.

pub mod context;

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use crate::browser::{BrowserConfig, BrowserSession};
use crate::config::{Environment, RunConfig};
use crate::hooks::Hooks;
use crate::reporter::{RunObserver, TestId, TestOutcome};

pub use context::TestContext;

pub type TestFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
pub type TestFn = for<'a> fn(&'a TestContext<'a>) -> TestFuture<'a>;

/// A declared test scenario.
pub struct TestCase {
    pub suite: &'static str,
    pub name: &'static str,
    pub run: TestFn,
}

impl TestCase {
    pub fn id(&self) -> TestId {
        TestId::new(self.suite, self.name)
    }
}

/// Which declared cases actually execute; everything else is recorded as
/// skipped.
#[derive(Default)]
pub struct TestFilter {
    pub suite: Option<String>,
    pub name_contains: Option<String>,
}

impl TestFilter {
    pub fn matches(&self, case: &TestCase) -> bool {
        if let Some(ref suite) = self.suite {
            if !case.suite.eq_ignore_ascii_case(suite) {
                return false;
            }
        }
        if let Some(ref needle) = self.name_contains {
            if !case
                .name
                .to_lowercase()
                .contains(needle.to_lowercase().as_str())
            {
                return false;
            }
        }
        true
    }
}

/// Run the given cases sequentially and report into `observer`. Returns the
/// overall outcome: failed as soon as any executed test fails.
pub async fn run_suite(
    cases: &[TestCase],
    env: &Environment,
    run_config: &RunConfig,
    browser_config: BrowserConfig,
    filter: &TestFilter,
    observer: &mut dyn RunObserver,
) -> Result<TestOutcome> {
    let run_id = Uuid::new_v4();
    println!(
        "\n{} Test run started: {} ({} declared tests, {} worker)",
        "▶".green().bold(),
        run_id.to_string().cyan(),
        cases.len(),
        run_config.workers
    );

    let session = BrowserSession::launch(browser_config).await?;
    let base_url = session.config().base_url.clone();

    let mut overall = TestOutcome::Passed;
    for case in cases {
        if !filter.matches(case) {
            println!("  {} {} > {}", "○".yellow(), case.suite, case.name.dimmed());
            observer.on_test_completed(&case.id(), TestOutcome::Skipped);
            continue;
        }

        let outcome = run_case(case, &session, env, &base_url, run_config).await;
        if !outcome.is_passed() {
            overall = TestOutcome::Failed;
        }
        observer.on_test_completed(&case.id(), outcome);
    }

    println!(
        "\n{} Test run finished: {}",
        "■".blue().bold(),
        run_id.to_string().cyan()
    );
    observer.on_run_completed(overall);
    Ok(overall)
}

/// Execute one case, retrying a failure once in full. Only the final
/// attempt's outcome is returned.
async fn run_case(
    case: &TestCase,
    session: &BrowserSession,
    env: &Environment,
    base_url: &str,
    run_config: &RunConfig,
) -> TestOutcome {
    let attempts = 1 + run_config.retries;
    let mut outcome = TestOutcome::Failed;

    for attempt in 1..=attempts {
        if attempt > 1 {
            println!(
                "  {} retry {}/{}: {} > {}",
                "↻".yellow(),
                attempt - 1,
                run_config.retries,
                case.suite,
                case.name
            );
        }

        let started = Instant::now();
        outcome = run_attempt(case, session, env, base_url, run_config.test_timeout_ms).await;
        let elapsed_ms = started.elapsed().as_millis();

        match outcome {
            TestOutcome::Passed => {
                println!(
                    "  {} {} > {} ({}ms)",
                    "✓".green(),
                    case.suite,
                    case.name,
                    elapsed_ms
                );
                break;
            }
            TestOutcome::TimedOut => {
                println!(
                    "  {} {} > {} timed out after {}ms",
                    "✗".red(),
                    case.suite,
                    case.name,
                    run_config.test_timeout_ms
                );
            }
            _ => {
                println!(
                    "  {} {} > {} ({}ms)",
                    "✗".red(),
                    case.suite,
                    case.name,
                    elapsed_ms
                );
            }
        }
    }

    outcome
}

/// One full attempt: fresh page, login, test body under the per-test
/// timeout, teardown. Teardown runs regardless of the body's outcome.
async fn run_attempt(
    case: &TestCase,
    session: &BrowserSession,
    env: &Environment,
    base_url: &str,
    timeout_ms: u64,
) -> TestOutcome {
    let page = match session.new_page().await {
        Ok(page) => page,
        Err(e) => {
            log::error!("could not open a page for {}: {:#}", case.name, e);
            return TestOutcome::Failed;
        }
    };

    let hooks = Hooks::new(&page, env, base_url);
    let ctx = TestContext::new(&page, env, base_url);

    // Setup counts toward the test's time budget, teardown does not.
    let timed = tokio::time::timeout(Duration::from_millis(timeout_ms), async {
        hooks.before_each().await?;
        (case.run)(&ctx).await
    })
    .await;

    hooks.after_each().await;

    match timed {
        Err(_elapsed) => TestOutcome::TimedOut,
        Ok(Err(e)) => {
            println!("    {}", format!("{:#}", e).red());
            TestOutcome::Failed
        }
        Ok(Ok(())) => TestOutcome::Passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(suite: &'static str, name: &'static str) -> TestCase {
        TestCase {
            suite,
            name,
            run: |_ctx| Box::pin(async { Ok(()) }),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TestFilter::default();
        assert!(filter.matches(&case("Rooms", "create a room")));
    }

    #[test]
    fn suite_filter_is_case_insensitive() {
        let filter = TestFilter {
            suite: Some("rooms".to_string()),
            name_contains: None,
        };
        assert!(filter.matches(&case("Rooms", "create a room")));
        assert!(!filter.matches(&case("Login", "smoke")));
    }

    #[test]
    fn name_filter_matches_substrings() {
        let filter = TestFilter {
            suite: None,
            name_contains: Some("DELETE".to_string()),
        };
        assert!(filter.matches(&case("Rooms", "Test that you can delete a room.")));
        assert!(!filter.matches(&case("Rooms", "Test that you can create a room.")));
    }
}
