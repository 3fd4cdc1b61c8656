//! Per-test setup and teardown.
//!
//! Every test starts logged out, is walked through login by the setup hook,
//! and ends logged out again via the teardown hook. No test skips login.

use anyhow::Result;

use crate::browser::PageHandle;
use crate::config::Environment;
use crate::pages::{admin_panel::ADMIN_PATH, AdminPanelPage, LoginPage};

pub struct Hooks<'a> {
    page: &'a PageHandle,
    env: &'a Environment,
    base_url: &'a str,
}

impl<'a> Hooks<'a> {
    pub fn new(page: &'a PageHandle, env: &'a Environment, base_url: &'a str) -> Self {
        Self {
            page,
            env,
            base_url,
        }
    }

    /// Navigate to the admin panel and log in.
    pub async fn before_each(&self) -> Result<()> {
        log::debug!("before each: navigate and log in");
        let admin_url = format!("{}{}", self.base_url.trim_end_matches('/'), ADMIN_PATH);
        self.page.goto(&admin_url).await?;
        LoginPage::new(self.page, self.env).login().await
    }

    /// Log out and release the page. A failure here is logged and swallowed:
    /// the session may already be unusable after a failed test, and teardown
    /// must not change a test's outcome.
    pub async fn after_each(&self) {
        log::debug!("after each: log out and release the page");
        if let Err(e) = AdminPanelPage::new(self.page, self.env).logout().await {
            log::warn!("logout during teardown failed: {:#}", e);
        }
        if let Err(e) = self.page.release().await {
            log::warn!("page release during teardown failed: {:#}", e);
        }
    }
}
