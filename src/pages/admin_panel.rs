//! Admin panel shell: navigation bar and logout.

use anyhow::{bail, Result};

use crate::browser::PageHandle;
use crate::config::Environment;
use crate::pages::LoginPage;

pub const ADMIN_PATH: &str = "/#/admin";

pub struct AdminPanelPage<'a> {
    page: &'a PageHandle,
    env: &'a Environment,
}

impl<'a> AdminPanelPage<'a> {
    pub fn new(page: &'a PageHandle, env: &'a Environment) -> Self {
        Self { page, env }
    }

    fn nav_link(&self, label: &str) -> String {
        format!("a:has-text(\"{}\")", label)
    }

    /// Every nav element the logged-in panel is expected to show.
    pub async fn assert_panel_visible(&self) -> Result<()> {
        let labels = &self.env.labels;

        let url = self.page.current_url().await?;
        if !url.contains("/admin") {
            bail!("expected the admin panel URL after login, got {}", url);
        }

        let expected_links = [
            labels.rooms_nav_button.as_str(),
            labels.report_nav_button.as_str(),
            labels.branding_nav_button.as_str(),
            labels.nav_header.as_str(),
            labels.front_page_nav_button.as_str(),
            labels.logout_nav_button.as_str(),
        ];
        for label in expected_links {
            let selector = self.nav_link(label);
            if !self.page.wait_for_selector(&selector, 10_000).await? {
                bail!("nav link \"{}\" is not visible", label);
            }
        }

        // Messages nav is an icon, no label to match on.
        if !self.page.is_visible("nav a > i").await? {
            bail!("messages nav icon is not visible");
        }

        Ok(())
    }

    /// Click Logout and wait for the login form to come back.
    pub async fn logout(&self) -> Result<()> {
        let logout = self.nav_link(&self.env.labels.logout_nav_button);
        self.page.click(&logout).await?;

        if !self
            .page
            .wait_for_selector(LoginPage::submit_button_selector(), 10_000)
            .await?
        {
            bail!("login form did not reappear after logout");
        }
        Ok(())
    }
}
