//! Login screen.

use anyhow::{bail, Result};

use crate::browser::PageHandle;
use crate::config::Environment;
use crate::pages::AdminPanelPage;

const LOGIN_HEADER: &str = "[data-testid=\"login-header\"]";
const USERNAME: &str = "[data-testid=\"username\"]";
const PASSWORD: &str = "[data-testid=\"password\"]";
const SUBMIT: &str = "[data-testid=\"submit\"]";

pub struct LoginPage<'a> {
    page: &'a PageHandle,
    env: &'a Environment,
}

impl<'a> LoginPage<'a> {
    pub fn new(page: &'a PageHandle, env: &'a Environment) -> Self {
        Self { page, env }
    }

    pub fn submit_button_selector() -> &'static str {
        SUBMIT
    }

    /// Log in with the configured admin credentials and verify the admin
    /// panel came up: URL, nav links, header.
    pub async fn login(&self) -> Result<()> {
        let admin_panel = AdminPanelPage::new(self.page, self.env);

        // Preconditions: the login form is actually on screen.
        if !self.page.wait_for_selector(LOGIN_HEADER, 10_000).await? {
            bail!("login header did not appear");
        }
        let header_text = self.page.inner_text(LOGIN_HEADER).await?;
        if header_text != self.env.labels.login_header {
            bail!(
                "login header mismatch: expected \"{}\", got \"{}\"",
                self.env.labels.login_header,
                header_text
            );
        }

        self.page.fill(USERNAME, &self.env.username).await?;
        self.page.fill(PASSWORD, &self.env.password).await?;
        self.page.click(SUBMIT).await?;

        admin_panel.assert_panel_visible().await
    }
}
