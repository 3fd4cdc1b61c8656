use crate::browser::PageHandle;
use crate::config::Environment;
use crate::pages::{AdminPanelPage, LoginPage, RoomsPage};

/// Everything a test body gets to work with.
///
/// The remote room list behind these pages is shared, mutable state across
/// the whole run; no test may assume an empty starting listing. That shared
/// fixture is deliberately reached through this context rather than through
/// globals, and tests written against it operate on the most recently
/// added/viewed row.
pub struct TestContext<'a> {
    page: &'a PageHandle,
    env: &'a Environment,
    base_url: &'a str,
}

impl<'a> TestContext<'a> {
    pub fn new(page: &'a PageHandle, env: &'a Environment, base_url: &'a str) -> Self {
        Self {
            page,
            env,
            base_url,
        }
    }

    pub fn env(&self) -> &Environment {
        self.env
    }

    pub fn base_url(&self) -> &str {
        self.base_url
    }

    pub fn rooms_page(&self) -> RoomsPage<'_> {
        RoomsPage::new(self.page, self.env)
    }

    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(self.page, self.env)
    }

    pub fn admin_panel_page(&self) -> AdminPanelPage<'_> {
        AdminPanelPage::new(self.page, self.env)
    }
}
