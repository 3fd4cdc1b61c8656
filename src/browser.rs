//! Browser session layer over Playwright.
//!
//! One `BrowserSession` per run, one fresh context + page per test. The
//! page helpers here are the only place the suite talks to Playwright;
//! page objects express intent in terms of these primitives.

use anyhow::{Context, Result};
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use playwright::Playwright;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub base_url: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        let headless = std::env::var("E2E_HEADLESS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            headless,
            base_url: "https://automationintesting.online".to_string(),
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// A launched browser, shared by the whole run.
pub struct BrowserSession {
    #[allow(dead_code)]
    playwright: Playwright,
    browser: Browser,
    config: BrowserConfig,
}

impl BrowserSession {
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let chromium = playwright.chromium();
        let mut launcher = chromium.launcher();
        launcher = launcher.headless(config.headless);

        let executable = std::env::var("PLAYWRIGHT_CHROMIUM_EXECUTABLE_PATH")
            .ok()
            .map(std::path::PathBuf::from);
        if let Some(ref path) = executable {
            log::debug!("Using browser executable from env: {}", path.display());
            launcher = launcher.executable(path);
        }

        let browser = launcher.launch().await.context("Failed to launch Chromium")?;

        Ok(Self {
            playwright,
            browser,
            config,
        })
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Fresh context and page. Tests never share a page; isolation between
    /// tests is per-context (cookies, storage), not per-browser.
    pub async fn new_page(&self) -> Result<PageHandle> {
        let context = self.browser.context_builder().build().await?;
        let page = context.new_page().await?;

        page.set_viewport_size(Viewport {
            width: self.config.viewport_width as i32,
            height: self.config.viewport_height as i32,
        })
        .await?;

        Ok(PageHandle { context, page })
    }
}

/// A single test's page plus the context that owns it.
pub struct PageHandle {
    #[allow(dead_code)]
    context: BrowserContext,
    page: Page,
}

impl PageHandle {
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.page
            .goto_builder(url)
            .goto()
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<String> {
        let url: String = self
            .page
            .evaluate("() => window.location.href", ())
            .await?;
        Ok(url)
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        self.page
            .click_builder(selector)
            .click()
            .await
            .with_context(|| format!("Failed to click: {}", selector))?;
        Ok(())
    }

    /// Click the last element matching `selector`.
    pub async fn click_last(&self, selector: &str) -> Result<()> {
        let elements = self.page.query_selector_all(selector).await?;
        match elements.last() {
            Some(el) => {
                el.click_builder().click().await?;
                Ok(())
            }
            None => anyhow::bail!("No element matched: {}", selector),
        }
    }

    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        match self.page.query_selector(selector).await? {
            Some(el) => {
                el.fill_builder(value).fill().await?;
                Ok(())
            }
            None => anyhow::bail!("No element matched: {}", selector),
        }
    }

    /// Set a `<select>` element's value and fire a change event, the way a
    /// user picking an option would.
    pub async fn select_value(&self, selector: &str, value: &str) -> Result<()> {
        let js = format!(
            r#"() => {{
                const el = document.querySelector("{}");
                if (!el) return false;
                el.value = "{}";
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }}"#,
            selector, value
        );
        let found: bool = self.page.evaluate(&js, ()).await?;
        if !found {
            anyhow::bail!("No element matched: {}", selector);
        }
        Ok(())
    }

    pub async fn is_checked(&self, selector: &str) -> Result<bool> {
        let js = format!(
            r#"() => {{
                const el = document.querySelector("{}");
                return !!(el && el.checked);
            }}"#,
            selector
        );
        let checked: bool = self.page.evaluate(&js, ()).await?;
        Ok(checked)
    }

    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        match self.page.query_selector(selector).await? {
            Some(el) => Ok(el.is_visible().await?),
            None => Ok(false),
        }
    }

    pub async fn inner_text(&self, selector: &str) -> Result<String> {
        let js = "el => el.value || el.innerText || el.textContent || ''";
        let text: String = self
            .page
            .evaluate_on_selector(selector, js, None::<String>)
            .await
            .with_context(|| format!("Failed to read text of: {}", selector))?;
        Ok(text.trim().to_string())
    }

    pub async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.page.query_selector_all(selector).await?.len())
    }

    /// Wait until `selector` matches, up to `timeout_ms`.
    pub async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<bool> {
        let result = self
            .page
            .wait_for_selector_builder(selector)
            .timeout(timeout_ms as f64)
            .wait_for_selector()
            .await;
        Ok(result.is_ok())
    }

    /// Read every row matching `row_selector`, splitting each into the texts
    /// of its `cell_selector` children. One JS round trip for the whole
    /// table.
    pub async fn read_rows(
        &self,
        row_selector: &str,
        cell_selector: &str,
    ) -> Result<Vec<Vec<String>>> {
        let js = format!(
            r#"() => Array.from(document.querySelectorAll('{}')).map(
                row => Array.from(row.querySelectorAll('{}')).map(cell => cell.innerText.trim())
            )"#,
            row_selector, cell_selector
        );
        let rows: Vec<Vec<String>> = self.page.evaluate(&js, ()).await?;
        Ok(rows)
    }

    /// Fixed settle delay after a state-changing action. A pragmatic wait
    /// strategy; the application re-renders the listing without a reliable
    /// completion signal.
    pub async fn settle(&self, ms: u64) {
        tokio::time::sleep(tokio::time::Duration::from_millis(ms)).await;
    }

    pub async fn go_back(&self) -> Result<()> {
        self.page
            .evaluate::<(), ()>("window.history.back()", ())
            .await?;
        Ok(())
    }

    /// Release the page. The context is dropped with the handle; navigating
    /// away first keeps the remote session clean even when teardown is
    /// skipped mid-test.
    pub async fn release(&self) -> Result<()> {
        self.page.goto_builder("about:blank").goto().await?;
        Ok(())
    }
}
