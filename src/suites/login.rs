//! Login smoke scenario. The hooks already drive a full login before the
//! body and a logout after it; the body only has to confirm the panel is up.

use anyhow::Result;

use crate::runner::{TestCase, TestContext};

const SUITE: &str = "Login test cases";

pub fn cases() -> Vec<TestCase> {
    vec![TestCase {
        suite: SUITE,
        name: "Test that the user can log in and out.",
        run: |ctx| Box::pin(login_round_trip(ctx)),
    }]
}

async fn login_round_trip(ctx: &TestContext<'_>) -> Result<()> {
    ctx.admin_panel_page().assert_panel_visible().await
}
