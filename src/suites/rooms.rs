//! Room management scenarios.
//!
//! The room list on the remote application is shared state across the run,
//! so every scenario works against the most recently added row instead of
//! assuming an empty listing.

use anyhow::{bail, Result};

use crate::fixtures::RoomFixtures;
use crate::runner::{TestCase, TestContext};

const SUITE: &str = "Room management test cases";

pub fn cases() -> Vec<TestCase> {
    vec![
        TestCase {
            suite: SUITE,
            name: "Test that you can create a room.",
            run: |ctx| Box::pin(create_room(ctx)),
        },
        TestCase {
            suite: SUITE,
            name: "Test that you can not create a room with invalid input data.",
            run: |ctx| Box::pin(reject_invalid_price(ctx)),
        },
        TestCase {
            suite: SUITE,
            name: "Test that you can not create a room with empty input data.",
            run: |ctx| Box::pin(reject_empty_form(ctx)),
        },
        TestCase {
            suite: SUITE,
            name: "Test that you can update a room.",
            run: |ctx| Box::pin(update_room(ctx)),
        },
        TestCase {
            suite: SUITE,
            name: "Test that you can delete a room.",
            run: |ctx| Box::pin(delete_room(ctx)),
        },
        TestCase {
            suite: SUITE,
            name: "Test that all available rooms are listed.",
            run: |ctx| Box::pin(list_rooms(ctx)),
        },
    ]
}

async fn create_room(ctx: &TestContext<'_>) -> Result<()> {
    let fixtures = RoomFixtures::load()?;
    let rooms = ctx.rooms_page();

    rooms.create_room(&fixtures.create.room).await?;
    rooms.assert_last_row_matches(&fixtures.create.room).await
}

async fn reject_invalid_price(ctx: &TestContext<'_>) -> Result<()> {
    let fixtures = RoomFixtures::load()?;
    let labels = &ctx.env().labels;
    let rooms = ctx.rooms_page();

    rooms.fill_number(fixtures.invalid_price.number).await?;
    rooms.fill_price(fixtures.invalid_price.price).await?;
    rooms.submit().await?;

    rooms
        .assert_validation_errors(&[&labels.invalid_price_error_message])
        .await
}

async fn reject_empty_form(ctx: &TestContext<'_>) -> Result<()> {
    let labels = &ctx.env().labels;
    let rooms = ctx.rooms_page();

    rooms.submit().await?;

    // Both messages have to show at once.
    rooms
        .assert_validation_errors(&[
            &labels.empty_room_number_error_message,
            &labels.empty_price_error_message,
        ])
        .await
}

async fn update_room(ctx: &TestContext<'_>) -> Result<()> {
    let fixtures = RoomFixtures::load()?;
    let labels = &ctx.env().labels;
    let rooms = ctx.rooms_page();
    let initial = &fixtures.update.initial;
    let updated = &fixtures.update.updated;
    let new_description = updated
        .description
        .as_deref()
        .unwrap_or(&labels.default_room_description);

    rooms.create_room(initial).await?;
    rooms.open_last_row().await?;
    rooms
        .assert_detail_view(initial, &labels.default_room_description)
        .await?;

    rooms.edit_room(updated, new_description).await?;
    rooms.assert_detail_view(updated, new_description).await?;

    // The listing must agree with the detail view.
    rooms.go_back_to_listing().await?;
    rooms.assert_last_row_matches(updated).await
}

async fn delete_room(ctx: &TestContext<'_>) -> Result<()> {
    let fixtures = RoomFixtures::load()?;
    let rooms = ctx.rooms_page();

    rooms.create_room(&fixtures.delete.room).await?;
    let count_before = rooms.room_count().await?;
    let last_before = rooms.read_last_row().await?;

    rooms.delete_last_room().await?;

    let count_after = rooms.room_count().await?;
    if count_after + 1 != count_before {
        bail!(
            "room count did not decrease by one: {} before, {} after",
            count_before,
            count_after
        );
    }
    if count_after > 0 {
        let last_after = rooms.read_last_row().await?;
        if last_after == last_before {
            bail!("last row is unchanged after deletion: {:?}", last_after);
        }
    }
    Ok(())
}

async fn list_rooms(ctx: &TestContext<'_>) -> Result<()> {
    let rooms = ctx.rooms_page();
    rooms.list_rooms().await?;
    Ok(())
}
