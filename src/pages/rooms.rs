//! Rooms screen: create/edit/delete room records and read the listing back.

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::browser::PageHandle;
use crate::config::Environment;
use crate::model::{plan_feature_toggles, Room, RoomFeature, RoomRow};

const ROOM_NUMBER: &str = "#roomName";
const ROOM_TYPE: &str = "#type";
const ACCESSIBLE: &str = "#accessible";
const PRICE: &str = "#roomPrice";
const DESCRIPTION: &str = "#description";
const CREATE_BUTTON: &str = "#createRoom";
const UPDATE_BUTTON: &str = "#update";
const EDIT_BUTTON: &str = "button:has-text(\"Edit\")";
const ROOM_ROW: &str = "[data-testid=\"roomlisting\"]";
const ROW_CELL: &str = "div > p";
const DANGER_ALERT: &str = "div.alert.alert-danger";
const ROOM_DETAILS: &str = ".room-details";
const DELETE_BUTTON: &str = "span[class*=\"roomDelete\"]";

/// How long the listing is given to re-render after create/update/delete.
const SETTLE_MS: u64 = 1000;

pub struct RoomsPage<'a> {
    page: &'a PageHandle,
    env: &'a Environment,
}

impl<'a> RoomsPage<'a> {
    pub fn new(page: &'a PageHandle, env: &'a Environment) -> Self {
        Self { page, env }
    }

    // ── form actions ────────────────────────────────────────────────

    /// Fill the create/edit form in field order: number, type,
    /// accessibility, price, feature checkboxes.
    pub async fn fill_form(&self, room: &Room) -> Result<()> {
        self.page
            .fill(ROOM_NUMBER, &room.number.to_string())
            .await?;
        self.page
            .select_value(ROOM_TYPE, room.room_type.form_value())
            .await?;
        self.page
            .select_value(ACCESSIBLE, if room.accessible { "true" } else { "false" })
            .await?;
        self.page.fill(PRICE, &room.price.to_string()).await?;
        self.apply_features(&room.features).await?;
        Ok(())
    }

    pub async fn fill_number(&self, number: u32) -> Result<()> {
        self.page.fill(ROOM_NUMBER, &number.to_string()).await
    }

    pub async fn fill_price(&self, price: u32) -> Result<()> {
        self.page.fill(PRICE, &price.to_string()).await
    }

    /// Bring the feature checkboxes to exactly `desired`. A checkbox whose
    /// state already matches is not clicked.
    pub async fn apply_features(&self, desired: &[RoomFeature]) -> Result<()> {
        let mut current = Vec::with_capacity(RoomFeature::ALL.len());
        for feature in RoomFeature::ALL {
            let checked = self.page.is_checked(feature.checkbox_selector()).await?;
            current.push((feature, checked));
        }
        for feature in plan_feature_toggles(&current, desired) {
            self.page.click(feature.checkbox_selector()).await?;
        }
        Ok(())
    }

    /// Submit the create form and wait for the listing to settle.
    pub async fn submit(&self) -> Result<()> {
        self.page.click(CREATE_BUTTON).await?;
        self.page.settle(SETTLE_MS).await;
        Ok(())
    }

    pub async fn create_room(&self, room: &Room) -> Result<()> {
        self.fill_form(room).await?;
        self.submit().await
    }

    // ── listing ─────────────────────────────────────────────────────

    pub async fn read_all_rows(&self) -> Result<Vec<RoomRow>> {
        let raw = self.page.read_rows(ROOM_ROW, ROW_CELL).await?;
        raw.iter()
            .map(|cells| RoomRow::from_cells(cells))
            .collect::<Result<Vec<_>>>()
            .context("Failed to parse room listing")
    }

    pub async fn read_last_row(&self) -> Result<RoomRow> {
        self.read_all_rows()
            .await?
            .pop()
            .ok_or_else(|| anyhow::anyhow!("room listing is empty"))
    }

    pub async fn room_count(&self) -> Result<usize> {
        self.page.count(ROOM_ROW).await
    }

    /// Assert the most recently added row renders the given room.
    pub async fn assert_last_row_matches(&self, expected: &Room) -> Result<()> {
        let actual = self.read_last_row().await?;
        actual.assert_matches(&expected.expected_row(&self.env.labels))
    }

    /// Log every listed room, or a "no rooms" line for an empty listing.
    pub async fn list_rooms(&self) -> Result<Vec<RoomRow>> {
        let rows = self.read_all_rows().await?;
        if rows.is_empty() {
            println!(
                "{}",
                self.env.labels.no_available_rooms_error_message.yellow()
            );
        } else {
            for row in &rows {
                println!(
                    "Room Number: {}, Type: {}, Accessibility: {}, Price: {}, Room details: {}",
                    row.number, row.room_type, row.accessible, row.price, row.features
                );
            }
        }
        Ok(rows)
    }

    // ── detail view / edit ──────────────────────────────────────────

    pub async fn open_last_row(&self) -> Result<()> {
        self.page.click_last(ROOM_ROW).await?;
        if !self.page.wait_for_selector(ROOM_DETAILS, 10_000).await? {
            bail!("room detail view did not open");
        }
        Ok(())
    }

    /// Assert the detail view shows the given room, including description.
    pub async fn assert_detail_view(&self, room: &Room, description: &str) -> Result<()> {
        let labels = &self.env.labels;

        let url = self.page.current_url().await?;
        if !url.contains("room") {
            bail!("expected a room detail URL, got {}", url);
        }
        if !self.page.is_visible(EDIT_BUTTON).await? {
            bail!("edit button is not visible on the detail view");
        }

        let details = self.page.inner_text(ROOM_DETAILS).await?;
        let expected_lines = [
            format!("{} {}", labels.room_label, room.number),
            format!("{} {}", labels.type_label, room.room_type.label(labels)),
            format!(
                "{} {}",
                labels.accessible_label,
                room.accessibility_label(labels)
            ),
            format!("{} {}", labels.features_label, room.feature_list(labels)),
            format!("{} {}", labels.room_price_label, room.price),
            format!("{} {}", labels.description_label, description),
        ];
        let mut missing = Vec::new();
        for line in &expected_lines {
            if !details.contains(line.as_str()) {
                missing.push(line.clone());
            }
        }
        if !missing.is_empty() {
            bail!(
                "room detail mismatch, missing:\n  {}\nrendered:\n{}",
                missing.join("\n  "),
                details
            );
        }
        Ok(())
    }

    /// Switch the detail view to edit mode, apply the update and save.
    pub async fn edit_room(&self, update: &Room, description: &str) -> Result<()> {
        self.page.click(EDIT_BUTTON).await?;
        if !self.page.wait_for_selector(ROOM_NUMBER, 10_000).await? {
            bail!("edit form did not open");
        }

        self.fill_form(update).await?;
        self.page.fill(DESCRIPTION, description).await?;
        self.page.click(UPDATE_BUTTON).await?;
        self.page.settle(SETTLE_MS).await;
        Ok(())
    }

    pub async fn go_back_to_listing(&self) -> Result<()> {
        self.page.go_back().await?;
        if !self.page.wait_for_selector(ROOM_ROW, 10_000).await? {
            bail!("room listing did not come back");
        }
        Ok(())
    }

    // ── deletion ────────────────────────────────────────────────────

    pub async fn delete_last_room(&self) -> Result<()> {
        self.page.click_last(DELETE_BUTTON).await?;
        self.page.settle(SETTLE_MS).await;
        Ok(())
    }

    // ── validation errors ───────────────────────────────────────────

    pub async fn danger_alert_text(&self) -> Result<String> {
        if !self.page.wait_for_selector(DANGER_ALERT, 10_000).await? {
            bail!("validation alert did not appear");
        }
        self.page.inner_text(DANGER_ALERT).await
    }

    /// Assert the validation alert contains every given message.
    pub async fn assert_validation_errors(&self, expected: &[&str]) -> Result<()> {
        let alert = self.danger_alert_text().await?;
        let missing: Vec<&str> = expected
            .iter()
            .copied()
            .filter(|msg| !alert.contains(msg))
            .collect();
        if !missing.is_empty() {
            bail!(
                "validation alert is missing {:?}; rendered: \"{}\"",
                missing,
                alert
            );
        }
        Ok(())
    }
}
