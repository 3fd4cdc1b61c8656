//! Room data model.
//!
//! A `Room` is what a test intends to create or edit; a `RoomRow` is what the
//! listing actually rendered. Both sides meet in `RoomRow::diff`, which is
//! how every listing assertion in the suite reports mismatches.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::locale::AppLabels;

/// Room type as offered by the create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Twin,
    Double,
    Family,
    Suite,
}

impl RoomType {
    /// Value of the corresponding `<option>` element. The form always uses
    /// the English values regardless of display language.
    pub fn form_value(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Twin => "Twin",
            RoomType::Double => "Double",
            RoomType::Family => "Family",
            RoomType::Suite => "Suite",
        }
    }

    /// Rendered name in the configured display language.
    pub fn label<'a>(&self, labels: &'a AppLabels) -> &'a str {
        match self {
            RoomType::Single => &labels.single_room,
            RoomType::Twin => &labels.twin_room,
            RoomType::Double => &labels.double_room,
            RoomType::Family => &labels.family_room,
            RoomType::Suite => &labels.suite_room,
        }
    }
}

/// Optional room features, in the order the application renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomFeature {
    Wifi,
    Refreshments,
    Tv,
    Safe,
    Radio,
    Views,
}

impl RoomFeature {
    pub const ALL: [RoomFeature; 6] = [
        RoomFeature::Wifi,
        RoomFeature::Refreshments,
        RoomFeature::Tv,
        RoomFeature::Safe,
        RoomFeature::Radio,
        RoomFeature::Views,
    ];

    /// Checkbox locator on the create/edit form.
    pub fn checkbox_selector(&self) -> &'static str {
        match self {
            RoomFeature::Wifi => "#wifiCheckbox",
            RoomFeature::Refreshments => "#refreshCheckbox",
            RoomFeature::Tv => "#tvCheckbox",
            RoomFeature::Safe => "#safeCheckbox",
            RoomFeature::Radio => "#radioCheckbox",
            RoomFeature::Views => "#viewsCheckbox",
        }
    }

    pub fn label<'a>(&self, labels: &'a AppLabels) -> &'a str {
        match self {
            RoomFeature::Wifi => &labels.wifi,
            RoomFeature::Refreshments => &labels.refreshments,
            RoomFeature::Tv => &labels.tv,
            RoomFeature::Safe => &labels.safe,
            RoomFeature::Radio => &labels.radio,
            RoomFeature::Views => &labels.views,
        }
    }
}

/// A room as a test wants it to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub number: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub accessible: bool,
    pub price: u32,
    #[serde(default)]
    pub features: Vec<RoomFeature>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Room {
    pub fn has_feature(&self, feature: RoomFeature) -> bool {
        self.features.contains(&feature)
    }

    /// Feature list as the listing renders it: application order, comma
    /// separated, localized.
    pub fn feature_list(&self, labels: &AppLabels) -> String {
        let rendered: Vec<&str> = RoomFeature::ALL
            .iter()
            .filter(|f| self.has_feature(**f))
            .map(|f| f.label(labels))
            .collect();
        rendered.join(", ")
    }

    pub fn accessibility_label<'a>(&self, labels: &'a AppLabels) -> &'a str {
        if self.accessible {
            &labels.accessibility_true
        } else {
            &labels.accessibility_false
        }
    }

    /// The listing row this room should produce once created.
    pub fn expected_row(&self, labels: &AppLabels) -> RoomRow {
        RoomRow {
            number: self.number.to_string(),
            room_type: self.room_type.label(labels).to_string(),
            accessible: self.accessibility_label(labels).to_string(),
            price: self.price.to_string(),
            features: self.feature_list(labels),
        }
    }
}

/// One rendered listing row. Column-to-field mapping is fixed by position:
/// number, type, accessibility, price, feature list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRow {
    pub number: String,
    pub room_type: String,
    pub accessible: String,
    pub price: String,
    pub features: String,
}

impl RoomRow {
    pub fn from_cells(cells: &[String]) -> Result<Self> {
        if cells.len() < 5 {
            bail!(
                "room listing row has {} columns, expected 5: {:?}",
                cells.len(),
                cells
            );
        }
        Ok(Self {
            number: cells[0].trim().to_string(),
            room_type: cells[1].trim().to_string(),
            accessible: cells[2].trim().to_string(),
            price: cells[3].trim().to_string(),
            features: cells[4].trim().to_string(),
        })
    }

    /// Field-by-field comparison. Returns one line per differing field.
    pub fn diff(&self, expected: &RoomRow) -> Vec<String> {
        let mut mismatches = Vec::new();
        let fields = [
            ("room number", &expected.number, &self.number),
            ("type", &expected.room_type, &self.room_type),
            ("accessibility", &expected.accessible, &self.accessible),
            ("price", &expected.price, &self.price),
            ("features", &expected.features, &self.features),
        ];
        for (name, want, got) in fields {
            if want != got {
                mismatches.push(format!("{}: expected \"{}\", got \"{}\"", name, want, got));
            }
        }
        mismatches
    }

    /// Fail with a descriptive message when any field differs.
    pub fn assert_matches(&self, expected: &RoomRow) -> Result<()> {
        let mismatches = self.diff(expected);
        if mismatches.is_empty() {
            Ok(())
        } else {
            bail!("room row mismatch:\n  {}", mismatches.join("\n  "))
        }
    }
}

/// Compute which feature checkboxes need a click so that `current` reaches
/// `desired`. A checkbox already in the right state is left alone, which is
/// what makes re-applying the same feature set a no-op.
pub fn plan_feature_toggles(
    current: &[(RoomFeature, bool)],
    desired: &[RoomFeature],
) -> Vec<RoomFeature> {
    current
        .iter()
        .filter(|(feature, checked)| desired.contains(feature) != *checked)
        .map(|(feature, _)| *feature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{labels_for, AppLanguage};

    fn suite_room() -> Room {
        Room {
            number: 123,
            room_type: RoomType::Suite,
            accessible: true,
            price: 120,
            features: vec![RoomFeature::Tv, RoomFeature::Views],
            description: None,
        }
    }

    #[test]
    fn expected_row_renders_localized_columns() {
        let labels = labels_for(AppLanguage::English).unwrap();
        let row = suite_room().expected_row(&labels);
        assert_eq!(row.number, "123");
        assert_eq!(row.room_type, "Suite");
        assert_eq!(row.accessible, "true");
        assert_eq!(row.price, "120");
        assert_eq!(row.features, "TV, Views");
    }

    #[test]
    fn feature_list_uses_application_order_not_input_order() {
        let labels = labels_for(AppLanguage::English).unwrap();
        let mut room = suite_room();
        room.features = vec![RoomFeature::Views, RoomFeature::Safe, RoomFeature::Wifi];
        assert_eq!(room.feature_list(&labels), "WiFi, Safe, Views");
    }

    #[test]
    fn row_parses_from_five_cells() {
        let cells: Vec<String> = ["123", "Suite", "true", "120", "TV, Views"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = RoomRow::from_cells(&cells).unwrap();
        assert_eq!(row.features, "TV, Views");
    }

    #[test]
    fn row_with_missing_columns_is_an_error() {
        let cells: Vec<String> = vec!["123".into(), "Suite".into()];
        assert!(RoomRow::from_cells(&cells).is_err());
    }

    #[test]
    fn diff_reports_every_differing_field() {
        let labels = labels_for(AppLanguage::English).unwrap();
        let expected = suite_room().expected_row(&labels);
        let mut actual = expected.clone();
        actual.price = "999".to_string();
        actual.features = "TV".to_string();

        let mismatches = actual.diff(&expected);
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches[0].contains("price"));
        assert!(mismatches[1].contains("features"));
        assert!(actual.assert_matches(&expected).is_err());
    }

    #[test]
    fn matching_rows_produce_no_diff() {
        let labels = labels_for(AppLanguage::English).unwrap();
        let expected = suite_room().expected_row(&labels);
        assert!(expected.clone().assert_matches(&expected).is_ok());
    }

    #[test]
    fn toggle_plan_clicks_only_checkboxes_in_the_wrong_state() {
        let current = [
            (RoomFeature::Wifi, true),
            (RoomFeature::Refreshments, false),
            (RoomFeature::Tv, false),
            (RoomFeature::Safe, true),
            (RoomFeature::Radio, false),
            (RoomFeature::Views, false),
        ];
        let desired = [RoomFeature::Tv, RoomFeature::Safe];

        let plan = plan_feature_toggles(&current, &desired);
        assert_eq!(plan, vec![RoomFeature::Wifi, RoomFeature::Tv]);
    }

    #[test]
    fn toggle_plan_is_idempotent() {
        let desired = [RoomFeature::Tv, RoomFeature::Views];
        // State after the first application: exactly the desired set.
        let settled: Vec<(RoomFeature, bool)> = RoomFeature::ALL
            .iter()
            .map(|f| (*f, desired.contains(f)))
            .collect();
        assert!(plan_feature_toggles(&settled, &desired).is_empty());
    }
}
