//! Locale-label resolution.
//!
//! The application renders its admin UI in one of three languages. Every
//! assertion against rendered text goes through the label table resolved
//! here, once, at startup.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

const LABELS_JSON: &str = include_str!("../fixtures/app_labels_by_locale.json");

/// Supported application display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLanguage {
    English,
    Bulgarian,
    German,
}

impl AppLanguage {
    pub fn locale_code(&self) -> &'static str {
        match self {
            AppLanguage::English => "en-EN",
            AppLanguage::Bulgarian => "bg-BG",
            AppLanguage::German => "de-DE",
        }
    }
}

impl FromStr for AppLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(AppLanguage::English),
            "bulgarian" => Ok(AppLanguage::Bulgarian),
            "german" => Ok(AppLanguage::German),
            other => Err(ConfigError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// The full set of literal UI strings the suite asserts against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLabels {
    // Room features as rendered in listing rows and checkbox labels
    pub wifi: String,
    pub refreshments: String,
    pub tv: String,
    pub safe: String,
    pub radio: String,
    pub views: String,

    // Room type option names
    pub single_room: String,
    pub twin_room: String,
    pub double_room: String,
    pub family_room: String,
    pub suite_room: String,

    // Accessibility column values
    pub accessibility_true: String,
    pub accessibility_false: String,

    // Detail-view field labels
    pub room_label: String,
    pub type_label: String,
    pub accessible_label: String,
    pub features_label: String,
    pub room_price_label: String,
    pub description_label: String,

    // Navigation
    pub rooms_nav_button: String,
    pub report_nav_button: String,
    pub branding_nav_button: String,
    pub nav_header: String,
    pub front_page_nav_button: String,
    pub logout_nav_button: String,

    // Login screen
    pub login_header: String,

    // Validation errors
    pub empty_room_number_error_message: String,
    pub empty_price_error_message: String,
    pub invalid_price_error_message: String,
    pub no_available_rooms_error_message: String,

    // Default description shown on a freshly created room
    pub default_room_description: String,
}

/// Resolve the label table for a language. The fixture is embedded at
/// compile time, so the only runtime failures are a malformed fixture or a
/// missing locale entry.
pub fn labels_for(language: AppLanguage) -> Result<AppLabels, ConfigError> {
    let tables: HashMap<String, AppLabels> = serde_json::from_str(LABELS_JSON)?;
    tables
        .get(language.locale_code())
        .cloned()
        .ok_or(ConfigError::MissingLabelTable(language.locale_code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_case_insensitively() {
        assert_eq!("English".parse::<AppLanguage>().unwrap(), AppLanguage::English);
        assert_eq!("GERMAN".parse::<AppLanguage>().unwrap(), AppLanguage::German);
        assert_eq!(
            "bulgarian".parse::<AppLanguage>().unwrap(),
            AppLanguage::Bulgarian
        );
    }

    #[test]
    fn rejects_unsupported_language() {
        assert!("klingon".parse::<AppLanguage>().is_err());
        assert!("".parse::<AppLanguage>().is_err());
    }

    #[test]
    fn every_locale_has_a_label_table() {
        for language in [
            AppLanguage::English,
            AppLanguage::Bulgarian,
            AppLanguage::German,
        ] {
            let labels = labels_for(language).unwrap();
            assert!(!labels.login_header.is_empty());
            assert!(!labels.invalid_price_error_message.is_empty());
        }
    }

    #[test]
    fn english_labels_match_the_application() {
        let labels = labels_for(AppLanguage::English).unwrap();
        assert_eq!(labels.login_header, "Log into your account");
        assert_eq!(labels.suite_room, "Suite");
        assert_eq!(labels.tv, "TV");
        assert_eq!(
            labels.invalid_price_error_message,
            "must be less than or equal to 999"
        );
    }
}
