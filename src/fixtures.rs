//! Room test data, loaded from `fixtures/rooms.json`.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::Room;

const ROOMS_JSON: &str = include_str!("../fixtures/rooms.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFixtures {
    pub create: CreateFixture,
    pub invalid_price: InvalidPriceFixture,
    pub update: UpdateFixture,
    pub delete: DeleteFixture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFixture {
    pub room: Room,
}

/// Partial form input that the application must reject.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidPriceFixture {
    pub number: u32,
    pub price: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFixture {
    pub initial: Room,
    pub updated: Room,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFixture {
    pub room: Room,
}

impl RoomFixtures {
    pub fn load() -> Result<Self> {
        serde_json::from_str(ROOMS_JSON).context("Failed to parse room fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoomFeature, RoomType};

    #[test]
    fn fixture_parses() {
        let fixtures = RoomFixtures::load().unwrap();
        assert_eq!(fixtures.create.room.number, 123);
        assert_eq!(fixtures.create.room.room_type, RoomType::Suite);
        assert_eq!(
            fixtures.create.room.features,
            vec![RoomFeature::Tv, RoomFeature::Views]
        );
        assert_eq!(fixtures.invalid_price.price, 1000);
    }

    #[test]
    fn update_fixture_carries_a_new_description() {
        let fixtures = RoomFixtures::load().unwrap();
        assert!(fixtures.update.initial.description.is_none());
        assert_eq!(
            fixtures.update.updated.description.as_deref(),
            Some("Updated room description")
        );
    }
}
