//! Draft property model.
//!
//! [`PropertyDraft`] is the in-memory submission accumulated by the wizard.
//! It serializes directly into the create-property request body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Enumerations
// =============================================================================

/// Kind of dwelling being listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Villa,
    Chalet,
    Studio,
    Duplex,
    Room,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Chalet,
        PropertyType::Studio,
        PropertyType::Duplex,
        PropertyType::Room,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Chalet => "chalet",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
            PropertyType::Room => "room",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Chalet => "Chalet",
            PropertyType::Studio => "Studio",
            PropertyType::Duplex => "Duplex",
            PropertyType::Room => "Private room",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown property type '{}'", s))
    }
}

/// Billing period offered to guests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl RentalType {
    pub const ALL: [RentalType; 3] = [RentalType::Daily, RentalType::Weekly, RentalType::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalType::Daily => "daily",
            RentalType::Weekly => "weekly",
            RentalType::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalType::Daily => "Daily",
            RentalType::Weekly => "Weekly",
            RentalType::Monthly => "Monthly",
        }
    }
}

impl FromStr for RentalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RentalType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown rental type '{}'", s))
    }
}

// =============================================================================
// Draft
// =============================================================================

/// A not-yet-persisted property submission.
///
/// Grouped by wizard step; every field is bound to one form input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    // Step 1: basic info
    pub title_ar: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title_en: String,
    pub description_ar: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_en: String,
    pub property_type: Option<PropertyType>,
    pub rental_type: RentalType,

    // Step 2: location
    pub governorate: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub neighborhood: String,

    // Step 3: details & pricing
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub max_guests: u32,
    pub area_sqm: f64,
    pub furnished: bool,
    pub pets_allowed: bool,
    pub price_per_night: f64,
    pub cleaning_fee: f64,
    pub min_stay_nights: u32,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            title_ar: String::new(),
            title_en: String::new(),
            description_ar: String::new(),
            description_en: String::new(),
            property_type: None,
            rental_type: RentalType::Daily,
            governorate: String::new(),
            city: String::new(),
            neighborhood: String::new(),
            bedrooms: 1,
            bathrooms: 1,
            max_guests: 2,
            area_sqm: 0.0,
            furnished: true,
            pets_allowed: false,
            price_per_night: 0.0,
            cleaning_fee: 0.0,
            min_stay_nights: 1,
        }
    }
}

impl PropertyDraft {
    /// Display title, falling back to the English one when Arabic is empty.
    pub fn display_title(&self) -> &str {
        if self.title_ar.is_empty() {
            &self.title_en
        } else {
            &self.title_ar
        }
    }
}

/// Parse a numeric form input.
///
/// A blank field reads as zero. Input that does not parse (a fractional room
/// count, a negative number) keeps `previous` so the draft never holds a
/// value the owner did not type.
pub fn parse_number<T: FromStr + Default>(raw: &str, previous: T) -> T {
    let raw = raw.trim();
    if raw.is_empty() {
        return T::default();
    }
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Ignoring unparsable number input '{}'", raw);
            previous
        }
    }
}
