//! Property model matching the frontend Property interface.

use serde::{Deserialize, Serialize};

/// Cities the marketplace lists in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum City {
    #[serde(rename = "Dar es Salaam")]
    DarEsSalaam,
    Dodoma,
    Arusha,
    Mwanza,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::DarEsSalaam => "Dar es Salaam",
            City::Dodoma => "Dodoma",
            City::Arusha => "Arusha",
            City::Mwanza => "Mwanza",
        }
    }
}

/// Unit the rent price is quoted per.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RentalPeriod {
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Room,
    Hostel,
    Frame,
}

/// Listing lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Active,
    Draft,
    Rented,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A tenant's review attached to a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

/// Request body for adding a review; id and date are assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}

/// A rental listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Free-text neighborhood, e.g. "Sinza Madukani"
    pub location: String,
    pub city: City,
    /// Whole TZS per `period`
    pub price: u64,
    pub period: RentalPeriod,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(rename = "description_en")]
    pub description_en: String,
    #[serde(rename = "description_sw")]
    pub description_sw: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Ids from the amenity catalog
    #[serde(default)]
    pub amenities: Vec<String>,
    pub landlord_id: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default)]
    pub status: PropertyStatus,
}

/// Request body for creating a listing; id and status are assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub location: String,
    pub city: City,
    pub price: u64,
    pub period: RentalPeriod,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(rename = "description_en")]
    pub description_en: String,
    #[serde(rename = "description_sw")]
    pub description_sw: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub landlord_id: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl PropertyDraft {
    /// Materialize the draft under `id` as an active listing.
    pub fn into_property(self, id: String) -> Property {
        Property {
            id,
            title: self.title,
            location: self.location,
            city: self.city,
            price: self.price,
            period: self.period,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            kind: self.kind,
            description_en: self.description_en,
            description_sw: self.description_sw,
            images: self.images,
            amenities: self.amenities,
            landlord_id: self.landlord_id,
            verified: self.verified,
            coordinates: self.coordinates,
            reviews: self.reviews,
            status: PropertyStatus::Active,
        }
    }
}

/// Conjunctive search filter. Every absent field imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    /// Case-insensitive substring of title, location or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Inclusive upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

impl PropertyFilter {
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn min_price(mut self, price: u64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: u64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// An empty term is treated as absent.
    fn needle(&self) -> Option<String> {
        self.term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(needle) = self.needle() {
            let hit = property.title.to_lowercase().contains(&needle)
                || property.location.to_lowercase().contains(&needle)
                || property.city.as_str().to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }
        if self.city.is_some_and(|city| property.city != city) {
            return false;
        }
        true
    }

    /// Keep matching properties, preserving their order.
    pub fn apply(&self, properties: Vec<Property>) -> Vec<Property> {
        properties.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, title: &str, location: &str, city: City, price: u64) -> Property {
        PropertyDraft {
            title: title.into(),
            location: location.into(),
            city,
            price,
            period: RentalPeriod::Month,
            bedrooms: 1,
            bathrooms: 1,
            kind: PropertyType::Room,
            description_en: String::new(),
            description_sw: String::new(),
            images: vec![],
            amenities: vec![],
            landlord_id: "L1".into(),
            verified: false,
            coordinates: None,
            reviews: None,
        }
        .into_property(id.into())
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let p = listing("1", "Room", "Sinza", City::DarEsSalaam, 100);
        assert!(PropertyFilter::default().matches(&p));
        assert!(PropertyFilter::default().term("").matches(&p));
    }

    #[test]
    fn test_term_is_case_insensitive_across_fields() {
        let p = listing("1", "Modern Apartment", "Masaki, Kinondoni", City::DarEsSalaam, 100);
        assert!(PropertyFilter::default().term("MODERN").matches(&p));
        assert!(PropertyFilter::default().term("kinondoni").matches(&p));
        assert!(PropertyFilter::default().term("salaam").matches(&p));
        assert!(!PropertyFilter::default().term("dodoma").matches(&p));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let p = listing("1", "Room", "Sinza", City::DarEsSalaam, 250_000);
        assert!(PropertyFilter::default().min_price(250_000).matches(&p));
        assert!(PropertyFilter::default().max_price(250_000).matches(&p));
        assert!(!PropertyFilter::default().min_price(250_001).matches(&p));
        assert!(!PropertyFilter::default().max_price(249_999).matches(&p));
    }

    #[test]
    fn test_fields_combine_conjunctively() {
        let items = vec![
            listing("1", "Room", "Sinza", City::DarEsSalaam, 250_000),
            listing("2", "House", "Area D", City::Dodoma, 200_000),
            listing("3", "Room", "Mikocheni", City::DarEsSalaam, 900_000),
        ];
        let filter = PropertyFilter::default()
            .term("room")
            .max_price(300_000)
            .city(City::DarEsSalaam);
        let ids: Vec<String> = filter.apply(items).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_property_wire_shape() {
        let mut p = listing("9", "Hostel", "Survey", City::DarEsSalaam, 150_000);
        p.coordinates = Some(Coordinates { lat: -6.79, lng: 39.2 });
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["city"], "Dar es Salaam");
        assert_eq!(value["period"], "month");
        assert_eq!(value["type"], "Room");
        assert_eq!(value["status"], "ACTIVE");
        assert_eq!(value["landlordId"], "L1");
        assert!(value.get("description_en").is_some());
        assert!(value.get("reviews").is_none());

        let back: Property = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_filter_query_encoding_skips_absent_fields() {
        let filter = PropertyFilter::default().min_price(1000).city(City::Dodoma);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, serde_json::json!({ "minPrice": 1000, "city": "Dodoma" }));
    }
}
