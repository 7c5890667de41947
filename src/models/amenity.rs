//! Static amenity catalog.

use serde::Serialize;

/// A reference-data amenity a property can advertise.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Amenity {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_sw: &'static str,
    pub icon: &'static str,
}

pub const AMENITIES: &[Amenity] = &[
    Amenity { id: "water", name_en: "Reliable Water", name_sw: "Maji ya Uhakika", icon: "droplet" },
    Amenity { id: "power", name_en: "LUKU Meter", name_sw: "LUKU", icon: "zap" },
    Amenity { id: "security", name_en: "Fenced/Security", name_sw: "Ulinzi/Fence", icon: "shield" },
    Amenity { id: "ac", name_en: "Air Conditioning", name_sw: "AC", icon: "wind" },
    Amenity { id: "parking", name_en: "Parking", name_sw: "Parking", icon: "car" },
    Amenity { id: "wifi", name_en: "WiFi", name_sw: "WiFi", icon: "wifi" },
];

pub fn find(id: &str) -> Option<&'static Amenity> {
    AMENITIES.iter().find(|a| a.id == id)
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

/// Ids in `ids` that are not part of the catalog, in input order.
pub fn unknown<'a>(ids: &'a [String]) -> Vec<&'a str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| !is_known(id))
        .collect()
}
