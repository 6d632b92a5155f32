//! The fixed set of selectable cities.

use crate::model::City;

/// All cities the dashboard knows about, in display order.
pub const CITIES: &[City] = &[
    City { name: "San Diego, CA", lat: 32.7157, lon: -117.1611 },
    City { name: "Los Angeles, CA", lat: 34.0522, lon: -118.2437 },
    City { name: "San Francisco, CA", lat: 37.7749, lon: -122.4194 },
    City { name: "San Jose, CA", lat: 37.3382, lon: -121.8863 },
    City { name: "Sacramento, CA", lat: 38.5816, lon: -121.4944 },
    City { name: "Fresno, CA", lat: 36.7378, lon: -119.7871 },
    City { name: "Irvine, CA", lat: 33.6846, lon: -117.8265 },
    City { name: "Santa Barbara, CA", lat: 34.4208, lon: -119.6982 },
    City { name: "Palm Springs, CA", lat: 33.8303, lon: -116.5453 },
];

/// Case-insensitive substring filter over city names, order preserved.
/// An empty query returns the full list.
pub fn filter(query: &str) -> Vec<&'static City> {
    let needle = query.to_lowercase();
    CITIES
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a city by its exact display name.
pub fn find(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.name == name)
}

/// Pick the selection for a filtered subset: keep the current city when it
/// still matches, otherwise fall back to the first filtered entry.
pub fn resolve_selection<'a>(
    filtered: &[&'a City],
    current_name: Option<&str>,
) -> Option<&'a City> {
    current_name
        .and_then(|name| filtered.iter().find(|city| city.name == name).copied())
        .or_else(|| filtered.first().copied())
}
