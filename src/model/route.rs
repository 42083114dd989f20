//! Route, airline and airport records

use serde::Deserialize;

/// Numeric airline identifier as used by the route records
pub type AirlineId = u32;

/// A directed airline connection between two airports
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    #[serde(rename = "airline")]
    pub airline_id: AirlineId,
    #[serde(rename = "src")]
    pub source_airport_code: String,
    #[serde(rename = "dest")]
    pub destination_airport_code: String,
}

impl Route {
    /// Whether the route flies in or out of the given airport
    pub fn touches(&self, code: &str) -> bool {
        self.source_airport_code == code || self.destination_airport_code == code
    }
}

/// An airline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airline {
    pub id: AirlineId,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// An airport, keyed by its IATA code
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}
