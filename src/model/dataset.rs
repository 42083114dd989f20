//! The immutable route dataset and its lookups

use super::route::{Airline, AirlineId, Airport, Route};
use serde::Deserialize;

/// All routes, airlines and airports the app knows about
///
/// Collections keep the order they were loaded in; that order is the
/// display order of the table and of both filter dialogs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub airlines: Vec<Airline>,
    #[serde(default)]
    pub airports: Vec<Airport>,
}

impl Dataset {
    pub fn new(routes: Vec<Route>, airlines: Vec<Airline>, airports: Vec<Airport>) -> Self {
        Self {
            routes,
            airlines,
            airports,
        }
    }

    /// Look up an airline by id
    pub fn airline_by_id(&self, id: AirlineId) -> Option<&Airline> {
        self.airlines.iter().find(|a| a.id == id)
    }

    /// Look up an airport by code
    pub fn airport_by_code(&self, code: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.code == code)
    }

    /// Display name for an airline, falling back to the raw id
    pub fn airline_name(&self, id: AirlineId) -> String {
        self.airline_by_id(id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Display name for an airport, falling back to the raw code
    pub fn airport_name(&self, code: &str) -> String {
        self.airport_by_code(code)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| code.to_string())
    }
}
