use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use tripsplit_application::{TripSource, TripSourceError};
use tripsplit_domain::{Expense, Money, Trip};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRecord {
    id: String,
    #[serde(default)]
    description: String,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    paid_by: String,
    #[serde(default)]
    split_among: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TripRecord {
    id: String,
    name: String,
    people: Vec<String>,
    currency: String,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TripDocument {
    Many(Vec<TripRecord>),
    One(TripRecord),
}

impl From<ExpenseRecord> for Expense {
    fn from(record: ExpenseRecord) -> Self {
        Expense {
            id: record.id,
            description: record.description,
            amount: Money::from_decimal(record.amount),
            paid_by: record.paid_by,
            split_among: record.split_among,
        }
    }
}

impl From<TripRecord> for Trip {
    fn from(record: TripRecord) -> Self {
        Trip {
            id: record.id,
            name: record.name,
            members: record.people,
            currency: record.currency,
            expenses: record.expenses.into_iter().map(Expense::from).collect(),
        }
    }
}

/// Trips read from a JSON document holding one trip object or an array of them.
#[derive(Debug)]
pub struct JsonTripFile {
    trips: Vec<Trip>,
}

impl JsonTripFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TripSourceError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, TripSourceError> {
        let document: TripDocument =
            serde_json::from_str(text).map_err(|err| TripSourceError::Malformed(err.to_string()))?;
        let records = match document {
            TripDocument::Many(records) => records,
            TripDocument::One(record) => vec![record],
        };
        Ok(Self {
            trips: records.into_iter().map(Trip::from).collect(),
        })
    }
}

/// Numeric ids are creation timestamps; larger means newer.
fn creation_key(trip: &Trip) -> Option<u64> {
    trip.id.trim().parse().ok()
}

impl TripSource for JsonTripFile {
    fn load(&self, trip_id: &str) -> Result<Trip, TripSourceError> {
        self.trips
            .iter()
            .find(|trip| trip.id == trip_id)
            .cloned()
            .ok_or_else(|| TripSourceError::NotFound(trip_id.to_string()))
    }

    /// Newest first. Trips without a numeric id keep file order after the rest.
    fn list(&self) -> Result<Vec<Trip>, TripSourceError> {
        let mut trips = self.trips.clone();
        trips.sort_by(|a, b| match (creation_key(a), creation_key(b)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(trips)
    }
}
