//! Diesel row models for reading persistence.

use super::schema::sensor_readings;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for reading records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sensor_readings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReadingRow {
    /// Insertion sequence.
    pub seq: i64,
    /// Reading identifier.
    pub id: uuid::Uuid,
    /// Originating sensor identifier.
    pub sensor_id: String,
    /// Temperature unit symbol.
    pub temperature_unit: String,
    /// Temperature magnitude.
    pub temperature: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for reading records. `seq` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sensor_readings)]
pub struct NewReadingRow {
    /// Reading identifier.
    pub id: uuid::Uuid,
    /// Originating sensor identifier.
    pub sensor_id: String,
    /// Temperature unit symbol.
    pub temperature_unit: String,
    /// Temperature magnitude.
    pub temperature: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
