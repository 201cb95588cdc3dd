//! `PostgreSQL` repository implementation for reading storage.

use super::{
    models::{NewReadingRow, ReadingRow},
    schema::sensor_readings,
};
use crate::reading::{
    domain::{
        Humidity, PersistedReadingData, ReadingId, SensorId, SensorReading, Temperature,
        TemperatureUnit,
    },
    ports::{ReadingRepository, ReadingRepositoryError, ReadingRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by reading adapters.
pub type ReadingPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the `sensor_readings` table when it does not exist.
pub const CREATE_READINGS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_sensor_readings/up.sql");

/// `PostgreSQL`-backed reading repository.
#[derive(Debug, Clone)]
pub struct PostgresReadingRepository {
    pool: ReadingPgPool,
}

impl PostgresReadingRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReadingPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool for `database_url` and wraps it in a repository.
    ///
    /// Pool construction opens connections eagerly, so call this from a
    /// blocking context.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingRepositoryError::Persistence`] when the pool cannot
    /// be built.
    pub fn connect(database_url: &str, max_connections: u32) -> ReadingRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_connections)
            .build(manager)
            .map_err(ReadingRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the readings table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingRepositoryError::Persistence`] when the statement
    /// fails.
    pub async fn ensure_schema(&self) -> ReadingRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_READINGS_SQL)
                .map_err(ReadingRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReadingRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ReadingRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReadingRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ReadingRepositoryError::persistence)?
    }
}

#[async_trait]
impl ReadingRepository for PostgresReadingRepository {
    async fn store(&self, reading: &SensorReading) -> ReadingRepositoryResult<()> {
        let reading_id = reading.id();
        let new_row = to_new_row(reading);

        self.run_blocking(move |connection| {
            diesel::insert_into(sensor_readings::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ReadingRepositoryError::DuplicateReading(reading_id)
                    }
                    _ => ReadingRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> ReadingRepositoryResult<Vec<SensorReading>> {
        self.run_blocking(|connection| {
            let rows = sensor_readings::table
                .order(sensor_readings::seq.asc())
                .select(ReadingRow::as_select())
                .load::<ReadingRow>(connection)
                .map_err(ReadingRepositoryError::persistence)?;
            rows.into_iter().map(row_to_reading).collect()
        })
        .await
    }
}

fn to_new_row(reading: &SensorReading) -> NewReadingRow {
    NewReadingRow {
        id: reading.id().into_inner(),
        sensor_id: reading.sensor_id().as_str().to_owned(),
        temperature_unit: reading.temperature_unit().as_str().to_owned(),
        temperature: reading.temperature().value(),
        humidity: reading.humidity().value(),
        created_at: reading.created_at(),
    }
}

fn row_to_reading(row: ReadingRow) -> ReadingRepositoryResult<SensorReading> {
    let ReadingRow {
        seq: _,
        id,
        sensor_id: persisted_sensor_id,
        temperature_unit: persisted_unit,
        temperature: persisted_temperature,
        humidity: persisted_humidity,
        created_at,
    } = row;

    let data = PersistedReadingData {
        id: ReadingId::from_uuid(id),
        sensor_id: SensorId::new(persisted_sensor_id).map_err(ReadingRepositoryError::persistence)?,
        temperature_unit: TemperatureUnit::try_from(persisted_unit.as_str())
            .map_err(ReadingRepositoryError::persistence)?,
        temperature: Temperature::new(persisted_temperature)
            .map_err(ReadingRepositoryError::persistence)?,
        humidity: Humidity::new(persisted_humidity).map_err(ReadingRepositoryError::persistence)?,
        created_at,
    };
    Ok(SensorReading::from_persisted(data))
}
