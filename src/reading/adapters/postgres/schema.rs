//! Diesel schema for reading persistence.

diesel::table! {
    /// Append-only sensor readings.
    sensor_readings (id) {
        /// Insertion sequence; defines list order.
        seq -> Int8,
        /// Reading identifier.
        id -> Uuid,
        /// Originating sensor identifier.
        sensor_id -> Text,
        /// Temperature unit symbol (`C` or `F`).
        temperature_unit -> Text,
        /// Temperature magnitude.
        temperature -> Float8,
        /// Relative humidity in percent.
        humidity -> Float8,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
