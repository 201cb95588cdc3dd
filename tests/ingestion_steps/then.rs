//! Then steps for sensor ingestion BDD scenarios.

use super::world::{IngestionWorld, run_async};
use rstest_bdd_macros::then;
use serde_json::Value;

fn listed_sensors(world: &IngestionWorld) -> Result<Vec<String>, eyre::Report> {
    let (event, data) = world.last_reply_json()?;
    if event != "message" {
        return Err(eyre::eyre!("expected a message reply, found {event}: {data}"));
    }
    let readings = data
        .as_array()
        .ok_or_else(|| eyre::eyre!("expected an array of readings, found {data}"))?;
    readings
        .iter()
        .map(|reading| {
            reading
                .get("sensorId")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| eyre::eyre!("reading without sensorId: {reading}"))
        })
        .collect()
}

#[then(r#"the history lists sensors "{sensors}" in order"#)]
fn history_lists_sensors(world: &IngestionWorld, sensors: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = sensors.split(',').map(str::to_owned).collect();
    let listed = listed_sensors(world)?;
    if listed != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {listed:?}"));
    }
    Ok(())
}

#[then("the history lists no readings")]
fn history_lists_no_readings(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let listed = listed_sensors(world)?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected no readings, found {listed:?}"));
    }
    Ok(())
}

#[then(r#"the reply is an exception with message "{message}""#)]
fn reply_is_exception(world: &IngestionWorld, message: String) -> Result<(), eyre::Report> {
    let (event, data) = world.last_reply_json()?;
    if event != "exception" {
        return Err(eyre::eyre!("expected an exception reply, found {event}"));
    }
    if data.get("status").and_then(Value::as_str) != Some("error") {
        return Err(eyre::eyre!("expected status \"error\" in {data}"));
    }
    let found = data.get("message").and_then(Value::as_str);
    if found != Some(message.as_str()) {
        return Err(eyre::eyre!("expected message {message:?}, found {found:?}"));
    }
    Ok(())
}

#[then(r#"field "{field}" reports "{message}""#)]
fn field_reports(
    world: &IngestionWorld,
    field: String,
    message: String,
) -> Result<(), eyre::Report> {
    let (_, data) = world.last_reply_json()?;
    let messages = data
        .get("errors")
        .and_then(|errors| errors.get(&field))
        .and_then(Value::as_array)
        .ok_or_else(|| eyre::eyre!("no errors reported for {field} in {data}"))?;
    if !messages.iter().any(|entry| entry.as_str() == Some(message.as_str())) {
        return Err(eyre::eyre!("{field} errors {messages:?} lack {message:?}"));
    }
    Ok(())
}

#[then("the reply carries no field errors")]
fn reply_carries_no_field_errors(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let (_, data) = world.last_reply_json()?;
    if data.get("errors").is_some() {
        return Err(eyre::eyre!("expected no errors key in {data}"));
    }
    Ok(())
}

#[then("the reading history is empty")]
fn reading_history_is_empty(world: &IngestionWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.gateway.list_readings())?;
    if !stored.is_empty() {
        return Err(eyre::eyre!("expected no stored readings, found {}", stored.len()));
    }
    Ok(())
}
