//! When steps for sensor ingestion BDD scenarios.

use super::world::{IngestionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use sensorhub::gateway::InboundFrame;
use serde_json::{Value, json};

const CREATE: &str = "create sensor data";
const LIST: &str = "show all sensor data";

fn parse_number(raw: &str) -> Result<Value, eyre::Report> {
    let number: f64 = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("step value {raw:?} is not a number"))?;
    Ok(json!(number))
}

fn dispatch(world: &mut IngestionWorld, event: &str, data: Option<Value>) {
    let frame = InboundFrame {
        event: event.to_owned(),
        data,
    };
    world.last_reply = Some(run_async(world.gateway.handle_frame(&frame)));
}

#[when(r#"sensor "{sensor}" reports {temperature} degrees "{unit}" at {humidity} percent humidity"#)]
#[expect(
    clippy::too_many_arguments,
    reason = "Step definition captures every reading field from a single step"
)]
fn sensor_reports(
    world: &mut IngestionWorld,
    sensor: String,
    temperature: String,
    unit: String,
    humidity: String,
) -> Result<(), eyre::Report> {
    let payload = json!({
        "sensorId": sensor,
        "temperatureUnit": unit,
        "temperature": parse_number(&temperature)?,
        "humidity": parse_number(&humidity)?,
    });
    dispatch(world, CREATE, Some(payload));
    Ok(())
}

#[when(r#"a reading is submitted as the text "{text}""#)]
fn reading_submitted_as_text(world: &mut IngestionWorld, text: String) {
    dispatch(world, CREATE, Some(Value::String(text)));
}

#[when("the reading history is requested")]
fn reading_history_requested(world: &mut IngestionWorld) {
    dispatch(world, LIST, None);
}
