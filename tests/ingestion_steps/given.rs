//! Given steps for sensor ingestion BDD scenarios.

use super::world::{IngestionWorld, run_async};
use rstest_bdd_macros::given;

#[given("an empty reading store")]
fn empty_reading_store(world: &mut IngestionWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.gateway.list_readings())?;
    if !stored.is_empty() {
        return Err(eyre::eyre!("expected a fresh store, found {} readings", stored.len()));
    }
    Ok(())
}
