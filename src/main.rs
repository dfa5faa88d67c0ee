use std::error::Error;
use tracing_subscriber::EnvFilter;

mod consts;
mod rgb;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Started");

    let mut leds = rgb::init_leds()?;
    leds.run(consts::CYCLE_COUNT, consts::PHASE_DELAY)?;
    leds.release()?;

    println!("Finished");
    Ok(())
}
