use crate::consts::{B_LED, G_LED, R_LED};
use embedded_hal::digital::OutputPin;
use rppal::gpio::Gpio;
use std::error::Error;
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

/// One lighting phase of the cycle, in the order they are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Blue,
    Red,
    Green,
}

impl Phase {
    const SEQUENCE: [Phase; 3] = [Phase::Blue, Phase::Red, Phase::Green];
}

#[derive(Debug)]
pub struct Rgb<P> {
    red: P,
    green: P,
    blue: P,
}

/// Claims the three LED pins as outputs, all driven low.
pub fn init_leds() -> Result<Rgb<rppal::gpio::OutputPin>, Box<dyn Error>> {
    debug!("Initializing leds");
    let gpio = Gpio::new()?;
    let red = gpio.get(R_LED)?.into_output();
    debug!("RED done");
    let green = gpio.get(G_LED)?.into_output();
    debug!("GREEN done");
    let blue = gpio.get(B_LED)?.into_output();
    debug!("BLUE done");
    Ok(Rgb::new(red, green, blue)?)
}

impl<P: OutputPin> Rgb<P> {
    pub fn new(red: P, green: P, blue: P) -> Result<Self, P::Error> {
        let mut rgb = Rgb { red, green, blue };
        rgb.red.set_low()?;
        rgb.green.set_low()?;
        rgb.blue.set_low()?;
        Ok(rgb)
    }

    fn set_phase(&mut self, phase: Phase) -> Result<(), P::Error> {
        trace!(?phase, "phase transition");
        // Lower the outgoing pins before raising the next one so that no
        // two LEDs are ever lit at the same instant.
        match phase {
            Phase::Blue => {
                self.red.set_low()?;
                self.green.set_low()?;
                self.blue.set_high()?;
            }
            Phase::Red => {
                self.blue.set_low()?;
                self.green.set_low()?;
                self.red.set_high()?;
            }
            Phase::Green => {
                self.red.set_low()?;
                self.blue.set_low()?;
                self.green.set_high()?;
            }
        }
        Ok(())
    }

    /// Runs the blue -> red -> green pattern `iterations` times, sleeping
    /// `delay` before every phase transition. A pin-write failure aborts
    /// the run immediately.
    pub fn run(&mut self, iterations: u32, delay: Duration) -> Result<(), P::Error> {
        debug!(iterations, ?delay, "starting cycle loop");
        for _ in 0..iterations {
            for phase in Phase::SEQUENCE {
                thread::sleep(delay);
                self.set_phase(phase)?;
            }
        }
        Ok(())
    }

    /// Drives all pins low and gives the handles back to the system.
    /// rppal resets a dropped pin to its original input state, so the
    /// lines are left undriven.
    pub fn release(mut self) -> Result<(), P::Error> {
        debug!("Releasing leds");
        self.red.set_low()?;
        self.green.set_low()?;
        self.blue.set_low()?;
        Ok(())
    }
}
