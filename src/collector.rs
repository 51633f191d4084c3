use std::io::{self, BufRead, Write};

use crate::console::{Answer, Console, INVALID_NUMBER};
use crate::session::{Reading, Session};

/// Temperature input that ends data entry.
pub const STOP_TEMPERATURE: i32 = -1;

/// Read (temperature, capacitance) pairs into `session` until the stop
/// temperature is entered or input runs out, then sort the readings.
///
/// Malformed numbers re-ask the same field. Physically impossible values
/// discard the pair and start again at the temperature prompt.
pub fn collect_readings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> io::Result<()> {
    writeln!(
        console.out(),
        "\nEnter temperature (°C) and capacitance (pF). Type {} for temperature to stop.",
        STOP_TEMPERATURE
    )?;

    'pairs: loop {
        let temperature_c = match console.ask::<i32>("Temperature (°C): ")? {
            Answer::Value(STOP_TEMPERATURE) | Answer::Closed => break,
            Answer::Value(temperature_c) => temperature_c,
            Answer::Malformed(text) => {
                log::debug!("Malformed temperature {:?}", text);
                writeln!(console.out(), "{}", INVALID_NUMBER)?;
                continue;
            }
        };

        let capacitance_pf = loop {
            match console.ask::<f64>("Capacitance (pF): ")? {
                Answer::Value(capacitance_pf) if capacitance_pf.is_finite() => break capacitance_pf,
                Answer::Value(_) | Answer::Malformed(_) => {
                    writeln!(console.out(), "{}", INVALID_NUMBER)?
                }
                Answer::Closed => break 'pairs,
            }
        };

        match Reading::new(temperature_c, capacitance_pf) {
            Ok(reading) => session.push(reading),
            Err(e) => {
                log::debug!("Rejected reading: {}", e);
                writeln!(
                    console.out(),
                    "Invalid values. Temperature must be above -273°C and capacitance must be positive."
                )?;
            }
        }
    }

    session.sort();
    log::info!(
        "Collected {} readings for {}",
        session.readings().len(),
        session.material.name
    );
    Ok(())
}
