use thiserror::Error;
use uom::si::{capacitance::picofarad, f64::Capacitance};

use crate::material::Material;

/// Lowest accepted temperature is one degree above this bound.
pub const ABSOLUTE_ZERO_C: i32 = -273;

#[derive(Debug, Error, PartialEq)]
pub enum ReadingError {
    #[error("temperature {0}°C is not above -273°C")]
    BelowAbsoluteZero(i32),
    #[error("capacitance {0} pF is not positive")]
    NonPositiveCapacitance(f64),
}

/// One (temperature, capacitance) measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reading {
    pub temperature_c: i32,
    pub capacitance: Capacitance,
}

impl Reading {
    pub fn new(temperature_c: i32, capacitance_pf: f64) -> Result<Self, ReadingError> {
        if temperature_c <= ABSOLUTE_ZERO_C {
            return Err(ReadingError::BelowAbsoluteZero(temperature_c));
        }
        if capacitance_pf.is_nan() || capacitance_pf <= 0.0 {
            return Err(ReadingError::NonPositiveCapacitance(capacitance_pf));
        }
        Ok(Reading {
            temperature_c,
            capacitance: Capacitance::new::<picofarad>(capacitance_pf),
        })
    }
}

/// A material together with the readings collected for it during one run.
#[derive(Clone, Debug)]
pub struct Session {
    pub material: Material,
    readings: Vec<Reading>,
}

impl Session {
    pub fn new(material: Material) -> Self {
        Session {
            material,
            readings: Vec::new(),
        }
    }

    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    /// Order readings by ascending temperature. Readings with equal
    /// temperatures keep their entry order.
    pub fn sort(&mut self) {
        self.readings.sort_by_key(|reading| reading.temperature_c);
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
