use thiserror::Error;

use crate::dielectric::DielectricTable;

/// Fewest readings that can bracket a dielectric peak.
pub const MIN_READINGS: usize = 2;

#[derive(Debug, Error, PartialEq)]
#[error("not enough data points to estimate Curie temperature ({readings} readings)")]
pub struct InsufficientData {
    pub readings: usize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurieEstimate {
    /// Temperature of the reading with the largest dielectric constant
    pub estimated_c: i32,
    pub reference_c: f64,
}

impl CurieEstimate {
    pub fn difference(&self) -> f64 {
        (f64::from(self.estimated_c) - self.reference_c).abs()
    }
}

/// Estimate the Curie temperature as the temperature of peak dielectric
/// response. Assumes the readings bracket a single peak; no fitting is done.
pub fn estimate(
    table: &DielectricTable,
    reference_c: f64,
) -> Result<CurieEstimate, InsufficientData> {
    if table.rows.len() < MIN_READINGS {
        return Err(InsufficientData {
            readings: table.rows.len(),
        });
    }
    let peak = table.peak().ok_or(InsufficientData { readings: 0 })?;
    Ok(CurieEstimate {
        estimated_c: peak.temperature_c,
        reference_c,
    })
}
