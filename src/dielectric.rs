use uom::si::{
    area::square_millimeter, capacitance::picofarad, f64::Capacitance, length::millimeter,
    ratio::ratio,
};

use crate::material::Material;
use crate::session::Session;

/// Permittivity of free space, rounded the way lab handouts quote it.
pub const VACUUM_PERMITTIVITY_F_PER_M: f64 = 8.85e-12;

/// Capacitance of a parallel-plate capacitor with the sample's geometry
/// and vacuum between the plates, using the lab handout's formula
/// `C0 = ε0 * 1e12 * A / t` with A in mm² and t in mm, read as picofarads.
pub fn vacuum_capacitance(material: &Material) -> Capacitance {
    let area_mm2 = material.area.get::<square_millimeter>();
    let thickness_mm = material.thickness.get::<millimeter>();
    Capacitance::new::<picofarad>(VACUUM_PERMITTIVITY_F_PER_M * 1e12 * area_mm2 / thickness_mm)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DielectricRow {
    pub temperature_c: i32,
    pub capacitance: Capacitance,
    pub dielectric_constant: f64,
}

/// Dielectric constants of all readings of a session, in reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct DielectricTable {
    pub vacuum_capacitance: Capacitance,
    pub rows: Vec<DielectricRow>,
}

impl DielectricTable {
    pub fn from_session(session: &Session) -> Self {
        let vacuum_capacitance = vacuum_capacitance(&session.material);
        let rows = session
            .readings()
            .iter()
            .map(|reading| DielectricRow {
                temperature_c: reading.temperature_c,
                capacitance: reading.capacitance,
                dielectric_constant: (reading.capacitance / vacuum_capacitance).get::<ratio>(),
            })
            .collect();
        DielectricTable {
            vacuum_capacitance,
            rows,
        }
    }

    /// Row with the largest dielectric constant; the earliest row wins a tie.
    pub fn peak(&self) -> Option<&DielectricRow> {
        self.rows.iter().reduce(|best, row| {
            if row.dielectric_constant > best.dielectric_constant {
                row
            } else {
                best
            }
        })
    }
}
