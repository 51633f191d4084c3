//! Static texts shown from the main menu.

pub const THEORY: &str = "
--- THEORY ---
Dielectric materials are insulating substances where electrostatic fields persist.
The dielectric constant (ε) is the ratio of capacitance with and without the dielectric.
For materials like BaTiO3, ε increases as temperature increases, peaking at Curie temperature.
After Curie temperature, ferroelectricity is lost, and ε decreases.
";

pub const APPARATUS: &str = "
--- APPARATUS USED ---
1. Barium Titanate (BaTiO3) Sample
2. Oven with temperature controller
3. Digital capacitance meter
4. RTD sensor for temperature
5. Probe arrangement with aluminum foil
";

pub const PROCEDURE: &str = "
--- PROCEDURE ---
1. Mount the sample with probes and aluminum foil
2. Connect probes to the capacitance meter
3. Heat the sample in oven
4. Measure capacitance at different temperatures
5. Calculate ε using ε = C / C0, where C0 = ε0*A/t
";

pub const PRECAUTIONS: &str = "
--- PRECAUTIONS ---
1. Probe should touch sample gently.
2. Take small intervals near Curie temperature.
3. Take reading only when oven is OFF.
";
