use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use uom::si::{capacitance::picofarad, length::millimeter};

use crate::dielectric::DielectricTable;
use crate::material::Material;

pub const RESULTS_SUFFIX: &str = "_results.txt";

/// Bar length of the largest dielectric constant in the ASCII graph.
pub const GRAPH_WIDTH: f64 = 50.0;
pub const BAR: &str = "#";

const RULE: &str = "--------------------------------------------------------";

/// Material name, sample dimensions and vacuum capacitance.
fn write_summary<W: Write>(
    w: &mut W,
    material: &Material,
    table: &DielectricTable,
) -> io::Result<()> {
    let side = material.side().get::<millimeter>();
    writeln!(w, "Material: {}", material.name)?;
    writeln!(
        w,
        "Sample dimensions: {:.2} mm × {:.2} mm × {:.2} mm",
        side,
        side,
        material.thickness.get::<millimeter>()
    )?;
    writeln!(
        w,
        "Vacuum capacitance (C0): {:.2} pF\n",
        table.vacuum_capacitance.get::<picofarad>()
    )
}

fn write_rows<W: Write>(w: &mut W, table: &DielectricTable) -> io::Result<()> {
    writeln!(w, "{}", RULE)?;
    for row in table.rows.iter() {
        writeln!(
            w,
            "{}\t\t{:.2}\t\t{:.2}",
            row.temperature_c,
            row.capacitance.get::<picofarad>(),
            row.dielectric_constant
        )?;
    }
    Ok(())
}

/// Results block printed on the console after data entry.
pub fn write_results<W: Write>(
    w: &mut W,
    material: &Material,
    table: &DielectricTable,
) -> io::Result<()> {
    writeln!(w, "\n------ RESULTS ------")?;
    write_summary(w, material, table)?;
    writeln!(w, "Temp (°C)\tCapacitance (pF)\tDielectric Constant (ε)")?;
    write_rows(w, table)
}

/// Number of bar characters for `dielectric_constant` at the given scale,
/// never more than `GRAPH_WIDTH`. Subnormal peaks make `scale` infinite.
pub fn bar_length(dielectric_constant: f64, scale: f64) -> usize {
    let bars = (dielectric_constant * scale).floor();
    if bars.is_nan() {
        0
    } else {
        bars.min(GRAPH_WIDTH) as usize
    }
}

/// Horizontal bar chart of dielectric constant against temperature,
/// scaled so the largest value spans `GRAPH_WIDTH` characters.
pub fn write_graph<W: Write>(w: &mut W, table: &DielectricTable) -> io::Result<()> {
    let peak = match table.peak() {
        Some(peak) => peak.dielectric_constant,
        None => return writeln!(w, "\nNo data to display graph."),
    };
    let scale = GRAPH_WIDTH / peak;

    writeln!(w, "\nASCII Graph: Dielectric Constant vs Temperature")?;
    writeln!(w, "-----------------------------------------------")?;
    for row in table.rows.iter() {
        writeln!(
            w,
            "{:>4}°C | {} ({:.2})",
            row.temperature_c,
            BAR.repeat(bar_length(row.dielectric_constant, scale)),
            row.dielectric_constant
        )?;
    }
    Ok(())
}

/// File name for a material's results, spaces replaced by underscores.
pub fn results_file_name(material_name: &str) -> String {
    format!("{}{}", material_name.replace(' ', "_"), RESULTS_SUFFIX)
}

fn write_file<W: Write>(
    w: &mut W,
    material: &Material,
    table: &DielectricTable,
) -> io::Result<()> {
    writeln!(w, "Dielectric Constant Measurement Results")?;
    writeln!(
        w,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    write_summary(w, material, table)?;
    writeln!(w, "Temperature (°C)\tCapacitance (pF)\tDielectric Constant (ε)")?;
    write_rows(w, table)?;
    w.flush()
}

/// Write the results table into `dir`, replacing any earlier file for the
/// same material. Returns the path written.
pub fn save(dir: &Path, material: &Material, table: &DielectricTable) -> anyhow::Result<PathBuf> {
    let path = dir.join(results_file_name(&material.name));
    let file =
        File::create(&path).with_context(|| format!("Could not create {}", path.display()))?;
    write_file(&mut BufWriter::new(file), material, table)
        .with_context(|| format!("Could not write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Reading, Session};
    use std::fs;
    use test_case::test_case;

    fn table(material: &Material, pairs: &[(i32, f64)]) -> DielectricTable {
        let mut session = Session::new(material.clone());
        for (t, c) in pairs {
            session.push(Reading::new(*t, *c).unwrap());
        }
        session.sort();
        DielectricTable::from_session(&session)
    }

    fn barium_titanate() -> Material {
        Material::new("Barium Titanate", 48.0, 1.42, Some(120.0))
    }

    fn example_table() -> DielectricTable {
        table(&barium_titanate(), &[(20, 10.0), (100, 50.0), (120, 80.0), (150, 40.0)])
    }

    fn bar_of(line: &str) -> usize {
        line.matches(BAR).count()
    }

    #[test_case("Barium Titanate" => "Barium_Titanate_results.txt")]
    #[test_case("Quartz" => "Quartz_results.txt")]
    #[test_case("Lead Zirconate Titanate" => "Lead_Zirconate_Titanate_results.txt")]
    fn file_name(material_name: &str) -> String {
        results_file_name(material_name)
    }

    #[test_case(10.0, 5.0 => 50)]
    #[test_case(2.99, 10.0 => 29)]
    #[test_case(0.01, 1.0 => 0)]
    #[test_case(3e-310, f64::INFINITY => 50 ; "infinite scale")]
    #[test_case(0.0, f64::INFINITY => 0 ; "zero times infinite scale")]
    #[test_case(1.0, 1e300 => 50 ; "huge scale")]
    fn bar_length_floors(dielectric_constant: f64, scale: f64) -> usize {
        bar_length(dielectric_constant, scale)
    }

    #[test]
    fn graph_longest_bar_is_peak_row() {
        let mut out = Vec::new();
        write_graph(&mut out, &example_table()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<_> = text.lines().filter(|l| l.contains("°C |")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("  20°C | "));

        let longest = rows.iter().max_by_key(|l| bar_of(l)).unwrap();
        assert!(longest.starts_with(" 120°C | "));
        assert!(bar_of(longest) >= 49 && bar_of(longest) <= 50);
        assert!(rows.iter().all(|l| bar_of(l) <= 50));
    }

    #[test]
    fn graph_of_vanishing_capacitance() {
        let mut out = Vec::new();
        let table = table(&barium_titanate(), &[(20, 1e-310), (40, 5e-311)]);
        write_graph(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<_> = text.lines().filter(|l| l.contains("°C |")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|l| bar_of(l) <= 50));
        assert_eq!(bar_of(rows[0]), 50);
    }

    #[test]
    fn graph_without_data() {
        let mut out = Vec::new();
        write_graph(&mut out, &table(&barium_titanate(), &[])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nNo data to display graph.\n");
    }

    #[test]
    fn results_block() {
        let mut out = Vec::new();
        write_results(&mut out, &barium_titanate(), &example_table()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Material: Barium Titanate\n"));
        assert!(text.contains("Sample dimensions: 6.93 mm × 6.93 mm × 1.42 mm\n"));
        assert!(text.contains("Vacuum capacitance (C0): 299.15 pF\n"));
        assert!(text.contains("120\t\t80.00\t\t0.27\n"));
    }

    #[test]
    fn save_writes_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), &barium_titanate(), &example_table()).unwrap();

        assert_eq!(path, dir.path().join("Barium_Titanate_results.txt"));
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Dielectric Constant Measurement Results");
        assert!(lines[1].starts_with("Generated: "));
        assert_eq!(lines[2], "Material: Barium Titanate");
        assert!(text.contains("Temperature (°C)\tCapacitance (pF)\tDielectric Constant (ε)\n"));
        assert_eq!(lines.last().unwrap(), &"150\t\t40.00\t\t0.13");
        assert_eq!(text.matches("\t\t").count(), 8);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("Barium_Titanate_results.txt");
        fs::write(&existing, "stale contents\n".repeat(100)).unwrap();

        save(dir.path(), &barium_titanate(), &table(&barium_titanate(), &[(25, 1.0)])).unwrap();

        let text = fs::read_to_string(&existing).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.ends_with("25\t\t1.00\t\t0.00\n"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        assert!(save(&missing, &barium_titanate(), &example_table()).is_err());
    }
}
