use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::collector::collect_readings;
use crate::console::{Answer, Console, INVALID_NUMBER};
use crate::curie;
use crate::dielectric::DielectricTable;
use crate::lab_notes;
use crate::material::{Material, MaterialTable};
use crate::report;
use crate::session::Session;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Theory,
    Apparatus,
    Procedure,
    Precautions,
    Simulate,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            1 => MenuChoice::Theory,
            2 => MenuChoice::Apparatus,
            3 => MenuChoice::Procedure,
            4 => MenuChoice::Precautions,
            5 => MenuChoice::Simulate,
            6 => MenuChoice::Exit,
            _ => return None,
        })
    }
}

const MENU: &str = "
===== Dielectric Constant and Curie Temperature Simulation =====
1. Show Theory
2. Show Apparatus
3. Show Procedure
4. Show Precautions
5. Start Simulation
6. Exit";

/// Interactive lab simulator: main menu, material selection and the
/// measurement flow, over any console.
pub struct Simulator<R, W> {
    console: Console<R, W>,
    materials: MaterialTable,
    /// Directory receiving the results files
    output_dir: PathBuf,
}

impl<R: BufRead, W: Write> Simulator<R, W> {
    pub fn new(input: R, output: W, materials: MaterialTable, output_dir: PathBuf) -> Self {
        Simulator {
            console: Console::new(input, output),
            materials,
            output_dir,
        }
    }

    /// Show the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.console.out(), "{}", MENU)?;
            let choice = match self.console.ask::<u32>("Enter your choice: ")? {
                Answer::Value(number) => MenuChoice::from_number(number),
                Answer::Malformed(_) => {
                    writeln!(self.console.out(), "{}", INVALID_NUMBER)?;
                    continue;
                }
                Answer::Closed => Some(MenuChoice::Exit),
            };

            match choice {
                Some(MenuChoice::Theory) => write!(self.console.out(), "{}", lab_notes::THEORY)?,
                Some(MenuChoice::Apparatus) => {
                    write!(self.console.out(), "{}", lab_notes::APPARATUS)?
                }
                Some(MenuChoice::Procedure) => {
                    write!(self.console.out(), "{}", lab_notes::PROCEDURE)?
                }
                Some(MenuChoice::Precautions) => {
                    write!(self.console.out(), "{}", lab_notes::PRECAUTIONS)?
                }
                Some(MenuChoice::Simulate) => self.simulate()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.console.out(), "Exiting program.")?;
                    return Ok(());
                }
                None => writeln!(self.console.out(), "Invalid choice. Try again.")?,
            }
        }
    }

    /// List the materials and ask until a valid number is given.
    /// Returns `None` if input runs out first.
    fn select_material(&mut self) -> io::Result<Option<Material>> {
        writeln!(self.console.out(), "\nAvailable materials:")?;
        for (index, material) in self.materials.iter().enumerate() {
            writeln!(self.console.out(), "{}. {}", index + 1, material.name)?;
        }

        let count = self.materials.len();
        let mut prompt = format!("Select a material (1-{}): ", count);
        loop {
            let selected = match self.console.ask::<usize>(&prompt)? {
                Answer::Value(number) => self.materials.by_number(number),
                Answer::Malformed(_) => None,
                Answer::Closed => return Ok(None),
            };
            if let Some(material) = selected {
                return Ok(Some(material.clone()));
            }
            prompt = format!(
                "Invalid selection. Please enter a number between 1 and {}: ",
                count
            );
        }
    }

    /// One complete measurement run for a freshly selected material.
    pub fn simulate(&mut self) -> io::Result<()> {
        let material = match self.select_material()? {
            Some(material) => material,
            None => return Ok(()),
        };
        log::info!("Starting simulation for {}", material.name);

        let mut session = Session::new(material);
        collect_readings(&mut self.console, &mut session)?;
        if session.is_empty() {
            writeln!(self.console.out(), "\nNo data entered. Returning to main menu.")?;
            return Ok(());
        }

        let table = DielectricTable::from_session(&session);
        report::write_results(self.console.out(), &session.material, &table)?;
        self.report_curie_temperature(&session.material, &table)?;
        report::write_graph(self.console.out(), &table)?;

        match report::save(&self.output_dir, &session.material, &table) {
            Ok(path) => {
                log::info!("Results written to {}", path.display());
                let name = path.file_name().unwrap_or(path.as_os_str());
                writeln!(
                    self.console.out(),
                    "\nResults saved to '{}'.",
                    name.to_string_lossy()
                )
            }
            Err(e) => {
                log::error!("{:#}", e);
                writeln!(
                    self.console.out(),
                    "\nError: Could not create file for saving results."
                )
            }
        }
    }

    fn report_curie_temperature(
        &mut self,
        material: &Material,
        table: &DielectricTable,
    ) -> io::Result<()> {
        let out = self.console.out();
        let reference_c = match material.ferroelectric_curie_c() {
            Some(reference_c) => reference_c,
            None => {
                return writeln!(
                    out,
                    "\nNote: This material doesn't have a Curie temperature (non-ferroelectric)."
                )
            }
        };

        match curie::estimate(table, reference_c) {
            Ok(estimate) => {
                writeln!(out, "\nEstimated Curie Temperature: {}°C", estimate.estimated_c)?;
                writeln!(
                    out,
                    "Expected Curie Temperature for {}: {:.2}°C",
                    material.name, estimate.reference_c
                )?;
                writeln!(out, "Difference: {:.2}°C", estimate.difference())
            }
            Err(e) => {
                log::debug!("{}", e);
                writeln!(out, "\nNot enough data points to estimate Curie temperature.")
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_output()
    }
}
