mod app;
mod collector;
mod console;
mod curie;
mod dielectric;
mod lab_notes;
mod material;
mod report;
mod session;

use std::io;
use std::path::PathBuf;

use app::Simulator;
use material::MaterialTable;

/// Materials come from the JSON5 file named by the first argument, if any.
fn load_materials(path: Option<String>) -> MaterialTable {
    match path {
        Some(path) => match MaterialTable::load(&path) {
            Ok(materials) => {
                log::info!("Loaded {} materials from {}", materials.len(), path);
                materials
            }
            Err(e) => {
                log::error!("Could not load materials from {}: {:#}", path, e);
                MaterialTable::builtin()
            }
        },
        None => MaterialTable::builtin(),
    }
}

fn main() {
    env_logger::init();

    let materials = load_materials(std::env::args().nth(1));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut simulator =
        Simulator::new(stdin.lock(), stdout.lock(), materials, PathBuf::from("."));

    if let Err(e) = simulator.run() {
        log::error!("Console I/O failed: {}", e);
    }
}
