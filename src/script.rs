//! Assembles the declarative input script handed to the engine.
//!
//! The script carries the whole run: units, periodic boundaries, lattice
//! geometry, pair interaction, mass, velocity creation, thermostat,
//! timestep, trajectory dump, data write and the fixed run command.

use std::fs;
use std::path::Path;

use crate::constants::{
    DATA_FILE, DUMP_EVERY, DUMP_FILE, RUN_STEPS, TEMPERATURE_VELOCITY_FACTOR, THERMOSTAT_DAMP_PS,
    TIMESTEP_PS, VELOCITY_SEED,
};
use crate::elements::ElementData;
use crate::errors::{OpalError, Result};
use crate::request::SimulationRequest;

/// The full engine script for one run.
pub struct InputScript {
    text: String,
}

impl InputScript {
    pub fn build(request: &SimulationRequest, data: &ElementData) -> Self {
        let text = format!(
            "\
units metal
atom_style atomic
boundary p p p

lattice {symmetry} {a}
region cell block 0 {n} 0 {n} 0 {n}
create_box 1 cell
create_atoms 1 box

pair_style lj/cut {cutoff}
pair_coeff 1 1 {epsilon} {sigma}
mass 1 {mass}

velocity all create {velocity_temperature} {seed} dist gaussian
fix thermostat all nvt temp {temperature} {temperature} {damp}
timestep {timestep}

dump trajectory all atom {dump_every} {dump_file}
write_data {data_file}
run {steps}
",
            symmetry = data.crystal.symmetry.as_str(),
            a = request.lattice_parameter(data),
            n = request.size,
            cutoff = data.lj.cutoff,
            epsilon = data.lj.epsilon,
            sigma = data.lj.sigma,
            mass = data.mass,
            velocity_temperature = request.temperature * TEMPERATURE_VELOCITY_FACTOR,
            seed = VELOCITY_SEED,
            temperature = request.temperature,
            damp = THERMOSTAT_DAMP_PS,
            timestep = TIMESTEP_PS,
            dump_every = DUMP_EVERY,
            dump_file = DUMP_FILE,
            data_file = DATA_FILE,
            steps = RUN_STEPS,
        );
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the script to `path`, replacing whatever a previous call left
    /// there.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.text).map_err(|e| OpalError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;

    fn script_for(request: &SimulationRequest) -> InputScript {
        let data = request.validate().unwrap();
        InputScript::build(request, &data)
    }

    #[test]
    fn velocity_target_is_twice_the_requested_temperature() {
        let request = SimulationRequest::new("Cu", 300.0, 3, false);
        let script = script_for(&request);
        assert!(script.text().contains("velocity all create 600 87287"));
        assert!(script
            .text()
            .contains("fix thermostat all nvt temp 300 300 0.1"));
    }

    #[test]
    fn lattice_line_follows_the_crystallize_flag() {
        let relaxed = script_for(&SimulationRequest::new("Cu", 300.0, 3, false));
        assert!(relaxed.text().contains("lattice fcc 3.615"));

        let crystallizing = script_for(&SimulationRequest::new("Cu", 300.0, 3, true));
        let a = elements::lookup("Cu").unwrap().lj.cutoff * 0.8;
        assert!(crystallizing.text().contains(&format!("lattice fcc {a}")));
    }

    #[test]
    fn bcc_elements_render_a_bcc_lattice() {
        let script = script_for(&SimulationRequest::new("Fe", 500.0, 2, false));
        assert!(script.text().contains("lattice bcc 2.866"));
        assert!(script.text().contains("region cell block 0 2 0 2 0 2"));
    }

    #[test]
    fn run_and_output_directives_are_fixed() {
        let script = script_for(&SimulationRequest::new("Ar", 80.0, 3, false));
        assert!(script.text().contains("run 10000"));
        assert!(script
            .text()
            .contains(&format!("dump trajectory all atom 100 {DUMP_FILE}")));
        assert!(script.text().contains(&format!("write_data {DATA_FILE}")));
        assert!(script.text().contains("timestep 0.001"));
    }

    #[test]
    fn writing_twice_overwrites_the_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.md");

        let first = script_for(&SimulationRequest::new("Cu", 300.0, 3, false));
        first.write(&path).unwrap();
        let second = script_for(&SimulationRequest::new("Ar", 80.0, 2, false));
        second.write(&path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, second.text());
        assert!(!on_disk.contains("lattice fcc 3.615"));
    }
}
