use na::{DVector, Matrix3xX};

use crate::simulation_box::SimulationBox;

/// The initial configuration the engine wrote out before integrating.
#[derive(Debug)]
pub struct Structure {
    pub n_atoms: usize,
    pub type_ids: DVector<usize>,
    /// Mass per atom type, indexed by type id minus one.
    pub masses: Vec<f64>,
    pub positions: Matrix3xX<f64>,
    pub sim_box: SimulationBox,
}

impl Structure {
    pub fn mass_i(&self, i: usize) -> f64 {
        self.masses[self.type_ids[i] - 1]
    }
}
