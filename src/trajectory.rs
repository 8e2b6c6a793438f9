use na::Matrix3xX;

use crate::simulation_box::SimulationBox;

/// One dumped configuration.
#[derive(Debug)]
pub struct Frame {
    pub step: usize,
    pub positions: Matrix3xX<f64>,
    pub sim_box: SimulationBox,
}

/// The time-stepped output of a run, keyed against the initial structure
/// as its topology.
#[derive(Debug)]
pub struct Trajectory {
    pub element: String,
    pub n_atoms: usize,
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(element: &str, n_atoms: usize, frames: Vec<Frame>) -> Self {
        Self {
            element: element.to_string(),
            n_atoms,
            frames,
        }
    }

    pub fn n_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }
}
