use na::Vector3;

/// Orthogonal periodic box described by the lo/hi bounds the engine writes
/// into its data and dump files.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationBox {
    pub lo: Vector3<f64>,
    pub hi: Vector3<f64>,
}

impl SimulationBox {
    pub fn from_bounds(xlo: f64, xhi: f64, ylo: f64, yhi: f64, zlo: f64, zhi: f64) -> Self {
        Self {
            lo: Vector3::new(xlo, ylo, zlo),
            hi: Vector3::new(xhi, yhi, zhi),
        }
    }

    pub fn lengths(&self) -> Vector3<f64> {
        self.hi - self.lo
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.lo + self.hi) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_and_center() {
        let sim_box = SimulationBox::from_bounds(0.0, 10.0, -2.0, 2.0, 1.0, 4.0);
        assert_eq!(sim_box.lengths(), Vector3::new(10.0, 4.0, 3.0));
        assert_eq!(sim_box.center(), Vector3::new(5.0, 0.0, 2.5));
    }
}
