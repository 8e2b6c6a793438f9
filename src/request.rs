use crate::constants::CRYSTALLIZE_CUTOFF_FACTOR;
use crate::elements::{self, ElementData};
use crate::errors::{OpalError, Result};

/// One simulation request, as given on the command line or by a library
/// caller.
#[derive(Clone, Debug)]
pub struct SimulationRequest {
    pub element: String,
    /// Target temperature in kelvin.
    pub temperature: f64,
    /// Lattice replications per axis.
    pub size: usize,
    /// Derive the lattice parameter from the interaction cutoff instead of
    /// the tabulated equilibrium value.
    pub crystallize: bool,
}

impl SimulationRequest {
    pub fn new(element: &str, temperature: f64, size: usize, crystallize: bool) -> Self {
        Self {
            element: element.to_string(),
            temperature,
            size,
            crystallize,
        }
    }

    /// Resolves the element through the parameter tables and checks the
    /// numeric inputs. The element is checked first so an unknown symbol
    /// fails before anything else.
    pub fn validate(&self) -> Result<ElementData> {
        let data = elements::lookup(&self.element)?;
        if self.temperature <= 0.0 {
            return Err(OpalError::NonPositiveTemperature {
                value: self.temperature,
            });
        }
        if self.size == 0 {
            return Err(OpalError::ZeroSize);
        }
        Ok(data)
    }

    /// The lattice parameter the run starts from.
    pub fn lattice_parameter(&self, data: &ElementData) -> f64 {
        if self.crystallize {
            data.lj.cutoff * CRYSTALLIZE_CUTOFF_FACTOR
        } else {
            data.crystal.lattice_parameter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crystallize_flag_selects_the_lattice_parameter() {
        let relaxed = SimulationRequest::new("Cu", 300.0, 3, false);
        let crystallizing = SimulationRequest::new("Cu", 300.0, 3, true);
        let data = relaxed.validate().unwrap();

        assert_eq!(relaxed.lattice_parameter(&data), 3.615);
        assert_eq!(
            crystallizing.lattice_parameter(&data),
            data.lj.cutoff * CRYSTALLIZE_CUTOFF_FACTOR
        );
    }

    #[test]
    fn temperature_must_be_positive() {
        let request = SimulationRequest::new("Ar", -10.0, 3, false);
        assert!(matches!(
            request.validate().unwrap_err(),
            OpalError::NonPositiveTemperature { value } if value == -10.0
        ));

        let request = SimulationRequest::new("Ar", 0.0, 3, false);
        assert!(request.validate().is_err());
    }

    #[test]
    fn size_must_be_at_least_one() {
        let request = SimulationRequest::new("Ar", 100.0, 0, false);
        assert!(matches!(
            request.validate().unwrap_err(),
            OpalError::ZeroSize
        ));
    }

    #[test]
    fn unknown_element_fails_before_numeric_checks() {
        let request = SimulationRequest::new("Zz", -1.0, 0, false);
        assert!(matches!(
            request.validate().unwrap_err(),
            OpalError::UnknownElement { .. }
        ));
    }
}
