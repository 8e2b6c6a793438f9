//! Static parameter tables keyed by chemical symbol.
//!
//! Three tables mirror what the engine needs to set up a run: Lennard-Jones
//! pair parameters, atomic masses and the crystal structure each element
//! relaxes into. A symbol must resolve through all three to be usable.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::errors::{OpalError, Result};

/// Lennard-Jones parameters in metal units (eV, Angstrom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LjParams {
    /// Well depth in eV.
    pub epsilon: f64,
    /// Particle diameter in Angstrom.
    pub sigma: f64,
    /// Interaction cutoff distance in Angstrom.
    pub cutoff: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    Fcc,
    Bcc,
}

impl Symmetry {
    /// The name the engine's lattice command understands.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symmetry::Fcc => "fcc",
            Symmetry::Bcc => "bcc",
        }
    }
}

/// Crystal symmetry plus equilibrium lattice parameter in Angstrom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crystal {
    pub symmetry: Symmetry,
    pub lattice_parameter: f64,
}

/// Everything tabulated for one element, joined across the three tables.
#[derive(Clone, Copy, Debug)]
pub struct ElementData {
    pub symbol: &'static str,
    pub lj: LjParams,
    pub mass: f64,
    pub crystal: Crystal,
}

macro_rules! lj {
    ($e:expr, $s:expr, $c:expr) => {
        LjParams {
            epsilon: $e,
            sigma: $s,
            cutoff: $c,
        }
    };
}

macro_rules! crystal {
    ($sym:ident, $a:expr) => {
        Crystal {
            symmetry: Symmetry::$sym,
            lattice_parameter: $a,
        }
    };
}

// Metal parameters after Halicioglu and Pound (1975), argon after the
// usual liquid-argon values. Cutoffs are 2.5 sigma.
static LJ_TABLE: LazyLock<HashMap<&'static str, LjParams>> = LazyLock::new(|| {
    HashMap::from([
        ("Ar", lj!(0.0104, 3.405, 8.51)),
        ("Al", lj!(0.3922, 2.620, 6.55)),
        ("Fe", lj!(0.5264, 2.321, 5.80)),
        ("Ni", lj!(0.5197, 2.282, 5.70)),
        ("Cu", lj!(0.4094, 2.338, 5.85)),
        ("Pd", lj!(0.4267, 2.520, 6.30)),
        ("Ag", lj!(0.3448, 2.644, 6.61)),
        ("Pt", lj!(0.6817, 2.542, 6.36)),
        ("Au", lj!(0.4415, 2.637, 6.59)),
        ("Pb", lj!(0.1910, 3.175, 7.94)),
    ])
});

static MASS_TABLE: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("Ar", 39.948),
        ("Al", 26.9815),
        ("Fe", 55.845),
        ("Ni", 58.6934),
        ("Cu", 63.546),
        ("Pd", 106.42),
        ("Ag", 107.8682),
        ("Pt", 195.084),
        ("Au", 196.9666),
        ("Pb", 207.2),
    ])
});

static CRYSTAL_TABLE: LazyLock<HashMap<&'static str, Crystal>> = LazyLock::new(|| {
    HashMap::from([
        ("Ar", crystal!(Fcc, 5.256)),
        ("Al", crystal!(Fcc, 4.046)),
        ("Fe", crystal!(Bcc, 2.866)),
        ("Ni", crystal!(Fcc, 3.524)),
        ("Cu", crystal!(Fcc, 3.615)),
        ("Pd", crystal!(Fcc, 3.891)),
        ("Ag", crystal!(Fcc, 4.085)),
        ("Pt", crystal!(Fcc, 3.924)),
        ("Au", crystal!(Fcc, 4.078)),
        ("Pb", crystal!(Fcc, 4.950)),
    ])
});

/// Resolves a symbol through all three tables. A miss in any of them is an
/// [`OpalError::UnknownElement`], never a silent default.
pub fn lookup(symbol: &str) -> Result<ElementData> {
    let unknown = || OpalError::UnknownElement {
        symbol: symbol.to_string(),
    };
    let (key, lj) = LJ_TABLE.get_key_value(symbol).ok_or_else(unknown)?;
    let mass = MASS_TABLE.get(symbol).ok_or_else(unknown)?;
    let crystal = CRYSTAL_TABLE.get(symbol).ok_or_else(unknown)?;
    Ok(ElementData {
        symbol: key,
        lj: *lj,
        mass: *mass,
        crystal: *crystal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_the_same_symbols() {
        for symbol in LJ_TABLE.keys() {
            assert!(MASS_TABLE.contains_key(symbol), "{symbol} missing a mass");
            assert!(
                CRYSTAL_TABLE.contains_key(symbol),
                "{symbol} missing a crystal structure"
            );
        }
        assert_eq!(LJ_TABLE.len(), MASS_TABLE.len());
        assert_eq!(LJ_TABLE.len(), CRYSTAL_TABLE.len());
    }

    #[test]
    fn lookup_joins_all_three_tables() {
        let copper = lookup("Cu").unwrap();
        assert_eq!(copper.symbol, "Cu");
        assert_eq!(copper.lj.sigma, 2.338);
        assert_eq!(copper.mass, 63.546);
        assert_eq!(copper.crystal.symmetry, Symmetry::Fcc);
        assert_eq!(copper.crystal.lattice_parameter, 3.615);
    }

    #[test]
    fn unknown_symbol_fails_fast() {
        let err = lookup("Xx").unwrap_err();
        assert!(matches!(err, OpalError::UnknownElement { ref symbol } if symbol == "Xx"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("cu").is_err());
    }
}
