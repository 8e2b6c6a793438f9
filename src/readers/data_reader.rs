//! Reads the initial-structure data file the engine writes before its run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use na::{DVector, Matrix3xX};

use crate::errors::{OpalError, Result};
use crate::extensions::FieldsExt;
use crate::simulation_box::SimulationBox;
use crate::structure::Structure;

pub struct DataReader {
    path: PathBuf,
}

impl DataReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parses the header counts, box bounds and the Masses and Atoms
    /// sections. Pair coefficient and velocity sections are the engine's
    /// own bookkeeping and are skipped.
    pub fn read(&self) -> Result<Structure> {
        let file = File::open(&self.path).map_err(|e| OpalError::FileOpen {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut section = String::new();
        let mut n_atoms: usize = 0;
        let mut n_types: usize = 0;

        let (mut xlo, mut xhi): (f64, f64) = (0.0, 1.0);
        let (mut ylo, mut yhi): (f64, f64) = (0.0, 1.0);
        let (mut zlo, mut zhi): (f64, f64) = (0.0, 1.0);

        let mut masses: Vec<f64> = Vec::new();
        let mut type_ids: DVector<usize> = DVector::zeros(0);
        let mut positions: Matrix3xX<f64> = Matrix3xX::zeros(0);

        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line.map_err(|e| OpalError::FileRead {
                path: self.path.clone(),
                line: line_num,
                source: e,
            })?;
            let line = line.trim();

            // The first line of a data file is a free-form comment; the
            // section scan below ignores it along with blank lines.
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();

            // Section headers may carry a style comment ("Atoms # atomic").
            match fields[0] {
                "Masses" | "Atoms" | "Velocities" | "Pair" | "PairIJ" => {
                    section = fields[0].to_string();
                    continue;
                }
                _ => {}
            }

            if section.is_empty() {
                if fields.len() > 1 {
                    match fields[1] {
                        // "108 atoms"
                        "atoms" => {
                            n_atoms = fields.parse_usize_at(0, line_num)?;
                            type_ids = DVector::zeros(n_atoms);
                            positions = Matrix3xX::zeros(n_atoms);
                            continue;
                        }
                        // "1 atom types"
                        "atom" => {
                            n_types = fields.parse_usize_at(0, line_num)?;
                            masses.resize(n_types, 0.0);
                            continue;
                        }
                        _ => {}
                    }
                }
                if fields.len() > 2 {
                    // "0.0 10.845 xlo xhi" and friends
                    match fields[2] {
                        "xlo" => {
                            xlo = fields.parse_float_at(0, line_num)?;
                            xhi = fields.parse_float_at(1, line_num)?;
                        }
                        "ylo" => {
                            ylo = fields.parse_float_at(0, line_num)?;
                            yhi = fields.parse_float_at(1, line_num)?;
                        }
                        "zlo" => {
                            zlo = fields.parse_float_at(0, line_num)?;
                            zhi = fields.parse_float_at(1, line_num)?;
                        }
                        _ => {}
                    }
                }
                continue;
            }

            match section.as_str() {
                "Masses" => {
                    // "1 63.546"
                    let type_id = fields.parse_usize_at(0, line_num)?;
                    if type_id == 0 || type_id > n_types {
                        return Err(OpalError::InvalidAtomType {
                            type_id,
                            n_types,
                            line: line_num,
                        });
                    }
                    masses[type_id - 1] = fields.parse_float_at(1, line_num)?;
                }
                "Atoms" => {
                    // "1 1 0.0 0.0 0.0" plus optional image flags
                    let id = fields.parse_usize_at(0, line_num)?;
                    if id == 0 || id > n_atoms {
                        return Err(OpalError::InvalidAtomIndex {
                            index: id,
                            n_atoms,
                            line: line_num,
                        });
                    }
                    let type_id = fields.parse_usize_at(1, line_num)?;
                    if type_id == 0 || type_id > n_types {
                        return Err(OpalError::InvalidAtomType {
                            type_id,
                            n_types,
                            line: line_num,
                        });
                    }
                    type_ids[id - 1] = type_id;
                    positions[(0, id - 1)] = fields.parse_float_at(2, line_num)?;
                    positions[(1, id - 1)] = fields.parse_float_at(3, line_num)?;
                    positions[(2, id - 1)] = fields.parse_float_at(4, line_num)?;
                }
                _ => {}
            }
        }

        if n_atoms == 0 {
            return Err(OpalError::NoAtomsRead {
                path: self.path.clone(),
            });
        }

        Ok(Structure {
            n_atoms,
            type_ids,
            masses,
            positions,
            sim_box: SimulationBox::from_bounds(xlo, xhi, ylo, yhi, zlo, zhi),
        })
    }
}
