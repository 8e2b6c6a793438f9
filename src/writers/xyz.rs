//! Converts the engine-written structure into a plain XYZ snapshot.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{OpalError, Result};
use crate::structure::Structure;

pub struct XyzWriter {
    path: PathBuf,
}

impl XyzWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes `structure` as a single XYZ snapshot with every atom labelled
    /// `symbol`, replacing any previous file at the same path.
    pub fn write(&self, structure: &Structure, symbol: &str) -> Result<()> {
        self.write_inner(structure, symbol)
            .map_err(|e| OpalError::FileWrite {
                path: self.path.clone(),
                source: e,
            })
    }

    fn write_inner(&self, structure: &Structure, symbol: &str) -> std::io::Result<()> {
        let file = File::create(&self.path)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", structure.n_atoms)?;
        let lengths = structure.sim_box.lengths();
        writeln!(
            out,
            "{} cell {} {} {}",
            symbol, lengths.x, lengths.y, lengths.z
        )?;
        for position in structure.positions.column_iter() {
            writeln!(
                out,
                "{} {} {} {}",
                symbol, position[0], position[1], position[2]
            )?;
        }
        out.flush()
    }
}
