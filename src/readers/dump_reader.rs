//! Reads the periodic dump file the engine writes during its run.
//!
//! A dump is a sequence of frames, each a block of records:
//!
//! ```text
//! ITEM: TIMESTEP
//! 100
//! ITEM: NUMBER OF ATOMS
//! 4
//! ITEM: BOX BOUNDS pp pp pp
//! 0.0 7.23
//! 0.0 7.23
//! 0.0 7.23
//! ITEM: ATOMS id type x y z
//! 1 1 0.0 0.0 0.0
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use na::Matrix3xX;

use crate::errors::{OpalError, Result};
use crate::extensions::FieldsExt;
use crate::simulation_box::SimulationBox;
use crate::structure::Structure;
use crate::trajectory::{Frame, Trajectory};

pub struct DumpReader {
    path: PathBuf,
}

/// Cursor over the dump lines keeping a one-based line number for errors.
struct Lines {
    lines: Vec<String>,
    cursor: usize,
}

impl Lines {
    fn next(&mut self) -> Option<(&str, usize)> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some((line.as_str(), self.cursor))
    }

    fn next_required(&mut self) -> Result<(&str, usize)> {
        let line_num = self.cursor + 1;
        self.next().ok_or(OpalError::MissingField { line: line_num })
    }
}

impl DumpReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads every frame, checking each against `topology` for atom count.
    pub fn read(&self, element: &str, topology: &Structure) -> Result<Trajectory> {
        let file = File::open(&self.path).map_err(|e| OpalError::FileOpen {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            lines.push(line.map_err(|e| OpalError::FileRead {
                path: self.path.clone(),
                line: line_num + 1,
                source: e,
            })?);
        }
        let mut lines = Lines { lines, cursor: 0 };

        let mut frames = Vec::new();
        while let Some((line, line_num)) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            if !line.starts_with("ITEM: TIMESTEP") {
                return Err(OpalError::UnexpectedRecord {
                    record: line.to_string(),
                    line: line_num,
                });
            }
            frames.push(Self::read_frame(&mut lines, topology)?);
        }

        if frames.is_empty() {
            return Err(OpalError::EmptyTrajectory {
                path: self.path.clone(),
            });
        }
        Ok(Trajectory::new(element, topology.n_atoms, frames))
    }

    /// Reads one frame; the "ITEM: TIMESTEP" record has already been
    /// consumed by the caller.
    fn read_frame(lines: &mut Lines, topology: &Structure) -> Result<Frame> {
        let (line, line_num) = lines.next_required()?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let step = fields.parse_usize_at(0, line_num)?;

        Self::expect_record(lines, "ITEM: NUMBER OF ATOMS")?;
        let (line, line_num) = lines.next_required()?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let found = fields.parse_usize_at(0, line_num)?;
        if found != topology.n_atoms {
            return Err(OpalError::AtomCountMismatch {
                expected: topology.n_atoms,
                found,
                step,
            });
        }

        Self::expect_record(lines, "ITEM: BOX BOUNDS")?;
        let mut bounds = [(0.0, 0.0); 3];
        for bound in &mut bounds {
            let (line, line_num) = lines.next_required()?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            bound.0 = fields.parse_float_at(0, line_num)?;
            bound.1 = fields.parse_float_at(1, line_num)?;
        }
        let sim_box = SimulationBox::from_bounds(
            bounds[0].0,
            bounds[0].1,
            bounds[1].0,
            bounds[1].1,
            bounds[2].0,
            bounds[2].1,
        );

        Self::expect_record(lines, "ITEM: ATOMS")?;
        let mut positions = Matrix3xX::zeros(found);
        for _ in 0..found {
            let (line, line_num) = lines.next_required()?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let id = fields.parse_usize_at(0, line_num)?;
            if id == 0 || id > found {
                return Err(OpalError::InvalidAtomIndex {
                    index: id,
                    n_atoms: found,
                    line: line_num,
                });
            }
            // field 1 is the atom type, unused here
            positions[(0, id - 1)] = fields.parse_float_at(2, line_num)?;
            positions[(1, id - 1)] = fields.parse_float_at(3, line_num)?;
            positions[(2, id - 1)] = fields.parse_float_at(4, line_num)?;
        }

        Ok(Frame {
            step,
            positions,
            sim_box,
        })
    }

    fn expect_record(lines: &mut Lines, prefix: &str) -> Result<()> {
        let (line, line_num) = lines.next_required()?;
        if !line.starts_with(prefix) {
            return Err(OpalError::UnexpectedRecord {
                record: line.to_string(),
                line: line_num,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use na::DVector;

    fn topology(n_atoms: usize) -> Structure {
        Structure {
            n_atoms,
            type_ids: DVector::from_element(n_atoms, 1),
            masses: vec![63.546],
            positions: Matrix3xX::zeros(n_atoms),
            sim_box: SimulationBox::from_bounds(0.0, 7.23, 0.0, 7.23, 0.0, 7.23),
        }
    }

    const DUMP: &str = "\
ITEM: TIMESTEP
0
ITEM: NUMBER OF ATOMS
2
ITEM: BOX BOUNDS pp pp pp
0.0 7.23
0.0 7.23
0.0 7.23
ITEM: ATOMS id type x y z
1 1 0.0 0.0 0.0
2 1 3.615 3.615 0.0
ITEM: TIMESTEP
100
ITEM: NUMBER OF ATOMS
2
ITEM: BOX BOUNDS pp pp pp
0.0 7.23
0.0 7.23
0.0 7.23
ITEM: ATOMS id type x y z
2 1 3.7 3.5 0.1
1 1 0.1 -0.1 0.0
";

    fn write_dump(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md.dump");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_frames_in_dump_order() {
        let (_dir, path) = write_dump(DUMP);
        let trajectory = DumpReader::new(&path).read("Cu", &topology(2)).unwrap();

        assert_eq!(trajectory.element, "Cu");
        assert_eq!(trajectory.n_frames(), 2);
        assert_eq!(trajectory.frames[0].step, 0);
        assert_eq!(trajectory.frames[1].step, 100);
        // atoms land at their id slot whatever order they were dumped in
        assert_eq!(trajectory.frames[1].positions[(0, 0)], 0.1);
        assert_eq!(trajectory.frames[1].positions[(0, 1)], 3.7);
        assert_eq!(trajectory.frames[0].sim_box.lengths().z, 7.23);
    }

    #[test]
    fn atom_count_mismatch_names_the_step() {
        let (_dir, path) = write_dump(DUMP);
        let err = DumpReader::new(&path)
            .read("Cu", &topology(3))
            .unwrap_err();
        assert!(matches!(
            err,
            OpalError::AtomCountMismatch {
                expected: 3,
                found: 2,
                step: 0
            }
        ));
    }

    #[test]
    fn empty_dump_is_an_error() {
        let (_dir, path) = write_dump("");
        assert!(matches!(
            DumpReader::new(&path).read("Cu", &topology(2)).unwrap_err(),
            OpalError::EmptyTrajectory { .. }
        ));
    }

    #[test]
    fn garbage_between_frames_is_rejected() {
        let (_dir, path) = write_dump("not a dump record\n");
        assert!(matches!(
            DumpReader::new(&path).read("Cu", &topology(2)).unwrap_err(),
            OpalError::UnexpectedRecord { line: 1, .. }
        ));
    }
}
