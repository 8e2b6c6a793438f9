use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpalError {
    // Request validation errors
    #[error("Unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },

    #[error("Temperature must be positive, got {value} K")]
    NonPositiveTemperature { value: f64 },

    #[error("Lattice replication count must be at least 1")]
    ZeroSize,

    // External engine errors
    #[error("Failed to start engine command '{command}': {source}")]
    EngineSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine exited with {status}, see {log:?} for its output")]
    EngineFailure { status: ExitStatus, log: PathBuf },

    // File I/O errors
    #[error("Failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // Artifact parsing errors
    #[error("Missing field on line {line}")]
    MissingField { line: usize },

    #[error("Unexpected record '{record}' on line {line}")]
    UnexpectedRecord { record: String, line: usize },

    #[error("Error parsing floating number from string {string}: {source}")]
    FloatParseError {
        string: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Error parsing integer number from string {string}: {source}")]
    IntParseError {
        string: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("No atoms found in {path:?}")]
    NoAtomsRead { path: PathBuf },

    #[error("Atom index {index} out of range (total atoms: {n_atoms}) on line {line}")]
    InvalidAtomIndex {
        index: usize,
        n_atoms: usize,
        line: usize,
    },

    #[error("Atom type {type_id} out of range (total types: {n_types}) on line {line}")]
    InvalidAtomType {
        type_id: usize,
        n_types: usize,
        line: usize,
    },

    // Trajectory errors
    #[error("Atom count mismatch at step {step}: structure has {expected}, frame has {found}")]
    AtomCountMismatch {
        expected: usize,
        found: usize,
        step: usize,
    },

    #[error("Trajectory file {path:?} contains no frames")]
    EmptyTrajectory { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, OpalError>;
