//! Fixed run parameters and artifact file names shared by every call.

/// Number of integration steps the engine is told to run per call.
pub const RUN_STEPS: usize = 10_000;

/// Integration timestep in picoseconds (metal units).
pub const TIMESTEP_PS: f64 = 0.001;

/// A trajectory frame is dumped every this many steps.
pub const DUMP_EVERY: usize = 100;

/// Relaxation time of the NVT thermostat in picoseconds.
pub const THERMOSTAT_DAMP_PS: f64 = 0.1;

/// The velocity-create target is the requested temperature times this
/// factor. Equipartition hands roughly half the injected kinetic energy to
/// the potential as the lattice relaxes, so the run settles near the
/// requested temperature.
pub const TEMPERATURE_VELOCITY_FACTOR: f64 = 2.0;

/// Seed handed to the engine's gaussian velocity distribution.
pub const VELOCITY_SEED: usize = 87287;

/// Crystallizing runs derive the lattice parameter from the interaction
/// cutoff instead of the tabulated equilibrium value.
pub const CRYSTALLIZE_CUTOFF_FACTOR: f64 = 0.8;

/// Engine binary invoked when none is given on the command line.
pub const DEFAULT_ENGINE_COMMAND: &str = "lmp";

// Fixed artifact names in the working directory, overwritten on every call.
pub const SCRIPT_FILE: &str = "in.md";
pub const DATA_FILE: &str = "md.data";
pub const XYZ_FILE: &str = "md.xyz";
pub const DUMP_FILE: &str = "md.dump";
pub const LOG_FILE: &str = "md.log";
