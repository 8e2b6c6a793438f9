//! Configures and launches molecular-dynamics runs on an external engine,
//! then loads the written artifacts back for viewing.
//!
//! The crate does no physics itself. One call turns an (element,
//! temperature, size, crystallize) request into an engine input script,
//! blocks on the engine for a fixed number of steps, converts the initial
//! structure it wrote, loads the dumped trajectory against it and hands
//! back a [`viewer::Viewer`] with a fixed rendering setup:
//!
//! ```no_run
//! let viewer = opal::simulate("Cu", 300.0, 3, false)?;
//! println!("{}", viewer.scene_json());
//! # Ok::<(), opal::OpalError>(())
//! ```

extern crate nalgebra as na;

pub mod args_parser;
pub mod constants;
pub mod elements;
pub mod engine;
pub mod errors;
mod extensions;
pub mod readers;
pub mod request;
pub mod script;
pub mod simulate;
pub mod simulation_box;
pub mod structure;
pub mod trajectory;
pub mod viewer;
pub mod writers;

pub use errors::{OpalError, Result};
pub use simulate::simulate;
