use clap::Parser;

use crate::constants::DEFAULT_ENGINE_COMMAND;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Chemical symbol of the element to simulate
    #[arg(short, long)]
    pub element: String,

    /// Target temperature in kelvin
    #[arg(short, long)]
    pub temperature: f64,

    /// Lattice replications per axis
    #[arg(short, long, default_value_t = 3)]
    pub size: usize,

    /// Start from a cutoff-derived lattice parameter instead of the
    /// tabulated equilibrium value
    #[arg(short, long, default_value_t = false)]
    pub crystallize: bool,

    /// Engine binary to invoke
    #[arg(long, default_value_t = String::from(DEFAULT_ENGINE_COMMAND))]
    pub engine: String,

    /// Write the viewer scene description to this path instead of stdout
    #[arg(long)]
    pub scene: Option<String>,
}
