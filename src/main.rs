use anyhow::Result;
use clap::Parser;

use opal::args_parser::Args;
use opal::engine::Engine;
use opal::request::SimulationRequest;
use opal::simulate::run_request;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = SimulationRequest::new(
        &args.element,
        args.temperature,
        args.size,
        args.crystallize,
    );
    let viewer = run_request(&request, &Engine::new(&args.engine))?;

    let scene = serde_json::to_string_pretty(&viewer.scene_json())?;
    match &args.scene {
        Some(path) => std::fs::write(path, scene)?,
        None => println!("{scene}"),
    }
    Ok(())
}
