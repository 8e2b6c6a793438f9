//! Straight-line orchestration of one engine run.

use std::path::Path;

use log::info;

use crate::constants::{DATA_FILE, DEFAULT_ENGINE_COMMAND, DUMP_FILE, LOG_FILE, SCRIPT_FILE, XYZ_FILE};
use crate::engine::Engine;
use crate::errors::Result;
use crate::readers::data_reader::DataReader;
use crate::readers::dump_reader::DumpReader;
use crate::request::SimulationRequest;
use crate::script::InputScript;
use crate::viewer::Viewer;
use crate::writers::xyz::XyzWriter;

/// Configures, launches and post-processes one run, blocking until the
/// engine finishes its fixed step count. All artifacts have fixed names in
/// the working directory and are overwritten on every call; concurrent
/// calls would race on them.
pub fn simulate(element: &str, temperature: f64, size: usize, crystallize: bool) -> Result<Viewer> {
    let request = SimulationRequest::new(element, temperature, size, crystallize);
    run_request(&request, &Engine::new(DEFAULT_ENGINE_COMMAND))
}

/// Same as [`simulate`] with an explicit engine handle.
pub fn run_request(request: &SimulationRequest, engine: &Engine) -> Result<Viewer> {
    let data = request.validate()?;

    let script = InputScript::build(request, &data);
    script.write(Path::new(SCRIPT_FILE))?;
    info!(
        "submitting {} at {} K, {}^3 cells{} to '{}'",
        data.symbol,
        request.temperature,
        request.size,
        if request.crystallize {
            ", crystallizing"
        } else {
            ""
        },
        engine.command(),
    );

    engine.run(Path::new(SCRIPT_FILE), Path::new(LOG_FILE))?;

    let structure = DataReader::new(DATA_FILE).read()?;
    XyzWriter::new(XYZ_FILE).write(&structure, data.symbol)?;

    let trajectory = DumpReader::new(DUMP_FILE).read(&request.element, &structure)?;
    info!(
        "loaded {} frames of {} atoms",
        trajectory.n_frames(),
        structure.n_atoms
    );

    let mut viewer = Viewer::new(trajectory);
    viewer.center();
    Ok(viewer)
}
