//! Headless runner. Drives the backdrop over a recording surface for a
//! fixed number of frames, with no display attached.

use serde::Serialize;

use smokescreen_core::config::BackdropConfig;
use smokescreen_core::error::Result;
use smokescreen_core::state::FrameSnapshot;
use smokescreen_core::surface::RecordingSurface;
use smokescreen_sim::scheduler::BoundedFrames;
use smokescreen_sim::FrameDriver;

/// What a headless run did.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub recycles: u64,
    pub fills: u64,
    pub strokes: u64,
    pub unbalanced_restores: u64,
    pub snapshot: FrameSnapshot,
}

/// Run `frames` frames of the backdrop described by `config`.
pub fn run(config: &BackdropConfig, frames: u64) -> Result<RunSummary> {
    let surface = RecordingSurface::new(config.viewport);
    let mut driver = FrameDriver::new(config, surface)?;

    let rendered = driver.run(&mut BoundedFrames::new(frames))?;
    log::info!(
        "headless run finished: {} frames, {} recycles",
        rendered,
        driver.smoke().recycles()
    );

    let summary = RunSummary {
        frames: rendered,
        recycles: driver.smoke().recycles(),
        fills: driver.surface().fills(),
        strokes: driver.surface().strokes(),
        unbalanced_restores: driver.surface().unbalanced_restores(),
        snapshot: driver.snapshot(),
    };
    driver.shutdown();
    Ok(summary)
}
