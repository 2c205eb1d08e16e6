//! Platform-free frame driver. The desktop app owns its own display-refresh
//! loop; this one feeds the same tick from a list of clock samples.

use crate::context::AppContext;
use wavefield_render::Renderer;

/// Evenly spaced clock samples: `frames` ticks at `fps`, starting at zero.
pub fn fixed_timesteps(frames: u32, fps: f32) -> impl Iterator<Item = f32> {
    let dt = if fps.is_finite() && fps > 0.0 {
        1.0 / fps
    } else {
        0.0
    };
    (0..frames).map(move |i| i as f32 * dt)
}

/// Tick `ctx` once per sample and hand each frame to `renderer`.
///
/// Samples are expected to be non-decreasing; a sample that goes backwards
/// is held at the previous value so the clock stays monotonic.
pub fn run_headless<R, I>(ctx: &mut AppContext, renderer: &R, samples: I) -> Vec<R::Output>
where
    R: Renderer,
    I: IntoIterator<Item = f32>,
{
    let mut last = f32::NEG_INFINITY;
    let mut outputs = Vec::new();
    for sample in samples {
        let elapsed = sample.max(last).max(0.0);
        if elapsed != sample {
            tracing::warn!("clock sample {sample} held at {elapsed}");
        }
        last = elapsed;
        let command = ctx.tick(elapsed);
        outputs.push(renderer.render(&command));
    }
    tracing::debug!("headless run produced {} frames", outputs.len());
    outputs
}
