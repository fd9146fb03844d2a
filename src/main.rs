use std::sync::Arc;

use sketchkit::{
    init_logging, CanvasConfig, CanvasStore, Point, RenderSurface, SurfaceBinding, WheelInput,
    BUILD_DATE, VERSION,
};

/// Surface stand-in that logs the transform commands it receives. A real
/// deployment would hand the binding a window or GPU canvas instead.
struct LoggingSurface;

impl RenderSurface for LoggingSurface {
    fn set_size(&mut self, width: f64, height: f64) {
        tracing::info!("surface sized to {width}x{height}");
    }

    fn apply_zoom(&mut self, zoom: f64) {
        tracing::info!("apply zoom {zoom:.3}");
    }

    fn apply_pan(&mut self, pan: Point) {
        tracing::info!("apply pan {pan}");
    }

    fn release(&mut self) {
        tracing::info!("surface released");
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("SketchKit {VERSION} (built {BUILD_DATE})");

    let config = CanvasConfig::with_size(1280.0, 720.0).validated()?;
    let store = Arc::new(CanvasStore::new(&config));

    let mut binding = SurfaceBinding::new(config, store.clone(), LoggingSurface);
    binding.activate();

    // Simulate a burst of scroll-up events under a fixed pointer, then one
    // scroll-down; the point under the pointer stays visually fixed.
    for delta in [-100.0, -100.0, -100.0, 240.0] {
        binding.handle_wheel(&WheelInput::new(delta, 640.0, 360.0));
        tracing::info!("viewport now {}", store.viewport());
    }

    binding.deactivate();
    Ok(())
}
