use anyhow::Result;
use winit::dpi::LogicalSize;

use mgl_engine::device::GlInit;
use mgl_engine::logging::{LoggingConfig, init_logging};
use mgl_engine::render::{QuadWindow, RenderConfig};
use mgl_engine::resource::EmbeddedResources;
use mgl_engine::window::{Runtime, RuntimeConfig, WindowMode};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "mgl viewer".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
        // Second monitor when present; the runtime falls back to the primary one.
        mode: WindowMode::Fullscreen { monitor: 1 },
        update_frequency: Some(60.0),
    };

    let app = QuadWindow::new(
        RenderConfig::default(),
        Box::new(EmbeddedResources::bundled()),
    );

    log::info!("starting {} ({:?})", config.title, config.mode);
    Runtime::run(config, GlInit::default(), app)
}
