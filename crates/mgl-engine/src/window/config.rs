use winit::dpi::LogicalSize;

/// How the window is placed on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless fullscreen on the monitor with this enumeration index.
    ///
    /// An index past the end of the monitor list falls back to the primary monitor.
    Fullscreen { monitor: usize },
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub mode: WindowMode,
    /// Target redraw rate in Hz. `None` redraws continuously.
    pub update_frequency: Option<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "mgl".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            mode: WindowMode::Windowed,
            update_frequency: Some(60.0),
        }
    }
}
