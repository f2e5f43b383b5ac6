// ============================================================================
// CRATE CONFIGURATION & MODULES
// ============================================================================

//! An animated speedometer drawn with a software rasteriser into a
//! `pixels` frame buffer inside a `winit` window.
//!
//! ```no_run
//! use speedometer::SpeedometerConfig;
//!
//! speedometer::run(SpeedometerConfig::default()).unwrap();
//! ```

mod app;
mod canvas;
mod config;
mod error;
mod gauge;
mod renderer;
mod scene;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use app::run;
pub use canvas::Canvas;
pub use config::{Color, SpeedometerConfig};
pub use error::{GaugeError, LoadFailure};
pub use gauge::{format_readout, needle_angle, tick_marks, Direction, GaugeState, TickMark};
pub use renderer::GaugeRenderer;
pub use scene::{build_scene, DrawCommand, Scene};
