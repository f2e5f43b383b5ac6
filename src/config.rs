use crate::error::GaugeError;
use bon::Builder;
use std::path::PathBuf;

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Everything the speedometer needs to know about its window, geometry and
/// palette. Defaults reproduce the stock 720x720 MPH gauge.
#[derive(Debug, Clone, Builder)]
pub struct SpeedometerConfig {
    // Window configuration
    #[builder(default = "Speedometer".to_string(), into)]
    pub title: String,
    #[builder(default = 720)]
    pub window_width: usize,
    #[builder(default = 720)]
    pub window_height: usize,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Gauge geometry. `center` falls back to the middle of the window.
    #[builder(default = 300.0)]
    pub radius: f64,
    pub center: Option<(f64, f64)>,
    #[builder(default = 20.0)]
    pub bezel_width: f64,

    // Value range and animation
    #[builder(default = 120.0)]
    pub max_speed: f64,
    #[builder(default = 0.5)]
    pub speed_step: f64,

    // Dial sweep in degrees, y axis pointing down
    #[builder(default = -135.0)]
    pub start_angle: f64,
    #[builder(default = 270.0)]
    pub arc_span: f64,

    // Tick configuration (radii are fractions of `radius`)
    #[builder(default = 10.0)]
    pub tick_interval: f64,
    #[builder(default = 20.0)]
    pub major_tick_interval: f64,
    #[builder(default = 0.8)]
    pub major_tick_inner: f64,
    #[builder(default = 0.85)]
    pub minor_tick_inner: f64,
    #[builder(default = 0.95)]
    pub tick_outer: f64,
    #[builder(default = 3.0)]
    pub major_tick_thickness: f32,
    #[builder(default = 2.0)]
    pub minor_tick_thickness: f32,
    #[builder(default = 0.65)]
    pub label_radius: f64,
    #[builder(default = 40.0)]
    pub label_font_size: f32,
    /// Tick value drawn in `highlight_color` while `highlight_enabled`.
    #[builder(default = 60.0)]
    pub highlight_value: f64,
    #[builder(default = true)]
    pub highlight_enabled: bool,

    // Needle configuration
    #[builder(default = 0.8)]
    pub needle_length: f64,
    #[builder(default = 3.0)]
    pub needle_width: f32,
    #[builder(default = false)]
    pub needle_tapered: bool,
    #[builder(default = 0.1)]
    pub cap_radius: f64,

    // Unit label
    #[builder(default = "MPH".to_string(), into)]
    pub unit_label: String,
    #[builder(default = 30.0)]
    pub unit_font_size: f32,
    #[builder(default = 0.5)]
    pub unit_offset: f64,

    // Readout configuration
    #[builder(default = (120.0, 40.0))]
    pub readout_size: (f64, f64),
    #[builder(default = 0.2)]
    pub readout_offset: f64,
    #[builder(default = 2.0)]
    pub readout_outline: f64,
    #[builder(default = 30.0)]
    pub readout_font_size: f32,

    // Colors
    #[builder(default = Color::new(100, 100, 100))]
    pub background_color: Color,
    #[builder(default = Color::new(220, 220, 220))]
    pub bezel_color: Color,
    #[builder(default = Color::new(30, 30, 30))]
    pub dial_color: Color,
    #[builder(default = Color::WHITE)]
    pub tick_color: Color,
    #[builder(default = Color::GREEN)]
    pub highlight_color: Color,
    #[builder(default = Color::WHITE)]
    pub needle_color: Color,
    #[builder(default = Color::new(50, 50, 50))]
    pub cap_color: Color,
    #[builder(default = Color::WHITE)]
    pub text_color: Color,
    #[builder(default = Color::new(10, 10, 10))]
    pub readout_fill_color: Color,
    #[builder(default = Color::WHITE)]
    pub readout_outline_color: Color,

    // Font configuration
    #[builder(default = PathBuf::from("arial.ttf"), into)]
    pub font_path: PathBuf,
}

impl Default for SpeedometerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SpeedometerConfig {
    /// Gauge center in canvas pixels.
    pub fn center(&self) -> (f64, f64) {
        self.center.unwrap_or((
            self.window_width as f64 / 2.0,
            self.window_height as f64 / 2.0,
        ))
    }

    /// The highlighted tick value, if highlighting is on.
    pub fn highlight(&self) -> Option<f64> {
        self.highlight_enabled.then_some(self.highlight_value)
    }

    /// Rejects values the frame loop and tick layout cannot work with.
    pub fn validate(&self) -> Result<(), GaugeError> {
        let positive = [
            ("max_framerate", self.max_framerate),
            ("max_speed", self.max_speed),
            ("tick_interval", self.tick_interval),
            ("major_tick_interval", self.major_tick_interval),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GaugeError::InvalidConfig {
                    field,
                    reason: format!("must be a positive finite number, got {value}"),
                });
            }
        }
        if !(self.speed_step.is_finite() && self.speed_step >= 0.0) {
            return Err(GaugeError::InvalidConfig {
                field: "speed_step",
                reason: format!("must be a non-negative finite number, got {}", self.speed_step),
            });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GaugeError::InvalidConfig {
                field: "window size",
                reason: format!("{}x{} is empty", self.window_width, self.window_height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_gauge() {
        let config = SpeedometerConfig::default();
        assert_eq!(config.title, "Speedometer");
        assert_eq!((config.window_width, config.window_height), (720, 720));
        assert_eq!(config.max_framerate, 60.0);
        assert_eq!(config.max_speed, 120.0);
        assert_eq!(config.highlight(), Some(60.0));
        assert_eq!(config.font_path, PathBuf::from("arial.ttf"));
        assert_eq!(config.center(), (360.0, 360.0));
    }

    #[test]
    fn explicit_center_overrides_window_middle() {
        let config = SpeedometerConfig::builder()
            .center((100.0, 200.0))
            .radius(80.0)
            .build();
        assert_eq!(config.center(), (100.0, 200.0));
    }

    #[test]
    fn builder_and_default_agree_on_highlight() {
        let built = SpeedometerConfig::builder().build();
        assert_eq!(built.highlight_value, 60.0);
        assert_eq!(built.highlight(), SpeedometerConfig::default().highlight());

        let off = SpeedometerConfig::builder().highlight_enabled(false).build();
        assert_eq!(off.highlight(), None);
    }

    #[test]
    fn stock_config_is_valid() {
        assert!(SpeedometerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_framerate_is_rejected() {
        let config = SpeedometerConfig::builder().max_framerate(0.0).build();
        assert!(matches!(
            config.validate(),
            Err(GaugeError::InvalidConfig {
                field: "max_framerate",
                ..
            })
        ));
        let config = SpeedometerConfig::builder().max_framerate(-30.0).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let config = SpeedometerConfig::builder().tick_interval(0.0).build();
        assert!(matches!(
            config.validate(),
            Err(GaugeError::InvalidConfig {
                field: "tick_interval",
                ..
            })
        ));
    }

    #[test]
    fn nan_step_is_rejected() {
        let config = SpeedometerConfig::builder().speed_step(f64::NAN).build();
        assert!(matches!(
            config.validate(),
            Err(GaugeError::InvalidConfig {
                field: "speed_step",
                ..
            })
        ));
    }
}
