use crate::config::SpeedometerConfig;

/// Which way the demo sweep is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// Current needle value plus the fixed geometry it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeState {
    speed: f64,
    max_speed: f64,
    pub radius: f64,
    pub center: (f64, f64),
    start_angle: f64,
    arc_span: f64,
    direction: Direction,
}

impl GaugeState {
    /// A gauge with the stock -135..+135 degree sweep.
    pub fn new(max_speed: f64, radius: f64, center: (f64, f64)) -> Self {
        Self {
            speed: 0.0,
            max_speed,
            radius,
            center,
            start_angle: -135.0,
            arc_span: 270.0,
            direction: Direction::Increasing,
        }
    }

    pub fn from_config(config: &SpeedometerConfig) -> Self {
        Self {
            start_angle: config.start_angle,
            arc_span: config.arc_span,
            ..Self::new(config.max_speed, config.radius, config.center())
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_nan() {
            0.0
        } else {
            speed.clamp(0.0, self.max_speed)
        };
    }

    /// Moves the speed one step along the triangle wave. Returns `true` when
    /// the sweep reversed on this tick.
    pub fn advance(&mut self, step: f64) -> bool {
        let (speed, direction) = match self.direction {
            Direction::Increasing => {
                let speed = self.speed + step;
                let direction = if speed >= self.max_speed {
                    Direction::Decreasing
                } else {
                    Direction::Increasing
                };
                (speed, direction)
            }
            Direction::Decreasing => {
                let speed = self.speed - step;
                let direction = if speed <= 0.0 {
                    Direction::Increasing
                } else {
                    Direction::Decreasing
                };
                (speed, direction)
            }
        };
        let flipped = direction != self.direction;
        self.direction = direction;
        self.set_speed(speed);
        flipped
    }

    /// Angle the needle is drawn at, in degrees.
    pub fn needle_angle(&self) -> f64 {
        needle_angle(self.speed, self.max_speed, self.start_angle, self.arc_span)
    }
}

/// Maps `value` in `0..=max_value` linearly onto the dial sweep, in degrees
/// with the y axis pointing down.
pub fn needle_angle(value: f64, max_value: f64, start_angle: f64, arc_span: f64) -> f64 {
    (value / max_value) * arc_span + start_angle
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub angle: f64,
    pub major: bool,
    pub highlighted: bool,
}

/// Tick marks from zero up to `max_speed`, one every `tick_interval`. A
/// trailing partial interval gets no tick. Empty for a non-positive range
/// or interval.
pub fn tick_marks(config: &SpeedometerConfig) -> Vec<TickMark> {
    let ratio = config.max_speed / config.tick_interval;
    if !(ratio.is_finite() && ratio >= 0.0 && config.tick_interval > 0.0) {
        return Vec::new();
    }
    let intervals = (ratio + 1e-9).floor() as usize;
    let ticks_per_major =
        ((config.major_tick_interval / config.tick_interval).round() as usize).max(1);
    (0..=intervals)
        .map(|i| {
            let value = i as f64 * config.tick_interval;
            TickMark {
                value,
                angle: needle_angle(value, config.max_speed, config.start_angle, config.arc_span),
                major: i % ticks_per_major == 0,
                highlighted: config
                    .highlight()
                    .is_some_and(|h| (h - value).abs() < config.tick_interval * 1e-6),
            }
        })
        .collect()
}

/// Digital readout text: always exactly one decimal digit.
pub fn format_readout(speed: f64) -> String {
    format!("{:.1}", speed)
}
