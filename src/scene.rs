//! Retained-mode description of one gauge frame.
//!
//! [`build_scene`] turns a [`GaugeState`] into an ordered list of
//! [`DrawCommand`]s without touching any pixels; [`Scene::render`] then
//! rasterises that list onto a [`Canvas`].

use crate::canvas::Canvas;
use crate::config::{Color, SpeedometerConfig};
use crate::gauge::{format_readout, tick_marks, GaugeState};
use rusttype::Font;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Disc {
        center: (f64, f64),
        radius: f64,
        color: Color,
    },
    Tick {
        value: f64,
        from: (f64, f64),
        to: (f64, f64),
        thickness: f32,
        color: Color,
    },
    NeedleLine {
        from: (f64, f64),
        to: (f64, f64),
        thickness: f32,
        tapered: bool,
        color: Color,
    },
    Rect {
        origin: (f64, f64),
        size: (f64, f64),
        fill: Color,
        outline: Option<(f64, Color)>,
    },
    Text {
        center: (f64, f64),
        text: String,
        font_size: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rasterises every command in order. Text is skipped when `font` is
    /// `None`.
    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => canvas.fill_circle(*center, *radius, *color),
                DrawCommand::Tick {
                    from,
                    to,
                    thickness,
                    color,
                    ..
                } => canvas.draw_line(*from, *to, *thickness, *color),
                DrawCommand::NeedleLine {
                    from,
                    to,
                    thickness,
                    tapered,
                    color,
                } => {
                    if *tapered {
                        canvas.draw_line_tapered(*from, *to, *thickness, *color);
                    } else {
                        canvas.draw_line(*from, *to, *thickness, *color);
                    }
                }
                DrawCommand::Rect {
                    origin,
                    size,
                    fill,
                    outline,
                } => {
                    // outline sits outside the box
                    if let Some((width, color)) = outline {
                        canvas.fill_rect(
                            (origin.0 - width, origin.1 - width),
                            (size.0 + 2.0 * width, size.1 + 2.0 * width),
                            *color,
                        );
                    }
                    canvas.fill_rect(*origin, *size, *fill);
                }
                DrawCommand::Text {
                    center,
                    text,
                    font_size,
                    color,
                } => {
                    if let Some(font) = font {
                        canvas.draw_text(*center, text, font, *font_size, *color);
                    }
                }
            }
        }
    }
}

fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (center.0 + radius * rad.cos(), center.1 + radius * rad.sin())
}

/// Lays out the full gauge for `state`. Pure: no font or frame buffer needed.
pub fn build_scene(state: &GaugeState, config: &SpeedometerConfig) -> Scene {
    let mut scene = Scene::new();
    let center = state.center;
    let r = state.radius;

    scene.add_command(DrawCommand::Clear(config.background_color));

    // Bezel and dial face
    scene.add_command(DrawCommand::Disc {
        center,
        radius: r + config.bezel_width,
        color: config.bezel_color,
    });
    scene.add_command(DrawCommand::Disc {
        center,
        radius: r,
        color: config.dial_color,
    });

    for tick in tick_marks(config) {
        let (inner, thickness) = if tick.major {
            (config.major_tick_inner, config.major_tick_thickness)
        } else {
            (config.minor_tick_inner, config.minor_tick_thickness)
        };
        scene.add_command(DrawCommand::Tick {
            value: tick.value,
            from: polar(center, r * inner, tick.angle),
            to: polar(center, r * config.tick_outer, tick.angle),
            thickness,
            color: config.tick_color,
        });
        if tick.major {
            scene.add_command(DrawCommand::Text {
                center: polar(center, r * config.label_radius, tick.angle),
                text: format!("{}", tick.value.round() as i64),
                font_size: config.label_font_size,
                color: config.text_color,
            });
        }
        if tick.highlighted {
            scene.add_command(DrawCommand::Tick {
                value: tick.value,
                from: polar(center, r * config.major_tick_inner, tick.angle),
                to: polar(center, r * config.tick_outer, tick.angle),
                thickness: config.major_tick_thickness,
                color: config.highlight_color,
            });
        }
    }

    let angle = state.needle_angle();
    scene.add_command(DrawCommand::NeedleLine {
        from: center,
        to: polar(center, r * config.needle_length, angle),
        thickness: config.needle_width,
        tapered: config.needle_tapered,
        color: config.needle_color,
    });
    scene.add_command(DrawCommand::Disc {
        center,
        radius: r * config.cap_radius,
        color: config.cap_color,
    });

    scene.add_command(DrawCommand::Text {
        center: (center.0, center.1 + r * config.unit_offset),
        text: config.unit_label.clone(),
        font_size: config.unit_font_size,
        color: config.text_color,
    });

    // Digital readout
    let (box_w, box_h) = config.readout_size;
    let box_top = center.1 + r * config.readout_offset;
    scene.add_command(DrawCommand::Rect {
        origin: (center.0 - box_w / 2.0, box_top),
        size: (box_w, box_h),
        fill: config.readout_fill_color,
        outline: (config.readout_outline > 0.0)
            .then_some((config.readout_outline, config.readout_outline_color)),
    });
    scene.add_command(DrawCommand::Text {
        center: (center.0, box_top + box_h / 2.0),
        text: format_readout(state.speed()),
        font_size: config.readout_font_size,
        color: config.text_color,
    });

    scene
}
