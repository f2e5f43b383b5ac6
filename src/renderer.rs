use crate::canvas::Canvas;
use crate::config::SpeedometerConfig;
use crate::error::{GaugeError, LoadFailure};
use crate::gauge::GaugeState;
use crate::scene::build_scene;
use rusttype::Font;
use std::path::Path;

/// Draws the speedometer. Owns the font for as long as it lives.
pub struct GaugeRenderer {
    config: SpeedometerConfig,
    font: Font<'static>,
}

impl GaugeRenderer {
    /// Checks `config` and loads the font named by `config.font_path`.
    /// Nothing is drawn if either step fails.
    pub fn new(config: SpeedometerConfig) -> Result<Self, GaugeError> {
        config.validate()?;
        let font = load_font(&config.font_path)?;
        log::info!("loaded font {}", config.font_path.display());
        Ok(Self { config, font })
    }

    pub fn config(&self) -> &SpeedometerConfig {
        &self.config
    }

    /// Renders one full frame of `state` onto `canvas`.
    pub fn draw(&self, state: &GaugeState, canvas: &mut Canvas) {
        build_scene(state, &self.config).render(canvas, Some(&self.font));
    }
}

fn load_font(path: &Path) -> Result<Font<'static>, GaugeError> {
    let data = std::fs::read(path).map_err(|err| GaugeError::ResourceLoad {
        path: path.to_path_buf(),
        reason: LoadFailure::Io(err),
    })?;
    Font::try_from_vec(data).ok_or_else(|| GaugeError::ResourceLoad {
        path: path.to_path_buf(),
        reason: LoadFailure::InvalidFont,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("speedometer-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn missing_font_is_a_resource_failure() {
        let config = SpeedometerConfig::builder()
            .font_path("definitely/not/here.ttf")
            .build();
        match GaugeRenderer::new(config) {
            Err(GaugeError::ResourceLoad {
                path,
                reason: LoadFailure::Io(err),
            }) => {
                assert_eq!(path, PathBuf::from("definitely/not/here.ttf"));
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("renderer built without a font"),
        }
    }

    #[test]
    fn bad_framerate_fails_before_font_load() {
        let config = SpeedometerConfig::builder()
            .max_framerate(0.0)
            .font_path("definitely/not/here.ttf")
            .build();
        assert!(matches!(
            GaugeRenderer::new(config),
            Err(GaugeError::InvalidConfig {
                field: "max_framerate",
                ..
            })
        ));
    }

    #[test]
    fn garbage_font_is_rejected() {
        let path = scratch_file("garbage.ttf", b"this is not a font");
        let result = GaugeRenderer::new(SpeedometerConfig::builder().font_path(&path).build());
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(GaugeError::ResourceLoad {
                reason: LoadFailure::InvalidFont,
                ..
            })
        ));
    }
}
