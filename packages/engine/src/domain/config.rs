//! Engine configuration
//!
//! Two explicit values replace the loose "current settings" fields a canvas
//! demo would keep: `SimConfig` drives motion/sampling/rendering, and
//! `LayoutConfig` drives text rasterization. Both go through one setter
//! surface (`EngineConfig::apply`) and one JSON surface.
//!
//! Every setter validates before assigning, so a rejected value leaves the
//! previous one in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Rgb;

pub const DEFAULT_FRICTION: f32 = 0.5;
pub const DEFAULT_EASE: f32 = 0.1;
pub const DEFAULT_SAMPLE_STRIDE: u32 = 1;
pub const DEFAULT_PARTICLE_WIDTH: u32 = 1;
pub const DEFAULT_REPULSION_RADIUS_SQUARED: f32 = 5000.0;

pub const DEFAULT_FONT_SIZE: f32 = 100.0;
pub const DEFAULT_LINE_HEIGHT: f32 = 80.0;
pub const DEFAULT_MAX_TEXT_WIDTH_RATIO: f32 = 0.8;
pub const DEFAULT_FONT_FAMILY: &str = "Comic Sans MS";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("{name}: not a number: {raw:?}")]
    NotNumeric { name: &'static str, raw: String },
    #[error("{name}: {value} out of range, expected {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("invalid fill style: {0}")]
    InvalidFill(String),
    #[error("invalid config json: {0}")]
    InvalidJson(String),
}

/// Motion, sampling and drawing parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Per-step velocity decay, (0, 1]
    pub friction: f32,
    /// Per-step pull toward home, (0, 1]
    pub ease: f32,
    /// Pixel grid step used when sampling the raster
    pub sample_stride: u32,
    /// Side of the square drawn for each particle
    pub particle_width: u32,
    /// Squared pointer distance below which particles get pushed
    pub repulsion_radius_squared: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            ease: DEFAULT_EASE,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            particle_width: DEFAULT_PARTICLE_WIDTH,
            repulsion_radius_squared: DEFAULT_REPULSION_RADIUS_SQUARED,
        }
    }
}

/// Text rasterization parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub font_size: f32,
    pub line_height: f32,
    /// Wrap width as a fraction of the canvas width
    pub max_text_width_ratio: f32,
    /// CSS font family, only read by the browser canvas rasterizer
    pub font_family: String,
    pub fill: FillStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            max_text_width_ratio: DEFAULT_MAX_TEXT_WIDTH_RATIO,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            fill: FillStyle::default(),
        }
    }
}

impl LayoutConfig {
    pub fn max_text_width(&self, canvas_width: u32) -> f32 {
        canvas_width as f32 * self.max_text_width_ratio
    }

    /// CSS shorthand, e.g. `100px "Comic Sans MS"`
    pub fn css_font(&self) -> String {
        format!("{}px \"{}\"", self.font_size, self.font_family)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
}

/// Text fill
///
/// The gradient always runs diagonally from the canvas origin to its
/// bottom-right corner, so each sampled particle inherits a position-dependent
/// color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FillStyle {
    Solid { color: Rgb },
    LinearGradient { stops: Vec<ColorStop> },
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::LinearGradient {
            stops: vec![
                ColorStop { offset: 0.3, color: Rgb::RED },
                ColorStop { offset: 0.5, color: Rgb::FUCHSIA },
                ColorStop { offset: 0.7, color: Rgb::PURPLE },
            ],
        }
    }
}

impl FillStyle {
    /// Fill color at canvas pixel (x, y)
    pub fn color_at(&self, x: f32, y: f32, width: u32, height: u32) -> Rgb {
        match self {
            FillStyle::Solid { color } => *color,
            FillStyle::LinearGradient { stops } => {
                let (w, h) = (width as f32, height as f32);
                let len_sq = w * w + h * h;
                let t = if len_sq > 0.0 { (x * w + y * h) / len_sq } else { 0.0 };
                gradient_at(stops, t)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let FillStyle::LinearGradient { stops } = self else {
            return Ok(());
        };
        if stops.is_empty() {
            return Err(ConfigError::InvalidFill("gradient has no color stops".to_string()));
        }
        let mut last = 0.0f32;
        for stop in stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(ConfigError::InvalidFill(format!(
                    "stop offset {} outside [0, 1]",
                    stop.offset
                )));
            }
            if stop.offset < last {
                return Err(ConfigError::InvalidFill("stop offsets must be ascending".to_string()));
            }
            last = stop.offset;
        }
        Ok(())
    }
}

// Canvas semantics: clamp to the first/last stop outside the covered range
fn gradient_at(stops: &[ColorStop], t: f32) -> Rgb {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgb::default();
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// Named knobs exposed to the host glue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    Friction,
    Ease,
    SampleStride,
    ParticleWidth,
    RepulsionRadiusSquared,
    FontSize,
    LineHeight,
    MaxTextWidthRatio,
}

impl Parameter {
    pub const ALL: [Parameter; 8] = [
        Parameter::Friction,
        Parameter::Ease,
        Parameter::SampleStride,
        Parameter::ParticleWidth,
        Parameter::RepulsionRadiusSquared,
        Parameter::FontSize,
        Parameter::LineHeight,
        Parameter::MaxTextWidthRatio,
    ];

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Friction => "friction",
            Parameter::Ease => "ease",
            Parameter::SampleStride => "sampleStride",
            Parameter::ParticleWidth => "particleWidth",
            Parameter::RepulsionRadiusSquared => "repulsionRadiusSquared",
            Parameter::FontSize => "fontSize",
            Parameter::LineHeight => "lineHeight",
            Parameter::MaxTextWidthRatio => "maxTextWidthRatio",
        }
    }

    /// Changing this parameter invalidates the sampled particle set
    pub fn affects_layout(self) -> bool {
        matches!(
            self,
            Parameter::SampleStride
                | Parameter::FontSize
                | Parameter::LineHeight
                | Parameter::MaxTextWidthRatio
        )
    }

    fn is_integer(self) -> bool {
        matches!(self, Parameter::SampleStride | Parameter::ParticleWidth)
    }

    /// Parse raw input text the way a number field would.
    /// Integer parameters truncate toward zero.
    pub fn parse(self, raw: &str) -> Result<f64, ConfigError> {
        let not_numeric = || ConfigError::NotNumeric {
            name: self.name(),
            raw: raw.to_string(),
        };
        let value: f64 = raw.trim().parse().map_err(|_| not_numeric())?;
        if !value.is_finite() {
            return Err(not_numeric());
        }
        Ok(if self.is_integer() { value.trunc() } else { value })
    }
}

/// The whole configuration surface of one engine instance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub sim: SimConfig,
    pub layout: LayoutConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Friction => self.sim.friction as f64,
            Parameter::Ease => self.sim.ease as f64,
            Parameter::SampleStride => self.sim.sample_stride as f64,
            Parameter::ParticleWidth => self.sim.particle_width as f64,
            Parameter::RepulsionRadiusSquared => self.sim.repulsion_radius_squared as f64,
            Parameter::FontSize => self.layout.font_size as f64,
            Parameter::LineHeight => self.layout.line_height as f64,
            Parameter::MaxTextWidthRatio => self.layout.max_text_width_ratio as f64,
        }
    }

    /// Validate and assign one parameter. Returns true when the value changed.
    pub fn apply(&mut self, param: Parameter, value: f64) -> Result<bool, ConfigError> {
        check_range(param, value)?;
        if self.get(param) == value {
            return Ok(false);
        }
        match param {
            Parameter::Friction => self.sim.friction = value as f32,
            Parameter::Ease => self.sim.ease = value as f32,
            Parameter::SampleStride => self.sim.sample_stride = value as u32,
            Parameter::ParticleWidth => self.sim.particle_width = value as u32,
            Parameter::RepulsionRadiusSquared => self.sim.repulsion_radius_squared = value as f32,
            Parameter::FontSize => self.layout.font_size = value as f32,
            Parameter::LineHeight => self.layout.line_height = value as f32,
            Parameter::MaxTextWidthRatio => self.layout.max_text_width_ratio = value as f32,
        }
        Ok(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for param in Parameter::ALL {
            check_range(param, self.get(param))?;
        }
        self.layout.fill.validate()
    }
}

fn check_range(param: Parameter, value: f64) -> Result<(), ConfigError> {
    let (ok, expected) = match param {
        Parameter::Friction | Parameter::Ease => (value > 0.0 && value <= 1.0, "(0, 1]"),
        Parameter::SampleStride | Parameter::ParticleWidth => (
            value >= 1.0 && value <= u32::MAX as f64 && value.fract() == 0.0,
            "an integer >= 1",
        ),
        Parameter::RepulsionRadiusSquared => (value >= 0.0, ">= 0"),
        Parameter::FontSize | Parameter::LineHeight | Parameter::MaxTextWidthRatio => {
            (value > 0.0, "> 0")
        }
    };
    // Stored as f32 (or u32), so the value must survive the narrowing
    if ok && value.is_finite() && (value as f32).is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name: param.name(),
            value,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_keeps_previous_value() {
        let mut config = EngineConfig::default();
        let err = config.apply(Parameter::Ease, 2.5).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { name: "ease", .. }));
        assert_eq!(config.sim.ease, DEFAULT_EASE);

        assert!(config.apply(Parameter::Friction, 0.0).is_err());
        assert_eq!(config.sim.friction, DEFAULT_FRICTION);

        assert!(config.apply(Parameter::SampleStride, 0.0).is_err());
        assert!(config.apply(Parameter::RepulsionRadiusSquared, -1.0).is_err());
    }

    #[test]
    fn values_beyond_f32_range_are_rejected() {
        let mut config = EngineConfig::default();
        assert!(matches!(
            config.apply(Parameter::RepulsionRadiusSquared, 1e300),
            Err(ConfigError::OutOfRange { name: "repulsionRadiusSquared", .. })
        ));
        assert_eq!(config.sim.repulsion_radius_squared, DEFAULT_REPULSION_RADIUS_SQUARED);
        assert!(config.apply(Parameter::FontSize, 1e39).is_err());
        assert!(config.apply(Parameter::RepulsionRadiusSquared, 1e30).is_ok());
        assert!(EngineConfig::from_json(&config.to_json()).is_ok());
    }

    #[test]
    fn apply_reports_whether_value_changed() {
        let mut config = EngineConfig::default();
        assert_eq!(config.apply(Parameter::SampleStride, 3.0), Ok(true));
        assert_eq!(config.sim.sample_stride, 3);
        assert_eq!(config.apply(Parameter::SampleStride, 3.0), Ok(false));
        assert_eq!(config.apply(Parameter::Friction, 1.0), Ok(true));
    }

    #[test]
    fn parse_truncates_integers_and_rejects_garbage() {
        assert_eq!(Parameter::ParticleWidth.parse(" 4.9 "), Ok(4.0));
        assert_eq!(Parameter::Ease.parse("0.25"), Ok(0.25));
        assert!(matches!(
            Parameter::Ease.parse("fast"),
            Err(ConfigError::NotNumeric { name: "ease", .. })
        ));
        assert!(Parameter::Ease.parse("").is_err());
        assert!(Parameter::Ease.parse("NaN").is_err());
    }

    #[test]
    fn parameter_names_round_trip() {
        for param in Parameter::ALL {
            assert_eq!(Parameter::from_name(param.name()), Ok(param));
        }
        assert_eq!(
            Parameter::from_name("gravity"),
            Err(ConfigError::UnknownParameter("gravity".to_string()))
        );
    }

    #[test]
    fn gradient_clamps_outside_stops_and_blends_between() {
        let fill = FillStyle::default();
        // t = 0 at the origin, before the first stop
        assert_eq!(fill.color_at(0.0, 0.0, 100, 100), Rgb::RED);
        // t = 1 at the far corner, after the last stop
        assert_eq!(fill.color_at(100.0, 100.0, 100, 100), Rgb::PURPLE);
        // t = 0.5 in the middle
        assert_eq!(fill.color_at(50.0, 50.0, 100, 100), Rgb::FUCHSIA);
        // t = 0.35, a quarter of the way from red to fuchsia
        assert_eq!(fill.color_at(35.0, 35.0, 100, 100), Rgb(255, 0, 64));
    }

    #[test]
    fn fill_validation_rejects_unsorted_stops() {
        let fill = FillStyle::LinearGradient {
            stops: vec![
                ColorStop { offset: 0.8, color: Rgb::RED },
                ColorStop { offset: 0.2, color: Rgb::WHITE },
            ],
        };
        assert!(matches!(fill.validate(), Err(ConfigError::InvalidFill(_))));
    }

    #[test]
    fn json_partial_fields_fall_back_to_defaults() {
        let config = EngineConfig::from_json(r#"{"sim":{"ease":0.2}}"#).unwrap();
        assert_eq!(config.sim.ease, 0.2);
        assert_eq!(config.sim.friction, DEFAULT_FRICTION);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn json_rejects_invalid_values() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"sim":{"friction":1.5}}"#),
            Err(ConfigError::OutOfRange { name: "friction", .. })
        ));
        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn json_round_trips_fill_style() {
        let mut config = EngineConfig::default();
        config.layout.fill = FillStyle::Solid { color: Rgb(1, 2, 3) };
        let json = config.to_json();
        assert!(json.contains(r#""type":"solid""#));
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
