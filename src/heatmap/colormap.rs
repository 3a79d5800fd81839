//! Sequential single-hue color ramps and the value range they span.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Relative luminance (sRGB, WCAG definition), in [0, 1].
    pub fn luminance(self) -> f32 {
        fn channel(c: u8) -> f32 {
            let c = f32::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.0) + 0.7152 * channel(self.1) + 0.0722 * channel(self.2)
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn contrasting_text(self) -> Self {
        if self.luminance() > 0.408 {
            Self(0, 0, 0)
        } else {
            Self(255, 255, 255)
        }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| {
            let (a, b) = (f32::from(a), f32::from(b));
            (a + (b - a) * t).round() as u8
        };
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Fixed value range mapped onto a color ramp.
///
/// Values outside the range saturate to the nearest end; nothing is
/// renormalized against the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    /// Value drawn with the lightest color
    pub min: f32,
    /// Value drawn with the darkest color
    pub max: f32,
}

impl ColorRange {
    /// Range `[min, max]`.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The unit range `[0, 1]`.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Position of `value` in the range, clamped to [0, 1].
    ///
    /// Returns `None` for NaN.
    pub fn normalize(&self, value: f32) -> Option<f32> {
        if value.is_nan() {
            return None;
        }
        let span = self.max - self.min;
        if span <= f32::EPSILON {
            return Some(if value >= self.max { 1.0 } else { 0.0 });
        }
        Some(((value - self.min) / span).clamp(0.0, 1.0))
    }
}

/// Sequential color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMap {
    #[default]
    Blues,
    Greens,
    Greys,
    Reds,
}

// ColorBrewer 9-class sequential anchors, light to dark.
const BLUES: [Rgb; 9] = [
    Rgb(0xf7, 0xfb, 0xff),
    Rgb(0xde, 0xeb, 0xf7),
    Rgb(0xc6, 0xdb, 0xef),
    Rgb(0x9e, 0xca, 0xe1),
    Rgb(0x6b, 0xae, 0xd6),
    Rgb(0x42, 0x92, 0xc6),
    Rgb(0x21, 0x71, 0xb5),
    Rgb(0x08, 0x51, 0x9c),
    Rgb(0x08, 0x30, 0x6b),
];

const GREENS: [Rgb; 9] = [
    Rgb(0xf7, 0xfc, 0xf5),
    Rgb(0xe5, 0xf5, 0xe0),
    Rgb(0xc7, 0xe9, 0xc0),
    Rgb(0xa1, 0xd9, 0x9b),
    Rgb(0x74, 0xc4, 0x76),
    Rgb(0x41, 0xab, 0x5d),
    Rgb(0x23, 0x8b, 0x45),
    Rgb(0x00, 0x6d, 0x2c),
    Rgb(0x00, 0x44, 0x1b),
];

const GREYS: [Rgb; 9] = [
    Rgb(0xff, 0xff, 0xff),
    Rgb(0xf0, 0xf0, 0xf0),
    Rgb(0xd9, 0xd9, 0xd9),
    Rgb(0xbd, 0xbd, 0xbd),
    Rgb(0x96, 0x96, 0x96),
    Rgb(0x73, 0x73, 0x73),
    Rgb(0x52, 0x52, 0x52),
    Rgb(0x25, 0x25, 0x25),
    Rgb(0x00, 0x00, 0x00),
];

const REDS: [Rgb; 9] = [
    Rgb(0xff, 0xf5, 0xf0),
    Rgb(0xfe, 0xe0, 0xd2),
    Rgb(0xfc, 0xbb, 0xa1),
    Rgb(0xfc, 0x92, 0x72),
    Rgb(0xfb, 0x6a, 0x4a),
    Rgb(0xef, 0x3b, 0x2c),
    Rgb(0xcb, 0x18, 0x1d),
    Rgb(0xa5, 0x0f, 0x15),
    Rgb(0x67, 0x00, 0x0d),
];

impl ColorMap {
    fn anchors(self) -> &'static [Rgb; 9] {
        match self {
            Self::Blues => &BLUES,
            Self::Greens => &GREENS,
            Self::Greys => &GREYS,
            Self::Reds => &REDS,
        }
    }

    /// Color at position `t` in [0, 1] (clamped).
    pub fn color_at(self, t: f32) -> Rgb {
        let anchors = self.anchors();
        let last = anchors.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * last as f32;
        let lo = (scaled.floor() as usize).min(last);
        let hi = (lo + 1).min(last);
        anchors[lo].lerp(anchors[hi], scaled - lo as f32)
    }

    /// Color for `value` under `range`, or `None` for NaN.
    pub fn color_for(self, value: f32, range: ColorRange) -> Option<Rgb> {
        range.normalize(value).map(|t| self.color_at(t))
    }
}

impl std::str::FromStr for ColorMap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blues" => Ok(Self::Blues),
            "greens" => Ok(Self::Greens),
            "greys" | "grays" => Ok(Self::Greys),
            "reds" => Ok(Self::Reds),
            _ => Err(format!(
                "Unknown colormap: {s}. Valid colormaps: blues, greens, greys, reds"
            )),
        }
    }
}

impl std::fmt::Display for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blues => write!(f, "blues"),
            Self::Greens => write!(f, "greens"),
            Self::Greys => write!(f, "greys"),
            Self::Reds => write!(f, "reds"),
        }
    }
}
