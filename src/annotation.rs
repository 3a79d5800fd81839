//! Cell annotations.
//!
//! An annotation is the text drawn inside a heatmap cell plus an emphasis
//! flag. Turning the flag into markup is left to the drawing backend.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Text label for one heatmap cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Label text, without any markup
    pub text: String,
    /// Whether the label is underlined
    pub underline: bool,
}

impl Annotation {
    /// Plain, non-emphasized annotation.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            underline: false,
        }
    }

    /// Underlined annotation.
    pub fn underlined(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            underline: true,
        }
    }

    /// Render the label with the given markup.
    pub fn markup(&self, markup: UnderlineMarkup) -> String {
        markup.apply(&self.text, self.underline)
    }
}

/// 9×9 grid of annotations.
pub type AnnotationGrid = Array2<Annotation>;

/// Format a probability as a fixed-point label with two fractional digits.
pub fn format_probability(p: f32) -> String {
    format!("{p:.2}")
}

/// How an underline is expressed in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineMarkup {
    /// TeX/mathtext `\underline{...}`
    #[default]
    Tex,
    /// ANSI SGR underline escape codes
    Ansi,
    /// Surrounding underscores `_..._`
    Underscore,
    /// No markup
    Plain,
}

impl UnderlineMarkup {
    /// Wrap `text` if `underline` is set.
    pub fn apply(self, text: &str, underline: bool) -> String {
        if !underline {
            return text.to_string();
        }
        match self {
            Self::Tex => format!("\\underline{{{text}}}"),
            Self::Ansi => format!("\x1b[4m{text}\x1b[24m"),
            Self::Underscore => format!("_{text}_"),
            Self::Plain => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_probability_two_decimals() {
        assert_eq!(format_probability(0.11), "0.11");
        assert_eq!(format_probability(0.0), "0.00");
        assert_eq!(format_probability(1.0), "1.00");
        assert_eq!(format_probability(0.126), "0.13");
    }

    #[test]
    fn test_tex_markup_matches_mathtext() {
        let a = Annotation::underlined("0.11");
        assert_eq!(a.markup(UnderlineMarkup::Tex), "\\underline{0.11}");
    }

    #[test]
    fn test_markup_leaves_plain_annotation_untouched() {
        let a = Annotation::plain("0.11");
        for markup in [
            UnderlineMarkup::Tex,
            UnderlineMarkup::Ansi,
            UnderlineMarkup::Underscore,
            UnderlineMarkup::Plain,
        ] {
            assert_eq!(a.markup(markup), "0.11");
        }
    }

    #[test]
    fn test_ansi_markup_resets_underline() {
        let s = UnderlineMarkup::Ansi.apply("7", true);
        assert!(s.starts_with("\x1b[4m"));
        assert!(s.ends_with("\x1b[24m"));
        assert!(s.contains('7'));
    }

    #[test]
    fn test_underscore_markup() {
        assert_eq!(UnderlineMarkup::Underscore.apply("0.50", true), "_0.50_");
    }
}
