// CSS value formatting and `data-*` attribute parsing shared by the motion
// modules. Everything here is string-in/string-out so the DOM layer can stay
// a thin writer.

use glam::DVec2;

/// An attribute value that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a number, got {0:?}")]
    Number(String),
    #[error("unknown keyword {0:?}")]
    Keyword(String),
    #[error("expected \"<target edge> <container edge>\", got {0:?}")]
    Offset(String),
}

/// Parse a finite number, tolerating surrounding whitespace and a trailing
/// `ms`/`px`/`%` unit.
pub fn parse_number(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_suffix("ms")
        .or_else(|| trimmed.strip_suffix("px"))
        .or_else(|| trimmed.strip_suffix('%'))
        .unwrap_or(trimmed)
        .trim_end();
    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Number(raw.to_string())),
    }
}

/// Parse a boolean attribute. Present-but-empty counts as `true`, matching
/// HTML boolean attribute semantics.
pub fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim(), "false" | "0" | "no" | "off")
}

#[inline]
pub fn translate(v: DVec2) -> String {
    format!("translate({:.2}px, {:.2}px)", v.x, v.y)
}

#[inline]
pub fn translate_x(px: f64) -> String {
    format!("translateX({:.2}px)", px)
}

#[inline]
pub fn translate_y(px: f64) -> String {
    format!("translateY({:.2}px)", px)
}

#[inline]
pub fn opacity(value: f64) -> String {
    format!("{:.3}", value.clamp(0.0, 1.0))
}

#[inline]
pub fn millis(ms: f64) -> String {
    format!("{}ms", ms.max(0.0).round() as u64)
}

#[inline]
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
