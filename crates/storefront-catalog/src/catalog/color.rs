//! Display swatches for product colors.

/// Fallback swatch for colors without a mapping.
pub const DEFAULT_SWATCH: &str = "#9ca3af";

/// Hex swatch used to render a color chip.
pub fn swatch(color: &str) -> &'static str {
    match color.to_lowercase().as_str() {
        "black" => "#000000",
        "white" => "#ffffff",
        "silver" => "#d1d5db",
        "gold" => "#fbbf24",
        "blue" => "#3b82f6",
        "red" => "#ef4444",
        "gray" => "#6b7280",
        "space gray" => "#374151",
        "midnight" => "#0f172a",
        _ => DEFAULT_SWATCH,
    }
}

/// Light swatches need a border to stay visible on a white page.
pub fn needs_border(color: &str) -> bool {
    color.eq_ignore_ascii_case("white")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_swatches() {
        assert_eq!(swatch("Space Gray"), "#374151");
        assert_eq!(swatch("chartreuse"), DEFAULT_SWATCH);
        assert!(needs_border("white"));
        assert!(!needs_border("black"));
    }
}
