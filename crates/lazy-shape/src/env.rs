use std::env;
use std::sync::OnceLock;

const SYMBOLIC_SHAPES_VAR: &str = "LTC_ENABLE_SYMBOLIC_SHAPES";

static SYMBOLIC_SHAPES: OnceLock<bool> = OnceLock::new();

fn parse_bool(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
}

fn flag_from(value: Option<String>) -> bool {
    match value {
        Some(value) if !value.trim().is_empty() => parse_bool(&value),
        _ => false,
    }
}

/// Returns whether symbolic shape mode is on for this process.
///
/// Read once from `LTC_ENABLE_SYMBOLIC_SHAPES`; later changes to the
/// environment are not observed.
pub fn symbolic_shapes_enabled() -> bool {
    *SYMBOLIC_SHAPES.get_or_init(|| {
        let enabled = flag_from(env::var(SYMBOLIC_SHAPES_VAR).ok());
        log::debug!("{SYMBOLIC_SHAPES_VAR} resolved to {enabled}");
        enabled
    })
}
