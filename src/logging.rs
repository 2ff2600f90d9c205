use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "paper_duel=info";

/// Builds the log filter from a `RUST_LOG` value, falling back to `DEFAULT_DIRECTIVE`.
pub fn build_filter(rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(DEFAULT_DIRECTIVE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_is_info() {
        let filter = build_filter(None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter.to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_blank_rust_log_uses_default() {
        let filter = build_filter(Some("  ")).unwrap();
        assert_eq!(filter.to_string(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_rust_log_can_raise_crate_level() {
        let filter = build_filter(Some("paper_duel=debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter.to_string(), "paper_duel=debug");
    }

    #[test]
    fn test_global_rust_log_level_is_kept() {
        let filter = build_filter(Some("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_invalid_rust_log_is_an_error() {
        assert!(build_filter(Some("paper_duel=loud")).is_err());
    }
}
