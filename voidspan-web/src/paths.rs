//! Deployment base path for the router.

/// Base path for the router (e.g., `/void` when hosted under a subdirectory).
///
/// Reads `PUBLIC_URL` at compile time; returns `None` when no base path is
/// configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::router_base;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/play/"),
            Some(String::from("/play"))
        );
        assert_eq!(super::router_base_with_base("/"), None);
    }
}
