/// Base prepended to site-relative asset paths, fixed at build time.
pub const PUBLIC_URL: &str = match option_env!("PUBLIC_URL") {
    Some(base) => base,
    None => "",
};

/// RFC 3339 timestamp written by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn resolve_public_url(path: &str) -> String {
    resolve_with_base(PUBLIC_URL, path)
}

fn resolve_with_base(base: &str, path: &str) -> String {
    if path.is_empty() || path.starts_with("http") {
        path.to_string()
    } else {
        format!("{base}{path}")
    }
}

/// Date part of [`BUILD_TIME`], for display.
pub fn build_date() -> &'static str {
    BUILD_TIME.split('T').next().unwrap_or(BUILD_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_relative_paths_get_base() {
        assert_eq!(
            resolve_with_base("/my-portfolio", "/img/crashImage1.png"),
            "/my-portfolio/img/crashImage1.png"
        );
        assert_eq!(resolve_with_base("", "/img/a.png"), "/img/a.png");
    }

    #[test]
    fn test_absolute_and_empty_untouched() {
        let url = "https://bangmim.github.io/my-frontend-portfolio/img/pmh.jpg";
        assert_eq!(resolve_with_base("/base", url), url);
        assert_eq!(resolve_with_base("/base", ""), "");
    }

    #[test]
    fn test_build_date() {
        assert!(!build_date().contains('T'));
        assert!(BUILD_TIME.starts_with(build_date()));
    }
}
