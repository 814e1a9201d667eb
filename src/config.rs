//! Rewrite configuration.
//!
//! A [`Config`] is built once at startup and shared read-only by every
//! request. The core never touches the environment; [`Config::from_env`] is
//! the one place that does, and only the binary calls it.

/// Environment variable names, in field order.
pub const SCHEME_PATTERN: &str = "SCHEME_PATTERN";
pub const SCHEME_REPLACEMENT: &str = "SCHEME_REPLACEMENT";
pub const HOST_PATTERN: &str = "HOST_PATTERN";
pub const HOST_REPLACEMENT: &str = "HOST_REPLACEMENT";
pub const PATH_PATTERN: &str = "PATH_PATTERN";
pub const PATH_REPLACEMENT: &str = "PATH_REPLACEMENT";

/// Three literal pattern/replacement pairs, one per URL component.
///
/// Each pattern is matched as a verbatim substring and only its first
/// occurrence is replaced. An empty pattern never matches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub scheme_pattern: String,
    pub scheme_replacement: String,
    pub host_pattern: String,
    pub host_replacement: String,
    pub path_pattern: String,
    pub path_replacement: String,
}

impl Config {
    pub fn new(
        scheme_pattern: impl Into<String>,
        scheme_replacement: impl Into<String>,
        host_pattern: impl Into<String>,
        host_replacement: impl Into<String>,
        path_pattern: impl Into<String>,
        path_replacement: impl Into<String>,
    ) -> Self {
        Self {
            scheme_pattern: scheme_pattern.into(),
            scheme_replacement: scheme_replacement.into(),
            host_pattern: host_pattern.into(),
            host_replacement: host_replacement.into(),
            path_pattern: path_pattern.into(),
            path_replacement: path_replacement.into(),
        }
    }

    /// Builds a config from `lookup`, falling back to `defaults` for every key
    /// that is unset or empty.
    ///
    /// ```rust
    /// use govanity::Config;
    ///
    /// let cfg = Config::from_lookup(&Config::default(), |key| match key {
    ///     "HOST_PATTERN" => Some("go.example.org".to_owned()),
    ///     _ => None,
    /// });
    /// assert_eq!(cfg.host_pattern, "go.example.org");
    /// assert_eq!(cfg.host_replacement, "github.com");
    /// ```
    pub fn from_lookup<F>(defaults: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            scheme_pattern: get(SCHEME_PATTERN, &defaults.scheme_pattern),
            scheme_replacement: get(SCHEME_REPLACEMENT, &defaults.scheme_replacement),
            host_pattern: get(HOST_PATTERN, &defaults.host_pattern),
            host_replacement: get(HOST_REPLACEMENT, &defaults.host_replacement),
            path_pattern: get(PATH_PATTERN, &defaults.path_pattern),
            path_replacement: get(PATH_REPLACEMENT, &defaults.path_replacement),
        }
    }

    /// Reads the six `*_PATTERN` / `*_REPLACEMENT` variables from the process
    /// environment on top of [`Config::default`].
    pub fn from_env() -> Self {
        Self::from_lookup(&Self::default(), |key| std::env::var(key).ok())
    }
}

/// The defaults table.
impl Default for Config {
    fn default() -> Self {
        Self::new(
            "http",
            "https",
            "go.loafoe.dev",
            "github.com",
            "/",
            "/loafoe-dev/go-",
        )
    }
}
