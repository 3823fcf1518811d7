//! Proxy mode selection

use std::fmt;

/// Environment variable selecting the proxy mode
pub const PROXY_MODE_VAR: &str = "PROXY_MODE";

/// Whether HAProxy forwards at the HTTP layer or as raw TCP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProxyMode {
    Http,
    #[default]
    Tcp,
}

impl ProxyMode {
    /// Resolve a mode from an optional raw value.
    ///
    /// Only the exact string `"http"` selects [`ProxyMode::Http`]. Every other
    /// value, including an absent one, falls back to [`ProxyMode::Tcp`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("http") => ProxyMode::Http,
            _ => ProxyMode::Tcp,
        }
    }

    /// Protocol label handed to the template as `proxy_type`
    pub fn protocol(&self) -> &'static str {
        match self {
            ProxyMode::Http => "http",
            ProxyMode::Tcp => "tcp",
        }
    }

    /// Tor port handed to the template as `tor_port`
    pub fn port(&self) -> u16 {
        match self {
            ProxyMode::Http => 9080,
            ProxyMode::Tcp => 9050,
        }
    }
}

impl fmt::Display for ProxyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol())
    }
}
