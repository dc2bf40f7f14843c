use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Quote data (None = built-in quotes)
    pub quotes_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: match std::env::var("HOST") {
                Ok(host) => host
                    .parse()
                    .with_context(|| format!("HOST is not a valid IP address: {}", host))?,
                Err(_) => IpAddr::from([0, 0, 0, 0]),
            },
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", port))?,
                Err(_) => 8080,
            },

            quotes_file: std::env::var("QUOTES_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("QUOTES_FILE");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.quotes_file, None);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("QUOTES_FILE", "/etc/quotes.json");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.quotes_file, Some(PathBuf::from("/etc/quotes.json")));
    }

    #[test]
    #[serial]
    fn test_blank_quotes_file_means_builtin() {
        clear_env();
        std::env::set_var("QUOTES_FILE", "  ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.quotes_file, None);
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_invalid_host() {
        clear_env();
        std::env::set_var("HOST", "localhost:80");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
