//! Server configuration

use std::env;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory uploaded images are persisted under
    pub uploads_dir: PathBuf,
    /// Base URL stored image URLs are built from
    pub public_base_url: String,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Listen port (default: 5555)
    /// - `UPLOADS_DIR`: Image storage directory (default: uploads)
    /// - `PUBLIC_BASE_URL`: Base URL for stored image links
    ///   (default: http://localhost:<port>)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5555);

        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

        Self {
            host,
            port,
            uploads_dir,
            public_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("UPLOADS_DIR");
            env::remove_var("PUBLIC_BASE_URL");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5555);
        assert_eq!(config.uploads_dir, PathBuf::from("uploads"));
        assert_eq!(config.public_base_url, "http://localhost:5555");
    }

    #[test]
    #[serial]
    fn test_server_config_overrides() {
        unsafe {
            env::set_var("HOST", "127.0.0.1");
            env::set_var("PORT", "8080");
            env::set_var("UPLOADS_DIR", "/tmp/media");
            env::set_var("PUBLIC_BASE_URL", "https://books.example.com");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.uploads_dir, PathBuf::from("/tmp/media"));
        assert_eq!(config.public_base_url, "https://books.example.com");

        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("UPLOADS_DIR");
            env::remove_var("PUBLIC_BASE_URL");
        }
    }
}
