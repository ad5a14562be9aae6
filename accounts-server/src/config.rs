use clap::{Args, Parser};
use std::{path::PathBuf, time::Duration};

/// An account signup and login server.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Postgres connection string. The server won't start without it.
    #[clap(long, env)]
    pub database_url: String,

    /// Maximum number of pooled database connections
    #[clap(long, env, default_value = "5")]
    pub max_connections: u32,

    #[clap(flatten)]
    pub http: HttpConfig,
}

/// How we serve HTTP.
#[derive(Debug, Clone, Args)]
pub struct HttpConfig {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:3000")]
    pub address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "5242880")]
    pub body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    pub request_timeout: Duration,

    /// Directory of front-end assets served for any path that isn't an API
    /// route
    #[clap(long, env, default_value = "public")]
    pub static_dir: PathBuf,
}

/// Parse a whole number of seconds.
fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config =
            Config::try_parse_from(["accounts-server", "--database-url", "postgres://localhost"])
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.http.address, "127.0.0.1:3000");
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.http.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_database_url_is_required() {
        // the variable would satisfy clap if it leaked in from the environment
        if std::env::var_os("DATABASE_URL").is_some() {
            return;
        }

        assert!(Config::try_parse_from(["accounts-server"]).is_err());
    }
}
