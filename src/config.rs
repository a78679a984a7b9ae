use std::fmt;

use clap::Args;
use url::Url;

/// Connection settings for the target database.
///
/// Each field falls back to the environment (and a `.env` file loaded by the
/// binary) when not given on the command line.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// Database host
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(long = "db-port", env = "DB_PORT", default_value_t = 3306)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", default_value = "root")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Schema to describe; also names the output file
    #[arg(long = "db-name", env = "DB_NAME")]
    pub name: String,
}

impl DatabaseConfig {
    /// Build the `mysql://` connection URL with credentials percent-encoded.
    pub fn connection_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("mysql://{}:{}", self.host, self.port))?;
        url.set_username(&self.user)
            .map_err(|()| url::ParseError::EmptyHost)?;
        url.set_password(self.password.as_deref())
            .map_err(|()| url::ParseError::EmptyHost)?;
        url.set_path(&format!("/{}", self.name));
        Ok(url)
    }
}

/// Redacted form for logs: never shows the password.
impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mysql://{}@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}
