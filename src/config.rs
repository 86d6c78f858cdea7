use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads configuration from the environment. `DBNAME`, `DBUSER` and
    /// `DBPASS` are required; `PORT` and `DBHOST` have local defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()
            .context("PORT must be a number")?;

        let host = std::env::var("DBHOST").unwrap_or_else(|_| "localhost".to_string());
        let name = std::env::var("DBNAME").context("DBNAME is not set")?;
        let user = std::env::var("DBUSER").context("DBUSER is not set")?;
        let pass = std::env::var("DBPASS").context("DBPASS is not set")?;

        Ok(Self {
            port,
            database_url: format!("postgres://{user}:{pass}@{host}:5432/{name}"),
        })
    }
}
