use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Hosted backend base URL (e.g. https://xyz.supabase.co)
    pub supabase_url: String,

    /// Backend access key, sent as both `apikey` and bearer token
    pub supabase_key: String,

    /// Table holding the movie rows
    #[serde(default = "default_movies_table")]
    pub movies_table: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_table() -> String {
    "movies".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let vars = vec![
            ("SUPABASE_URL".to_string(), "https://demo.supabase.co".to_string()),
            ("SUPABASE_KEY".to_string(), "anon".to_string()),
        ];

        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.supabase_url, "https://demo.supabase.co");
        assert_eq!(config.movies_table, "movies");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let vars = vec![("SUPABASE_URL".to_string(), "https://demo.supabase.co".to_string())];

        let result = envy::from_iter::<_, Config>(vars);
        assert!(result.is_err());
    }
}
