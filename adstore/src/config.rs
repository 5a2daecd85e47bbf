#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Base of the storefront API, without a trailing slash.
    pub api_base: String,
    pub currency_symbol: String,
}

impl StoreConfig {
    /// Development builds served from localhost talk to the API server on
    /// port 3000; everything else is same-origin.
    pub fn for_hostname(hostname: &str) -> Self {
        let api_base = if hostname == "localhost" || hostname == "127.0.0.1" {
            "http://localhost:3000/api".to_string()
        } else {
            "/api".to_string()
        };

        Self {
            api_base,
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_hostname() {
        assert_eq!(
            StoreConfig::for_hostname("localhost").api_base,
            "http://localhost:3000/api"
        );
        assert_eq!(
            StoreConfig::for_hostname("127.0.0.1").api_base,
            "http://localhost:3000/api"
        );
        assert_eq!(StoreConfig::for_hostname("shop.example.in").api_base, "/api");
    }

    #[test]
    fn test_url() {
        let config = StoreConfig::default().with_api_base("http://127.0.0.1:8080/api/");
        assert_eq!(
            config.url("/plans?isActive=true"),
            "http://127.0.0.1:8080/api/plans?isActive=true"
        );
        assert_eq!(config.currency_symbol, "₹");
    }
}
