use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub news_api_key: String,
    pub openweather_api_key: String,
    pub news_base_url: String,
    pub weather_base_url: String,
    pub news_country: String,
    pub request_timeout_secs: u64,
    pub news_inter_request_delay_ms: u64,
    pub log_level: String,
    pub settings_path: Option<PathBuf>,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("news_api_key", &"[redacted]")
            .field("openweather_api_key", &"[redacted]")
            .field("news_base_url", &self.news_base_url)
            .field("weather_base_url", &self.weather_base_url)
            .field("news_country", &self.news_country)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "news_inter_request_delay_ms",
                &self.news_inter_request_delay_ms,
            )
            .field("log_level", &self.log_level)
            .field("settings_path", &self.settings_path)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
