pub struct SubmitSettings {
    pub endpoint: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://uf7tin6si3sgnif7truyy3rrwm0kzqjd.lambda-url.us-east-2.on.aws",
            user_agent: "RiichiGameRecorder/0.1",
            timeout_secs: 30,
        }
    }
}

pub struct AppConfig {
    pub submit: SubmitSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            submit: SubmitSettings::default(),
        }
    }
}
