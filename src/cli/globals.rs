use secrecy::SecretString;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub endpoint: Url,
    pub token: SecretString,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            token: SecretString::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.token = token;
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}
