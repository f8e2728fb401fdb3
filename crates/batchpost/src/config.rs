use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_LOG_FILE: &str = "out.log";
pub const DEFAULT_INPUT_FILE: &str = "data.txt";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for one batch run. The binary only ever uses [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub log_file: PathBuf,
    pub input_file: PathBuf,
    /// `EnvFilter` directives applied to the log file sink.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn with_input_file(mut self, input_file: impl Into<PathBuf>) -> Self {
        self.input_file = input_file.into();
        self
    }
}
