//! Batch driver: one input file, one request per line, strictly in order.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::instrument::WithSubscriber;
use tracing::{error, info};

use crate::Payload;
use crate::client::PostClient;
use crate::config::Config;
use crate::error::{BatchError, LineError};
use crate::parser::parse_line;
use crate::telemetry::LogContext;
use crate::validation::validate;

/// Result for one non-empty input line. `line_number` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    pub line_number: usize,
    pub result: Result<(), LineError>,
}

impl LineOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct BatchProcessor {
    client: PostClient,
    log: LogContext,
}

impl BatchProcessor {
    pub fn new(client: PostClient, log: LogContext) -> Self {
        Self { client, log }
    }

    pub fn from_config(config: &Config) -> Result<Self, BatchError> {
        let log = LogContext::open(&config.log_file, &config.log_filter)?;
        let client = PostClient::new(config.endpoint.clone())?;
        Ok(Self::new(client, log))
    }

    /// Process every line of `path`, logging each outcome to this processor's log.
    ///
    /// Per-line failures are logged and returned in the outcome list. Only an
    /// input file that cannot be opened or read ends the run early.
    pub async fn process_file(&self, path: &Path) -> Result<Vec<LineOutcome>, BatchError> {
        self.process_lines(path)
            .with_subscriber(self.log.dispatch().clone())
            .await
    }

    async fn process_lines(&self, path: &Path) -> Result<Vec<LineOutcome>, BatchError> {
        let display_path = path.display().to_string();

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let err = BatchError::from_io_error(e, &display_path);
                error!("{err}");
                return Err(err);
            }
        };

        let mut lines = BufReader::new(file).lines();
        let mut outcomes = Vec::new();
        let mut line_number = 0;

        loop {
            line_number += 1;
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    let err = BatchError::InputRead {
                        path: display_path,
                        line_number,
                        message: e.to_string(),
                    };
                    error!("{err}");
                    return Err(err);
                }
            };

            if line.is_empty() {
                continue;
            }

            let result = self.process_line(&line).await;
            outcomes.push(LineOutcome {
                line_number,
                result,
            });
        }

        Ok(outcomes)
    }

    async fn process_line(&self, line: &str) -> Result<(), LineError> {
        let record = parse_line(line).inspect_err(|e| error!("{e}"))?;
        let payload = Payload::from(record);

        info!("Connected to {}", self.client.endpoint());
        let response = self
            .client
            .send(&payload)
            .await
            .inspect_err(|e| error!("{e}"))?;

        validate(&payload, &response).inspect_err(|e| error!("{e}"))?;
        info!("Request successfully processed");
        Ok(())
    }
}
