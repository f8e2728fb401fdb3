use std::process::ExitCode;

use batchpost::{BatchProcessor, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::default();

    let processor = match BatchProcessor::from_config(&config) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = processor.process_file(&config.input_file).await {
        eprintln!("{e}");
    }
    ExitCode::SUCCESS
}
