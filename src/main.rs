use std::process::ExitCode;

use inspector_relay::{infrastructure::config_file, relay_job::RelayJob};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("inspector_relay=debug".parse().expect("static directive"))
            .add_directive("aws_config=warn".parse().expect("static directive"))
            .add_directive("aws_smithy_runtime=warn".parse().expect("static directive"))
            .add_directive("aws_sdk=warn".parse().expect("static directive")))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Inspector findings relay");

    // Failures are logged where they are raised; here they only pick the exit code.
    let Ok(config) = config_file::load_config(&config_file::config_path()) else {
        return ExitCode::FAILURE;
    };

    let job = RelayJob::new(config).await;
    match job.run().await {
        Ok(summary) => {
            info!("Relay finished: {} retrieved, {} published", summary.retrieved, summary.published);
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
