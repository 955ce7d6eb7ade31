use aws_config::BehaviorVersion;
use kinesis_record_forwarder::config;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    kinesis_record_forwarder::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let aws_config = aws_config::load_defaults(BehaviorVersion::v2023_11_09()).await;
    let clients = kinesis_record_forwarder::AwsClients::new(&aws_config);
    let config = config::Config::load_from_env()?;

    run(service_fn(|request: LambdaEvent<Value>| {
        kinesis_record_forwarder::function_handler(&clients, &config, request)
    }))
    .await
}
