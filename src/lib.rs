use aws_config::SdkConfig;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::Client as KinesisClient;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub mod config;
pub mod events;

pub fn set_up_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

// lambda handler
pub async fn function_handler(
    clients: &AwsClients,
    config: &Config,
    evt: LambdaEvent<Value>,
) -> Result<(), Error> {
    debug!("Handling event payload: {:?}", evt.payload);

    let body = events::extract_body(&evt.payload)?;
    let data = events::encode_payload(body)?;

    debug!(
        "submitting record to stream {} with partition key {}",
        config.stream_name, config.partition_key
    );
    clients
        .kinesis
        .put_record()
        .stream_name(&config.stream_name)
        .partition_key(&config.partition_key)
        .data(Blob::new(data.into_bytes()))
        .send()
        .await?;

    info!("Data Inserted");
    Ok(())
}

/// A type used to hold the AWS clients required to interact with AWS services
/// used by the lambda function.
#[derive(Clone)]
pub struct AwsClients {
    pub kinesis: KinesisClient,
}

impl AwsClients {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        AwsClients {
            kinesis: KinesisClient::new(sdk_config),
        }
    }
}
