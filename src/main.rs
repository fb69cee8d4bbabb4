use clap::Parser;
use goaws_provision::config::{DEFAULT_ENDPOINT_URL, DEFAULT_REGION};
use goaws_provision::{AwsBackend, ProvisionConfig, StaticCredentials};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "goaws-provision")]
#[command(about = "Create the SNS/SQS fixtures used by the functional tests", long_about = None)]
struct Args {
    /// What region?
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// What endpoint URL?
    #[arg(long, default_value = DEFAULT_ENDPOINT_URL)]
    endpoint_url: String,

    /// Access key id to sign requests with instead of the default credential chain
    #[arg(long, requires = "secret_access_key")]
    access_key_id: Option<String>,

    /// Secret access key paired with --access-key-id
    #[arg(long, requires = "access_key_id")]
    secret_access_key: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> ProvisionConfig {
        let config = ProvisionConfig::new(self.region, self.endpoint_url);
        match (self.access_key_id, self.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => {
                config.with_credentials(StaticCredentials::new(access_key_id, secret_access_key))
            }
            _ => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("warn,goaws_provision={}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.into_config();
    tracing::info!(region = %config.region, endpoint_url = %config.endpoint_url, "provisioning goaws fixtures");

    let backend = AwsBackend::connect(&config).await;
    let report = goaws_provision::run(&backend, &config, &mut std::io::stdout().lock()).await?;

    tracing::info!(
        queues = report.queues.len(),
        subscription_arn = %report.subscription.subscription_arn,
        "provisioning finished"
    );
    Ok(())
}
