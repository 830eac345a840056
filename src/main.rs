use anyhow::Result as AnyhowResult;
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use avm_smoke::cli::Opt;
use avm_smoke::sequence;

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avm_smoke=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opt = Opt::from_args();
    sequence::run(&opt).await
}
