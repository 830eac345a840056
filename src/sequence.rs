use std::time::Duration;

use anyhow::Result as AnyhowResult;
use tokio::time::sleep;
use tracing::debug;

use crate::cli::Opt;
use crate::client::NodeClient;
use crate::jsonrpc::Credentials;

// Historical quirk, kept on purpose: the second transfer reuses request id 3
// instead of taking the next sequence value.
const SECOND_TRANSFER_ID: u64 = 3;

/// Runs the fixed smoke sequence: create a keystore user, import the funded
/// key, derive three addresses, then issue four transfers with a pause between
/// each transfer.
pub async fn run(opt: &Opt) -> AnyhowResult<()> {
    let mut client = NodeClient::new(opt.node_url.clone());
    let credentials = Credentials {
        username: opt.username.clone(),
        password: opt.password.clone(),
    };

    client.create_user(&credentials).await?;
    client.import_key(&credentials, &opt.private_key).await?;

    let addr1 = client.create_address(&credentials).await?;
    let addr2 = client.create_address(&credentials).await?;
    let addr3 = client.create_address(&credentials).await?;
    debug!("derived addresses: {addr1} {addr2} {addr3}");

    client
        .send_asset(&credentials, &opt.asset_id, 100_000, &addr1)
        .await?;

    pause(opt.pause_secs).await;
    client
        .send_asset_with_id(SECOND_TRANSFER_ID, &credentials, &opt.asset_id, 10_000, &addr2)
        .await?;

    pause(opt.pause_secs).await;
    client
        .send_asset(&credentials, &opt.asset_id, 10_001, &addr2)
        .await?;

    pause(opt.pause_secs).await;
    client
        .send_asset(&credentials, &opt.asset_id, 20_002, &addr3)
        .await?;

    Ok(())
}

async fn pause(secs: u64) {
    debug!("waiting {secs}s before the next transfer");
    sleep(Duration::from_secs(secs)).await;
}
