use anyhow::{anyhow, Result as AnyhowResult};
use reqwest::Client;
use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::jsonrpc::{
    AddressResponse, Credentials, ImportKeyParams, JsonRpcReply, JsonRpcRequest, JsonRpcResult,
    SendParams, JSONRPC_VERSION,
};

/// Node API endpoints, rendered as the URL path they live under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Endpoint {
    #[strum(serialize = "/ext/keystore")]
    Keystore,
    #[strum(serialize = "/ext/bc/X")]
    SwapChain,
    #[strum(serialize = "/ext/bc/P")]
    CoreChain,
}

/// JSON-RPC caller against a single node. Owns the request id sequence, so
/// two clients never share counter state.
pub struct NodeClient {
    http: Client,
    base_url: String,
    last_id: u64,
}

impl NodeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            last_id: 0,
        }
    }

    pub fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Sends one JSON-RPC request and returns the raw response body. The body
    /// is also printed, matching the run log this tool is read through.
    pub async fn call<T: Serialize>(
        &self,
        endpoint: Endpoint,
        id: u64,
        method: &str,
        params: T,
    ) -> AnyhowResult<String> {
        let payload = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            id,
            params: Some(params),
        };

        debug!("POST {}{} {} (id {})", self.base_url, endpoint, method, id);
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .json(&payload)
            .send()
            .await?;
        let body = response.text().await?;
        println!("{body}");

        Ok(body)
    }

    pub async fn create_user(&mut self, credentials: &Credentials) -> AnyhowResult<String> {
        let id = self.next_id();
        self.call(
            Endpoint::Keystore,
            id,
            "keystore.createUser",
            credentials.clone(),
        )
        .await
    }

    pub async fn import_key(
        &mut self,
        credentials: &Credentials,
        private_key: &str,
    ) -> AnyhowResult<String> {
        let id = self.next_id();
        self.call(
            Endpoint::SwapChain,
            id,
            "avm.importKey",
            ImportKeyParams {
                credentials: credentials.clone(),
                private_key: private_key.to_string(),
            },
        )
        .await
    }

    /// Derives a fresh swap-chain address and returns it.
    pub async fn create_address(&mut self, credentials: &Credentials) -> AnyhowResult<String> {
        let id = self.next_id();
        let body = self
            .call(
                Endpoint::SwapChain,
                id,
                "avm.createAddress",
                credentials.clone(),
            )
            .await?;

        let reply: JsonRpcReply<AddressResponse> = serde_json::from_str(&body)?;
        match reply.result {
            JsonRpcResult::Result(r) if !r.address.is_empty() => Ok(r.address),
            JsonRpcResult::Result(_) => Err(anyhow!("node returned an empty address")),
            JsonRpcResult::Error { code, message } => Err(anyhow!(
                "avm.createAddress failed: {} (code {})",
                message,
                code
            )),
        }
    }

    pub async fn send_asset(
        &mut self,
        credentials: &Credentials,
        asset_id: &str,
        amount: u64,
        to: &str,
    ) -> AnyhowResult<String> {
        let id = self.next_id();
        self.send_asset_with_id(id, credentials, asset_id, amount, to)
            .await
    }

    /// `avm.send` with an explicit request id, bypassing the sequence.
    pub async fn send_asset_with_id(
        &self,
        id: u64,
        credentials: &Credentials,
        asset_id: &str,
        amount: u64,
        to: &str,
    ) -> AnyhowResult<String> {
        self.call(
            Endpoint::SwapChain,
            id,
            "avm.send",
            SendParams {
                credentials: credentials.clone(),
                asset_id: asset_id.to_string(),
                amount,
                to: to.to_string(),
            },
        )
        .await
    }
}
