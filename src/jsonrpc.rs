use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: String,
    pub method: String,
    pub id: u64,
    pub params: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcReply<T> {
    pub id: u64,
    pub jsonrpc: String,
    #[serde(flatten)]
    pub result: JsonRpcResult<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JsonRpcResult<T> {
    Result(T),
    Error { code: i64, message: String },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressResponse {
    pub address: String,
}

/// Keystore credentials sent with every `keystore.*` and `avm.*` call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ImportKeyParams {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "privateKey")]
    pub private_key: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SendParams {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub amount: u64,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn creds() -> Credentials {
        Credentials {
            username: "smoke".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn request_uses_node_field_spellings() {
        let payload = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: "avm.send".to_string(),
            id: 6,
            params: Some(SendParams {
                credentials: creds(),
                asset_id: "AVA".to_string(),
                amount: 100_000,
                to: "X-addr1".to_string(),
            }),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "method": "avm.send",
                "id": 6,
                "params": {
                    "username": "smoke",
                    "password": "hunter2",
                    "assetID": "AVA",
                    "amount": 100_000,
                    "to": "X-addr1",
                }
            })
        );
    }

    #[test]
    fn import_key_flattens_credentials() {
        let value = serde_json::to_value(ImportKeyParams {
            credentials: creds(),
            private_key: "ewoq-private-key".to_string(),
        })
        .unwrap();

        assert_eq!(value["username"], "smoke");
        assert_eq!(value["privateKey"], "ewoq-private-key");
    }

    #[test]
    fn reply_parses_result_variant() {
        let reply: JsonRpcReply<AddressResponse> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":3,"result":{"address":"X-local1abc"}}"#,
        )
        .unwrap();

        match reply.result {
            JsonRpcResult::Result(r) => assert_eq!(r.address, "X-local1abc"),
            JsonRpcResult::Error { .. } => panic!("expected a result"),
        }
    }

    #[test]
    fn reply_parses_error_variant() {
        let reply: JsonRpcReply<AddressResponse> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":3,"error":{"code":-32600,"message":"user not found"}}"#,
        )
        .unwrap();

        match reply.result {
            JsonRpcResult::Error { code, message } => {
                assert_eq!(code, -32600);
                assert_eq!(message, "user not found");
            }
            JsonRpcResult::Result(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn reply_without_result_or_error_is_rejected() {
        let parsed: Result<JsonRpcReply<AddressResponse>, _> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":3}"#);
        assert!(parsed.is_err());
    }
}
