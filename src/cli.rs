use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "avm-smoke")]
pub struct Opt {
    /// Node base URL
    #[structopt(
        short,
        long,
        env = "NODE_URL",
        default_value = "http://127.0.0.1:9650"
    )]
    pub node_url: String,

    /// Keystore username
    #[structopt(short, long, env = "KEYSTORE_USERNAME")]
    pub username: String,

    /// Keystore password
    #[structopt(short, long, env = "KEYSTORE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Pre-funded private key imported before the transfers
    #[structopt(short = "k", long = "key", env = "FUNDED_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Asset moved by the transfer calls
    #[structopt(short, long, env = "ASSET_ID", default_value = "AVA")]
    pub asset_id: String,

    /// Seconds to wait between transfers
    #[structopt(long, default_value = "2")]
    pub pause_secs: u64,
}
