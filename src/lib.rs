pub mod cli;
pub mod client;
pub mod jsonrpc;
pub mod sequence;
