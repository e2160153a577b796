//! Pinata client for pinning form uploads to IPFS.
//!
//! Files go up through the legacy `pinFileToIPFS` endpoint with API key
//! headers; links come back on the public Pinata gateway.

mod ipfs;

pub use ipfs::{PinataClient, PinataConfig, PinataCredentials};
