//! Pack calculator HTTP API client.

mod client;
mod dto;

pub use client::{ClientError, PackApiClient};
