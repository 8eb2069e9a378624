use serde::{Deserialize, Serialize};

use crate::domain::{CalculationResult, PackCount, PackId, PackSize};

/// Pack size as sent by the server.
#[derive(Debug, Deserialize)]
pub struct PackSizeResponse {
    /// Server id.
    pub id: u64,
    /// Items per pack.
    pub size: u64,
}

impl From<PackSizeResponse> for PackSize {
    fn from(value: PackSizeResponse) -> Self {
        Self::new(PackId::new(value.id), value.size)
    }
}

/// `GET /api/packs` body. The server may send `null` for an empty list.
#[derive(Debug, Deserialize)]
pub struct PackSizesResponse {
    /// Pack sizes; `null` reads as empty.
    #[serde(default)]
    pub packs: Option<Vec<PackSizeResponse>>,
}

/// `POST /api/sizes` body.
#[derive(Debug, Serialize)]
pub struct CreateSizeRequest {
    /// Items per pack.
    pub size: u64,
}

/// `POST /api/calc` body.
#[derive(Debug, Serialize)]
pub struct CalculateRequest {
    /// Order amount.
    pub amount: u64,
}

/// One line of a calculation response.
#[derive(Debug, Deserialize)]
pub struct PackCountResponse {
    /// Items per pack.
    pub size: u64,
    /// Number of packs.
    pub count: u64,
}

/// `POST /api/calc` response.
#[derive(Debug, Deserialize)]
pub struct CalculateResponse {
    /// Requested amount.
    pub amount: u64,
    /// Packs needed; `null` reads as empty.
    #[serde(default)]
    pub packs: Option<Vec<PackCountResponse>>,
}

impl From<CalculateResponse> for CalculationResult {
    fn from(value: CalculateResponse) -> Self {
        let packs = value
            .packs
            .unwrap_or_default()
            .into_iter()
            .map(|p| PackCount::new(p.size, p.count))
            .collect();
        Self::new(value.amount, packs)
    }
}
