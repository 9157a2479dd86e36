// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use building_store::Building;
use serde::{Deserialize, Serialize};

/// Request bodies bind straight into the service candidates.
pub use building_store::{BuildingUpdate as UpdateBuildingRequest, NewBuilding as CreateBuildingRequest};

pub const STATUS_SUCCESS: &str = "Success";

/// Envelope of every reply, errors included: `{"status": .., "result": ..}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            result: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BuildingList {
    pub count: usize,
    pub buildings: Vec<Building>,
}
