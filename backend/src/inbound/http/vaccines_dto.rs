//! Wire representations of vaccine records and their conversions.
//!
//! The conversions are pure, total, and validation-free in both directions:
//! a structurally odd payload (say, a type with an empty code) maps straight
//! through and is judged later by the registry. List variants preserve input
//! ordering and cardinality exactly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Vaccine, VaccineType};

/// Wire form of [`VaccineType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaccineTypeDto {
    /// Short identifying code.
    #[schema(example = "TT")]
    pub code: String,
    /// Human-readable description.
    #[schema(example = "Routine childhood vaccine")]
    pub description: String,
}

/// Wire form of [`Vaccine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaccineDto {
    /// Identifying code, at most ten characters.
    #[schema(example = "Z0", max_length = 10)]
    pub code: String,
    /// Human-readable description.
    #[schema(example = "Tetanus booster")]
    pub description: String,
    /// Owned classification value.
    pub vaccine_type: VaccineTypeDto,
}

impl From<VaccineType> for VaccineTypeDto {
    fn from(value: VaccineType) -> Self {
        Self {
            code: value.code,
            description: value.description,
        }
    }
}

impl From<VaccineTypeDto> for VaccineType {
    fn from(value: VaccineTypeDto) -> Self {
        Self {
            code: value.code,
            description: value.description,
        }
    }
}

impl From<Vaccine> for VaccineDto {
    fn from(value: Vaccine) -> Self {
        Self {
            code: value.code,
            description: value.description,
            vaccine_type: value.vaccine_type.into(),
        }
    }
}

impl From<VaccineDto> for Vaccine {
    fn from(value: VaccineDto) -> Self {
        Self {
            code: value.code,
            description: value.description,
            vaccine_type: value.vaccine_type.into(),
        }
    }
}

/// Map records to their wire form, keeping order and cardinality.
#[must_use]
pub fn map_to_dtos(records: Vec<Vaccine>) -> Vec<VaccineDto> {
    records.into_iter().map(VaccineDto::from).collect()
}

/// Map wire payloads to records, keeping order and cardinality.
#[must_use]
pub fn map_to_records(dtos: Vec<VaccineDto>) -> Vec<Vaccine> {
    dtos.into_iter().map(Vaccine::from).collect()
}
