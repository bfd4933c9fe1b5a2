//! Per-species tallies as exchanged with the REST backend.

use serde::{Deserialize, Serialize};

/// One row of `GET /animals/bySpecies`: a species name and how many
/// animals of that species are on file.
///
/// The count is named `_count` on the wire (the backend groups with
/// Prisma, which nests aggregate counts under that key), so the field
/// carries a serde rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species: String,
    #[serde(rename = "_count")]
    pub count: u32,
}
