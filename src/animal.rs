//! Animal records as exchanged with the REST backend.

use serde::{Deserialize, Serialize};

/// Server-assigned animal identifier.
pub type AnimalId = u32;

/// A single animal record as returned by `GET /animals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// Payload for `POST /animals`: an [`Animal`] before the server has
/// assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub age: u32,
}
