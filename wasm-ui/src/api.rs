//! HTTP calls against the animals backend.
//!
//! Thin wrappers over `gloo::net` that turn transport failures and
//! non-success statuses into [`ApiError`] values carrying the text the
//! notice area shows. No retries, no caching: every caller gets exactly
//! one request.

use gloo::net::http::Request;
use menagerie_rs::{
    Animal, AnimalId, ApiError, NewAnimal, SpeciesCount, animal_url, animals_url, species_url,
    validation_messages,
};

/// Backend base URL. Defaults to the local dev server; override at build
/// time with `MENAGERIE_API_URL=https://... trunk build`.
pub const API_BASE_URL: &str = match option_env!("MENAGERIE_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Fetch every animal on file.
pub async fn fetch_animals() -> Result<Vec<Animal>, ApiError> {
    let resp = Request::get(&animals_url(API_BASE_URL))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::status("Failed to fetch animals", resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the per-species tallies.
pub async fn fetch_species_counts() -> Result<Vec<SpeciesCount>, ApiError> {
    let resp = Request::get(&species_url(API_BASE_URL))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::status(
            "Failed to fetch species count",
            resp.status(),
        ));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create an animal, returning the record with its server-assigned id.
///
/// On a non-success status the server's validation messages are pulled
/// out of the body when present; otherwise the generic message stands.
pub async fn create_animal(payload: &NewAnimal) -> Result<Animal, ApiError> {
    let resp = Request::post(&animals_url(API_BASE_URL))
        .json(payload)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(match validation_messages(&body) {
            Some(text) => ApiError::Validation(text),
            None => ApiError::status("Failed to add animal", status),
        });
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete one animal by id.
pub async fn delete_animal(id: AnimalId) -> Result<(), ApiError> {
    let resp = Request::delete(&animal_url(API_BASE_URL, id))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::status("Failed to delete animal", resp.status()));
    }
    Ok(())
}
