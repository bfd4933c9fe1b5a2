//! # menagerie-rs
//!
//! Domain types and view logic for a small animal-roster web UI.
//!
//! The roster lives behind a REST backend; the browser front-end (the
//! `wasm-ui` workspace member) renders it and submits changes. This crate
//! holds the parts of that client that do not need a browser.
//!
//! ## Overview
//!
//! - **Wire types**: [`Animal`], [`NewAnimal`], [`SpeciesCount`] match the
//!   backend's JSON exactly (including the Prisma-style `_count` key)
//! - **View logic**: [`Roster`] puts both tables in display order
//! - **Form handling**: [`AnimalForm`] validates input before any request
//!   is made
//! - **API shape**: endpoint URLs and the error bodies of rejected creates
//!
//! ## Example
//!
//! ```
//! use menagerie_rs::{Animal, Roster};
//!
//! let fetched = vec![
//!     Animal { id: 2, name: "Rex".into(), species: "Dog".into(), age: 7 },
//!     Animal { id: 5, name: "ace".into(), species: "Cat".into(), age: 2 },
//! ];
//!
//! // Animals render sorted by name, case-insensitively.
//! let roster = Roster::new(fetched, vec![]);
//! assert_eq!(roster.animals()[0].name, "ace");
//! assert_eq!(roster.animal_total(), 2);
//! ```

pub mod animal;
pub mod api;
pub mod error;
pub mod form;
pub mod roster;
pub mod species;

pub use animal::{Animal, AnimalId, NewAnimal};
pub use api::{animal_url, animals_url, species_url, validation_messages};
pub use error::{ApiError, FormError};
pub use form::AnimalForm;
pub use roster::Roster;
pub use species::SpeciesCount;
