//! Render-ready snapshot of the backend state.
//!
//! The UI holds no state of its own between renders: every refresh fetches
//! both lists and replaces the previous snapshot wholesale. `Roster`
//! normalizes the fetched data into display order once, at construction,
//! so the components only ever iterate.

use crate::animal::Animal;
use crate::species::SpeciesCount;

/// What the tables show after a refresh: animals in list order, species
/// tallies in summary order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    animals: Vec<Animal>,
    species: Vec<SpeciesCount>,
}

impl Roster {
    /// Build a snapshot from freshly fetched data.
    ///
    /// Animals sort by name, case-insensitively, with the id as a
    /// tie-break so equal names render deterministically. Species tallies
    /// sort by descending count; equal counts keep the server's order
    /// (the sort is stable).
    pub fn new(mut animals: Vec<Animal>, mut species: Vec<SpeciesCount>) -> Self {
        animals.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        species.sort_by(|a, b| b.count.cmp(&a.count));
        Self { animals, species }
    }

    /// Animals in list order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Species tallies in summary order.
    pub fn species(&self) -> &[SpeciesCount] {
        &self.species
    }

    /// Number of animals listed, shown in the animals table header.
    pub fn animal_total(&self) -> usize {
        self.animals.len()
    }

    /// Number of distinct species listed, shown in the species table header.
    pub fn species_total(&self) -> usize {
        self.species.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: animal with only the fields the sort cares about.
    fn animal(id: u32, name: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            species: "Dog".to_string(),
            age: 1,
        }
    }

    fn tally(species: &str, count: u32) -> SpeciesCount {
        SpeciesCount {
            species: species.to_string(),
            count,
        }
    }

    #[test]
    fn test_animals_sort_by_name() {
        let roster = Roster::new(
            vec![animal(1, "Rex"), animal(2, "Bella"), animal(3, "Miu")],
            vec![],
        );
        let names: Vec<&str> = roster.animals().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Bella", "Miu", "Rex"]);
    }

    #[test]
    fn test_animal_sort_ignores_case() {
        let roster = Roster::new(
            vec![animal(1, "bella"), animal(2, "Ace"), animal(3, "REX")],
            vec![],
        );
        let names: Vec<&str> = roster.animals().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ace", "bella", "REX"]);
    }

    #[test]
    fn test_equal_names_break_tie_by_id() {
        let roster = Roster::new(vec![animal(9, "Rex"), animal(3, "Rex")], vec![]);
        let ids: Vec<u32> = roster.animals().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn test_species_sort_by_descending_count() {
        let roster = Roster::new(
            vec![],
            vec![tally("Cat", 2), tally("Dog", 5), tally("Parrot", 1)],
        );
        let order: Vec<&str> = roster.species().iter().map(|s| s.species.as_str()).collect();
        assert_eq!(order, vec!["Dog", "Cat", "Parrot"]);
    }

    #[test]
    fn test_equal_counts_keep_server_order() {
        let roster = Roster::new(vec![], vec![tally("Cat", 3), tally("Dog", 3), tally("Emu", 3)]);
        let order: Vec<&str> = roster.species().iter().map(|s| s.species.as_str()).collect();
        assert_eq!(order, vec!["Cat", "Dog", "Emu"]);
    }

    #[test]
    fn test_totals_match_row_counts() {
        let roster = Roster::new(
            vec![animal(1, "Rex"), animal(2, "Bella")],
            vec![tally("Dog", 2)],
        );
        assert_eq!(roster.animal_total(), 2);
        assert_eq!(roster.species_total(), 1);
    }

    #[test]
    fn test_default_is_empty() {
        let roster = Roster::default();
        assert!(roster.animals().is_empty());
        assert!(roster.species().is_empty());
        assert_eq!(roster.animal_total(), 0);
    }
}
