//! The add-animal form, held as raw text until submission.
//!
//! The three fields keep exactly what the user typed; validation only
//! happens when the form is submitted. A rejected form keeps its input so
//! the user can correct it, a successfully submitted one is cleared.

use crate::animal::NewAnimal;
use crate::error::FormError;

/// Raw values of the add-animal form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimalForm {
    pub name: String,
    pub species: String,
    pub age: String,
}

impl AnimalForm {
    /// Validate the typed values into a create payload.
    ///
    /// Whitespace-only name or species counts as missing, and the age must
    /// parse as a whole non-negative number. Any failure blocks submission
    /// client-side; no request is made for an invalid form.
    pub fn validate(&self) -> Result<NewAnimal, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let species = self.species.trim();
        if species.is_empty() {
            return Err(FormError::MissingSpecies);
        }

        let age = self.age.trim();
        if age.is_empty() {
            return Err(FormError::MissingAge);
        }
        let age: u32 = age.parse().map_err(|_| FormError::InvalidAge)?;

        Ok(NewAnimal {
            name: name.to_string(),
            species: species.to_string(),
            age,
        })
    }

    /// Reset every field, as after a successful create.
    pub fn clear(&mut self) {
        self.name.clear();
        self.species.clear();
        self.age.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a form filled with valid values.
    fn filled() -> AnimalForm {
        AnimalForm {
            name: "Bella".to_string(),
            species: "Dog".to_string(),
            age: "4".to_string(),
        }
    }

    // --- Accepting ---

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.name, "Bella");
        assert_eq!(payload.species, "Dog");
        assert_eq!(payload.age, 4);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = filled();
        form.name = "  Bella ".to_string();
        form.age = " 4 ".to_string();
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Bella");
        assert_eq!(payload.age, 4);
    }

    #[test]
    fn test_zero_age_is_allowed() {
        let mut form = filled();
        form.age = "0".to_string();
        assert_eq!(form.validate().unwrap().age, 0);
    }

    // --- Rejecting ---

    #[test]
    fn test_empty_name_blocks() {
        let mut form = filled();
        form.name = String::new();
        assert_eq!(form.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn test_whitespace_species_counts_as_missing() {
        let mut form = filled();
        form.species = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingSpecies));
    }

    #[test]
    fn test_empty_age_blocks() {
        let mut form = filled();
        form.age = String::new();
        assert_eq!(form.validate(), Err(FormError::MissingAge));
    }

    #[test]
    fn test_fractional_age_is_rejected() {
        let mut form = filled();
        form.age = "4.5".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidAge));
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let mut form = filled();
        form.age = "-2".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidAge));
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut form = filled();
        form.age = "old".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidAge));
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, AnimalForm::default());
    }
}
