//! Breed Rating Value Object
//!
//! Per-breed rating on a 0-10 scale. This is a different scale from
//! prediction confidence (0-100 integer percent); the two are never
//! unified.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// Minimum breed rating
pub const MIN_BREED_RATING: i32 = 0;

/// Maximum breed rating
pub const MAX_BREED_RATING: i32 = 10;

/// A user's rating of one breed, 0-10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedRating {
    pub breed: String,
    pub rating: i32,
}

impl BreedRating {
    /// Check the 0-10 range and a non-empty breed label
    pub fn validate(&self) -> RegistryResult<()> {
        if self.breed.trim().is_empty() {
            return Err(RegistryError::Validation(
                "breedRatings entries need a breed label".to_string(),
            ));
        }
        if !(MIN_BREED_RATING..=MAX_BREED_RATING).contains(&self.rating) {
            return Err(RegistryError::Validation(format!(
                "breed rating must be between {} and {}",
                MIN_BREED_RATING, MAX_BREED_RATING
            )));
        }
        Ok(())
    }
}

/// Validate a whole list of ratings
pub fn validate_ratings(ratings: &[BreedRating]) -> RegistryResult<()> {
    for rating in ratings {
        rating.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_limits() {
        let ok = BreedRating {
            breed: "Gir".to_string(),
            rating: 10,
        };
        assert!(ok.validate().is_ok());

        let low = BreedRating {
            breed: "Gir".to_string(),
            rating: -1,
        };
        assert!(low.validate().is_err());

        let high = BreedRating {
            breed: "Gir".to_string(),
            rating: 11,
        };
        assert!(high.validate().is_err());
    }

    #[test]
    fn test_empty_breed_rejected() {
        let rating = BreedRating {
            breed: "  ".to_string(),
            rating: 5,
        };
        assert!(rating.validate().is_err());
    }
}
