//! Pet entity - pet profile registered under a user

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Species of a registered pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Animal {
    Dog,
    Cat,
    Etc,
}

impl Animal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "DOG",
            Self::Cat => "CAT",
            Self::Etc => "ETC",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Animal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOG" => Ok(Self::Dog),
            "CAT" => Ok(Self::Cat),
            "ETC" => Ok(Self::Etc),
            other => Err(DomainError::ValidationError(format!(
                "unknown animal: {other}"
            ))),
        }
    }
}

/// Sex of a registered pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
    Neutered,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Neutered => "NEUTERED",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "NEUTERED" => Ok(Self::Neutered),
            other => Err(DomainError::ValidationError(format!("unknown sex: {other}"))),
        }
    }
}

/// Pet profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub animal: Animal,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub weight_kg: Option<Decimal>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    /// Check if `user_id` owns this pet
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_round_trip() {
        for animal in [Animal::Dog, Animal::Cat, Animal::Etc] {
            assert_eq!(animal.as_str().parse::<Animal>().ok(), Some(animal));
        }
    }

    #[test]
    fn test_unknown_animal_rejected() {
        assert!("HAMSTER".parse::<Animal>().is_err());
    }

    #[test]
    fn test_sex_round_trip() {
        for sex in [Sex::Male, Sex::Female, Sex::Neutered] {
            assert_eq!(sex.as_str().parse::<Sex>().ok(), Some(sex));
        }
    }
}
