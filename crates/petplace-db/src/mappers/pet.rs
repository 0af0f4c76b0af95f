//! Pet model -> entity mapper

use petplace_core::entities::Pet;
use petplace_core::error::DomainError;

use crate::models::PetModel;

impl TryFrom<PetModel> for Pet {
    type Error = DomainError;

    fn try_from(model: PetModel) -> Result<Self, Self::Error> {
        Ok(Pet {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            animal: model.animal.parse()?,
            breed: model.breed,
            sex: model.sex.parse()?,
            birth_date: model.birth_date,
            weight_kg: model.weight_kg,
            profile_image: model.profile_image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use petplace_core::entities::{Animal, Sex};

    use super::*;

    #[test]
    fn test_pet_model_parses_enums() {
        let now = Utc::now();
        let model = PetModel {
            id: 1,
            user_id: 2,
            name: "Mong".to_string(),
            animal: "DOG".to_string(),
            breed: Some("Maltese".to_string()),
            sex: "MALE".to_string(),
            birth_date: None,
            weight_kg: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        };

        let pet = Pet::try_from(model).unwrap();
        assert_eq!(pet.animal, Animal::Dog);
        assert_eq!(pet.sex, Sex::Male);
    }

    #[test]
    fn test_pet_model_rejects_bad_enum() {
        let now = Utc::now();
        let model = PetModel {
            id: 1,
            user_id: 2,
            name: "Mong".to_string(),
            animal: "FISH".to_string(),
            breed: None,
            sex: "MALE".to_string(),
            birth_date: None,
            weight_kg: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        };

        assert!(Pet::try_from(model).is_err());
    }
}
