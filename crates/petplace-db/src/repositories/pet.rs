//! PostgreSQL implementation of PetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use petplace_core::entities::Pet;
use petplace_core::error::DomainError;
use petplace_core::traits::{NewPet, PetRepository, PetUpdate, RepoResult};

use crate::models::PetModel;

use super::error::{map_db_error, map_unique_violation, pet_not_found};

const PET_COLUMNS: &str = "id, user_id, name, animal, breed, sex, birth_date, weight_kg, \
                           profile_image, created_at, updated_at";

/// PostgreSQL implementation of PetRepository
#[derive(Clone)]
pub struct PgPetRepository {
    pool: PgPool,
}

impl PgPetRepository {
    /// Create a new PgPetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Pet>> {
        let result = sqlx::query_as::<_, PetModel>(&format!(
            "SELECT {PET_COLUMNS} FROM pets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Pet::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: i64) -> RepoResult<Vec<Pet>> {
        let models = sqlx::query_as::<_, PetModel>(&format!(
            "SELECT {PET_COLUMNS} FROM pets WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Pet::try_from).collect()
    }

    #[instrument(skip(self, new_pet))]
    async fn create(&self, new_pet: &NewPet) -> RepoResult<Pet> {
        let model = sqlx::query_as::<_, PetModel>(&format!(
            r"
            INSERT INTO pets (user_id, name, animal, breed, sex, birth_date, weight_kg, profile_image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PET_COLUMNS}
            "
        ))
        .bind(new_pet.user_id)
        .bind(&new_pet.name)
        .bind(new_pet.animal.as_str())
        .bind(&new_pet.breed)
        .bind(new_pet.sex.as_str())
        .bind(new_pet.birth_date)
        .bind(new_pet.weight_kg)
        .bind(&new_pet.profile_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePetName))?;

        Pet::try_from(model)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: i64, update: &PetUpdate) -> RepoResult<Pet> {
        let model = sqlx::query_as::<_, PetModel>(&format!(
            r"
            UPDATE pets
            SET name = COALESCE($2, name),
                breed = COALESCE($3, breed),
                sex = COALESCE($4, sex),
                birth_date = COALESCE($5, birth_date),
                weight_kg = COALESCE($6, weight_kg),
                profile_image = COALESCE($7, profile_image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PET_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.breed)
        .bind(update.sex.map(|s| s.as_str()))
        .bind(update.birth_date)
        .bind(update.weight_kg)
        .bind(&update.profile_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePetName))?;

        match model {
            Some(model) => Pet::try_from(model),
            None => Err(pet_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(pet_not_found(id));
        }

        Ok(())
    }
}
