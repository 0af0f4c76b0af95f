//! Pet profile service

use std::str::FromStr;

use tracing::{info, instrument};

use petplace_core::entities::{Animal, Sex};
use petplace_core::traits::{NewPet, PetUpdate};
use petplace_core::DomainError;

use crate::dto::{CreatePetRequest, PetResponse, UpdatePetRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Pet profile service
pub struct PetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PetService<'a> {
    /// Create a new PetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a pet under the authenticated user
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_pet(
        &self,
        user_id: i64,
        request: CreatePetRequest,
    ) -> ServiceResult<PetResponse> {
        let animal = Animal::from_str(&request.animal)?;
        let sex = Sex::from_str(&request.sex)?;

        let pet = self
            .ctx
            .pet_repo()
            .create(&NewPet {
                user_id,
                name: request.name,
                animal,
                breed: request.breed,
                sex,
                birth_date: request.birth_date,
                weight_kg: request.weight_kg,
                profile_image: request.profile_image,
            })
            .await?;

        info!(user_id, pet_id = pet.id, "Pet registered");
        Ok(PetResponse::from(pet))
    }

    /// List the authenticated user's pets
    #[instrument(skip(self))]
    pub async fn list_pets(&self, user_id: i64) -> ServiceResult<Vec<PetResponse>> {
        let pets = self.ctx.pet_repo().list_by_user(user_id).await?;
        Ok(pets.into_iter().map(PetResponse::from).collect())
    }

    /// Get a pet profile
    #[instrument(skip(self))]
    pub async fn get_pet(&self, pet_id: i64) -> ServiceResult<PetResponse> {
        let pet = self
            .ctx
            .pet_repo()
            .find_by_id(pet_id)
            .await?
            .ok_or(DomainError::PetNotFound(pet_id))?;

        Ok(PetResponse::from(pet))
    }

    /// Update a pet; only the owner may do this
    #[instrument(skip(self, request))]
    pub async fn update_pet(
        &self,
        user_id: i64,
        pet_id: i64,
        request: UpdatePetRequest,
    ) -> ServiceResult<PetResponse> {
        self.check_ownership(user_id, pet_id).await?;

        let sex = request.sex.as_deref().map(Sex::from_str).transpose()?;

        let pet = self
            .ctx
            .pet_repo()
            .update(
                pet_id,
                &PetUpdate {
                    name: request.name,
                    breed: request.breed,
                    sex,
                    birth_date: request.birth_date,
                    weight_kg: request.weight_kg,
                    profile_image: request.profile_image,
                },
            )
            .await?;

        info!(user_id, pet_id, "Pet updated");
        Ok(PetResponse::from(pet))
    }

    /// Delete a pet; only the owner may do this
    #[instrument(skip(self))]
    pub async fn delete_pet(&self, user_id: i64, pet_id: i64) -> ServiceResult<()> {
        self.check_ownership(user_id, pet_id).await?;
        self.ctx.pet_repo().delete(pet_id).await?;

        info!(user_id, pet_id, "Pet deleted");
        Ok(())
    }

    async fn check_ownership(&self, user_id: i64, pet_id: i64) -> ServiceResult<()> {
        let pet = self
            .ctx
            .pet_repo()
            .find_by_id(pet_id)
            .await?
            .ok_or(DomainError::PetNotFound(pet_id))?;

        if !pet.is_owned_by(user_id) {
            return Err(DomainError::NotResourceOwner.into());
        }
        Ok(())
    }
}
