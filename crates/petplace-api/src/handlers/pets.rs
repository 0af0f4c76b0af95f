//! Pet profile handlers

use axum::{extract::State, Json};
use petplace_service::{CreatePetRequest, PetResponse, PetService, UpdatePetRequest};

use crate::extractors::{AuthUser, PetIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a pet under the current user
///
/// POST /pets
pub async fn create_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePetRequest>,
) -> ApiResult<Created<Json<PetResponse>>> {
    let service = PetService::new(state.service_context());
    let response = service.create_pet(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the current user's pets
///
/// GET /pets
pub async fn list_pets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PetResponse>>> {
    let service = PetService::new(state.service_context());
    let response = service.list_pets(auth.user_id).await?;
    Ok(Json(response))
}

/// Get a pet profile
///
/// GET /pets/{pet_id}
pub async fn get_pet(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: PetIdPath,
) -> ApiResult<Json<PetResponse>> {
    let service = PetService::new(state.service_context());
    let response = service.get_pet(path.pet_id).await?;
    Ok(Json(response))
}

/// Update a pet profile; owner only
///
/// PATCH /pets/{pet_id}
pub async fn update_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    path: PetIdPath,
    ValidatedJson(request): ValidatedJson<UpdatePetRequest>,
) -> ApiResult<Json<PetResponse>> {
    let service = PetService::new(state.service_context());
    let response = service.update_pet(auth.user_id, path.pet_id, request).await?;
    Ok(Json(response))
}

/// Delete a pet profile; owner only
///
/// DELETE /pets/{pet_id}
pub async fn delete_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    path: PetIdPath,
) -> ApiResult<NoContent> {
    let service = PetService::new(state.service_context());
    service.delete_pet(auth.user_id, path.pet_id).await?;
    Ok(NoContent)
}
