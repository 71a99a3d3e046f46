use axum::{
    extract::{Json, State},
    http::StatusCode,
};

use crate::{AppState, error::AppError};

use super::model::{CreatePokemonRequest, Pokemon};

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Pokemon>>, AppError> {
    let pokemon = Pokemon::all(state.store.as_ref()).await?;
    Ok(Json(pokemon))
}

#[axum::debug_handler]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<Pokemon>), AppError> {
    let pokemon = Pokemon::register(state.store.as_ref(), &state.pokeapi, &req.name).await?;
    Ok((StatusCode::CREATED, Json(pokemon)))
}
