// INICIO DEL ARCHIVO [apps/orchestrator/src/handlers/catalog.rs]
/*!
 * =================================================================
 * APARATO: CATALOG GATEWAY HANDLER (V5.2 - MARKET GOLD)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: AUTOCOMPLETADO DE ÍTEMS, ENCANTAMIENTOS Y CATÁLOGOS
 *
 * VISION HIPER-HOLÍSTICA:
 * El autocompletado de ítems nace del historial real de ventas
 * (prefijo sobre claves canónicas); encantamientos y cosméticos
 * nacen de los catálogos operacionales estáticos.
 * =================================================================
 */

use crate::services::catalogs;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tasador_core_text::norm_key;
use tasador_infra_db::SaleRepository;
use tracing::{error, instrument};

/// Límite nominal y techo duro de resultados de autocompletado.
const DEFAULT_SUGGESTION_LIMIT: i64 = 20;
const MAX_SUGGESTION_LIMIT: i64 = 100;

/// Parámetros comunes de autocompletado con filtro por texto.
#[derive(Debug, Deserialize, Default)]
pub struct SuggestionQueryParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

impl SuggestionQueryParams {
    fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT).clamp(1, MAX_SUGGESTION_LIMIT)
    }
}

pub struct CatalogGatewayHandler;

impl CatalogGatewayHandler {
    /**
     * Búsqueda por prefijo sobre los ítems conocidos del historial.
     */
    #[instrument(skip(application_state, query_params), fields(q = %query_params.q))]
    pub async fn handle_items(
        State(application_state): State<AppState>,
        Query(query_params): Query<SuggestionQueryParams>,
    ) -> impl IntoResponse {
        let sale_repository = SaleRepository::new(application_state.database_client.clone());
        let key_prefix = norm_key(&query_params.q);

        match sale_repository.search_known_items(&key_prefix, query_params.effective_limit()).await
        {
            Ok(suggestions) => (StatusCode::OK, Json(json!({ "items": suggestions }))).into_response(),
            Err(database_fault) => {
                error!("❌ [ITEMS_FAULT]: Suggestion lookup collapsed: {}", database_fault);
                (StatusCode::INTERNAL_SERVER_ERROR, database_fault.to_string()).into_response()
            }
        }
    }

    /// Autocompletado de encantamientos "Nombre Nivel".
    pub async fn handle_enchants(
        Query(query_params): Query<SuggestionQueryParams>,
    ) -> impl IntoResponse {
        let suggestions =
            catalogs::enchant_suggestions(&query_params.q, query_params.effective_limit() as usize);
        (StatusCode::OK, Json(json!({ "items": suggestions })))
    }

    /// Catálogo operacional de tintes.
    pub async fn handle_dyes(Query(query_params): Query<SuggestionQueryParams>) -> impl IntoResponse {
        let entries =
            catalogs::dye_entries(&query_params.q, query_params.effective_limit() as usize);
        (StatusCode::OK, Json(json!({ "items": entries })))
    }

    /// Catálogo operacional de skins.
    pub async fn handle_skins(Query(query_params): Query<SuggestionQueryParams>) -> impl IntoResponse {
        let entries =
            catalogs::skin_entries(&query_params.q, query_params.effective_limit() as usize);
        (StatusCode::OK, Json(json!({ "items": entries })))
    }

    /// Catálogo operacional de skins de mascota.
    pub async fn handle_petskins(
        Query(query_params): Query<SuggestionQueryParams>,
    ) -> impl IntoResponse {
        let entries =
            catalogs::petskin_entries(&query_params.q, query_params.effective_limit() as usize);
        (StatusCode::OK, Json(json!({ "items": entries })))
    }

    /// Catálogo operacional de ítems sostenidos de mascota.
    pub async fn handle_petitems(
        Query(query_params): Query<SuggestionQueryParams>,
    ) -> impl IntoResponse {
        let entries =
            catalogs::petitem_entries(&query_params.q, query_params.effective_limit() as usize);
        (StatusCode::OK, Json(json!({ "items": entries })))
    }
}
// FIN DEL ARCHIVO [apps/orchestrator/src/handlers/catalog.rs]
