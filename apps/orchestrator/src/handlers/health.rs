// [apps/orchestrator/src/handlers/health.rs]
/*!
 * =================================================================
 * APARATO: HEALTH PROBE HANDLER (V5.1 - MARKET GOLD)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: SONDA DE VIDA DEL PROCESO Y DEL ENLACE TÁCTICO
 * =================================================================
 */

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub struct HealthProbeHandler;

impl HealthProbeHandler {
    /// Vida del proceso más alcanzabilidad del ledger.
    pub async fn handle_health(State(application_state): State<AppState>) -> impl IntoResponse {
        match application_state.database_client.get_connection() {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({
                    "ok": true,
                    "ingest_active": application_state.ingest_cycle_active()
                })),
            ),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "ok": false }))),
        }
    }
}
// FIN DEL ARCHIVO [apps/orchestrator/src/handlers/health.rs]
