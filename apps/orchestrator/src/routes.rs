// INICIO DEL ARCHIVO [apps/orchestrator/src/routes.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN ROUTING MATRIX (V5.2 - GATEWAY UNLOCKED)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: TOPOLOGÍA DE RED DEL GATEWAY DE MERCADO
 *
 * VISION HIPER-HOLÍSTICA:
 * Topología REST plana bajo /api: autocompletados, catálogos fijos,
 * la consulta núcleo de recomendación y la sonda de vida. El escudo
 * CORS permite el consumo desde el dashboard desplegado en otro
 * origen.
 * =================================================================
 */

use crate::handlers::{
    catalog::CatalogGatewayHandler, health::HealthProbeHandler, market::MarketQueryHandler,
};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub fn create_market_router(application_shared_state: AppState) -> Router {
    // Escudo de Red: permite CORS para el dashboard y herramientas de Ops.
    let network_security_shield = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    // ESTRATO DE CONSULTA: Autocompletados y catálogos operacionales.
    let catalog_stratum = Router::new()
        .route("/items", get(CatalogGatewayHandler::handle_items))
        .route("/enchants", get(CatalogGatewayHandler::handle_enchants))
        .route("/dyes", get(CatalogGatewayHandler::handle_dyes))
        .route("/skins", get(CatalogGatewayHandler::handle_skins))
        .route("/petskins", get(CatalogGatewayHandler::handle_petskins))
        .route("/petitems", get(CatalogGatewayHandler::handle_petitems));

    // COMPOSICIÓN GLOBAL (Root Topology)
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(catalog_stratum)
                // La consulta núcleo del tasador
                .route("/recommend", get(MarketQueryHandler::handle_recommend))
                // Sonda de vida para el balanceador
                .route("/health", get(HealthProbeHandler::handle_health)),
        )
        .layer(network_security_shield)
        .with_state(application_shared_state)
}
// FIN DEL ARCHIVO [apps/orchestrator/src/routes.rs]
