// [apps/orchestrator/src/services/mod.rs]
/*!
 * =================================================================
 * APARATO: SERVICE REGISTRY (V5.1 - MARKET GOLD)
 * CLASIFICACIÓN: BACKGROUND INFRASTRUCTURE (ESTRATO L4)
 * RESPONSABILIDAD: REGISTRO NOMINAL DE DAEMONS Y MOTORES DE CONSULTA
 * =================================================================
 */

/// Catálogos operacionales fijos (tintes, skins, ítems de mascota).
pub mod catalogs;
/// Daemon de espejo del feed: snapshot, liveness, promoción, backfill.
pub mod ingest;
/// Motor de recomendación: historial, matcher, estadística y BIN vivo.
pub mod recommender;

pub use ingest::{CycleReport, IngestService};
pub use recommender::{RecommendRequest, RecommenderService};
// FIN DEL ARCHIVO [apps/orchestrator/src/services/mod.rs]
