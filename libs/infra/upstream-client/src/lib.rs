// [libs/infra/upstream-client/src/lib.rs]
/*!
 * =================================================================
 * APARATO: UPSTREAM FEED UPLINK ROOT (V3.1 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: TÚNEL DE CONSUMO DEL FEED PAGINADO DE SUBASTAS
 * =================================================================
 */

/// Cliente de página con reintentos y backoff incremental.
pub mod client;
/// Catálogo semántico de fallos del túnel de red.
pub mod errors;

pub use client::FeedClient;
pub use errors::FeedError;
// FIN DEL ARCHIVO [libs/infra/upstream-client/src/lib.rs]
