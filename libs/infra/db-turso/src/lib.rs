// [libs/infra/db-turso/src/lib.rs]
/*!
 * =================================================================
 * APARATO: TACTICAL PERSISTENCE ROOT (V4.3 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: EXPOSICIÓN DEL LEDGER DE MERCADO (MOTOR A)
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SINGLE HANDLE: El cliente libSQL es el único recurso compartido
 *    del sistema; cada repositorio adquiere conexiones de él.
 * 2. TRANSACTIONAL BURSTS: Las dos operaciones multi-fila (upsert
 *    masivo y finalización de expiradas) viajan en transacción única.
 * 3. IDEMPOTENT SCHEMA: El bootstrap estructural puede re-ejecutarse
 *    en caliente sin efectos colaterales.
 * =================================================================
 */

/// Cliente de conexión con ancla de memoria para entornos de prueba.
pub mod client;
/// Catálogo semántico de fallos de persistencia.
pub mod errors;
/// Repositorios tipados del ledger (subastas y ventas).
pub mod repositories;
/// Bootstrap estructural idempotente en tres estratos.
pub mod schema;

pub use client::TursoClient;
pub use errors::DbError;
pub use repositories::{AuctionRepository, SaleRepository};
// FIN DEL ARCHIVO [libs/infra/db-turso/src/lib.rs]
