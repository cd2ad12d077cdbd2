// [libs/infra/db-turso/src/repositories/mod.rs]
/*!
 * =================================================================
 * APARATO: REPOSITORY REGISTRY (V4.1 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: REGISTRO NOMINAL DE REPOSITORIOS DEL LEDGER
 * =================================================================
 */

/// Ledger de subastas vivas: upsert masivo, liveness y escaneo BIN.
pub mod auction_repository;
/// Historial de ventas: promoción, backfill y consultas del recomendador.
pub mod sale_repository;

pub use auction_repository::AuctionRepository;
pub use sale_repository::SaleRepository;
// FIN DEL ARCHIVO [libs/infra/db-turso/src/repositories/mod.rs]
