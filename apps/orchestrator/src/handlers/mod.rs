// [apps/orchestrator/src/handlers/mod.rs]
/*!
 * =================================================================
 * APARATO: HANDLER REGISTRY (V5.1 - MARKET GOLD)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: REGISTRO NOMINAL DE ADAPTADORES DE ENTRADA HTTP
 * =================================================================
 */

/// Catálogos fijos y autocompletado de ítems/encantamientos.
pub mod catalog;
/// Sonda de vida del servicio y del enlace de persistencia.
pub mod health;
/// La consulta núcleo de recomendación de precio.
pub mod market;
// FIN DEL ARCHIVO [apps/orchestrator/src/handlers/mod.rs]
