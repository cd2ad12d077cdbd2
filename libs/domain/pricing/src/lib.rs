// [libs/domain/pricing/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PRICING STRATUM ROOT (V3.1 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: ESTADÍSTICA DE POOLS Y RANKING DE CANDIDATOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. STATISTICAL STABILITY: El rango retornado al usuario es el
 *    percentil [15, 85] del pool elegido, jamás min/max crudos; los
 *    extremos individuales solo aparecen en el top-3 de ejemplares.
 * 2. DETERMINISM: Percentil por rango más cercano sobre pool ordenado.
 * =================================================================
 */

/// Puntaje de penalización y comparador de ordenamiento del top-3.
pub mod scoring;
/// Mediana y percentiles por rango más cercano.
pub mod stats;

pub use crate::scoring::{rank_ordering, score_candidate, RankableCandidate};
pub use crate::stats::{median, percentile, PoolSummary};
// FIN DEL ARCHIVO [libs/domain/pricing/src/lib.rs]
