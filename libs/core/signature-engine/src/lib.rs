// [libs/core/signature-engine/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SIGNATURE ENGINE ROOT (V6.4 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1/L2)
 * RESPONSABILIDAD: HUELLA DE CONTENIDO DETERMINISTA DE CADA LISTADO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CONTENT FINGERPRINT: La firma es una huella de contenido, no una
 *    forma comprimida; permite expresar estadísticas de precio y
 *    comparaciones de filtros como operaciones sobre una columna de
 *    texto indexada sin re-parsear payloads binarios.
 * 2. DETERMINISM: Mismas entradas -> salida idéntica byte a byte. Los
 *    tokens de encantamiento se ordenan lexicográficamente.
 * 3. RESERVED NAMESPACE: Las claves reservadas de la firma jamás deben
 *    colisionar con nombres de encantamiento; ante una colisión
 *    upstream futura se renombra el encantamiento, nunca la clave.
 * =================================================================
 */

/// Construcción de la firma desde nombre, lore, tier y payload binario.
pub mod builder;
/// Normalización de encantamientos y tabla estática de buckets de tier.
pub mod enchants;
/// Matcher de tres estados sobre firmas almacenadas.
pub mod matcher;
/// Resolución de estrellas (dungeon/master) y parseo textual.
pub mod stars;
/// Emisión, parseo y fusión del formato de tokens.
pub mod tokens;

pub use crate::builder::{build_signature, compact_key, wants_signature, SignatureInput};
pub use crate::enchants::{
    collect_enchantments, enchant_distance, heuristic_weight, normalize_enchant_key, tier_bucket,
    tier_rank, EnchantTier,
};
pub use crate::matcher::{match_signature, MatchQuality, QueryFilters};
pub use crate::stars::stars10_from_text;
pub use crate::tokens::{merge_signatures, parse_signature, SignatureTokens, RESERVED_KEYS};

/**
 * PRELUDIO DE FIRMAS
 *
 * Contratos de alta frecuencia para el bucle de ingesta (Estrato F)
 * y el recomendador (Estrato E).
 */
pub mod prelude {
    pub use crate::builder::{build_signature, wants_signature, SignatureInput};
    pub use crate::matcher::{match_signature, MatchQuality, QueryFilters};
    pub use crate::tokens::{merge_signatures, parse_signature, SignatureTokens};
}
// FIN DEL ARCHIVO [libs/core/signature-engine/src/lib.rs]
