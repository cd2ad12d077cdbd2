// [libs/core/text-engine/src/lib.rs]
/*!
 * =================================================================
 * APARATO: TEXT ENGINE ROOT (V4.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: AUTORIDAD SUPREMA DE NORMALIZACIÓN TEXTUAL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DETERMINISM: Toda derivación textual es una función pura; el
 *    mismo nombre de ítem produce byte a byte la misma clave.
 * 2. NOMINAL SYMMETRY: Expone las cuatro familias de derivación
 *    (clean_text, norm_key, dígitos exóticos, clave canónica) como
 *    contratos independientes para los estratos C y F.
 * 3. HYGIENE: Vocabularios estáticos de solo lectura tras ignición.
 * =================================================================
 */

/// Canonicalización de identidad de ítems (reforjas, glifos, variantes).
pub mod canonical;
/// Mapa de dígitos exóticos Unicode hacia sus equivalentes ASCII.
pub mod digits;
/// Conjunto de glifos estelares y detectores de decoración.
pub mod glyphs;
/// Limpieza de escapes de color, plegado NFKC y claves normalizadas.
pub mod normalizer;
/// Decodificación de numerales romanos (I–XX) para niveles de encantamiento.
pub mod roman;

pub use crate::canonical::canonical_item_key;
pub use crate::digits::{contains_weird_digit, normalize_weird_digits, weird_digit_value};
pub use crate::glyphs::{contains_star_glyph, is_star_glyph, STAR_GLYPHS};
pub use crate::normalizer::{clean_text, norm_key, strip_color_codes};
pub use crate::roman::roman_to_int;

/**
 * PRELUDIO TEXTUAL
 *
 * Colección de derivaciones de alta frecuencia para inyección directa
 * en el constructor de firmas y el bucle de ingesta.
 */
pub mod prelude {
    pub use crate::canonical::canonical_item_key;
    pub use crate::digits::{contains_weird_digit, normalize_weird_digits};
    pub use crate::glyphs::{contains_star_glyph, is_star_glyph};
    pub use crate::normalizer::{clean_text, norm_key};
    pub use crate::roman::roman_to_int;
}
// FIN DEL ARCHIVO [libs/core/text-engine/src/lib.rs]
