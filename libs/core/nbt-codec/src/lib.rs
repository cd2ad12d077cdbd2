// [libs/core/nbt-codec/src/lib.rs]
/*!
 * =================================================================
 * APARATO: NBT CODEC ROOT (V3.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: DECODIFICACIÓN DEL ÁRBOL DE ATRIBUTOS DE ÍTEMS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TOLERANT CONTRACT: Los consumidores aguas abajo nunca conocen la
 *    forma exacta del árbol; los accesores absorben tipos inesperados
 *    y claves ausentes en un único punto.
 * 2. BOUNDED DECODE: Límites estrictos de inflado (8 MiB) y profundidad
 *    (64) previenen el agotamiento de memoria ante payloads hostiles.
 * 3. ZERO PANIC: Todo fallo de decodificación es un error semántico
 *    catalogado, jamás un pánico.
 * =================================================================
 */

/// Decodificación Base64 + gzip + parseo del árbol NBT.
pub mod decode;
/// Catálogo semántico de fallos de decodificación.
pub mod errors;
/// Árbol de valores laxo y accesores tolerantes.
pub mod value;

pub use crate::decode::{decode_payload, extra_attributes_from_base64, find_extra_attributes};
pub use crate::errors::NbtError;
pub use crate::value::NbtValue;

/**
 * PRELUDIO DEL CÓDEC
 *
 * Tipos de alta frecuencia para el constructor de firmas (Estrato C).
 */
pub mod prelude {
    pub use crate::decode::extra_attributes_from_base64;
    pub use crate::errors::NbtError;
    pub use crate::value::NbtValue;
}
// FIN DEL ARCHIVO [libs/core/nbt-codec/src/lib.rs]
