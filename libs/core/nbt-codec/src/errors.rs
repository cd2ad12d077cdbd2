// [libs/core/nbt-codec/src/errors.rs]
/*!
 * =================================================================
 * APARATO: NBT ERROR CATALOG (V3.0 - MARKET GOLD)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS DE DECODIFICACIÓN
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NbtError {
    /// El payload no es Base64 válido.
    #[error("[L1_NBT_TRANSPORT_FAULT]: BASE64_REJECTED -> {0}")]
    Base64Malformed(String),

    /// El flujo binario terminó antes de completar el escalar esperado.
    #[error("[L1_NBT_STREAM_FAULT]: TRUNCATED_PAYLOAD")]
    Truncated,

    /// Identificador de tag fuera del rango 0..=12 del protocolo.
    #[error("[L1_NBT_STREAM_FAULT]: UNKNOWN_TAG_ID -> {0}")]
    UnknownTag(u8),

    /// El árbol excede la profundidad máxima autorizada.
    #[error("[L1_NBT_LIMIT_FAULT]: DEPTH_CAP_EXCEEDED")]
    DepthExceeded,

    /// Una lista o arreglo declara una cardinalidad absurda.
    #[error("[L1_NBT_LIMIT_FAULT]: LENGTH_REJECTED -> {0}")]
    LengthRejected(i64),

    /// El payload inflado supera el techo de memoria autorizado.
    #[error("[L1_NBT_LIMIT_FAULT]: INFLATED_PAYLOAD_OVERFLOW")]
    InflatedTooLarge,
}
// FIN DEL ARCHIVO [libs/core/nbt-codec/src/errors.rs]
