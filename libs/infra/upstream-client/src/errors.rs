// [libs/infra/upstream-client/src/errors.rs]
/*!
 * =================================================================
 * APARATO: FEED ERROR CATALOG (V3.0 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS DEL TÚNEL
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Fallo físico de red o de decodificación del cuerpo JSON.
    #[error("[L3_FEED_NET_FAULT]: UPLINK_SEVERED -> {0}")]
    Network(#[from] reqwest::Error),

    /// El proveedor respondió con estatus no exitoso.
    #[error("[L3_FEED_FAULT]: SERVER_REJECTION -> HTTP_{0}")]
    ServerRejection(u16),

    /// El sobre llegó con `success = false`.
    #[error("[L3_FEED_FAULT]: ENVELOPE_UNSUCCESSFUL -> page {0}")]
    EnvelopeUnsuccessful(i64),

    /// Presupuesto de reintentos agotado para una página.
    #[error("[L3_FEED_FAULT]: RETRY_BUDGET_EXHAUSTED -> page {page} after {attempts} attempts")]
    RetriesExhausted { page: i64, attempts: u32 },
}
// FIN DEL ARCHIVO [libs/infra/upstream-client/src/errors.rs]
