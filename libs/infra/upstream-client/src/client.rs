// INICIO DEL ARCHIVO [libs/infra/upstream-client/src/client.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN FEED UPLINK (V3.2 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: DESCARGA PAGINADA RESILIENTE DEL FEED DE SUBASTAS
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada página se negocia con un presupuesto de 4 intentos y backoff
 * incremental (250 + 350·i ms). Un fallo tras el presupuesto aborta
 * el ciclo de ingesta completo: un snapshot parcial jamás debe
 * interpretarse como "todo lo ausente terminó".
 * =================================================================
 */

use crate::errors::FeedError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tasador_domain_models::FeedEnvelope;
use tracing::{debug, instrument, warn};

/// Presupuesto de intentos por página.
const MAX_FETCH_ATTEMPTS: u32 = 4;

/// Backoff incremental entre intentos: base + incremento · intento.
const RETRY_BACKOFF_BASE_MS: u64 = 250;
const RETRY_BACKOFF_STEP_MS: u64 = 350;

/// Timeout implícito de cada negociación HTTP.
const REQUEST_TIMEOUT_SECONDS: u64 = 20;

pub struct FeedClient {
    network_session_client: Client,
    upstream_base_endpoint: String,
    upstream_api_key: String,
}

impl FeedClient {
    /**
     * Inicializa el túnel de red hacia el proveedor del feed.
     *
     * @param base_url Endpoint raíz del proveedor.
     * @param api_key Credencial de consulta; viaja como query param y
     *        jamás se vuelca en el rastro de telemetría.
     */
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            network_session_client: Client::builder()
                .user_agent("Tasador-Market-Mirror/V3.2-Gold")
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
                .build()
                .expect("FATAL: Feed client initialization failed."),
            upstream_base_endpoint: base_url.trim_end_matches('/').to_string(),
            upstream_api_key: api_key,
        }
    }

    /**
     * Descarga una página del feed con presupuesto de reintentos.
     *
     * # Errors:
     * - `RetriesExhausted`: presupuesto agotado; el ciclo debe abortar.
     * - `EnvelopeUnsuccessful`: el proveedor marcó la página como fallida.
     */
    #[instrument(skip(self), fields(page = page_number))]
    pub async fn fetch_page(&self, page_number: i64) -> Result<FeedEnvelope, FeedError> {
        let target_url = format!("{}/auctions", self.upstream_base_endpoint);

        for attempt_index in 0..MAX_FETCH_ATTEMPTS {
            if attempt_index > 0 {
                let backoff_ms =
                    RETRY_BACKOFF_BASE_MS + RETRY_BACKOFF_STEP_MS * u64::from(attempt_index);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            match self.execute_page_request(&target_url, page_number).await {
                Ok(envelope) => {
                    debug!(
                        auctions = envelope.auctions.len(),
                        total_pages = envelope.total_pages,
                        "📡 [FEED_UPLINK]: Page {} secured.",
                        page_number
                    );
                    return Ok(envelope);
                }
                Err(transient_fault) => {
                    warn!(
                        attempt = attempt_index + 1,
                        budget = MAX_FETCH_ATTEMPTS,
                        "🌩️ [FEED_RETRY]: Page {} negotiation failed: {}",
                        page_number,
                        transient_fault
                    );
                }
            }
        }

        Err(FeedError::RetriesExhausted { page: page_number, attempts: MAX_FETCH_ATTEMPTS })
    }

    /// Negociación individual de una página (un intento).
    async fn execute_page_request(
        &self,
        target_url: &str,
        page_number: i64,
    ) -> Result<FeedEnvelope, FeedError> {
        let network_response = self
            .network_session_client
            .get(target_url)
            .query(&[("page", page_number.to_string()), ("key", self.upstream_api_key.clone())])
            .send()
            .await?;

        if network_response.status() != StatusCode::OK {
            return Err(FeedError::ServerRejection(network_response.status().as_u16()));
        }

        let envelope = network_response.json::<FeedEnvelope>().await?;

        if !envelope.success {
            return Err(FeedError::EnvelopeUnsuccessful(page_number));
        }

        Ok(envelope)
    }
}
// FIN DEL ARCHIVO [libs/infra/upstream-client/src/client.rs]
