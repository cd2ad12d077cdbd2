// INICIO DEL ARCHIVO [apps/orchestrator/src/services/ingest.rs]
/*!
 * =================================================================
 * APARATO: MARKET MIRROR INGEST SERVICE (V5.4 - MARKET GOLD)
 * CLASIFICACIÓN: BACKGROUND INFRASTRUCTURE (ESTRATO L4)
 * RESPONSABILIDAD: ESPEJO CONTINUO DEL FEED Y MANTENIMIENTO DEL LEDGER
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DEAD-BY-ABSENCE: Tras un snapshot paginado COMPLETO, toda subasta
 *    no avistada dentro de la gracia se sella como terminada. Sin esta
 *    regla los ítems vendidos quedarían "vivos" para siempre y el
 *    escaneo de mejor BIN mentiría.
 * 2. ATOMIC PHASES: Upserts de página -> sellado de ausentes ->
 *    finalización de expiradas -> backfill. Cada fase espera a la
 *    anterior; un fallo de red aborta el ciclo sin escribir verdades
 *    parciales.
 * 3. CYCLE SOVEREIGNTY: La guardia booleana del AppState prohíbe el
 *    solapamiento del ciclo consigo mismo.
 *
 * # Mathematical Proof (Snapshot Authority):
 * El 'totalPages' de la página 0 es autoritativo para el ciclo entero;
 * una deriva del proveedor a mitad de ciclo no puede inducir un
 * snapshot inconsistente.
 * =================================================================
 */

use crate::state::AppState;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tasador_core_signature::{build_signature, wants_signature, SignatureInput};
use tasador_core_text::canonical_item_key;
use tasador_domain_models::{AuctionRow, FeedAuction, SaleRow};
use tasador_infra_db::{AuctionRepository, SaleRepository};
use tasador_infra_upstream::FeedClient;
use tracing::{error, info, instrument, warn};

/// Lote máximo de expiradas por iteración de finalización.
const FINALIZE_BATCH_LIMIT: i64 = 5_000;

/// Techo duro de iteraciones del bucle de finalización.
const FINALIZE_MAX_ITERATIONS: usize = 60;

/// Lote máximo del backfill de claves canónicas por ciclo.
const BACKFILL_BATCH_LIMIT: i64 = 20_000;

/// Granularidad del sueño entre ciclos (reacción al apagado).
const IDLE_SLICE_MS: u64 = 1_000;

/// Umbral de filas bajo el cual el fan-out paralelo no amortiza.
const PARALLEL_TRANSFORM_THRESHOLD: usize = 256;

/// Resumen operacional de un ciclo de ingesta.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleReport {
    pub pages_fetched: i64,
    pub rows_upserted: usize,
    pub unseen_sealed: u64,
    pub sales_promoted: usize,
    pub keys_backfilled: usize,
}

pub struct IngestService {
    application_state: AppState,
    feed_client: Arc<FeedClient>,
}

impl IngestService {
    #[must_use]
    pub fn new(application_state: AppState) -> Self {
        let feed_client = Arc::new(FeedClient::new(
            application_state.config.upstream_base_url.clone(),
            application_state.config.upstream_api_key.clone(),
        ));
        Self { application_state, feed_client }
    }

    /**
     * Lanza el daemon perpetuo de espejo en el runtime de Tokio.
     * Un ciclo cada INGEST_INTERVAL_MS, sin solapamiento, con drenaje
     * ordenado ante la bandera de apagado.
     */
    pub async fn spawn_ingest_daemon(self) {
        let cycle_interval = Duration::from_millis(self.application_state.config.ingest_interval_ms);

        tokio::spawn(async move {
            info!("🔄 [INGEST_DAEMON]: Market mirror daemon initiated.");

            loop {
                if self.application_state.is_shutdown_requested() {
                    info!("🔄 [INGEST_DAEMON]: Shutdown flag observed; daemon draining.");
                    break;
                }

                self.run_guarded_cycle().await;

                // Sueño fraccionado: el drenaje no espera el intervalo completo.
                let mut slept = Duration::ZERO;
                while slept < cycle_interval && !self.application_state.is_shutdown_requested() {
                    let slice = Duration::from_millis(IDLE_SLICE_MS).min(cycle_interval - slept);
                    tokio::time::sleep(slice).await;
                    slept += slice;
                }
            }
        });
    }

    /// Ejecuta un ciclo bajo la guardia de no-solapamiento.
    pub async fn run_guarded_cycle(&self) {
        if !self.application_state.try_begin_ingest_cycle() {
            warn!("⛔ [INGEST_GUARD]: Previous cycle still in flight; skipping tick.");
            return;
        }

        let cycle_outcome = self.execute_ingestion_cycle().await;
        self.application_state.end_ingest_cycle();

        match cycle_outcome {
            Ok(report) => info!(
                pages = report.pages_fetched,
                upserted = report.rows_upserted,
                sealed = report.unseen_sealed,
                promoted = report.sales_promoted,
                backfilled = report.keys_backfilled,
                "✅ [INGEST_CYCLE]: Snapshot mirrored and ledger maintained."
            ),
            Err(cycle_fault) => error!(
                "❌ [INGEST_CYCLE]: Cycle aborted, nothing partial written: {}",
                cycle_fault
            ),
        }
    }

    /**
     * Un ciclo completo: snapshot paginado -> sellado de ausentes ->
     * finalización de expiradas -> backfill de claves.
     *
     * # Errors:
     * Cualquier fallo de red tras el presupuesto de reintentos aborta
     * el ciclo entero; el siguiente ciclo reintenta desde cero.
     */
    #[instrument(skip(self))]
    pub async fn execute_ingestion_cycle(&self) -> Result<CycleReport> {
        let auction_repository =
            AuctionRepository::new(self.application_state.database_client.clone());
        let sale_repository = SaleRepository::new(self.application_state.database_client.clone());

        let mut report = CycleReport::default();

        // --- FASE 1: SNAPSHOT PAGINADO COMPLETO ---
        let first_page = self.feed_client.fetch_page(0).await?;
        let authoritative_total_pages =
            first_page.total_pages.clamp(1, self.application_state.config.max_pages);

        report.rows_upserted +=
            self.process_snapshot_page(&auction_repository, first_page.auctions).await?;
        report.pages_fetched = 1;

        let inter_page_delay =
            Duration::from_millis(self.application_state.config.inter_page_delay_ms);

        for page_number in 1..authoritative_total_pages {
            tokio::time::sleep(inter_page_delay).await;

            let page_envelope = self.feed_client.fetch_page(page_number).await?;
            report.rows_upserted +=
                self.process_snapshot_page(&auction_repository, page_envelope.auctions).await?;
            report.pages_fetched += 1;
        }

        // --- FASE 2: SELLADO DE AUSENTES (verdad de vida) ---
        // Solo tras un snapshot COMPLETO; la ausencia es la prueba de muerte.
        let liveness_horizon = now_ms() - self.application_state.config.unseen_grace_ms;
        report.unseen_sealed = auction_repository.mark_unseen_ended(liveness_horizon).await?;

        // --- FASE 3: PROMOCIÓN DE EXPIRADAS A HISTORIAL ---
        report.sales_promoted =
            self.run_finalize_loop(&auction_repository, &sale_repository).await?;

        // --- FASE 4: BACKFILL DE CLAVES CANÓNICAS VETERANAS ---
        report.keys_backfilled = self.run_item_key_backfill(&sale_repository).await?;

        Ok(report)
    }

    /// Transforma y persiste una página del snapshot en ráfaga única.
    async fn process_snapshot_page(
        &self,
        auction_repository: &AuctionRepository,
        raw_auctions: Vec<FeedAuction>,
    ) -> Result<usize> {
        let sighting_ts = now_ms();
        let transformed_rows = self.transform_with_bounded_fanout(raw_auctions, sighting_ts).await;
        Ok(auction_repository.bulk_upsert_auctions(&transformed_rows).await?)
    }

    /**
     * Fan-out acotado para la construcción de firmas de una página.
     * La derivación es CPU-pura; páginas grandes se reparten entre
     * tareas bloqueantes y se re-unen ANTES del upsert (barrera de fase).
     */
    async fn transform_with_bounded_fanout(
        &self,
        raw_auctions: Vec<FeedAuction>,
        sighting_ts: i64,
    ) -> Vec<AuctionRow> {
        let fan_out_width = num_cpus::get().saturating_sub(1).max(1);

        if raw_auctions.len() < PARALLEL_TRANSFORM_THRESHOLD || fan_out_width == 1 {
            return transform_snapshot_page(&raw_auctions, sighting_ts);
        }

        let chunk_size = raw_auctions.len().div_ceil(fan_out_width);
        let transform_tasks: Vec<_> = raw_auctions
            .chunks(chunk_size)
            .map(|chunk| {
                let owned_chunk: Vec<FeedAuction> = chunk.to_vec();
                tokio::task::spawn_blocking(move || {
                    transform_snapshot_page(&owned_chunk, sighting_ts)
                })
            })
            .collect();

        let execution_results = futures::future::join_all(transform_tasks).await;

        let mut transformed_rows = Vec::new();
        for chunk_result in execution_results {
            match chunk_result {
                Ok(chunk_rows) => transformed_rows.extend(chunk_rows),
                Err(join_fault) => {
                    // Un pánico en la transformación pierde su chunk, no el ciclo.
                    error!("🧬 [TRANSFORM_FAULT]: Page chunk lost: {}", join_fault);
                }
            }
        }
        transformed_rows
    }

    /**
     * Bucle de finalización: selecciona expiradas pendientes, las
     * promueve a ventas y sella su origen, hasta drenar o alcanzar el
     * techo de iteraciones.
     */
    async fn run_finalize_loop(
        &self,
        auction_repository: &AuctionRepository,
        sale_repository: &SaleRepository,
    ) -> Result<usize> {
        let mut total_promoted = 0usize;

        for _iteration in 0..FINALIZE_MAX_ITERATIONS {
            let expired_batch = auction_repository
                .select_ended_to_finalize(now_ms(), FINALIZE_BATCH_LIMIT)
                .await?;

            if expired_batch.is_empty() {
                break;
            }

            let promoted_sales: Vec<SaleRow> =
                expired_batch.iter().map(promote_to_sale).collect();

            total_promoted += sale_repository.finalize_batch(&promoted_sales).await?;
        }

        Ok(total_promoted)
    }

    /// Nivela por lotes las claves canónicas de ventas veteranas.
    async fn run_item_key_backfill(&self, sale_repository: &SaleRepository) -> Result<usize> {
        let pending_sales =
            sale_repository.select_sales_missing_item_key(BACKFILL_BATCH_LIMIT).await?;
        let backfilled_count = pending_sales.len();

        for (sale_uuid, stored_name) in pending_sales {
            let recomputed_key = canonical_item_key(&stored_name);
            sale_repository.update_sale_item_key(&sale_uuid, &recomputed_key).await?;
        }

        if backfilled_count > 0 {
            info!("🔧 [BACKFILL]: Leveled {} veteran sales with canonical keys.", backfilled_count);
        }
        Ok(backfilled_count)
    }
}

/**
 * Transformación pura de una página del feed hacia filas del ledger.
 * Expuesta a nivel de crate para su certificación directa.
 */
#[must_use]
pub fn transform_snapshot_page(raw_auctions: &[FeedAuction], sighting_ts: i64) -> Vec<AuctionRow> {
    raw_auctions
        .iter()
        .filter_map(|raw_auction| transform_feed_auction(raw_auction, sighting_ts))
        .collect()
}

/**
 * Transforma una subasta cruda del feed en fila del ledger.
 *
 * La firma se construye solo cuando el predicado de ingesta lo
 * amerita; una firma vacía persiste como NULL.
 */
#[must_use]
pub fn transform_feed_auction(raw_auction: &FeedAuction, sighting_ts: i64) -> Option<AuctionRow> {
    if raw_auction.uuid.trim().is_empty() {
        return None;
    }

    let lore = raw_auction.item_lore.as_deref().unwrap_or("");
    let item_bytes = raw_auction.item_bytes.as_deref().unwrap_or("");
    let tier = raw_auction.tier.as_deref().unwrap_or("");

    let signature = if wants_signature(raw_auction.bin, &raw_auction.item_name, lore, item_bytes) {
        let built = build_signature(&SignatureInput {
            item_name: &raw_auction.item_name,
            lore,
            tier,
            item_bytes,
        });
        if built.is_empty() { None } else { Some(built) }
    } else {
        None
    };

    Some(AuctionRow {
        uuid: raw_auction.uuid.clone(),
        item_name: raw_auction.item_name.clone(),
        item_key: canonical_item_key(&raw_auction.item_name),
        bin: raw_auction.bin,
        start_ts: raw_auction.start,
        end_ts: raw_auction.end,
        starting_bid: raw_auction.starting_bid.max(0),
        highest_bid: raw_auction.highest_bid.max(0),
        tier: raw_auction.tier.clone(),
        item_lore: raw_auction.item_lore.clone(),
        item_bytes: raw_auction.item_bytes.clone(),
        last_seen_ts: sighting_ts,
        signature,
        is_ended: false,
    })
}

/**
 * Promueve una subasta expirada a fila de venta, re-derivando la firma
 * desde el material almacenado cuando la cacheada está vacía.
 */
#[must_use]
pub fn promote_to_sale(expired_auction: &AuctionRow) -> SaleRow {
    let cached_signature = expired_auction
        .signature
        .clone()
        .filter(|signature| !signature.trim().is_empty());

    let signature = cached_signature.or_else(|| {
        let lore = expired_auction.item_lore.as_deref().unwrap_or("");
        let item_bytes = expired_auction.item_bytes.as_deref().unwrap_or("");
        if lore.trim().is_empty() && item_bytes.trim().is_empty() {
            return None;
        }

        let rederived = build_signature(&SignatureInput {
            item_name: &expired_auction.item_name,
            lore,
            tier: expired_auction.tier.as_deref().unwrap_or(""),
            item_bytes,
        });
        if rederived.is_empty() { None } else { Some(rederived) }
    });

    let item_key = if expired_auction.item_key.trim().is_empty() {
        canonical_item_key(&expired_auction.item_name)
    } else {
        expired_auction.item_key.clone()
    };

    SaleRow {
        uuid: expired_auction.uuid.clone(),
        item_name: expired_auction.item_name.clone(),
        item_key,
        bin: expired_auction.bin,
        final_price: expired_auction.effective_final_price().max(0),
        ended_ts: expired_auction.end_ts,
        tier: expired_auction.tier.clone(),
        signature,
        item_lore: expired_auction.item_lore.clone(),
        item_bytes: expired_auction.item_bytes.clone(),
    }
}

/// Marca temporal actual en milisegundos desde época.
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
// FIN DEL ARCHIVO [apps/orchestrator/src/services/ingest.rs]
