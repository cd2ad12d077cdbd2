// INICIO DEL ARCHIVO [apps/orchestrator/src/services/recommender.rs]
/*!
 * =================================================================
 * APARATO: PRICE RECOMMENDATION ENGINE (V5.5 - MARKET GOLD)
 * CLASIFICACIÓN: QUERY SERVICE (ESTRATO L4)
 * RESPONSABILIDAD: RECOMENDACIÓN DE PRECIO SOBRE HISTORIAL + BIN VIVO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. POOL DISCIPLINE: Los veredictos del matcher gobiernan el pool de
 *    cada venta; la mediana viene del pool PERFECT y degrada al
 *    PARTIAL solo cuando el primero está vacío.
 * 2. STATISTICAL STABILITY: El rango retornado es percentil [15, 85],
 *    jamás min/max crudos; los extremos solo viajan en el top-3.
 * 3. BOUNDED REDERIVATION: Firmas ausentes se re-derivan en memoria
 *    durante la consulta, acotadas por el límite de 50 000 ventas.
 * =================================================================
 */

use crate::state::AppState;
use std::collections::BTreeMap;
use tasador_core_signature::{
    build_signature, heuristic_weight, match_signature, parse_signature, tier_bucket, tier_rank,
    MatchQuality, QueryFilters, SignatureInput, SignatureTokens,
};
use tasador_core_text::norm_key;
use tasador_domain_models::{
    EnchantEntry, LiveListing, RecommendationResponse, SaleRow, TopSaleEntry,
};
use tasador_domain_pricing::{rank_ordering, score_candidate, PoolSummary, RankableCandidate};
use tasador_infra_db::{AuctionRepository, DbError, SaleRepository};
use tracing::{debug, instrument};

use super::ingest::now_ms;

/// Techo de ventas históricas consideradas por consulta.
const SALES_FETCH_LIMIT: i64 = 50_000;

/// Ventana temporal del historial (120 días en ms).
const SALES_WINDOW_MS: i64 = 120 * 24 * 60 * 60 * 1_000;

/// Techo de BIN vivos escaneados por consulta.
const LIVE_SCAN_LIMIT: i64 = 6_000;

/// Cardinalidad del podio de ejemplares.
const TOP_EXEMPLAR_COUNT: usize = 3;

/// Mensaje estructurado de orientación ante consulta vacía/desconocida.
const PICK_AN_ITEM_NOTE: &str = "Pick an item from the suggestions to get an appraisal.";

/// Consulta de recomendación ya parseada y normalizada.
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    pub item_key: String,
    /// Total de estrellas solicitado [0,10]; 0 desactiva el requisito.
    pub stars10: i64,
    /// Encantamientos solicitados con claves ya canónicas.
    pub enchants: BTreeMap<String, i64>,
    pub filters: QueryFilters,
}

/// Venta histórica ya clasificada por el matcher.
struct ClassifiedCandidate {
    sale: SaleRow,
    tokens: SignatureTokens,
    quality: MatchQuality,
    score: i64,
}

pub struct RecommenderService {
    application_state: AppState,
}

impl RecommenderService {
    #[must_use]
    pub fn new(application_state: AppState) -> Self {
        Self { application_state }
    }

    /**
     * Responde la consulta de recomendación completa.
     *
     * # Errors:
     * Solo fallos de persistencia; una consulta vacía o desconocida
     * retorna la respuesta de orientación, nunca un error.
     */
    #[instrument(skip(self, request), fields(item_key = %request.item_key))]
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendationResponse, DbError> {
        let normalized_key = norm_key(&request.item_key);
        if normalized_key.is_empty() {
            return Ok(guidance_response());
        }

        let sale_repository = SaleRepository::new(self.application_state.database_client.clone());
        let history_horizon = now_ms() - SALES_WINDOW_MS;

        let recent_sales = sale_repository
            .query_recent_sales_by_item(&normalized_key, history_horizon, SALES_FETCH_LIMIT)
            .await?;

        if recent_sales.is_empty() {
            debug!("🔎 [RECOMMENDER]: Unknown or dormant item key [{}].", normalized_key);
            return Ok(guidance_response());
        }

        // --- CLASIFICACIÓN DEL HISTORIAL ---
        let mut perfect_prices: Vec<i64> = Vec::new();
        let mut partial_prices: Vec<i64> = Vec::new();
        let mut classified_candidates: Vec<ClassifiedCandidate> = Vec::new();

        for sale in recent_sales {
            if sale.final_price <= 0 {
                continue;
            }

            let signature = effective_sale_signature(&sale);
            let quality =
                match_signature(request.stars10, &request.enchants, &request.filters, &signature);

            match quality {
                MatchQuality::Perfect => perfect_prices.push(sale.final_price),
                MatchQuality::Partial => partial_prices.push(sale.final_price),
                MatchQuality::None => continue,
            }

            let tokens = parse_signature(&signature);
            let score = candidate_score(request, &tokens);
            classified_candidates.push(ClassifiedCandidate { sale, tokens, quality, score });
        }

        // --- ESTADÍSTICA DEL POOL ELEGIDO ---
        let chosen_pool =
            if perfect_prices.is_empty() { &partial_prices } else { &perfect_prices };
        let pool_summary = PoolSummary::from_pool(chosen_pool);

        // --- PODIO DE EJEMPLARES ---
        classified_candidates.sort_by(|first, second| {
            rank_ordering(&rankable_of(first), &rankable_of(second))
        });

        let top3: Vec<TopSaleEntry> = classified_candidates
            .iter()
            .take(TOP_EXEMPLAR_COUNT)
            .map(|candidate| top_sale_entry(request, candidate))
            .collect();

        // --- ESCANEO DE MEJOR BIN VIVO ---
        let live_best = self.scan_live_best(request, &normalized_key).await?;

        Ok(RecommendationResponse {
            recommended: pool_summary.median,
            range_low: pool_summary.range_low,
            range_high: pool_summary.range_high,
            range_count: pool_summary.count,
            top3,
            live: live_best,
            note: None,
        })
    }

    /**
     * Escanea los BIN vivos del ítem por puja ascendente y retorna el
     * primero que supera el matcher.
     */
    async fn scan_live_best(
        &self,
        request: &RecommendRequest,
        normalized_key: &str,
    ) -> Result<Option<LiveListing>, DbError> {
        let auction_repository =
            AuctionRepository::new(self.application_state.database_client.clone());

        let alive_horizon = now_ms() - self.application_state.config.alive_window_ms;
        let live_listings = auction_repository
            .query_live_bin_by_item(normalized_key, alive_horizon, LIVE_SCAN_LIMIT)
            .await?;

        for live_auction in live_listings {
            let signature = live_auction
                .signature
                .clone()
                .filter(|cached| !cached.trim().is_empty())
                .unwrap_or_else(|| {
                    build_signature(&SignatureInput {
                        item_name: &live_auction.item_name,
                        lore: live_auction.item_lore.as_deref().unwrap_or(""),
                        tier: live_auction.tier.as_deref().unwrap_or(""),
                        item_bytes: live_auction.item_bytes.as_deref().unwrap_or(""),
                    })
                });

            let quality =
                match_signature(request.stars10, &request.enchants, &request.filters, &signature);

            if quality != MatchQuality::None {
                return Ok(Some(LiveListing {
                    uuid: live_auction.uuid,
                    item_name: live_auction.item_name,
                    starting_bid: live_auction.starting_bid,
                    end_ts: live_auction.end_ts,
                }));
            }
        }

        Ok(None)
    }
}

/// Respuesta de orientación: agregados vacíos + mensaje estructurado.
fn guidance_response() -> RecommendationResponse {
    RecommendationResponse { note: Some(PICK_AN_ITEM_NOTE.to_string()), ..Default::default() }
}

/// Firma efectiva de una venta: cacheada o re-derivada en memoria.
fn effective_sale_signature(sale: &SaleRow) -> String {
    match &sale.signature {
        Some(cached) if !cached.trim().is_empty() => cached.clone(),
        _ => build_signature(&SignatureInput {
            item_name: &sale.item_name,
            lore: sale.item_lore.as_deref().unwrap_or(""),
            tier: sale.tier.as_deref().unwrap_or(""),
            item_bytes: sale.item_bytes.as_deref().unwrap_or(""),
        }),
    }
}

/// Puntaje de ranking del candidato contra la consulta.
fn candidate_score(request: &RecommendRequest, tokens: &SignatureTokens) -> i64 {
    let stars_distance = if request.stars10 > 0 {
        (tokens.stars10_or_zero() - request.stars10).abs()
    } else {
        0
    };

    let enchant_distances: Vec<i64> = request
        .enchants
        .iter()
        .map(|(enchant_name, requested_level)| {
            tasador_core_signature::enchant_distance(
                enchant_name,
                *requested_level,
                tokens.enchant_level(enchant_name),
            )
        })
        .collect();

    score_candidate(stars_distance, &enchant_distances)
}

fn rankable_of(candidate: &ClassifiedCandidate) -> RankableCandidate {
    RankableCandidate {
        score: candidate.score,
        ended_ts: candidate.sale.ended_ts,
        final_price: candidate.sale.final_price,
    }
}

/// Materializa un ejemplar del podio con sus listas de exhibición.
fn top_sale_entry(request: &RecommendRequest, candidate: &ClassifiedCandidate) -> TopSaleEntry {
    // Encantamientos solicitados presentes, por peso heurístico desc.
    let mut matched: Vec<EnchantEntry> = request
        .enchants
        .keys()
        .filter_map(|enchant_name| {
            let candidate_level = candidate.tokens.enchant_level(enchant_name);
            if candidate_level > 0 {
                Some(EnchantEntry { name: enchant_name.clone(), level: candidate_level })
            } else {
                None
            }
        })
        .collect();
    matched.sort_by(|first, second| {
        heuristic_weight(&second.name, second.level)
            .cmp(&heuristic_weight(&first.name, first.level))
            .then(first.name.cmp(&second.name))
    });

    // Inventario completo del candidato: bucket desc, nombre asc.
    let mut all_enchants: Vec<EnchantEntry> = candidate
        .tokens
        .enchants
        .iter()
        .map(|(name, level)| EnchantEntry { name: name.clone(), level: *level })
        .collect();
    all_enchants.sort_by(|first, second| {
        tier_rank(tier_bucket(&second.name, second.level))
            .cmp(&tier_rank(tier_bucket(&first.name, first.level)))
            .then(first.name.cmp(&second.name))
    });

    TopSaleEntry {
        uuid: candidate.sale.uuid.clone(),
        item_name: candidate.sale.item_name.clone(),
        final_price: candidate.sale.final_price,
        ended_ts: candidate.sale.ended_ts,
        tier: candidate.sale.tier.clone(),
        stars10: candidate.tokens.stars10_or_zero(),
        match_quality: match candidate.quality {
            MatchQuality::Perfect => "perfect".to_string(),
            MatchQuality::Partial => "partial".to_string(),
            MatchQuality::None => "none".to_string(),
        },
        score: candidate.score,
        matched,
        all_enchants,
    }
}
// FIN DEL ARCHIVO [apps/orchestrator/src/services/recommender.rs]
