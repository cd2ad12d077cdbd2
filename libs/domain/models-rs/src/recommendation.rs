// [libs/domain/models-rs/src/recommendation.rs]
/*!
 * =================================================================
 * APARATO: RECOMMENDATION CONTRACTS (V4.2 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: DTOs DE RESPUESTA HACIA EL DASHBOARD DE MERCADO
 *
 * VISION HIPER-HOLÍSTICA:
 * La respuesta de recomendación combina la mediana del pool elegido,
 * el rango percentil [15, 85], los tres mejores ejemplares históricos
 * y el BIN vivo más barato que supera el matcher. Typeshare garantiza
 * la paridad del contrato con el frontend.
 * =================================================================
 */

use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Par (encantamiento canónico, nivel) de exhibición.
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnchantEntry {
    pub name: String,
    #[typeshare(serialized_as = "number")]
    pub level: i64,
}

/// Ejemplar histórico del top-3 de la recomendación.
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSaleEntry {
    pub uuid: String,
    pub item_name: String,
    #[typeshare(serialized_as = "number")]
    pub final_price: i64,
    #[typeshare(serialized_as = "number")]
    pub ended_ts: i64,
    pub tier: Option<String>,
    #[typeshare(serialized_as = "number")]
    pub stars10: i64,
    /// Calidad del veredicto del matcher ("perfect" | "partial").
    pub match_quality: String,
    /// Puntaje de ranking en [0, 10]; menor penalización = mayor puntaje.
    #[typeshare(serialized_as = "number")]
    pub score: i64,
    /// Encantamientos solicitados presentes, por peso heurístico.
    pub matched: Vec<EnchantEntry>,
    /// Inventario completo del candidato, por bucket desc y nombre asc.
    pub all_enchants: Vec<EnchantEntry>,
}

/// BIN vivo más barato que satisface la consulta.
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveListing {
    pub uuid: String,
    pub item_name: String,
    #[typeshare(serialized_as = "number")]
    pub starting_bid: i64,
    #[typeshare(serialized_as = "number")]
    pub end_ts: i64,
}

/// Respuesta completa de la consulta de recomendación.
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecommendationResponse {
    /// Mediana del pool elegido; ausente sin historial utilizable.
    #[typeshare(serialized_as = "number")]
    pub recommended: Option<i64>,
    #[typeshare(serialized_as = "number")]
    pub range_low: Option<i64>,
    #[typeshare(serialized_as = "number")]
    pub range_high: Option<i64>,
    #[typeshare(serialized_as = "number")]
    pub range_count: i64,
    pub top3: Vec<TopSaleEntry>,
    pub live: Option<LiveListing>,
    /// Mensaje estructurado de orientación (consulta vacía/desconocida).
    pub note: Option<String>,
}

/// Entrada de catálogo fijo (tintes, skins, ítems de mascota).
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: String,
    pub key: String,
}

/// Sugerencia del autocompletado de ítems conocidos.
#[typeshare]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSuggestion {
    pub key: String,
    pub label: String,
}
// FIN DEL ARCHIVO [libs/domain/models-rs/src/recommendation.rs]
