// INICIO DEL ARCHIVO [apps/orchestrator/src/handlers/market.rs]
/*!
 * =================================================================
 * APARATO: MARKET QUERY HANDLER (V5.4 - MARKET GOLD)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L3)
 * RESPONSABILIDAD: PARSEO DE LA CONSULTA NÚCLEO Y DESPACHO AL MOTOR
 *
 * VISION HIPER-HOLÍSTICA:
 * Los parámetros de consulta llegan hostiles desde la UI: estrellas
 * fuera de rango se recortan en silencio, niveles romanos (I–XX) se
 * decodifican, filtros desconocidos degradan a "none". El handler
 * jamás colapsa el proceso: todo fallo de persistencia es un 500
 * estructurado.
 * =================================================================
 */

use crate::services::{RecommendRequest, RecommenderService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use tasador_core_signature::{compact_key, normalize_enchant_key, QueryFilters};
use tasador_core_text::{norm_key, roman_to_int};
use tracing::{error, instrument};

/// Rango legal del requisito de estrellas.
const STARS10_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

/// Rango legal del nivel mínimo de mascota.
const PET_LEVEL_RANGE: std::ops::RangeInclusive<i64> = 0..=200;

/// Rango legal de un nivel de encantamiento solicitado.
const ENCHANT_LEVEL_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

/// Parámetros crudos de la consulta de recomendación.
#[derive(Debug, Deserialize, Default)]
pub struct RecommendQueryParams {
    #[serde(default)]
    pub item_key: String,
    pub stars10: Option<String>,
    pub enchants: Option<String>,
    pub wi: Option<String>,
    pub rarity: Option<String>,
    pub dye: Option<String>,
    pub skin: Option<String>,
    pub petskin: Option<String>,
    pub petlvl: Option<String>,
    pub petitem: Option<String>,
}

pub struct MarketQueryHandler;

impl MarketQueryHandler {
    /**
     * Despacha la consulta núcleo `/api/recommend`.
     */
    #[instrument(skip(application_state, query_params), fields(item = %query_params.item_key))]
    pub async fn handle_recommend(
        State(application_state): State<AppState>,
        Query(query_params): Query<RecommendQueryParams>,
    ) -> impl IntoResponse {
        let request = recommend_request_from_params(&query_params);
        let recommender = RecommenderService::new(application_state);

        match recommender.recommend(&request).await {
            Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
            Err(database_fault) => {
                error!("❌ [RECOMMEND_FAULT]: Query collapsed: {}", database_fault);
                (StatusCode::INTERNAL_SERVER_ERROR, database_fault.to_string()).into_response()
            }
        }
    }
}

/// Niveliza los parámetros crudos hacia la consulta normalizada.
#[must_use]
pub fn recommend_request_from_params(params: &RecommendQueryParams) -> RecommendRequest {
    RecommendRequest {
        item_key: params.item_key.trim().to_string(),
        stars10: parse_clamped(params.stars10.as_deref(), STARS10_RANGE),
        enchants: parse_enchant_list(params.enchants.as_deref().unwrap_or("")),
        filters: QueryFilters {
            tier: parse_filter_value(params.rarity.as_deref(), compact_key),
            wither_impact: parse_flag(params.wi.as_deref()),
            dye: parse_filter_value(params.dye.as_deref(), |raw| norm_key(raw)),
            skin: parse_filter_value(params.skin.as_deref(), |raw| norm_key(raw)),
            petskin: parse_filter_value(params.petskin.as_deref(), |raw| norm_key(raw)),
            pet_item: parse_filter_value(params.petitem.as_deref(), compact_key),
            pet_level_min: parse_clamped(params.petlvl.as_deref(), PET_LEVEL_RANGE),
        },
    }
}

/**
 * Parsea la lista de encantamientos "Nombre Nivel, Nombre Nivel".
 *
 * El nivel acepta enteros y numerales romanos I–XX; una entrada sin
 * nivel decodificable degrada a nivel 1 con la entrada completa como
 * nombre. Claves duplicadas retienen el nivel máximo.
 */
#[must_use]
pub fn parse_enchant_list(raw_list: &str) -> BTreeMap<String, i64> {
    let mut requested: BTreeMap<String, i64> = BTreeMap::new();

    for raw_entry in raw_list.split(',') {
        let entry = raw_entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name_part, level) = match entry.rsplit_once(char::is_whitespace) {
            Some((name_part, level_part)) => match decode_level(level_part) {
                Some(level) => (name_part, level),
                None => (entry, 1),
            },
            None => (entry, 1),
        };

        let canonical_name = normalize_enchant_key(name_part);
        if canonical_name.is_empty() {
            continue;
        }

        let clamped_level = level.clamp(*ENCHANT_LEVEL_RANGE.start(), *ENCHANT_LEVEL_RANGE.end());
        let slot = requested.entry(canonical_name).or_insert(0);
        if clamped_level > *slot {
            *slot = clamped_level;
        }
    }

    requested
}

/// Nivel entero o romano (I–XX).
fn decode_level(raw_level: &str) -> Option<i64> {
    if let Ok(numeric_level) = raw_level.trim().parse::<i64>() {
        return Some(numeric_level);
    }
    roman_to_int(raw_level).map(i64::from)
}

/// Valor de filtro normalizado; vacío y "none" desactivan el filtro.
fn parse_filter_value(
    raw_value: Option<&str>,
    normalizer: impl Fn(&str) -> String,
) -> Option<String> {
    let normalized = normalizer(raw_value?.trim());
    if normalized.is_empty() || normalized == "none" {
        None
    } else {
        Some(normalized)
    }
}

/// Bandera booleana tolerante ("1", "true", "yes").
fn parse_flag(raw_value: Option<&str>) -> bool {
    matches!(
        raw_value.map(|raw| raw.trim().to_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes")
    )
}

/// Entero con recorte silencioso al rango legal.
fn parse_clamped(raw_value: Option<&str>, range: std::ops::RangeInclusive<i64>) -> i64 {
    raw_value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(0)
        .clamp(*range.start(), *range.end())
}

// FIN DEL ARCHIVO [apps/orchestrator/src/handlers/market.rs]
