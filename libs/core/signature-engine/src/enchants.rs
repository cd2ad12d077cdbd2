// [libs/core/signature-engine/src/enchants.rs]
/*!
 * =================================================================
 * APARATO: ENCHANTMENT NORMALIZER & TIER MATRIX (V6.1 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: CLAVES DE ENCANTAMIENTO CANÓNICAS Y BUCKETS DE TIER
 *
 * VISION HIPER-HOLÍSTICA:
 * El proveedor serializa los encantamientos con claves inestables
 * ("ULTIMATE_WISE", "ultimate_wise", "Ultimate Wise"). Este aparato
 * las pliega a un único nombre canónico con guiones bajos y clasifica
 * cada par (nombre, nivel) en un bucket discreto de rareza usado por
 * el matcher y el ordenamiento de exhibición.
 * =================================================================
 */

use tasador_core_nbt::NbtValue;
use tasador_core_text::norm_key;

use std::collections::BTreeMap;

/// Bucket discreto de rareza para un par (encantamiento, nivel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantTier {
    BB,
    B,
    A,
    AA,
    AAA,
    Misc,
}

/// Rango aritmético del bucket: BB<B<A<AA<AAA; MISC queda fuera de la
/// escala y suprime la componente de bucket en las distancias.
#[must_use]
pub fn tier_rank(tier: EnchantTier) -> i64 {
    match tier {
        EnchantTier::BB => 0,
        EnchantTier::B => 1,
        EnchantTier::A => 2,
        EnchantTier::AA => 3,
        EnchantTier::AAA => 4,
        EnchantTier::Misc => -1,
    }
}

/**
 * Normaliza una clave de encantamiento a su forma canónica.
 *
 * Minúsculas, guiones bajos como separadores de palabra, caída del
 * prefijo "ultimate" y re-unión con guiones bajos:
 * "ULTIMATE_WISE" -> "wise", "First Strike" -> "first_strike".
 */
#[must_use]
pub fn normalize_enchant_key(raw_enchant_name: &str) -> String {
    let leveled = norm_key(raw_enchant_name);
    let mut word_stream: Vec<&str> = leveled.split_whitespace().collect();

    if word_stream.len() > 1 && word_stream[0] == "ultimate" {
        word_stream.remove(0);
    }

    word_stream.join("_")
}

/**
 * Cosecha el mapa de encantamientos canónicos desde `ExtraAttributes`.
 *
 * Fusiona `enchantments` (mapa nombre -> nivel) con `ultimate_enchant`
 * (cadena "NAME_LEVEL" u objeto {enchant|enchantment|id, level|lvl|tier}),
 * reteniendo el nivel MÁXIMO visto por clave.
 */
#[must_use]
pub fn collect_enchantments(extra: &NbtValue) -> BTreeMap<String, i64> {
    let mut harvested: BTreeMap<String, i64> = BTreeMap::new();

    if let Some(enchant_table) = extra.get("enchantments").and_then(NbtValue::as_compound) {
        for (raw_name, raw_level) in enchant_table {
            let canonical_name = normalize_enchant_key(raw_name);
            let level = raw_level.as_i64().unwrap_or(0);
            merge_max_level(&mut harvested, canonical_name, level);
        }
    }

    if let Some(ultimate_node) = extra.get("ultimate_enchant") {
        if let Some((canonical_name, level)) = decode_ultimate_enchant(ultimate_node) {
            merge_max_level(&mut harvested, canonical_name, level);
        }
    }

    harvested
}

/// Regla de fusión por nivel máximo; claves vacías y niveles no
/// positivos caen silenciosamente.
fn merge_max_level(sink: &mut BTreeMap<String, i64>, canonical_name: String, level: i64) {
    if canonical_name.is_empty() || level <= 0 {
        return;
    }
    let slot = sink.entry(canonical_name).or_insert(0);
    if level > *slot {
        *slot = level;
    }
}

/// Decodifica las dos encarnaciones conocidas de `ultimate_enchant`.
fn decode_ultimate_enchant(node: &NbtValue) -> Option<(String, i64)> {
    match node {
        NbtValue::Str(packed) => {
            // Forma "NAME_LEVEL"; un sufijo no numérico degrada a nivel 1.
            let trimmed = packed.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.rsplit_once('_') {
                Some((name_part, level_part)) => match level_part.parse::<i64>() {
                    Ok(level) => Some((normalize_enchant_key(name_part), level)),
                    Err(_) => Some((normalize_enchant_key(trimmed), 1)),
                },
                None => Some((normalize_enchant_key(trimmed), 1)),
            }
        }
        NbtValue::Compound(_) => {
            let raw_name = node
                .get_first(&["enchant", "enchantment", "id"])
                .and_then(NbtValue::as_str_lossy)?;
            let level = node
                .get_first(&["level", "lvl", "tier"])
                .and_then(NbtValue::as_i64)
                .unwrap_or(1);
            Some((normalize_enchant_key(&raw_name), level))
        }
        _ => None,
    }
}

/**
 * Clasifica un par (nombre canónico, nivel) en su bucket de rareza.
 *
 * La matriz explícita cubre las familias de alto tráfico del mercado;
 * cualquier nombre fuera de matriz sigue la curva genérica de niveles.
 * Niveles no positivos clasifican MISC.
 */
#[must_use]
pub fn tier_bucket(canonical_name: &str, level: i64) -> EnchantTier {
    if level <= 0 {
        return EnchantTier::Misc;
    }

    match canonical_name {
        // --- ULTIMATES DE PROGRESIÓN (curva de 5 niveles) ---
        "wise" | "legion" | "combo" | "last_stand" | "rend" | "soul_eater"
        | "bank" | "no_pain_no_gain" | "wisdom" | "habanero_tactics" => match level {
            1 => EnchantTier::B,
            2 | 3 => EnchantTier::A,
            4 => EnchantTier::AA,
            _ => EnchantTier::AAA,
        },

        // --- ULTIMATES DE ALTO VALOR (raros desde el nivel 1) ---
        "chimera" | "duplex" | "fatal_tempo" | "inferno" | "one_for_all"
        | "flash" => match level {
            1 => EnchantTier::A,
            2 => EnchantTier::AA,
            _ => EnchantTier::AAA,
        },

        // --- UTILITARIOS SIN MERCADO DE RAREZA ---
        "telekinesis" | "rainbow" | "impaling" | "respite" | "aqua_affinity"
        | "silk_touch" | "smelting_touch" => EnchantTier::Misc,

        // --- COMBATE CON TECHO 10 (curva extendida) ---
        "sharpness" | "growth" | "protection" | "power" | "giant_killer"
        | "ender_slayer" | "dragon_hunter" | "critical" | "smite"
        | "bane_of_arthropods" => match level {
            1..=4 => EnchantTier::BB,
            5 => EnchantTier::B,
            6 => EnchantTier::A,
            7 => EnchantTier::AA,
            _ => EnchantTier::AAA,
        },

        // --- CURVA GENÉRICA ---
        _ => match level {
            1..=4 => EnchantTier::BB,
            5 => EnchantTier::B,
            6 => EnchantTier::A,
            7 => EnchantTier::AA,
            _ => EnchantTier::AAA,
        },
    }
}

/**
 * Distancia de encantamiento entre el nivel solicitado y el candidato:
 * `max(|Δnivel|, |Δbucket|)`; un bucket MISC en cualquiera de los dos
 * lados suprime la componente de bucket.
 */
#[must_use]
pub fn enchant_distance(canonical_name: &str, requested_level: i64, candidate_level: i64) -> i64 {
    let level_distance = (requested_level - candidate_level).abs();

    let requested_rank = tier_rank(tier_bucket(canonical_name, requested_level));
    let candidate_rank = tier_rank(tier_bucket(canonical_name, candidate_level));

    let bucket_distance = if requested_rank < 0 || candidate_rank < 0 {
        0
    } else {
        (requested_rank - candidate_rank).abs()
    };

    level_distance.max(bucket_distance)
}

/// Peso heurístico de exhibición: bucket dominante, nivel como desempate.
#[must_use]
pub fn heuristic_weight(canonical_name: &str, level: i64) -> i64 {
    tier_rank(tier_bucket(canonical_name, level)).max(0) * 100 + level
}

// FIN DEL ARCHIVO [libs/core/signature-engine/src/enchants.rs]
