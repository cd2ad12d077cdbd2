// [libs/core/signature-engine/src/tokens.rs]
/*!
 * =================================================================
 * APARATO: SIGNATURE TOKEN FORMAT (V6.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: EMISIÓN, PARSEO Y FUSIÓN DEL FORMATO DE TOKENS
 *
 * VISION HIPER-HOLÍSTICA:
 * La firma es una secuencia ordenada de tokens `clave:valor` unidos
 * por '|'. Las claves reservadas describen rasgos derivados; toda
 * clave no reservada es un encantamiento con nivel entero. El orden
 * de emisión es fijo y los encantamientos van ordenados
 * lexicográficamente: la firma es comparable byte a byte.
 * =================================================================
 */

use std::collections::BTreeMap;

/// Claves reservadas del espacio de nombres de la firma, en su orden
/// de emisión canónico. Inmutable tras ignición.
pub const RESERVED_KEYS: [&str; 10] = [
    "tier",
    "dstars",
    "mstars",
    "stars10",
    "wither_impact",
    "pet_level",
    "dye",
    "skin",
    "petskin",
    "pet_item",
];

/// Forma estructurada de una firma parseada.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureTokens {
    pub tier: Option<String>,
    pub dstars: i64,
    pub mstars: i64,
    pub stars10: Option<i64>,
    pub wither_impact: bool,
    pub pet_level: i64,
    pub dye: Option<String>,
    pub skin: Option<String>,
    pub petskin: Option<String>,
    pub pet_item: Option<String>,
    /// Encantamientos canónicos; duplicados colapsan al nivel máximo.
    pub enchants: BTreeMap<String, i64>,
}

impl SignatureTokens {
    /// Nivel almacenado de un encantamiento; 0 cuando está ausente.
    #[must_use]
    pub fn enchant_level(&self, canonical_name: &str) -> i64 {
        self.enchants.get(canonical_name).copied().unwrap_or(0)
    }

    /// Total combinado de estrellas; 0 cuando el token está ausente.
    #[must_use]
    pub fn stars10_or_zero(&self) -> i64 {
        self.stars10.unwrap_or(0)
    }
}

/**
 * Parsea una firma almacenada hacia su forma estructurada.
 *
 * Tolerante por contrato: tokens malformados (sin ':', nivel no
 * numérico) caen en silencio; una clave desconocida se interpreta
 * como encantamiento.
 */
#[must_use]
pub fn parse_signature(raw_signature: &str) -> SignatureTokens {
    let mut parsed = SignatureTokens::default();

    for raw_token in raw_signature.split('|') {
        let trimmed_token = raw_token.trim();
        if trimmed_token.is_empty() {
            continue;
        }

        let Some((token_key, token_value)) = trimmed_token.split_once(':') else {
            continue;
        };
        let token_key = token_key.trim();
        let token_value = token_value.trim();

        match token_key {
            "tier" => parsed.tier = non_empty(token_value),
            "dstars" => parsed.dstars = token_value.parse().unwrap_or(0),
            "mstars" => parsed.mstars = token_value.parse().unwrap_or(0),
            "stars10" => parsed.stars10 = token_value.parse().ok(),
            "wither_impact" => parsed.wither_impact = token_value == "1",
            "pet_level" => parsed.pet_level = token_value.parse().unwrap_or(0),
            "dye" => parsed.dye = non_empty(token_value),
            "skin" => parsed.skin = non_empty(token_value),
            "petskin" => parsed.petskin = non_empty(token_value),
            "pet_item" => parsed.pet_item = non_empty(token_value),
            enchant_name => {
                if let Ok(level) = token_value.parse::<i64>() {
                    let slot = parsed.enchants.entry(enchant_name.to_string()).or_insert(0);
                    if level > *slot {
                        *slot = level;
                    }
                }
            }
        }
    }

    parsed
}

/**
 * Regla de fusión persistente de firmas (auctions y sales).
 *
 * Se conserva la existente salvo que: (a) esté vacía, (b) la entrante
 * introduzca un token `pet_item:` que la existente no porta, o (c)
 * ambas discrepen en `stars10:` — en cuyo caso gana la entrante. Una
 * entrante vacía nunca desplaza a una existente poblada.
 */
#[must_use]
pub fn merge_signatures(existing: &str, incoming: &str) -> String {
    let existing_trimmed = existing.trim();
    let incoming_trimmed = incoming.trim();

    if existing_trimmed.is_empty() {
        return incoming_trimmed.to_string();
    }
    if incoming_trimmed.is_empty() {
        return existing_trimmed.to_string();
    }

    let existing_tokens = parse_signature(existing_trimmed);
    let incoming_tokens = parse_signature(incoming_trimmed);

    let introduces_pet_item =
        incoming_tokens.pet_item.is_some() && existing_tokens.pet_item.is_none();
    let stars_disagree = existing_tokens.stars10 != incoming_tokens.stars10;

    if introduces_pet_item || stars_disagree {
        incoming_trimmed.to_string()
    } else {
        existing_trimmed.to_string()
    }
}

fn non_empty(candidate: &str) -> Option<String> {
    if candidate.is_empty() || candidate == "none" {
        None
    } else {
        Some(candidate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_reserved_and_enchant_tokens() {
        let parsed =
            parse_signature("tier:legendary|dstars:5|mstars:3|stars10:8|sharpness:7|wise:5");

        assert_eq!(parsed.tier.as_deref(), Some("legendary"));
        assert_eq!(parsed.dstars, 5);
        assert_eq!(parsed.mstars, 3);
        assert_eq!(parsed.stars10, Some(8));
        assert_eq!(parsed.enchant_level("sharpness"), 7);
        assert_eq!(parsed.enchant_level("wise"), 5);
        assert_eq!(parsed.enchant_level("ausente"), 0);
    }

    #[test]
    fn test_parse_tolerates_malformed_tokens() {
        let parsed = parse_signature("tier:legendary||sin_dos_puntos|sharpness:siete|growth:6");
        assert_eq!(parsed.tier.as_deref(), Some("legendary"));
        assert_eq!(parsed.enchant_level("sharpness"), 0);
        assert_eq!(parsed.enchant_level("growth"), 6);
    }

    #[test]
    fn test_parse_keeps_max_on_duplicate_enchants() {
        let parsed = parse_signature("sharpness:5|sharpness:7");
        assert_eq!(parsed.enchant_level("sharpness"), 7);
    }

    #[test]
    fn test_merge_keeps_existing_by_default() {
        let kept = merge_signatures("tier:epic|stars10:5|dstars:5", "tier:epic|stars10:5|dstars:5|growth:6");
        assert_eq!(kept, "tier:epic|stars10:5|dstars:5");
    }

    #[test]
    fn test_merge_replaces_on_empty_existing() {
        assert_eq!(merge_signatures("", "tier:epic"), "tier:epic");
        assert_eq!(merge_signatures("   ", "tier:epic"), "tier:epic");
    }

    #[test]
    fn test_merge_replaces_on_new_pet_item() {
        let replaced = merge_signatures("pet_level:100", "pet_level:100|pet_item:tier_boost");
        assert_eq!(replaced, "pet_level:100|pet_item:tier_boost");
    }

    #[test]
    fn test_merge_replaces_on_stars_disagreement() {
        let replaced = merge_signatures("stars10:5|dstars:5", "dstars:5|mstars:1|stars10:6");
        assert_eq!(replaced, "dstars:5|mstars:1|stars10:6");
    }

    #[test]
    fn test_merge_never_wipes_with_empty_incoming() {
        assert_eq!(merge_signatures("stars10:5|dstars:5", ""), "stars10:5|dstars:5");
    }

    #[test]
    fn test_merge_is_idempotent_under_reapplication() {
        let first = merge_signatures("stars10:5|dstars:5", "dstars:5|mstars:1|stars10:6");
        let second = merge_signatures(&first, "dstars:5|mstars:1|stars10:6");
        assert_eq!(first, second);
    }
}
// FIN DEL ARCHIVO [libs/core/signature-engine/src/tokens.rs]
