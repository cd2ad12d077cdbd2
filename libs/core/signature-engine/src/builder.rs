// [libs/core/signature-engine/src/builder.rs]
/*!
 * =================================================================
 * APARATO: SIGNATURE BUILDER (V6.4 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1/L2)
 * RESPONSABILIDAD: COMPOSICIÓN DETERMINISTA DE LA HUELLA DE CONTENIDO
 *
 * VISION HIPER-HOLÍSTICA:
 * Desde las cuatro entradas del listado (nombre, lore, tier, payload
 * binario) se deriva la secuencia canónica de tokens. Toda fuente es
 * opcional y hostil: el constructor jamás falla, degrada. Una entrada
 * completamente vacía produce la firma vacía.
 *
 * # Mathematical Proof (Determinism):
 * Cada paso consume estructuras ordenadas (BTreeMap) y emite en orden
 * fijo; dos invocaciones con las mismas entradas producen cadenas
 * idénticas byte a byte.
 * =================================================================
 */

use once_cell::sync::Lazy;
use regex::Regex;
use tasador_core_nbt::{extra_attributes_from_base64, NbtValue};
use tasador_core_text::{
    canonical_item_key, clean_text, contains_star_glyph, contains_weird_digit, norm_key,
    strip_color_codes,
};
use tracing::debug;

use crate::enchants::collect_enchantments;
use crate::stars::resolve_stars;

/// Armas susceptibles de portar la habilidad Wither Impact.
const WITHER_BLADE_KEYS: [&str; 4] = ["hyperion", "astraea", "scylla", "valkyrie"];

/// Pergaminos requeridos en conjunto para derivar la habilidad.
const REQUIRED_ABILITY_SCROLLS: [&str; 3] =
    ["implosion_scroll", "shadow_warp_scroll", "wither_shield_scroll"];

/// Rango legal del nivel de mascota.
const PET_LEVEL_RANGE: std::ops::RangeInclusive<i64> = 1..=200;

/// Línea de lore que declara el ítem sostenido de una mascota.
static LORE_HELD_ITEM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:held item|pet item)\s*[: ]\s*(.+?)\s*$").expect("regex estática")
});

/// Prefijo textual de nivel de mascota al frente del nombre.
static NAME_PET_LEVEL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^a-z0-9]*(?:lvl|lv|level)\s*\.?\s*(\d{1,3})\b").expect("regex estática")
});

/// Entradas crudas del constructor, tal como llegan del feed.
#[derive(Debug, Clone, Default)]
pub struct SignatureInput<'a> {
    pub item_name: &'a str,
    pub lore: &'a str,
    pub tier: &'a str,
    pub item_bytes: &'a str,
}

/**
 * Predicado de ingesta: decide si un listado amerita construir firma.
 *
 * Un listado BIN, con lore o payload binario, o cuyo nombre porta
 * glifos estelares o dígitos exóticos, lleva firma fresca.
 */
#[must_use]
pub fn wants_signature(is_bin: bool, item_name: &str, lore: &str, item_bytes: &str) -> bool {
    is_bin
        || !lore.trim().is_empty()
        || !item_bytes.trim().is_empty()
        || contains_star_glyph(item_name)
        || contains_weird_digit(item_name)
}

/**
 * Construye la firma canónica del listado.
 *
 * Nunca falla: payloads corruptos degradan a atributos vacíos y una
 * entrada completamente vacía emite la cadena vacía.
 */
#[must_use]
pub fn build_signature(input: &SignatureInput<'_>) -> String {
    // 1. ÁRBOL DE ATRIBUTOS (payload hostil -> compuesto vacío)
    let extra = match extra_attributes_from_base64(input.item_bytes) {
        Some(subtree) => subtree,
        None => {
            if !input.item_bytes.trim().is_empty() {
                debug!("🧬 [SIGNATURE_DEGRADE]: Binary payload unreadable; deriving from text only.");
            }
            NbtValue::empty_compound()
        }
    };

    // 2. ENCANTAMIENTOS CANÓNICOS (nivel máximo por clave)
    let enchantments = collect_enchantments(&extra);

    // 3. ESTRELLAS (cascada de prioridades + invariante master)
    let star_resolution = resolve_stars(&extra, input.item_name, input.lore);

    // 4. RASGOS DERIVADOS Y COSMÉTICOS
    let wither_impact = derive_wither_impact(&extra, input.item_name, input.lore);
    let pet_level = derive_pet_level(&extra, input.item_name);
    let dye = cosmetic_value(extra.get("dye_item"));
    let skin = cosmetic_value(extra.get("skin"));
    let petskin = cosmetic_value(extra.get_first(&["petSkin", "pet_skin"]));
    let pet_item = derive_pet_item(&extra, input.lore);

    // 5. EMISIÓN EN ORDEN CANÓNICO
    let mut tokens: Vec<String> = Vec::new();

    let tier_value = compact_key(input.tier);
    if !tier_value.is_empty() && tier_value != "none" {
        tokens.push(format!("tier:{}", tier_value));
    }
    if star_resolution.dstars > 0 {
        tokens.push(format!("dstars:{}", star_resolution.dstars));
    }
    if star_resolution.mstars > 0 {
        tokens.push(format!("mstars:{}", star_resolution.mstars));
    }
    if star_resolution.stars10() > 0 {
        tokens.push(format!("stars10:{}", star_resolution.stars10()));
    }
    if wither_impact {
        tokens.push("wither_impact:1".to_string());
    }
    if pet_level > 0 {
        tokens.push(format!("pet_level:{}", pet_level));
    }
    if let Some(dye_value) = dye {
        tokens.push(format!("dye:{}", dye_value));
    }
    if let Some(skin_value) = skin {
        tokens.push(format!("skin:{}", skin_value));
    }
    if let Some(petskin_value) = petskin {
        tokens.push(format!("petskin:{}", petskin_value));
    }
    if let Some(pet_item_value) = pet_item {
        tokens.push(format!("pet_item:{}", pet_item_value));
    }
    for (enchant_name, enchant_level) in &enchantments {
        if *enchant_level > 0 {
            tokens.push(format!("{}:{}", enchant_name, enchant_level));
        }
    }

    tokens.join("|")
}

/// Normalización de valor cosmético; vacío y "none" caen del emisor.
fn cosmetic_value(node: Option<&NbtValue>) -> Option<String> {
    let raw_value = node.and_then(NbtValue::as_str_lossy)?;
    let leveled = norm_key(&raw_value);
    if leveled.is_empty() || leveled == "none" {
        None
    } else {
        Some(leveled)
    }
}

/// Clave compacta con guiones bajos ("VERY SPECIAL" -> "very_special").
#[must_use]
pub fn compact_key(raw_value: &str) -> String {
    norm_key(raw_value).replace(' ', "_")
}

/**
 * Deriva la bandera Wither Impact: solo para las cuatro hojas
 * portadoras, vía substring de lore o el trío completo de pergaminos.
 */
fn derive_wither_impact(extra: &NbtValue, item_name: &str, lore: &str) -> bool {
    let canonical_key = canonical_item_key(item_name);
    if !WITHER_BLADE_KEYS.contains(&canonical_key.as_str()) {
        return false;
    }

    if lore.to_lowercase().contains("wither impact") {
        return true;
    }

    let mut scroll_inventory: Vec<String> = Vec::new();
    if let Some(entries) = extra.as_compound() {
        for (attribute_key, attribute_value) in entries {
            if attribute_key.to_lowercase().contains("scroll") {
                scroll_inventory.extend(
                    attribute_value
                        .string_values_deep()
                        .into_iter()
                        .map(|scroll_id| scroll_id.to_lowercase()),
                );
            }
        }
    }

    REQUIRED_ABILITY_SCROLLS
        .iter()
        .all(|required| scroll_inventory.iter().any(|owned| owned == required))
}

/**
 * Deriva el nivel de mascota: `petInfo` (cadena JSON embebida) tiene
 * prioridad; el prefijo textual del nombre es el respaldo.
 */
fn derive_pet_level(extra: &NbtValue, item_name: &str) -> i64 {
    if let Some(pet_info_json) = extra.get("petInfo").and_then(NbtValue::as_str_lossy) {
        if let Ok(pet_info) = serde_json::from_str::<serde_json::Value>(&pet_info_json) {
            if let Some(level) = pet_info.get("level").and_then(|v| v.as_i64()) {
                if PET_LEVEL_RANGE.contains(&level) {
                    return level;
                }
            }
        }
    }

    let searchable_name = strip_color_codes(item_name).to_lowercase();
    if let Some(captures) = NAME_PET_LEVEL_PREFIX.captures(searchable_name.trim()) {
        if let Ok(level) = captures[1].parse::<i64>() {
            if PET_LEVEL_RANGE.contains(&level) {
                return level;
            }
        }
    }

    0
}

/**
 * Deriva el ítem sostenido de la mascota: las seis claves conocidas
 * del árbol tienen prioridad; la línea "Held Item:" del lore es el
 * respaldo. El resultado es una clave compacta con guiones bajos.
 */
fn derive_pet_item(extra: &NbtValue, lore: &str) -> Option<String> {
    let from_attributes = extra
        .get_first(&[
            "petItem",
            "pet_item",
            "heldItem",
            "held_item",
            "petHeldItem",
            "pet_held_item",
        ])
        .and_then(NbtValue::as_str_lossy)
        .map(|raw| compact_key(&raw))
        .filter(|leveled| !leveled.is_empty() && leveled != "none");

    if from_attributes.is_some() {
        return from_attributes;
    }

    for lore_line in strip_color_codes(lore).lines() {
        if let Some(captures) = LORE_HELD_ITEM_LINE.captures(lore_line) {
            let cleaned = clean_text(&captures[1]);
            let leveled = compact_key(&cleaned);
            if !leveled.is_empty() && leveled != "none" {
                return Some(leveled);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::parse_signature;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use proptest::prelude::*;
    use std::io::Write;

    // --- FORJA DE PAYLOADS NBT DE PRUEBA ---

    fn write_name(sink: &mut Vec<u8>, name: &str) {
        sink.extend_from_slice(&(name.len() as u16).to_be_bytes());
        sink.extend_from_slice(name.as_bytes());
    }

    fn write_int_entry(sink: &mut Vec<u8>, name: &str, value: i32) {
        sink.push(3); // TAG_INT
        write_name(sink, name);
        sink.extend_from_slice(&value.to_be_bytes());
    }

    fn write_string_entry(sink: &mut Vec<u8>, name: &str, value: &str) {
        sink.push(8); // TAG_STRING
        write_name(sink, name);
        sink.extend_from_slice(&(value.len() as u16).to_be_bytes());
        sink.extend_from_slice(value.as_bytes());
    }

    fn write_string_list_entry(sink: &mut Vec<u8>, name: &str, values: &[&str]) {
        sink.push(9); // TAG_LIST
        write_name(sink, name);
        sink.push(8); // elementos TAG_STRING
        sink.extend_from_slice(&(values.len() as i32).to_be_bytes());
        for value in values {
            sink.extend_from_slice(&(value.len() as u16).to_be_bytes());
            sink.extend_from_slice(value.as_bytes());
        }
    }

    fn write_compound_entry(sink: &mut Vec<u8>, name: &str, body: &[u8]) {
        sink.push(10); // TAG_COMPOUND
        write_name(sink, name);
        sink.extend_from_slice(body);
        sink.push(0); // TAG_END
    }

    /// Forja `{"": {tag: {ExtraAttributes: <body>}}}` gzip + Base64.
    fn forge_item_bytes(extra_body: &[u8]) -> String {
        let mut tag_body = Vec::new();
        write_compound_entry(&mut tag_body, "ExtraAttributes", extra_body);

        let mut root = Vec::new();
        root.push(10);
        write_name(&mut root, "");
        write_compound_entry(&mut root, "tag", &tag_body);
        root.push(0);

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&root).expect("compresión de fixture");
        STANDARD.encode(encoder.finish().expect("cierre de fixture"))
    }

    #[test]
    fn test_scenario_basic_starred_item() {
        let signature = build_signature(&SignatureInput {
            item_name: "✪✪✪✪✪ Necron's Blade",
            lore: "",
            tier: "LEGENDARY",
            item_bytes: "",
        });
        assert_eq!(signature, "tier:legendary|dstars:5|stars10:5");
    }

    #[test]
    fn test_scenario_master_stars_from_binary_payload() {
        let mut extra = Vec::new();
        write_int_entry(&mut extra, "dungeon_item_level", 5);
        write_int_entry(&mut extra, "upgrade_level", 3);
        let mut enchant_body = Vec::new();
        write_int_entry(&mut enchant_body, "sharpness", 7);
        write_compound_entry(&mut extra, "enchantments", &enchant_body);

        let signature = build_signature(&SignatureInput {
            item_name: "Necron's Blade",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&extra),
        });

        assert!(signature.contains("dstars:5|mstars:3|stars10:8"), "firma: {}", signature);
        assert!(signature.contains("sharpness:7"), "firma: {}", signature);
    }

    #[test]
    fn test_scenario_total_in_dungeon_field() {
        let mut extra = Vec::new();
        write_int_entry(&mut extra, "dungeon_item_level", 8);
        write_int_entry(&mut extra, "upgrade_level", 0);

        let signature = build_signature(&SignatureInput {
            item_name: "Necron's Blade",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&extra),
        });

        assert_eq!(signature, "dstars:5|mstars:3|stars10:8");
    }

    #[test]
    fn test_scenario_wither_blade_scroll_trio() {
        let mut full_trio = Vec::new();
        write_string_list_entry(
            &mut full_trio,
            "ability_scroll",
            &["implosion_scroll", "shadow_warp_scroll", "wither_shield_scroll"],
        );

        let with_trio = build_signature(&SignatureInput {
            item_name: "Hyperion",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&full_trio),
        });
        assert!(with_trio.contains("wither_impact:1"), "firma: {}", with_trio);

        let mut incomplete = Vec::new();
        write_string_list_entry(
            &mut incomplete,
            "ability_scroll",
            &["implosion_scroll", "shadow_warp_scroll"],
        );

        let without_trio = build_signature(&SignatureInput {
            item_name: "Hyperion",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&incomplete),
        });
        assert!(!without_trio.contains("wither_impact"), "firma: {}", without_trio);
    }

    #[test]
    fn test_wither_impact_requires_carrier_blade() {
        let mut full_trio = Vec::new();
        write_string_list_entry(
            &mut full_trio,
            "ability_scroll",
            &["implosion_scroll", "shadow_warp_scroll", "wither_shield_scroll"],
        );

        let foreign_item = build_signature(&SignatureInput {
            item_name: "Aspect of the End",
            lore: "Wither Impact",
            tier: "",
            item_bytes: &forge_item_bytes(&full_trio),
        });
        assert!(!foreign_item.contains("wither_impact"));
    }

    #[test]
    fn test_scenario_pet_with_held_item_in_lore() {
        let signature = build_signature(&SignatureInput {
            item_name: "[Lvl 100] Ender Dragon",
            lore: "§7Some flavour text\n§6Held Item: ✦ Tier Boost\n§7More text",
            tier: "LEGENDARY",
            item_bytes: "",
        });

        assert!(signature.contains("pet_level:100"), "firma: {}", signature);
        assert!(signature.contains("pet_item:tier_boost"), "firma: {}", signature);
    }

    #[test]
    fn test_pet_info_json_outranks_name_prefix() {
        let mut extra = Vec::new();
        write_string_entry(&mut extra, "petInfo", r#"{"type":"ENDER_DRAGON","level":87}"#);

        let signature = build_signature(&SignatureInput {
            item_name: "[Lvl 100] Ender Dragon",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&extra),
        });

        assert!(signature.contains("pet_level:87"), "firma: {}", signature);
    }

    #[test]
    fn test_cosmetics_emit_and_none_falls() {
        let mut extra = Vec::new();
        write_string_entry(&mut extra, "dye_item", "NECRON_DYE");
        write_string_entry(&mut extra, "skin", "NONE");

        let signature = build_signature(&SignatureInput {
            item_name: "Necron's Blade",
            lore: "",
            tier: "",
            item_bytes: &forge_item_bytes(&extra),
        });

        assert!(signature.contains("dye:necron dye"), "firma: {}", signature);
        assert!(!signature.contains("skin:"), "firma: {}", signature);
    }

    #[test]
    fn test_empty_input_yields_empty_signature() {
        let signature = build_signature(&SignatureInput::default());
        assert_eq!(signature, "");
    }

    #[test]
    fn test_wants_signature_predicate() {
        assert!(wants_signature(true, "Plain Rock", "", ""));
        assert!(wants_signature(false, "Plain Rock", "lore", ""));
        assert!(wants_signature(false, "Plain Rock", "", "AAAA"));
        assert!(wants_signature(false, "Rock ✪", "", ""));
        assert!(wants_signature(false, "Rock ②", "", ""));
        assert!(!wants_signature(false, "Plain Rock", "", ""));
    }

    #[test]
    fn test_emit_then_parse_preserves_token_set() {
        let signature = build_signature(&SignatureInput {
            item_name: "✪✪✪✪✪ Necron's Blade",
            lore: "",
            tier: "LEGENDARY",
            item_bytes: "",
        });

        let parsed = parse_signature(&signature);
        assert_eq!(parsed.tier.as_deref(), Some("legendary"));
        assert_eq!(parsed.dstars, 5);
        assert_eq!(parsed.stars10, Some(5));
    }

    proptest! {
        /// Mismas entradas -> salida idéntica byte a byte.
        #[test]
        fn certify_builder_determinism(
            name in ".{0,48}",
            lore in ".{0,64}",
            tier in "(LEGENDARY|EPIC|RARE|)",
        ) {
            let input = SignatureInput {
                item_name: &name,
                lore: &lore,
                tier: &tier,
                item_bytes: "",
            };
            prop_assert_eq!(build_signature(&input), build_signature(&input));
        }

        /// Invariantes estelares sobre cualquier firma emitida.
        #[test]
        fn certify_star_invariants_hold(
            name in "[a-zA-Z' ]{1,24}",
            stars in 0usize..11,
        ) {
            let decorated = format!("{} {}", name, "✪".repeat(stars.min(5)));
            let signature = build_signature(&SignatureInput {
                item_name: &decorated,
                lore: "",
                tier: "",
                item_bytes: "",
            });

            let parsed = parse_signature(&signature);
            if parsed.mstars > 0 {
                prop_assert_eq!(parsed.dstars, 5);
            }
            if let Some(total) = parsed.stars10 {
                prop_assert_eq!(total, parsed.dstars + parsed.mstars);
            }
        }
    }
}
// FIN DEL ARCHIVO [libs/core/signature-engine/src/builder.rs]
