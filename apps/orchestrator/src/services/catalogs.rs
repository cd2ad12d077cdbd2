// [apps/orchestrator/src/services/catalogs.rs]
/*!
 * =================================================================
 * APARATO: OPERATIONAL CATALOGS (V5.1 - MARKET GOLD)
 * CLASIFICACIÓN: QUERY SERVICE (ESTRATO L4)
 * RESPONSABILIDAD: CATÁLOGOS FIJOS DE COSMÉTICOS Y ENCANTAMIENTOS
 *
 * VISION HIPER-HOLÍSTICA:
 * El dashboard porta los catálogos cosméticos completos; el servicio
 * expone el subconjunto operacional de alto tráfico con filtrado por
 * substring insensible a mayúsculas. Las claves coinciden con los
 * valores que emite el motor de firmas.
 * =================================================================
 */

use tasador_domain_models::CatalogEntry;

/// Tintes de alto tráfico del mercado (clave = token de firma).
const DYE_CATALOG: &[(&str, &str)] = &[
    ("Necron Dye", "necron dye"),
    ("Midnight Dye", "midnight dye"),
    ("Frostbitten Dye", "frostbitten dye"),
    ("Aurora Dye", "aurora dye"),
    ("Jade Dye", "jade dye"),
    ("Flame Dye", "flame dye"),
    ("Mango Dye", "mango dye"),
    ("Bone Dye", "bone dye"),
    ("Byzantium Dye", "byzantium dye"),
    ("Celadon Dye", "celadon dye"),
    ("Holly Dye", "holly dye"),
    ("Sangria Dye", "sangria dye"),
    ("Pure Black Dye", "pure black dye"),
    ("Pure White Dye", "pure white dye"),
    ("Brick Red Dye", "brick red dye"),
    ("Dark Purple Dye", "dark purple dye"),
];

/// Skins de armadura y herramienta de alto tráfico.
const SKIN_CATALOG: &[(&str, &str)] = &[
    ("Frozen Blaze", "frozen blaze"),
    ("Shimmer", "shimmer"),
    ("Crystal", "crystal"),
    ("Inferno", "inferno"),
    ("Reaper", "reaper"),
    ("Snow Princess", "snow princess"),
    ("Pastel", "pastel"),
    ("Baby Blue", "baby blue"),
    ("Midas", "midas"),
    ("Necromancer Lord", "necromancer lord"),
    ("Stormy", "stormy"),
    ("Seraph", "seraph"),
];

/// Skins de mascota de alto tráfico.
const PETSKIN_CATALOG: &[(&str, &str)] = &[
    ("Midnight", "midnight"),
    ("Neon Blue", "neon blue"),
    ("Neon Red", "neon red"),
    ("Neon Green", "neon green"),
    ("Golden", "golden"),
    ("Onyx", "onyx"),
    ("Pearl", "pearl"),
    ("Cosmic", "cosmic"),
    ("Lunar", "lunar"),
    ("Radiant", "radiant"),
];

/// Ítems sostenidos de mascota (clave compacta del motor de firmas).
const PETITEM_CATALOG: &[(&str, &str)] = &[
    ("Tier Boost", "tier_boost"),
    ("Exp Share", "exp_share"),
    ("Lucky Clover", "lucky_clover"),
    ("Minos Relic", "minos_relic"),
    ("Quick Claw", "quick_claw"),
    ("Combat Exp Boost", "combat_exp_boost"),
    ("Farming Exp Boost", "farming_exp_boost"),
    ("Mining Exp Boost", "mining_exp_boost"),
    ("Fishing Exp Boost", "fishing_exp_boost"),
    ("Foraging Exp Boost", "foraging_exp_boost"),
    ("Dwarf Turtle Shelmet", "dwarf_turtle_shelmet"),
    ("Textbook", "textbook"),
    ("Saddle", "saddle"),
    ("Reinforced Scales", "reinforced_scales"),
];

/// Encantamientos conocidos con su techo de nivel para autocompletar.
const ENCHANT_CATALOG: &[(&str, i64)] = &[
    ("Sharpness", 7),
    ("Growth", 7),
    ("Protection", 7),
    ("Power", 7),
    ("Critical", 7),
    ("Giant Killer", 7),
    ("Ender Slayer", 7),
    ("Dragon Hunter", 5),
    ("Smite", 7),
    ("Bane of Arthropods", 7),
    ("First Strike", 5),
    ("Triple Strike", 5),
    ("Life Steal", 5),
    ("Syphon", 5),
    ("Vampirism", 6),
    ("Looting", 5),
    ("Luck", 7),
    ("Scavenger", 5),
    ("Vicious", 5),
    ("Prosecute", 6),
    ("Execute", 6),
    ("Cubism", 6),
    ("Lethality", 6),
    ("Thunderlord", 7),
    ("Ultimate Wise", 5),
    ("Ultimate Jerry", 5),
    ("One For All", 1),
    ("Chimera", 5),
    ("Combo", 5),
    ("Duplex", 5),
    ("Fatal Tempo", 3),
    ("Inferno", 5),
    ("Legion", 5),
    ("Last Stand", 5),
    ("Rend", 5),
    ("Soul Eater", 5),
];

/// Filtra un catálogo por substring insensible a mayúsculas.
#[must_use]
pub fn filter_catalog(
    catalog: &[(&str, &str)],
    query: &str,
    limit: usize,
) -> Vec<CatalogEntry> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|(label, key)| {
            needle.is_empty()
                || label.to_lowercase().contains(&needle)
                || key.contains(&needle)
        })
        .take(limit)
        .map(|(label, key)| CatalogEntry { label: (*label).to_string(), key: (*key).to_string() })
        .collect()
}

#[must_use]
pub fn dye_entries(query: &str, limit: usize) -> Vec<CatalogEntry> {
    filter_catalog(DYE_CATALOG, query, limit)
}

#[must_use]
pub fn skin_entries(query: &str, limit: usize) -> Vec<CatalogEntry> {
    filter_catalog(SKIN_CATALOG, query, limit)
}

#[must_use]
pub fn petskin_entries(query: &str, limit: usize) -> Vec<CatalogEntry> {
    filter_catalog(PETSKIN_CATALOG, query, limit)
}

#[must_use]
pub fn petitem_entries(query: &str, limit: usize) -> Vec<CatalogEntry> {
    filter_catalog(PETITEM_CATALOG, query, limit)
}

/**
 * Autocompletado de encantamientos: entradas "Nombre Nivel" filtradas
 * por substring, de nivel alto hacia bajo por nombre.
 */
#[must_use]
pub fn enchant_suggestions(query: &str, limit: usize) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    let mut suggestions = Vec::new();

    for (enchant_label, max_level) in ENCHANT_CATALOG {
        if !needle.is_empty() && !enchant_label.to_lowercase().contains(&needle) {
            continue;
        }
        for level in (1..=*max_level).rev() {
            suggestions.push(format!("{} {}", enchant_label, level));
            if suggestions.len() >= limit {
                return suggestions;
            }
        }
    }

    suggestions
}

// FIN DEL ARCHIVO [apps/orchestrator/src/services/catalogs.rs]
