// [libs/core/text-engine/src/canonical.rs]
/*!
 * =================================================================
 * APARATO: ITEM IDENTITY CANONICALIZER (V5.3 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: CLAVE CANÓNICA DE AGRUPACIÓN DE ÍTEMS
 *
 * VISION HIPER-HOLÍSTICA:
 * Dos listados del mismo ítem base deben colapsar a la misma clave sin
 * importar reforja, glifos estelares, prefijo de nivel de mascota,
 * anotaciones entre paréntesis o dígitos de variante. La clave canónica
 * es el eje de agrupación de ventas, recomendaciones y el escaneo BIN.
 *
 * # Mathematical Proof (Grouping Stability):
 * La secuencia de reducción es estrictamente decreciente sobre el
 * contenido decorativo y estable sobre el resultado: una clave ya
 * canónica atraviesa la secuencia sin mutar.
 * =================================================================
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::digits::normalize_weird_digits;
use crate::glyphs::strip_star_glyphs;
use crate::normalizer::{norm_key, strip_color_codes};

/// Vocabulario cerrado de prefijos de reforja. Una reforja modifica
/// estadísticas pero nunca identidad; cae durante la canonicalización.
static REFORGE_PREFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ancient", "awkward", "bizarre", "blessed", "bloody", "blooming",
        "bountiful", "brilliant", "bustling", "candied", "clean", "cubic",
        "deadly", "demonic", "dirty", "epic", "excellent", "fabled", "fair",
        "fanged", "fast", "fierce", "fine", "fleet", "forceful", "fortified",
        "fruitful", "gentle", "giant", "gilded", "glistening", "godly",
        "grand", "hasty", "headstrong", "heated", "heavy", "heroic",
        "honored", "hurtful", "hyper", "itchy", "jaded", "keen", "legendary",
        "light", "loving", "lucky", "magnetic", "menacing", "mithraic",
        "mossy", "mythic", "neat", "necrotic", "odd", "ominous", "perfect",
        "pleasant", "precise", "pretty", "pure", "rapid", "refined",
        "reinforced", "renowned", "rich", "ridiculous", "rooted", "royal",
        "salty", "sharp", "shiny", "silky", "simple", "smart", "snowy",
        "spicy", "spiked", "spiritual", "stellar", "stiff", "strange",
        "strengthened", "strong", "submerged", "superior", "suspicious",
        "sweet", "titanic", "toil", "treacherous", "unpleasant", "unreal",
        "unyielding", "vivid", "warped", "waxed", "wise", "withered",
        "zealous",
    ]
    .into_iter()
    .collect()
});

/// Prefijos textuales de nivel de mascota ("Lvl 100", "Level 42").
const PET_LEVEL_MARKERS: [&str; 3] = ["lvl", "lv", "level"];

/// Máximo de prefijos de reforja que pueden apilarse sobre un nombre.
const MAX_STACKED_REFORGES: usize = 2;

/**
 * Deriva la clave canónica de identidad de un nombre de ítem.
 *
 * Secuencia de reducción:
 * 1. Dígitos exóticos -> ASCII; purga de escapes de color y glifos.
 * 2. Caída de corridas entre paréntesis y corchetes.
 * 3. Partición de fronteras letra-dígito y normalización `norm_key`.
 * 4. Caída de tokens de variante (dígitos puros al final).
 * 5. Caída del par de prefijo de nivel de mascota.
 * 6. Caída de hasta dos prefijos de reforja.
 */
#[must_use]
pub fn canonical_item_key(raw_item_name: &str) -> String {
    let digit_leveled = normalize_weird_digits(raw_item_name);
    let color_free = strip_color_codes(&digit_leveled);
    let star_free = strip_star_glyphs(&color_free);
    let annotation_free = drop_enclosed_runs(&star_free);
    let boundary_split = split_letter_digit_boundaries(&annotation_free);

    let normalized = norm_key(&boundary_split);
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();

    drop_trailing_variant_digits(&mut tokens);
    drop_pet_level_prefix(&mut tokens);
    drop_reforge_prefixes(&mut tokens);

    tokens.join(" ")
}

/// Elimina corridas `(...)` y `[...]` incluyendo su contenido.
/// El escaneo no es anidado; un cierre huérfano pasa intacto.
fn drop_enclosed_runs(raw_input: &str) -> String {
    let mut retained = String::with_capacity(raw_input.len());
    let mut pending_closer: Option<char> = None;

    for current_character in raw_input.chars() {
        match pending_closer {
            Some(expected_closer) => {
                if current_character == expected_closer {
                    pending_closer = None;
                }
            }
            None => match current_character {
                '(' => pending_closer = Some(')'),
                '[' => pending_closer = Some(']'),
                other => retained.push(other),
            },
        }
    }

    retained
}

/// Inserta un espacio en cada transición letra->dígito y dígito->letra.
fn split_letter_digit_boundaries(raw_input: &str) -> String {
    let mut separated = String::with_capacity(raw_input.len() + 8);
    let mut previous_character: Option<char> = None;

    for current_character in raw_input.chars() {
        if let Some(previous) = previous_character {
            let crosses_boundary = (previous.is_alphabetic() && current_character.is_ascii_digit())
                || (previous.is_ascii_digit() && current_character.is_alphabetic());
            if crosses_boundary {
                separated.push(' ');
            }
        }
        separated.push(current_character);
        previous_character = Some(current_character);
    }

    separated
}

/// Retira los tokens de variante: dígitos puros colgando al final.
/// Siempre preserva al menos un token.
fn drop_trailing_variant_digits(tokens: &mut Vec<&str>) {
    while tokens.len() > 1 {
        let last_is_variant = tokens
            .last()
            .map(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);

        if !last_is_variant {
            break;
        }
        tokens.pop();
    }
}

/// Retira el par `lvl|lv|level <dígitos>` al frente del nombre.
fn drop_pet_level_prefix(tokens: &mut Vec<&str>) {
    if tokens.len() >= 3
        && PET_LEVEL_MARKERS.contains(&tokens[0])
        && tokens[1].chars().all(|c| c.is_ascii_digit())
        && !tokens[1].is_empty()
    {
        tokens.drain(0..2);
    }
}

/// Retira hasta dos prefijos de reforja, sin vaciar jamás el nombre.
fn drop_reforge_prefixes(tokens: &mut Vec<&str>) {
    let mut stripped_count = 0;
    while stripped_count < MAX_STACKED_REFORGES
        && tokens.len() > 1
        && REFORGE_PREFIXES.contains(tokens[0])
    {
        tokens.remove(0);
        stripped_count += 1;
    }
}

// FIN DEL ARCHIVO [libs/core/text-engine/src/canonical.rs]
