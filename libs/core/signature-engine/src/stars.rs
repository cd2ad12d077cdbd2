// [libs/core/signature-engine/src/stars.rs]
/*!
 * =================================================================
 * APARATO: STAR RESOLUTION ENGINE (V6.3 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: RESOLUCIÓN DE ESTRELLAS DUNGEON/MASTER [0,5]+[0,5]
 *
 * VISION HIPER-HOLÍSTICA:
 * El proveedor upstream subespecifica la semántica de
 * 'dungeon_item_level' y 'upgrade_level'; la cascada de prioridades de
 * este aparato es ingeniería inversa acumulada y debe preservarse
 * exactamente. Invariante dura del dominio: mstars > 0 => dstars == 5.
 * =================================================================
 */

use tasador_core_nbt::NbtValue;
use tasador_core_text::glyphs::is_star_glyph;
use tasador_core_text::{normalize_weird_digits, roman_to_int};
use tracing::debug;

/// Ventana de búsqueda del cúmulo estelar (cola de la cadena).
const TEXT_SEARCH_WINDOW: usize = 80;

/// Presupuesto de separadores tolerados dentro del cúmulo.
const SEPARATOR_BUDGET: usize = 12;

/// Resultado de la resolución de estrellas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarResolution {
    pub dstars: i64,
    pub mstars: i64,
    /// Verdadero cuando la desambiguación textual decidió el resultado.
    pub text_fallback_taken: bool,
}

impl StarResolution {
    #[must_use]
    pub fn stars10(&self) -> i64 {
        self.dstars + self.mstars
    }
}

/**
 * Resuelve `(dstars, mstars)` aplicando la cascada de prioridades
 * sobre los campos binarios y el texto de exhibición.
 */
#[must_use]
pub fn resolve_stars(extra: &NbtValue, item_name: &str, lore: &str) -> StarResolution {
    let dungeon_field = clamp10(extra.get("dungeon_item_level").and_then(NbtValue::as_i64));
    let upgrade_field = clamp10(extra.get("upgrade_level").and_then(NbtValue::as_i64));

    let resolution = if dungeon_field > 5 {
        StarResolution { dstars: 5, mstars: dungeon_field - 5, text_fallback_taken: false }
    } else if upgrade_field > 5 {
        StarResolution { dstars: 5, mstars: upgrade_field - 5, text_fallback_taken: false }
    } else if dungeon_field > 0 && upgrade_field > 0 {
        StarResolution {
            dstars: dungeon_field.clamp(0, 5),
            mstars: upgrade_field.clamp(0, 5),
            text_fallback_taken: false,
        }
    } else if dungeon_field > 0 {
        StarResolution { dstars: dungeon_field, mstars: 0, text_fallback_taken: false }
    } else if upgrade_field > 0 {
        // Ambigüedad del proveedor: un 'upgrade_level' solitario en
        // [1,5] puede ser estrella dungeon o master. El texto decide.
        let textual_total = stars10_from_text(item_name).max(stars10_from_text(lore));
        if textual_total >= 6 {
            debug!(
                upgrade_level = upgrade_field,
                textual_total,
                "⭐ [STAR_FALLBACK]: Solitary upgrade_level promoted to master stars by text evidence."
            );
            StarResolution { dstars: 5, mstars: upgrade_field, text_fallback_taken: true }
        } else {
            StarResolution { dstars: upgrade_field, mstars: 0, text_fallback_taken: false }
        }
    } else {
        let textual_total = stars10_from_text(item_name).max(stars10_from_text(lore));
        StarResolution {
            dstars: textual_total.min(5),
            mstars: (textual_total - 5).max(0),
            text_fallback_taken: textual_total > 0,
        }
    };

    enforce_master_invariant(resolution)
}

/// Invariante final: mstars > 0 exige base completamente estrellada.
fn enforce_master_invariant(mut resolution: StarResolution) -> StarResolution {
    if resolution.mstars > 0 && resolution.dstars != 5 {
        resolution.dstars = 5;
    }
    resolution
}

fn clamp10(raw_value: Option<i64>) -> i64 {
    raw_value.unwrap_or(0).clamp(0, 10)
}

/**
 * Parseo textual del total de estrellas [0,10].
 *
 * Busca el último glifo estelar en la cola de la cadena, camina hacia
 * atrás contando hasta 5 glifos contiguos (con presupuesto acotado de
 * separadores) y, ante un cúmulo completo, inspecciona el primer token
 * posterior: un dígito ASCII 1–5 o un numeral romano I–V eleva el
 * total a 5 + valor.
 */
#[must_use]
pub fn stars10_from_text(raw_input: &str) -> i64 {
    let digit_leveled = normalize_weird_digits(raw_input);
    let character_stream: Vec<char> = digit_leveled.chars().collect();

    let window_start = character_stream.len().saturating_sub(TEXT_SEARCH_WINDOW);
    let window = &character_stream[window_start..];

    let last_star_position = match window.iter().rposition(|c| is_star_glyph(*c)) {
        Some(position) => position,
        None => return 0,
    };

    // Caminata hacia atrás desde el último glifo del cúmulo.
    let mut counted_stars: i64 = 1;
    let mut separator_budget = SEPARATOR_BUDGET;
    let mut scan_position = last_star_position;

    while counted_stars < 5 && scan_position > 0 {
        scan_position -= 1;
        let candidate = window[scan_position];

        if is_star_glyph(candidate) {
            counted_stars += 1;
        } else if is_cluster_separator(candidate) && separator_budget > 0 {
            separator_budget -= 1;
        } else {
            break;
        }
    }

    if counted_stars < 5 {
        return counted_stars;
    }

    // Cúmulo completo: el primer token posterior puede declarar masters.
    let trailing_token = first_token_after(window, last_star_position);
    match trailing_token {
        Some(token) => {
            if token.len() == 1 {
                if let Some(digit) = token.chars().next().and_then(|c| c.to_digit(10)) {
                    if (1..=5).contains(&digit) {
                        return 5 + i64::from(digit);
                    }
                }
            }
            if let Some(roman_value) = roman_to_int(&token) {
                if (1..=5).contains(&roman_value) {
                    return 5 + i64::from(roman_value);
                }
            }
            5
        }
        None => 5,
    }
}

/// Separadores tolerados dentro y alrededor del cúmulo estelar.
fn is_cluster_separator(candidate: char) -> bool {
    candidate.is_whitespace()
        || matches!(
            candidate,
            '.' | ',' | ':' | ';' | '-' | '_' | '|' | '(' | ')' | '[' | ']' | '\'' | '"' | '+'
                | '*' | '~' | '·'
        )
}

/// Primer token (corrida sin separadores) tras la posición dada.
fn first_token_after(window: &[char], cluster_end: usize) -> Option<String> {
    let mut position = cluster_end + 1;

    while position < window.len() && is_cluster_separator(window[position]) {
        position += 1;
    }

    let token_start = position;
    while position < window.len()
        && !is_cluster_separator(window[position])
        && !is_star_glyph(window[position])
    {
        position += 1;
    }

    if position > token_start {
        Some(window[token_start..position].iter().collect())
    } else {
        None
    }
}

// FIN DEL ARCHIVO [libs/core/signature-engine/src/stars.rs]
