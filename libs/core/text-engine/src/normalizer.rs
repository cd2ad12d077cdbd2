// [libs/core/text-engine/src/normalizer.rs]
/*!
 * =================================================================
 * APARATO: SOVEREIGN TEXT NORMALIZER (V4.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: PLEGADO NFKC, ESCAPES DE COLOR Y CLAVES LIMPIAS
 *
 * VISION HIPER-HOLÍSTICA:
 * El feed de subastas decora los nombres con códigos de color heredados
 * (signo de párrafo + carácter) y tipografía Unicode de compatibilidad.
 * Este aparato reduce cualquier nombre decorado a su esqueleto textual
 * determinista, base de toda clave de agrupación del sistema.
 * =================================================================
 */

use unicode_normalization::UnicodeNormalization;

/// Marcador de escape de color heredado del motor de render del juego.
const COLOR_ESCAPE_MARKER: char = '\u{00A7}';

/// Apóstrofes tipográficos plegados hacia el apóstrofe recto ASCII.
const CURLY_APOSTROPHES: [char; 2] = ['\u{2018}', '\u{2019}'];

/**
 * Elimina las secuencias de escape de color (marcador + un carácter).
 *
 * El carácter que sigue al marcador es el código de color y cae junto
 * con él; un marcador huérfano al final de la cadena también cae.
 */
#[must_use]
pub fn strip_color_codes(raw_input: &str) -> String {
    let mut stripped_output = String::with_capacity(raw_input.len());
    let mut character_stream = raw_input.chars();

    while let Some(current_character) = character_stream.next() {
        if current_character == COLOR_ESCAPE_MARKER {
            // El código de color acompaña al marcador hacia el vacío.
            let _ = character_stream.next();
        } else {
            stripped_output.push(current_character);
        }
    }

    stripped_output
}

/**
 * Derivación `clean_text`: esqueleto textual del nombre decorado.
 *
 * Secuencia soberana:
 * 1. Purga de escapes de color.
 * 2. Plegado de compatibilidad Unicode (NFKC).
 * 3. Apóstrofes tipográficos -> apóstrofe recto.
 * 4. Caída de todo carácter que no sea letra, dígito, espacio o apóstrofe.
 * 5. Colapso de espacios en blanco contiguos.
 */
#[must_use]
pub fn clean_text(raw_input: &str) -> String {
    let color_free = strip_color_codes(raw_input);

    let folded: String = color_free
        .nfkc()
        .map(|folded_character| {
            if CURLY_APOSTROPHES.contains(&folded_character) {
                '\''
            } else {
                folded_character
            }
        })
        .filter(|candidate| {
            candidate.is_alphanumeric() || candidate.is_whitespace() || *candidate == '\''
        })
        .collect();

    collapse_whitespace(&folded)
}

/**
 * Derivación `norm_key`: clave de comparación insensible a tipografía.
 *
 * Guiones y guiones bajos actúan como separadores de palabra y deben
 * transicionar a espacio ANTES del filtrado de `clean_text` (que de otro
 * modo los haría colapsar dos palabras en una).
 */
#[must_use]
pub fn norm_key(raw_input: &str) -> String {
    let separator_leveled: String = raw_input
        .chars()
        .map(|candidate| match candidate {
            '-' | '_' => ' ',
            other => other,
        })
        .collect();

    let cleaned = clean_text(&separator_leveled);

    let lowered_no_apostrophe: String = cleaned
        .to_lowercase()
        .chars()
        .filter(|candidate| *candidate != '\'')
        .collect();

    collapse_whitespace(&lowered_no_apostrophe)
}

/// Colapsa cualquier secuencia de espacios en blanco a un único espacio.
#[must_use]
pub fn collapse_whitespace(raw_input: &str) -> String {
    raw_input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color_codes_drops_marker_and_code() {
        assert_eq!(strip_color_codes("§6Necron's Blade"), "Necron's Blade");
        assert_eq!(strip_color_codes("§aHyperion §7(Clean)"), "Hyperion (Clean)");
        // Marcador huérfano al final de la cadena
        assert_eq!(strip_color_codes("Hyperion§"), "Hyperion");
    }

    #[test]
    fn test_clean_text_drops_glyphs_and_collapses() {
        assert_eq!(clean_text("✪✪✪ Necron's   Blade"), "Necron's Blade");
        assert_eq!(clean_text("§dHeroic  Hyperion ✯"), "Heroic Hyperion");
    }

    #[test]
    fn test_clean_text_folds_curly_apostrophes() {
        assert_eq!(clean_text("Necron\u{2019}s Blade"), "Necron's Blade");
    }

    #[test]
    fn test_norm_key_levels_separators_and_case() {
        assert_eq!(norm_key("Tier_Boost"), "tier boost");
        assert_eq!(norm_key("First-Strike"), "first strike");
        assert_eq!(norm_key("Necron's Blade"), "necrons blade");
    }

    #[test]
    fn test_norm_key_is_idempotent() {
        let first_pass = norm_key("§6Withered  Necron's_Blade");
        assert_eq!(norm_key(&first_pass), first_pass, "norm_key debe ser estable");
    }
}
// FIN DEL ARCHIVO [libs/core/text-engine/src/normalizer.rs]
