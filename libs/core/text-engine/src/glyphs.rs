// [libs/core/text-engine/src/glyphs.rs]
/*!
 * =================================================================
 * APARATO: STELLAR GLYPH REGISTRY (V2.0 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: CATÁLOGO DE GLIFOS ESTELARES Y DETECCIÓN DE DECORACIÓN
 * =================================================================
 */

/// Glifos estelares y circulares usados como marcas de mejora en los
/// nombres e historiales de lore. El conjunto es cerrado; cualquier
/// adición upstream requiere nivelarlo junto al parser de estrellas.
pub const STAR_GLYPHS: [char; 11] = [
    '✪', '★', '☆', '✯', '✰', '●', '⬤', '○', '◉', '◎', '◍',
];

/// Determina si el carácter pertenece al catálogo estelar.
#[must_use]
pub fn is_star_glyph(candidate: char) -> bool {
    STAR_GLYPHS.contains(&candidate)
}

/// Detecta si la cadena porta al menos un glifo estelar.
#[must_use]
pub fn contains_star_glyph(raw_input: &str) -> bool {
    raw_input.chars().any(is_star_glyph)
}

/// Elimina todo glifo estelar de la cadena, preservando el resto.
#[must_use]
pub fn strip_star_glyphs(raw_input: &str) -> String {
    raw_input.chars().filter(|candidate| !is_star_glyph(*candidate)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_membership() {
        for glyph in STAR_GLYPHS {
            assert!(is_star_glyph(glyph));
        }
        assert!(!is_star_glyph('*'));
        assert!(!is_star_glyph('5'));
    }

    #[test]
    fn test_strip_star_glyphs_preserves_text() {
        assert_eq!(strip_star_glyphs("✪✪✪✪✪ Necron's Blade"), " Necron's Blade");
        assert_eq!(strip_star_glyphs("Hyperion ◉◎"), "Hyperion ");
    }

    #[test]
    fn test_detection() {
        assert!(contains_star_glyph("Blade ✯"));
        assert!(!contains_star_glyph("Blade"));
    }
}
// FIN DEL ARCHIVO [libs/core/text-engine/src/glyphs.rs]
