// [libs/core/text-engine/src/roman.rs]
/*!
 * =================================================================
 * APARATO: ROMAN NUMERAL DECODER (V2.0 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: NIVELES DE ENCANTAMIENTO EN NOTACIÓN ROMANA (I–XX)
 * =================================================================
 */

/// Techo nominal de nivel expresable en notación romana por la UI.
const MAX_ROMAN_LEVEL: i64 = 20;

/**
 * Decodifica un numeral romano I–XX a su valor aritmético.
 *
 * Acepta mayúsculas y minúsculas y aplica la regla sustractiva (IV, IX,
 * XIV...). Cualquier carácter fuera de {I, V, X} o un valor fuera del
 * rango [1, 20] retorna `None`.
 */
#[must_use]
pub fn roman_to_int(candidate: &str) -> Option<u32> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    let digit_values: Vec<i64> = trimmed
        .chars()
        .map(|roman_digit| match roman_digit.to_ascii_uppercase() {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            _ => None,
        })
        .collect::<Option<Vec<i64>>>()?;

    let mut accumulated_value: i64 = 0;
    for (position, current_value) in digit_values.iter().enumerate() {
        let next_is_greater = digit_values
            .get(position + 1)
            .map(|next_value| next_value > current_value)
            .unwrap_or(false);

        if next_is_greater {
            // Regla sustractiva: el dígito menor resta al mayor que sigue.
            accumulated_value -= current_value;
        } else {
            accumulated_value += current_value;
        }
    }

    if (1..=MAX_ROMAN_LEVEL).contains(&accumulated_value) {
        Some(accumulated_value as u32)
    } else {
        None
    }
}

// FIN DEL ARCHIVO [libs/core/text-engine/src/roman.rs]
