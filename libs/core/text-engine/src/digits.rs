// [libs/core/text-engine/src/digits.rs]
/*!
 * =================================================================
 * APARATO: EXOTIC DIGIT MAPPER (V3.1 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L1)
 * RESPONSABILIDAD: TRADUCCIÓN DE DÍGITOS UNICODE EXÓTICOS A ASCII
 *
 * VISION HIPER-HOLÍSTICA:
 * Los vendedores decoran los nombres de ítems con dígitos circulados,
 * de ancho completo, superíndices y subíndices. Este aparato los pliega
 * a su valor aritmético real para que el parser de estrellas y la clave
 * canónica operen sobre ASCII puro.
 *
 * Familias niveladas (primer código de fila -> valor):
 *   ⓪①…⑨ -> 0–9   |   ０…９ -> 0–9   |   ➊…➓ -> 1–10
 *   ❶…❿ -> 1–10   |   ⓵…⓾ -> 1–10   |   ⁰…⁹ -> 0–9   |   ₀…₉ -> 0–9
 * =================================================================
 */

/**
 * Resuelve el valor aritmético de un dígito Unicode exótico.
 *
 * Retorna `None` para cualquier carácter fuera de las siete familias
 * niveladas (incluyendo los dígitos ASCII ordinarios).
 */
#[must_use]
pub fn weird_digit_value(candidate: char) -> Option<u8> {
    let code_point = candidate as u32;

    match code_point {
        // ⓪ CIRCLED DIGIT ZERO
        0x24EA => Some(0),
        // ①..⑨ CIRCLED DIGIT ONE..NINE
        0x2460..=0x2468 => Some((code_point - 0x2460 + 1) as u8),
        // ０..９ FULLWIDTH DIGIT ZERO..NINE
        0xFF10..=0xFF19 => Some((code_point - 0xFF10) as u8),
        // ➊..➓ DINGBAT NEGATIVE CIRCLED SANS-SERIF ONE..TEN
        0x278A..=0x2793 => Some((code_point - 0x278A + 1) as u8),
        // ❶..❿ DINGBAT NEGATIVE CIRCLED ONE..TEN
        0x2776..=0x277F => Some((code_point - 0x2776 + 1) as u8),
        // ⓵..⓾ DOUBLE CIRCLED ONE..TEN
        0x24F5..=0x24FE => Some((code_point - 0x24F5 + 1) as u8),
        // Superíndices: ⁰ ¹ ² ³ ⁴..⁹
        0x2070 => Some(0),
        0x00B9 => Some(1),
        0x00B2 => Some(2),
        0x00B3 => Some(3),
        0x2074..=0x2079 => Some((code_point - 0x2074 + 4) as u8),
        // Subíndices: ₀..₉
        0x2080..=0x2089 => Some((code_point - 0x2080) as u8),
        _ => None,
    }
}

/**
 * Reemplaza todo dígito exótico por su representación decimal ASCII.
 *
 * Los valores 10 de las familias dingbat/doble-circulado expanden a dos
 * caracteres ("10"); el resto de la cadena pasa intacto.
 */
#[must_use]
pub fn normalize_weird_digits(raw_input: &str) -> String {
    let mut normalized_output = String::with_capacity(raw_input.len());

    for current_character in raw_input.chars() {
        match weird_digit_value(current_character) {
            Some(arithmetic_value) => {
                normalized_output.push_str(&arithmetic_value.to_string());
            }
            None => normalized_output.push(current_character),
        }
    }

    normalized_output
}

/// Detecta si la cadena contiene al menos un dígito exótico nivelable.
#[must_use]
pub fn contains_weird_digit(raw_input: &str) -> bool {
    raw_input.chars().any(|candidate| weird_digit_value(candidate).is_some())
}

// FIN DEL ARCHIVO [libs/core/text-engine/src/digits.rs]
