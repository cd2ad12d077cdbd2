// [libs/core/signature-engine/src/matcher.rs]
/*!
 * =================================================================
 * APARATO: THREE-STATE SIGNATURE MATCHER (V6.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE ENGINE (ESTRATO L2)
 * RESPONSABILIDAD: VEREDICTO PERFECT / PARTIAL / NONE POR CANDIDATO
 *
 * VISION HIPER-HOLÍSTICA:
 * El matcher gobierna a qué pool de precios contribuye cada venta
 * histórica. Filtros duros primero (cosméticos, tier, habilidad,
 * nivel mínimo de mascota); después distancias numéricas acotadas:
 * distancia 1 degrada a PARTIAL, distancia 2 o más expulsa.
 *
 * # Mathematical Proof (Filter Monotonicity):
 * Cada filtro adicional solo puede eliminar o degradar un veredicto,
 * jamás promoverlo: el conjunto PERFECT de una consulta es
 * subconjunto del PERFECT de cualquier consulta menos estricta.
 * =================================================================
 */

use std::collections::BTreeMap;

use crate::enchants::enchant_distance;
use crate::tokens::parse_signature;

/// Veredicto de calidad de coincidencia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    Perfect,
    Partial,
    None,
}

/// Paquete de filtros duros de la consulta. `None` y los valores
/// "none" del lado de la UI significan "sin restricción".
#[derive(Debug, Clone, Default)]
pub struct QueryFilters {
    pub tier: Option<String>,
    pub wither_impact: bool,
    pub dye: Option<String>,
    pub skin: Option<String>,
    pub petskin: Option<String>,
    pub pet_item: Option<String>,
    /// Nivel mínimo de mascota exigido; 0 desactiva el filtro.
    pub pet_level_min: i64,
}

impl QueryFilters {
    /// Verdadero cuando ningún filtro duro fue especificado.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.tier.is_none()
            && !self.wither_impact
            && self.dye.is_none()
            && self.skin.is_none()
            && self.petskin.is_none()
            && self.pet_item.is_none()
            && self.pet_level_min == 0
    }
}

/**
 * Evalúa una firma candidata contra la consulta completa.
 *
 * `requested_stars10` en [0,10] (0 = sin requisito) y
 * `requested_enchants` con claves ya canónicas.
 */
#[must_use]
pub fn match_signature(
    requested_stars10: i64,
    requested_enchants: &BTreeMap<String, i64>,
    filters: &QueryFilters,
    candidate_signature: &str,
) -> MatchQuality {
    // 1. FIRMA VACÍA: perfecta solo ante una consulta sin exigencias.
    if candidate_signature.trim().is_empty() {
        let query_is_empty =
            requested_stars10 == 0 && requested_enchants.is_empty() && filters.is_unconstrained();
        return if query_is_empty { MatchQuality::Perfect } else { MatchQuality::None };
    }

    let candidate = parse_signature(candidate_signature);
    let mut partial_flag = false;

    // 2. FILTROS DUROS (igualdad exacta; mascota por umbral)
    if let Some(required_tier) = &filters.tier {
        if candidate.tier.as_deref() != Some(required_tier.as_str()) {
            return MatchQuality::None;
        }
    }
    if filters.wither_impact && !candidate.wither_impact {
        return MatchQuality::None;
    }
    if let Some(required_dye) = &filters.dye {
        if candidate.dye.as_deref() != Some(required_dye.as_str()) {
            return MatchQuality::None;
        }
    }
    if let Some(required_skin) = &filters.skin {
        if candidate.skin.as_deref() != Some(required_skin.as_str()) {
            return MatchQuality::None;
        }
    }
    if let Some(required_petskin) = &filters.petskin {
        if candidate.petskin.as_deref() != Some(required_petskin.as_str()) {
            return MatchQuality::None;
        }
    }
    if let Some(required_pet_item) = &filters.pet_item {
        if candidate.pet_item.as_deref() != Some(required_pet_item.as_str()) {
            return MatchQuality::None;
        }
    }
    if filters.pet_level_min > 0 && candidate.pet_level < filters.pet_level_min {
        return MatchQuality::None;
    }

    // 3. DISTANCIA ESTELAR ACOTADA
    if requested_stars10 > 0 {
        let stars_distance = (candidate.stars10_or_zero() - requested_stars10).abs();
        match stars_distance {
            0 => {}
            1 => partial_flag = true,
            _ => return MatchQuality::None,
        }
    }

    // 4. DISTANCIAS DE ENCANTAMIENTO (ausencia expulsa)
    for (enchant_name, requested_level) in requested_enchants {
        let candidate_level = candidate.enchant_level(enchant_name);
        if candidate_level == 0 {
            return MatchQuality::None;
        }

        match enchant_distance(enchant_name, *requested_level, candidate_level) {
            0 => {}
            1 => partial_flag = true,
            _ => return MatchQuality::None,
        }
    }

    if partial_flag { MatchQuality::Partial } else { MatchQuality::Perfect }
}

// FIN DEL ARCHIVO [libs/core/signature-engine/src/matcher.rs]
