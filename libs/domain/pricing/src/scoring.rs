// [libs/domain/pricing/src/scoring.rs]
/*!
 * =================================================================
 * APARATO: CANDIDATE SCORING MATRIX (V3.1 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: PUNTAJE DE PENALIZACIÓN Y ORDEN DEL TOP-3
 *
 * VISION HIPER-HOLÍSTICA:
 * Cada candidato histórico recibe un puntaje en [0, 10]: penalización
 * de 2 por unidad de distancia estelar y de 1 por unidad de distancia
 * de encantamiento, acumuladas. El orden final del top-3 es
 * (puntaje desc, fecha de cierre desc, precio asc): ante igual
 * fidelidad gana el dato más reciente y más barato.
 * =================================================================
 */

use std::cmp::Ordering;

/// Puntaje máximo alcanzable por un candidato sin penalizaciones.
const MAX_CANDIDATE_SCORE: i64 = 10;

/// Peso de la distancia estelar dentro de la penalización.
const STARS_PENALTY_WEIGHT: i64 = 2;

/// Claves de ordenamiento de un candidato rankeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankableCandidate {
    pub score: i64,
    pub ended_ts: i64,
    pub final_price: i64,
}

/**
 * Puntaje de ranking: `max(0, 10 - (2·Δestrellas + Σ Δencantamiento))`.
 */
#[must_use]
pub fn score_candidate(stars_distance: i64, enchant_distances: &[i64]) -> i64 {
    let enchant_penalty: i64 = enchant_distances.iter().sum();
    let total_penalty = STARS_PENALTY_WEIGHT * stars_distance + enchant_penalty;
    (MAX_CANDIDATE_SCORE - total_penalty).max(0)
}

/**
 * Comparador del top-3: puntaje desc, cierre desc, precio asc.
 */
#[must_use]
pub fn rank_ordering(first: &RankableCandidate, second: &RankableCandidate) -> Ordering {
    second
        .score
        .cmp(&first.score)
        .then(second.ended_ts.cmp(&first.ended_ts))
        .then(first.final_price.cmp(&second.final_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_penalties_accumulate() {
        assert_eq!(score_candidate(0, &[]), 10);
        assert_eq!(score_candidate(1, &[]), 8);
        assert_eq!(score_candidate(1, &[1, 1]), 6);
        // La penalización nunca hunde el puntaje bajo cero.
        assert_eq!(score_candidate(5, &[3, 3]), 0);
    }

    #[test]
    fn test_ordering_prefers_score_then_recency_then_price() {
        let strong = RankableCandidate { score: 10, ended_ts: 100, final_price: 900 };
        let weaker = RankableCandidate { score: 8, ended_ts: 200, final_price: 100 };
        assert_eq!(rank_ordering(&strong, &weaker), Ordering::Less);

        let older_twin = RankableCandidate { score: 10, ended_ts: 50, final_price: 100 };
        assert_eq!(rank_ordering(&strong, &older_twin), Ordering::Less);

        let pricier_twin = RankableCandidate { score: 10, ended_ts: 100, final_price: 950 };
        assert_eq!(rank_ordering(&strong, &pricier_twin), Ordering::Less);
    }

    #[test]
    fn test_sort_ranks_perfect_above_partial() {
        let mut candidates = vec![
            RankableCandidate { score: 8, ended_ts: 300, final_price: 800_000 },
            RankableCandidate { score: 10, ended_ts: 100, final_price: 1_000_000 },
        ];
        candidates.sort_by(rank_ordering);
        assert_eq!(candidates[0].score, 10);
    }
}
// FIN DEL ARCHIVO [libs/domain/pricing/src/scoring.rs]
