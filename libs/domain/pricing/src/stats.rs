// [libs/domain/pricing/src/stats.rs]
/*!
 * =================================================================
 * APARATO: PRICE POOL STATISTICS (V3.1 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: MEDIANA Y PERCENTILES SOBRE POOLS DE PRECIOS
 *
 * VISION HIPER-HOLÍSTICA:
 * Los pools llegan como precios finales enteros sin ordenar. El
 * percentil usa el método de rango más cercano sobre el pool ordenado:
 * determinista, sin interpolación flotante y estable ante duplicados.
 * =================================================================
 */

/// Cotas percentiles del rango presentado al usuario.
pub const RANGE_LOW_PERCENTILE: f64 = 0.15;
pub const RANGE_HIGH_PERCENTILE: f64 = 0.85;

/// Resumen estadístico de un pool de precios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolSummary {
    pub median: Option<i64>,
    pub range_low: Option<i64>,
    pub range_high: Option<i64>,
    pub count: i64,
}

impl PoolSummary {
    /**
     * Resume un pool de precios: mediana y rango percentil [15, 85].
     *
     * Un pool vacío produce el resumen vacío; un pool unitario colapsa
     * mediana y ambas cotas sobre su único elemento.
     */
    #[must_use]
    pub fn from_pool(pool: &[i64]) -> Self {
        if pool.is_empty() {
            return Self::default();
        }

        let mut sorted_pool = pool.to_vec();
        sorted_pool.sort_unstable();

        Self {
            median: median_of_sorted(&sorted_pool),
            range_low: percentile_of_sorted(&sorted_pool, RANGE_LOW_PERCENTILE),
            range_high: percentile_of_sorted(&sorted_pool, RANGE_HIGH_PERCENTILE),
            count: sorted_pool.len() as i64,
        }
    }
}

/// Mediana sobre un pool sin ordenar; pares promedian los centrales.
#[must_use]
pub fn median(pool: &[i64]) -> Option<i64> {
    let mut sorted_pool = pool.to_vec();
    sorted_pool.sort_unstable();
    median_of_sorted(&sorted_pool)
}

/// Percentil por rango más cercano sobre un pool sin ordenar.
#[must_use]
pub fn percentile(pool: &[i64], fraction: f64) -> Option<i64> {
    let mut sorted_pool = pool.to_vec();
    sorted_pool.sort_unstable();
    percentile_of_sorted(&sorted_pool, fraction)
}

fn median_of_sorted(sorted_pool: &[i64]) -> Option<i64> {
    if sorted_pool.is_empty() {
        return None;
    }

    let middle = sorted_pool.len() / 2;
    if sorted_pool.len() % 2 == 1 {
        Some(sorted_pool[middle])
    } else {
        // Promedio de los dos centrales, truncado hacia abajo.
        Some((sorted_pool[middle - 1] + sorted_pool[middle]) / 2)
    }
}

fn percentile_of_sorted(sorted_pool: &[i64], fraction: f64) -> Option<i64> {
    if sorted_pool.is_empty() {
        return None;
    }

    let clamped_fraction = fraction.clamp(0.0, 1.0);
    let scaled_rank = clamped_fraction * sorted_pool.len() as f64;

    // Rango más cercano con tolerancia al ruido binario de f64: un
    // producto que cae a un epsilon de un entero cuenta como exacto.
    let nearest_rank = if (scaled_rank - scaled_rank.round()).abs() < 1e-9 {
        scaled_rank.round() as usize
    } else {
        scaled_rank.ceil() as usize
    }
    .max(1);

    Some(sorted_pool[nearest_rank.min(sorted_pool.len()) - 1])
}

// FIN DEL ARCHIVO [libs/domain/pricing/src/stats.rs]
