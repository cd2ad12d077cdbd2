// [apps/orchestrator/src/config.rs]
/*!
 * =================================================================
 * APARATO: SERVICE CONFIGURATION SNAPSHOT (V5.1 - MARKET GOLD)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L1-APP)
 * RESPONSABILIDAD: CAPTURA TIPADA DEL ENTORNO DE DESPLIEGUE
 *
 * VISION HIPER-HOLÍSTICA:
 * El entorno se lee UNA vez en la ignición hacia un snapshot
 * inmutable. Variables obligatorias ausentes abortan la ignición con
 * rastro fatal; las opcionales degradan a sus valores nominales.
 * =================================================================
 */

use anyhow::{Context, Result};
use std::env;

/// Valores nominales del despliegue.
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.hypixel.net/skyblock";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_INGEST_INTERVAL_MS: u64 = 120_000;
const DEFAULT_MAX_PAGES: i64 = 200;
const DEFAULT_ALIVE_WINDOW_MS: i64 = 480_000;
const DEFAULT_UNSEEN_GRACE_MS: i64 = 60_000;
const DEFAULT_INTER_PAGE_DELAY_MS: u64 = 90;

/// Snapshot inmutable de configuración del servicio.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub database_access_token: Option<String>,
    pub upstream_base_url: String,
    pub upstream_api_key: String,
    pub listening_port: u16,
    /// Cadencia del ciclo de ingesta (ms).
    pub ingest_interval_ms: u64,
    /// Techo duro de páginas por snapshot.
    pub max_pages: i64,
    /// Ventana de vida de un BIN para el escaneo en vivo (ms).
    pub alive_window_ms: i64,
    /// Gracia antes de sellar una subasta no avistada (ms).
    pub unseen_grace_ms: i64,
    /// Cortesía entre páginas consecutivas del feed (ms).
    pub inter_page_delay_ms: u64,
}

impl ServiceConfig {
    /**
     * Hidrata el snapshot desde el entorno del proceso.
     *
     * # Errors:
     * `DATABASE_URL` y `UPSTREAM_API_KEY` son mandatorias; su ausencia
     * aborta la ignición.
     */
    pub fn from_environment() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .context("CRITICAL_FAULT: DATABASE_URL not defined in runtime environment")?;
        let upstream_api_key = env::var("UPSTREAM_API_KEY")
            .context("CRITICAL_FAULT: UPSTREAM_API_KEY not defined in runtime environment")?;

        Ok(Self {
            database_url,
            database_access_token: env::var("TURSO_AUTH_TOKEN").ok(),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_api_key,
            listening_port: parse_env("PORT", DEFAULT_PORT),
            ingest_interval_ms: parse_env("INGEST_INTERVAL_MS", DEFAULT_INGEST_INTERVAL_MS),
            max_pages: parse_env("MAX_PAGES", DEFAULT_MAX_PAGES),
            alive_window_ms: parse_env("ALIVE_WINDOW_MS", DEFAULT_ALIVE_WINDOW_MS),
            unseen_grace_ms: parse_env("UNSEEN_GRACE_MS", DEFAULT_UNSEEN_GRACE_MS),
            inter_page_delay_ms: parse_env("INTER_PAGE_DELAY_MS", DEFAULT_INTER_PAGE_DELAY_MS),
        })
    }
}

/// Variable opcional con degradación silenciosa al valor nominal.
fn parse_env<T: std::str::FromStr>(variable_name: &str, nominal_value: T) -> T {
    env::var(variable_name)
        .ok()
        .and_then(|raw_value| raw_value.trim().parse::<T>().ok())
        .unwrap_or(nominal_value)
}
// FIN DEL ARCHIVO [apps/orchestrator/src/config.rs]
