// [apps/snapshot-job/src/main.rs]
/**
 * =================================================================
 * APARATO: SNAPSHOT JOB SHELL (V3.1 - SOBERANO)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: ORQUESTACIÓN DE ARGUMENTOS Y UN CICLO DE ESPEJO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. LIBRARY SYNERGY: Consume el motor de ingesta desde la librería
 *    del orquestador; el binario es un orquestador puro y ligero.
 * 2. CRON READY: Un ciclo completo por invocación; el código de
 *    salida refleja el veredicto (0 = snapshot espejado, != 0 = ciclo
 *    abortado sin escrituras parciales).
 * 3. ERROR TRIAGE: 'anyhow' captura los fallos de red y persistencia.
 * =================================================================
 */

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

use tasador_infra_db::TursoClient;
use tasador_orchestrator::config::ServiceConfig;
use tasador_orchestrator::services::IngestService;
use tasador_orchestrator::state::AppState;
use tasador_shared_heimdall::init_tracing;

/// Configuración de argumentos del ciclo de espejo único.
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "3.1",
    about = "Espejo de mercado en forma job: un ciclo completo de ingesta y salida."
)]
struct CommandArguments {
    /// Cadena de conexión del ledger táctico (libSQL/Turso).
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Token de acceso para clusters remotos de Turso.
    #[arg(long, env = "TURSO_AUTH_TOKEN")]
    database_access_token: Option<String>,

    /// Endpoint raíz del proveedor del feed de subastas.
    #[arg(long, env = "UPSTREAM_BASE_URL", default_value = "https://api.hypixel.net/skyblock")]
    upstream_base_url: String,

    /// Credencial de consulta del proveedor.
    #[arg(long, env = "UPSTREAM_API_KEY")]
    upstream_api_key: String,

    /// Techo duro de páginas por snapshot.
    #[arg(long, env = "MAX_PAGES", default_value_t = 200)]
    max_pages: i64,

    /// Gracia antes de sellar una subasta no avistada (ms).
    #[arg(long, env = "UNSEEN_GRACE_MS", default_value_t = 60_000)]
    unseen_grace_ms: i64,

    /// Cortesía entre páginas consecutivas del feed (ms).
    #[arg(long, env = "INTER_PAGE_DELAY_MS", default_value_t = 90)]
    inter_page_delay_ms: u64,
}

impl CommandArguments {
    /// Proyecta los argumentos hacia el snapshot de configuración.
    fn into_service_configuration(self) -> ServiceConfig {
        ServiceConfig {
            database_url: self.database_url,
            database_access_token: self.database_access_token,
            upstream_base_url: self.upstream_base_url,
            upstream_api_key: self.upstream_api_key,
            // El job no levanta transporte HTTP ni daemon perpetuo.
            listening_port: 0,
            ingest_interval_ms: 0,
            max_pages: self.max_pages,
            alive_window_ms: 480_000,
            unseen_grace_ms: self.unseen_grace_ms,
            inter_page_delay_ms: self.inter_page_delay_ms,
        }
    }
}

/**
 * Punto de ignición del binario ejecutable.
 */
#[tokio::main]
async fn main() -> Result<()> {
    // 1. INICIALIZACIÓN DEL SISTEMA NERVIOSO (LOGGING)
    dotenvy::dotenv().ok();
    init_tracing("tasador_snapshot_job");

    info!("🗺️ [SNAPSHOT_JOB]: Initializing execution shell V3.1...");

    // 2. PARSEO DE DIRECTIVAS DE MANDO
    let cli_configuration = CommandArguments::parse();
    let service_configuration = cli_configuration.into_service_configuration();

    // 3. CONSTRUCCIÓN DEL MOTOR DE INGESTA
    let database_client = TursoClient::connect(
        &service_configuration.database_url,
        service_configuration.database_access_token.clone(),
    )
    .await?;

    let application_state = AppState::new(database_client, service_configuration);
    let ingestion_engine = IngestService::new(application_state.clone());

    // 4. EJECUCIÓN DE LA MISIÓN DE ESPEJO (un ciclo, con latido visual)
    let progress_heartbeat = ProgressBar::new_spinner();
    progress_heartbeat.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("plantilla estática de spinner"),
    );
    progress_heartbeat.set_message("Mirroring upstream snapshot into the market ledger...");
    progress_heartbeat.enable_steady_tick(Duration::from_millis(120));

    info!("🚀 [IGNITION]: Starting single mirror cycle.");

    // La guardia de ciclo aplica también en forma job.
    anyhow::ensure!(
        application_state.try_begin_ingest_cycle(),
        "CYCLE_GUARD: another cycle already holds the ledger"
    );
    let cycle_outcome = ingestion_engine.execute_ingestion_cycle().await;
    application_state.end_ingest_cycle();

    progress_heartbeat.finish_and_clear();

    let cycle_report = cycle_outcome?;
    info!(
        pages = cycle_report.pages_fetched,
        upserted = cycle_report.rows_upserted,
        sealed = cycle_report.unseen_sealed,
        promoted = cycle_report.sales_promoted,
        backfilled = cycle_report.keys_backfilled,
        "🏁 [SNAPSHOT_JOB]: Mirror cycle certified."
    );

    Ok(())
}
// FIN DEL ARCHIVO [apps/snapshot-job/src/main.rs]
