// INICIO DEL ARCHIVO [apps/orchestrator/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: ORCHESTRATOR SOVEREIGN KERNEL (V5.3 - GUARD ACTIVE)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA:
 * Actúa como la placa base donde se conectan todos los servicios: el
 * enlace al ledger, el daemon de espejo del feed y el transporte HTTP.
 * El drenaje ordenado garantiza que un SIGTERM deje terminar el ciclo
 * de ingesta en vuelo con un techo de 20 segundos.
 * =================================================================
 */

use crate::config::ServiceConfig;
use crate::routes::create_market_router;
use crate::services::IngestService;
use crate::state::AppState;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tasador_infra_db::TursoClient;
use tracing::{error, info, warn};

/// Techo del drenaje del ciclo en vuelo tras la señal de apagado.
const SHUTDOWN_DRAIN_CAP: Duration = Duration::from_secs(20);

/// Granularidad del sondeo de drenaje.
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct OrchestratorKernel {
    pub application_shared_state: AppState,
}

impl OrchestratorKernel {
    /**
     * Realiza la ignición del cliente táctico y el estado neural.
     * Establece la conexión al ledger antes de levantar servicios.
     */
    pub async fn ignite(service_configuration: ServiceConfig) -> Self {
        let database_client = TursoClient::connect(
            &service_configuration.database_url,
            service_configuration.database_access_token.clone(),
        )
        .await
        .expect("FATAL: Database link collapse. Ignition aborted.");

        Self {
            application_shared_state: AppState::new(database_client, service_configuration),
        }
    }

    /**
     * Lanza las operaciones autónomas: daemon de espejo y servidor HTTP.
     * Bloquea hasta el drenaje completo del proceso.
     */
    pub async fn launch_market_operations(self) {
        let shared_application_state = self.application_shared_state.clone();

        // --- 1. DAEMON DE ESPEJO DEL FEED (Estrato F) ---
        let ingest_service = IngestService::new(shared_application_state.clone());
        ingest_service.spawn_ingest_daemon().await;

        // --- 2. ESCUCHA DE SEÑALES DE DRENAJE (SIGTERM / SIGINT) ---
        let signal_state = shared_application_state.clone();
        tokio::spawn(async move {
            await_termination_signal().await;
            warn!("🛑 [KERNEL_DRAIN]: Termination signal observed; draining operations.");
            signal_state.request_shutdown();
        });

        // --- 3. IGNICIÓN DEL TRANSPORTE HTTP (AXUM) ---
        let market_router = create_market_router(shared_application_state.clone());

        let bind_address = SocketAddr::new(
            "0.0.0.0".parse::<IpAddr>().expect("dirección de enlace estática"),
            shared_application_state.config.listening_port,
        );

        info!("🚀 [KERNEL_ONLINE]: Market gateway listening at {}", bind_address);

        let tcp_listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .expect("CRITICAL_FAULT: Failed to bind network port.");

        let graceful_state = shared_application_state.clone();
        let serve_outcome = axum::serve(tcp_listener, market_router)
            .with_graceful_shutdown(async move {
                while !graceful_state.is_shutdown_requested() {
                    tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
                }
            })
            .await;

        if let Err(server_error) = serve_outcome {
            error!("💀 [KERNEL_COLLAPSE]: Runtime failure: {}", server_error);
            std::process::exit(1);
        }

        // --- 4. DRENAJE DEL CICLO EN VUELO (techo de 20 s) ---
        drain_inflight_cycle(&shared_application_state).await;
        info!("🏁 [KERNEL_OFFLINE]: Orderly shutdown complete.");
    }
}

/// Espera SIGINT o, en unix, SIGTERM.
async fn await_termination_signal() {
    #[cfg(unix)]
    {
        let mut sigterm_stream =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("instalación del stream SIGTERM");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm_stream.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Sondea la guardia de ingesta hasta su liberación o el techo del cap.
async fn drain_inflight_cycle(application_state: &AppState) {
    let drain_start = tokio::time::Instant::now();

    while application_state.ingest_cycle_active() {
        if drain_start.elapsed() >= SHUTDOWN_DRAIN_CAP {
            warn!("⏱️ [KERNEL_DRAIN]: Drain cap reached with a cycle still in flight.");
            break;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
// FIN DEL ARCHIVO [apps/orchestrator/src/kernel.rs]
