// [apps/orchestrator/src/state/mod.rs]
/*!
 * =================================================================
 * APARATO: APPLICATION NEURAL STATE (V5.2 - GUARD ACTIVE)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: ESTADO COMPARTIDO Y GUARDIA DE CICLO DE INGESTA
 *
 * VISION HIPER-HOLÍSTICA:
 * El cliente de base de datos es el único recurso compartido del
 * sistema. La guardia booleana garantiza que el ciclo de ingesta
 * jamás se solape consigo mismo, y la bandera de apagado permite el
 * drenaje ordenado ante SIGTERM/SIGINT.
 * =================================================================
 */

use crate::config::ServiceConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tasador_infra_db::TursoClient;

#[derive(Clone)]
pub struct AppState {
    pub database_client: TursoClient,
    pub config: Arc<ServiceConfig>,
    /// Guardia de no-solapamiento del ciclo de ingesta.
    ingest_cycle_guard: Arc<AtomicBool>,
    /// Bandera de drenaje ordenado del proceso.
    shutdown_flag: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(database_client: TursoClient, config: ServiceConfig) -> Self {
        Self {
            database_client,
            config: Arc::new(config),
            ingest_cycle_guard: Arc::new(AtomicBool::new(false)),
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Intenta adquirir la guardia del ciclo; falso si otro ciclo vive.
    #[must_use]
    pub fn try_begin_ingest_cycle(&self) -> bool {
        self.ingest_cycle_guard
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Libera la guardia del ciclo al finalizar (éxito o colapso).
    pub fn end_ingest_cycle(&self) {
        self.ingest_cycle_guard.store(false, Ordering::SeqCst);
    }

    /// Verdadero mientras un ciclo de ingesta está en vuelo.
    #[must_use]
    pub fn ingest_cycle_active(&self) -> bool {
        self.ingest_cycle_guard.load(Ordering::SeqCst)
    }

    /// Solicita el drenaje ordenado del proceso.
    pub fn request_shutdown(&self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }
}

// FIN DEL ARCHIVO [apps/orchestrator/src/state/mod.rs]
