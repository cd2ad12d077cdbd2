// [apps/orchestrator/src/main.rs]
/*!
 * =================================================================
 * APARATO: ORCHESTRATOR MAIN ENTRY POINT (V5.2 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L3)
 * RESPONSABILIDAD: BOOTSTRAP DE INFRAESTRUCTURA E IGNICIÓN SEGURA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ENV FIRST: Hidratación dotenv antes de toda lectura de entorno.
 * 2. OBSERVABILITY FIRST: Heimdall se nivela antes del primer enlace
 *    de red para que la ignición completa deje rastro.
 * 3. ZERO ABBREVIATIONS: Nomenclatura nominal absoluta.
 * =================================================================
 */

use dotenvy::dotenv;
use tasador_orchestrator::prelude::*;
use tasador_shared_heimdall::init_tracing;
use tracing::info;

/**
 * Punto de ignición supremo del binario del Orquestador.
 */
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. CARGA DE ENTORNO SOBERANO
    // Hidrata las variables de .env en el espacio de nombres del proceso.
    dotenv().ok();

    // 2. INICIALIZACIÓN DE OBSERVABILIDAD NEURAL (HEIMDALL)
    init_tracing("tasador_orchestrator");

    // 3. CONFIGURACIÓN DEL RUNTIME SOBERANO
    let runtime_orchestrator = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime_orchestrator.block_on(async {
        info!("🛰️  [COMMAND_CENTER]: Market mirror ignition sequence starting...");

        // 4. ADQUISICIÓN DE COORDENADAS TÁCTICAS
        let service_configuration = ServiceConfig::from_environment()
            .expect("CRITICAL_FAULT: Environment hydration failed.");

        // 5. CONSTRUCCIÓN DEL KERNEL SOBERANO (ESTRATO L1-APP)
        let kernel_instance = OrchestratorKernel::ignite(service_configuration).await;

        // 6. IGNICIÓN DE OPERACIONES DE MERCADO
        info!("🚀 [TASADOR_ONLINE]: System fully operational.");
        kernel_instance.launch_market_operations().await;

        Ok(())
    })
}
// FIN DEL ARCHIVO [apps/orchestrator/src/main.rs]
