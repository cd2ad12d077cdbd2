// [tests/mirror/apps/orchestrator/services/recommend_flow.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DEL FLUJO DE RECOMENDACIÓN (V1.3 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L4-MIRROR
 * RESPONSABILIDAD: AUDITORÍA HISTORIAL -> MATCHER -> POOLS -> BIN VIVO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. POOL DISCIPLINE: Una venta exacta y una venta a una estrella de
 *    distancia deben caer en pools distintos; la mediana viene del
 *    pool exacto.
 * 2. PODIUM ORDER: El ejemplar perfecto precede al parcial.
 * 3. LIVE SCAN: El BIN vivo más barato que supera el matcher es el
 *    retornado.
 * =================================================================
 */

use std::collections::BTreeMap;

use tasador_domain_models::{AuctionRow, SaleRow};
use tasador_infra_db::repositories::{AuctionRepository, SaleRepository};
use tasador_infra_db::TursoClient;
use tasador_orchestrator::config::ServiceConfig;
use tasador_orchestrator::services::ingest::now_ms;
use tasador_orchestrator::services::{RecommendRequest, RecommenderService};
use tasador_orchestrator::state::AppState;

fn test_configuration() -> ServiceConfig {
    ServiceConfig {
        database_url: "file:mem_recommend_flow_v13?mode=memory&cache=shared".into(),
        database_access_token: None,
        upstream_base_url: "http://localhost".into(),
        upstream_api_key: "observer".into(),
        listening_port: 0,
        ingest_interval_ms: 120_000,
        max_pages: 200,
        alive_window_ms: 480_000,
        unseen_grace_ms: 60_000,
        inter_page_delay_ms: 0,
    }
}

fn forge_sale(uuid: &str, final_price: i64, ended_ts: i64, signature: &str) -> SaleRow {
    SaleRow {
        uuid: uuid.to_string(),
        item_name: "✪✪✪✪✪ Necron's Blade".into(),
        item_key: "necrons blade".into(),
        bin: true,
        final_price,
        ended_ts,
        tier: Some("LEGENDARY".into()),
        signature: Some(signature.to_string()),
        item_lore: None,
        item_bytes: None,
    }
}

fn forge_live_bin(uuid: &str, starting_bid: i64, last_seen_ts: i64, signature: &str) -> AuctionRow {
    AuctionRow {
        uuid: uuid.to_string(),
        item_name: "✪✪✪✪✪ Necron's Blade".into(),
        item_key: "necrons blade".into(),
        bin: true,
        start_ts: last_seen_ts - 1_000,
        end_ts: last_seen_ts + 600_000,
        starting_bid,
        highest_bid: 0,
        tier: Some("LEGENDARY".into()),
        item_lore: None,
        item_bytes: None,
        last_seen_ts,
        signature: Some(signature.to_string()),
        is_ended: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * Escenario canónico: dos ventas (exacta y a una estrella), un BIN
     * vivo compatible; consulta stars10=10 con sharpness 7.
     */
    #[tokio::test]
    async fn certify_recommendation_flow_v1_3() {
        println!("\n📈 [INICIO]: Auditoría del Flujo de Recomendación V1.3...");
        let mut accumulated_anomalies_count = 0u32;

        // 1. SETUP: ledger volátil + estado de aplicación
        let configuration = test_configuration();
        let database_client = TursoClient::connect(&configuration.database_url, None)
            .await
            .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");
        let application_state = AppState::new(database_client.clone(), configuration);

        let sale_repository = SaleRepository::new(database_client.clone());
        let auction_repository = AuctionRepository::new(database_client.clone());

        let recent_ts = now_ms() - 10_000;
        let perfect_sale = forge_sale(
            "R_SALE_PERFECT",
            1_000_000,
            recent_ts,
            "tier:legendary|dstars:5|mstars:5|stars10:10|sharpness:7",
        );
        let partial_sale = forge_sale(
            "R_SALE_PARTIAL",
            800_000,
            recent_ts - 5_000,
            "tier:legendary|dstars:5|mstars:4|stars10:9|sharpness:7",
        );
        sale_repository
            .finalize_batch(&[perfect_sale, partial_sale])
            .await
            .expect("PROMOTION_FAULT: history seed");

        auction_repository
            .bulk_upsert_auctions(&[forge_live_bin(
                "R_LIVE_BIN",
                950_000,
                now_ms(),
                "tier:legendary|dstars:5|mstars:5|stars10:10|sharpness:7",
            )])
            .await
            .expect("DISPATCH_FAULT: live listing seed");

        // 2. CONSULTA NÚCLEO
        println!("   🧪 Fase 1: Despachando consulta stars10=10, sharpness 7...");
        let mut requested_enchants = BTreeMap::new();
        requested_enchants.insert("sharpness".to_string(), 7i64);

        let request = RecommendRequest {
            item_key: "necrons blade".into(),
            stars10: 10,
            enchants: requested_enchants,
            filters: Default::default(),
        };

        let recommender = RecommenderService::new(application_state);
        let response = recommender.recommend(&request).await.expect("RECOMMEND_FAULT: query");

        // 3. AUDITORÍA DE POOLS Y MEDIANA
        if response.recommended == Some(1_000_000) && response.range_count == 1 {
            println!("      ✅ Mediana del Pool Exacto: Certificada.");
        } else {
            accumulated_anomalies_count += 1;
            println!(
                "      ❌ FALLO: recommended={:?} range_count={}",
                response.recommended, response.range_count
            );
        }

        // 4. AUDITORÍA DEL PODIO
        let podium_valid = response.top3.len() == 2
            && response.top3[0].final_price == 1_000_000
            && response.top3[0].match_quality == "perfect"
            && response.top3[1].final_price == 800_000
            && response.top3[1].match_quality == "partial"
            && response.top3[0].score > response.top3[1].score;

        if podium_valid {
            println!("      ✅ Orden del Podio: Certificado (perfect > partial).");
        } else {
            accumulated_anomalies_count += 1;
            println!("      ❌ FALLO: podio inesperado -> {:?}", response.top3.len());
        }

        // 5. AUDITORÍA DEL BIN VIVO
        let live_valid = response
            .live
            .as_ref()
            .map(|live| live.uuid == "R_LIVE_BIN" && live.starting_bid == 950_000)
            .unwrap_or(false);

        if live_valid {
            println!("      ✅ Mejor BIN Vivo: Certificado.");
        } else {
            accumulated_anomalies_count += 1;
            println!("      ❌ FALLO: BIN vivo ausente o incorrecto.");
        }

        // 6. AUDITORÍA DE ORIENTACIÓN (clave desconocida)
        println!("   🧪 Fase 2: Clave desconocida debe orientar, no fallar...");
        let unknown_request = RecommendRequest {
            item_key: "itemfantasma inexistente".into(),
            ..Default::default()
        };
        let guidance = recommender
            .recommend(&unknown_request)
            .await
            .expect("RECOMMEND_FAULT: guidance query");

        if guidance.note.is_some() && guidance.recommended.is_none() && guidance.top3.is_empty() {
            println!("      ✅ Respuesta de Orientación: Certificada.");
        } else {
            accumulated_anomalies_count += 1;
            println!("      ❌ FALLO: la clave desconocida no orientó.");
        }

        let final_verdict_label =
            if accumulated_anomalies_count == 0 { "GOLD_MASTER" } else { "DEGRADED" };
        println!("\n🏁 [INFORME]: Veredicto del flujo de recomendación: {}", final_verdict_label);

        assert_eq!(
            accumulated_anomalies_count, 0,
            "La disciplina de pools del recomendador ha sido comprometida."
        );
    }
}
// FIN DEL ARCHIVO [tests/mirror/apps/orchestrator/services/recommend_flow.test.rs]
