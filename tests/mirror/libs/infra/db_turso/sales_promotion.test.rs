// [tests/mirror/libs/infra/db_turso/sales_promotion.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE PROMOCIÓN A HISTORIAL (V1.2 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA EXACTAMENTE-UNA-VEZ Y FUSIÓN EN VENTAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EXACTLY-ONCE: Un UUID promovido desaparece de la selección de
 *    finalización; re-finalizarlo es un no-op estructural.
 * 2. TOMBSTONE SEMANTICS: La subasta de origen permanece sellada como
 *    lápida tras la promoción.
 * 3. PET_ITEM RULE: Una firma entrante que introduce pet_item
 *    desplaza a la existente en la venta.
 * =================================================================
 */

use tasador_domain_models::{AuctionRow, SaleRow};
use tasador_infra_db::repositories::{AuctionRepository, SaleRepository};
use tasador_infra_db::TursoClient;

fn forge_expired_auction(uuid: &str) -> AuctionRow {
    AuctionRow {
        uuid: uuid.to_string(),
        item_name: "[Lvl 100] Ender Dragon".into(),
        item_key: "ender dragon".into(),
        bin: true,
        start_ts: 1_000,
        end_ts: 5_000,
        starting_bid: 600_000_000,
        highest_bid: 0,
        tier: Some("LEGENDARY".into()),
        item_lore: Some("§6Held Item: ✦ Tier Boost".into()),
        item_bytes: None,
        last_seen_ts: 4_000,
        signature: Some("tier:legendary|pet_level:100".into()),
        is_ended: false,
    }
}

fn sale_of(auction: &AuctionRow, signature: Option<&str>) -> SaleRow {
    SaleRow {
        uuid: auction.uuid.clone(),
        item_name: auction.item_name.clone(),
        item_key: auction.item_key.clone(),
        bin: auction.bin,
        final_price: auction.effective_final_price(),
        ended_ts: auction.end_ts,
        tier: auction.tier.clone(),
        signature: signature.map(str::to_string),
        item_lore: auction.item_lore.clone(),
        item_bytes: auction.item_bytes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * Auditoría integral: [Expiración -> Promoción -> No-op -> Fusión].
     */
    #[tokio::test]
    async fn certify_sales_promotion_exactly_once_v1_2() {
        println!("\n🏛️  [INICIO]: Auditoría de Promoción a Historial V1.2...");
        let mut technical_forensic_log = String::new();
        let mut accumulated_anomalies_count = 0u32;

        // 1. SETUP
        let database_client =
            TursoClient::connect("file:mem_sales_promotion_v12?mode=memory&cache=shared", None)
                .await
                .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");
        let auction_repository = AuctionRepository::new(database_client.clone());
        let sale_repository = SaleRepository::new(database_client.clone());
        let database_connection =
            database_client.get_connection().expect("POOL_FAULT: connection allocation");

        let expired_auction = forge_expired_auction("S_PROMOTION_01");
        auction_repository
            .bulk_upsert_auctions(std::slice::from_ref(&expired_auction))
            .await
            .expect("DISPATCH_FAULT: genesis sighting");

        // 2. FASE DE SELECCIÓN DE EXPIRADAS
        println!("   🧪 Fase 1: La expirada debe aparecer en la selección de finalización...");
        let pending_batch = auction_repository
            .select_ended_to_finalize(10_000, 100)
            .await
            .expect("SELECT_FAULT: finalize batch");

        if pending_batch.len() == 1 && pending_batch[0].uuid == "S_PROMOTION_01" {
            println!("      ✅ Selección de Expiradas: Certificada.");
            technical_forensic_log.push_str("✅ SELECT: Expirada pendiente detectada.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log
                .push_str(&format!("❌ SELECT: Lote inesperado de {} filas.\n", pending_batch.len()));
        }

        // 3. FASE DE PROMOCIÓN
        println!("   🧪 Fase 2: Promoción transaccional y sellado de la lápida...");
        let promoted_sale = sale_of(&expired_auction, Some("tier:legendary|pet_level:100"));
        sale_repository
            .finalize_batch(std::slice::from_ref(&promoted_sale))
            .await
            .expect("PROMOTION_FAULT: finalize batch");

        let follow_up_batch = auction_repository
            .select_ended_to_finalize(10_000, 100)
            .await
            .expect("SELECT_FAULT: follow-up");

        let mut tombstone_rows = database_connection
            .query("SELECT is_ended FROM auctions WHERE uuid = 'S_PROMOTION_01'", ())
            .await
            .expect("QUERY_FAULT: tombstone");
        let tombstone_flag: i64 =
            tombstone_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(tombstone_rows);

        if follow_up_batch.is_empty() && tombstone_flag == 1 {
            println!("      ✅ Exactamente-Una-Vez: Certificada.");
            technical_forensic_log.push_str("✅ PROMOTION: UUID fuera de la selección; lápida sellada.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log.push_str("❌ PROMOTION: La promoción no fue exactamente-una-vez.\n");
        }

        // 4. FASE DE RE-FINALIZACIÓN (no-op estructural)
        println!("   🧪 Fase 3: Re-finalizar el mismo UUID no debe duplicar ventas...");
        sale_repository
            .finalize_batch(std::slice::from_ref(&promoted_sale))
            .await
            .expect("PROMOTION_FAULT: redundant finalize");

        let mut sale_count_rows = database_connection
            .query("SELECT COUNT(*) FROM sales WHERE uuid = 'S_PROMOTION_01'", ())
            .await
            .expect("QUERY_FAULT: sale count");
        let sale_count: i64 =
            sale_count_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(sale_count_rows);

        if sale_count == 1 {
            println!("      ✅ No-op Estructural: Certificado.");
            technical_forensic_log.push_str("✅ REPLAY: Una única fila de venta tras la repetición.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log
                .push_str(&format!("❌ REPLAY: {} filas de venta para el mismo UUID.\n", sale_count));
        }

        // 5. FASE DE FUSIÓN DE FIRMA EN VENTAS (pet_item entrante gana)
        println!("   🧪 Fase 4: La firma con pet_item debe desplazar a la existente...");
        let enriched_sale = sale_of(
            &expired_auction,
            Some("tier:legendary|pet_level:100|pet_item:tier_boost"),
        );
        sale_repository
            .upsert_sale(&enriched_sale)
            .await
            .expect("PROMOTION_FAULT: enriched upsert");

        let mut signature_rows = database_connection
            .query("SELECT signature FROM sales WHERE uuid = 'S_PROMOTION_01'", ())
            .await
            .expect("QUERY_FAULT: sale signature");
        let stored_signature: Option<String> =
            signature_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(signature_rows);

        if stored_signature.as_deref()
            == Some("tier:legendary|pet_level:100|pet_item:tier_boost")
        {
            println!("      ✅ Regla de pet_item: Certificada.");
            technical_forensic_log.push_str("✅ MERGE: pet_item entrante desplazó la firma.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log
                .push_str(&format!("❌ MERGE: Firma inesperada -> {:?}\n", stored_signature));
        }

        // 6. SENTENCIA FINAL
        let final_verdict_label =
            if accumulated_anomalies_count == 0 { "GOLD_MASTER" } else { "DEGRADED" };
        technical_forensic_log.push_str(&format!("\nVEREDICTO_FINAL: {}\n", final_verdict_label));
        println!("\n🏁 [INFORME]:\n{}", technical_forensic_log);

        assert_eq!(
            accumulated_anomalies_count, 0,
            "La promoción exactamente-una-vez ha sido comprometida."
        );
    }
}
// FIN DEL ARCHIVO [tests/mirror/libs/infra/db_turso/sales_promotion.test.rs]
