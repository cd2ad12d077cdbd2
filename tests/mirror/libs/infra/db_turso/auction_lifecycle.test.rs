// [tests/mirror/libs/infra/db_turso/auction_lifecycle.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE CICLO DE VIDA DEL LEDGER (V1.3 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE UPSERT MASIVO, FUSIÓN Y LIVENESS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. IDEMPOTENT BURSTS: Re-aplicar la misma ráfaga de avistamientos
 *    jamás duplica UUIDs ni altera el estado final.
 * 2. MATERIAL PRESERVATION: Lore y payload binario nunca se pisan con
 *    vacío; la firma obedece la regla de fusión del motor.
 * 3. DEAD-BY-ABSENCE: Tras el sellado, ninguna subasta no avistada
 *    dentro de la gracia permanece viva.
 * =================================================================
 */

use tasador_domain_models::AuctionRow;
use tasador_infra_db::repositories::AuctionRepository;
use tasador_infra_db::TursoClient;

/// Forja de fila de avistamiento para la auditoría.
fn forge_sighting(uuid: &str, last_seen_ts: i64, signature: Option<&str>) -> AuctionRow {
    AuctionRow {
        uuid: uuid.to_string(),
        item_name: "✪✪✪✪✪ Necron's Blade".into(),
        item_key: "necrons blade".into(),
        bin: true,
        start_ts: 1_000,
        end_ts: 2_000_000,
        starting_bid: 1_000_000,
        highest_bid: 0,
        tier: Some("LEGENDARY".into()),
        item_lore: Some("§6A storied blade".into()),
        item_bytes: Some("H4sIAAAAAAAA".into()),
        last_seen_ts,
        signature: signature.map(str::to_string),
        is_ended: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * Ejecuta la auditoría integral del ciclo de vida del ledger:
     * [Ráfaga -> Re-ráfaga -> Preservación -> Resurrección -> Sellado].
     */
    #[tokio::test]
    async fn certify_auction_ledger_lifecycle_v1_3() {
        println!("\n🗄️  [INICIO]: Auditoría del Ciclo de Vida del Ledger V1.3...");
        let mut technical_forensic_log = String::new();
        let mut accumulated_anomalies_count = 0u32;

        // 1. SETUP: Infraestructura volátil (RAM con caché compartido)
        let database_client =
            TursoClient::connect("file:mem_auction_lifecycle_v13?mode=memory&cache=shared", None)
                .await
                .expect("CRITICAL_FAULT: Failed to anchor in-memory tactical ledger.");
        let auction_repository = AuctionRepository::new(database_client.clone());
        let database_connection =
            database_client.get_connection().expect("POOL_FAULT: connection allocation");

        // 2. FASE DE RÁFAGA IDEMPOTENTE
        println!("   🧪 Fase 1: Re-aplicación de la misma ráfaga de avistamientos...");
        let sighting = forge_sighting("A_LIFECYCLE_01", 10_000, Some("tier:legendary|dstars:5|stars10:5"));

        auction_repository
            .bulk_upsert_auctions(std::slice::from_ref(&sighting))
            .await
            .expect("DISPATCH_FAULT: first burst");
        auction_repository
            .bulk_upsert_auctions(std::slice::from_ref(&sighting))
            .await
            .expect("DISPATCH_FAULT: identical re-burst");

        let mut count_rows = database_connection
            .query("SELECT COUNT(*) FROM auctions WHERE uuid = 'A_LIFECYCLE_01'", ())
            .await
            .expect("QUERY_FAULT: count");
        let row_count: i64 = count_rows
            .next()
            .await
            .expect("stream")
            .expect("fila de conteo")
            .get(0)
            .expect("columna de conteo");
        drop(count_rows);

        if row_count == 1 {
            println!("      ✅ Idempotencia de Ráfaga: Certificada.");
            technical_forensic_log.push_str("✅ BURST: Sin duplicados bajo re-aplicación.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log.push_str("❌ BURST: UUID duplicado detectado.\n");
        }

        // 3. FASE DE PRESERVACIÓN DE MATERIAL
        println!("   🧪 Fase 2: Avistamiento sin lore/bytes no debe pisar el material...");
        let mut hollow_sighting = forge_sighting("A_LIFECYCLE_01", 20_000, Some("tier:legendary|dstars:5|stars10:5"));
        hollow_sighting.item_lore = None;
        hollow_sighting.item_bytes = Some("".into());

        auction_repository
            .bulk_upsert_auctions(std::slice::from_ref(&hollow_sighting))
            .await
            .expect("DISPATCH_FAULT: hollow burst");

        let mut material_rows = database_connection
            .query(
                "SELECT item_lore, item_bytes, last_seen_ts FROM auctions WHERE uuid = 'A_LIFECYCLE_01'",
                (),
            )
            .await
            .expect("QUERY_FAULT: material");
        let material_row = material_rows.next().await.expect("stream").expect("fila de material");
        let preserved_lore: Option<String> = material_row.get(0).expect("lore");
        let preserved_bytes: Option<String> = material_row.get(1).expect("bytes");
        let refreshed_seen: i64 = material_row.get(2).expect("last_seen");
        drop(material_row);
        drop(material_rows);

        if preserved_lore.as_deref() == Some("§6A storied blade")
            && preserved_bytes.as_deref() == Some("H4sIAAAAAAAA")
            && refreshed_seen == 20_000
        {
            println!("      ✅ Preservación de Material: Certificada.");
            technical_forensic_log.push_str("✅ MATERIAL: Lore/bytes intactos, avistamiento refrescado.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log.push_str("❌ MATERIAL: El material de re-derivación fue pisado.\n");
        }

        // 4. FASE DE FUSIÓN DE FIRMA (discrepancia de stars10 gana la entrante)
        println!("   🧪 Fase 3: Discrepancia de stars10 debe preferir la firma entrante...");
        let upgraded_sighting = forge_sighting(
            "A_LIFECYCLE_01",
            30_000,
            Some("tier:legendary|dstars:5|mstars:1|stars10:6"),
        );
        auction_repository
            .bulk_upsert_auctions(std::slice::from_ref(&upgraded_sighting))
            .await
            .expect("DISPATCH_FAULT: upgraded burst");

        let mut signature_rows = database_connection
            .query("SELECT signature FROM auctions WHERE uuid = 'A_LIFECYCLE_01'", ())
            .await
            .expect("QUERY_FAULT: signature");
        let stored_signature: Option<String> =
            signature_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(signature_rows);

        if stored_signature.as_deref() == Some("tier:legendary|dstars:5|mstars:1|stars10:6") {
            println!("      ✅ Fusión de Firma: Certificada.");
            technical_forensic_log.push_str("✅ SIGNATURE: La discrepancia estelar prefirió la entrante.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log
                .push_str(&format!("❌ SIGNATURE: Fusión inesperada -> {:?}\n", stored_signature));
        }

        // 5. FASE DE RESURRECCIÓN Y SELLADO POR AUSENCIA
        println!("   🧪 Fase 4: Resurrección por avistamiento y sellado de ausentes...");
        database_connection
            .execute("UPDATE auctions SET is_ended = 1 WHERE uuid = 'A_LIFECYCLE_01'", ())
            .await
            .expect("DB_FAULT: manual seal");

        auction_repository
            .bulk_upsert_auctions(&[forge_sighting("A_LIFECYCLE_01", 40_000, None)])
            .await
            .expect("DISPATCH_FAULT: resurrection burst");
        auction_repository
            .bulk_upsert_auctions(&[forge_sighting("A_VANISHED_02", 5_000, None)])
            .await
            .expect("DISPATCH_FAULT: vanished listing");

        let sealed_count = auction_repository
            .mark_unseen_ended(39_000)
            .await
            .expect("SEAL_FAULT: unseen sweep");

        let mut liveness_rows = database_connection
            .query(
                "SELECT COUNT(*) FROM auctions WHERE last_seen_ts < 39000 AND is_ended = 0",
                (),
            )
            .await
            .expect("QUERY_FAULT: liveness");
        let zombie_count: i64 =
            liveness_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(liveness_rows);

        let mut resurrected_rows = database_connection
            .query("SELECT is_ended FROM auctions WHERE uuid = 'A_LIFECYCLE_01'", ())
            .await
            .expect("QUERY_FAULT: resurrection");
        let resurrected_flag: i64 =
            resurrected_rows.next().await.expect("stream").expect("fila").get(0).expect("columna");
        drop(resurrected_rows);

        if zombie_count == 0 && resurrected_flag == 0 && sealed_count >= 1 {
            println!("      ✅ Liveness por Ausencia: Certificada ({} sellada/s).", sealed_count);
            technical_forensic_log.push_str("✅ LIVENESS: Sin zombis bajo el horizonte de gracia.\n");
        } else {
            accumulated_anomalies_count += 1;
            technical_forensic_log.push_str("❌ LIVENESS: Zombi vivo o resurrección fallida.\n");
        }

        // 6. SENTENCIA FINAL
        let final_verdict_label =
            if accumulated_anomalies_count == 0 { "GOLD_MASTER" } else { "DEGRADED" };
        technical_forensic_log.push_str(&format!("\nVEREDICTO_FINAL: {}\n", final_verdict_label));
        println!("\n🏁 [INFORME]:\n{}", technical_forensic_log);

        assert_eq!(
            accumulated_anomalies_count, 0,
            "La integridad del ciclo de vida del ledger ha sido comprometida."
        );
    }
}
// FIN DEL ARCHIVO [tests/mirror/libs/infra/db_turso/auction_lifecycle.test.rs]
