// [tests/mirror/apps/orchestrator/services/ingest_transform.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE TRANSFORMACIÓN DE SNAPSHOT (V1.2 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L4-MIRROR
 * RESPONSABILIDAD: AUDITORÍA FEED CRUDO -> FILA DEL LEDGER -> VENTA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PREDICATE DISCIPLINE: Solo los listados que lo ameritan cargan
 *    firma fresca (BIN, lore/bytes, glifos o dígitos exóticos).
 * 2. REDERIVATION: La promoción a venta re-deriva la firma desde el
 *    material almacenado cuando la cacheada está vacía.
 * =================================================================
 */

use tasador_domain_models::FeedAuction;
use tasador_orchestrator::services::ingest::{
    promote_to_sale, transform_feed_auction, transform_snapshot_page,
};

fn forge_feed_auction(uuid: &str, item_name: &str, bin: bool) -> FeedAuction {
    FeedAuction {
        uuid: uuid.to_string(),
        item_name: item_name.to_string(),
        bin,
        start: 1_000,
        end: 600_000,
        starting_bid: 1_000_000,
        highest_bid: 0,
        tier: Some("LEGENDARY".into()),
        item_lore: None,
        item_bytes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certify_signature_predicate_on_transform() {
        println!("\n🧬 [INICIO]: Auditoría del predicado de firmas V1.2...");

        // BIN decorado: firma fresca con tier y estrellas.
        let starred_bin =
            transform_feed_auction(&forge_feed_auction("T_01", "✪✪✪✪✪ Necron's Blade", true), 9_000)
                .expect("fila transformada");
        assert_eq!(
            starred_bin.signature.as_deref(),
            Some("tier:legendary|dstars:5|stars10:5"),
            "El BIN estrellado debe portar firma completa"
        );
        assert_eq!(starred_bin.item_key, "necrons blade");
        assert_eq!(starred_bin.last_seen_ts, 9_000);
        assert!(!starred_bin.is_ended, "Un avistamiento fresco nace vivo");

        // Puja ordinaria sin decoración: el predicado la exime.
        let plain_bid =
            transform_feed_auction(&forge_feed_auction("T_02", "Plain Cobblestone", false), 9_000)
                .expect("fila transformada");
        assert!(plain_bid.signature.is_none(), "La puja sin decoración no amerita firma");

        // UUID vacío: la fila cae del snapshot.
        assert!(transform_feed_auction(&forge_feed_auction("", "Ghost Item", true), 9_000).is_none());

        println!("   ✅ Predicado de firmas: Certificado.");
    }

    #[test]
    fn certify_page_transform_preserves_cardinality() {
        let raw_page = vec![
            forge_feed_auction("P_01", "Hyperion", true),
            forge_feed_auction("", "Ghost", true),
            forge_feed_auction("P_03", "Aspect of the End", false),
        ];

        let transformed = transform_snapshot_page(&raw_page, 5_000);
        assert_eq!(transformed.len(), 2, "La fila fantasma debe caer del snapshot");
        assert!(transformed.iter().all(|row| row.last_seen_ts == 5_000));
    }

    #[test]
    fn certify_promotion_rederives_from_stored_material() {
        println!("\n🏛️  [INICIO]: Auditoría de re-derivación en promoción V1.2...");

        let mut expired = transform_feed_auction(
            &forge_feed_auction("T_04", "[Lvl 100] Ender Dragon", true),
            9_000,
        )
        .expect("fila transformada");

        // La firma cacheada se pierde (fila veterana); el lore queda.
        expired.signature = None;
        expired.item_lore = Some("§7A loyal companion\n§6Held Item: ✦ Tier Boost".into());
        expired.highest_bid = 750_000_000;

        let promoted = promote_to_sale(&expired);

        assert_eq!(promoted.final_price, 750_000_000, "La puja más alta es el precio final");
        assert_eq!(promoted.ended_ts, expired.end_ts);
        let rederived_signature = promoted.signature.expect("firma re-derivada");
        assert!(
            rederived_signature.contains("pet_level:100"),
            "firma: {}",
            rederived_signature
        );
        assert!(
            rederived_signature.contains("pet_item:tier_boost"),
            "firma: {}",
            rederived_signature
        );

        println!("   ✅ Re-derivación en promoción: Certificada.");
    }

    #[test]
    fn certify_promotion_bin_price_semantics() {
        // BIN sin pujas: la puja inicial ES el precio de venta.
        let expired = transform_feed_auction(
            &forge_feed_auction("T_05", "✪✪✪ Necron's Blade", true),
            9_000,
        )
        .expect("fila transformada");

        let promoted = promote_to_sale(&expired);
        assert_eq!(promoted.final_price, 1_000_000);
        assert_eq!(promoted.item_key, "necrons blade");
        assert_eq!(
            promoted.signature.as_deref(),
            Some("tier:legendary|dstars:3|stars10:3"),
            "La firma cacheada viaja con la venta"
        );
    }
}
// FIN DEL ARCHIVO [tests/mirror/apps/orchestrator/services/ingest_transform.test.rs]
