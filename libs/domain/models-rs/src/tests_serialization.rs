// [libs/domain/models-rs/src/tests_serialization.rs]
/**
 * =================================================================
 * APARATO: DOMAIN SERIALIZATION TEST (V4.2 - INTEGRATION LEVEL)
 * CLASIFICACIÓN: TRINITY EVIDENCE (ESTRATO L2-MODELS)
 * RESPONSABILIDAD: CERTIFICACIÓN DE PARIDAD JSON DE LOS CONTRATOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WIRE PARITY: Valida que el sobre upstream ('totalPages') y los
 *    DTOs de respuesta (snake_case) conserven sus nombres de campo
 *    exactos; son interfaz operacional, no detalle interno.
 * 2. ROUNDTRIP INTEGRITY: Struct -> JSON -> Struct sin pérdida.
 * =================================================================
 */

#[cfg(test)]
mod tests {
    use tasador_domain_models::{
        AuctionRow, FeedEnvelope, RecommendationResponse, SaleRow, TopSaleEntry,
    };

    fn sample_auction_row() -> AuctionRow {
        AuctionRow {
            uuid: "f".repeat(32),
            item_name: "✪✪✪✪✪ Necron's Blade".into(),
            item_key: "necrons blade".into(),
            bin: true,
            start_ts: 1_700_000_000_000,
            end_ts: 1_700_000_600_000,
            starting_bid: 1_000_000,
            highest_bid: 0,
            tier: Some("LEGENDARY".into()),
            item_lore: Some("§6Legendary Sword".into()),
            item_bytes: None,
            last_seen_ts: 1_700_000_000_000,
            signature: Some("tier:legendary|dstars:5|stars10:5".into()),
            is_ended: false,
        }
    }

    /**
     * CERTIFICACIÓN: Roundtrip de la fila de subasta con Unicode.
     */
    #[test]
    fn certify_auction_row_roundtrip() {
        println!("\n🧪 [PROVING_GROUNDS]: Validating AuctionRow JSON parity...");

        let original = sample_auction_row();
        let wire = serde_json::to_string(&original).expect("serialización de fila");
        let recovered: AuctionRow = serde_json::from_str(&wire).expect("deserialización de fila");

        assert_eq!(original, recovered, "La fila debe sobrevivir el roundtrip bit-perfecta");
    }

    /**
     * CERTIFICACIÓN: El sobre upstream usa 'totalPages' en el cable.
     */
    #[test]
    fn certify_feed_envelope_wire_names() {
        let envelope: FeedEnvelope = serde_json::from_str(
            r#"{"success":true,"totalPages":7,"auctions":[{"uuid":"abc","item_name":"Hyperion","bin":true,"start":1,"end":2,"starting_bid":5,"highest_bid":0}]}"#,
        )
        .expect("sobre del feed");

        assert_eq!(envelope.total_pages, 7);
        assert_eq!(envelope.auctions.len(), 1);
        assert_eq!(envelope.auctions[0].item_name, "Hyperion");

        let re_emitted = serde_json::to_string(&envelope).expect("re-emisión");
        assert!(re_emitted.contains("\"totalPages\":7"), "cable: {}", re_emitted);
    }

    /**
     * CERTIFICACIÓN: La respuesta de recomendación expone snake_case.
     */
    #[test]
    fn certify_recommendation_response_wire_names() {
        let response = RecommendationResponse {
            recommended: Some(1_000_000),
            range_low: Some(800_000),
            range_high: Some(1_200_000),
            range_count: 31,
            top3: vec![TopSaleEntry {
                uuid: "a".repeat(32),
                item_name: "Hyperion".into(),
                final_price: 1_000_000,
                ended_ts: 1_700_000_000_000,
                tier: Some("LEGENDARY".into()),
                stars10: 10,
                match_quality: "perfect".into(),
                score: 10,
                matched: vec![],
                all_enchants: vec![],
            }],
            live: None,
            note: None,
        };

        let wire = serde_json::to_string(&response).expect("serialización de respuesta");
        for expected_field in ["range_low", "range_high", "range_count", "top3", "match_quality"] {
            assert!(wire.contains(expected_field), "campo {} ausente en {}", expected_field, wire);
        }
    }

    /**
     * CERTIFICACIÓN: La venta histórica conserva lore y payload para
     * la re-derivación de firmas en mantenimiento.
     */
    #[test]
    fn certify_sale_row_retains_rederivation_material() {
        let sale = SaleRow {
            uuid: "b".repeat(32),
            item_name: "Hyperion".into(),
            item_key: "hyperion".into(),
            bin: true,
            final_price: 850_000_000,
            ended_ts: 1_700_000_000_000,
            tier: Some("LEGENDARY".into()),
            signature: None,
            item_lore: Some("§7Wither Impact".into()),
            item_bytes: Some("H4sIAAAAAAAA".into()),
        };

        let wire = serde_json::to_string(&sale).expect("serialización de venta");
        let recovered: SaleRow = serde_json::from_str(&wire).expect("deserialización de venta");

        assert_eq!(recovered.item_lore.as_deref(), Some("§7Wither Impact"));
        assert_eq!(recovered.item_bytes.as_deref(), Some("H4sIAAAAAAAA"));
    }
}
// FIN DEL ARCHIVO [libs/domain/models-rs/src/tests_serialization.rs]
