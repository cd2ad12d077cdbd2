// [libs/domain/models-rs/src/feed.rs]
/*!
 * =================================================================
 * APARATO: UPSTREAM FEED CONTRACTS (V4.0 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: SOBRE PAGINADO DEL PROVEEDOR DE SUBASTAS
 *
 * VISION HIPER-HOLÍSTICA:
 * El proveedor responde páginas de hasta ~1000 subastas con un sobre
 * {success, totalPages, auctions}. Todo campo no garantizado porta
 * default serde: una página parcialmente malformada no debe colapsar
 * el ciclo completo de ingesta.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Sobre de una página del feed upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "totalPages", default)]
    pub total_pages: i64,
    #[serde(default)]
    pub auctions: Vec<FeedAuction>,
}

/// Subasta cruda tal como viaja en el feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedAuction {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub bin: bool,
    /// Ventana temporal del listado (ms desde época).
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
    #[serde(default)]
    pub starting_bid: i64,
    #[serde(default)]
    pub highest_bid: i64,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub item_lore: Option<String>,
    #[serde(default)]
    pub item_bytes: Option<String>,
}

// FIN DEL ARCHIVO [libs/domain/models-rs/src/feed.rs]
