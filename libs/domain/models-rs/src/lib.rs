// [libs/domain/models-rs/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN MODELS ROOT (V4.1 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: SINGLE SOURCE OF TRUTH DE CONTRATOS DEL TASADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TRIADA PARITY: Los contratos anotados con typeshare viajan
 *    intactos hacia el dashboard de mercado.
 * 2. COLUMN STABILITY: Los nombres de campo de las filas persistidas
 *    son parte de la interfaz operacional; no se renombran.
 * =================================================================
 */

pub mod auction;
pub mod feed;
pub mod recommendation;

pub use auction::{AuctionRow, SaleRow};
pub use feed::{FeedAuction, FeedEnvelope};
pub use recommendation::{
    CatalogEntry, EnchantEntry, ItemSuggestion, LiveListing, RecommendationResponse, TopSaleEntry,
};
// FIN DEL ARCHIVO [libs/domain/models-rs/src/lib.rs]
