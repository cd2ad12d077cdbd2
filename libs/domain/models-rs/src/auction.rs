// [libs/domain/models-rs/src/auction.rs]
/*!
 * =================================================================
 * APARATO: AUCTION & SALE ROW MODELS (V4.1 - MARKET GOLD)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: FILAS PERSISTIDAS DEL LEDGER DE MERCADO
 *
 * VISION HIPER-HOLÍSTICA:
 * Dos entidades gobiernan el ledger: la subasta viva (refrescada en
 * cada avistamiento del snapshot) y la venta histórica (append-only,
 * identidad permanente). Los nombres de campo son columnas estables
 * de la interfaz operacional.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Subasta viva, identificada por el UUID opaco de 32 caracteres del
/// proveedor. Se crea al primer avistamiento y se refresca en cada
/// snapshot posterior; la ausencia prolongada la marca terminada.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuctionRow {
    pub uuid: String,
    pub item_name: String,
    /// Clave canónica de agrupación (estable ante reforjas y glifos).
    pub item_key: String,
    /// Compra inmediata (BIN) o puja ascendente.
    pub bin: bool,
    /// Marcas temporales del listado en milisegundos desde época.
    pub start_ts: i64,
    pub end_ts: i64,
    pub starting_bid: i64,
    pub highest_bid: i64,
    pub tier: Option<String>,
    /// Texto de exhibición crudo; retenido para re-derivar la firma.
    pub item_lore: Option<String>,
    /// Payload binario Base64+gzip; retenido para re-derivar la firma.
    pub item_bytes: Option<String>,
    /// Último avistamiento en un snapshot completo (ms).
    pub last_seen_ts: i64,
    /// Huella de contenido cacheada; NULL cuando no se derivó.
    pub signature: Option<String>,
    pub is_ended: bool,
}

impl AuctionRow {
    /// Precio final efectivo: la puja más alta cuando existe; para un
    /// BIN sin pujas, la puja inicial ES el precio de venta.
    #[must_use]
    pub fn effective_final_price(&self) -> i64 {
        if self.highest_bid > 0 {
            self.highest_bid
        } else {
            self.starting_bid
        }
    }
}

/// Venta histórica promovida desde una subasta expirada. Append-only:
/// la firma puede re-derivarse en mantenimiento, la identidad jamás.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRow {
    pub uuid: String,
    pub item_name: String,
    pub item_key: String,
    pub bin: bool,
    pub final_price: i64,
    pub ended_ts: i64,
    pub tier: Option<String>,
    pub signature: Option<String>,
    pub item_lore: Option<String>,
    pub item_bytes: Option<String>,
}

// FIN DEL ARCHIVO [libs/domain/models-rs/src/auction.rs]
