// INICIO DEL ARCHIVO [libs/infra/db-turso/src/repositories/auction_repository.rs]
/*!
 * =================================================================
 * APARATO: AUCTION LEDGER REPOSITORY (V4.4 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA DEL LEDGER DE SUBASTAS VIVAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. RESURRECTION SEMANTICS: Todo avistamiento re-abre la subasta
 *    (is_ended = 0); la verdad de vida es el snapshot, no la fila.
 * 2. MERGE IN-TRANSACTION: El material de re-derivación (lore, bytes)
 *    jamás se pisa con vacío y la firma sigue la regla de fusión del
 *    motor de firmas, aplicada fila a fila dentro de la transacción.
 * 3. IDEMPOTENT BURSTS: Re-aplicar la misma ráfaga de filas produce
 *    el mismo estado final (requisito de reintento de ciclo).
 * =================================================================
 */

use crate::errors::DbError;
use crate::TursoClient;
use libsql::{params, Transaction};
use tasador_core_signature::merge_signatures;
use tasador_domain_models::AuctionRow;
use tracing::{debug, info, instrument};

/// Columnas del SELECT canónico, en el orden de mapeo de filas.
const AUCTION_COLUMNS: &str = "uuid, item_name, item_key, bin, start_ts, end_ts, starting_bid, \
     highest_bid, tier, item_lore, item_bytes, last_seen_ts, signature, is_ended";

pub struct AuctionRepository {
    database_client: TursoClient,
}

impl AuctionRepository {
    pub fn new(client: TursoClient) -> Self {
        Self { database_client: client }
    }

    /**
     * Upsert masivo de una ráfaga de avistamientos en transacción única.
     *
     * Regla de fusión por fila: los campos mutables se reemplazan;
     * `item_lore` e `item_bytes` se preservan si la entrante llega
     * vacía; la firma sigue `merge_signatures`; `is_ended` vuelve a 0.
     *
     * # Errors:
     * Colapso de transacción; el ciclo llamador reintenta la ráfaga
     * completa en su próxima pasada (la operación es idempotente).
     */
    #[instrument(skip(self, rows), fields(row_count = rows.len()))]
    pub async fn bulk_upsert_auctions(&self, rows: &[AuctionRow]) -> Result<usize, DbError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let connection = self.database_client.get_connection()?;
        let transaction = connection.transaction().await?;

        for row in rows {
            let merged = self.merge_against_existing(&transaction, row).await?;

            transaction
                .execute(
                    r#"
                    INSERT INTO auctions (
                        uuid, item_name, item_key, bin, start_ts, end_ts,
                        starting_bid, highest_bid, tier, item_lore, item_bytes,
                        last_seen_ts, signature, is_ended
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, 0)
                    ON CONFLICT(uuid) DO UPDATE SET
                        item_name = excluded.item_name,
                        item_key = excluded.item_key,
                        bin = excluded.bin,
                        start_ts = excluded.start_ts,
                        end_ts = excluded.end_ts,
                        starting_bid = excluded.starting_bid,
                        highest_bid = excluded.highest_bid,
                        tier = excluded.tier,
                        item_lore = excluded.item_lore,
                        item_bytes = excluded.item_bytes,
                        last_seen_ts = excluded.last_seen_ts,
                        signature = excluded.signature,
                        is_ended = 0
                    "#,
                    params![
                        row.uuid.clone(),
                        row.item_name.clone(),
                        row.item_key.clone(),
                        row.bin as i64,
                        row.start_ts,
                        row.end_ts,
                        row.starting_bid,
                        row.highest_bid,
                        row.tier.clone(),
                        merged.item_lore,
                        merged.item_bytes,
                        row.last_seen_ts,
                        merged.signature,
                    ],
                )
                .await?;
        }

        transaction.commit().await.map_err(|_| DbError::TransactionError)?;

        debug!("💾 [AUCTION_REPO]: Burst of {} sightings leveled into the ledger.", rows.len());
        Ok(rows.len())
    }

    /// Resuelve lore, bytes y firma finales contra la fila existente.
    async fn merge_against_existing(
        &self,
        transaction: &Transaction,
        incoming: &AuctionRow,
    ) -> Result<MergedMutableFields, DbError> {
        let mut existing_rows = transaction
            .query(
                "SELECT item_lore, item_bytes, signature FROM auctions WHERE uuid = ?1",
                params![incoming.uuid.clone()],
            )
            .await?;

        let existing = match existing_rows.next().await? {
            Some(row) => Some((
                row.get::<Option<String>>(0)?,
                row.get::<Option<String>>(1)?,
                row.get::<Option<String>>(2)?,
            )),
            None => None,
        };

        let Some((existing_lore, existing_bytes, existing_signature)) = existing else {
            return Ok(MergedMutableFields {
                item_lore: incoming.item_lore.clone(),
                item_bytes: incoming.item_bytes.clone(),
                signature: incoming.signature.clone(),
            });
        };

        let item_lore = prefer_non_empty(incoming.item_lore.clone(), existing_lore);
        let item_bytes = prefer_non_empty(incoming.item_bytes.clone(), existing_bytes);

        let merged_signature = merge_signatures(
            existing_signature.as_deref().unwrap_or(""),
            incoming.signature.as_deref().unwrap_or(""),
        );
        let signature = if merged_signature.is_empty() { None } else { Some(merged_signature) };

        Ok(MergedMutableFields { item_lore, item_bytes, signature })
    }

    /**
     * Sella como terminada toda subasta no avistada desde `before_ts`.
     * Verdad de vida del sistema: no vista en snapshot == terminada.
     */
    #[instrument(skip(self))]
    pub async fn mark_unseen_ended(&self, before_ts: i64) -> Result<u64, DbError> {
        let connection = self.database_client.get_connection()?;

        let sealed_count = connection
            .execute(
                "UPDATE auctions SET is_ended = 1 WHERE last_seen_ts < ?1 AND is_ended = 0",
                params![before_ts],
            )
            .await?;

        if sealed_count > 0 {
            info!("💀 [AUCTION_REPO]: Sealed {} vanished listings as ended.", sealed_count);
        }
        Ok(sealed_count)
    }

    /**
     * Selecciona el lote de expiradas pendientes de promoción: fin de
     * ventana alcanzado y (aún no selladas, o selladas sin venta).
     */
    pub async fn select_ended_to_finalize(
        &self,
        before_ts: i64,
        limit: i64,
    ) -> Result<Vec<AuctionRow>, DbError> {
        let connection = self.database_client.get_connection()?;

        let sql = format!(
            "SELECT {} FROM auctions
             WHERE end_ts <= ?1
               AND (is_ended = 0 OR uuid NOT IN (SELECT uuid FROM sales))
             LIMIT ?2",
            AUCTION_COLUMNS
        );

        let mut rows = connection.query(&sql, params![before_ts, limit]).await?;
        let mut selected = Vec::new();
        while let Some(row) = rows.next().await? {
            selected.push(auction_from_row(&row)?);
        }
        Ok(selected)
    }

    /// Sella una subasta individual como terminada.
    pub async fn mark_auction_ended(&self, uuid: &str) -> Result<(), DbError> {
        let connection = self.database_client.get_connection()?;
        connection
            .execute("UPDATE auctions SET is_ended = 1 WHERE uuid = ?1", params![uuid])
            .await?;
        Ok(())
    }

    /**
     * BIN vivos de un ítem, avistados dentro de la ventana de vida,
     * por puja inicial ascendente. Alimenta el escaneo de mejor BIN.
     */
    pub async fn query_live_bin_by_item(
        &self,
        item_key: &str,
        min_last_seen_ts: i64,
        limit: i64,
    ) -> Result<Vec<AuctionRow>, DbError> {
        let connection = self.database_client.get_connection()?;

        let sql = format!(
            "SELECT {} FROM auctions
             WHERE item_key = ?1
               AND is_ended = 0
               AND bin = 1
               AND last_seen_ts >= ?2
             ORDER BY starting_bid ASC
             LIMIT ?3",
            AUCTION_COLUMNS
        );

        let mut rows = connection.query(&sql, params![item_key, min_last_seen_ts, limit]).await?;
        let mut live_listings = Vec::new();
        while let Some(row) = rows.next().await? {
            live_listings.push(auction_from_row(&row)?);
        }
        Ok(live_listings)
    }
}

/// Campos mutables resueltos contra la fila existente.
struct MergedMutableFields {
    item_lore: Option<String>,
    item_bytes: Option<String>,
    signature: Option<String>,
}

/// Entrante vacía preserva el material existente.
fn prefer_non_empty(incoming: Option<String>, existing: Option<String>) -> Option<String> {
    match &incoming {
        Some(value) if !value.trim().is_empty() => incoming,
        _ => existing,
    }
}

/// Mapeo del SELECT canónico hacia la entidad de dominio.
pub(crate) fn auction_from_row(row: &libsql::Row) -> Result<AuctionRow, DbError> {
    Ok(AuctionRow {
        uuid: row.get::<String>(0)?,
        item_name: row.get::<String>(1)?,
        item_key: row.get::<String>(2)?,
        bin: row.get::<i64>(3)? != 0,
        start_ts: row.get::<i64>(4)?,
        end_ts: row.get::<i64>(5)?,
        starting_bid: row.get::<i64>(6)?,
        highest_bid: row.get::<i64>(7)?,
        tier: row.get::<Option<String>>(8)?,
        item_lore: row.get::<Option<String>>(9)?,
        item_bytes: row.get::<Option<String>>(10)?,
        last_seen_ts: row.get::<i64>(11)?,
        signature: row.get::<Option<String>>(12)?,
        is_ended: row.get::<i64>(13)? != 0,
    })
}
// FIN DEL ARCHIVO [libs/infra/db-turso/src/repositories/auction_repository.rs]
