// INICIO DEL ARCHIVO [libs/infra/db-turso/src/repositories/sale_repository.rs]
/*!
 * =================================================================
 * APARATO: SALES HISTORY REPOSITORY (V4.4 - MARKET GOLD)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: HISTORIAL APPEND-ONLY Y CONSULTAS DEL RECOMENDADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EXACTLY-ONCE PROMOTION: La promoción de una subasta expirada es
 *    un upsert idempotente; llamadas posteriores de finalización
 *    sobre el mismo UUID son no-ops estructurales.
 * 2. REDERIVATION MATERIAL: Cada venta retiene lore y payload binario
 *    para re-derivar su firma en mantenimiento.
 * 3. BACKFILL READY: Las ventas con clave canónica NULL (instalaciones
 *    veteranas) se nivelan por lotes desde el nombre almacenado.
 * =================================================================
 */

use crate::errors::DbError;
use crate::TursoClient;
use libsql::params;
use tasador_core_signature::merge_signatures;
use tasador_domain_models::{ItemSuggestion, SaleRow};
use tracing::{info, instrument};

/// Columnas del SELECT canónico de ventas, en orden de mapeo.
const SALE_COLUMNS: &str =
    "uuid, item_name, item_key, bin, final_price, ended_ts, tier, signature, item_lore, item_bytes";

pub struct SaleRepository {
    database_client: TursoClient,
}

impl SaleRepository {
    pub fn new(client: TursoClient) -> Self {
        Self { database_client: client }
    }

    /**
     * Promueve un lote de expiradas en transacción única: upsert de la
     * venta (con fusión de firma) y sellado de la subasta de origen.
     *
     * # Errors:
     * Colapso de transacción revierte el lote completo; el ciclo
     * llamador lo re-selecciona en su siguiente iteración.
     */
    #[instrument(skip(self, promoted_sales), fields(batch = promoted_sales.len()))]
    pub async fn finalize_batch(&self, promoted_sales: &[SaleRow]) -> Result<usize, DbError> {
        if promoted_sales.is_empty() {
            return Ok(0);
        }

        let connection = self.database_client.get_connection()?;
        let transaction = connection.transaction().await?;

        for sale in promoted_sales {
            let merged_signature =
                merge_sale_signature(&transaction, &sale.uuid, sale.signature.as_deref()).await?;

            transaction
                .execute(
                    r#"
                    INSERT INTO sales (
                        uuid, item_name, item_key, bin, final_price,
                        ended_ts, tier, signature, item_lore, item_bytes
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                    ON CONFLICT(uuid) DO UPDATE SET
                        item_name = excluded.item_name,
                        item_key = excluded.item_key,
                        bin = excluded.bin,
                        final_price = excluded.final_price,
                        ended_ts = excluded.ended_ts,
                        tier = excluded.tier,
                        signature = excluded.signature,
                        item_lore = excluded.item_lore,
                        item_bytes = excluded.item_bytes
                    "#,
                    params![
                        sale.uuid.clone(),
                        sale.item_name.clone(),
                        sale.item_key.clone(),
                        sale.bin as i64,
                        sale.final_price,
                        sale.ended_ts,
                        sale.tier.clone(),
                        merged_signature,
                        sale.item_lore.clone(),
                        sale.item_bytes.clone(),
                    ],
                )
                .await?;

            transaction
                .execute("UPDATE auctions SET is_ended = 1 WHERE uuid = ?1", params![sale.uuid.clone()])
                .await?;
        }

        transaction.commit().await.map_err(|_| DbError::TransactionError)?;

        info!("🏛️ [SALES_REPO]: Promoted {} expired listings into history.", promoted_sales.len());
        Ok(promoted_sales.len())
    }

    /// Upsert individual de venta con la regla de fusión de firmas.
    pub async fn upsert_sale(&self, sale: &SaleRow) -> Result<(), DbError> {
        self.finalize_batch(std::slice::from_ref(sale)).await.map(|_| ())
    }

    /**
     * Ventas recientes de un ítem para el recomendador: ventana
     * temporal acotada, más recientes primero.
     */
    pub async fn query_recent_sales_by_item(
        &self,
        item_key: &str,
        since_ts: i64,
        limit: i64,
    ) -> Result<Vec<SaleRow>, DbError> {
        let connection = self.database_client.get_connection()?;

        let sql = format!(
            "SELECT {} FROM sales
             WHERE item_key = ?1 AND ended_ts >= ?2
             ORDER BY ended_ts DESC
             LIMIT ?3",
            SALE_COLUMNS
        );

        let mut rows = connection.query(&sql, params![item_key, since_ts, limit]).await?;
        let mut recent_sales = Vec::new();
        while let Some(row) = rows.next().await? {
            recent_sales.push(sale_from_row(&row)?);
        }
        Ok(recent_sales)
    }

    /// Ventas veteranas sin clave canónica, para el backfill del ciclo.
    pub async fn select_sales_missing_item_key(
        &self,
        limit: i64,
    ) -> Result<Vec<(String, String)>, DbError> {
        let connection = self.database_client.get_connection()?;

        let mut rows = connection
            .query(
                "SELECT uuid, item_name FROM sales
                 WHERE item_key IS NULL OR item_key = ''
                 LIMIT ?1",
                params![limit],
            )
            .await?;

        let mut pending = Vec::new();
        while let Some(row) = rows.next().await? {
            pending.push((row.get::<String>(0)?, row.get::<String>(1)?));
        }
        Ok(pending)
    }

    /// Nivela la clave canónica de una venta veterana.
    pub async fn update_sale_item_key(&self, uuid: &str, item_key: &str) -> Result<(), DbError> {
        let connection = self.database_client.get_connection()?;
        connection
            .execute("UPDATE sales SET item_key = ?2 WHERE uuid = ?1", params![uuid, item_key])
            .await?;
        Ok(())
    }

    /**
     * Autocompletado de ítems conocidos: claves canónicas por prefijo,
     * ordenadas por volumen de ventas.
     */
    pub async fn search_known_items(
        &self,
        key_prefix: &str,
        limit: i64,
    ) -> Result<Vec<ItemSuggestion>, DbError> {
        let connection = self.database_client.get_connection()?;

        let mut rows = connection
            .query(
                "SELECT item_key, MIN(item_name) AS label, COUNT(*) AS volume
                 FROM sales
                 WHERE item_key IS NOT NULL AND item_key != '' AND item_key LIKE ?1 || '%'
                 GROUP BY item_key
                 ORDER BY volume DESC, item_key ASC
                 LIMIT ?2",
                params![key_prefix, limit],
            )
            .await?;

        let mut suggestions = Vec::new();
        while let Some(row) = rows.next().await? {
            suggestions.push(ItemSuggestion {
                key: row.get::<String>(0)?,
                label: row.get::<String>(1)?,
            });
        }
        Ok(suggestions)
    }
}

/// Fusión de la firma entrante contra la venta ya persistida.
async fn merge_sale_signature(
    transaction: &libsql::Transaction,
    uuid: &str,
    incoming_signature: Option<&str>,
) -> Result<Option<String>, DbError> {
    let mut existing_rows = transaction
        .query("SELECT signature FROM sales WHERE uuid = ?1", params![uuid])
        .await?;

    let existing_signature = match existing_rows.next().await? {
        Some(row) => row.get::<Option<String>>(0)?,
        None => None,
    };

    let merged = merge_signatures(
        existing_signature.as_deref().unwrap_or(""),
        incoming_signature.unwrap_or(""),
    );

    Ok(if merged.is_empty() { None } else { Some(merged) })
}

/// Mapeo del SELECT canónico hacia la entidad de dominio.
pub(crate) fn sale_from_row(row: &libsql::Row) -> Result<SaleRow, DbError> {
    Ok(SaleRow {
        uuid: row.get::<String>(0)?,
        item_name: row.get::<String>(1)?,
        item_key: row.get::<Option<String>>(2)?.unwrap_or_default(),
        bin: row.get::<i64>(3)? != 0,
        final_price: row.get::<i64>(4)?,
        ended_ts: row.get::<i64>(5)?,
        tier: row.get::<Option<String>>(6)?,
        signature: row.get::<Option<String>>(7)?,
        item_lore: row.get::<Option<String>>(8)?,
        item_bytes: row.get::<Option<String>>(9)?,
    })
}
// FIN DEL ARCHIVO [libs/infra/db-turso/src/repositories/sale_repository.rs]
