// [libs/infra/db-turso/src/schema.rs]
/**
 * =================================================================
 * APARATO: MARKET LEDGER SCHEMA (V4.3 - KNOWLEDGE STRATA)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GOBERNANZA ESTRUCTURAL E IDEMPOTENCIA TOTAL
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LIVE LEDGER: Tabla de subastas vivas refrescada por cada snapshot.
 * 2. HISTORY STRATA: Tabla de ventas append-only con material de
 *    re-derivación de firmas (lore + payload binario).
 * 3. IDEMPOTENCIA: Gestión de errores para migraciones en caliente.
 * 4. PERFORMANCE: Índices de aceleración para el recomendador y el
 *    escaneo de BIN vivos (índice parcial).
 * =================================================================
 */

use anyhow::{Context, Result};
use libsql::Connection;
use tracing::{debug, info, instrument, warn};

/**
 * ESTRATO 1: SOLIDIFICACIÓN (Génesis de Tablas)
 * Define las dos entidades del ledger de mercado.
 */
const TACTICAL_TABLES: &[(&str, &str)] = &[
    ("TABLE_AUCTIONS", r#"
        CREATE TABLE IF NOT EXISTS auctions (
            uuid TEXT PRIMARY KEY,
            item_name TEXT NOT NULL,
            item_key TEXT NOT NULL DEFAULT '',
            bin INTEGER NOT NULL DEFAULT 0,
            start_ts INTEGER NOT NULL DEFAULT 0,
            end_ts INTEGER NOT NULL DEFAULT 0,
            starting_bid INTEGER NOT NULL DEFAULT 0,
            highest_bid INTEGER NOT NULL DEFAULT 0,
            tier TEXT,
            item_lore TEXT,
            item_bytes TEXT,
            last_seen_ts INTEGER NOT NULL DEFAULT 0,
            is_ended INTEGER NOT NULL DEFAULT 0
        );
    "#),
    ("TABLE_SALES", r#"
        CREATE TABLE IF NOT EXISTS sales (
            uuid TEXT PRIMARY KEY,
            item_name TEXT NOT NULL,
            bin INTEGER NOT NULL DEFAULT 0,
            final_price INTEGER NOT NULL DEFAULT 0,
            ended_ts INTEGER NOT NULL DEFAULT 0,
            tier TEXT,
            item_lore TEXT,
            item_bytes TEXT
        );
    "#),
];

/**
 * ESTRATO 2: EVOLUCIÓN (Mutaciones de Columna)
 * Las firmas y la clave canónica de ventas llegaron después del
 * génesis; las instalaciones veteranas se reparan en caliente. Las
 * ventas anteriores a 'SALE_ITEM_KEY' quedan con clave NULL y las
 * nivela el backfill de mantenimiento del ciclo de ingesta.
 */
const EVOLUTIONARY_STRATA: &[(&str, &str)] = &[
    ("AUCTION_SIGNATURE", "ALTER TABLE auctions ADD COLUMN signature TEXT"),
    ("SALE_SIGNATURE", "ALTER TABLE sales ADD COLUMN signature TEXT"),
    ("SALE_ITEM_KEY", "ALTER TABLE sales ADD COLUMN item_key TEXT"),
];

/**
 * ESTRATO 3: ENDURECIMIENTO (Índices de Aceleración)
 * Optimiza el despacho del recomendador y la limpieza del ciclo.
 */
const ACCELERATION_INDEXES: &[(&str, &str)] = &[
    ("IDX_AUCTIONS_NAME_END", "CREATE INDEX IF NOT EXISTS idx_auctions_name_end ON auctions(item_name, end_ts);"),
    ("IDX_AUCTIONS_END", "CREATE INDEX IF NOT EXISTS idx_auctions_end ON auctions(end_ts);"),
    ("IDX_AUCTIONS_LIVE_BIN", "CREATE INDEX IF NOT EXISTS idx_auctions_live_bin ON auctions(item_key, last_seen_ts) WHERE is_ended = 0 AND bin = 1;"),
    ("IDX_SALES_SIGNATURE", "CREATE INDEX IF NOT EXISTS idx_sales_signature ON sales(signature, ended_ts);"),
    ("IDX_SALES_ITEM_KEY", "CREATE INDEX IF NOT EXISTS idx_sales_item_key ON sales(item_key, ended_ts);"),
];

/**
 * Ejecuta la secuencia maestra de sincronización del esquema.
 *
 * # Errors:
 * Retorna error si alguna tabla base falla en solidificarse, indicando
 * un colapso en el enlace con el motor libSQL.
 */
#[instrument(skip(database_connection))]
pub async fn apply_market_ledger_schema(database_connection: &Connection) -> Result<()> {
    info!("🏗️ [SCHEMA_ENGINE]: Initiating structural synchronization V4.3...");

    solidify_base_strata(database_connection).await?;
    execute_evolutionary_repair(database_connection).await?;
    harden_access_layer(database_connection).await?;

    info!("✅ [SCHEMA_ENGINE]: Market Ledger V4.3 level and certified.");
    Ok(())
}

async fn solidify_base_strata(db: &Connection) -> Result<()> {
    for (identifier, sql) in TACTICAL_TABLES {
        debug!("  ↳ Solidifying: {}", identifier);
        db.execute(*sql, ()).await
            .with_context(|| format!("CRITICAL_SOLIDIFICATION_FAULT: {}", identifier))?;
    }
    Ok(())
}

async fn execute_evolutionary_repair(db: &Connection) -> Result<()> {
    for (identifier, sql) in EVOLUTIONARY_STRATA {
        match db.execute(*sql, ()).await {
            Ok(_) => info!("  🟢 [REPAIR_OK]: Applied evolutionary stratum {}", identifier),
            Err(e) => {
                let message = e.to_string();
                if message.contains("duplicate column name") {
                    debug!("  ⚪ [REPAIR_SKIP]: {} already level.", identifier);
                } else {
                    warn!("  ⚠️ [REPAIR_BYPASS]: {} check incomplete: {}", identifier, message);
                }
            }
        }
    }
    Ok(())
}

async fn harden_access_layer(db: &Connection) -> Result<()> {
    for (identifier, sql) in ACCELERATION_INDEXES {
        debug!("  ↳ Hardening: {}", identifier);
        db.execute(*sql, ()).await
            .with_context(|| format!("CRITICAL_HARDENING_FAULT: {}", identifier))?;
    }
    Ok(())
}
// FIN DEL ARCHIVO [libs/infra/db-turso/src/schema.rs]
