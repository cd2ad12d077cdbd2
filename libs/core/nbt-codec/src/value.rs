// [libs/core/nbt-codec/src/value.rs]
/*!
 * =================================================================
 * APARATO: TOLERANT VALUE TREE (V3.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: REPRESENTACIÓN LAXA DEL ÁRBOL DE ATRIBUTOS
 *
 * VISION HIPER-HOLÍSTICA:
 * El proveedor upstream no garantiza tipos: un nivel de encantamiento
 * puede llegar como Byte, Int, Long o incluso String. Los accesores de
 * este aparato absorben esa deriva en un único punto para que ningún
 * consumidor tenga que defenderse dos veces.
 * =================================================================
 */

use std::collections::BTreeMap;

/// Árbol de valores decodificado desde el protocolo NBT.
///
/// Los compuestos usan `BTreeMap` para que toda iteración sea
/// determinista, requisito del constructor de firmas.
#[derive(Debug, Clone, PartialEq)]
pub enum NbtValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(Vec<NbtValue>),
    Compound(BTreeMap<String, NbtValue>),
}

impl NbtValue {
    /// Compuesto vacío; resultado nominal de un payload ausente.
    #[must_use]
    pub fn empty_compound() -> Self {
        NbtValue::Compound(BTreeMap::new())
    }

    /// Acceso al mapa interno cuando el nodo es un compuesto.
    #[must_use]
    pub fn as_compound(&self) -> Option<&BTreeMap<String, NbtValue>> {
        match self {
            NbtValue::Compound(entries) => Some(entries),
            _ => None,
        }
    }

    /// Hijo directo por clave exacta (solo sobre compuestos).
    #[must_use]
    pub fn get(&self, child_key: &str) -> Option<&NbtValue> {
        self.as_compound().and_then(|entries| entries.get(child_key))
    }

    /// Primer hijo presente entre varias claves alternativas.
    #[must_use]
    pub fn get_first(&self, candidate_keys: &[&str]) -> Option<&NbtValue> {
        candidate_keys.iter().find_map(|key| self.get(key))
    }

    /**
     * Valor entero tolerante: acepta cualquier escalar numérico y
     * cadenas que parseen como entero decimal.
     */
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NbtValue::Byte(v) => Some(i64::from(*v)),
            NbtValue::Short(v) => Some(i64::from(*v)),
            NbtValue::Int(v) => Some(i64::from(*v)),
            NbtValue::Long(v) => Some(*v),
            NbtValue::Float(v) => Some(*v as i64),
            NbtValue::Double(v) => Some(*v as i64),
            NbtValue::Str(v) => v.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Valor flotante tolerante (numéricos y cadenas numéricas).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NbtValue::Byte(v) => Some(f64::from(*v)),
            NbtValue::Short(v) => Some(f64::from(*v)),
            NbtValue::Int(v) => Some(f64::from(*v)),
            NbtValue::Long(v) => Some(*v as f64),
            NbtValue::Float(v) => Some(f64::from(*v)),
            NbtValue::Double(v) => Some(*v),
            NbtValue::Str(v) => v.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Cadena tolerante: acepta String directo y escalares numéricos.
    #[must_use]
    pub fn as_str_lossy(&self) -> Option<String> {
        match self {
            NbtValue::Str(v) => Some(v.clone()),
            NbtValue::Byte(v) => Some(v.to_string()),
            NbtValue::Short(v) => Some(v.to_string()),
            NbtValue::Int(v) => Some(v.to_string()),
            NbtValue::Long(v) => Some(v.to_string()),
            _ => None,
        }
    }

    /**
     * Recolecta recursivamente toda hoja de tipo cadena bajo este nodo.
     *
     * Usado por el detector de pergaminos de habilidad, donde el
     * proveedor alterna entre una cadena plana, una lista de cadenas o
     * un compuesto anidado según la antigüedad del ítem.
     */
    #[must_use]
    pub fn string_values_deep(&self) -> Vec<String> {
        let mut collected_strings = Vec::new();
        self.collect_strings_into(&mut collected_strings);
        collected_strings
    }

    fn collect_strings_into(&self, sink: &mut Vec<String>) {
        match self {
            NbtValue::Str(leaf) => sink.push(leaf.clone()),
            NbtValue::List(elements) => {
                for element in elements {
                    element.collect_strings_into(sink);
                }
            }
            NbtValue::Compound(entries) => {
                for child in entries.values() {
                    child.collect_strings_into(sink);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(pairs: Vec<(&str, NbtValue)>) -> NbtValue {
        NbtValue::Compound(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_numeric_tolerance_across_scalar_types() {
        assert_eq!(NbtValue::Byte(5).as_i64(), Some(5));
        assert_eq!(NbtValue::Long(8).as_i64(), Some(8));
        assert_eq!(NbtValue::Str("7".into()).as_i64(), Some(7));
        assert_eq!(NbtValue::Str("basalto".into()).as_i64(), None);
        assert_eq!(NbtValue::Double(3.9).as_i64(), Some(3));
    }

    #[test]
    fn test_get_first_resolves_key_drift() {
        let tree = compound(vec![("pet_skin", NbtValue::Str("midnight".into()))]);
        let resolved = tree
            .get_first(&["petSkin", "pet_skin"])
            .and_then(NbtValue::as_str_lossy);
        assert_eq!(resolved, Some("midnight".to_string()));
    }

    #[test]
    fn test_string_values_deep_traverses_all_shapes() {
        let nested = compound(vec![
            ("ability_scroll", NbtValue::List(vec![
                NbtValue::Str("implosion_scroll".into()),
                NbtValue::Str("shadow_warp_scroll".into()),
            ])),
            ("extra_scroll", NbtValue::Str("wither_shield_scroll".into())),
            ("level", NbtValue::Int(3)),
        ]);

        let mut harvested = nested.string_values_deep();
        harvested.sort();
        assert_eq!(
            harvested,
            vec!["implosion_scroll", "shadow_warp_scroll", "wither_shield_scroll"]
        );
    }
}
// FIN DEL ARCHIVO [libs/core/nbt-codec/src/value.rs]
