// [libs/core/nbt-codec/src/decode.rs]
/*!
 * =================================================================
 * APARATO: BOUNDED NBT DECODER (V3.2 - MARKET GOLD)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: BASE64 -> GZIP -> ÁRBOL NBT -> SUBÁRBOL DE ATRIBUTOS
 *
 * VISION HIPER-HOLÍSTICA:
 * El payload de atributos viaja como Base64 sobre gzip sobre NBT
 * big-endian. Algunos ítems antiguos omiten el estrato gzip; el
 * decodificador degrada al payload crudo cuando el inflado falla.
 *
 * # Mathematical Proof (Bounded Consumption):
 * Toda longitud declarada se valida contra los bytes restantes del
 * cursor antes de alocar, y el inflado se corta en el techo de 8 MiB.
 * Un payload hostil no puede reservar más memoria que su propio tamaño.
 * =================================================================
 */

use crate::errors::NbtError;
use crate::value::NbtValue;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use byteorder::{BigEndian, ByteOrder};
use flate2::read::GzDecoder;
use std::collections::BTreeMap;
use std::io::Read;

/// Techo de memoria para el payload inflado.
const MAX_INFLATED_BYTES: usize = 8 * 1024 * 1024;

/// Profundidad máxima autorizada del árbol.
const MAX_TREE_DEPTH: usize = 64;

/// Clave del subárbol de atributos de juego.
const EXTRA_ATTRIBUTES_KEY: &str = "ExtraAttributes";

// --- IDENTIFICADORES DE TAG DEL PROTOCOLO NBT ---
const TAG_END: u8 = 0;
const TAG_BYTE: u8 = 1;
const TAG_SHORT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_LONG: u8 = 4;
const TAG_FLOAT: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_BYTE_ARRAY: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_LIST: u8 = 9;
const TAG_COMPOUND: u8 = 10;
const TAG_INT_ARRAY: u8 = 11;
const TAG_LONG_ARRAY: u8 = 12;

/**
 * Decodifica un payload Base64 completo hasta el árbol NBT raíz.
 *
 * # Errors:
 * Retorna el fallo semántico exacto (Base64, truncamiento, tag
 * desconocido, límites) para que el constructor de firmas lo registre.
 */
pub fn decode_payload(base64_payload: &str) -> Result<NbtValue, NbtError> {
    let trimmed_payload = base64_payload.trim();

    let raw_bytes = STANDARD
        .decode(trimmed_payload)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed_payload))
        .map_err(|decode_fault| NbtError::Base64Malformed(decode_fault.to_string()))?;

    let inflated_bytes = inflate_or_passthrough(&raw_bytes)?;

    let mut cursor = ByteCursor::new(&inflated_bytes);
    parse_root(&mut cursor)
}

/**
 * Localiza el subárbol `ExtraAttributes` mediante búsqueda en
 * profundidad y lo retorna clonado. El caso `tag.ExtraAttributes`
 * queda cubierto por el propio descenso.
 */
#[must_use]
pub fn find_extra_attributes(root: &NbtValue) -> Option<NbtValue> {
    find_extra_attributes_bounded(root, 0)
}

fn find_extra_attributes_bounded(node: &NbtValue, depth: usize) -> Option<NbtValue> {
    if depth > MAX_TREE_DEPTH {
        return None;
    }

    match node {
        NbtValue::Compound(entries) => {
            if let Some(attribute_subtree) = entries.get(EXTRA_ATTRIBUTES_KEY) {
                return Some(attribute_subtree.clone());
            }
            entries
                .values()
                .find_map(|child| find_extra_attributes_bounded(child, depth + 1))
        }
        NbtValue::List(elements) => elements
            .iter()
            .find_map(|element| find_extra_attributes_bounded(element, depth + 1)),
        _ => None,
    }
}

/**
 * Conveniencia nominal del pipeline: Base64 -> árbol -> ExtraAttributes.
 *
 * Todo fallo (payload vacío, Base64 corrupto, NBT truncado, subárbol
 * ausente) colapsa a `None`; el constructor de firmas decide el log.
 */
#[must_use]
pub fn extra_attributes_from_base64(base64_payload: &str) -> Option<NbtValue> {
    if base64_payload.trim().is_empty() {
        return None;
    }
    let root_tree = decode_payload(base64_payload).ok()?;
    find_extra_attributes(&root_tree)
}

/// Intenta el inflado gzip; un encabezado ajeno degrada al payload crudo.
fn inflate_or_passthrough(raw_bytes: &[u8]) -> Result<Vec<u8>, NbtError> {
    let mut decoder = GzDecoder::new(raw_bytes);
    let mut inflated = Vec::new();

    match decoder
        .by_ref()
        .take((MAX_INFLATED_BYTES + 1) as u64)
        .read_to_end(&mut inflated)
    {
        Ok(_) => {
            if inflated.len() > MAX_INFLATED_BYTES {
                return Err(NbtError::InflatedTooLarge);
            }
            Ok(inflated)
        }
        // Payload sin estrato gzip: se consume tal cual llegó.
        Err(_) => {
            if raw_bytes.len() > MAX_INFLATED_BYTES {
                return Err(NbtError::InflatedTooLarge);
            }
            Ok(raw_bytes.to_vec())
        }
    }
}

// --- CURSOR BINARIO BIG-ENDIAN ---

struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    fn take_slice(&mut self, length: usize) -> Result<&'a [u8], NbtError> {
        if self.remaining() < length {
            return Err(NbtError::Truncated);
        }
        let slice = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, NbtError> {
        Ok(self.take_slice(1)?[0])
    }

    fn read_i16(&mut self) -> Result<i16, NbtError> {
        Ok(BigEndian::read_i16(self.take_slice(2)?))
    }

    fn read_u16(&mut self) -> Result<u16, NbtError> {
        Ok(BigEndian::read_u16(self.take_slice(2)?))
    }

    fn read_i32(&mut self) -> Result<i32, NbtError> {
        Ok(BigEndian::read_i32(self.take_slice(4)?))
    }

    fn read_i64(&mut self) -> Result<i64, NbtError> {
        Ok(BigEndian::read_i64(self.take_slice(8)?))
    }

    fn read_f32(&mut self) -> Result<f32, NbtError> {
        Ok(BigEndian::read_f32(self.take_slice(4)?))
    }

    fn read_f64(&mut self) -> Result<f64, NbtError> {
        Ok(BigEndian::read_f64(self.take_slice(8)?))
    }

    fn read_name(&mut self) -> Result<String, NbtError> {
        let declared_length = self.read_u16()? as usize;
        let raw_name = self.take_slice(declared_length)?;
        Ok(String::from_utf8_lossy(raw_name).into_owned())
    }
}

// --- PARSER DEL ÁRBOL ---

fn parse_root(cursor: &mut ByteCursor<'_>) -> Result<NbtValue, NbtError> {
    let root_tag = cursor.read_u8()?;

    if root_tag == TAG_END {
        return Ok(NbtValue::empty_compound());
    }

    // El nombre de la raíz es decorativo para este dominio.
    let _root_name = cursor.read_name()?;
    parse_payload(cursor, root_tag, 0)
}

fn parse_payload(cursor: &mut ByteCursor<'_>, tag: u8, depth: usize) -> Result<NbtValue, NbtError> {
    if depth > MAX_TREE_DEPTH {
        return Err(NbtError::DepthExceeded);
    }

    match tag {
        TAG_BYTE => Ok(NbtValue::Byte(cursor.read_u8()? as i8)),
        TAG_SHORT => Ok(NbtValue::Short(cursor.read_i16()?)),
        TAG_INT => Ok(NbtValue::Int(cursor.read_i32()?)),
        TAG_LONG => Ok(NbtValue::Long(cursor.read_i64()?)),
        TAG_FLOAT => Ok(NbtValue::Float(cursor.read_f32()?)),
        TAG_DOUBLE => Ok(NbtValue::Double(cursor.read_f64()?)),
        TAG_BYTE_ARRAY => {
            let element_count = validated_length(cursor.read_i32()?, cursor.remaining())?;
            let raw_elements = cursor.take_slice(element_count)?;
            Ok(NbtValue::ByteArray(raw_elements.iter().map(|b| *b as i8).collect()))
        }
        TAG_STRING => {
            let declared_length = cursor.read_u16()? as usize;
            let raw_text = cursor.take_slice(declared_length)?;
            Ok(NbtValue::Str(String::from_utf8_lossy(raw_text).into_owned()))
        }
        TAG_LIST => {
            let element_tag = cursor.read_u8()?;
            let element_count = validated_length(cursor.read_i32()?, cursor.remaining())?;

            if element_tag == TAG_END && element_count > 0 {
                return Err(NbtError::UnknownTag(TAG_END));
            }

            let mut elements = Vec::with_capacity(element_count.min(1024));
            for _ in 0..element_count {
                elements.push(parse_payload(cursor, element_tag, depth + 1)?);
            }
            Ok(NbtValue::List(elements))
        }
        TAG_COMPOUND => {
            let mut entries = BTreeMap::new();
            loop {
                let child_tag = cursor.read_u8()?;
                if child_tag == TAG_END {
                    break;
                }
                let child_name = cursor.read_name()?;
                let child_value = parse_payload(cursor, child_tag, depth + 1)?;
                entries.insert(child_name, child_value);
            }
            Ok(NbtValue::Compound(entries))
        }
        TAG_INT_ARRAY => {
            let element_count = validated_length(cursor.read_i32()?, cursor.remaining() / 4)?;
            let mut elements = Vec::with_capacity(element_count);
            for _ in 0..element_count {
                elements.push(cursor.read_i32()?);
            }
            Ok(NbtValue::IntArray(elements))
        }
        TAG_LONG_ARRAY => {
            let element_count = validated_length(cursor.read_i32()?, cursor.remaining() / 8)?;
            let mut elements = Vec::with_capacity(element_count);
            for _ in 0..element_count {
                elements.push(cursor.read_i64()?);
            }
            Ok(NbtValue::LongArray(elements))
        }
        unknown => Err(NbtError::UnknownTag(unknown)),
    }
}

/// Valida una cardinalidad declarada contra los bytes disponibles.
fn validated_length(declared: i32, available_elements: usize) -> Result<usize, NbtError> {
    if declared < 0 {
        return Err(NbtError::LengthRejected(i64::from(declared)));
    }
    let declared_usize = declared as usize;
    if declared_usize > available_elements {
        return Err(NbtError::Truncated);
    }
    Ok(declared_usize)
}

// FIN DEL ARCHIVO [libs/core/nbt-codec/src/decode.rs]
