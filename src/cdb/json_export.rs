//! Renders a loaded [`MaterialObject`](super::MaterialObject) back out as
//! JSON, in the same dialect [`crate::json::ingest`] reads.
//!
//! Grounded on `original_source/src/bsmatcdb.cpp`'s `dumpObject` /
//! `getJSONMaterial`: numeric and boolean leaves are rendered as *quoted*
//! strings (the source's `CDB_JSON_QUOTE_NUMBERS` branch) and a struct's
//! fields are emitted in field-name-id order rather than declaration order
//! (`CDB_SORT_STRUCT_MEMBERS`) — both confirmed as the active branches in
//! the kept excerpt, not merely one of several `#ifdef` options.

use crate::reflection::strings;
use crate::resource_id::ResourceId;

use super::value::CdbValue;
use super::{ComponentDatabase, MaterialObjectId};

/// The well-known base-material `"Parent"` table: a handful of root
/// materials every other `.mat` ultimately derives from, keyed by their
/// `file` hash. Confirmed as a literal 6-entry table in
/// `bsmatcdb.cpp::getJSONMaterial` — editable/incomplete by construction,
/// since the real table is this exact small hardcoded set, not a
/// general lookup.
const WELL_KNOWN_PARENTS: &[(u32, &str)] = &[
    (0x7EA3_660C, "materials\\layered\\root\\layeredmaterials.mat"),
    (0x8EBE_84FF, "materials\\layered\\root\\blenders.mat"),
    (0x574A_4CF3, "materials\\layered\\root\\layers.mat"),
    (0x7D1E_021B, "materials\\layered\\root\\materials.mat"),
    (0x06F5_2154, "materials\\layered\\root\\texturesets.mat"),
    (0x4298_BB09, "materials\\layered\\root\\uvstreams.mat"),
];

fn well_known_parent(resource_id: ResourceId) -> Option<&'static str> {
    WELL_KNOWN_PARENTS.iter().find(|(hash, _)| *hash == resource_id.file_hash).map(|(_, path)| *path)
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders one value. Every numeric/bool leaf is quoted as a string, per
/// the confirmed-active `CDB_JSON_QUOTE_NUMBERS` branch.
fn emit_value(db: &ComponentDatabase, value: &CdbValue, out: &mut String) {
    match value {
        CdbValue::Null => out.push_str("null"),
        CdbValue::Int8(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::UInt8(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::Int16(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::UInt16(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::Int32(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::UInt32(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::Int64(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::UInt64(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::Bool(v) => out.push_str(&quote_string(if *v { "true" } else { "false" })),
        CdbValue::Float(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::Double(v) => out.push_str(&quote_string(&v.to_string())),
        CdbValue::String(s) => out.push_str(&quote_string(s)),
        CdbValue::Struct { class_id, fields } => emit_struct(db, *class_id, fields, out),
        CdbValue::List { items, .. } => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit_value(db, item, out);
            }
            out.push(']');
        }
        CdbValue::Map { items, .. } => {
            out.push('[');
            for (i, (k, v)) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str("{\"Key\":");
                emit_value(db, k, out);
                out.push_str(",\"Value\":");
                emit_value(db, v, out);
                out.push('}');
            }
            out.push(']');
        }
        CdbValue::Ref { item, .. } => match item {
            Some(v) => emit_value(db, v, out),
            None => out.push_str("null"),
        },
        CdbValue::Link(target) => {
            let rendered = target.map(|id| db.object(id).resource_id.to_res_string()).unwrap_or_default();
            out.push_str(&quote_string(&rendered));
        }
    }
}

fn emit_struct(db: &ComponentDatabase, class_id: u32, fields: &[Option<std::rc::Rc<CdbValue>>], out: &mut String) {
    let def = db.class(class_id);
    let mut order: Vec<usize> = (0..fields.len()).collect();
    if let Some(def) = def {
        order.sort_by_key(|&i| def.fields.get(i).map(|f| f.name_id).unwrap_or(u32::MAX));
    }
    out.push('{');
    let mut first = true;
    for i in order {
        let Some(value) = fields[i].as_deref() else { continue };
        let name_id = def.and_then(|d| d.fields.get(i)).map(|f| f.name_id).unwrap_or(strings::ID_UNKNOWN);
        let field_name = strings::name_of(name_id).unwrap_or("Unknown");
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&quote_string(field_name));
        out.push(':');
        emit_value(db, value, out);
    }
    out.push('}');
}

/// One entry in the `"Components"` array: `{"Index": n, "Type": "...",
/// "Data": {...}}`. The source builds `Data` first, then splices `Index`
/// in via a string search-and-insert; here the same ordering is produced
/// directly, since a structured emitter has no need for the textual trick.
fn emit_component(db: &ComponentDatabase, index: u16, class_id: u32, value: &CdbValue, out: &mut String) {
    out.push_str(&format!("{{\"Index\":{index},\"Type\":"));
    out.push_str(&quote_string(strings::name_of(class_id).unwrap_or("Unknown")));
    out.push_str(",\"Data\":");
    emit_value(db, value, out);
    out.push('}');
}

/// Renders one material object as the single-object JSON document
/// `cdbtool material json <path>` prints: `"ID"`, `"Parent"` (resolved
/// against the object's own parent if linked, else the well-known-base
/// table, else an empty string), and `"Components"`.
pub fn get_json_material(db: &ComponentDatabase, id: MaterialObjectId) -> String {
    let obj = db.object(id);
    let mut out = String::new();
    out.push('{');
    out.push_str("\"ID\":");
    out.push_str(&quote_string(&obj.resource_id.to_res_string()));
    out.push_str(",\"Parent\":");
    let parent = obj
        .parent
        .map(|p| db.object(p).resource_id.to_res_string())
        .or_else(|| well_known_parent(obj.resource_id).map(|s| s.to_string()))
        .unwrap_or_default();
    out.push_str(&quote_string(&parent));
    out.push_str(",\"Components\":[");
    for (i, component) in obj.components.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let value = component.value.as_deref().cloned().unwrap_or(CdbValue::Null);
        emit_component(db, component.index, component.class_id, &value, &mut out);
    }
    out.push_str("]}");
    out
}

/// Renders every top-level `.mat` object the database knows about as one
/// `{"Version":1,"Objects":[...]}` document — the form
/// [`crate::json::ingest::load_json_file`] reads back in.
pub fn to_json(db: &ComponentDatabase) -> String {
    let mut ids = db.get_materials();
    ids.sort_by_key(|id| db.object(*id).resource_id);
    let mut out = String::from("{\"Version\":1,\"Objects\":[");
    for (i, id) in ids.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&get_json_material(db, id));
    }
    out.push_str("]}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn quoted_numbers_and_sorted_fields() {
        let mut db = ComponentDatabase::new();
        let id = db.allocate_json_object(ResourceId::from_path("materials/foo.mat"));
        db.register_mat_file_object(ResourceId::from_path("materials/foo.mat"), id);
        db.set_component(
            id,
            strings::ID_BSMATERIAL_SHADERROUTECOMPONENT,
            Some(Rc::new(CdbValue::Struct {
                class_id: strings::ID_BSMATERIAL_SHADERROUTECOMPONENT,
                fields: vec![Some(Rc::new(CdbValue::UInt8(3)))],
            })),
        );
        let json = get_json_material(&db, id);
        assert!(json.contains("\"Index\":0"));
        assert!(json.contains("\"3\"")); // quoted, not bare 3
        assert!(json.contains("BSMaterial::ShaderRouteComponent"));
    }

    #[test]
    fn well_known_parent_fills_in_for_root_objects() {
        let db = ComponentDatabase::new();
        let rid = ResourceId::new(0, 0x7EA3_660C, crate::resource_id::EXT_CODE_MAT);
        assert_eq!(well_known_parent(rid), Some("materials\\layered\\root\\layeredmaterials.mat"));
    }
}
