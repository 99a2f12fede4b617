//! L3b: loads the material-authoring JSON dialect into a
//! [`ComponentDatabase`], the write-side counterpart to
//! [`super::super::cdb::json_export`].
//!
//! Grounded on `original_source/src/mat_json.cpp`'s `loadJSONFile` /
//! `loadJSONItem`: allocate every object named by a resolvable `"Parent"`
//! first, then fill in `"Components"` in a second pass (an object's parent
//! may itself appear later in the same `"Objects"` array), then register
//! every parent-less `.mat` object as a file root. `List`/`Map`/`Ref` fields
//! are left untouched here exactly as they are in the source, which marks
//! those three cases `// TODO` rather than decoding them.

use std::collections::HashMap;
use std::rc::Rc;

use crate::cdb::value::CdbValue;
use crate::cdb::{ComponentDatabase, MaterialObjectId};
use crate::reflection::strings;
use crate::resource_id::{ResourceId, EXT_CODE_MAT};

use super::{JsonError, JsonItem};

/// Parses `text` and loads it into `db`. `material_path` stands in for the
/// source file's own path, used as an object's identity when its JSON entry
/// omits an explicit `"ID"` (`loadJSONFile`'s `materialPath` fallback).
pub fn load_json_file(db: &mut ComponentDatabase, text: &str, material_path: &str) -> Result<(), JsonError> {
    let doc = super::parse(text)?;
    load_json_document(db, &doc, material_path)
}

/// Same `res:...`-or-path resolution `BSResourceID::fromJSONString` applies
/// to both a `"Parent"`/`"ID"` string and a `BSComponentDB2::ID` leaf value.
fn resource_id_from_json_string(s: &str) -> ResourceId {
    ResourceId::from_res_string(s).unwrap_or_else(|| ResourceId::from_path(s))
}

/// Loads an already-parsed `{"Version":1,"Objects":[...]}` document.
/// Rejects (with no database mutation at all) anything missing a `"Version":
/// 1` or an `"Objects"` array — the source bails out of `loadJSONFile`
/// silently at this same check; a descriptive error is more useful to a
/// caller than a no-op.
pub fn load_json_document(db: &mut ComponentDatabase, doc: &JsonItem, material_path: &str) -> Result<(), JsonError> {
    match doc.get("Version").and_then(JsonItem::as_f64) {
        Some(v) if v == 1.0 => {}
        _ => return Err(JsonError { message: "missing or unsupported \"Version\" (expected 1)".into(), offset: 0 }),
    }
    let Some(objects) = doc.get("Objects").and_then(JsonItem::as_array) else {
        return Err(JsonError { message: "missing \"Objects\" array".into(), offset: 0 });
    };

    // Pass 1: allocate one MaterialObject per entry with a resolvable
    // "Parent" and a "Components" array, keyed by its resolved identity so
    // that entries sharing the same "ID" land on the same object.
    let mut object_map: HashMap<ResourceId, MaterialObjectId> = HashMap::new();
    let mut per_item: Vec<Option<MaterialObjectId>> = vec![None; objects.len()];

    for (i, item) in objects.iter().enumerate() {
        let Some(parent_str) = item.get("Parent").and_then(JsonItem::as_str) else { continue };
        let parent_rid = resource_id_from_json_string(parent_str);
        let Some(parent_id) = db.object_by_resource_id(parent_rid) else { continue };
        if item.get("Components").and_then(JsonItem::as_array).is_none() {
            continue;
        }
        let object_rid = match item.get("ID").and_then(JsonItem::as_str) {
            Some(s) => resource_id_from_json_string(s),
            None => ResourceId::from_path(material_path),
        };
        let obj_id = *object_map.entry(object_rid).or_insert_with(|| {
            let id = db.allocate_json_object(object_rid);
            db.set_base_object(id, parent_id);
            id
        });
        per_item[i] = Some(obj_id);
    }

    // Pass 2: fill in each object's named components.
    for (i, item) in objects.iter().enumerate() {
        let Some(obj_id) = per_item[i] else { continue };
        let Some(components) = item.get("Components").and_then(JsonItem::as_array) else { continue };
        for component in components {
            load_component_entry(db, obj_id, component, &object_map);
        }
    }

    // Pass 3: every object with no graph parent and a `.mat` extension
    // becomes a file root, exactly `storeMatFileObject`'s final sweep.
    let mut roots: Vec<(ResourceId, MaterialObjectId)> = object_map.into_iter().collect();
    roots.sort_by_key(|(rid, _)| *rid);
    for (rid, id) in roots {
        if rid.ext_code == EXT_CODE_MAT && db.object(id).parent.is_none() {
            db.register_mat_file_object(rid, id);
        }
    }
    Ok(())
}

/// One `{"Index": n, "Type": "...", "Data": {...}}` entry: validates
/// `Index` (must be an integer in `0..=0xFFFF`, matching the source's
/// `itemIndex & ~0xFFFF` range check plus an exact round-trip check for
/// "was this actually an integer"), resolves `Type` against the canonical
/// class table, then decodes `Data` into that component's slot.
fn load_component_entry(
    db: &mut ComponentDatabase,
    obj_id: MaterialObjectId,
    component: &JsonItem,
    object_map: &HashMap<ResourceId, MaterialObjectId>,
) {
    let Some(index_f) = component.get("Index").and_then(JsonItem::as_f64) else { return };
    let index_rounded = index_f.round();
    if !(0.0..=0xFFFF as f64).contains(&index_rounded) || index_rounded != index_f {
        return;
    }
    let index = index_rounded as u16;

    let Some(type_str) = component.get("Type").and_then(JsonItem::as_str) else { return };
    if component.get("Data").and_then(JsonItem::as_object).is_none() {
        return;
    }
    let Some(class_id) = strings::find_string(type_str) else { return };
    if db.class(class_id).is_none() {
        return;
    }

    let mut slot = db.take_component_for_write(obj_id, class_id, index);
    load_json_item(db, &mut slot, component, class_id, obj_id, object_map);
    db.set_component_indexed(obj_id, class_id, index, slot);
}

/// The recursive decoder `loadJSONItem` mirrors: `item_type` is the
/// expected type of `item` (a class id for a compound value, or one of the
/// scalar `strings::ID_*` constants). `slot` is the value already present
/// at this position (inherited from a base object, or `None`) — writing
/// only the fields `item` actually names, so anything `Data` omits keeps
/// its inherited value, exactly as a `DIFF` chunk does.
fn load_json_item(
    db: &mut ComponentDatabase,
    slot: &mut Option<Rc<CdbValue>>,
    item: &JsonItem,
    item_type: u32,
    material_object: MaterialObjectId,
    object_map: &HashMap<ResourceId, MaterialObjectId>,
) {
    if item_type == strings::ID_BSCOMPONENTDB2_ID {
        load_link(db, slot, item, material_object, object_map);
        return;
    }

    // Anything above the scalar/primitive ids is a struct-typed component
    // or field: the source requires `item` itself to carry matching
    // "Type"/"Data" keys, recursing into "Data" field-by-field.
    if item_type > strings::ID_UNKNOWN {
        let Some(def) = db.class(item_type) else { return };
        let field_count = def.fields.len();
        let Some(type_str) = item.get("Type").and_then(JsonItem::as_str) else { return };
        if strings::name_of(item_type) != Some(type_str) {
            return;
        }
        let Some(data) = item.get("Data").and_then(JsonItem::as_object) else { return };

        let needs_fresh = match slot {
            Some(rc) => rc.type_id() != item_type,
            None => true,
        };
        if needs_fresh {
            *slot = Some(Rc::new(CdbValue::Struct { class_id: item_type, fields: vec![None; field_count] }));
        } else if let Some(rc) = slot.as_mut() {
            if Rc::strong_count(rc) > 1 {
                *rc = Rc::new((**rc).clone());
            }
        }

        for (key, value) in data {
            let def = db.class(item_type).expect("checked above");
            let Some(field_idx) = def.fields.iter().position(|f| strings::name_of(f.name_id) == Some(key.as_str()))
            else {
                continue;
            };
            let field_type = def.fields[field_idx].type_id;
            let rc = slot.as_mut().expect("populated above");
            let CdbValue::Struct { fields, .. } = Rc::make_mut(rc) else {
                unreachable!("struct slot was just constructed as Struct")
            };
            if fields.len() <= field_idx {
                fields.resize(field_idx + 1, None);
            }
            load_json_item(db, &mut fields[field_idx], value, field_type, material_object, object_map);
        }
        return;
    }

    match item_type {
        strings::ID_STRING => {
            if let Some(s) = item.as_str() {
                *slot = Some(Rc::new(CdbValue::String(Rc::from(s))));
            }
        }
        strings::ID_BOOL => {
            if let Some(b) = item.as_bool() {
                *slot = Some(Rc::new(CdbValue::Bool(b)));
            }
        }
        strings::ID_FLOAT => {
            if let Some(n) = item.as_f64() {
                *slot = Some(Rc::new(CdbValue::Float(n as f32)));
            }
        }
        strings::ID_DOUBLE => {
            if let Some(n) = item.as_f64() {
                *slot = Some(Rc::new(CdbValue::Double(n)));
            }
        }
        strings::ID_INT8 => set_int(slot, item, |v| CdbValue::Int8(v as i8)),
        strings::ID_UINT8 => set_int(slot, item, |v| CdbValue::UInt8(v as u8)),
        strings::ID_INT16 => set_int(slot, item, |v| CdbValue::Int16(v as i16)),
        strings::ID_UINT16 => set_int(slot, item, |v| CdbValue::UInt16(v as u16)),
        strings::ID_INT32 => set_int(slot, item, |v| CdbValue::Int32(v as i32)),
        strings::ID_UINT32 => set_int(slot, item, |v| CdbValue::UInt32(v as u32)),
        strings::ID_INT64 => set_int(slot, item, CdbValue::Int64),
        strings::ID_UINT64 => set_int(slot, item, |v| CdbValue::UInt64(v as u64)),
        // List/Map/Ref: left as a stub, matching the source's own
        // `// TODO` for these three cases in `loadJSONItem`.
        strings::ID_LIST | strings::ID_MAP | strings::ID_REF => {}
        _ => {}
    }
}

/// `item`'s JSON number, rounded half-away-from-zero (matching
/// `roundDouble`/`llrint`), used for every fixed-width integer field.
fn set_int(slot: &mut Option<Rc<CdbValue>>, item: &JsonItem, make: impl FnOnce(i64) -> CdbValue) {
    if let Some(n) = item.as_f64() {
        *slot = Some(Rc::new(make(n.round() as i64)));
    }
}

/// A `BSComponentDB2::ID` leaf: a `res:`/path string resolved against the
/// objects allocated so far in this same document. Walks the candidate's
/// own parent chain back to `material_object` and drops the link if it
/// would close a cycle, matching the source's circularity guard.
fn load_link(
    db: &mut ComponentDatabase,
    slot: &mut Option<Rc<CdbValue>>,
    item: &JsonItem,
    material_object: MaterialObjectId,
    object_map: &HashMap<ResourceId, MaterialObjectId>,
) {
    let Some(s) = item.as_str() else { return };
    let target_rid = resource_id_from_json_string(s);
    let mut target = object_map.get(&target_rid).copied().or_else(|| db.object_by_resource_id(target_rid));

    let mut walker = Some(material_object);
    while let Some(w) = walker {
        if target == Some(w) {
            target = None;
            break;
        }
        walker = db.object(w).parent;
    }

    *slot = Some(Rc::new(CdbValue::Link(target)));
    if let Some(t) = target {
        db.link_parent_child(material_object, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_shader_route_onto_a_fresh_child_object() {
        let mut db = ComponentDatabase::new();
        let parent_rid = ResourceId::from_path("materials/layered/root/materials.mat");
        let parent_id = db.allocate_json_object(parent_rid);
        db.register_mat_file_object(parent_rid, parent_id);

        // A minimal ClassDef so the component is known to the database —
        // the binary stream normally supplies this via a `TYPE` chunk.
        db_insert_shader_route_class(&mut db);

        let text = r#"{
            "Version": 1,
            "Objects": [
                {
                    "Parent": "materials\\layered\\root\\materials.mat",
                    "Components": [
                        {
                            "Index": 0,
                            "Type": "BSMaterial::ShaderRouteComponent",
                            "Data": { "Type": "BSMaterial::ShaderRouteComponent", "Data": {} }
                        }
                    ]
                }
            ]
        }"#;

        load_json_file(&mut db, text, "materials/child.mat").unwrap();

        let child_rid = ResourceId::from_path("materials/child.mat");
        let child_id = db.object_by_resource_id(child_rid).expect("child object allocated");
        assert_eq!(db.object(child_id).base_object, Some(parent_id));
        assert!(db.object(child_id).find_component_indexed(strings::ID_BSMATERIAL_SHADERROUTECOMPONENT, 0).is_some());
    }

    #[test]
    fn skips_entries_with_unresolvable_parent() {
        let mut db = ComponentDatabase::new();
        let text = r#"{"Version":1,"Objects":[{"Parent":"materials\\missing.mat","Components":[]}]}"#;
        load_json_file(&mut db, text, "materials/child.mat").unwrap();
        assert!(db.object_by_resource_id(ResourceId::from_path("materials/child.mat")).is_none());
    }

    #[test]
    fn rejects_document_with_no_objects_array() {
        let mut db = ComponentDatabase::new();
        let rid = ResourceId::from_path("materials/layered/root/materials.mat");
        let id = db.allocate_json_object(rid);
        db.register_mat_file_object(rid, id);

        let err = load_json_file(&mut db, r#"{"Version":1}"#, "materials/child.mat").unwrap_err();
        assert!(err.message.contains("Objects"));
        assert_eq!(db.get_materials(), vec![id]);
    }

    #[test]
    fn rejects_document_with_wrong_version() {
        let mut db = ComponentDatabase::new();
        let err = load_json_file(&mut db, r#"{"Version":2,"Objects":[]}"#, "materials/child.mat").unwrap_err();
        assert!(err.message.contains("Version"));
        assert!(db.get_materials().is_empty());
    }

    fn db_insert_shader_route_class(db: &mut ComponentDatabase) {
        // ComponentDatabase doesn't expose a public class-table mutator
        // (classes only ever arrive via a binary TYPE chunk), so this test
        // reaches in through `load` with a hand-built minimal stream
        // instead of fabricating a private-field shortcut.
        let class_id = strings::ID_BSMATERIAL_SHADERROUTECOMPONENT;
        let stream = build_single_class_stream(class_id);
        db.load(&stream).unwrap();
    }

    /// Builds the smallest `"BETH"`-framed stream that declares one empty,
    /// field-less class, so tests can exercise JSON ingestion against a
    /// known `ClassDef` without a full archive fixture. Class definitions
    /// arrive in a `TYPE` chunk (`load_type_chunk`'s own format: a
    /// count-prefixed run of `name offset / is_user / field count / fields`
    /// records), resolved against a preceding `STRT` chunk's raw string
    /// blob — not the like-named but otherwise-unused `CLAS` tag.
    fn build_single_class_stream(class_id: u32) -> Vec<u8> {
        let name = strings::name_of(class_id).expect("test class must be in the canonical table");
        let mut out = Vec::new();
        out.extend_from_slice(b"BETH");
        out.extend_from_slice(&1u32.to_le_bytes()); // version
        let mut strt = Vec::new();
        strt.extend_from_slice(name.as_bytes());
        strt.push(0);
        push_chunk(&mut out, b"STRT", &strt);
        let mut ty = Vec::new();
        ty.extend_from_slice(&1u32.to_le_bytes()); // class count
        ty.extend_from_slice(&0u32.to_le_bytes()); // name offset (start of blob)
        ty.push(0); // is_user
        ty.extend_from_slice(&0u16.to_le_bytes()); // field count
        push_chunk(&mut out, b"TYPE", &ty);
        out
    }

    fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
        out.extend_from_slice(tag);
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(payload);
    }
}
