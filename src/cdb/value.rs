//! The generic, class-definition-driven value tree every `OBJT`/`DIFF`
//! chunk decodes into, and the copy-on-write sharing `MaterialObject`
//! inheritance relies on.
//!
//! Grounded on `original_source/src/bsmatcdb.cpp`'s `loadItem` (the
//! recursive field-by-field decoder) and `CDBObject`'s typed subclasses in
//! `bsmatcdb.hpp`. Sharing is `Rc`-based per `SPEC_FULL.md`'s arena design
//! note: `Rc::make_mut` is the idiomatic stand-in for the source's manual
//! `ref_cnt > 0` clone-before-mutate check.

use std::collections::HashMap;
use std::rc::Rc;

use crate::reflection::{self, strings, Stream};
use crate::util::byte_reader::ByteReader;

use super::{ClassDef, MaterialObjectId};

/// One class's declared field layout, keyed by canonical class id in the
/// owning `ComponentDatabase`.
pub type ClassTable = HashMap<u32, ClassDef>;

/// A fully decoded field/element value. Leaves are scalars; `Struct`/`List`/
/// `Map`/`Ref` hold `Rc`-shared children so that an object inheriting an
/// untouched component from its base shares the identical allocation until
/// a later diff actually touches it (property 10 in `SPEC_FULL.md` §8).
#[derive(Debug)]
pub enum CdbValue {
    Null,
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Bool(bool),
    Float(f32),
    Double(f64),
    String(Rc<str>),
    /// `class_id` names the `ClassDef` this struct was decoded against;
    /// `fields[n]` is `None` for a field never populated by any snapshot or
    /// diff seen so far (the CDB equivalent of "default value").
    Struct { class_id: u32, fields: Vec<Option<Rc<CdbValue>>> },
    List { element_type: u32, items: Vec<Rc<CdbValue>> },
    Map { key_type: u32, value_type: u32, items: Vec<(Rc<CdbValue>, Rc<CdbValue>)> },
    Ref { target_type: u32, item: Option<Rc<CdbValue>> },
    /// A `BSComponentDB2::ID` reference, resolved against the database's
    /// object table at load time (or left unresolved if the referenced
    /// `dbID` doesn't exist yet — the JSON exporter renders that as `""`).
    Link(Option<MaterialObjectId>),
}

impl Clone for CdbValue {
    /// A shallow clone: `Rc` children are pointer-cloned (refcount bump),
    /// never deep-copied. This is exactly `copyObject`'s recursive
    /// refcount-increment semantics — and exactly what `Rc::make_mut` needs
    /// to produce a uniquely-owned top node while still sharing everything
    /// beneath it, lazily, until a deeper mutation forces another clone.
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Int8(v) => Self::Int8(*v),
            Self::UInt8(v) => Self::UInt8(*v),
            Self::Int16(v) => Self::Int16(*v),
            Self::UInt16(v) => Self::UInt16(*v),
            Self::Int32(v) => Self::Int32(*v),
            Self::UInt32(v) => Self::UInt32(*v),
            Self::Int64(v) => Self::Int64(*v),
            Self::UInt64(v) => Self::UInt64(*v),
            Self::Bool(v) => Self::Bool(*v),
            Self::Float(v) => Self::Float(*v),
            Self::Double(v) => Self::Double(*v),
            Self::String(v) => Self::String(v.clone()),
            Self::Struct { class_id, fields } => Self::Struct { class_id: *class_id, fields: fields.clone() },
            Self::List { element_type, items } => Self::List { element_type: *element_type, items: items.clone() },
            Self::Map { key_type, value_type, items } => {
                Self::Map { key_type: *key_type, value_type: *value_type, items: items.clone() }
            }
            Self::Ref { target_type, item } => Self::Ref { target_type: *target_type, item: item.clone() },
            Self::Link(id) => Self::Link(*id),
        }
    }
}

impl CdbValue {
    pub fn type_id(&self) -> u32 {
        match self {
            Self::Null => strings::ID_NONE,
            Self::String(_) => strings::ID_STRING,
            Self::List { .. } => strings::ID_LIST,
            Self::Map { .. } => strings::ID_MAP,
            Self::Ref { .. } => strings::ID_REF,
            Self::Int8(_) => strings::ID_INT8,
            Self::UInt8(_) => strings::ID_UINT8,
            Self::Int16(_) => strings::ID_INT16,
            Self::UInt16(_) => strings::ID_UINT16,
            Self::Int32(_) => strings::ID_INT32,
            Self::UInt32(_) => strings::ID_UINT32,
            Self::Int64(_) => strings::ID_INT64,
            Self::UInt64(_) => strings::ID_UINT64,
            Self::Bool(_) => strings::ID_BOOL,
            Self::Float(_) => strings::ID_FLOAT,
            Self::Double(_) => strings::ID_DOUBLE,
            Self::Link(_) => strings::ID_BSCOMPONENTDB2_ID,
            Self::Struct { class_id, .. } => *class_id,
        }
    }

    fn default_for(item_type: u32, classes: &ClassTable) -> Self {
        match item_type {
            strings::ID_NONE => Self::Null,
            strings::ID_STRING => Self::String(Rc::from("")),
            strings::ID_LIST => Self::List { element_type: strings::ID_NONE, items: Vec::new() },
            strings::ID_MAP => {
                Self::Map { key_type: strings::ID_NONE, value_type: strings::ID_NONE, items: Vec::new() }
            }
            strings::ID_REF => Self::Ref { target_type: strings::ID_NONE, item: None },
            strings::ID_INT8 => Self::Int8(0),
            strings::ID_UINT8 => Self::UInt8(0),
            strings::ID_INT16 => Self::Int16(0),
            strings::ID_UINT16 => Self::UInt16(0),
            strings::ID_INT32 => Self::Int32(0),
            strings::ID_UINT32 => Self::UInt32(0),
            strings::ID_INT64 => Self::Int64(0),
            strings::ID_UINT64 => Self::UInt64(0),
            strings::ID_BOOL => Self::Bool(false),
            strings::ID_FLOAT => Self::Float(0.0),
            strings::ID_DOUBLE => Self::Double(0.0),
            strings::ID_BSCOMPONENTDB2_ID => Self::Link(None),
            id => {
                let field_count = classes.get(&id).map(|c| c.fields.len()).unwrap_or(0);
                Self::Struct { class_id: id, fields: vec![None; field_count] }
            }
        }
    }
}

/// Resolves a `BSComponentDB2::ID`'s `dbID` to an already-allocated object,
/// if one exists yet (objects are allocated densely from `ObjectInfo`
/// before any component is decoded, so forward references within one file
/// always resolve; references into files not yet loaded do not).
pub trait LinkResolver {
    fn resolve(&self, db_id: u32) -> Option<MaterialObjectId>;
}

/// Decodes (or re-decodes, for a `DIFF`) one field/element value in place.
///
/// `slot` holds the previous value, if any — reused directly when the diff
/// leaves a nested field untouched, cloned via [`Rc::make_mut`] the moment
/// this call needs to change anything under it. This is the single place
/// the clone-on-write invariant is enforced; every recursive call goes
/// through here again for its own nested fields.
pub fn load_item(
    slot: &mut Option<Rc<CdbValue>>,
    stream: &mut Stream,
    chunk: &mut ByteReader,
    is_diff: bool,
    item_type: u32,
    classes: &ClassTable,
    links: &dyn LinkResolver,
) {
    let class_def = if item_type > strings::ID_UNKNOWN { classes.get(&item_type) } else { None };
    let effective_type = if item_type > strings::ID_UNKNOWN && class_def.is_none() {
        strings::ID_UNKNOWN
    } else {
        item_type
    };

    let needs_fresh = match slot {
        Some(rc) => rc.type_id() != effective_type,
        None => true,
    };
    if needs_fresh {
        *slot = Some(Rc::new(CdbValue::default_for(effective_type, classes)));
    } else if let Some(rc) = slot {
        if Rc::strong_count(rc) > 1 {
            *rc = Rc::new((**rc).clone());
        }
    }
    let rc = slot.as_mut().expect("just populated above");

    match effective_type {
        strings::ID_NONE => {}
        strings::ID_UNKNOWN => {
            // Unknown class/primitive: the chunk cursor still owns this
            // field's bytes, but there is nothing to do with them except
            // leave the cursor to move past them on its own.
        }
        strings::ID_INT8 => *Rc::make_mut(rc) = CdbValue::Int8(chunk.read_i8().unwrap_or(0)),
        strings::ID_UINT8 => *Rc::make_mut(rc) = CdbValue::UInt8(chunk.read_u8().unwrap_or(0)),
        strings::ID_INT16 => *Rc::make_mut(rc) = CdbValue::Int16(chunk.read_i16().unwrap_or(0)),
        strings::ID_UINT16 => *Rc::make_mut(rc) = CdbValue::UInt16(chunk.read_u16().unwrap_or(0)),
        strings::ID_INT32 => *Rc::make_mut(rc) = CdbValue::Int32(chunk.read_i32().unwrap_or(0)),
        strings::ID_UINT32 => *Rc::make_mut(rc) = CdbValue::UInt32(chunk.read_u32().unwrap_or(0)),
        strings::ID_INT64 => *Rc::make_mut(rc) = CdbValue::Int64(chunk.read_i64().unwrap_or(0)),
        strings::ID_UINT64 => *Rc::make_mut(rc) = CdbValue::UInt64(chunk.read_u64().unwrap_or(0)),
        strings::ID_BOOL => *Rc::make_mut(rc) = CdbValue::Bool(chunk.read_bool().unwrap_or(false)),
        strings::ID_FLOAT => {
            let bits = chunk.read_u32().unwrap_or(0);
            *Rc::make_mut(rc) = CdbValue::Float(reflection::remap_float_bits(bits));
        }
        strings::ID_DOUBLE => *Rc::make_mut(rc) = CdbValue::Double(chunk.read_f64().unwrap_or(0.0)),
        strings::ID_STRING => {
            let len = chunk.read_u16().unwrap_or(0) as usize;
            let s = chunk.read_string(len).unwrap_or_default();
            *Rc::make_mut(rc) = CdbValue::String(Rc::from(s.as_str()));
        }
        strings::ID_BSCOMPONENTDB2_ID => {
            // Special-cased by the source: a single raw `dbID` read
            // directly from the *current* chunk, not a nested one.
            let db_id = chunk.read_u32().unwrap_or(0);
            *Rc::make_mut(rc) = CdbValue::Link(links.resolve(db_id));
        }
        strings::ID_LIST => load_list(rc, stream, classes, links),
        strings::ID_MAP => load_map(rc, stream, classes, links),
        strings::ID_REF => load_ref(rc, stream, classes, links),
        _ => {
            // A registered struct class. `is_user` classes store their
            // fields in a nested USER/USRD chunk; ordinary classes read
            // fields directly out of the chunk we were handed.
            let def = class_def.expect("effective_type only reaches here when resolved");
            let field_count = def.fields.len() as u32;
            let is_user = def.is_user;
            if is_user {
                if let Some(nested) = stream.next_chunk() {
                    let mut payload = nested.payload;
                    decode_struct_fields(rc, &mut payload, is_diff, field_count, def, stream, classes, links);
                }
            } else {
                decode_struct_fields(rc, chunk, is_diff, field_count, def, stream, classes, links);
            }
        }
    }
}

fn decode_struct_fields(
    rc: &mut Rc<CdbValue>,
    chunk: &mut ByteReader,
    is_diff: bool,
    field_count: u32,
    def: &ClassDef,
    stream: &mut Stream,
    classes: &ClassTable,
    links: &dyn LinkResolver,
) {
    let mut cur = 0u32;
    while let Some(idx) = reflection::next_field_index(chunk, &mut cur, field_count, is_diff) {
        let field_type = def.fields[idx as usize].type_id;
        let value = Rc::make_mut(rc);
        let CdbValue::Struct { fields, .. } = value else {
            unreachable!("default_for always produces Struct for a class id")
        };
        if fields.len() <= idx as usize {
            fields.resize(idx as usize + 1, None);
        }
        load_item(&mut fields[idx as usize], stream, chunk, is_diff, field_type, classes, links);
    }
}

fn load_list(rc: &mut Rc<CdbValue>, stream: &mut Stream, classes: &ClassTable, links: &dyn LinkResolver) {
    let Some(nested) = stream.next_chunk() else { return };
    let mut payload = nested.payload;
    let element_type = payload.read_u32().unwrap_or(strings::ID_NONE);
    let count = payload.read_u32().unwrap_or(0);
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut slot = None;
        load_item(&mut slot, stream, &mut payload, false, element_type, classes, links);
        if let Some(v) = slot {
            items.push(v);
        }
    }
    *Rc::make_mut(rc) = CdbValue::List { element_type, items };
}

fn load_map(rc: &mut Rc<CdbValue>, stream: &mut Stream, classes: &ClassTable, links: &dyn LinkResolver) {
    let Some(nested) = stream.next_chunk() else { return };
    let mut payload = nested.payload;
    let key_type = payload.read_u32().unwrap_or(strings::ID_NONE);
    let value_type = payload.read_u32().unwrap_or(strings::ID_NONE);
    let count = payload.read_u32().unwrap_or(0);
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut key_slot = None;
        load_item(&mut key_slot, stream, &mut payload, false, key_type, classes, links);
        let mut value_slot = None;
        load_item(&mut value_slot, stream, &mut payload, false, value_type, classes, links);
        if let (Some(k), Some(v)) = (key_slot, value_slot) {
            items.push((k, v));
        }
    }
    *Rc::make_mut(rc) = CdbValue::Map { key_type, value_type, items };
}

fn load_ref(rc: &mut Rc<CdbValue>, stream: &mut Stream, classes: &ClassTable, links: &dyn LinkResolver) {
    let Some(nested) = stream.next_chunk() else { return };
    let mut payload = nested.payload;
    let target_type = payload.read_u32().unwrap_or(strings::ID_NONE);
    let mut slot = None;
    if target_type != strings::ID_NONE {
        load_item(&mut slot, stream, &mut payload, false, target_type, classes, links);
    }
    *Rc::make_mut(rc) = CdbValue::Ref { target_type, item: slot };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLinks;
    impl LinkResolver for NoLinks {
        fn resolve(&self, _db_id: u32) -> Option<MaterialObjectId> { None }
    }

    fn empty_stream() -> Stream<'static> {
        static DATA: &[u8] = &[0x42, 0x45, 0x54, 0x48, 4, 0, 0, 0]; // "BETH" + version 4
        Stream::open(DATA).unwrap()
    }

    #[test]
    fn scalar_roundtrip() {
        let mut slot = None;
        let bytes = 42i32.to_le_bytes();
        let mut chunk = ByteReader::new(&bytes);
        let classes = ClassTable::new();
        let mut stream = empty_stream();
        load_item(&mut slot, &mut stream, &mut chunk, false, strings::ID_INT32, &classes, &NoLinks);
        match slot.as_deref() {
            Some(CdbValue::Int32(v)) => assert_eq!(*v, 42),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn shared_struct_clones_only_on_write() {
        let mut classes = ClassTable::new();
        classes.insert(
            100,
            ClassDef {
                name: "Test".into(),
                fields: vec![super::FieldDef { name_id: 0, type_id: strings::ID_INT32 }],
                is_user: false,
            },
        );
        let mut a_slot = None;
        let bytes = 1i32.to_le_bytes();
        let mut chunk = ByteReader::new(&bytes);
        let mut stream = empty_stream();
        load_item(&mut a_slot, &mut stream, &mut chunk, false, 100, &classes, &NoLinks);
        let shared = a_slot.clone();
        let mut b_slot = shared.clone();
        assert!(Rc::ptr_eq(a_slot.as_ref().unwrap(), b_slot.as_ref().unwrap()));
        // Touching b via a diff that sets field 0 must clone before mutating.
        let diff_bytes: Vec<u8> =
            0u16.to_le_bytes().iter().chain(9i32.to_le_bytes().iter()).copied().collect();
        let mut diff_chunk = ByteReader::new(&diff_bytes);
        load_item(&mut b_slot, &mut stream, &mut diff_chunk, true, 100, &classes, &NoLinks);
        assert!(!Rc::ptr_eq(a_slot.as_ref().unwrap(), b_slot.as_ref().unwrap()));
    }
}
