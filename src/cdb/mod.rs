//! L3a: the component database — a forest of `MaterialObject`s, each a
//! bundle of typed `MaterialComponent`s, loaded from one or more reflection
//! streams and related to each other by single inheritance
//! (`BSComponentDB2::DBFileIndex::EdgeInfo`) and copy-on-write.
//!
//! Grounded on `original_source/src/bsmatcdb.{hpp,cpp}`: `BSMaterialsCDB`'s
//! object/class tables, `copyBaseObject`'s inheritance algorithm, and
//! `readAllChunks`'s top-level dispatch.

pub mod json_export;
pub mod project;
pub mod value;

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use log::{debug, warn};

use crate::error::CdbError;
use crate::reflection::{self, strings, RawChunk, Stream};
use crate::resource_id::{ResourceId, EXT_CODE_MAT};
use crate::util::byte_reader::ByteReader;

use value::{CdbValue, ClassTable, LinkResolver};

/// An arena index into a [`ComponentDatabase`]'s object table. Stable for
/// the lifetime of the database — `Vec` growth never invalidates one
/// (`SPEC_FULL.md` §8 property 9).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MaterialObjectId(pub u32);

pub struct FieldDef {
    pub name_id: u32,
    pub type_id: u32,
}

pub struct ClassDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
    pub is_user: bool,
}

/// One component slot on an object. `key = (class_id << 16) | index` is the
/// wire-format identity `ComponentInfo` carries — `index` is what lets a
/// material hold six `BSMaterial::LayerID` components side by side (layers
/// 0..5) instead of one slot stomping the next, matching `getComponentKey`.
pub struct MaterialComponent {
    pub class_id: u32,
    pub index: u16,
    pub value: Option<Rc<CdbValue>>,
}

pub struct MaterialObject {
    pub resource_id: ResourceId,
    pub db_id: u32,
    /// The object this one inherits unset components from — distinct from
    /// `parent` below. Set from `ObjectInfo`'s own base-object `db_id`
    /// field (or, for schema >= 1.11.33, a fallback resource-id lookup
    /// against objects already registered by an earlier file) or, for a
    /// JSON-ingested object, from its `"Parent"` path.
    pub base_object: Option<MaterialObjectId>,
    /// The family-graph parent: set only by `EdgeInfo` (binary stream) or a
    /// resolved `BSComponentDB2::ID` link field (JSON). Unrelated to
    /// inheritance — `getNextChildObject`'s depth-first walk and the
    /// "root `.mat` has no parent" test for [`ComponentDatabase::get_materials`]
    /// both use this field, never `base_object`.
    pub parent: Option<MaterialObjectId>,
    pub first_child: Option<MaterialObjectId>,
    pub next_sibling: Option<MaterialObjectId>,
    pub components: Vec<MaterialComponent>,
    /// Set for objects ingested from a JSON document rather than a binary
    /// `.cdb`/`.mat` stream — `isJSON()` in the source.
    pub is_json: bool,
}

impl MaterialObject {
    /// Finds a component by class, ignoring index — the common case for
    /// singleton components (at most one per object). For classes that
    /// repeat by index (layers, blenders, LOD materials), use
    /// [`Self::components_of_class`].
    pub fn find_component(&self, class_id: u32) -> Option<&MaterialComponent> {
        self.components.iter().find(|c| c.class_id == class_id)
    }

    pub fn find_component_indexed(&self, class_id: u32, index: u16) -> Option<&MaterialComponent> {
        self.components.iter().find(|c| c.class_id == class_id && c.index == index)
    }

    /// Every component of one class, in ascending index order — layers,
    /// blenders and LOD materials all repeat this way.
    pub fn components_of_class(&self, class_id: u32) -> impl Iterator<Item = &MaterialComponent> {
        self.components.iter().filter(move |c| c.class_id == class_id)
    }

    /// Depth-first-with-sibling-climb traversal, matching
    /// `getNextChildObject`: visits every descendant once.
    pub fn first_child_of(db: &ComponentDatabase, id: MaterialObjectId) -> Option<MaterialObjectId> {
        db.objects[id.0 as usize].first_child
    }
}

/// One component-class's designation for the `ObjectInfo`-record-size
/// discriminator: the class's own *declared field count* decides whether
/// each record in a `LIST` of `ObjectInfo` carries a parent resource id.
/// Confirmed against `bsmatcdb.cpp`'s `readAllChunks` — never a version
/// string, exactly as `SPEC_FULL.md` §9 records.
const OBJECT_INFO_PARENT_THRESHOLD: usize = 4;

pub struct ComponentDatabase {
    objects: Vec<MaterialObject>,
    classes: ClassTable,
    objects_by_db_id: HashMap<u32, MaterialObjectId>,
    /// Every object ever loaded with a non-nil persistent id, by resource
    /// id — the single `matFileObjectMap` of the source. Populated broadly
    /// (any nonzero persistent id) for binary-stream objects, enabling
    /// cross-file base-object resolution; JSON ingestion only registers
    /// into it the top-level, parent-less `.mat` objects it produces, per
    /// `loadJSONFile`'s own narrower merge rule. [`Self::get_materials`]
    /// filters this same map at query time rather than keeping a second,
    /// redundant index.
    objects_by_resource_id: HashMap<ResourceId, MaterialObjectId>,
    next_json_db_id: u32,
}

impl Default for ComponentDatabase {
    fn default() -> Self { Self::new() }
}

struct DbLinkResolver<'a> {
    by_db_id: &'a HashMap<u32, MaterialObjectId>,
}

impl LinkResolver for DbLinkResolver<'_> {
    fn resolve(&self, db_id: u32) -> Option<MaterialObjectId> { self.by_db_id.get(&db_id).copied() }
}

impl ComponentDatabase {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            classes: ClassTable::new(),
            objects_by_db_id: HashMap::new(),
            objects_by_resource_id: HashMap::new(),
            next_json_db_id: 0x0100_0000,
        }
    }

    pub fn object(&self, id: MaterialObjectId) -> &MaterialObject { &self.objects[id.0 as usize] }

    pub fn class(&self, class_id: u32) -> Option<&ClassDef> { self.classes.get(&class_id) }

    /// Every top-level (no graph parent) object whose extension is `.mat`,
    /// matching `getMaterials`'s query-time filter over `matFileObjectMap`.
    pub fn get_materials(&self) -> Vec<MaterialObjectId> {
        self.objects_by_resource_id
            .values()
            .copied()
            .filter(|id| {
                let obj = &self.objects[id.0 as usize];
                obj.resource_id.ext_code == EXT_CODE_MAT && obj.parent.is_none()
            })
            .collect()
    }

    /// Raw, unfiltered lookup by persistent resource id — `getMaterial`.
    pub fn get_material(&self, id: ResourceId) -> Option<MaterialObjectId> { self.objects_by_resource_id.get(&id).copied() }

    fn allocate_object(&mut self, resource_id: ResourceId, db_id: u32, is_json: bool) -> MaterialObjectId {
        let idx = self.objects.len() as u32;
        self.objects.push(MaterialObject {
            resource_id,
            db_id,
            base_object: None,
            parent: None,
            first_child: None,
            next_sibling: None,
            components: Vec::new(),
            is_json,
        });
        let id = MaterialObjectId(idx);
        self.objects_by_db_id.insert(db_id, id);
        id
    }

    fn link_child(&mut self, parent: MaterialObjectId, child: MaterialObjectId) {
        self.objects[child.0 as usize].parent = Some(parent);
        let old_head = self.objects[parent.0 as usize].first_child;
        self.objects[child.0 as usize].next_sibling = old_head;
        self.objects[parent.0 as usize].first_child = Some(child);
    }

    /// Walks to the ultimate base of `id`'s inheritance chain and
    /// materializes one [`MaterialComponent`] per base component the child
    /// doesn't already carry, sharing the base's value tree by `Rc` clone
    /// (a refcount bump, never a deep copy — property 10).
    ///
    /// `BSBind::ControllerComponent` is the one documented exception: the
    /// source never copies it from a base, instead always allocating a
    /// fresh, empty one, since controller bindings are never meant to be
    /// inherited.
    fn copy_base_object(&mut self, id: MaterialObjectId) {
        let Some(base_id) = self.objects[id.0 as usize].base_object else { return };
        let mut base = base_id;
        while let Some(next) = self.objects[base.0 as usize].base_object {
            base = next;
        }
        let base_keys: Vec<(u32, u16)> =
            self.objects[base.0 as usize].components.iter().map(|c| (c.class_id, c.index)).collect();
        for (class_id, index) in base_keys {
            if self.objects[id.0 as usize].find_component_indexed(class_id, index).is_some() {
                continue;
            }
            if class_id == strings::ID_BSBIND_CONTROLLERCOMPONENT {
                self.objects[id.0 as usize].components.push(MaterialComponent { class_id, index, value: None });
                continue;
            }
            let value =
                self.objects[base.0 as usize].find_component_indexed(class_id, index).and_then(|c| c.value.clone());
            self.objects[id.0 as usize].components.push(MaterialComponent { class_id, index, value });
        }
    }

    fn find_or_create_component(&mut self, id: MaterialObjectId, class_id: u32, index: u16) -> usize {
        if let Some(pos) =
            self.objects[id.0 as usize].components.iter().position(|c| c.class_id == class_id && c.index == index)
        {
            return pos;
        }
        self.objects[id.0 as usize].components.push(MaterialComponent { class_id, index, value: None });
        self.objects[id.0 as usize].components.len() - 1
    }

    /// Parses one reflection stream (a `.cdb` or a standalone `.mat` file)
    /// and merges its objects/components into this database.
    ///
    /// A schema mismatch on any class redefinition abandons only *this*
    /// call — already-loaded objects from earlier calls are untouched,
    /// matching the source's "corruption in one file never corrupts
    /// another" tolerance (§7).
    pub fn load(&mut self, data: &[u8]) -> Result<(), CdbError> {
        let mut stream = Stream::open(data)?;
        let mut strt = reflection::StringTable::empty();
        let mut component_queue: VecDeque<(u32, u32, u16)> = VecDeque::new();
        let start_idx = self.objects.len();

        while let Some(chunk) = stream.next_chunk() {
            match self.dispatch_chunk(chunk, &mut strt, &mut component_queue, &mut stream) {
                Ok(true) => {}
                Ok(false) => {
                    self.register_persistent_objects(start_idx);
                    return Ok(()); // schema mismatch: abandon silently
                }
                Err(e) => {
                    self.register_persistent_objects(start_idx);
                    return Err(e);
                }
            }
        }
        self.register_persistent_objects(start_idx);
        Ok(())
    }

    /// Final per-file pass: every object allocated by this call with a
    /// non-nil persistent id is registered (overwriting any earlier entry
    /// at the same resource id), matching the source's end-of-`readAllChunks`
    /// `storeMatFileObject` sweep — unconditional on extension or parentage,
    /// unlike JSON ingestion's narrower merge rule.
    fn register_persistent_objects(&mut self, start_idx: usize) {
        for idx in start_idx..self.objects.len() {
            let obj = &self.objects[idx];
            if !obj.resource_id.is_nil() {
                self.objects_by_resource_id.insert(obj.resource_id, MaterialObjectId(idx as u32));
            }
        }
    }

    /// Returns `Ok(true)` to continue, `Ok(false)` to abandon the whole file
    /// (schema mismatch), matching `readAllChunks`'s early-return policy.
    fn dispatch_chunk(
        &mut self,
        chunk: RawChunk,
        strt: &mut reflection::StringTable,
        component_queue: &mut VecDeque<(u32, u32, u16)>,
        stream: &mut Stream,
    ) -> Result<bool, CdbError> {
        let mut payload = chunk.payload;
        match chunk.tag {
            reflection::TAG_STRT => {
                *strt = reflection::StringTable::from_chunk(payload.remaining_slice());
            }
            reflection::TAG_TYPE => {
                if !self.load_type_chunk(&mut payload, strt) {
                    return Ok(false);
                }
            }
            reflection::TAG_LIST => self.load_top_level_list(&mut payload, strt, component_queue)?,
            reflection::TAG_OBJT | reflection::TAG_DIFF => {
                self.load_component(&mut payload, chunk.tag == reflection::TAG_DIFF, component_queue, stream);
            }
            other => {
                debug!("reflection stream: skipping unrecognized top-level chunk {other:#x}");
            }
        }
        Ok(true)
    }

    /// One `TYPE` chunk: a count-prefixed run of class definitions. Each
    /// record is the class's own name, an `is_user` flag, and its declared
    /// fields (name + type, each resolved through the file-local string
    /// table). Redefining a class already known with a different field
    /// count is the one documented "abandon this file" condition.
    fn load_type_chunk(&mut self, payload: &mut ByteReader, strt: &reflection::StringTable) -> bool {
        let count = payload.read_u32().unwrap_or(0);
        for _ in 0..count {
            let name_off = payload.read_u32().unwrap_or(0);
            let class_id = strt.resolve(name_off);
            let is_user = payload.read_u8().unwrap_or(0) != 0;
            let field_count = payload.read_u16().unwrap_or(0) as usize;
            let mut fields = Vec::with_capacity(field_count);
            for _ in 0..field_count {
                let field_name_off = payload.read_u32().unwrap_or(0);
                let field_type_off = payload.read_u32().unwrap_or(0);
                fields.push(FieldDef { name_id: strt.resolve(field_name_off), type_id: strt.resolve(field_type_off) });
            }
            if class_id == strings::ID_UNKNOWN {
                // A class name this crate's canonical table doesn't carry:
                // there is no stable id to key a registration on, so every
                // such class is decoded generically as `String_Unknown`
                // (drain-and-ignore) rather than merged into one bucket,
                // which would cause unrelated unknown classes to spuriously
                // collide on the schema-mismatch check below.
                continue;
            }
            if let Some(existing) = self.classes.get(&class_id) {
                if existing.fields.len() != fields.len() {
                    warn!("class id {class_id} redefined with a different field count, abandoning file");
                    return false;
                }
            }
            self.classes.insert(class_id, ClassDef { name: strings::name_of(class_id).unwrap_or("?").to_string(), fields, is_user });
        }
        true
    }

    /// `ObjectInfo`'s own field count decides whether each record in the
    /// list carries a trailing parent resource id (33 bytes) or not (21).
    fn object_info_record_size(&self) -> usize {
        match self.classes.get(&strings::ID_BSCOMPONENTDB2_DBFILEINDEX_OBJECTINFO) {
            Some(def) if def.fields.len() > OBJECT_INFO_PARENT_THRESHOLD => 33,
            _ => 21,
        }
    }

    fn load_top_level_list(
        &mut self,
        payload: &mut ByteReader,
        strt: &reflection::StringTable,
        component_queue: &mut VecDeque<(u32, u32, u16)>,
    ) -> Result<(), CdbError> {
        let element_class_off = payload.read_u32().unwrap_or(0);
        let element_class = strt.resolve(element_class_off);
        let count = payload.read_u32().unwrap_or(0);
        match element_class {
            strings::ID_BSCOMPONENTDB2_DBFILEINDEX_OBJECTINFO => {
                let record_size = self.object_info_record_size();
                for _ in 0..count {
                    let db_id = payload.read_u32().unwrap_or(0);
                    let dir_hash = payload.read_u32().unwrap_or(0);
                    let file_hash = payload.read_u32().unwrap_or(0);
                    let ext_code = payload.read_u32().unwrap_or(0);
                    let resource_id = ResourceId::new(dir_hash, file_hash, ext_code);
                    let base_object_db_id = payload.read_u32().unwrap_or(0);
                    let parent_rid = if record_size == 33 {
                        let pd = payload.read_u32().unwrap_or(0);
                        let pf = payload.read_u32().unwrap_or(0);
                        let pe = payload.read_u32().unwrap_or(0);
                        Some(ResourceId::new(pd, pf, pe))
                    } else {
                        None
                    };
                    let has_data = payload.read_u8().unwrap_or(0) != 0;
                    // Dedup rule: a duplicate persistent id with no data of
                    // its own is non-authoritative and skipped outright;
                    // otherwise this record replaces whatever the id
                    // previously named (the source's `storeMatFileObject`
                    // "last one wins" rule carried one step earlier).
                    if !has_data
                        && self
                            .objects_by_db_id
                            .values()
                            .any(|id| self.objects[id.0 as usize].resource_id == resource_id)
                    {
                        continue;
                    }
                    let is_json = false;
                    let obj_id = self.allocate_object(resource_id, db_id, is_json);
                    if base_object_db_id != 0 {
                        if let Some(&base_id) = self.objects_by_db_id.get(&base_object_db_id) {
                            self.objects[obj_id.0 as usize].base_object = Some(base_id);
                        }
                    }
                    if let Some(prid) = parent_rid {
                        if let Some(&parent_id) = self.find_obj_by_resource_id(prid).as_ref() {
                            self.link_child(parent_id, obj_id);
                        }
                    }
                }
            }
            strings::ID_BSCOMPONENTDB2_DBFILEINDEX_COMPONENTINFO => {
                // `key = (class_id << 16) | index` is already a pair of
                // canonical ids/indices, not a string-table offset — no
                // `strt.resolve` here, unlike every other name reference in
                // this file.
                for _ in 0..count {
                    let db_id = payload.read_u32().unwrap_or(0);
                    let key = payload.read_u32().unwrap_or(0);
                    let class_id = key >> 16;
                    let index = (key & 0xFFFF) as u16;
                    component_queue.push_back((db_id, class_id, index));
                }
            }
            strings::ID_BSCOMPONENTDB2_DBFILEINDEX_EDGEINFO => {
                for _ in 0..count {
                    let parent_db = payload.read_u32().unwrap_or(0);
                    let child_db = payload.read_u32().unwrap_or(0);
                    let (Some(&parent_id), Some(&child_id)) =
                        (self.objects_by_db_id.get(&parent_db), self.objects_by_db_id.get(&child_db))
                    else {
                        continue;
                    };
                    if self.objects[child_id.0 as usize].parent.is_some() {
                        warn!("edge info: object already has a parent, skipping duplicate edge");
                        continue;
                    }
                    self.link_child(parent_id, child_id);
                }
            }
            _ => {
                debug!("reflection stream: skipping unrecognized top-level LIST element class {element_class}");
            }
        }
        Ok(())
    }

    fn find_obj_by_resource_id(&self, rid: ResourceId) -> Option<MaterialObjectId> {
        self.objects_by_db_id.values().copied().find(|id| self.objects[id.0 as usize].resource_id == rid)
    }

    /// One `OBJT`/`DIFF` chunk: pops the next queued `(dbID, classID)` pair,
    /// resolves the target object, applies base-object copy-on-first-touch,
    /// then decodes the field values via [`value::load_item`].
    fn load_component(
        &mut self,
        chunk: &mut ByteReader,
        is_diff: bool,
        component_queue: &mut VecDeque<(u32, u32, u16)>,
        stream: &mut Stream,
    ) {
        let Some((db_id, class_id, index)) = component_queue.pop_front() else {
            warn!("OBJT/DIFF chunk with no queued component info, skipping");
            return;
        };
        let Some(&obj_id) = self.objects_by_db_id.get(&db_id) else {
            warn!("OBJT/DIFF references unknown dbID {db_id}, skipping");
            return;
        };
        if self.objects[obj_id.0 as usize].find_component_indexed(class_id, index).is_none() {
            self.copy_base_object(obj_id);
        }
        let slot_idx = self.find_or_create_component(obj_id, class_id, index);
        let resolver = DbLinkResolver { by_db_id: &self.objects_by_db_id };
        let mut slot = self.objects[obj_id.0 as usize].components[slot_idx].value.take();
        value::load_item(&mut slot, stream, chunk, is_diff, class_id, &self.classes, &resolver);
        self.objects[obj_id.0 as usize].components[slot_idx].value = slot;
    }

    /// Allocates a fresh top-level object for JSON ingestion, returning its
    /// id and the `dbID` it was assigned (`loop_index + 0x01000000`, per the
    /// source's JSON-origin id space, kept disjoint from binary-stream ids).
    pub fn allocate_json_object(&mut self, resource_id: ResourceId) -> MaterialObjectId {
        let db_id = self.next_json_db_id;
        self.next_json_db_id += 1;
        let id = self.allocate_object(resource_id, db_id, true);
        id
    }

    pub fn register_mat_file_object(&mut self, resource_id: ResourceId, id: MaterialObjectId) {
        self.objects_by_resource_id.insert(resource_id, id);
    }

    pub fn link_parent_child(&mut self, parent: MaterialObjectId, child: MaterialObjectId) {
        self.link_child(parent, child);
    }

    pub fn object_by_db_id(&self, db_id: u32) -> Option<MaterialObjectId> { self.objects_by_db_id.get(&db_id).copied() }

    pub fn object_by_resource_id(&self, rid: ResourceId) -> Option<MaterialObjectId> { self.find_obj_by_resource_id(rid) }

    pub fn set_component(&mut self, id: MaterialObjectId, class_id: u32, value: Option<Rc<CdbValue>>) {
        self.set_component_indexed(id, class_id, 0, value);
    }

    pub fn set_component_indexed(&mut self, id: MaterialObjectId, class_id: u32, index: u16, value: Option<Rc<CdbValue>>) {
        let idx = self.find_or_create_component(id, class_id, index);
        self.objects[id.0 as usize].components[idx].value = value;
    }

    /// Sets a freshly allocated JSON object's inheritance base — the
    /// `"Parent"` path's resolved object, per `loadJSONFile`'s
    /// `o->baseObject = parentPtr` assignment.
    pub(crate) fn set_base_object(&mut self, id: MaterialObjectId, base: MaterialObjectId) {
        self.objects[id.0 as usize].base_object = Some(base);
    }

    /// Same base-inheritance gate [`Self::load_component`] applies to a
    /// binary `OBJT`/`DIFF` chunk, exposed for JSON ingestion: the first
    /// write to a given `(class_id, index)` slot triggers copy-on-write
    /// materialization from the base object if the slot isn't already
    /// populated, then hands back that slot's previous value (for the
    /// caller to mutate and hand back via [`Self::set_component_indexed`]).
    pub(crate) fn take_component_for_write(
        &mut self,
        id: MaterialObjectId,
        class_id: u32,
        index: u16,
    ) -> Option<Rc<CdbValue>> {
        if self.objects[id.0 as usize].find_component_indexed(class_id, index).is_none() {
            self.copy_base_object(id);
        }
        let idx = self.find_or_create_component(id, class_id, index);
        self.objects[id.0 as usize].components[idx].value.take()
    }

    pub fn link_resolver(&self) -> impl LinkResolver + '_ { DbLinkResolver { by_db_id: &self.objects_by_db_id } }

    pub fn classes(&self) -> &ClassTable { &self.classes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_id::ResourceId;

    /// `MaterialObjectId`s stay valid across further `Vec` growth
    /// (`SPEC_FULL.md` §8 property 9): an id handed out by an early
    /// allocation must still resolve to the same object after many more
    /// objects are pushed onto the same database.
    #[test]
    fn object_ids_survive_further_allocation() {
        let mut db = ComponentDatabase::new();
        let first_rid = ResourceId::from_path("materials/first.mat");
        let first_id = db.allocate_json_object(first_rid);
        db.register_mat_file_object(first_rid, first_id);

        for i in 0..200 {
            let rid = ResourceId::from_path(&format!("materials/filler_{i}.mat"));
            db.allocate_json_object(rid);
        }

        assert_eq!(db.object(first_id).resource_id, first_rid);
        assert_eq!(db.get_material(first_rid), Some(first_id));
    }

    #[test]
    fn link_parent_child_records_the_relationship() {
        let mut db = ComponentDatabase::new();
        let parent = db.allocate_json_object(ResourceId::from_path("materials/parent.mat"));
        let child = db.allocate_json_object(ResourceId::from_path("materials/child.mat"));
        db.link_parent_child(parent, child);
        assert_eq!(db.object(child).parent, Some(parent));
        assert_eq!(db.object(parent).first_child, Some(child));
    }
}
