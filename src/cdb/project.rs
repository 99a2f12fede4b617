//! A read-only typed projection over a loaded material object's generic
//! component tree.
//!
//! Per `SPEC_FULL.md` §4's "per-class reader architecture" design note, every
//! component is already fully decoded into a generic [`CdbValue::Struct`] by
//! [`super::value::load_item`] — this module adds a second pass that
//! recognizes the handful of component classes spec.md §3/§6 names and
//! exposes them as a flat, friendlier view, without ever re-parsing bytes.
//! Fields are matched by *position* within the class's declared field list,
//! not by name: the real per-class readers dispatch "known at compile time"
//! against a field number, and our partial canonical string table (see
//! `reflection::strings`) cannot resolve most individual scalar field names
//! anyway, so positional matching is both the grounded and the only
//! available approach here. Components this pass doesn't recognize are
//! still present in the generic tree (and still round-trip through
//! [`super::json_export`]) — they are simply not projected here.

use std::rc::Rc;

use crate::reflection::strings;

use super::value::CdbValue;
use super::{ComponentDatabase, MaterialObject, MaterialObjectId};

/// A plain four-component float vector — stands in for `XMFLOAT4`-typed
/// fields (tints, directions) without pulling in a full linear-algebra
/// dependency neither spec nor teacher asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn splat(v: f32) -> Self { Self { x: v, y: v, z: v, w: v } }
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }
}

fn field_at(fields: &[Option<Rc<CdbValue>>], i: usize) -> Option<&CdbValue> {
    fields.get(i).and_then(|f| f.as_deref())
}

fn f32_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: f32) -> f32 {
    match field_at(fields, i) {
        Some(CdbValue::Float(v)) => *v,
        Some(CdbValue::Double(v)) => *v as f32,
        _ => default,
    }
}

fn bool_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: bool) -> bool {
    match field_at(fields, i) {
        Some(CdbValue::Bool(v)) => *v,
        _ => default,
    }
}

fn u32_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: u32) -> u32 {
    match field_at(fields, i) {
        Some(CdbValue::UInt32(v)) => *v,
        Some(CdbValue::UInt8(v)) => *v as u32,
        Some(CdbValue::UInt16(v)) => *v as u32,
        Some(CdbValue::Int32(v)) => *v as u32,
        _ => default,
    }
}

/// `"MATERIAL_LAYER_n"` / `"BLEND_LAYER_n"` are parsed by reading the digit
/// run at the fixed suffix offset; anything that doesn't parse to a valid
/// byte is rejected and the caller's default stands, matching spec §4.4's
/// "layer/blender index parsing" contract.
fn parse_named_index(s: &str, prefix: &str) -> Option<u8> {
    s.strip_prefix(prefix).and_then(|d| d.parse::<u8>().ok())
}

/// A `u8` field that may arrive either as a small integer or as a
/// `"MATERIAL_LAYER_n"`-style enum string naming a layer/blender slot.
fn u8_field_or_named(fields: &[Option<Rc<CdbValue>>], i: usize, prefix: &str, default: u8) -> u8 {
    match field_at(fields, i) {
        Some(CdbValue::UInt8(v)) => *v,
        Some(CdbValue::Int32(v)) => *v as u8,
        Some(CdbValue::String(s)) => parse_named_index(s, prefix).unwrap_or(default),
        _ => default,
    }
}

fn vec4_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: Vec4) -> Vec4 {
    match field_at(fields, i) {
        Some(CdbValue::Struct { fields: sub, .. }) if sub.len() >= 4 => Vec4::new(
            f32_field(sub, 0, default.x),
            f32_field(sub, 1, default.y),
            f32_field(sub, 2, default.z),
            f32_field(sub, 3, default.w),
        ),
        _ => default,
    }
}

/// Matches a string field against a length-prefixed enum catalog (e.g.
/// blend modes: `"\004Lerp\010Additive\013Subtractive\016Multiplicative"`).
/// A non-match leaves the caller's prior value untouched, per §4.4.
fn match_enum_catalog(catalog: &[&str], value: &str) -> Option<u8> {
    catalog.iter().position(|s| *s == value).map(|i| i as u8)
}

const BLEND_MODE_CATALOG: &[&str] = &["Lerp", "Additive", "Subtractive", "Multiplicative"];

fn blend_mode_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: u8) -> u8 {
    match field_at(fields, i) {
        Some(CdbValue::String(s)) => match_enum_catalog(BLEND_MODE_CATALOG, s).unwrap_or(default),
        Some(CdbValue::UInt8(v)) => *v,
        _ => default,
    }
}

const SHADER_ROUTE_CATALOG: &[&str] =
    &["Deferred", "Effect", "PlanetaryRing", "PrecomputedScattering", "Water"];

fn shader_route_field(fields: &[Option<Rc<CdbValue>>], i: usize, default: u8) -> u8 {
    match field_at(fields, i) {
        Some(CdbValue::String(s)) => match_enum_catalog(SHADER_ROUTE_CATALOG, s).unwrap_or(default),
        Some(CdbValue::UInt8(v)) => *v,
        _ => default,
    }
}

#[derive(Debug)]
pub struct EmissiveSettings {
    pub disabled: bool,
    pub source_layer: u8,
    pub mask_source_blender: u8,
    pub clip_threshold: f32,
    pub luminous_emittance: f32,
    pub emissive_tint: Vec4,
    pub exposure_offset: f32,
    pub max_offset: f32,
    pub min_offset: f32,
}

impl Default for EmissiveSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            source_layer: 0,
            mask_source_blender: 0,
            clip_threshold: 0.0,
            luminous_emittance: 432.0,
            emissive_tint: Vec4::splat(1.0),
            exposure_offset: 0.0,
            max_offset: 9999.0,
            min_offset: 0.0,
        }
    }
}

impl EmissiveSettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            disabled: bool_field(fields, 0, d.disabled),
            source_layer: u8_field_or_named(fields, 1, "MATERIAL_LAYER_", d.source_layer),
            mask_source_blender: u8_field_or_named(fields, 2, "BLEND_LAYER_", d.mask_source_blender),
            clip_threshold: f32_field(fields, 3, d.clip_threshold),
            luminous_emittance: f32_field(fields, 4, d.luminous_emittance),
            emissive_tint: vec4_field(fields, 5, d.emissive_tint),
            exposure_offset: f32_field(fields, 6, d.exposure_offset),
            max_offset: f32_field(fields, 7, d.max_offset),
            min_offset: f32_field(fields, 8, d.min_offset),
        }
    }
}

#[derive(Debug)]
pub struct LayeredEmissiveSettings {
    pub disabled: bool,
    pub layer1_index: u8,
    pub layer2_index: u8,
    pub layer3_index: u8,
    pub blender1_index: u8,
    pub blender2_index: u8,
    pub clip_threshold: f32,
    pub luminous_emittance: f32,
    pub max_offset: f32,
    pub min_offset: f32,
    pub first_layer_tint: Vec4,
    pub second_layer_tint: Vec4,
    pub third_layer_tint: Vec4,
}

impl Default for LayeredEmissiveSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            layer1_index: 0,
            layer2_index: 1,
            layer3_index: 2,
            blender1_index: 0,
            blender2_index: 1,
            clip_threshold: 0.0,
            luminous_emittance: 100.0,
            max_offset: 1.0,
            min_offset: 0.0,
            first_layer_tint: Vec4::splat(1.0),
            second_layer_tint: Vec4::splat(1.0),
            third_layer_tint: Vec4::splat(1.0),
        }
    }
}

impl LayeredEmissiveSettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            disabled: bool_field(fields, 0, d.disabled),
            layer1_index: u8_field_or_named(fields, 1, "MATERIAL_LAYER_", d.layer1_index),
            layer2_index: u8_field_or_named(fields, 2, "MATERIAL_LAYER_", d.layer2_index),
            layer3_index: u8_field_or_named(fields, 3, "MATERIAL_LAYER_", d.layer3_index),
            blender1_index: u8_field_or_named(fields, 4, "BLEND_LAYER_", d.blender1_index),
            blender2_index: u8_field_or_named(fields, 5, "BLEND_LAYER_", d.blender2_index),
            clip_threshold: f32_field(fields, 6, d.clip_threshold),
            luminous_emittance: f32_field(fields, 7, d.luminous_emittance),
            max_offset: f32_field(fields, 8, d.max_offset),
            min_offset: f32_field(fields, 9, d.min_offset),
            first_layer_tint: vec4_field(fields, 10, d.first_layer_tint),
            second_layer_tint: vec4_field(fields, 11, d.second_layer_tint),
            third_layer_tint: vec4_field(fields, 12, d.third_layer_tint),
        }
    }
}

#[derive(Debug)]
pub struct DecalSettings {
    pub is_decal: bool,
    pub write_mask: u32,
    pub max_parallax_steps: u32,
    pub parallax_occlusion_scale: f32,
    pub render_layer: u8,
    pub use_gbuffer_normals: bool,
}

impl Default for DecalSettings {
    fn default() -> Self {
        Self {
            is_decal: false,
            write_mask: 0x0737,
            max_parallax_steps: 72,
            parallax_occlusion_scale: 1.0,
            render_layer: 0,
            use_gbuffer_normals: true,
        }
    }
}

impl DecalSettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            is_decal: bool_field(fields, 0, d.is_decal),
            write_mask: u32_field(fields, 1, d.write_mask),
            max_parallax_steps: u32_field(fields, 2, d.max_parallax_steps),
            parallax_occlusion_scale: f32_field(fields, 3, d.parallax_occlusion_scale),
            render_layer: u8_field_or_named(fields, 4, "MATERIAL_LAYER_", d.render_layer),
            use_gbuffer_normals: bool_field(fields, 5, d.use_gbuffer_normals),
        }
    }
}

#[derive(Debug)]
pub struct EffectSettings {
    pub use_z_test: bool,
    pub blend_mode: u8,
    pub soft_falloff_depth: f32,
    pub frosting_bgnd_blend: f32,
    pub material_alpha: f32,
    pub backlight_sharpness: f32,
    pub backlight_tint: Vec4,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            use_z_test: true,
            blend_mode: 0,
            soft_falloff_depth: 2.0,
            frosting_bgnd_blend: 0.98,
            material_alpha: 1.0,
            backlight_sharpness: 8.0,
            backlight_tint: Vec4::splat(1.0),
        }
    }
}

impl EffectSettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            use_z_test: bool_field(fields, 0, d.use_z_test),
            blend_mode: blend_mode_field(fields, 1, d.blend_mode),
            soft_falloff_depth: f32_field(fields, 2, d.soft_falloff_depth),
            frosting_bgnd_blend: f32_field(fields, 3, d.frosting_bgnd_blend),
            material_alpha: f32_field(fields, 4, d.material_alpha),
            backlight_sharpness: f32_field(fields, 5, d.backlight_sharpness),
            backlight_tint: vec4_field(fields, 6, d.backlight_tint),
        }
    }
}

#[derive(Debug)]
pub struct TranslucencySettings {
    pub disabled: bool,
    pub sss_width: f32,
    pub sss_strength: f32,
    pub transmissive_scale: f32,
    pub transmittance_width: f32,
    pub spec_lobe0_roughness_scale: f32,
    pub spec_lobe1_roughness_scale: f32,
}

impl Default for TranslucencySettings {
    fn default() -> Self {
        Self {
            disabled: false,
            sss_width: 0.2,
            sss_strength: 0.2,
            transmissive_scale: 1.0,
            transmittance_width: 0.03,
            spec_lobe0_roughness_scale: 0.55,
            spec_lobe1_roughness_scale: 1.2,
        }
    }
}

impl TranslucencySettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            disabled: bool_field(fields, 0, d.disabled),
            sss_width: f32_field(fields, 1, d.sss_width),
            sss_strength: f32_field(fields, 2, d.sss_strength),
            transmissive_scale: f32_field(fields, 3, d.transmissive_scale),
            transmittance_width: f32_field(fields, 4, d.transmittance_width),
            spec_lobe0_roughness_scale: f32_field(fields, 5, d.spec_lobe0_roughness_scale),
            spec_lobe1_roughness_scale: f32_field(fields, 6, d.spec_lobe1_roughness_scale),
        }
    }
}

#[derive(Debug)]
pub struct WaterSettings {
    pub is_water: bool,
    pub alpha_blending: bool,
}

impl Default for WaterSettings {
    fn default() -> Self { Self { is_water: true, alpha_blending: true } }
}

impl WaterSettings {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self { is_water: bool_field(fields, 0, d.is_water), alpha_blending: bool_field(fields, 1, d.alpha_blending) }
    }
}

#[derive(Debug)]
pub struct GlobalLayerData {
    pub texcoord_scales: f32,
    pub uses_directionality: bool,
    pub blend_normals_additively: bool,
    pub albedo_tint_color: Vec4,
    pub source_direction: Vec4,
    pub directionality_scale: f32,
    pub directionality_saturation: f32,
    pub blend_position: f32,
    pub blend_contrast: f32,
    pub material_mask_intensity_scale: f32,
    pub frequency_multiplier: f32,
    pub mask_intensity_max: f32,
}

impl Default for GlobalLayerData {
    fn default() -> Self {
        Self {
            texcoord_scales: 1.0,
            uses_directionality: true,
            blend_normals_additively: true,
            albedo_tint_color: Vec4::splat(1.0),
            source_direction: Vec4::new(0.0, 0.0, 1.0, 1.0),
            directionality_scale: 1.0,
            directionality_saturation: 1.0,
            blend_position: 0.5,
            blend_contrast: 0.5,
            material_mask_intensity_scale: 1.0,
            frequency_multiplier: 1.0,
            mask_intensity_max: 1.0,
        }
    }
}

impl GlobalLayerData {
    fn from_fields(fields: &[Option<Rc<CdbValue>>]) -> Self {
        let d = Self::default();
        Self {
            texcoord_scales: f32_field(fields, 0, d.texcoord_scales),
            uses_directionality: bool_field(fields, 1, d.uses_directionality),
            blend_normals_additively: bool_field(fields, 2, d.blend_normals_additively),
            albedo_tint_color: vec4_field(fields, 3, d.albedo_tint_color),
            source_direction: vec4_field(fields, 4, d.source_direction),
            directionality_scale: f32_field(fields, 5, d.directionality_scale),
            directionality_saturation: f32_field(fields, 6, d.directionality_saturation),
            blend_position: f32_field(fields, 7, d.blend_position),
            blend_contrast: f32_field(fields, 8, d.blend_contrast),
            material_mask_intensity_scale: f32_field(fields, 9, d.material_mask_intensity_scale),
            frequency_multiplier: f32_field(fields, 10, d.frequency_multiplier),
            mask_intensity_max: f32_field(fields, 11, d.mask_intensity_max),
        }
    }
}

/// Flag bits recording which optional settings box is populated — mirrors
/// `CE2Material.flags`, one bit per box, assigned in the order spec.md §3
/// lists them.
pub mod flags {
    pub const EFFECT: u32 = 1 << 0;
    pub const EMISSIVE: u32 = 1 << 1;
    pub const LAYERED_EMISSIVE: u32 = 1 << 2;
    pub const TRANSLUCENCY: u32 = 1 << 3;
    pub const DECAL: u32 = 1 << 4;
    pub const VEGETATION: u32 = 1 << 5;
    pub const DETAIL_BLENDER: u32 = 1 << 6;
    pub const LAYERED_EDGE_FALLOFF: u32 = 1 << 7;
    pub const WATER: u32 = 1 << 8;
    pub const GLOBAL_LAYER_DATA: u32 = 1 << 9;
}

/// A `BSMaterial::LayerID`/`BlenderID`/`LODMaterialID` link, resolved to its
/// target object when the link field's declared target type matches (§4.4:
/// "a reader that expects a specific object type ... rejects mismatched
/// links by leaving the pointer null").
fn resolve_link(_db: &ComponentDatabase, value: Option<&Rc<CdbValue>>) -> Option<MaterialObjectId> {
    match value.map(|v| v.as_ref()) {
        Some(CdbValue::Link(target)) => *target,
        Some(CdbValue::Struct { fields, .. }) => fields.iter().find_map(|f| match f.as_deref() {
            Some(CdbValue::Link(target)) => *target,
            _ => None,
        }),
        _ => None,
    }
}

/// The flattened, typed view of a material object: every projected
/// component the object carries (via its own snapshot/diffs or inherited
/// from a base via copy-on-write), matching spec.md §3's `CE2Material`
/// shape.
#[derive(Debug)]
pub struct CE2Material {
    pub resource_id: crate::resource_id::ResourceId,
    pub flags: u32,
    pub layer_mask: u32,
    pub layers: [Option<MaterialObjectId>; 6],
    pub blenders: [Option<MaterialObjectId>; 5],
    pub lod_materials: [Option<MaterialObjectId>; 3],
    pub texture_set: Option<MaterialObjectId>,
    pub uv_stream: Option<MaterialObjectId>,
    pub material: Option<MaterialObjectId>,
    pub shader_route: Option<u8>,
    pub blend_mode: Option<u8>,
    pub texture_path: Option<String>,
    pub effect_settings: Option<Box<EffectSettings>>,
    pub emissive_settings: Option<Box<EmissiveSettings>>,
    pub layered_emissive_settings: Option<Box<LayeredEmissiveSettings>>,
    pub translucency_settings: Option<Box<TranslucencySettings>>,
    pub decal_settings: Option<Box<DecalSettings>>,
    pub water_settings: Option<Box<WaterSettings>>,
    pub global_layer_data: Option<Box<GlobalLayerData>>,
    /// Present but not individually modeled: spec §6's default table gives
    /// no normative field layout for these three, so they stay as opaque
    /// decoded trees rather than invented structs.
    pub vegetation_settings: Option<Rc<CdbValue>>,
    pub detail_blender_settings: Option<Rc<CdbValue>>,
    pub layered_edge_falloff: Option<Rc<CdbValue>>,
}

fn project_component<T>(obj: &MaterialObject, class_id: u32, build: impl FnOnce(&[Option<Rc<CdbValue>>]) -> T) -> Option<T> {
    let component = obj.find_component(class_id)?;
    match component.value.as_deref() {
        Some(CdbValue::Struct { fields, .. }) => Some(build(fields)),
        _ => None,
    }
}

pub fn project(db: &ComponentDatabase, id: MaterialObjectId) -> CE2Material {
    let obj = db.object(id);
    let mut flags = 0u32;
    let mut layer_mask = 0u32;

    let mut layers: [Option<MaterialObjectId>; 6] = [None; 6];
    for (i, slot) in layers.iter_mut().enumerate() {
        if let Some(c) = obj.find_component_indexed(strings::ID_BSMATERIAL_LAYERID, i as u16) {
            *slot = resolve_link(db, c.value.as_ref());
            if slot.is_some() {
                layer_mask |= 1 << i;
            }
        }
    }

    let mut blenders: [Option<MaterialObjectId>; 5] = [None; 5];
    for (i, slot) in blenders.iter_mut().enumerate() {
        if let Some(c) = obj.find_component_indexed(strings::ID_BSMATERIAL_BLENDERID, i as u16) {
            *slot = resolve_link(db, c.value.as_ref());
        }
    }

    let mut lod_materials: [Option<MaterialObjectId>; 3] = [None; 3];
    for (i, slot) in lod_materials.iter_mut().enumerate() {
        if let Some(c) = obj.find_component_indexed(strings::ID_BSMATERIAL_LODMATERIALID, i as u16) {
            *slot = resolve_link(db, c.value.as_ref());
        }
    }

    let texture_set = obj.find_component(strings::ID_BSMATERIAL_TEXTURESETID).and_then(|c| resolve_link(db, c.value.as_ref()));
    let uv_stream = obj.find_component(strings::ID_BSMATERIAL_UVSTREAMID).and_then(|c| resolve_link(db, c.value.as_ref()));
    let material = obj.find_component(strings::ID_BSMATERIAL_MATERIALID).and_then(|c| resolve_link(db, c.value.as_ref()));

    let shader_route = project_component(obj, strings::ID_BSMATERIAL_SHADERROUTECOMPONENT, |fields| {
        shader_route_field(fields, 0, 0)
    });
    let blend_mode = project_component(obj, strings::ID_BSMATERIAL_BLENDMODECOMPONENT, |fields| blend_mode_field(fields, 0, 0));
    let texture_path = project_component(obj, strings::ID_BSMATERIAL_TEXTUREFILE, |fields| {
        fields.iter().find_map(|f| match f.as_deref() {
            Some(CdbValue::String(s)) => Some(s.to_string()),
            _ => None,
        })
    }).flatten();

    let effect_settings = project_component(obj, strings::ID_BSMATERIAL_EFFECTSETTINGSCOMPONENT, |f| {
        flags |= flags::EFFECT;
        Box::new(EffectSettings::from_fields(f))
    });
    let emissive_settings = project_component(obj, strings::ID_BSMATERIAL_EMISSIVESETTINGSCOMPONENT, |f| {
        flags |= flags::EMISSIVE;
        Box::new(EmissiveSettings::from_fields(f))
    });
    let layered_emissive_settings = project_component(obj, strings::ID_BSMATERIAL_LAYEREDEMISSIVITYCOMPONENT, |f| {
        flags |= flags::LAYERED_EMISSIVE;
        Box::new(LayeredEmissiveSettings::from_fields(f))
    });
    let translucency_settings = project_component(obj, strings::ID_BSMATERIAL_TRANSLUCENCYSETTINGSCOMPONENT, |f| {
        flags |= flags::TRANSLUCENCY;
        Box::new(TranslucencySettings::from_fields(f))
    });
    let decal_settings = project_component(obj, strings::ID_BSMATERIAL_DECALSETTINGSCOMPONENT, |f| {
        flags |= flags::DECAL;
        Box::new(DecalSettings::from_fields(f))
    });
    let water_settings = project_component(obj, strings::ID_BSMATERIAL_WATERSETTINGSCOMPONENT, |f| {
        flags |= flags::WATER;
        Box::new(WaterSettings::from_fields(f))
    });
    let global_layer_data = project_component(obj, strings::ID_BSMATERIAL_GLOBALLAYERDATACOMPONENT, |f| {
        flags |= flags::GLOBAL_LAYER_DATA;
        Box::new(GlobalLayerData::from_fields(f))
    });

    let vegetation_settings = obj.find_component(strings::ID_BSMATERIAL_VEGETATIONSETTINGSCOMPONENT).and_then(|c| {
        flags |= flags::VEGETATION;
        c.value.clone()
    });
    let detail_blender_settings = obj.find_component(strings::ID_BSMATERIAL_DETAILBLENDERSETTINGSCOMPONENT).and_then(|c| {
        flags |= flags::DETAIL_BLENDER;
        c.value.clone()
    });
    let layered_edge_falloff = obj.find_component(strings::ID_BSMATERIAL_LAYEREDEDGEFALLOFFCOMPONENT).and_then(|c| {
        flags |= flags::LAYERED_EDGE_FALLOFF;
        c.value.clone()
    });

    CE2Material {
        resource_id: obj.resource_id,
        flags,
        layer_mask,
        layers,
        blenders,
        lod_materials,
        texture_set,
        uv_stream,
        material,
        shader_route,
        blend_mode,
        texture_path,
        effect_settings,
        emissive_settings,
        layered_emissive_settings,
        translucency_settings,
        decal_settings,
        water_settings,
        global_layer_data,
        vegetation_settings,
        detail_blender_settings,
        layered_edge_falloff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_id::ResourceId;

    #[test]
    fn projection_reads_shader_route_and_defaults() {
        let mut db = ComponentDatabase::new();
        let id = db.allocate_json_object(ResourceId::from_path("materials/foo.mat"));
        db.set_component(
            id,
            strings::ID_BSMATERIAL_SHADERROUTECOMPONENT,
            Some(Rc::new(CdbValue::Struct {
                class_id: strings::ID_BSMATERIAL_SHADERROUTECOMPONENT,
                fields: vec![Some(Rc::new(CdbValue::UInt8(4)))],
            })),
        );
        let material = project(&db, id);
        assert_eq!(material.shader_route, Some(4));
        assert!(material.effect_settings.is_none());
    }

    #[test]
    fn emissive_settings_default_when_empty_struct() {
        let mut db = ComponentDatabase::new();
        let id = db.allocate_json_object(ResourceId::from_path("materials/foo.mat"));
        db.set_component(
            id,
            strings::ID_BSMATERIAL_EMISSIVESETTINGSCOMPONENT,
            Some(Rc::new(CdbValue::Struct { class_id: strings::ID_BSMATERIAL_EMISSIVESETTINGSCOMPONENT, fields: vec![] })),
        );
        let material = project(&db, id);
        let emissive = material.emissive_settings.expect("emissive settings present");
        assert_eq!(emissive.luminous_emittance, 432.0);
        assert_eq!(emissive.emissive_tint, Vec4::splat(1.0));
        assert_ne!(material.flags & flags::EMISSIVE, 0);
    }

    #[test]
    fn layers_are_keyed_by_component_index() {
        let mut db = ComponentDatabase::new();
        let id = db.allocate_json_object(ResourceId::from_path("materials/foo.mat"));
        let layer_obj = db.allocate_json_object(ResourceId::from_path("materials/layers/foo_layer.mat"));
        db.set_component_indexed(
            id,
            strings::ID_BSMATERIAL_LAYERID,
            2,
            Some(Rc::new(CdbValue::Link(Some(layer_obj)))),
        );
        let material = project(&db, id);
        assert_eq!(material.layers[2], Some(layer_obj));
        assert!(material.layers[0].is_none());
        assert_eq!(material.layer_mask, 1 << 2);
    }
}
