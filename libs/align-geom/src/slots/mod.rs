//! Named coordinate slots and attribute copy.
//!
//! Hosts move data between source, destination and result primitives by
//! name. Names come from a fixed vocabulary:
//!
//! | Kind | Coordinates | Modifiers |
//! |---|---|---|
//! | point | `point` | `pt_make_unit_vec`, `pt_flip_direction`, `pt_multiplier` |
//! | line | `line_start`, `line_end` | `ln_make_unit_vec`, `ln_flip_direction`, `ln_multiplier` |
//! | plane | `plane_pt_a`, `plane_pt_b`, `plane_pt_c` | none |
//!
//! Touching a name that belongs to another kind is an
//! [`GeomError::InvalidOperandKind`]; an unknown name is [`GeomError::UnknownSlot`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::{GeomError, GeomResult};
use crate::primitive::{GeometricPrimitive, PrimitiveKind};

// =============================================================================
// COORDINATE SLOTS
// =============================================================================

/// Coordinate slot of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// `point`
    Point,
    /// `line_start`
    LineStart,
    /// `line_end`
    LineEnd,
    /// `plane_pt_a`
    PlanePtA,
    /// `plane_pt_b`
    PlanePtB,
    /// `plane_pt_c`
    PlanePtC,
}

impl Slot {
    /// Slot name in the vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Point => "point",
            Slot::LineStart => "line_start",
            Slot::LineEnd => "line_end",
            Slot::PlanePtA => "plane_pt_a",
            Slot::PlanePtB => "plane_pt_b",
            Slot::PlanePtC => "plane_pt_c",
        }
    }

    /// Kind that owns this slot.
    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Slot::Point => PrimitiveKind::Point,
            Slot::LineStart | Slot::LineEnd => PrimitiveKind::Line,
            Slot::PlanePtA | Slot::PlanePtB | Slot::PlanePtC => PrimitiveKind::Plane,
        }
    }

    /// Coordinate slots of `kind` in storage order.
    pub const fn for_kind(kind: PrimitiveKind) -> &'static [Slot] {
        match kind {
            PrimitiveKind::Point => &[Slot::Point],
            PrimitiveKind::Line => &[Slot::LineStart, Slot::LineEnd],
            PrimitiveKind::Plane => &[Slot::PlanePtA, Slot::PlanePtB, Slot::PlanePtC],
        }
    }
}

impl FromStr for Slot {
    type Err = GeomError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "point" => Ok(Slot::Point),
            "line_start" => Ok(Slot::LineStart),
            "line_end" => Ok(Slot::LineEnd),
            "plane_pt_a" => Ok(Slot::PlanePtA),
            "plane_pt_b" => Ok(Slot::PlanePtB),
            "plane_pt_c" => Ok(Slot::PlanePtC),
            other => Err(GeomError::unknown_slot(other)),
        }
    }
}

fn coord_ref(primitive: &mut GeometricPrimitive, slot: Slot) -> GeomResult<&mut Vec3> {
    let found = primitive.kind();
    match (primitive, slot) {
        (GeometricPrimitive::Point { coord, .. }, Slot::Point) => Ok(coord),
        (GeometricPrimitive::Line { start, .. }, Slot::LineStart) => Ok(start),
        (GeometricPrimitive::Line { end, .. }, Slot::LineEnd) => Ok(end),
        (GeometricPrimitive::Plane { a, .. }, Slot::PlanePtA) => Ok(a),
        (GeometricPrimitive::Plane { b, .. }, Slot::PlanePtB) => Ok(b),
        (GeometricPrimitive::Plane { c, .. }, Slot::PlanePtC) => Ok(c),
        _ => Err(GeomError::wrong_kind(slot.kind(), found)),
    }
}

fn coord(primitive: &GeometricPrimitive, slot: Slot) -> GeomResult<Vec3> {
    let mut copy = *primitive;
    coord_ref(&mut copy, slot).map(|v| *v)
}

/// Reads the named coordinate slots.
///
/// # Examples
/// ```
/// use align_geom::slots::get_coords;
/// use align_geom::{GeometricPrimitive, Vec3};
/// let line = GeometricPrimitive::line(Vec3::X, Vec3::Y);
/// let coords = get_coords(&line, &["line_end", "line_start"]).unwrap();
/// assert_eq!(coords, vec![Vec3::Y, Vec3::X]);
/// ```
pub fn get_coords(primitive: &GeometricPrimitive, slot_names: &[&str]) -> GeomResult<Vec<Vec3>> {
    slot_names
        .iter()
        .map(|name| coord(primitive, name.parse()?))
        .collect()
}

/// Writes `values` into the named coordinate slots.
///
/// Names are validated before any write, so a failed call leaves the
/// primitive unchanged.
pub fn set_coords(
    primitive: &mut GeometricPrimitive,
    slot_names: &[&str],
    values: &[Vec3],
) -> GeomResult<()> {
    if slot_names.len() != values.len() {
        return Err(GeomError::SlotCountMismatch {
            slots: slot_names.len(),
            values: values.len(),
        });
    }
    let mut updated = *primitive;
    for (name, value) in slot_names.iter().zip(values) {
        *coord_ref(&mut updated, name.parse()?)? = *value;
    }
    *primitive = updated;
    Ok(())
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// Any named attribute: a coordinate slot or a modifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Coordinate slot.
    Coord(Slot),
    /// `pt_make_unit_vec`
    PointMakeUnit,
    /// `pt_flip_direction`
    PointFlip,
    /// `pt_multiplier`
    PointMultiplier,
    /// `ln_make_unit_vec`
    LineMakeUnit,
    /// `ln_flip_direction`
    LineFlip,
    /// `ln_multiplier`
    LineMultiplier,
}

const POINT_ATTRIBUTES: [&str; 4] = ["point", "pt_make_unit_vec", "pt_flip_direction", "pt_multiplier"];
const LINE_ATTRIBUTES: [&str; 5] = [
    "line_start",
    "line_end",
    "ln_make_unit_vec",
    "ln_flip_direction",
    "ln_multiplier",
];
const PLANE_ATTRIBUTES: [&str; 3] = ["plane_pt_a", "plane_pt_b", "plane_pt_c"];

impl Attribute {
    /// Attribute name in the vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Coord(slot) => slot.name(),
            Attribute::PointMakeUnit => "pt_make_unit_vec",
            Attribute::PointFlip => "pt_flip_direction",
            Attribute::PointMultiplier => "pt_multiplier",
            Attribute::LineMakeUnit => "ln_make_unit_vec",
            Attribute::LineFlip => "ln_flip_direction",
            Attribute::LineMultiplier => "ln_multiplier",
        }
    }

    /// Kind that owns this attribute.
    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Attribute::Coord(slot) => slot.kind(),
            Attribute::PointMakeUnit | Attribute::PointFlip | Attribute::PointMultiplier => {
                PrimitiveKind::Point
            }
            Attribute::LineMakeUnit | Attribute::LineFlip | Attribute::LineMultiplier => {
                PrimitiveKind::Line
            }
        }
    }
}

impl FromStr for Attribute {
    type Err = GeomError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "pt_make_unit_vec" => Ok(Attribute::PointMakeUnit),
            "pt_flip_direction" => Ok(Attribute::PointFlip),
            "pt_multiplier" => Ok(Attribute::PointMultiplier),
            "ln_make_unit_vec" => Ok(Attribute::LineMakeUnit),
            "ln_flip_direction" => Ok(Attribute::LineFlip),
            "ln_multiplier" => Ok(Attribute::LineMultiplier),
            other => other.parse().map(Attribute::Coord),
        }
    }
}

/// Value stored under an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Coordinate slot value.
    Coord(Vec3),
    /// Boolean modifier.
    Flag(bool),
    /// Scalar modifier.
    Scalar(f64),
}

/// Every attribute name of `kind`: coordinates first, then modifiers.
pub fn attribute_names(kind: PrimitiveKind) -> &'static [&'static str] {
    match kind {
        PrimitiveKind::Point => &POINT_ATTRIBUTES,
        PrimitiveKind::Line => &LINE_ATTRIBUTES,
        PrimitiveKind::Plane => &PLANE_ATTRIBUTES,
    }
}

fn check_kind(primitive: &GeometricPrimitive, attribute: Attribute) -> GeomResult<()> {
    if primitive.kind() == attribute.kind() {
        Ok(())
    } else {
        Err(GeomError::wrong_kind(attribute.kind(), primitive.kind()))
    }
}

/// Reads a named attribute.
pub fn get_attribute(primitive: &GeometricPrimitive, name: &str) -> GeomResult<AttributeValue> {
    let attribute: Attribute = name.parse()?;
    check_kind(primitive, attribute)?;
    let modifiers = match attribute {
        Attribute::Coord(slot) => return coord(primitive, slot).map(AttributeValue::Coord),
        _ => primitive
            .modifiers()
            .ok_or_else(|| GeomError::wrong_kind(attribute.kind(), primitive.kind()))?,
    };
    Ok(match attribute {
        Attribute::PointMakeUnit | Attribute::LineMakeUnit => {
            AttributeValue::Flag(modifiers.make_unit_vector)
        }
        Attribute::PointFlip | Attribute::LineFlip => AttributeValue::Flag(modifiers.flip_direction),
        _ => AttributeValue::Scalar(modifiers.multiplier),
    })
}

/// Writes a named attribute; the value type must match the attribute.
///
/// # Examples
/// ```
/// use align_geom::slots::{get_attribute, set_attribute};
/// use align_geom::{AttributeValue, GeometricPrimitive, Vec3};
/// let mut p = GeometricPrimitive::point(Vec3::ZERO);
/// set_attribute(&mut p, "pt_multiplier", AttributeValue::Scalar(2.5)).unwrap();
/// assert_eq!(get_attribute(&p, "pt_multiplier").unwrap(), AttributeValue::Scalar(2.5));
/// assert!(set_attribute(&mut p, "pt_multiplier", AttributeValue::Flag(true)).is_err());
/// ```
pub fn set_attribute(
    primitive: &mut GeometricPrimitive,
    name: &str,
    value: AttributeValue,
) -> GeomResult<()> {
    let attribute: Attribute = name.parse()?;
    check_kind(primitive, attribute)?;
    let type_error = |expected| GeomError::AttributeType {
        name: name.to_string(),
        expected,
    };
    match (attribute, value) {
        (Attribute::Coord(slot), AttributeValue::Coord(v)) => {
            *coord_ref(primitive, slot)? = v;
        }
        (Attribute::Coord(_), _) => return Err(type_error("coordinate")),
        (Attribute::PointMultiplier | Attribute::LineMultiplier, AttributeValue::Scalar(s)) => {
            if let Some(m) = primitive.modifiers_mut() {
                m.multiplier = s;
            }
        }
        (Attribute::PointMultiplier | Attribute::LineMultiplier, _) => {
            return Err(type_error("scalar"))
        }
        (Attribute::PointMakeUnit | Attribute::LineMakeUnit, AttributeValue::Flag(flag)) => {
            if let Some(m) = primitive.modifiers_mut() {
                m.make_unit_vector = flag;
            }
        }
        (Attribute::PointFlip | Attribute::LineFlip, AttributeValue::Flag(flag)) => {
            if let Some(m) = primitive.modifiers_mut() {
                m.flip_direction = flag;
            }
        }
        (_, _) => return Err(type_error("flag")),
    }
    Ok(())
}

/// Copies the named attributes from `src` to `dest`.
///
/// Both primitives must share a kind. Nothing is written unless every name is valid.
pub fn copy_attributes(
    src: &GeometricPrimitive,
    dest: &mut GeometricPrimitive,
    names: &[&str],
) -> GeomResult<()> {
    if src.kind() != dest.kind() {
        return Err(GeomError::wrong_kind(dest.kind(), src.kind()));
    }
    let mut updated = *dest;
    for name in names {
        let value = get_attribute(src, name)?;
        set_attribute(&mut updated, name, value)?;
    }
    *dest = updated;
    Ok(())
}

/// Copies the full attribute set (coordinates and modifiers) of `src` into `dest`.
pub fn duplicate_into(src: &GeometricPrimitive, dest: &mut GeometricPrimitive) -> GeomResult<()> {
    copy_attributes(src, dest, attribute_names(src.kind()))
}
