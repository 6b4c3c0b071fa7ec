//! Single entry point dispatching a serialized request to its solver.

use align_geom::{GeometricPrimitive, Mat4};
use config::constants::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis_rotate::{solve_axis_rotate, AxisRotateConfig};
use crate::error::AlignResult;
use crate::lines::{solve_align_lines, AlignLinesConfig};
use crate::planes::{solve_align_planes, solve_set_origin, AlignPlanesConfig, SetOriginConfig};
use crate::points::{solve_align_points, AlignPointsConfig};
use crate::result::AlignmentResult;
use crate::scale_edge::{solve_scale_match_edge, ScaleMatchConfig};
use crate::slide::{solve_slide, SlideConfig};

/// One alignment operation with its operands and options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AlignmentRequest {
    /// Translate a source point onto a destination point.
    Points {
        /// Point being moved.
        source: GeometricPrimitive,
        /// Point being matched.
        destination: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: AlignPointsConfig,
    },
    /// Rotate and translate a source line onto a destination line.
    Lines {
        /// Line being moved.
        source: GeometricPrimitive,
        /// Line being matched.
        destination: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: AlignLinesConfig,
    },
    /// Make a source plane coplanar with a destination plane.
    Planes {
        /// Plane being moved.
        source: GeometricPrimitive,
        /// Plane being matched.
        destination: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: AlignPlanesConfig,
    },
    /// Relocate the object origin onto a plane, leaving the mesh in place.
    SetOrigin {
        /// Plane receiving the origin.
        destination: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: SetOriginConfig,
    },
    /// Translate along a line's direction.
    Slide {
        /// Direction line.
        direction: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: SlideConfig,
    },
    /// Uniformly scale so one edge matches another's length.
    ScaleMatchEdge {
        /// Edge being scaled.
        source: GeometricPrimitive,
        /// Edge supplying the length.
        destination: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: ScaleMatchConfig,
    },
    /// Rotate about a line.
    AxisRotate {
        /// Rotation axis.
        axis: GeometricPrimitive,
        /// Solver options.
        #[serde(default)]
        config: AxisRotateConfig,
    },
}

impl AlignmentRequest {
    /// Operation name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            AlignmentRequest::Points { .. } => "align points",
            AlignmentRequest::Lines { .. } => "align lines",
            AlignmentRequest::Planes { .. } => "align planes",
            AlignmentRequest::SetOrigin { .. } => "set origin",
            AlignmentRequest::Slide { .. } => "directional slide",
            AlignmentRequest::ScaleMatchEdge { .. } => "scale match edge",
            AlignmentRequest::AxisRotate { .. } => "axis rotate",
        }
    }
}

/// Solves `request` for an object whose world matrix is `world`.
///
/// # Examples
/// ```
/// use align_engine::{solve, AlignmentRequest, ObjectEdit};
/// use align_engine::points::AlignPointsConfig;
/// use align_geom::{GeometricPrimitive, Mat4, Vec3};
/// use config::constants::EngineConfig;
///
/// let request = AlignmentRequest::Points {
///     source: GeometricPrimitive::point(Vec3::ZERO),
///     destination: GeometricPrimitive::point(Vec3::new(1.0, 2.0, 3.0)),
///     config: AlignPointsConfig::default(),
/// };
/// let result = solve(&request, &Mat4::IDENTITY, &EngineConfig::default()).unwrap();
/// assert_eq!(result.object, Some(ObjectEdit::Translate(Vec3::new(1.0, 2.0, 3.0))));
/// ```
pub fn solve(request: &AlignmentRequest, world: &Mat4, engine: &EngineConfig) -> AlignResult<AlignmentResult> {
    debug!(operation = request.name(), "Solving alignment");
    match request {
        AlignmentRequest::Points {
            source,
            destination,
            config,
        } => solve_align_points(source, destination, config, world, engine),
        AlignmentRequest::Lines {
            source,
            destination,
            config,
        } => solve_align_lines(source, destination, config, world, engine),
        AlignmentRequest::Planes {
            source,
            destination,
            config,
        } => solve_align_planes(source, destination, config, world, engine),
        AlignmentRequest::SetOrigin { destination, config } => solve_set_origin(destination, config, world, engine),
        AlignmentRequest::Slide { direction, config } => solve_slide(direction, config, world, engine),
        AlignmentRequest::ScaleMatchEdge {
            source,
            destination,
            config,
        } => solve_scale_match_edge(source, destination, config, world, engine),
        AlignmentRequest::AxisRotate { axis, config } => solve_axis_rotate(axis, config, world, engine),
    }
}
