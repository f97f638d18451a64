#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! 3D globe city picker: projection, hit-testing, and interaction state.
//!
//! Everything the renderer-independent side of the picker needs: the
//! sphere projection (with the reference sign conventions), marker
//! sizing, an orbit/zoom camera, analytic ray/sphere picking, and the
//! hover/selection state machine. The host drives it with pointer events
//! and frame ticks and receives [`GlobeEvent`]s back; drawing is the
//! host's problem.

pub mod camera;
pub mod math;
pub mod picking;
pub mod projection;
pub mod scene;

pub use camera::OrbitCamera;
pub use math::Vec3;
pub use picking::{Ray, pick_nearest, ray_sphere_entry};
pub use projection::{GLOBE_RADIUS, marker_radius, project_to_sphere};
pub use scene::{
    CityMarker, GlobeEvent, GlobeScene, HoverLabel, MarkerState, SPIN_STEP, SurfaceSize,
};
