//! Globe scene state: markers, hover/selection, auto-spin.
//!
//! Pointer handlers mutate scene state directly; there is no concurrent
//! mutation to arbitrate. Markers live at the scene root and do NOT
//! inherit the globe mesh's spin, so hit testing never needs to undo the
//! spin rotation; the spin exists purely as render state.

use counsel_map_geography_models::City;

use crate::camera::{FAR_PLANE, OrbitCamera};
use crate::math::Vec3;
use crate::picking::pick_nearest;
use crate::projection::{GLOBE_RADIUS, marker_radius, project_to_sphere};

/// Marker color while idle (gold).
pub const MARKER_IDLE_COLOR: u32 = 0x00D4_AF37;

/// Marker color while hovered (orange).
pub const MARKER_HOVER_COLOR: u32 = 0x00E5_7C23;

/// Globe spin increment per frame tick, radians.
pub const SPIN_STEP: f64 = 0.001;

/// Vertical offset of the hover label above the pointer, pixels.
const LABEL_OFFSET_Y: f64 = 30.0;

/// Per-marker interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerState {
    /// Not under the pointer.
    #[default]
    Idle,
    /// Under the pointer; at most one marker at a time.
    Hovered,
}

impl MarkerState {
    /// Render color for this state.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Idle => MARKER_IDLE_COLOR,
            Self::Hovered => MARKER_HOVER_COLOR,
        }
    }
}

/// One interactive city marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    /// The city this marker selects.
    pub city: City,
    /// World-space position on the sphere surface.
    pub position: Vec3,
    /// Marker sphere radius, sized by lawyer count.
    pub radius: f64,
    /// Interaction state.
    pub state: MarkerState,
}

/// Pixel dimensions of the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Creates a surface size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The hover label shown next to the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLabel {
    /// Label text, e.g. "Delhi: 678 lawyers".
    pub text: String,
    /// Pixel X of the label anchor.
    pub x: f64,
    /// Pixel Y of the label anchor.
    pub y: f64,
}

/// Interaction events emitted by the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobeEvent {
    /// The pointer moved over a marker; carries the city name.
    HoverEntered(String),
    /// The pointer left the hovered marker's hit region.
    HoverCleared,
    /// A hovered marker was clicked; carries the selected city.
    CitySelected(City),
}

/// The picker scene: markers, camera, spin, and hover state.
pub struct GlobeScene {
    markers: Vec<CityMarker>,
    camera: OrbitCamera,
    surface: SurfaceSize,
    spin: f64,
    hovered: Option<usize>,
    pointer: Option<(f64, f64)>,
}

impl GlobeScene {
    /// Builds a scene with one marker per city.
    ///
    /// Returns `None` when the hosting surface has no area, in which case
    /// the picker simply does not initialize. No retry, no error.
    #[must_use]
    pub fn new(cities: Vec<City>, surface: SurfaceSize) -> Option<Self> {
        if surface.is_empty() {
            return None;
        }

        let markers = cities
            .into_iter()
            .map(|city| {
                let position = project_to_sphere(city.coordinates, GLOBE_RADIUS);
                let radius = marker_radius(city.lawyer_count);
                CityMarker {
                    city,
                    position,
                    radius,
                    state: MarkerState::Idle,
                }
            })
            .collect();

        Some(Self {
            markers,
            camera: OrbitCamera::new(surface.width / surface.height),
            surface,
            spin: 0.0,
            hovered: None,
            pointer: None,
        })
    }

    /// The scene's markers.
    #[must_use]
    pub fn markers(&self) -> &[CityMarker] {
        &self.markers
    }

    /// Current globe spin angle, radians.
    #[must_use]
    pub const fn spin(&self) -> f64 {
        self.spin
    }

    /// The currently hovered city, if any.
    #[must_use]
    pub fn hovered_city(&self) -> Option<&City> {
        self.hovered.map(|index| &self.markers[index].city)
    }

    /// The hover label anchored near the pointer, if a marker is hovered.
    #[must_use]
    pub fn hover_label(&self) -> Option<HoverLabel> {
        let city = self.hovered_city()?;
        let (x, y) = self.pointer?;
        Some(HoverLabel {
            text: format!("{}: {} lawyers", city.name, city.lawyer_count),
            x,
            y: y - LABEL_OFFSET_Y,
        })
    }

    /// Handles a pointer move: recomputes the nearest hit and updates the
    /// single hovered marker.
    ///
    /// Returns the hover transition, if any. Moving directly from one
    /// marker to another reports `HoverEntered` for the new one; the old
    /// marker's state is cleared implicitly.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) -> Option<GlobeEvent> {
        self.pointer = Some((x_px, y_px));

        let hit = self
            .camera
            .screen_ray(x_px, y_px, self.surface.width, self.surface.height)
            .and_then(|ray| {
                let spheres: Vec<(Vec3, f64)> = self
                    .markers
                    .iter()
                    .map(|marker| (marker.position, marker.radius))
                    .collect();
                pick_nearest(&ray, &spheres, FAR_PLANE)
            })
            .map(|(index, _)| index);

        if hit == self.hovered {
            return None;
        }

        if let Some(previous) = self.hovered {
            self.markers[previous].state = MarkerState::Idle;
        }
        self.hovered = hit;

        match hit {
            Some(index) => {
                self.markers[index].state = MarkerState::Hovered;
                Some(GlobeEvent::HoverEntered(
                    self.markers[index].city.name.clone(),
                ))
            }
            None => Some(GlobeEvent::HoverCleared),
        }
    }

    /// Handles a click: emits exactly one selection for the hovered
    /// marker, or nothing while idle.
    #[must_use]
    pub fn click(&self) -> Option<GlobeEvent> {
        self.hovered
            .map(|index| GlobeEvent::CitySelected(self.markers[index].city.clone()))
    }

    /// Advances the globe's auto-spin by one frame tick. Markers are
    /// scene-root objects and stay put.
    pub fn advance_frame(&mut self) {
        self.spin += SPIN_STEP;
    }

    /// Applies a pointer drag to the camera orbit.
    pub fn orbit(&mut self, dx_px: f64, dy_px: f64) {
        self.camera.orbit(dx_px, dy_px);
    }

    /// Applies a scroll delta to the camera zoom.
    pub fn zoom(&mut self, delta: f64) {
        self.camera.zoom(delta);
    }

    /// Handles a surface resize. Zero-size updates are ignored, matching
    /// the initialization guard.
    pub fn resize(&mut self, surface: SurfaceSize) {
        if surface.is_empty() {
            return;
        }
        self.surface = surface;
        self.camera.set_aspect(surface.width / surface.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_map_geography_models::GeoPoint;

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;

    /// A city whose marker projects to (0, 0, 80), dead center from the
    /// default camera on the +Z axis.
    fn facing_city() -> City {
        City {
            name: "Facing".to_string(),
            state: "State".to_string(),
            coordinates: GeoPoint::new(-90.0, 0.0).expect("valid"),
            population: 1_000_000,
            lawyer_count: 100,
        }
    }

    /// A city on the far side of the globe from the default camera.
    fn far_side_city() -> City {
        City {
            name: "FarSide".to_string(),
            state: "State".to_string(),
            coordinates: GeoPoint::new(90.0, 0.0).expect("valid"),
            population: 1_000_000,
            lawyer_count: 100,
        }
    }

    fn scene_with(cities: Vec<City>) -> GlobeScene {
        GlobeScene::new(cities, SurfaceSize::new(WIDTH, HEIGHT)).expect("non-empty surface")
    }

    #[test]
    fn zero_size_surface_skips_initialization() {
        assert!(GlobeScene::new(vec![facing_city()], SurfaceSize::new(0.0, 600.0)).is_none());
        assert!(GlobeScene::new(vec![facing_city()], SurfaceSize::new(800.0, 0.0)).is_none());
    }

    #[test]
    fn click_on_hovered_marker_selects_its_city() {
        let mut scene = scene_with(vec![facing_city()]);

        let event = scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        assert_eq!(event, Some(GlobeEvent::HoverEntered("Facing".to_string())));
        assert_eq!(scene.markers()[0].state, MarkerState::Hovered);

        let Some(GlobeEvent::CitySelected(city)) = scene.click() else {
            panic!("expected a selection");
        };
        assert_eq!(city.name, "Facing");
    }

    #[test]
    fn click_while_idle_is_a_no_op() {
        let mut scene = scene_with(vec![facing_city()]);
        // Top-left corner: no marker there.
        scene.pointer_move(0.0, 0.0);
        assert!(scene.click().is_none());
    }

    #[test]
    fn nearest_marker_wins_when_both_are_on_the_ray() {
        // Both cities sit on the camera's center ray; the facing one is
        // closer and must win.
        let mut scene = scene_with(vec![far_side_city(), facing_city()]);
        scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        assert_eq!(scene.hovered_city().map(|c| c.name.as_str()), Some("Facing"));
    }

    #[test]
    fn hover_is_mutually_exclusive_and_clears() {
        let mut scene = scene_with(vec![facing_city()]);

        scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        assert_eq!(scene.markers()[0].state, MarkerState::Hovered);

        let event = scene.pointer_move(0.0, 0.0);
        assert_eq!(event, Some(GlobeEvent::HoverCleared));
        assert_eq!(scene.markers()[0].state, MarkerState::Idle);
        assert!(scene.hover_label().is_none());
    }

    #[test]
    fn pointer_move_within_the_same_marker_reports_nothing() {
        let mut scene = scene_with(vec![facing_city()]);
        scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        let event = scene.pointer_move(WIDTH / 2.0 + 1.0, HEIGHT / 2.0);
        assert!(event.is_none(), "hover did not change");
    }

    #[test]
    fn hover_label_names_the_city_and_count() {
        let mut scene = scene_with(vec![facing_city()]);
        scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        let label = scene.hover_label().expect("hovered");
        assert_eq!(label.text, "Facing: 100 lawyers");
        assert!((label.x - WIDTH / 2.0).abs() < 1e-12);
        assert!(label.y < HEIGHT / 2.0);
    }

    #[test]
    fn spin_advances_without_moving_markers() {
        let mut scene = scene_with(vec![facing_city()]);
        let before = scene.markers()[0].position;
        scene.advance_frame();
        scene.advance_frame();
        assert!((scene.spin() - 2.0 * SPIN_STEP).abs() < 1e-12);
        assert_eq!(scene.markers()[0].position, before);
    }

    #[test]
    fn orbiting_away_clears_nothing_until_pointer_moves() {
        let mut scene = scene_with(vec![facing_city()]);
        scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        scene.orbit(300.0, 0.0);
        // Hover is recomputed per pointer-move, not per camera change.
        assert!(scene.hovered_city().is_some());
        let event = scene.pointer_move(WIDTH / 2.0, HEIGHT / 2.0);
        assert_eq!(event, Some(GlobeEvent::HoverCleared));
    }

    #[test]
    fn marker_states_map_to_reference_colors() {
        assert_eq!(MarkerState::Idle.color(), 0x00D4_AF37);
        assert_eq!(MarkerState::Hovered.color(), 0x00E5_7C23);
    }
}
