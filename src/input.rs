//! Input bindings: keyboard shortcuts and clickable turn affordances.
//!
//! Nothing here depends on a windowing library. The viewer translates its own
//! key and mouse events into the plain values used below.

use glam::Vec3;

use crate::cubie::{Axis, Layer};
use crate::rotation::RotationRequest;

/// Digit keys and the clockwise turn each one requests.
pub const KEY_BINDINGS: [(char, RotationRequest); 9] = [
    ('1', RotationRequest::new(Axis::X, Layer::Far, true)),
    ('2', RotationRequest::new(Axis::X, Layer::Middle, true)),
    ('3', RotationRequest::new(Axis::X, Layer::Near, true)),
    ('4', RotationRequest::new(Axis::Y, Layer::Far, true)),
    ('5', RotationRequest::new(Axis::Y, Layer::Middle, true)),
    ('6', RotationRequest::new(Axis::Y, Layer::Near, true)),
    ('7', RotationRequest::new(Axis::Z, Layer::Far, true)),
    ('8', RotationRequest::new(Axis::Z, Layer::Middle, true)),
    ('9', RotationRequest::new(Axis::Z, Layer::Near, true)),
];

/// Looks up the turn bound to `key`. Holding the modifier (Alt) inverts it.
pub fn request_for_key(key: char, modifier_held: bool) -> Option<RotationRequest> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, request)| request.inverted_if(modifier_held))
}

/// Mouse button used to click an affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left click: clockwise.
    Primary,
    /// Right click: counter-clockwise.
    Secondary,
}

/// Distance from the cube center to the affordance row, in world units.
const AFFORDANCE_DISTANCE: f32 = 2.0;

/// Half the edge length of an affordance box.
pub const AFFORDANCE_HALF_SIZE: f32 = 0.2;

/// A clickable box bound to one layer turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affordance {
    pub axis: Axis,
    pub layer: Layer,
    /// World-space center of the box.
    pub center: Vec3,
}

impl Affordance {
    /// Places the affordance for `(axis, layer)` just outside the cube.
    ///
    /// x layers sit above the top face, y layers beside the +x face and z
    /// layers below the bottom face, each centered on its layer's slab.
    pub fn new(axis: Axis, layer: Layer) -> Self {
        let slab = (layer.offset() - 1) as f32;
        let center = match axis {
            Axis::X => Vec3::new(slab, AFFORDANCE_DISTANCE, 0.0),
            Axis::Y => Vec3::new(AFFORDANCE_DISTANCE, slab, 0.0),
            Axis::Z => Vec3::new(0.0, -AFFORDANCE_DISTANCE, slab),
        };
        Self { axis, layer, center }
    }

    /// The turn requested by clicking this affordance with `button`.
    pub fn request(&self, button: PointerButton) -> RotationRequest {
        RotationRequest::new(self.axis, self.layer, true)
            .inverted_if(button == PointerButton::Secondary)
    }

    /// Distance along the ray to the box, if the ray hits it.
    ///
    /// `direction` need not be normalized; the result is in units of its
    /// length.
    pub fn hit(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let min = self.center - Vec3::splat(AFFORDANCE_HALF_SIZE);
        let max = self.center + Vec3::splat(AFFORDANCE_HALF_SIZE);

        // slab test; division by zero yields infinities which compare correctly
        let inverse = direction.recip();
        let t1 = (min - origin) * inverse;
        let t2 = (max - origin) * inverse;
        let t_near = t1.min(t2).max_element();
        let t_far = t1.max(t2).min_element();

        if t_near.is_nan() || t_far.is_nan() || t_far < t_near.max(0.0) {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

/// All nine affordances, one per (axis, layer).
pub fn affordances() -> Vec<Affordance> {
    Axis::ALL
        .into_iter()
        .flat_map(|axis| Layer::ALL.into_iter().map(move |layer| Affordance::new(axis, layer)))
        .collect()
}

/// Finds the closest affordance hit by a ray.
pub fn pick(affordances: &[Affordance], origin: Vec3, direction: Vec3) -> Option<&Affordance> {
    affordances
        .iter()
        .filter_map(|affordance| affordance.hit(origin, direction).map(|t| (t, affordance)))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, affordance)| affordance)
}
