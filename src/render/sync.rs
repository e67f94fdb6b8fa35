//! Transform synchronization between the orbit snapshot and rendering.

use bevy::prelude::*;

use crate::orbit::OrbitSnapshot;
use crate::render::bodies::CelestialBody;

/// Copy each body's model matrix from the snapshot onto its Transform.
///
/// All rotations are about Z and every scale is uniform, so the matrix
/// decomposes into a Transform without loss.
pub fn sync_body_transforms(
    snapshot: Res<OrbitSnapshot>,
    mut query: Query<(&CelestialBody, &mut Transform)>,
) {
    for (body, mut transform) in query.iter_mut() {
        *transform = Transform::from_matrix(snapshot.transform(body.id));
    }
}
