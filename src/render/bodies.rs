//! Celestial body spawning.
//!
//! Handles the visual representation of the sun, earth and moon. All three
//! share one sphere mesh; each gets its own textured material.

use bevy::prelude::*;

use crate::orbit::{BodyId, OrbitSnapshot};
use crate::render::textures::BodyTextures;

/// Radius of the shared sphere mesh before per-body scaling.
pub const MESH_RADIUS: f32 = 1.0;

/// Emissive color of light-emitting bodies.
pub const GLOW: LinearRgba = LinearRgba::rgb(1.0, 0.85, 0.5);

/// Component marking an entity as a rendered celestial body.
#[derive(Component)]
pub struct CelestialBody {
    /// Identifier for this body.
    pub id: BodyId,
}

/// Material handles that are edited after spawn.
#[derive(Resource)]
pub struct BodyMaterials {
    /// Moon material, tinted during a lunar eclipse.
    pub moon: Handle<StandardMaterial>,
}

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Material for a body.
///
/// Luminous bodies glow unlit. The moon is unlit too and only shows its
/// texture times its tint. Earth is the one lit surface.
fn body_material(id: BodyId, texture: Option<Handle<Image>>) -> StandardMaterial {
    let base = StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: texture,
        ..default()
    };
    if id.is_luminous() {
        return StandardMaterial {
            emissive: GLOW,
            unlit: true,
            ..base
        };
    }
    match id {
        BodyId::Moon => StandardMaterial {
            unlit: true,
            ..base
        },
        _ => StandardMaterial {
            perceptual_roughness: 0.8,
            ..base
        },
    }
}

/// Spawn the sun, earth and moon at their time-zero transforms.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Res<BodyTextures>,
    snapshot: Res<OrbitSnapshot>,
) {
    let mesh = meshes.add(Sphere::new(MESH_RADIUS).mesh().uv(48, 24));

    let mut moon_material = None;
    for id in BodyId::ALL {
        let material = materials.add(body_material(id, textures.get(id)));
        if id == BodyId::Moon {
            moon_material = Some(material.clone());
        }

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_matrix(snapshot.transform(id)),
            CelestialBody { id },
            Name::new(id.name()),
        ));
    }

    if let Some(moon) = moon_material {
        commands.insert_resource(BodyMaterials { moon });
    }

    info!("Spawned {} celestial bodies", BodyId::ALL.len());
}
