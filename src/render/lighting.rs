//! Scene lighting driven by the eclipse flags.
//!
//! Two point lights ride on the sun and the moon; a faint directional light
//! fills in the rest. A solar eclipse dims both point lights, a lunar
//! eclipse tints the moon grey.

use bevy::prelude::*;

use crate::eclipse::EclipseWatch;
use crate::orbit::{BodyId, OrbitSnapshot};
use crate::render::bodies::BodyMaterials;

/// Diffuse and specular factor of a point light during a solar eclipse.
pub const ECLIPSE_DIM: f32 = 0.01;

/// Moon tint during a lunar eclipse, in display (sRGB) space.
pub const LUNAR_TINT: f32 = 0.5;

/// Luminous power of a point light at diffuse factor 1.
pub const POINT_LIGHT_LUMENS: f32 = 4_000_000.0;

/// Illuminance of the fill light at diffuse factor 1.
pub const FILL_LIGHT_LUX: f32 = 10_000.0;

/// Direction the fill light shines along.
pub const FILL_DIRECTION: Vec3 = Vec3::new(-0.2, -1.0, -0.3);

/// Fill light diffuse factor.
pub const FILL_DIFFUSE: f32 = 0.05;

/// Attenuation cut-off: the light ends where it falls to this fraction.
const ATTENUATION_CUTOFF: f32 = 1.0 / 256.0;

/// Distance attenuation `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Attenuation used by both point lights.
    pub const POINT: Attenuation = Attenuation {
        constant: 1.0,
        linear: 0.14,
        quadratic: 0.07,
    };

    /// Attenuation factor at distance `d`.
    pub fn factor(&self, d: f32) -> f32 {
        1.0 / (self.constant + self.linear * d + self.quadratic * d * d)
    }

    /// Distance at which the factor drops to the cut-off.
    pub fn range(&self) -> f32 {
        let c = self.constant - 1.0 / ATTENUATION_CUTOFF;
        if self.quadratic == 0.0 {
            if self.linear == 0.0 {
                return f32::INFINITY;
            }
            return -c / self.linear;
        }
        let disc = self.linear * self.linear - 4.0 * self.quadratic * c;
        (-self.linear + disc.sqrt()) / (2.0 * self.quadratic)
    }
}

/// Diffuse/specular strength of one point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLightParams {
    pub diffuse: f32,
    pub specular: f32,
    pub attenuation: Attenuation,
}

impl PointLightParams {
    /// Bevy lights have a single intensity for both terms.
    pub fn intensity(&self) -> f32 {
        POINT_LIGHT_LUMENS * self.diffuse.max(self.specular)
    }
}

/// Light and tint values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingParams {
    pub sun: PointLightParams,
    pub moon: PointLightParams,
    /// Grey level multiplied into the moon color
    pub moon_tint: f32,
}

impl LightingParams {
    /// Light strengths and moon tint for the current eclipse flags.
    pub fn from_watch(watch: &EclipseWatch) -> Self {
        let (sun_diffuse, sun_specular, moon_diffuse, moon_specular) = if watch.solar_active {
            (ECLIPSE_DIM, ECLIPSE_DIM, ECLIPSE_DIM, ECLIPSE_DIM)
        } else {
            (0.9, 0.5, 0.6, 0.025)
        };

        Self {
            sun: PointLightParams {
                diffuse: sun_diffuse,
                specular: sun_specular,
                attenuation: Attenuation::POINT,
            },
            moon: PointLightParams {
                diffuse: moon_diffuse,
                specular: moon_specular,
                attenuation: Attenuation::POINT,
            },
            moon_tint: if watch.lunar_active { LUNAR_TINT } else { 1.0 },
        }
    }

    /// Point light parameters for a body, if it carries one.
    pub fn point(&self, body: BodyId) -> Option<PointLightParams> {
        match body {
            BodyId::Sun => Some(self.sun),
            BodyId::Moon => Some(self.moon),
            BodyId::Earth => None,
        }
    }
}

/// Point light that follows a body.
#[derive(Component)]
pub struct BodyLight {
    pub body: BodyId,
}

/// Plugin providing scene lighting.
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_lights);
    }
}

/// Spawn the sun and moon point lights and the fill light.
fn spawn_lights(mut commands: Commands, snapshot: Res<OrbitSnapshot>) {
    let params = LightingParams::from_watch(&EclipseWatch::default());

    for body in [BodyId::Sun, BodyId::Moon] {
        let Some(light) = params.point(body) else {
            continue;
        };
        commands.spawn((
            PointLight {
                intensity: light.intensity(),
                range: light.attenuation.range(),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(snapshot.position(body)),
            BodyLight { body },
            Name::new(format!("{} light", body.name())),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: FILL_LIGHT_LUX * FILL_DIFFUSE,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY.looking_to(FILL_DIRECTION, Vec3::Y),
        Name::new("Fill light"),
    ));

    info!("Scene lighting initialized");
}

/// Move the point lights onto their bodies and apply the eclipse overrides.
pub fn apply_lighting(
    watch: Res<EclipseWatch>,
    snapshot: Res<OrbitSnapshot>,
    body_materials: Option<Res<BodyMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lights: Query<(&BodyLight, &mut PointLight, &mut Transform)>,
) {
    let params = LightingParams::from_watch(&watch);

    for (body_light, mut light, mut transform) in lights.iter_mut() {
        transform.translation = snapshot.position(body_light.body);

        if watch.is_changed()
            && let Some(point) = params.point(body_light.body)
        {
            light.intensity = point.intensity();
        }
    }

    if !watch.is_changed() {
        return;
    }

    let Some(body_materials) = body_materials else {
        return;
    };
    if let Some(mut moon) = materials.get_mut(&body_materials.moon) {
        let t = params.moon_tint;
        moon.base_color = Color::srgb(t, t, t);
    }
}
