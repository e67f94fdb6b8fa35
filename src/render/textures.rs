//! Body texture loading.
//!
//! Textures are requested at startup. A texture that fails to load is
//! reported once and the body keeps rendering with its plain material.

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::orbit::BodyId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("failed to load {body} texture from {path}: {reason}")]
    TextureLoad {
        body: &'static str,
        path: String,
        reason: String,
    },

    #[error("failed to load texture from {path}: {reason} (not a body texture)")]
    UnknownTexture { path: String, reason: String },
}

/// Asset path of a body's texture, relative to the asset root.
pub fn texture_path(id: BodyId) -> &'static str {
    match id {
        BodyId::Sun => "textures/sun.jpeg",
        BodyId::Earth => "textures/earth.jpeg",
        BodyId::Moon => "textures/moon.jpeg",
    }
}

/// Texture handles requested for the bodies.
#[derive(Resource, Default)]
pub struct BodyTextures {
    handles: Vec<(BodyId, Handle<Image>)>,
}

impl BodyTextures {
    pub fn get(&self, id: BodyId) -> Option<Handle<Image>> {
        self.handles
            .iter()
            .find(|(body, _)| *body == id)
            .map(|(_, handle)| handle.clone())
    }

    /// Body owning the given image, if any.
    pub fn owner(&self, image: AssetId<Image>) -> Option<BodyId> {
        self.handles
            .iter()
            .find(|(_, handle)| handle.id() == image)
            .map(|(body, _)| *body)
    }
}

/// Bodies whose texture failed to load.
#[derive(Resource, Default, Debug)]
pub struct TextureStatus {
    pub failed: Vec<BodyId>,
}

/// Plugin providing texture loading and failure reporting.
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyTextures>()
            .init_resource::<TextureStatus>()
            .add_systems(PreStartup, load_body_textures)
            .add_systems(Update, report_texture_failures);
    }
}

fn load_body_textures(asset_server: Res<AssetServer>, mut textures: ResMut<BodyTextures>) {
    textures.handles = BodyId::ALL
        .iter()
        .map(|&id| (id, asset_server.load(texture_path(id))))
        .collect();
    debug!("Requested {} body textures", textures.handles.len());
}

/// Build the error for a failed image load.
pub fn texture_error(
    textures: &BodyTextures,
    image: AssetId<Image>,
    path: String,
    reason: String,
) -> AssetError {
    match textures.owner(image) {
        Some(id) => AssetError::TextureLoad {
            body: id.name(),
            path,
            reason,
        },
        None => AssetError::UnknownTexture { path, reason },
    }
}

/// Log failed texture loads and keep going.
fn report_texture_failures(
    mut failures: MessageReader<AssetLoadFailedEvent<Image>>,
    textures: Res<BodyTextures>,
    mut status: ResMut<TextureStatus>,
) {
    for failure in failures.read() {
        let err = texture_error(
            &textures,
            failure.id,
            failure.path.to_string(),
            failure.error.to_string(),
        );
        warn!("{err}; continuing without it");

        if let Some(id) = textures.owner(failure.id)
            && !status.failed.contains(&id)
        {
            status.failed.push(id);
        }
    }
}
