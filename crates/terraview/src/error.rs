use thiserror::Error;

/// Failures surfaced to the host engine as return codes.
///
/// Invalid frame indices are deliberately absent: they are clamped and
/// logged where they occur, never propagated.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No sprite definition with the requested name exists.
    #[error("no sprite named `{name}`")]
    NotFound { name: String },

    /// A definition with the requested name exists but is not a texture sprite.
    #[error("invalid kind for sprite `{name}`: {found} (expected {expected})")]
    TypeMismatch {
        name: String,
        found: &'static str,
        expected: &'static str,
    },

    /// The asset cache could not produce an image or texture for this name.
    #[error("failed to load asset `{name}`")]
    AssetLoadFailure { name: String },

    /// A frame index was set before any atlas texture was resolved.
    #[error("no atlas texture set")]
    NoAtlas,

    /// The requested mapmode identifier is unknown to the simulation.
    #[error("unknown mapmode `{identifier}`")]
    NoMapmode { identifier: String },

    /// A map-dependent operation ran before the map images were loaded.
    #[error("map images have not been loaded")]
    MapNotLoaded,

    /// Terrain variant images must all share one size.
    #[error("terrain variant {index} is {got_width}x{got_height}, expected {width}x{height}")]
    TerrainSizeMismatch {
        index: usize,
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },

    /// A source bitmap could not be decoded.
    #[error("failed to decode image `{name}`")]
    ImageDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}
