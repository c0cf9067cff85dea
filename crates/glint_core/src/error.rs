use thiserror::Error;

/// Errors raised while building, loading, or decoding scene input.
///
/// The kernel never sees these: a `Scene` returned by `SceneBuilder::build`
/// or `Scene::from_json` has passed validation.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene has no materials")]
    NoMaterials,

    #[error("{kind} {index} references material {material_id}, but only {count} materials exist")]
    InvalidMaterial {
        kind: &'static str,
        index: usize,
        material_id: u32,
        count: usize,
    },

    #[error("Sphere {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f32 },

    #[error("Plane {index} has a zero-length normal")]
    DegeneratePlaneNormal { index: usize },

    #[error("Triangle {index} is degenerate (zero area)")]
    DegenerateTriangle { index: usize },

    #[error("Frame uniform must be {expected} bytes, got {actual}")]
    UniformLayout { expected: usize, actual: usize },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
