use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("height field must be at least 1x1, got {width}x{height}")]
    EmptyField { width: usize, height: usize },

    #[error("height field {width}x{height} needs {expected} texels, got {got}")]
    TexelCountMismatch {
        width:    usize,
        height:   usize,
        expected: usize,
        got:      usize,
    },
}

pub type TerrainResult<T> = Result<T, TerrainError>;
