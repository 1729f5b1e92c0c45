#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Layout index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(
        "Unknown layout '{0}'. Must be one of: title, bullet_points, two_column, content_with_image"
    )]
    UnknownLayout(String),

    #[error("Unknown presentation status '{0}'. Must be one of: created, updated")]
    UnknownStatus(String),
}
