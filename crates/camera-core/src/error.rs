use thiserror::Error;

/// Failures that can occur while building or wiring a camera controller.
///
/// Per-frame computation never produces these: degenerate frames are skipped
/// instead (see [`CameraController::update`](crate::CameraController::update)).
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("invalid camera option `{field}` = {value}: {reason}")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("failed to parse camera options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("pointer source unavailable: {0}")]
    PointerSource(String),
    #[error("frame scheduler unavailable: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, CameraError>;
