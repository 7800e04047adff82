use crate::domain::{FrameCounts, RunParameters, WhamError, WhamResult};

/// Frames covered by `duration` at `step_size`, truncated toward zero.
///
/// Negative durations or steps are not rejected and give negative counts.
pub fn frame_count(duration: f64, step_size: f64) -> WhamResult<i64> {
    if step_size == 0.0 {
        return Err(WhamError::input_validation(
            "INPUT.TIME_STEP_ZERO",
            "time-step size must be non-zero",
        ));
    }

    let frames = (duration / step_size).trunc();
    if !frames.is_finite() || frames < i64::MIN as f64 || frames >= i64::MAX as f64 {
        return Err(WhamError::input_validation(
            "INPUT.FRAME_COUNT_RANGE",
            format!(
                "duration {} at step {} does not give a representable frame count",
                duration, step_size
            ),
        ));
    }

    Ok(frames as i64)
}

pub fn derive_frame_counts(parameters: &RunParameters) -> WhamResult<FrameCounts> {
    let total_frames = frame_count(parameters.total_duration, parameters.step_size)?;
    let equil_frames = frame_count(parameters.equil_duration, parameters.step_size)?;
    Ok(FrameCounts::new(total_frames, equil_frames))
}
