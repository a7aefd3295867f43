//! L4 Atomic Layer: Easing curves for the value animator
//!
//! Every curve maps progress in [0, 1] to output in [0, 1].

/// Shape of an interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingType {
    /// Constant velocity
    Linear,
    /// 1 - (1-t)³, fast start and soft landing
    #[default]
    CubicOut,
    /// t²(3 - 2t), soft at both ends
    SmoothStep,
}

impl EasingType {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            EasingType::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}
