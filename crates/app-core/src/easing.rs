use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Overshoots past the target and rings down. Used for recoil and reset.
    ElasticOut,
}

impl Easing {
    /// Map linear progress `k` in `[0, 1]` to eased progress.
    ///
    /// Endpoints are exact for every curve: `apply(0) == 0`, `apply(1) == 1`.
    pub fn apply(self, k: f32) -> f32 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::ElasticOut => {
                if k == 0.0 {
                    0.0
                } else if k == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * k) * ((k - 0.1) * 5.0 * PI).sin() + 1.0
                }
            }
        }
    }
}
