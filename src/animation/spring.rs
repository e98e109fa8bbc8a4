/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// 0 = undamped oscillation, 1 = critical damping, >1 = overdamped
    pub damping_ratio: f32,
    /// Spring constant; higher returns faster
    pub stiffness: f32,
    /// Displacement under which the spring may come to rest
    pub value_threshold: f32,
    /// Velocity (units per second) under which the spring may come to rest
    pub velocity_threshold: f32,
}

impl SpringConfig {
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    /// Three quarters of a pixel: below that a thumb no longer visibly moves.
    pub const VALUE_THRESHOLD: f32 = 0.75;
    pub const VELOCITY_THRESHOLD: f32 = Self::VALUE_THRESHOLD * 62.5;

    /// Loose, wobbly return used by the picker out of the box
    pub const DEFAULT: Self = Self::new(Self::DAMPING_RATIO_HIGH_BOUNCY, Self::STIFFNESS_LOW);

    /// Settles without overshoot
    pub const CRITICAL: Self =
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM);

    /// Quick return with a single small overshoot
    pub const SNAPPY: Self = Self::new(Self::DAMPING_RATIO_LOW_BOUNCY, Self::STIFFNESS_HIGH);

    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            value_threshold: Self::VALUE_THRESHOLD,
            velocity_threshold: Self::VELOCITY_THRESHOLD,
        }
    }

    pub fn damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Closed-form position and velocity after `dt` seconds, relative to a target at 0.
    fn advance(&self, position: f32, velocity: f32, dt: f32) -> (f32, f32) {
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio;

        if zeta > 1.0 {
            // Overdamped: sum of two decaying exponentials
            let root = (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + omega * root;
            let gamma_minus = -zeta * omega - omega * root;
            let coeff_b = (gamma_minus * position - velocity) / (gamma_minus - gamma_plus);
            let coeff_a = position - coeff_b;
            let exp_minus = (gamma_minus * dt).exp();
            let exp_plus = (gamma_plus * dt).exp();
            (
                coeff_a * exp_minus + coeff_b * exp_plus,
                coeff_a * gamma_minus * exp_minus + coeff_b * gamma_plus * exp_plus,
            )
        } else if zeta == 1.0 {
            let coeff_a = position;
            let coeff_b = velocity + omega * position;
            let decay = (-omega * dt).exp();
            let value = (coeff_a + coeff_b * dt) * decay;
            (value, coeff_b * decay - omega * value)
        } else {
            // Underdamped (or undamped when zeta == 0)
            let damped_freq = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = position;
            let sin_coeff = (zeta * omega * position + velocity) / damped_freq;
            let decay = (-zeta * omega * dt).exp();
            let (sin, cos) = (damped_freq * dt).sin_cos();
            let value = decay * (cos_coeff * cos + sin_coeff * sin);
            let velocity = -zeta * omega * value
                + decay * damped_freq * (sin_coeff * cos - cos_coeff * sin);
            (value, velocity)
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of a single [`SpringReturn::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringStep {
    /// Offset from the baseline after the step
    pub value: f32,
    /// True once the spring has settled; `value` is then exactly 0
    pub at_rest: bool,
}

/// Damped spring pulling a single offset back to 0.
///
/// The host drives it by calling [`step`](Self::step) once per frame with the
/// elapsed time; nothing runs in the background.
#[derive(Clone, Debug)]
pub struct SpringReturn {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    running: bool,
}

impl SpringReturn {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            value: 0.0,
            velocity: 0.0,
            running: false,
        }
    }

    /// Release from `from` with zero velocity, replacing any in-flight simulation.
    pub fn start(&mut self, from: f32) {
        self.value = from;
        self.velocity = 0.0;
        self.running = true;
    }

    /// Advance by `dt_secs`. Calling this on a stopped spring reports rest at 0.
    pub fn step(&mut self, dt_secs: f32) -> SpringStep {
        if !self.running {
            return SpringStep {
                value: 0.0,
                at_rest: true,
            };
        }

        if dt_secs > 0.0 {
            let (value, velocity) = self.config.advance(self.value, self.velocity, dt_secs);
            self.value = value;
            self.velocity = velocity;
        }

        if self.is_settled() {
            self.value = 0.0;
            self.velocity = 0.0;
            self.running = false;
        }

        SpringStep {
            value: self.value,
            at_rest: !self.running,
        }
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.velocity = 0.0;
    }

    /// Swap physical parameters; position and velocity carry over.
    pub fn retarget(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Scale position and velocity, e.g. after the thumb size changed.
    pub fn rescale(&mut self, factor: f32) {
        self.value *= factor;
        self.velocity *= factor;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    fn is_settled(&self) -> bool {
        self.value.abs() < self.config.value_threshold
            && self.velocity.abs() < self.config.velocity_threshold
    }
}

impl Default for SpringReturn {
    fn default() -> Self {
        Self::new(SpringConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_to_rest(spring: &mut SpringReturn, max_frames: usize) -> Vec<f32> {
        let mut values = Vec::new();
        for _ in 0..max_frames {
            let step = spring.step(FRAME);
            values.push(step.value);
            if step.at_rest {
                break;
            }
        }
        values
    }

    #[test]
    fn test_spring_reaches_rest_and_snaps() {
        let mut spring = SpringReturn::new(SpringConfig::DEFAULT);
        spring.start(24.0);
        let values = run_to_rest(&mut spring, 10_000);

        assert!(!spring.is_running());
        assert_eq!(*values.last().unwrap(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let mut spring = SpringReturn::new(SpringConfig::DEFAULT);
        spring.start(24.0);
        let values = run_to_rest(&mut spring, 10_000);

        assert!(
            values.iter().any(|v| *v < 0.0),
            "High bouncy spring should cross the baseline"
        );
    }

    #[test]
    fn test_damped_springs_are_monotonic() {
        for ratio in [1.0, 1.5, 4.0] {
            for from in [-24.0, -3.0, 5.0, 24.0] {
                let mut spring = SpringReturn::new(SpringConfig::new(ratio, 200.0));
                spring.start(from);
                let values = run_to_rest(&mut spring, 100_000);

                let mut previous = f32::abs(from);
                for value in &values {
                    assert!(
                        value.abs() <= previous + 1e-4,
                        "ratio {ratio} from {from}: |{value}| grew past {previous}"
                    );
                    previous = value.abs();
                }
                assert!(!spring.is_running(), "ratio {ratio} never came to rest");
            }
        }
    }

    #[test]
    fn test_cancel_stops_simulation() {
        let mut spring = SpringReturn::default();
        spring.start(10.0);
        spring.step(FRAME);
        spring.cancel();

        assert!(!spring.is_running());
        assert!(spring.step(FRAME).at_rest);
    }

    #[test]
    fn test_retarget_keeps_position() {
        let mut spring = SpringReturn::default();
        spring.start(20.0);
        spring.step(FRAME);
        let before = spring.value();

        spring.retarget(SpringConfig::CRITICAL);

        assert_eq!(spring.value(), before);
        assert!(spring.is_running());
        assert_eq!(spring.config().damping_ratio, 1.0);
    }

    #[test]
    fn test_zero_step_keeps_value() {
        let mut spring = SpringReturn::default();
        spring.start(12.0);
        let step = spring.step(0.0);
        assert_eq!(step.value, 12.0);
        assert!(!step.at_rest);
    }

    #[test]
    fn test_start_from_baseline_rests_immediately() {
        let mut spring = SpringReturn::default();
        spring.start(0.0);
        assert!(spring.step(FRAME).at_rest);
    }

    #[test]
    fn test_critical_matches_closed_form() {
        let config = SpringConfig::new(1.0, 100.0);
        let (value, _) = config.advance(10.0, 0.0, 0.1);
        // x(t) = x0 (1 + w t) e^{-w t}, w = 10
        let expected = 10.0 * (1.0 + 1.0) * (-1.0f32).exp();
        assert!((value - expected).abs() < 1e-4);
    }
}
