//! Pure math behind the animated components; the frontend supplies the
//! timers, observers, and RNG.

pub const SCRAMBLE_TICK_MS: u32 = 30;
// One character settles every three ticks.
pub const SCRAMBLE_CURSOR_STEP: f64 = 1.0 / 3.0;

const SCRAMBLE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub fn scramble_letter(sample: f64) -> char {
    let index = (sample.clamp(0.0, 1.0) * SCRAMBLE_LETTERS.len() as f64) as usize;
    SCRAMBLE_LETTERS[index.min(SCRAMBLE_LETTERS.len() - 1)] as char
}

/// Characters before the cursor show their true value, the rest are
/// random letters drawn from `sample`.
pub fn scramble_frame(target: &str, cursor: f64, mut sample: impl FnMut() -> f64) -> String {
    let settled = cursor.max(0.0) as usize;
    target
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if index < settled {
                ch
            } else {
                scramble_letter(sample())
            }
        })
        .collect()
}

pub fn scramble_done(target: &str, cursor: f64) -> bool {
    cursor >= target.chars().count() as f64
}

pub const TILT_MAX_DEG: f64 = 7.5;
pub const TILT_SPRING_OMEGA: f64 = 14.0;
const SPRING_EPSILON: f64 = 0.01;

/// Returns (rotate_x, rotate_y) in degrees for a pointer at (x, y) inside
/// a width×height box; the edges reach ±`TILT_MAX_DEG`.
pub fn tilt_target(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (x / width - 0.5).clamp(-0.5, 0.5);
    let ny = (y / height - 0.5).clamp(-0.5, 0.5);
    (-ny * 2.0 * TILT_MAX_DEG, nx * 2.0 * TILT_MAX_DEG)
}

/// Critically damped spring step, semi-implicit Euler.
pub fn spring_step(position: f64, velocity: f64, target: f64, omega: f64, dt: f64) -> (f64, f64) {
    let acceleration = -omega * omega * (position - target) - 2.0 * omega * velocity;
    let velocity = velocity + acceleration * dt;
    let position = position + velocity * dt;
    (position, velocity)
}

pub fn spring_settled(position: f64, velocity: f64, target: f64) -> bool {
    (position - target).abs() < SPRING_EPSILON && velocity.abs() < SPRING_EPSILON
}

pub const MARQUEE_VELOCITY: f64 = 60.0;

/// `None` while the strip has no usable measurement; a zero width must
/// never start a zero-duration loop.
pub fn marquee_duration_secs(cycle_width: f64, velocity: f64) -> Option<f64> {
    if cycle_width > 0.0 && velocity > 0.0 {
        Some(cycle_width / velocity)
    } else {
        None
    }
}

#[derive(Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    pub fn advance(&mut self, dt: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.x = wrap(self.x + self.vx * dt, width);
        self.y = wrap(self.y + self.vy * dt, height);
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value % extent;
    if wrapped < 0.0 {
        wrapped + extent
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_scramble(target: &str) -> String {
        scramble_frame(target, target.chars().count() as f64, || 0.99)
    }

    #[test]
    fn completed_run_shows_the_exact_target() {
        assert_eq!(completed_scramble("About Me"), "About Me");
        assert!(scramble_done("About Me", 8.0));
    }

    #[test]
    fn settled_prefix_stays_true_mid_run() {
        let frame = scramble_frame("About Me", 3.9, || 0.0);
        assert!(frame.starts_with("Abo"));
        assert_eq!(frame.chars().count(), "About Me".chars().count());
        // Unsettled tail is drawn from the letter set, not the target.
        assert!(frame[3..].bytes().all(|b| b == b'A'));
    }

    #[test]
    fn done_flips_exactly_at_the_character_count() {
        assert!(!scramble_done("About Me", 7.9));
        assert!(scramble_done("About Me", 8.0));
        assert!(scramble_done("", 0.0));
    }

    #[test]
    fn scramble_letter_covers_the_sample_range() {
        assert_eq!(scramble_letter(0.0), 'A');
        assert_eq!(scramble_letter(0.999), 'z');
        // Out-of-range samples clamp instead of indexing out of bounds.
        assert_eq!(scramble_letter(1.0), 'z');
        assert_eq!(scramble_letter(-0.5), 'A');
    }

    #[test]
    fn tilt_is_bounded_and_centered() {
        assert_eq!(tilt_target(50.0, 50.0, 100.0, 100.0), (0.0, 0.0));

        let (rx, ry) = tilt_target(100.0, 0.0, 100.0, 100.0);
        assert!((ry - TILT_MAX_DEG).abs() < 1e-9);
        assert!((rx - TILT_MAX_DEG).abs() < 1e-9);

        // Pointer coordinates outside the box clamp to the edge tilt.
        let (rx, ry) = tilt_target(500.0, -500.0, 100.0, 100.0);
        assert!(rx.abs() <= TILT_MAX_DEG + 1e-9);
        assert!(ry.abs() <= TILT_MAX_DEG + 1e-9);

        assert_eq!(tilt_target(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn spring_converges_and_stays_settled() {
        let (mut position, mut velocity) = (0.0, 0.0);
        let target = TILT_MAX_DEG;
        for _ in 0..600 {
            let next = spring_step(position, velocity, target, TILT_SPRING_OMEGA, 1.0 / 60.0);
            position = next.0;
            velocity = next.1;
        }
        assert!(spring_settled(position, velocity, target));

        // At rest on target, a step keeps it settled.
        let (position, velocity) = spring_step(target, 0.0, target, TILT_SPRING_OMEGA, 1.0 / 60.0);
        assert!(spring_settled(position, velocity, target));
    }

    #[test]
    fn marquee_duration_is_width_over_velocity() {
        assert_eq!(marquee_duration_secs(600.0, 60.0), Some(10.0));
        assert_eq!(marquee_duration_secs(0.0, 60.0), None);
        assert_eq!(marquee_duration_secs(600.0, 0.0), None);
        assert_eq!(marquee_duration_secs(-10.0, 60.0), None);
    }

    #[test]
    fn particles_wrap_at_field_edges() {
        let mut particle = Particle {
            x: 95.0,
            y: 2.0,
            vx: 10.0,
            vy: -10.0,
            radius: 1.5,
        };
        particle.advance(1.0, 100.0, 100.0);
        assert!((particle.x - 5.0).abs() < 1e-9);
        assert!((particle.y - 92.0).abs() < 1e-9);

        // Degenerate field sizes leave the particle untouched.
        let before = (particle.x, particle.y);
        particle.advance(1.0, 0.0, 0.0);
        assert_eq!((particle.x, particle.y), before);
    }
}
