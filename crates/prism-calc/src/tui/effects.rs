//! Click ripples and the particle backdrop.
//!
//! Pure presentation state, advanced one tick at a time by the event
//! loop. Nothing here reads from or writes to the engine, and nothing
//! reads a clock; animation is deterministic in the number of ticks.

use ratatui::layout::Rect;

/// Ticks a ripple stays visible (about 300 ms at the default tick rate).
pub const RIPPLE_LIFE: u8 = 6;

/// Number of backdrop particles.
pub const PARTICLE_COUNT: usize = 30;

/// An expanding ring spawned on a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    /// Index of the keypad button the ripple radiates from.
    pub button: usize,
    /// Ticks since the press; doubles as the ring radius.
    pub age: u8,
}

/// A single drifting backdrop dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the width.
    pub x: f32,
    /// Vertical position as a fraction of the height.
    pub y: f32,
    /// Upward drift per tick, in height fractions.
    speed: f32,
    /// Twinkle phase counter.
    phase: u8,
}

impl Particle {
    /// True on the bright half of the twinkle cycle.
    #[must_use]
    pub const fn bright(&self) -> bool {
        self.phase % 16 < 8
    }
}

/// Minimal multiplicative congruential generator, enough to scatter
/// particles without pulling in a random-number crate.
#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) as f32 / (1u64 << 31) as f32
    }
}

/// The field of drifting particles.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatters `count` particles from the given seed.
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = Lcg(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.next_f32(),
                y: rng.next_f32(),
                speed: 0.002 + rng.next_f32() * 0.004,
                phase: (rng.next_f32() * 16.0) as u8,
            })
            .collect();
        Self { particles }
    }

    /// Advances every particle one tick: drift upward, wrap at the top,
    /// advance the twinkle phase.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.y -= p.speed;
            if p.y < 0.0 {
                p.y += 1.0;
            }
            p.phase = p.phase.wrapping_add(1);
        }
    }

    /// Iterates over the particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Maps particles to cell positions inside `area`.
    pub fn cells(&self, area: Rect) -> impl Iterator<Item = (u16, u16, bool)> + '_ {
        self.particles.iter().filter_map(move |p| {
            if area.width == 0 || area.height == 0 {
                return None;
            }
            let x = area.x + ((p.x * f32::from(area.width)) as u16).min(area.width - 1);
            let y = area.y + ((p.y * f32::from(area.height)) as u16).min(area.height - 1);
            Some((x, y, p.bright()))
        })
    }
}

/// All cosmetic state: active ripples plus the particle field.
#[derive(Debug, Clone)]
pub struct Effects {
    ripples: Vec<Ripple>,
    /// The backdrop field.
    pub particles: ParticleField,
    enabled: bool,
}

impl Effects {
    /// Creates the effect state. When `enabled` is false, ripples are
    /// never spawned and the field stays still.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            ripples: Vec::new(),
            particles: ParticleField::new(PARTICLE_COUNT, 0x5eed_cafe),
            enabled,
        }
    }

    /// Whether effects are enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Spawns a ripple on the given keypad button.
    pub fn spawn_ripple(&mut self, button: usize) {
        if self.enabled {
            self.ripples.push(Ripple { button, age: 0 });
        }
    }

    /// Currently active ripples.
    #[must_use]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Ages ripples, retires the expired ones, and drifts the field.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        for ripple in &mut self.ripples {
            ripple.age += 1;
        }
        self.ripples.retain(|r| r.age < RIPPLE_LIFE);
        self.particles.tick();
    }
}
