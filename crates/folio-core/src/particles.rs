//! Decorative particle background: bouncing dots redrawn every display frame.
//!
//! The field owns its random source so a seeded field always produces the same
//! layout. Drawing goes through [`Surface`], which the web frontend implements
//! over a 2D canvas context.

use crate::constants::{
    PARTICLE_AREA_PER_PARTICLE, PARTICLE_COLOR, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN,
    PARTICLE_SPEED_MAX,
};
use glam::DVec2;
use rand::prelude::*;

/// Minimal drawing target for the particle loop.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.position, self.size, self.color);
    }

    /// Bounce off the walls, then move. Position is not clamped after the
    /// reflection, so a particle can sit just outside the bounds for a frame.
    pub fn advance(&mut self, width: f64, height: f64) {
        if self.position.x > width || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > height || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
        self.position += self.velocity;
    }

    pub fn update(&mut self, width: f64, height: f64, surface: &mut impl Surface) {
        self.advance(width, height);
        self.draw(surface);
    }
}

/// Number of particles for a viewport: one per 9000 px².
#[inline]
pub fn particle_count(width: u32, height: u32) -> usize {
    (width as f64 * height as f64 / PARTICLE_AREA_PER_PARTICLE).floor() as usize
}

/// Uniform sample in `[margin, extent - margin]`, or the midpoint when that
/// interval is empty.
fn sample_within<R: Rng>(rng: &mut R, extent: f64, margin: f64) -> f64 {
    let lo = margin;
    let hi = extent - margin;
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        extent * 0.5
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: u32,
    height: u32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0,
            height: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Discard every particle and scatter a fresh set over a `width` x `height` canvas.
    pub fn initialize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, height);
        let (w, h) = (width as f64, height as f64);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let size = self.rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
            let x = sample_within(&mut self.rng, w, size);
            let y = sample_within(&mut self.rng, h, size);
            let vx = self.rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX);
            let vy = self.rng.gen_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX);
            self.particles.push(Particle {
                position: DVec2::new(x, y),
                velocity: DVec2::new(vx, vy),
                size,
                color: PARTICLE_COLOR,
            });
        }
        log::debug!("[particles] initialized {} for {}x{}", count, width, height);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.initialize(width, height);
    }

    /// Advance and draw every particle once.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        let (w, h) = (self.width as f64, self.height as f64);
        for p in &mut self.particles {
            p.update(w, h, surface);
        }
    }

    pub fn render_frame(&mut self, surface: &mut impl Surface) {
        surface.clear(self.width as f64, self.height as f64);
        self.tick(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
