//! The particle field: a fixed population of drifting points plus the
//! proximity lines between them.
//!
//! The field owns its bounds and particles outright. Nothing outside it
//! mutates particle state; [`ParticleField::frame`] is the only per-frame
//! entry point and it never adds or removes particles.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

/// A line between two particles closer than the link distance. Recomputed
/// every frame, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub alpha: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, width, height, &config));
        }
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    /// Builds a field around an explicit population, e.g. one restored or
    /// laid out by hand.
    pub fn with_particles(width: f64, height: f64, config: FieldConfig, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
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

    /// Adopts new bounds. Particles keep their positions; any that now lie
    /// outside bounce back in on their own over the next frames.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by one frame without drawing.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Alpha of the line between two particles `distance` apart, or `None`
    /// when they are too far apart to be linked.
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        let max = self.config.link_distance;
        if distance < max {
            Some(self.config.link_alpha * (1.0 - distance / max))
        } else {
            None
        }
    }

    /// Every linked pair, each unordered pair visited exactly once (`from < to`).
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |i| {
            ((i + 1)..particles.len()).filter_map(move |j| {
                let distance = distance(particles[i].pos, particles[j].pos);
                self.link_alpha(distance).map(|alpha| Connection {
                    from: i,
                    to: j,
                    distance,
                    alpha,
                })
            })
        })
    }

    /// One display frame: clear, move and draw each particle, then draw the
    /// lines between the moved particles.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        let (width, height) = (self.width, self.height);
        let color = self.config.color;
        surface.clear(width, height);
        for particle in &mut self.particles {
            particle.step(width, height);
            surface.fill_disc(particle.pos[0], particle.pos[1], particle.size, &color.rgba(particle.opacity));
        }
        for link in self.connections() {
            surface.stroke_line(
                self.particles[link.from].pos,
                self.particles[link.to].pos,
                self.config.line_width,
                &color.rgba(link.alpha),
            );
        }
    }
}

fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vecmath::vec2_len(vecmath::vec2_sub(a, b))
}
