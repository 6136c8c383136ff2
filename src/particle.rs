// Simple particle struct to keep track of individual position, velocity, size and opacity

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, opacity: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            opacity,
        }
    }

    /// Seeds a particle uniformly over a `width` x `height` surface.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let (min_size, max_size) = config.size_range;
        let (min_opacity, max_opacity) = config.opacity_range;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let size = rng.gen::<f64>() * (max_size - min_size) + min_size;
        let opacity = rng.gen::<f64>() * (max_opacity - min_opacity) + min_opacity;
        Particle::new(pos_x, pos_y, vel_x, vel_y, size, opacity)
    }

    /// Moves by one frame's velocity, then reflects any axis that ended up
    /// outside `[0, bound]`. Position is never clamped.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}
