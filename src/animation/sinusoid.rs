/// Sine oscillator advanced by frame delta time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid {
    pub amplitude: f64,
    /// Phase advance per second (radians)
    pub frequency: f64,
    /// Current phase
    pub time: f64,
    height: f64,
}

impl Default for Sinusoid {
    fn default() -> Self {
        Self::new(0.1, 1.0, 0.0)
    }
}

impl Sinusoid {
    pub fn new(amplitude: f64, frequency: f64, time: f64) -> Self {
        let mut wave = Self {
            amplitude,
            frequency,
            time,
            height: 0.0,
        };
        wave.update(0.0);
        wave
    }

    pub fn update(&mut self, dt: f64) {
        self.time += self.frequency * dt;
        self.height = self.time.sin() * self.amplitude;
    }

    /// Rewind the phase; the height is refreshed on the next update
    pub fn reset(&mut self, time: f64) {
        self.time = time;
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
