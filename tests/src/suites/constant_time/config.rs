/// Sampling sizes and acceptance thresholds for one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
    /// Largest accepted ratio between the two cleaned means
    pub mean_ratio_max: f64,
    /// Largest accepted Cohen's d between the two classes
    pub effect_size_max: f64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            num_warmup: 200,
            num_samples: 40,
            num_iterations: 50,
            mean_ratio_max: 1.25,
            effect_size_max: 1.2,
        }
    }
}

impl TestConfig {
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_mean_ratio_max(mut self, max: f64) -> Self {
        self.mean_ratio_max = max;
        self
    }

    pub fn with_effect_size_max(mut self, max: f64) -> Self {
        self.effect_size_max = max;
        self
    }

    /// Valid and rejected ciphertexts both run the full re-encryption
    pub fn for_decapsulation() -> Self {
        Self::default()
    }
}
