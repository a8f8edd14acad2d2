use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Summary of a two-class timing comparison
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub is_constant_time: bool,
}

impl TimingAnalysis {
    pub fn report(&self, name: &str) -> String {
        format!(
            "{name}: mean {:.0} ns vs {:.0} ns (ratio {:.3}), t={:.2}, df={:.1}, p={:.3}, d={:.2} ({})",
            self.mean_a,
            self.mean_b,
            self.mean_ratio,
            self.t_statistic,
            self.degrees_of_freedom,
            self.p_value,
            self.cohens_d,
            TimingTester::interpret_effect_size(self.cohens_d),
        )
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Per-iteration average in nanoseconds, one entry per sample
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<u128> {
        let iterations = self.num_iterations.max(1);
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..iterations {
                    f();
                }
                start.elapsed().as_nanos() / iterations as u128
            })
            .collect()
    }

    /// Interleave the two classes so drift affects both equally
    pub fn measure_pair<A: FnMut(), B: FnMut()>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>) {
        let single = Self::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(single.measure(&mut a));
            times_b.extend(single.measure(&mut b));
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .copied()
            .filter(|&t| (lo..=hi).contains(&(t as f64)))
            .collect()
    }

    /// Welch's t
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let (n_a, n_b) = (times_a.len() as f64, times_b.len() as f64);

        (mean_a - mean_b).abs() / (var_a / n_a + var_b / n_b).sqrt()
    }

    /// Welch-Satterthwaite
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let (n_a, n_b) = (times_a.len() as f64, times_b.len() as f64);
        let term_a = Self::variance(times_a, mean_a) / n_a;
        let term_b = Self::variance(times_b, mean_b) / n_b;

        (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0))
    }

    /// Two-tailed p-value; 1.0 when the distribution is degenerate
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if !t_stat.is_finite() || !df.is_finite() || df < 1.0 {
            return 1.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let (n_a, n_b) = (times_a.len() as f64, times_b.len() as f64);

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        if pooled == 0.0 {
            return 0.0;
        }
        (mean_a - mean_b).abs() / pooled
    }

    pub fn interpret_effect_size(d: f64) -> &'static str {
        match d {
            d if d < 0.2 => "negligible",
            d if d < 0.5 => "small",
            d if d < 0.8 => "medium",
            d if d < 1.2 => "large",
            _ => "very large",
        }
    }

    /// Compare the two classes after outlier removal.
    ///
    /// A class difference fails only when it is both large in ratio and
    /// large in effect size; a significant t alone is expected from
    /// scheduler noise on shared machines.
    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples after outlier removal".to_string());
        }

        let (mean_a, mean_b) = (Self::mean(&clean_a), Self::mean(&clean_b));
        if mean_a <= 0.0 || mean_b <= 0.0 {
            return Err("timer resolution too coarse for this workload".to_string());
        }
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let cohens_d = Self::cohens_d(&clean_a, &clean_b);

        let is_constant_time =
            mean_ratio <= config.mean_ratio_max || cohens_d <= config.effect_size_max;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            is_constant_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let times = [10u128, 12, 14];
        let mean = TimingTester::mean(&times);
        assert_eq!(mean, 12.0);
        assert_eq!(TimingTester::variance(&times, mean), 4.0);
    }

    #[test]
    fn test_remove_outliers_drops_spike() {
        let times = [100u128, 101, 99, 100, 102, 98, 100, 5000];
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 7);
        assert!(!clean.contains(&5000));
    }

    #[test]
    fn test_identical_classes_pass() {
        let config = TestConfig::default();
        let tester = TimingTester::from_config(&config);
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let analysis = tester.analyze(&a, &a, &config).unwrap();
        assert_eq!(analysis.mean_ratio, 1.0);
        assert_eq!(analysis.t_statistic, 0.0);
        assert_eq!(analysis.cohens_d, 0.0);
        assert!((analysis.p_value - 1.0).abs() < 1e-9);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_separated_classes_fail() {
        let config = TestConfig::default();
        let tester = TimingTester::from_config(&config);
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let b = [200u128, 202, 198, 201, 199, 200, 203, 197];
        let analysis = tester.analyze(&a, &b, &config).unwrap();
        assert!((analysis.mean_ratio - 2.0).abs() < 1e-9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_effect_size_labels() {
        assert_eq!(TimingTester::interpret_effect_size(0.1), "negligible");
        assert_eq!(TimingTester::interpret_effect_size(0.6), "medium");
        assert_eq!(TimingTester::interpret_effect_size(3.0), "very large");
    }
}
