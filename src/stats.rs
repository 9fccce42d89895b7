use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};
use toml::Value;

/// A validated sample of numeric values.
///
/// Construction is the only fallible step: a `Sample` is always non-empty
/// and contains only finite values, so every statistic on it is total.
#[derive(Debug)]
pub struct Sample {
    vals: Vec<f64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl Sample {
    pub fn new(vals: Vec<f64>) -> Result<Self, InvalidInput> {
        if vals.is_empty() {
            return Err(InvalidInput::Empty);
        }
        if let Some(&val) = vals.iter().find(|val| !val.is_finite()) {
            return Err(InvalidInput::NonNumeric(format!(
                "the non-finite value {val}"
            )));
        }
        Ok(Self { vals })
    }

    /// Convert raw TOML values into a [`Sample`].
    ///
    /// Integers and floats are accepted and collapse to the same key when
    /// equal (`1` and `1.0` are the same value); any other kind of value
    /// is rejected.
    pub fn from_values(vals: &[Value]) -> Result<Self, InvalidInput> {
        let mut nums = Vec::with_capacity(vals.len());
        for val in vals {
            let num = match val {
                Value::Integer(num) => *num as f64,
                Value::Float(num) => *num,
                other => {
                    return Err(InvalidInput::NonNumeric(format!(
                        "a {} value",
                        other.type_str()
                    )));
                }
            };
            nums.push(num);
        }
        Self::new(nums)
    }

    pub fn vals(&self) -> &[f64] {
        &self.vals
    }

    pub fn mean(&self) -> f64 {
        self.vals.iter().sum::<f64>() / self.vals.len() as f64
    }

    pub fn median(&self) -> f64 {
        let sorted = sorted_vals(&self.vals);
        let n_vals = sorted.len();
        if n_vals % 2 == 1 {
            sorted[n_vals / 2]
        } else {
            (sorted[n_vals / 2 - 1] + sorted[n_vals / 2]) / 2.0
        }
    }

    /// Compute the values tied for the maximal frequency, in ascending order.
    ///
    /// Returns an empty vector when every value occurs exactly once.
    pub fn mode(&self) -> Vec<f64> {
        let sorted = sorted_vals(&self.vals);

        // Equal values are adjacent after sorting: count runs.
        let mut runs: Vec<(f64, usize)> = Vec::new();
        for &val in &sorted {
            match runs.last_mut() {
                Some((run_val, count)) if *run_val == val => *count += 1,
                _ => runs.push((val, 1)),
            }
        }

        let max_freq = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
        if max_freq <= 1 {
            return Vec::new();
        }

        runs.into_iter()
            .filter(|&(_, count)| count == max_freq)
            .map(|(val, _)| val)
            .collect()
    }

    /// Compute the population variance (squared deviations divided by n).
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.vals
            .iter()
            .map(|&val| (val - mean).powi(2))
            .sum::<f64>()
            / self.vals.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Compute every statistic of the sample at once.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            mean: self.mean(),
            median: self.median(),
            mode: self.mode(),
            variance: self.variance(),
            std_dev: self.std_dev(),
            count: self.vals.len(),
            min: self.vals.iter().copied().fold(f64::INFINITY, f64::min),
            max: self.vals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

fn sorted_vals(vals: &[f64]) -> Vec<f64> {
    let mut sorted = vals.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
