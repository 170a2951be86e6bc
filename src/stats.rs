//! Descriptive statistics over numeric slices
//!
//! Small building blocks for the statistic-based imputers. All functions
//! expect the missing values to have been filtered out already; an empty
//! input is an error, not a sentinel.

use crate::error::{Error, Result};

/// Calculate the arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute the mean of an empty sequence".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Calculate the median (average of the two middle order statistics for
/// even lengths)
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute the median of an empty sequence".into(),
        ));
    }
    quantile(data, 0.5)
}

/// Calculate the q-quantile using linear interpolation between order
/// statistics (position `q * (n - 1)`)
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidInput(format!(
            "quantile must be between 0 and 1, got {}",
            q
        )));
    }
    if data.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute a quantile of an empty sequence".into(),
        ));
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let frac = pos - lower as f64;

    if frac == 0.0 || lower + 1 == sorted.len() {
        Ok(sorted[lower])
    } else {
        Ok(sorted[lower] + frac * (sorted[lower + 1] - sorted[lower]))
    }
}
