use std::{collections::HashMap, fmt, str::FromStr};

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::util::num::usize_to_f64;

/// Errors raised while computing statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The data set has no values.
    #[error("Empty list provided.")]
    EmptyData,
    /// The statistic name is not recognized.
    #[error("Unknown statistical function '{0}'.")]
    UnknownStatistic(String),
}

/// A summary statistic over a list of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    /// Population standard deviation.
    StdDev,
    /// Population variance.
    Variance,
    Sum,
    Product,
    Min,
    Max,
    /// `max - min`.
    Range,
}

impl Statistic {
    /// Every statistic, in display order.
    pub const ALL: [Self; 10] = [Self::Mean,
                                 Self::Median,
                                 Self::Mode,
                                 Self::StdDev,
                                 Self::Variance,
                                 Self::Sum,
                                 Self::Product,
                                 Self::Min,
                                 Self::Max,
                                 Self::Range];

    /// The name used to select this statistic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::StdDev => "std_dev",
            Self::Variance => "variance",
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Min => "min",
            Self::Max => "max",
            Self::Range => "range",
        }
    }

    /// Computes the statistic over `data`.
    ///
    /// # Errors
    /// [`StatsError::EmptyData`] if `data` is empty.
    ///
    /// # Example
    /// ```
    /// use calcx::stats::Statistic;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// assert_eq!(Statistic::Mean.compute(&data), Ok(3.0));
    /// assert_eq!(Statistic::Median.compute(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    /// assert_eq!(Statistic::Range.compute(&data), Ok(4.0));
    /// assert!(Statistic::Sum.compute(&[]).is_err());
    /// ```
    pub fn compute(self, data: &[f64]) -> Result<f64, StatsError> {
        if data.is_empty() {
            return Err(StatsError::EmptyData);
        }
        Ok(match self {
               Self::Mean => mean(data),
               Self::Median => median(data),
               Self::Mode => mode(data),
               Self::StdDev => variance(data).sqrt(),
               Self::Variance => variance(data),
               Self::Sum => data.iter().sum(),
               Self::Product => data.iter().product(),
               Self::Min => data.iter().copied().fold(f64::INFINITY, f64::min),
               Self::Max => data.iter().copied().fold(f64::NEG_INFINITY, f64::max),
               Self::Range => {
                   let min = data.iter().copied().fold(f64::INFINITY, f64::min);
                   let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                   max - min
               },
           })
    }
}

impl FromStr for Statistic {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL.into_iter()
                 .find(|stat| stat.name() == lowered)
                 .ok_or_else(|| StatsError::UnknownStatistic(s.to_string()))
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / usize_to_f64(data.len())
}

fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// The most frequent value; ties go to the value seen first.
fn mode(data: &[f64]) -> f64 {
    let mut counts = HashMap::<OrderedFloat<f64>, usize>::new();
    for value in data {
        *counts.entry(OrderedFloat(*value)).or_default() += 1;
    }
    let highest = counts.values().copied().max().unwrap_or(0);
    data.iter()
        .copied()
        .find(|value| counts.get(&OrderedFloat(*value)) == Some(&highest))
        .unwrap_or(data[0])
}

fn variance(data: &[f64]) -> f64 {
    let mean = mean(data);
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / usize_to_f64(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn calculator_reference_values() {
        assert_eq!(Statistic::Mean.compute(&DATA), Ok(3.0));
        assert_eq!(Statistic::Median.compute(&DATA), Ok(3.0));
        assert_eq!(Statistic::Sum.compute(&DATA), Ok(15.0));
        assert_eq!(Statistic::Min.compute(&DATA), Ok(1.0));
        assert_eq!(Statistic::Max.compute(&DATA), Ok(5.0));
        assert_eq!(Statistic::Range.compute(&DATA), Ok(4.0));
        assert_eq!(Statistic::Product.compute(&DATA), Ok(120.0));
        assert_eq!(Statistic::Variance.compute(&DATA), Ok(2.0));

        let std_dev = Statistic::StdDev.compute(&DATA).unwrap();
        assert!((std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn mode_prefers_the_first_of_the_most_frequent() {
        assert_eq!(Statistic::Mode.compute(&[3.0, 1.0, 1.0, 3.0, 2.0]), Ok(3.0));
        assert_eq!(Statistic::Mode.compute(&[5.0, 2.0, 2.0]), Ok(2.0));
        assert_eq!(Statistic::Mode.compute(&[9.0]), Ok(9.0));
    }

    #[test]
    fn median_ignores_input_order() {
        assert_eq!(Statistic::Median.compute(&[9.0, -1.0, 4.0]), Ok(4.0));
        assert_eq!(Statistic::Median.compute(&[9.0, -1.0, 4.0, 0.0]), Ok(2.0));
    }

    #[test]
    fn every_statistic_rejects_empty_data() {
        for stat in Statistic::ALL {
            assert_eq!(stat.compute(&[]), Err(StatsError::EmptyData), "{stat}");
        }
    }

    #[test]
    fn names_round_trip() {
        for stat in Statistic::ALL {
            assert_eq!(stat.to_string().parse::<Statistic>(), Ok(stat));
        }
        assert_eq!("STD_DEV".parse::<Statistic>(), Ok(Statistic::StdDev));
        assert_eq!("avg".parse::<Statistic>(),
                   Err(StatsError::UnknownStatistic("avg".to_string())));
    }
}
