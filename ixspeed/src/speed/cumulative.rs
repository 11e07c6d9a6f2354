use super::SpeedSeries;
use serde::{Deserialize, Serialize};

/// capacity added in a year and the running total up to and including it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedYear {
    pub year: i32,
    pub added_speed: i64,
    pub total: i64,
}

/// running totals of a series, in ascending year order.
pub fn cumulative(series: &SpeedSeries) -> Vec<SpeedYear> {
    series
        .iter()
        .scan(0i64, |total, (year, added_speed)| {
            *total += added_speed;
            Some(SpeedYear {
                year: *year,
                added_speed: *added_speed,
                total: *total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{cumulative, SpeedYear};
    use crate::speed::SpeedSeries;

    fn year(year: i32, added_speed: i64, total: i64) -> SpeedYear {
        SpeedYear {
            year,
            added_speed,
            total,
        }
    }

    #[test]
    fn test_running_total() {
        let series = SpeedSeries::from([(2020, 100), (2021, 50)]);
        assert_eq!(
            cumulative(&series),
            vec![year(2020, 100, 100), year(2021, 50, 150)]
        );
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let pairs = [(2015, 10), (2012, 5), (2020, 0), (2013, 40), (2019, 7)];
        let forward: SpeedSeries = pairs.iter().copied().collect();
        let backward: SpeedSeries = pairs.iter().rev().copied().collect();
        let result = cumulative(&forward);
        assert_eq!(result, cumulative(&backward));

        let years: Vec<i32> = result.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2012, 2013, 2015, 2019, 2020]);
        assert!(result.windows(2).all(|w| w[0].total <= w[1].total));
        assert_eq!(result.last().map(|y| y.total), Some(62));
    }

    #[test]
    fn test_empty_series() {
        assert!(cumulative(&SpeedSeries::new()).is_empty());
    }
}
