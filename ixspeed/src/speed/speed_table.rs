use super::{cumulative, IxLocation, SpeedYear};
use ixspeed_geo::{CityCountryKey, Location};
use std::collections::{btree_map::Entry, BTreeMap};

/// capacity added per year.
pub type SpeedSeries = BTreeMap<i32, i64>;

/// the capacity series of one aggregated location.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSpeeds {
    pub location: Location,
    pub series: SpeedSeries,
}

impl LocationSpeeds {
    pub fn cumulative(&self) -> Vec<SpeedYear> {
        cumulative::cumulative(&self.series)
    }

    pub fn total(&self) -> i64 {
        self.series.values().sum()
    }
}

/// capacity added per location and year, keyed by the exchange's spelling of
/// the location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeedTable {
    entries: BTreeMap<CityCountryKey, LocationSpeeds>,
}

impl SpeedTable {
    /// adds capacity to a location's year, creating the location on first touch.
    pub fn add(&mut self, ix_location: &IxLocation, year: i32, capacity: i64) {
        let speeds = self
            .entries
            .entry(ix_location.key.clone())
            .or_insert_with(|| LocationSpeeds {
                location: ix_location.location.clone(),
                series: SpeedSeries::new(),
            });
        *speeds.series.entry(year).or_insert(0) += capacity;
    }

    /// combines two tables, summing capacity for matching (location, year) entries.
    pub fn merge(mut self, other: SpeedTable) -> SpeedTable {
        for (key, speeds) in other.entries {
            match self.entries.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(speeds);
                }
                Entry::Occupied(mut entry) => {
                    let series = &mut entry.get_mut().series;
                    for (year, capacity) in speeds.series {
                        *series.entry(year).or_insert(0) += capacity;
                    }
                }
            }
        }
        self
    }

    pub fn get(&self, key: &CityCountryKey) -> Option<&LocationSpeeds> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CityCountryKey, &LocationSpeeds)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (location, year, capacity) triples in key and year order.
    pub fn triples(&self) -> Vec<(&CityCountryKey, i32, i64)> {
        self.entries
            .iter()
            .flat_map(|(key, speeds)| {
                speeds
                    .series
                    .iter()
                    .map(move |(year, capacity)| (key, *year, *capacity))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SpeedTable;
    use crate::speed::IxLocation;
    use ixspeed_geo::{CityCountryKey, Location};

    fn london() -> IxLocation {
        IxLocation::new("London", "GB", Location::new("London", "GB", 51.5, -0.12, 11262000))
    }

    fn leeds() -> IxLocation {
        IxLocation::new("Leeds", "GB", Location::new("Leeds", "GB", 53.8, -1.55, 789194))
    }

    #[test]
    fn test_add_accumulates_per_year() {
        let mut table = SpeedTable::default();
        table.add(&london(), 2020, 100);
        table.add(&london(), 2020, 10);
        table.add(&london(), 2021, 50);
        let speeds = table.get(&CityCountryKey::new("London", "GB")).unwrap();
        assert_eq!(speeds.series.get(&2020), Some(&110));
        assert_eq!(speeds.series.get(&2021), Some(&50));
        assert_eq!(speeds.total(), 160);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_merge_sums_matching_entries() {
        let mut a = SpeedTable::default();
        a.add(&london(), 2020, 100);
        a.add(&leeds(), 2019, 1);
        let mut b = SpeedTable::default();
        b.add(&london(), 2020, 5);
        b.add(&london(), 2022, 7);

        let mut expected = SpeedTable::default();
        expected.add(&london(), 2020, 105);
        expected.add(&london(), 2022, 7);
        expected.add(&leeds(), 2019, 1);

        assert_eq!(a.clone().merge(b.clone()), expected);
        assert_eq!(b.merge(a), expected);
    }
}
