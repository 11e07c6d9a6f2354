use super::CableRecord;
use serde::{Deserialize, Serialize};

pub const EARTH_DIAMETER_KM: f64 = 12742.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CableStats {
    pub count: usize,
    /// summed length in km, cables without a published length count as zero
    pub length: i64,
    pub wrap_earth_count: f64,
}

impl<'a> FromIterator<&'a CableRecord> for CableStats {
    fn from_iter<T: IntoIterator<Item = &'a CableRecord>>(iter: T) -> Self {
        let (count, length) = iter.into_iter().fold((0, 0), |(count, length), cable| {
            (count + 1, length + cable.length_km().unwrap_or_default())
        });
        CableStats {
            count,
            length,
            wrap_earth_count: length as f64 / EARTH_DIAMETER_KM,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllCableStats {
    pub active: CableStats,
    pub planned: CableStats,
}

impl AllCableStats {
    pub fn new(cables: &[CableRecord]) -> Self {
        Self {
            active: cables.iter().filter(|c| !c.is_planned).collect(),
            planned: cables.iter().filter(|c| c.is_planned).collect(),
        }
    }
}

impl std::fmt::Display for AllCableStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "*** Active Cables ***")?;
        writeln!(f, "Count: {}", self.active.count)?;
        writeln!(
            f,
            "Length: {} km (enough to wrap the earth {:.0} times)",
            self.active.length, self.active.wrap_earth_count
        )?;
        writeln!(f)?;
        writeln!(f, "*** Planned Cables ***")?;
        writeln!(f, "Count: {}", self.planned.count)?;
        write!(f, "Length: {} km", self.planned.length)
    }
}
