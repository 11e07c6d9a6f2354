use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// status of an operational PeeringDB record.
pub const STATUS_OK: &str = "ok";

/// a network's connection to an exchange, reduced to the fields used for
/// capacity aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub exchange_id: i64,
    pub status: String,
    /// port speed in Mbit/s
    pub capacity: i64,
    pub created_year: i32,
}

impl LinkRecord {
    pub fn new(exchange_id: i64, status: &str, capacity: i64, created_year: i32) -> Self {
        Self {
            exchange_id,
            status: String::from(status),
            capacity,
            created_year,
        }
    }

    pub fn is_operational(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// a PeeringDB `netixlan` object as found in the cached dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkIxLanRow {
    pub ix_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub speed: i64,
    pub created: DateTime<Utc>,
}

impl From<NetworkIxLanRow> for LinkRecord {
    fn from(row: NetworkIxLanRow) -> Self {
        LinkRecord {
            exchange_id: row.ix_id,
            status: row.status,
            capacity: row.speed,
            created_year: row.created.year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkRecord, NetworkIxLanRow};

    #[test]
    fn test_from_netixlan_json() {
        let json = r#"{
            "id": 1,
            "net_id": 20,
            "ix_id": 31,
            "name": "DE-CIX Frankfurt: Main",
            "speed": 100000,
            "asn": 64512,
            "created": "2014-11-03T12:00:00Z",
            "updated": "2023-01-01T00:00:00Z",
            "status": "ok"
        }"#;
        let row: NetworkIxLanRow = serde_json::from_str(json).unwrap();
        let link = LinkRecord::from(row);
        assert_eq!(link, LinkRecord::new(31, "ok", 100000, 2014));
        assert!(link.is_operational());
    }

    #[test]
    fn test_not_operational() {
        assert!(!LinkRecord::new(1, "pending", 10, 2020).is_operational());
        assert!(!LinkRecord::new(1, "OK", 10, 2020).is_operational());
    }
}
