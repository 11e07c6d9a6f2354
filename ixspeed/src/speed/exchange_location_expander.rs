use super::IxLocation;
use crate::peering::ExchangeRecord;
use ixspeed_geo::GeoResolver;
use std::collections::HashMap;

/// delimiters separating cities in an exchange's city field, in priority order.
pub const DEFAULT_DELIMITERS: [&str; 4] = [",", "/", " - ", " and "];

/// unresolved secondary tokens of these byte lengths are usually airport or
/// region codes ("Amsterdam / NL") and are dropped without a warning.
const SILENT_TOKEN_LENGTHS: [usize; 2] = [2, 3];

/// splits a city field on the first delimiter that occurs in it. only that
/// delimiter is applied. returns each non-empty trimmed token along with its
/// position in the split.
pub fn split_city_field<'a, S: AsRef<str>>(
    city: &'a str,
    delimiters: &[S],
) -> Vec<(usize, &'a str)> {
    let delimiter: Option<&str> = delimiters
        .iter()
        .map(|d| d.as_ref())
        .find(|d| !d.is_empty() && city.contains(*d));
    let parts: Vec<&'a str> = match delimiter {
        Some(delimiter) => city.split(delimiter).collect(),
        None => vec![city],
    };
    parts
        .into_iter()
        .enumerate()
        .map(|(idx, part)| (idx, part.trim()))
        .filter(|(_, part)| !part.is_empty())
        .collect()
}

/// resolves the cities named by an exchange record.
pub struct ExchangeLocationExpander<'a> {
    resolver: &'a GeoResolver,
    delimiters: &'a [String],
}

impl<'a> ExchangeLocationExpander<'a> {
    pub fn new(resolver: &'a GeoResolver, delimiters: &'a [String]) -> Self {
        Self {
            resolver,
            delimiters,
        }
    }

    /// finds every location named in the exchange's city field, in the order
    /// they are named. tokens that do not resolve are skipped.
    pub fn expand(&self, exchange: &ExchangeRecord) -> Vec<IxLocation> {
        if exchange.city.is_empty() {
            return vec![];
        }

        let mut locations = vec![];
        for (idx, city) in split_city_field(&exchange.city, self.delimiters) {
            match self.resolver.resolve(city, &exchange.country) {
                Some(location) => {
                    locations.push(IxLocation::new(city, &exchange.country, location.clone()));
                }
                None if idx != 0 && SILENT_TOKEN_LENGTHS.contains(&city.len()) => {}
                None => {
                    log::warn!(
                        "could not find coordinates; ix={}, city='{}', full-city='{}', country='{}'",
                        exchange.id,
                        city,
                        exchange.city,
                        exchange.country
                    );
                }
            }
        }
        locations
    }

    /// expands every exchange, keyed by exchange id.
    pub fn expand_all(&self, exchanges: &[ExchangeRecord]) -> HashMap<i64, Vec<IxLocation>> {
        exchanges
            .iter()
            .map(|ix| (ix.id, self.expand(ix)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{split_city_field, ExchangeLocationExpander, DEFAULT_DELIMITERS};
    use crate::peering::ExchangeRecord;
    use crate::util::test_logger::capture_warnings;
    use ixspeed_geo::{CityCorrections, GeoResolver, LocationIndex, ReferenceRow};

    fn delimiters() -> Vec<String> {
        DEFAULT_DELIMITERS.iter().map(|d| String::from(*d)).collect()
    }

    fn resolver() -> GeoResolver {
        let cities = [
            ("New York", "US", "40.69", "-73.92", "18908608"),
            ("Newark", "US", "40.72", "-74.17", "311549"),
            ("Tokyo", "JP", "35.68", "139.69", "37732000"),
            ("Osaka", "JP", "34.69", "135.50", "15126000"),
            ("Amsterdam", "NL", "52.37", "4.89", "1459402"),
            ("Kyiv", "UA", "50.45", "30.52", "2952301"),
            ("Rio", "BR", "-22.9", "-43.2", "6748000"),
        ];
        let rows = cities
            .iter()
            .map(|(city, country, lat, long, population)| ReferenceRow {
                row: 0,
                names: vec![String::from(*city)],
                country: String::from(*country),
                lat: String::from(*lat),
                long: String::from(*long),
                population: String::from(*population),
            })
            .collect::<Vec<_>>();
        let index = LocationIndex::build(rows).unwrap();
        GeoResolver::new(index, CityCorrections::from_pairs(&[("Kiev", "Kyiv")]))
    }

    #[test]
    fn test_split_comma() {
        let tokens = split_city_field("New York, Newark", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "New York"), (1, "Newark")]);
    }

    #[test]
    fn test_split_priority_uses_first_matching_delimiter_only() {
        // a comma outranks " and ", so " and " is left inside the token
        let tokens = split_city_field("Minneapolis and St. Paul, MN", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "Minneapolis and St. Paul"), (1, "MN")]);
        let tokens = split_city_field("Tokyo and Osaka", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "Tokyo"), (1, "Osaka")]);
        let tokens = split_city_field("Dallas - Fort Worth", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "Dallas"), (1, "Fort Worth")]);
        let tokens = split_city_field("Zurich/Geneva", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "Zurich"), (1, "Geneva")]);
    }

    #[test]
    fn test_split_keeps_positions_of_empty_tokens() {
        let tokens = split_city_field(", Newark,", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(1, "Newark")]);
        let tokens = split_city_field("  London  ", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "London")]);
        // a hyphen without surrounding spaces is not a delimiter
        let tokens = split_city_field("Rio-Sul", &DEFAULT_DELIMITERS);
        assert_eq!(tokens, vec![(0, "Rio-Sul")]);
    }

    #[test]
    fn test_expand_two_cities() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        let result = expander.expand(&ExchangeRecord::new(3, "New York, Newark", "US"));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].city(), "New York");
        assert_eq!(result[0].location.lat, 40.69);
        assert_eq!(result[1].city(), "Newark");
        assert_eq!(result[1].country(), "US");
    }

    #[test]
    fn test_expand_and_delimiter() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        let result = expander.expand(&ExchangeRecord::new(2, "Tokyo and Osaka", "JP"));
        let cities: Vec<&str> = result.iter().map(|l| l.city()).collect();
        assert_eq!(cities, vec!["Tokyo", "Osaka"]);
    }

    #[test]
    fn test_expand_empty_city() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        assert!(expander.expand(&ExchangeRecord::new(6, "", "US")).is_empty());
        assert!(expander.expand(&ExchangeRecord::new(6, " , ", "US")).is_empty());
    }

    #[test]
    fn test_expand_skips_unresolved_tokens() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        // short secondary code is dropped, the city is kept
        let result = expander.expand(&ExchangeRecord::new(5, "Amsterdam / NL", "NL"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].city(), "Amsterdam");
        // unresolved first token is skipped, later tokens still resolve
        let result = expander.expand(&ExchangeRecord::new(8, "Atlantis, Tokyo", "JP"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].city(), "Tokyo");
        // a short first token is not exempt, it is skipped with a warning
        let result = expander.expand(&ExchangeRecord::new(9, "NL", "NL"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_expand_keeps_raw_spelling_and_duplicates() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        let result = expander.expand(&ExchangeRecord::new(10, "Kiev / Kyiv / Kiev", "UA"));
        let cities: Vec<&str> = result.iter().map(|l| l.city()).collect();
        assert_eq!(cities, vec!["Kiev", "Kyiv", "Kiev"]);
        assert!(result.iter().all(|l| l.location.city == "Kyiv"));
    }

    #[test]
    fn test_expand_all() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        let result = expander.expand_all(&[
            ExchangeRecord::new(2, "Tokyo and Osaka", "JP"),
            ExchangeRecord::new(6, "", "US"),
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[&2].len(), 2);
        assert!(result[&6].is_empty());
    }

    #[test]
    fn test_unresolved_token_warnings() {
        let resolver = resolver();
        let delimiters = delimiters();
        let expander = ExchangeLocationExpander::new(&resolver, &delimiters);
        let expand = |city: &str| {
            capture_warnings(|| expander.expand(&ExchangeRecord::new(5, city, "NL")))
        };

        // a short first token is reported
        let (result, warnings) = expand("NL");
        assert!(result.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("city='NL'"));

        // short secondary codes are dropped quietly
        for city in ["Amsterdam / NL", "Amsterdam / AMS"] {
            let (result, warnings) = expand(city);
            assert_eq!(result.len(), 1);
            assert!(warnings.is_empty(), "unexpected warnings for {city}: {warnings:?}");
        }

        // longer secondary tokens are reported
        let (result, warnings) = expand("Amsterdam / Atlantis");
        assert_eq!(result.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("city='Atlantis'"));

        // token length is measured in bytes: three characters, four bytes
        let (result, warnings) = expand("Amsterdam / São");
        assert_eq!(result.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("full-city='Amsterdam / São'"));
    }
}
