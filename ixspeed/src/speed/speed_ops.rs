use super::{IxLocation, SpeedTable};
use crate::peering::LinkRecord;
use rayon::prelude::*;
use std::collections::HashMap;

/// the locations of each exchange, keyed by exchange id.
pub type ExchangeLocations = HashMap<i64, Vec<IxLocation>>;

/// sums link capacity into the locations of the exchanges the links belong to.
/// each link credits its full capacity to every location of its exchange, in the
/// year the link was created. links that are not operational or carry no
/// capacity are ignored; links to unknown exchanges are reported and skipped.
pub fn aggregate(exchange_locations: &ExchangeLocations, links: &[LinkRecord]) -> SpeedTable {
    links.iter().fold(SpeedTable::default(), |mut table, link| {
        add_link(&mut table, exchange_locations, link);
        table
    })
}

/// same result as [`aggregate`], computed by folding links in parallel and
/// merging the partial tables.
pub fn aggregate_par(exchange_locations: &ExchangeLocations, links: &[LinkRecord]) -> SpeedTable {
    links
        .par_iter()
        .fold(SpeedTable::default, |mut table, link| {
            add_link(&mut table, exchange_locations, link);
            table
        })
        .reduce(SpeedTable::default, SpeedTable::merge)
}

fn add_link(table: &mut SpeedTable, exchange_locations: &ExchangeLocations, link: &LinkRecord) {
    if !link.is_operational() || link.capacity <= 0 {
        return;
    }
    let Some(locations) = exchange_locations.get(&link.exchange_id) else {
        log::warn!("couldn't find record for IX: {}", link.exchange_id);
        return;
    };
    for location in locations.iter().filter(|l| !l.city().is_empty()) {
        table.add(location, link.created_year, link.capacity);
    }
}
