use crate::{
    config::IxSpeedConfiguration,
    export::{export_ops, CitySpeed},
    peering::peering_source,
    speed::{speed_ops, ExchangeLocationExpander},
    IxSpeedError,
};
use ixspeed_geo::{reference_reader, GeoResolver};
use std::path::Path;

/// loads the reference dataset and the city corrections named by the configuration.
pub fn build_resolver(conf: &IxSpeedConfiguration) -> Result<GeoResolver, IxSpeedError> {
    let index = reference_reader::read_location_index(
        Path::new(&conf.reference_file),
        &conf.reference_columns,
    )?;
    eprintln!();
    let corrections = conf.get_city_corrections();
    log::info!(
        "built location index with {} keys and {} city corrections",
        index.len(),
        corrections.len()
    );
    Ok(GeoResolver::new(index, corrections))
}

/// runs the full pipeline over the cached PeeringDB datasets: resolve exchange
/// locations, sum link capacity per location and year, and write the
/// cumulative series to `output_file`.
pub fn run_city_speeds(
    conf: &IxSpeedConfiguration,
    output_file: &Path,
) -> Result<Vec<CitySpeed>, IxSpeedError> {
    let resolver = build_resolver(conf)?;
    let peering_directory = Path::new(&conf.peering_data_directory);

    let exchanges = peering_source::read_exchanges(peering_directory)?;
    log::info!("read {} exchanges", exchanges.len());
    let expander = ExchangeLocationExpander::new(&resolver, &conf.delimiters);
    let exchange_locations = expander.expand_all(&exchanges);
    let located = exchange_locations.values().filter(|l| !l.is_empty()).count();
    log::info!("located {located}/{} exchanges", exchanges.len());

    let links = peering_source::read_links(peering_directory)?;
    log::info!("read {} links", links.len());
    let table = if conf.parallelize {
        speed_ops::aggregate_par(&exchange_locations, &links)
    } else {
        speed_ops::aggregate(&exchange_locations, &links)
    };

    let results = export_ops::city_speeds(&table);
    export_ops::write_city_speeds(&results, output_file, conf.overwrite)?;
    Ok(results)
}
