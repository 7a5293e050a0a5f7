use std::path::Path;

use clap::{app_from_crate, Arg, crate_authors, crate_description, crate_name, crate_version};
use dotenv::dotenv;
use failure::{bail, Error, ResultExt};
use prettytable::{row, Table};

use repodata_check::batch::Check;
use repodata_check::clap::{attribute_arg, attribute_value, depth_arg, depth_value};
use repodata_check::xml_package::XmlPackage;

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();
    let matches = app_from_crate!()
        .arg(Arg::with_name("EXPECTED")
            .long("expected")
            .takes_value(true)
            .required(true))
        .arg(Arg::with_name("KIND")
            .long("kind")
            .takes_value(true)
            .possible_values(&["primary", "other", "filelists"]))
        .arg(Arg::with_name("TAG")
            .long("tag")
            .takes_value(true))
        .arg(depth_arg())
        .arg(attribute_arg())
        .arg(Arg::with_name("FILE")
            .required(true)
            .index(1)
            .multiple(true))
        .get_matches();
    let mut check = Check::new(matches.value_of("EXPECTED").unwrap().parse::<u64>()
        .context("Malformed --expected value")?);
    check.kind = matches.value_of("KIND").map(str::parse::<XmlPackage>).transpose()?;
    check.tag = matches.value_of("TAG").map(std::borrow::ToOwned::to_owned);
    check.depth = depth_value(&matches)?;
    check.attribute = attribute_value(&matches);
    let outcomes = check.run(matches.values_of_os("FILE").unwrap().map(Path::new));
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["File", "Kind", "Found", "Attribute", "Expected", "Status"]);
    for outcome in &outcomes {
        let name = outcome.file.to_string_lossy();
        let kind = outcome.kind.map_or("-", XmlPackage::name);
        match &outcome.result {
            Ok(verdict) => table.add_row(row![
                name, kind, verdict.found, verdict.declared, verdict.expected, outcome.status()]),
            Err(_) => table.add_row(row![
                name, kind, "-", "-", check.expected, outcome.status()]),
        };
    }
    table.printstd();
    let failed = outcomes.iter().filter(|outcome| outcome.failed()).count();
    if failed > 0 {
        bail!("{} of {} documents failed verification", failed, outcomes.len());
    }
    println!("{} documents verified", outcomes.len());
    Ok(())
}
