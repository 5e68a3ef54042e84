use std::env;

use asset_depreciation::{
    config::ConfigManager,
    errors::{DepreciationError, Result},
    init,
    schedule::ScheduleAssembler,
    storage::{AssetSource, JsonAssetFile},
    time::SystemClock,
    utils::build_info,
    Granularity,
};

const USAGE: &str = "usage: depreciation_cli [--table] <assets.json> <from_year> <to_year> [granularity]
       depreciation_cli --version

granularity: annual | semiannual | quarterly | monthly (defaults to the configured value)
--table      print a tab-separated table rounded to the configured amount_precision
             instead of the JSON grid";

fn main() {
    init();

    if let Err(err) = run(env::args().skip(1).collect()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("--version") | Some("-V") => {
            println!("{}", build_info::current().summary());
            return Ok(());
        }
        Some("--help") | Some("-h") => {
            println!("{USAGE}");
            return Ok(());
        }
        _ => {}
    }

    let table = args.iter().any(|arg| arg == "--table");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--table")
        .collect();
    let [path, from, to, rest @ ..] = positional.as_slice() else {
        return Err(DepreciationError::InvalidInput(USAGE.to_string()));
    };
    let from_year = parse_year(from)?;
    let to_year = parse_year(to)?;

    let config = ConfigManager::new()?.load()?;
    let granularity = match rest.first() {
        Some(raw) => raw.parse::<Granularity>()?,
        None => config.default_granularity,
    };

    let records = JsonAssetFile::new(*path).load_assets()?;
    let grid = ScheduleAssembler::new(&SystemClock)
        .with_date_policy(config.date_policy)
        .build(&records, from_year, to_year, granularity);

    tracing::info!(
        assets = grid.rows.len(),
        warnings = grid.warnings.len(),
        "schedule computed"
    );
    if table {
        println!("{}", grid.render_table(config.amount_precision));
    } else {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    }
    Ok(())
}

fn parse_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| DepreciationError::InvalidInput(format!("`{raw}` is not a year")))
}
