//! Chart series subcommand handlers

use anyhow::{bail, Result};

use pagestat::cli::{ChartsArgs, SeriesArgs};
use pagestat::stats::{distinct_membership, frequency, pair_frequency, top_n};
use pagestat::{AggregatedStats, ChartBundle, ChartSeries, Config};

use super::{load_records, write_output};

/// Emit a single ranked series chosen by `--by` / `--distinct`.
pub fn handle_series(args: &SeriesArgs, config: &Config) -> Result<()> {
    let (_, records, _) = load_records(&args.source, config)?;
    let top = args.top.unwrap_or(config.charts.top_n);

    let series = match (args.by.as_slice(), args.distinct) {
        ([group], Some(member)) => {
            let ranking = distinct_membership(&records, *group, member).top_n(top);
            ChartSeries::from_ranking(
                args.title
                    .clone()
                    .unwrap_or_else(|| format!("Unique {} per {}", member.plural(), group.label())),
                group.label(),
                format!("Unique {}", member.plural()),
                &ranking,
            )
        }
        ([field], None) => {
            let ranking = top_n(&frequency(&records, *field), top);
            ChartSeries::from_ranking(
                args.title.clone().unwrap_or_else(|| {
                    format!("Top {} {} by Occurrence", ranking.len(), field.plural())
                }),
                field.label(),
                "Number of Occurrences",
                &ranking,
            )
        }
        ([a, b], None) => {
            let ranking = top_n(&pair_frequency(&records, *a, *b), top);
            ChartSeries::from_pair_ranking(
                args.title
                    .clone()
                    .unwrap_or_else(|| format!("Top {}-{} Relationships", a.label(), b.label())),
                format!("{}-{} Pair", a.label(), b.label()),
                "Number of Occurrences",
                &ranking,
            )
        }
        ([_, _], Some(_)) => bail!("--distinct takes exactly one --by field"),
        _ => bail!("--by takes one or two fields"),
    };

    let mut json = serde_json::to_string_pretty(&series)?;
    json.push('\n');
    write_output(None, &json)
}

/// Emit the standard chart bundle.
pub fn handle_charts(args: &ChartsArgs, config: &Config) -> Result<()> {
    let (_, records, _) = load_records(&args.source, config)?;
    let top = args.top.unwrap_or(config.charts.top_n);

    let bundle = ChartBundle::with_layout(
        &AggregatedStats::compute(&records, top),
        config.charts.layout(),
    );

    let mut json = serde_json::to_string_pretty(&bundle)?;
    json.push('\n');
    write_output(args.output.as_deref(), &json)
}
