//! Analyze subcommand handler

use anyhow::Result;

use pagestat::cli::AnalyzeArgs;
use pagestat::{AggregatedStats, Config, SummaryReporter};

use super::{load_records, write_output};

/// Extract records, aggregate them and write the report.
pub fn handle(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let (document, records, extraction) = load_records(&args.source, config)?;

    eprintln!("Total pages: {}", document.summary.total_pages);
    eprintln!("Pages with content: {}", document.summary.pages_with_content);

    if args.stats {
        eprintln!("Lines scanned: {}", extraction.lines);
        eprintln!("Candidate lines: {}", extraction.candidate_lines);
        eprintln!("Malformed lines: {}", extraction.malformed_lines);
        eprintln!("Records: {}", extraction.records);
    }

    let top = args.top.unwrap_or(config.report.top_n);
    let stats = AggregatedStats::compute(&records, top);

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&stats)?;
        json.push('\n');
        json
    } else {
        SummaryReporter::new(config.report.title.as_str()).render(&stats)
    };

    write_output(args.output.as_deref(), &rendered)
}
