use animesort_cv::{DetectionConfig, FaceSorter};
use anyhow::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(input_dir) = std::env::args().nth(1) else {
        eprintln!("Usage: animesort <input-directory>");
        return ExitCode::FAILURE;
    };

    match run(&input_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Sorting failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input_dir: &str) -> Result<()> {
    let config = DetectionConfig::default();
    let report_path = config.output.root.join("report.json");

    let sorter = FaceSorter::new(config)?;
    let report = sorter.run(input_dir)?;

    let stats = report.stats();
    println!("Sorting completed:");
    println!("  - Files processed: {}", stats.total_files);
    println!("  - Matched: {}", stats.matched);
    println!("  - Unmatched: {}", stats.unmatched);
    println!("  - Skipped: {}", stats.skipped);
    println!("  - Regions found: {}", stats.total_regions);
    println!("  - Time: {}ms", stats.processing_time_ms);

    sorter.export_json(&report, &report_path)?;
    println!("Report saved: {:?}", report_path);

    Ok(())
}
