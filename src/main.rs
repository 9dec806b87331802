//! VR Feasibility Analyzer CLI
//!
//! Command-line tool for scoring game executables for VR conversion.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vr_feasibility::{
    analyze_file, sample_report, validate_registries, AnalysisOutcome, AnalysisReport,
};

/// Game engine detector and VR-conversion feasibility analyzer.
///
/// Scans an executable's raw bytes for known engine signatures and writes
/// a JSON feasibility report: detected engines, predicted performance,
/// compatibility score, missing integration work, and recommendations.
#[derive(Parser, Debug)]
#[command(name = "vr-analyze")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Executable to analyze. Omit to write a sample report listing the
    /// registered engine and performance-model identifiers.
    executable: Option<PathBuf>,

    /// Directory the JSON report is written to
    #[arg(short, long, env = "VR_ANALYZE_OUTPUT_DIR", default_value = "reports")]
    output_dir: PathBuf,

    /// Verbose diagnostic logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (write the report, skip the summary)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("vr_feasibility=debug")
            .init();
    }

    // Registry problems are programming errors; abort before touching
    // any input file.
    if let Err(e) = validate_registries() {
        eprintln!("Fatal: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let Some(executable) = &args.executable else {
        let sample = sample_report();
        let out_path = args.output_dir.join("engine_registry.json");
        write_json(&out_path, &sample)?;
        if !args.quiet {
            println!("No executable given; wrote registry sample.");
            println!("  Engines:            {}", sample.engines.join(", "));
            println!(
                "  Performance models: {}",
                sample.performance_models.join(", ")
            );
            println!("  Report:             {}", out_path.display());
        }
        return Ok(true);
    };

    let outcome = analyze_file(executable);

    let stem = executable
        .file_stem()
        .map_or_else(|| "report".to_string(), |s| s.to_string_lossy().to_string());
    let out_path = args.output_dir.join(format!("{stem}_vr_analysis.json"));
    write_json(&out_path, &outcome)?;

    match &outcome {
        AnalysisOutcome::Report(report) => {
            if !args.quiet {
                print_summary(report, &out_path);
            }
            Ok(true)
        }
        AnalysisOutcome::Failed(err) => {
            // The degraded report is still written; diagnostics have value.
            if !args.quiet {
                eprintln!("Analysis failed for {}: {}", err.executable_path, err.error);
                eprintln!("Error report written to {}", out_path.display());
            }
            Ok(false)
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

fn print_summary(report: &AnalysisReport, out_path: &Path) {
    println!("File: {}", report.executable_path);
    println!("  Size:       {} bytes", report.file_size);
    println!("  SHA-256:    {}", report.file_hash);

    match report.engine_detection.primary() {
        Some(primary) => {
            println!(
                "  Engine:     {} ({:.0}% confidence)",
                primary.engine,
                primary.confidence * 100.0
            );
        }
        None => println!("  Engine:     not detected"),
    }

    let assessment = &report.compatibility_assessment;
    println!("  Score:      {}/100", assessment.overall_score);
    println!("  Difficulty: {}", assessment.difficulty);
    println!("  Effort:     {}", assessment.estimated_effort);

    for risk in &assessment.risks {
        println!("  Risk:       {risk}");
    }
    for advantage in &assessment.advantages {
        println!("  Advantage:  {advantage}");
    }

    if !report.recommendations.is_empty() {
        println!("  Recommendations:");
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("    {}. {rec}", i + 1);
        }
    }

    println!("  Report:     {}", out_path.display());
    println!();
}
