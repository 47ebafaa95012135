use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Import from scanparse-core
use scanparse_core::{ExtractionConfig, PlainTextSource, ReportProcessor};

#[derive(Parser)]
#[command(name = "scanparse")]
#[command(about = "Extract structured findings from security-scan report text")]
struct Args {
    /// Path to the report text file to process
    #[arg(short, long)]
    input: String,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: report (full envelope) or flat (summary + findings only)
    #[arg(short = 'f', long, default_value = "report")]
    output_format: String,

    /// Output file path (if not specified, auto-generated based on input)
    #[arg(short, long)]
    output: Option<String>,

    /// Treat the whole file as one chunk instead of splitting on form-feed
    /// page separators
    #[arg(long)]
    single_chunk: bool,

    /// Drop findings whose block contained no recognized label
    #[arg(long)]
    drop_empty: bool,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🔎 Scanparse Report Extractor");

    if args.show_configs {
        show_help();
        return Ok(());
    }

    // Check if input file exists
    if !Path::new(&args.input).exists() {
        println!("⚠️  Input report not found at: {}", args.input);
        println!("   Please check the file path.");
        return Ok(());
    }

    let mut config = ExtractionConfig::load_with_fallback(args.config.as_deref());

    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    // Apply CLI overrides to config
    if args.drop_empty {
        config.drop_empty_findings = true;
    }

    let processor = match ReportProcessor::new(config) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("❌ Invalid config: {e}");
            std::process::exit(1);
        }
    };

    let source = if args.single_chunk {
        PlainTextSource::new(&args.input).single_chunk()
    } else {
        PlainTextSource::new(&args.input)
    };

    match processor.process_source(&source) {
        Ok(report) => {
            println!("✅ Successfully processed report");
            println!("📊 Extraction metrics:");
            println!("   - Chunks: {}", report.profile.chunk_count);
            println!("   - Summary rows: {}", report.profile.summary_row_count);
            println!("   - Findings: {}", report.profile.finding_count);
            if report.profile.empty_finding_count > 0 {
                println!(
                    "   - Empty findings: {} (pass --drop-empty to filter)",
                    report.profile.empty_finding_count
                );
            }

            // Generate output path
            let output_path = if let Some(output) = &args.output {
                output.clone()
            } else {
                let input_name = Path::new(&args.input)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                format!("{input_name}_scanparse.json")
            };

            save_report(&report, &output_path, &args.output_format)?;
        }
        Err(e) => {
            eprintln!("❌ Processing failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file");
    println!("  --input <path>          Report text file to process");
    println!("  --output <path>         Output file path (auto-generated if not specified)");
    println!("  --output-format <fmt>   Output format: report or flat");
    println!("  --single-chunk          Do not split the input on form-feed page breaks");
    println!("  --drop-empty            Drop findings with no recognized fields");

    println!("\n📄 Output Formats:");
    println!("  report  - Full envelope with schema version, run id, and profile (default)");
    println!("  flat    - Just the summary rows and findings");

    println!("\n📝 Config file keys (YAML):");
    println!("  block_marker         Line prefix that opens an issue block (default: \"Issue ID:\")");
    println!("  field_labels         Ordered list of recognized field labels");
    println!("  drop_empty_findings  Drop findings with no recognized fields");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i report.txt");
    println!("  cargo run -- -i report.txt -o /path/to/output.json");
    println!("  cargo run -- -i report.txt -c labels.yaml -f flat");
}

fn save_report(
    report: &scanparse_core::ExtractionReport,
    output_path: &str,
    format: &str,
) -> Result<()> {
    report.save_with_format(output_path, format)?;

    match format {
        "flat" => println!("💾 Flat format results saved to: {}", output_path),
        "report" => println!("💾 Report saved to: {}", output_path),
        _ => {
            println!(
                "⚠️  Unknown output format '{}', using default report format",
                format
            );
            println!("💾 Report saved to: {}", output_path);
        }
    }

    Ok(())
}
