// main.rs - CLI entry point

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use strmatch::cli::Config;
use strmatch::core::check_profile_markers;
use strmatch::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 strmatch v{}", env!("CARGO_PKG_VERSION"));

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    }

    // Validate all arguments
    let validation = validate_args(&args)?;

    let total_start = Instant::now();

    // Ingest query profiles
    println!(
        "📊 Ingesting {} input file(s)...",
        validation.input_paths.len()
    );
    let queries = str_ingress(
        &validation.input_paths,
        &validation.ingress_options,
        validation.sample_map.as_ref(),
    )?;
    println!(
        "✅ Ingested {} samples, {} markers",
        queries.len(),
        queries.marker_names.len()
    );

    // Warn about markers the cross-reference service would reject
    if args.check_markers {
        let mut clean = true;
        for sample in &queries.samples {
            let missing = check_profile_markers(sample);
            if !missing.is_empty() {
                clean = false;
                println!(
                    "⚠️  Sample '{}': markers not accepted by the cross-reference service: {}",
                    sample.sample_id,
                    missing.join(", ")
                );
            }
        }
        if clean {
            println!("✅ All markers compatible with the cross-reference service");
        }
    }

    // Reference set: a database file, or the inputs compared all-to-all
    let database = match &validation.database_path {
        Some(path) => {
            println!("📚 Ingesting reference database '{}'...", path.display());
            let db = str_ingress(&[path.clone()], &validation.ingress_options, None)?;
            println!("✅ Database: {} samples", db.len());
            Some(db)
        }
        None => None,
    };
    let references = database.as_ref().unwrap_or(&queries);

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 Final table: {} samples × {} markers",
            queries.len(),
            queries.marker_names.len()
        );
        return Ok(());
    }

    // Output directory and run log
    std::fs::create_dir_all(&args.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory '{}': {}",
            args.output_dir, e
        )
    })?;
    let dt_string = chrono::Local::now().format("%Y%m%d.%H_%M_%S").to_string();
    let log_path = Path::new(&args.output_dir).join(format!("strmatch.{}.log", dt_string));
    let mut log_file = File::create(&log_path)
        .map_err(|e| format!("Failed to create log file '{}': {}", log_path.display(), e))?;
    write_log_header(&mut log_file, &args, &command_line)?;

    // Run the comparisons
    let compare_options = CompareOptions {
        use_amel: args.score_amel,
        amel_col: args.amel_col.clone(),
        mix_threshold: args.mix_threshold,
    };
    let reports = compare_all(&queries, references, &compare_options);

    // Per-sample reports, run log, and summaries
    let thresholds = SummaryThresholds {
        tanabe: args.tan_threshold,
        masters_query: args.mas_q_threshold,
        masters_ref: args.mas_r_threshold,
    };
    let mut summaries = Vec::new();
    for report in &reports {
        for comparison in &report.comparisons {
            log_line(
                &mut log_file,
                &format!("Comparing {} to {}", report.sample_id, comparison.sample_id),
            )?;
        }
        for (reference_id, reason) in &report.skipped {
            log_line(
                &mut log_file,
                &format!(
                    "Skipping {} vs {}: {}",
                    report.sample_id, reference_id, reason
                ),
            )?;
        }

        let query = queries
            .get(&report.sample_id)
            .ok_or_else(|| format!("Missing query profile '{}'", report.sample_id))?;
        let sample_path = Path::new(&args.output_dir)
            .join(format!("{}.strmatch.{}.csv", report.sample_id, dt_string));
        write_sample_report(
            &sample_path,
            report,
            query,
            references,
            &queries.marker_names,
        )?;

        summaries.push(make_summary(report, &thresholds));
    }
    println!(
        "✅ {} per-sample reports written to: {}",
        reports.len(),
        args.output_dir
    );

    let summary_path =
        Path::new(&args.output_dir).join(format!("full_summary.strmatch.{}.csv", dt_string));
    write_summary_csv(&summary_path, &summaries, &queries)?;

    if !args.no_html {
        let html_path =
            Path::new(&args.output_dir).join(format!("full_summary.strmatch.{}.html", dt_string));
        write_summary_html(&html_path, &summaries, &queries)?;
    }

    let total_elapsed = total_start.elapsed();
    println!(
        "\n⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    Ok(())
}

fn log_line(log_file: &mut File, line: &str) -> Result<(), String> {
    writeln!(log_file, "{}", line).map_err(|e| format!("Log write error: {}", e))
}

/// Record the run parameters at the top of the log, then open the
/// comparison section.
fn write_log_header(log_file: &mut File, args: &Args, command_line: &str) -> Result<(), String> {
    log_line(log_file, &format!("Tanabe threshold: {}", args.tan_threshold))?;
    log_line(
        log_file,
        &format!("Masters (vs. query) threshold: {}", args.mas_q_threshold),
    )?;
    log_line(
        log_file,
        &format!("Masters (vs. reference) threshold: {}", args.mas_r_threshold),
    )?;
    log_line(log_file, &format!("Mix threshold: {}", args.mix_threshold))?;
    log_line(
        log_file,
        &format!("Sample map: {}", args.sample_map.as_deref().unwrap_or("None")),
    )?;
    log_line(
        log_file,
        &format!("Database: {}", args.database.as_deref().unwrap_or("None")),
    )?;
    log_line(log_file, &format!("Amelogenin column: {}", args.amel_col))?;
    log_line(log_file, &format!("Sample column: {}", args.sample_col))?;
    log_line(log_file, &format!("Marker column: {}", args.marker_col))?;
    log_line(log_file, &format!("Penta fix: {}", !args.no_penta_fix))?;
    log_line(
        log_file,
        &format!("Use amelogenin for scoring: {}\n", args.score_amel),
    )?;
    log_line(log_file, "Full command:")?;
    log_line(log_file, &format!("{}\n", command_line))?;
    log_line(log_file, "Comparisons:")
}
