//! Command-line batch extractor: pulls the loudest fixed-length clip out of
//! every audio file in a directory and writes it as a normalized mono WAV.

use std::path::PathBuf;

use peakclip::batch;
use peakclip::config::ExtractConfig;
use peakclip::logging;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let report = batch::run_batch(&options.config).map_err(|err| err.to_string())?;

    println!(
        "Extracted {} of {} clips into {}",
        report.succeeded(),
        report.total_files,
        options.config.output_dir.display()
    );
    if !report.failures.is_empty() {
        println!("Failed files:");
        for failure in &report.failures {
            println!("  {}: {}", failure.path.display(), failure.error);
        }
    }

    if let Some(report_path) = &options.report_path {
        let payload = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("Failed to encode report: {err}"))?;
        std::fs::write(report_path, payload)
            .map_err(|err| format!("Failed to write report {}: {err}", report_path.display()))?;
        println!("Report written to {}", report_path.display());
    }
    Ok(())
}

struct CliOptions {
    config: ExtractConfig,
    report_path: Option<PathBuf>,
}

fn parse_args(args: Vec<String>) -> Result<Option<CliOptions>, String> {
    let mut config = ExtractConfig::default();
    let mut report_path = None;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--input" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--input requires a value".to_string())?;
                config.input_dir = PathBuf::from(value);
            }
            "--output" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--output requires a value".to_string())?;
                config.output_dir = PathBuf::from(value);
            }
            "--rate" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--rate requires a value".to_string())?;
                config.sample_rate = value
                    .parse::<u32>()
                    .ok()
                    .filter(|rate| *rate > 0)
                    .ok_or_else(|| format!("Invalid --rate value: {value}"))?;
            }
            "--seconds" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--seconds requires a value".to_string())?;
                config.clip_seconds = value
                    .parse::<f64>()
                    .ok()
                    .filter(|seconds| *seconds > 0.0)
                    .ok_or_else(|| format!("Invalid --seconds value: {value}"))?;
            }
            "--suffix" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--suffix requires a value".to_string())?;
                config.output_suffix = value.to_string();
            }
            "--report" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--report requires a value".to_string())?;
                report_path = Some(PathBuf::from(value));
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }

    if config.input_dir.as_os_str().is_empty() {
        return Err("--input is required".to_string());
    }
    if config.output_dir.as_os_str().is_empty() {
        return Err("--output is required".to_string());
    }

    Ok(Some(CliOptions {
        config,
        report_path,
    }))
}

fn help_text() -> String {
    [
        "peakclip",
        "",
        "Extracts the loudest fixed-length clip from each audio file in a",
        "directory and writes it as a peak-normalized mono WAV.",
        "",
        "Usage:",
        "  peakclip --input <dir> --output <dir> [options]",
        "",
        "Options:",
        "  --input <dir>     Directory with .mp3/.wav/.flac files (required).",
        "  --output <dir>    Output directory for clips (required).",
        "  --rate <u32>      Canonical sample rate in Hz (default: 16000).",
        "  --seconds <f64>   Clip duration in seconds (default: 10.24).",
        "  --suffix <str>    Output stem suffix (default: _processed).",
        "  --report <path>   Write a JSON batch report to this path.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_input_and_output() {
        assert!(parse_args(vec![]).is_err());
        assert!(parse_args(vec!["--input".into(), "in".into()]).is_err());
    }

    #[test]
    fn parses_full_argument_set() {
        let options = parse_args(
            [
                "--input", "raw", "--output", "processed", "--rate", "32000", "--seconds", "5.12",
                "--suffix", "_clip", "--report", "report.json",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(options.config.input_dir, PathBuf::from("raw"));
        assert_eq!(options.config.output_dir, PathBuf::from("processed"));
        assert_eq!(options.config.sample_rate, 32_000);
        assert!((options.config.clip_seconds - 5.12).abs() < 1e-9);
        assert_eq!(options.config.output_suffix, "_clip");
        assert_eq!(options.report_path, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn rejects_zero_rate_and_duration() {
        let base = ["--input", "a", "--output", "b"];
        let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
        args.extend(["--rate".into(), "0".into()]);
        assert!(parse_args(args).is_err());

        let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
        args.extend(["--seconds".into(), "-1.0".into()]);
        assert!(parse_args(args).is_err());
    }

    #[test]
    fn help_short_circuits_without_config() {
        assert!(parse_args(vec!["--help".into()]).unwrap().is_none());
    }
}
