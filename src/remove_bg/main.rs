mod application;
mod domain;
mod infrastructure;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use application::error::ApplicationError;
use application::remove_bg_service::RemoveBgService;
use domain::settings::{RemovalSettings, DEFAULT_SAMPLE_SIZE, DEFAULT_TOLERANCE};
use infrastructure::background_remover::DefaultBackgroundRemover;

/// Remove solid background from images.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List of input image paths
    #[arg(long = "input", value_name = "PATH", num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR", default_value = "processed_assets")]
    output: PathBuf,

    /// Maximum per-channel distance from the background color (0-255)
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: u8,

    /// Side of the top-left square sampled for the background color
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: u32,
}

impl Args {
    fn settings(&self) -> Result<RemovalSettings, ApplicationError> {
        RemovalSettings::new(self.tolerance, self.sample_size)
            .map_err(|e| ApplicationError::ConfigurationError(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.settings()?;
    log::debug!("settings: {:?}, output: {}", settings, args.output.display());

    let service = RemoveBgService::new(Arc::new(DefaultBackgroundRemover::new()), settings);
    let report = service.process_batch(&args.inputs, &args.output).await;

    println!(
        "{} processed, {} failed",
        report.processed.len(),
        report.failed.len()
    );
    if !report.is_success() {
        anyhow::bail!("{} of {} inputs failed", report.failed.len(), args.inputs.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["remove_bg", "--input", "a.png", "b.png"]).unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(args.output, PathBuf::from("processed_assets"));
        assert_eq!(args.settings().unwrap(), RemovalSettings::default());
    }

    #[test]
    fn test_args_custom_values() {
        let args = Args::try_parse_from([
            "remove_bg",
            "--input",
            "a.png",
            "--output",
            "out",
            "--tolerance",
            "30",
            "--sample-size",
            "3",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(
            args.settings().unwrap(),
            RemovalSettings {
                tolerance: 30,
                sample_size: 3
            }
        );
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["remove_bg", "--output", "out"]).is_err());
    }

    #[test]
    fn test_args_reject_out_of_range_tolerance() {
        assert!(Args::try_parse_from(["remove_bg", "--input", "a.png", "--tolerance", "256"]).is_err());
    }

    #[test]
    fn test_zero_sample_size_is_configuration_error() {
        let args = Args::try_parse_from(["remove_bg", "--input", "a.png", "--sample-size", "0"]).unwrap();
        assert!(matches!(
            args.settings(),
            Err(ApplicationError::ConfigurationError(_))
        ));
    }
}
