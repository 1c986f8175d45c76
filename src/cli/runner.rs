use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use roundel::{BorderParams, IconSetParams, add_border_to_path, generate_icon_set};

use super::args::{BorderArgs, CliArgs, Command, FaviconArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Config file (or stock defaults) with any explicit flags layered on top.
pub fn border_params(args: &BorderArgs) -> Result<BorderParams, AppError> {
    let mut params = match &args.config {
        Some(path) => load_config::<BorderParams>(path)?,
        None => BorderParams::default(),
    };
    if let Some(width) = args.border_width {
        params.border_width = width;
    }
    if let Some(radius) = args.corner_radius {
        params.corner_radius = radius;
    }
    if let Some(color) = args.color {
        params.border_color = color;
    }
    if args.square_crop {
        params.square_crop = true;
    }
    if args.size.is_some() {
        params.size = args.size;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    params.validate()?;
    Ok(params)
}

pub fn icon_set_params(args: &FaviconArgs) -> Result<IconSetParams, AppError> {
    let mut params = match &args.config {
        Some(path) => load_config::<IconSetParams>(path)?,
        None => IconSetParams::default(),
    };
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    params.validate()?;
    Ok(params)
}

fn run_border(args: BorderArgs) -> Result<(), AppError> {
    let params = border_params(&args)?;
    let output = args.output.clone().unwrap_or_else(|| args.input.clone());
    debug!("Border params: {:?}", params);
    add_border_to_path(&args.input, &output, &params)?;
    Ok(())
}

fn run_favicons(args: FaviconArgs) -> Result<(), AppError> {
    let params = icon_set_params(&args)?;
    debug!(
        "Icon set: {} targets, ico {} {:?}",
        params.targets.len(),
        params.ico.path.display(),
        params.ico.sizes
    );
    let report = generate_icon_set(&args.input, &args.root, &params)?;
    if !report.failed.is_empty() {
        return Err(AppError::IconBatch {
            failed: report.failed.len(),
        });
    }
    info!("All circular favicons created successfully!");
    Ok(())
}

/// Dispatch a subcommand; a missing input is reported and exits cleanly.
pub fn execute(command: Command) -> Result<(), AppError> {
    let outcome = match command {
        Command::Border(args) => run_border(args),
        Command::Favicons(args) => run_favicons(args),
    };
    match outcome {
        Err(AppError::Roundel(e)) if e.is_missing_input() => {
            error!("Error: {}", e);
            Ok(())
        }
        other => other,
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    execute(args.command)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use roundel::BorderColor;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn border_defaults_match_stock_styling() {
        let args = parse(&["roundel", "border"]);
        let Command::Border(border) = args.command else {
            panic!("expected border subcommand");
        };
        assert_eq!(border.input, Path::new("public/tomo-image.png"));
        assert!(border.output.is_none());
        assert_eq!(border_params(&border).unwrap(), BorderParams::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("preset.json");
        fs::write(&config, r#"{ "border_width": 3, "corner_radius": 9 }"#).unwrap();

        let args = parse(&[
            "roundel",
            "border",
            "--config",
            config.to_str().unwrap(),
            "--corner-radius",
            "4",
            "--color",
            "#000000",
        ]);
        let Command::Border(border) = args.command else {
            panic!("expected border subcommand");
        };
        let params = border_params(&border).unwrap();
        assert_eq!(params.border_width, 3);
        assert_eq!(params.corner_radius, 4);
        assert_eq!(params.border_color, BorderColor::rgba(0, 0, 0, 255));
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("broken.json");
        fs::write(&config, "{ not json").unwrap();
        let args = parse(&["roundel", "favicons", "--config", config.to_str().unwrap()]);
        let Command::Favicons(favicons) = args.command else {
            panic!("expected favicons subcommand");
        };
        assert!(matches!(
            icon_set_params(&favicons),
            Err(AppError::ConfigParse { .. })
        ));
    }

    #[test]
    fn invalid_colour_is_a_parse_error() {
        assert!(CliArgs::try_parse_from(["roundel", "border", "--color", "teal"]).is_err());
    }

    #[test]
    fn missing_input_exits_cleanly_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.png");
        let args = parse(&["roundel", "border", "--input", input.to_str().unwrap()]);
        execute(args.command).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        let args = parse(&[
            "roundel",
            "favicons",
            "--input",
            input.to_str().unwrap(),
            "--root",
            dir.path().to_str().unwrap(),
        ]);
        execute(args.command).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn corrupt_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("corrupt.png");
        fs::write(&input, b"definitely not a png").unwrap();
        let args = parse(&["roundel", "border", "--input", input.to_str().unwrap()]);
        assert!(matches!(execute(args.command), Err(AppError::Roundel(_))));
    }
}
