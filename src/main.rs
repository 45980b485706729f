use clap::Parser;
use std::path::Path;
use trisolve::app::{SolveEngine, SolveRequest, SvgSink};
use trisolve::config::toml_config::DEFAULT_PRECISION;
use trisolve::utils::{logger, validation::Validate};
use trisolve::{CliConfig, LocalStorage, OutputFormat, Report, TomlConfig, TriError};

const EXIT_SOLVE_FAILED: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(all_solved) => {
            if !all_solved {
                std::process::exit(EXIT_SOLVE_FAILED);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let code = if e.is_input_error() { EXIT_SOLVE_FAILED } else { 1 };
            std::process::exit(code);
        }
    }
}

/// Solves every requested triangle and prints the reports. Returns whether all of them solved.
fn run(config: &CliConfig) -> Result<bool, TriError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let loaded = TomlConfig::from_file(path)?;
            loaded.validate()?;
            Some(loaded)
        }
        None => None,
    };

    let format = match (config.format, &file_config) {
        (Some(format), _) => format,
        (None, Some(file)) => file.output_format()?,
        (None, None) => OutputFormat::default(),
    };
    let precision = config
        .precision
        .or(file_config.as_ref().map(|f| f.output.precision))
        .unwrap_or(DEFAULT_PRECISION);

    let mut requests = Vec::new();
    if let Some((name, spec)) = config.triangle()? {
        requests.push(SolveRequest::new(name, spec));
    }
    if let Some(file) = &file_config {
        requests.extend(
            file.triangles
                .iter()
                .map(|entry| SolveRequest::new(entry.name.clone(), entry.spec)),
        );
    }
    if requests.is_empty() {
        return Err(TriError::Config {
            message: "no triangle given; pass values with -a/-b/-c/-A/-B/-C, a --preset, or a --config file with [[triangle]] entries".to_string(),
        });
    }

    let mut engine = SolveEngine::new(Report::new(format, precision));
    if let Some(svg) = &config.svg {
        if requests.len() > 1 {
            return Err(TriError::Config {
                message: "--svg names a single file; use output.svg_dir for batches".to_string(),
            });
        }
        let path = Path::new(svg);
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .ok_or_else(|| TriError::Config {
                message: format!("--svg path '{}' has no file name", svg),
            })?;
        engine = engine.with_svg(SvgSink {
            storage: LocalStorage::new(dir),
            file_name: Some(file_name),
        });
    } else if let Some(dir) = file_config.as_ref().and_then(|f| f.output.svg_dir.as_deref()) {
        engine = engine.with_svg(SvgSink {
            storage: LocalStorage::new(dir),
            file_name: None,
        });
    }

    tracing::info!(count = requests.len(), %format, "solving triangles");
    let results = engine.run(&requests)?;

    let batch = results.len() > 1;
    let mut all_solved = true;
    for result in &results {
        if batch {
            println!("## {}\n", result.name);
        }
        println!("{}", result.rendered);
        if let Some(path) = &result.svg_path {
            println!("\n📁 Diagram saved to: {}", path);
        }
        all_solved &= result.is_solved();
        if batch {
            println!();
        }
    }

    Ok(all_solved)
}
