//! CLI entry point for onehealth.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `onehealth-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use onehealth_app::{
    AssessInput, ExplainOutput, alert_exit_code, parse_report_json, render_markdown, render_text,
    run_assess, run_explain, serialize_report, to_renderable,
};
use onehealth_domain::policy::ModelToggles;
use onehealth_settings::{BacterialConfig, FluronaConfig, Overrides};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "onehealth",
    version,
    about = "One Health risk engine: Flurona coinfection and bacterial/AMR risk scoring"
)]
struct Cli {
    /// Path to the scenario TOML (a missing file is allowed; the preset applies).
    #[arg(long, global = true, default_value = "onehealth.toml")]
    config: Utf8PathBuf,

    /// Override preset (baseline|winter-surge|intensive-farming).
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Exit 2 when the verdict reaches this level (low|moderate|high).
    #[arg(long, global = true)]
    alert_on: Option<String>,

    /// Debug logging on stderr (otherwise `ONEHEALTH_LOG`, default `warn`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every enabled model, print the summary and write artifacts.
    Assess {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/onehealth/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/onehealth/report.md")]
        markdown_out: Utf8PathBuf,

        #[command(flatten)]
        climate: PerModelClimateArgs,
        #[command(flatten)]
        flurona: FluronaArgs,
        #[command(flatten)]
        bacterial: BacterialArgs,
    },

    /// Run only the Flurona coinfection model and print the summary.
    Flurona {
        #[command(flatten)]
        climate: ClimateArgs,
        #[command(flatten)]
        flurona: FluronaArgs,
    },

    /// Run only the bacterial/AMR model and print the summary.
    Bacterial {
        #[command(flatten)]
        climate: ClimateArgs,
        #[command(flatten)]
        bacterial: BacterialArgs,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/onehealth/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a model or metric: formula and labeling.
    Explain {
        /// The model_id (e.g., "flurona") or metric_id (e.g., "bacterial.amr_risk") to explain.
        identifier: String,
    },
}

/// Climate inputs for a single-model subcommand.
#[derive(Args, Clone, Debug, Default)]
struct ClimateArgs {
    /// Temperature in degrees Celsius.
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    /// Relative humidity in percent.
    #[arg(long)]
    humidity: Option<f64>,
}

/// Climate inputs for `assess`, one pair per model.
#[derive(Args, Clone, Debug, Default)]
struct PerModelClimateArgs {
    /// Flurona temperature in degrees Celsius (-10..45).
    #[arg(long, allow_negative_numbers = true)]
    flurona_temperature: Option<f64>,
    /// Flurona relative humidity in percent.
    #[arg(long)]
    flurona_humidity: Option<f64>,
    /// Bacterial temperature in degrees Celsius (0..45).
    #[arg(long, allow_negative_numbers = true)]
    bacterial_temperature: Option<f64>,
    /// Bacterial relative humidity in percent.
    #[arg(long)]
    bacterial_humidity: Option<f64>,
}

#[derive(Args, Clone, Debug, Default)]
struct FluronaArgs {
    /// Influenza cases per 100k.
    #[arg(long)]
    flu_incidence: Option<f64>,
    /// COVID-19 cases per 100k.
    #[arg(long)]
    covid_incidence: Option<f64>,
    /// low|moderate|high
    #[arg(long)]
    population_density: Option<String>,
    /// low|moderate|high
    #[arg(long)]
    mobility: Option<String>,
    /// Influenza vaccination coverage in percent.
    #[arg(long)]
    flu_vaccination: Option<f64>,
    /// COVID-19 vaccination coverage in percent.
    #[arg(long)]
    covid_vaccination: Option<f64>,
    /// adequate|strained|overwhelmed
    #[arg(long)]
    hospital_capacity: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
struct BacterialArgs {
    /// Antibiotic usage: low|moderate|high
    #[arg(long)]
    abx_usage: Option<String>,
    /// adequate|limited|overloaded
    #[arg(long)]
    icu_capacity: Option<String>,
    /// Animal / farm contact: low|moderate|high
    #[arg(long)]
    animal_contact: Option<String>,
}

impl PerModelClimateArgs {
    fn flurona(&self) -> ClimateArgs {
        ClimateArgs {
            temperature: self.flurona_temperature,
            humidity: self.flurona_humidity,
        }
    }

    fn bacterial(&self) -> ClimateArgs {
        ClimateArgs {
            temperature: self.bacterial_temperature,
            humidity: self.bacterial_humidity,
        }
    }
}

impl FluronaArgs {
    fn into_config(self, climate: &ClimateArgs) -> FluronaConfig {
        FluronaConfig {
            temperature_c: climate.temperature,
            humidity_pct: climate.humidity,
            flu_incidence: self.flu_incidence,
            covid_incidence: self.covid_incidence,
            population_density: self.population_density,
            mobility: self.mobility,
            flu_vaccination_pct: self.flu_vaccination,
            covid_vaccination_pct: self.covid_vaccination,
            hospital_capacity: self.hospital_capacity,
        }
    }
}

impl BacterialArgs {
    fn into_config(self, climate: &ClimateArgs) -> BacterialConfig {
        BacterialConfig {
            temperature_c: climate.temperature,
            humidity_pct: climate.humidity,
            antibiotic_usage: self.abx_usage,
            icu_capacity: self.icu_capacity,
            animal_contact: self.animal_contact,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Commands::Assess {
            ref report_out,
            write_markdown,
            ref markdown_out,
            ref climate,
            ref flurona,
            ref bacterial,
        } => {
            let overrides = Overrides {
                flurona: flurona.clone().into_config(&climate.flurona()),
                bacterial: bacterial.clone().into_config(&climate.bacterial()),
                ..global_overrides(&cli)
            };
            let markdown_out = write_markdown.then_some(markdown_out.as_path());
            cmd_assess(&cli.config, overrides, Some(report_out.as_path()), markdown_out)
        }
        Commands::Flurona {
            ref climate,
            ref flurona,
        } => {
            let overrides = Overrides {
                models: Some(ModelToggles {
                    flurona: true,
                    bacterial: false,
                }),
                flurona: flurona.clone().into_config(climate),
                ..global_overrides(&cli)
            };
            cmd_assess(&cli.config, overrides, None, None)
        }
        Commands::Bacterial {
            ref climate,
            ref bacterial,
        } => {
            let overrides = Overrides {
                models: Some(ModelToggles {
                    flurona: false,
                    bacterial: true,
                }),
                bacterial: bacterial.clone().into_config(climate),
                ..global_overrides(&cli)
            };
            cmd_assess(&cli.config, overrides, None, None)
        }
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()).map(|()| 0),
        Commands::Explain { ref identifier } => Ok(cmd_explain(identifier)),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("onehealth error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("ONEHEALTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn global_overrides(cli: &Cli) -> Overrides {
    Overrides {
        preset: cli.preset.clone(),
        alert_on: cli.alert_on.clone(),
        ..Overrides::default()
    }
}

fn cmd_assess(
    config: &Utf8Path,
    overrides: Overrides,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    // Missing scenario file is allowed (the preset applies).
    let config_text = if config.exists() {
        std::fs::read_to_string(config).with_context(|| format!("read scenario: {}", config))?
    } else {
        tracing::debug!(path = %config, "no scenario file; using preset");
        String::new()
    };

    let output = run_assess(AssessInput {
        config_text: &config_text,
        overrides,
    })?;

    let renderable = to_renderable(&output.report);
    print!("{}", render_text(&renderable));

    if let Some(path) = report_out {
        let data = serialize_report(&output.report).context("serialize report")?;
        write_file(path, &data).context("write report json")?;
        tracing::info!(path = %path, "wrote report");
    }
    if let Some(path) = markdown_out {
        let md = render_markdown(&renderable);
        write_file(path, md.as_bytes()).context("write markdown")?;
        tracing::info!(path = %path, "wrote markdown");
    }

    Ok(alert_exit_code(&output.report))
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", onehealth_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_model_ids,
            available_metric_ids,
        } => {
            eprint!(
                "{}",
                onehealth_app::format_not_found(
                    &identifier,
                    available_model_ids,
                    available_metric_ids
                )
            );
            1
        }
    }
}
