mod interactive;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pkg_constants::azure::{ENVIRONMENTS, REGIONS};
use pkg_constants::naming::DEFAULT_INSTANCE;
use pkg_constants::paths::DEFAULT_CONFIG;
use pkg_naming::{GeneratedName, NameEngine, NameRequest, Registry};
use pkg_types::config::{NamerConfigFile, load_config_file};
use pkg_types::resource::ResourceTypeSpec;
use pkg_types::validate::ValidationOutcome;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cafname",
    about = "Generate and validate Azure resource names (Cloud Adoption Framework)"
)]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG)]
    config: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported resource types
    List,
    /// Show the naming rules of one resource type
    Show {
        /// Resource type key, e.g. storage_account
        resource_type: String,
    },
    /// Generate a name and validate it
    Generate {
        /// Resource type key, e.g. storage_account
        resource_type: String,
        /// Workload or application name
        #[arg(long, short)]
        workload: String,
        /// Environment, e.g. dev or prod
        #[arg(long, short)]
        env: Option<String>,
        /// Azure region, required by regional resource types
        #[arg(long, short)]
        region: Option<String>,
        /// Instance number or suffix
        #[arg(long, short)]
        instance: Option<String>,
    },
    /// Validate an existing name
    Validate {
        /// Resource type key, e.g. storage_account
        resource_type: String,
        /// Name to check, exactly as it would be deployed
        name: String,
    },
    /// List known Azure regions
    Regions,
    /// List common environment names
    Environments,
    /// Prompt for resource details interactively
    Interactive,
}

/// Defaults for name tokens, merged from the config file and built-ins.
pub(crate) struct TokenDefaults {
    pub environment: Option<String>,
    pub region: Option<String>,
    pub instance: String,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    resource_type: &'a str,
    name: &'a str,
    length: usize,
    #[serde(flatten)]
    outcome: ValidationOutcome,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: NamerConfigFile = load_config_file(&cli.config)
        .with_context(|| format!("failed to load config file {}", cli.config))?;
    file_cfg.check()?;
    debug!("Config file: {}", cli.config);

    let registry = Registry::azure_caf()?.with_overrides(file_cfg.resource_types)?;
    info!("Loaded {} resource types", registry.len());
    let engine = NameEngine::new(&registry);

    let defaults = TokenDefaults {
        environment: file_cfg.environment,
        region: file_cfg.region,
        instance: file_cfg
            .instance
            .unwrap_or_else(|| DEFAULT_INSTANCE.to_string()),
    };

    match cli.command {
        Commands::List => cmd_list(&registry, cli.output)?,
        Commands::Show { resource_type } => {
            let spec = registry.get(&resource_type)?.spec();
            cmd_show(spec, cli.output)?;
        }
        Commands::Generate {
            resource_type,
            workload,
            env,
            region,
            instance,
        } => {
            let spec = registry.get(&resource_type)?.spec();

            // Merge: CLI args > config file > defaults
            let Some(environment) = env.or(defaults.environment) else {
                bail!("--env is required (or set `environment` in {})", cli.config);
            };
            let region = region.or(defaults.region).unwrap_or_default();
            if spec.is_regional() && region.trim().is_empty() {
                bail!(
                    "{} requires a region (--region), e.g. {}",
                    spec.name(),
                    REGIONS[..4].join(", ")
                );
            }
            let instance = instance.unwrap_or(defaults.instance);

            let request = NameRequest {
                workload: &workload,
                environment: &environment,
                region: &region,
                instance: &instance,
            };
            let generated = engine.generate_and_validate(&resource_type, &request)?;
            print_generated(spec, &generated, cli.output)?;
            if !generated.outcome.valid {
                std::process::exit(1);
            }
        }
        Commands::Validate {
            resource_type,
            name,
        } => {
            let outcome: ValidationOutcome = engine.validate(&resource_type, &name)?.into();
            let report = ValidationReport {
                resource_type: &resource_type,
                name: &name,
                length: name.chars().count(),
                outcome,
            };
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => {
                    println!("Name:     {}", report.name);
                    println!("Length:   {} chars", report.length);
                    print_outcome(&report.outcome);
                }
            }
            if !report.outcome.valid {
                std::process::exit(1);
            }
        }
        Commands::Regions => print_list(REGIONS, cli.output)?,
        Commands::Environments => print_list(ENVIRONMENTS, cli.output)?,
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run(&engine, &defaults, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

fn cmd_list(registry: &Registry, output: OutputFormat) -> anyhow::Result<()> {
    if output == OutputFormat::Json {
        let specs: Vec<&ResourceTypeSpec> = registry.iter().map(|e| e.spec()).collect();
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    println!(
        "{:<18} {:<18} {:<16} {}",
        "KEY", "NAME", "SCOPE", "PATTERN"
    );
    for entry in registry.iter() {
        let spec = entry.spec();
        println!(
            "{:<18} {:<18} {:<16} {}",
            spec.key(),
            spec.name(),
            spec.scope(),
            spec.pattern_template()
        );
    }

    if registry.is_empty() {
        println!("(no resource types configured)");
    }
    Ok(())
}

fn cmd_show(spec: &ResourceTypeSpec, output: OutputFormat) -> anyhow::Result<()> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(spec)?);
        return Ok(());
    }

    println!("Resource Type:  {}", spec.name());
    println!("Key:            {}", spec.key());
    println!("Prefix:         {}", spec.prefix());
    println!("Length:         {}-{} chars", spec.min_length(), spec.max_length());
    println!("Pattern:        {}", spec.pattern());
    println!("Template:       {}", spec.pattern_template());
    println!("Scope:          {}", scope_label(spec));
    println!("Region:         {}", yes_no(spec.is_regional()));
    println!("Lowercase only: {}", yes_no(spec.is_lowercase_only()));
    println!("No hyphens:     {}", yes_no(spec.is_hyphenless()));
    Ok(())
}

fn print_generated(
    spec: &ResourceTypeSpec,
    generated: &GeneratedName,
    output: OutputFormat,
) -> anyhow::Result<()> {
    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(generated)?);
        return Ok(());
    }

    println!("Resource Type:  {}", spec.name());
    println!("Generated Name: {}", generated.name);
    println!("Length:         {} chars", generated.length);
    println!("Scope:          {}", scope_label(spec));
    println!("Pattern:        {}", spec.pattern_template());
    print_outcome(&generated.outcome);
    Ok(())
}

fn print_outcome(outcome: &ValidationOutcome) {
    match &outcome.reason {
        None => println!("Validation:     passed"),
        Some(reason) => println!("Validation:     FAILED ({})", reason),
    }
}

fn print_list(items: &[&str], output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(items)?),
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
    }
    Ok(())
}

pub(crate) fn scope_label(spec: &ResourceTypeSpec) -> String {
    if spec.is_globally_unique() {
        format!("{} (globally unique)", spec.scope())
    } else {
        spec.scope().to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
