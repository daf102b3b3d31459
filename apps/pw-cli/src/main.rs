use clap::{Parser, Subcommand, ValueEnum};
use pw_core::Section;
use pw_corrosion::{CorrosionError, SectionAssessment, assess_sections};
use pw_economics::{
    EconomicsError, detailed_section_cost, estimate_section_cost, fleet_economic_summary,
    repair_method_info,
};
use pw_project::templates::{self, FluidKind, PIPE_STANDARDS, TemplateShape};
use pw_project::{Project, ProjectError};
use pw_tables::{Coefficients, TablesError};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Coefficient tables: {0}")]
    Tables(#[from] TablesError),

    #[error("Corrosion assessment failed: {0}")]
    Corrosion(#[from] CorrosionError),

    #[error("Cost estimate failed: {0}")]
    Economics(#[from] EconomicsError),

    #[error("YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(about = "Pipewear CLI - pipeline corrosion and repair cost assessment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
    Json,
}

/// Options shared by every command that runs an assessment.
#[derive(clap::Args)]
struct AssessArgs {
    /// Path to the project YAML or JSON file
    project_path: PathBuf,
    /// Service years; overrides the project value
    #[arg(long)]
    years: Option<f64>,
    /// Coefficient tables YAML; built-in tables when omitted
    #[arg(long)]
    coefficients: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Assess wall loss and condition of every section
    Assess {
        #[command(flatten)]
        args: AssessArgs,
        /// Write the project back with remaining thickness attached
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Estimate repair cost of every section
    Costs {
        #[command(flatten)]
        args: AssessArgs,
        /// Include labor, material, coating and transport breakdowns
        #[arg(long)]
        detailed: bool,
        /// Cost the remaining thickness stored in the file, skip assessment
        #[arg(long)]
        as_is: bool,
    },
    /// Summarize urgent and planned repair cost over all sections
    Fleet {
        #[command(flatten)]
        args: AssessArgs,
        /// Cost the remaining thickness stored in the file, skip assessment
        #[arg(long)]
        as_is: bool,
    },
    /// List object templates for a fluid (oil or gas)
    Templates {
        fluid: String,
        /// Show the components of one template
        #[arg(long)]
        template: Option<String>,
    },
    /// Dump the built-in coefficient tables as YAML for editing
    Coefficients {
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Assess { args, output } => cmd_assess(&args, output.as_deref()),
        Commands::Costs {
            args,
            detailed,
            as_is,
        } => cmd_costs(&args, detailed, as_is),
        Commands::Fleet { args, as_is } => cmd_fleet(&args, as_is),
        Commands::Templates { fluid, template } => cmd_templates(&fluid, template.as_deref()),
        Commands::Coefficients { output } => cmd_coefficients(output.as_deref()),
    }
}

fn load_tables(path: Option<&Path>) -> CliResult<Coefficients> {
    match path {
        Some(path) => Ok(Coefficients::load_yaml(path)?),
        None => Ok(Coefficients::default()),
    }
}

/// Load the project, convert it and, unless `as_is`, run the corrosion
/// assessment so sections carry their remaining thickness.
fn prepare(
    args: &AssessArgs,
    as_is: bool,
) -> CliResult<(Project, Vec<Section>, Vec<SectionAssessment>, Coefficients)> {
    let tables = load_tables(args.coefficients.as_deref())?;
    let project = pw_project::load(&args.project_path)?;
    let years = args.years.unwrap_or(project.years);
    let fluid = project.fluid.to_environment()?;
    let mut sections = project.clone().into_sections()?;
    tracing::debug!(
        project = %project.name,
        sections = sections.len(),
        years,
        as_is,
        "project loaded"
    );

    let assessments = if as_is {
        Vec::new()
    } else {
        assess_sections(&fluid, &mut sections, years, &tables)?
    };
    Ok((project, sections, assessments, tables))
}

fn emit<T: Serialize>(format: OutputFormat, value: &T) -> CliResult<bool> {
    match format {
        OutputFormat::Text => Ok(false),
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
            Ok(true)
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
    }
}

fn condition_label(condition: Option<pw_core::ConditionLevel>) -> &'static str {
    condition.map_or("не определено", |c| c.label())
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = pw_project::load(project_path)?;
    project.fluid.to_environment()?;
    println!("✓ Project is valid");
    println!(
        "  {} ({}, {} sections, {} years)",
        project.name,
        project.fluid.kind(),
        project.sections.len(),
        project.years
    );
    Ok(())
}

fn cmd_assess(args: &AssessArgs, output: Option<&Path>) -> CliResult<()> {
    let (mut project, sections, assessments, _) = prepare(args, false)?;

    if !emit(args.format, &assessments)? {
        println!("Assessment of '{}':", project.name);
        for section in &assessments {
            println!("\n{} - {}", section.section, condition_label(section.condition));
            for c in &section.components {
                let id = if c.id.is_empty() { c.kind } else { c.id.as_str() };
                println!(
                    "  {:<24} {:>8.4} mm/yr  {:>7.2} -> {:>6.2} mm  {} [{}]",
                    id,
                    c.wall.rate_mm_per_year,
                    c.wall.initial_mm,
                    c.wall.remaining_mm,
                    c.wall.condition,
                    c.wall.breakdown.model,
                );
            }
        }
    }

    if let Some(path) = output {
        project.set_sections(&sections);
        if let Some(years) = args.years {
            project.years = years;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => pw_project::save_json(path, &project)?,
            _ => pw_project::save_yaml(path, &project)?,
        }
        eprintln!("✓ Assessed project written to {}", path.display());
    }
    Ok(())
}

fn cmd_costs(args: &AssessArgs, detailed: bool, as_is: bool) -> CliResult<()> {
    let (project, sections, _, tables) = prepare(args, as_is)?;

    if detailed {
        let costs = sections
            .iter()
            .map(|s| detailed_section_cost(s, &tables.economics))
            .collect::<Result<Vec<_>, _>>()?;
        if emit(args.format, &costs)? {
            return Ok(());
        }
        println!("Repair costs for '{}':", project.name);
        for c in &costs {
            let info = repair_method_info(&c.repair_method);
            println!(
                "\n{} - {} - {}",
                c.section,
                condition_label(c.condition),
                info.name
            );
            println!("  Labor:      {:>14.2} ({:.1} h)", c.labor_cost, c.labor_hours);
            println!("  Material:   {:>14.2}", c.material_cost);
            println!("  Coating:    {:>14.2}", c.coating_cost);
            println!("  Transport:  {:>14.2}", c.transport_cost);
            println!("  Overhead:   {:>14.2} ({}%)", c.overhead, c.overhead_percent);
            println!("  Total:      {:>14.2}", c.total_cost);
            println!("  Duration:   {} (urgency {})", info.duration, info.urgency);
        }
        return Ok(());
    }

    let costs = sections
        .iter()
        .map(|s| -> CliResult<_> {
            Ok((s.name().to_string(), estimate_section_cost(s, &tables.economics)?))
        })
        .collect::<CliResult<Vec<_>>>()?;
    if emit(args.format, &costs)? {
        return Ok(());
    }
    println!("Repair costs for '{}':", project.name);
    for (name, c) in &costs {
        println!(
            "  {:<24} {:<20} {:<32} {:>14.2}",
            name,
            condition_label(c.condition),
            c.repair_method,
            c.total_cost
        );
    }
    Ok(())
}

fn cmd_fleet(args: &AssessArgs, as_is: bool) -> CliResult<()> {
    let (project, sections, _, tables) = prepare(args, as_is)?;
    let summary = fleet_economic_summary(&sections, &tables.economics)?;
    if emit(args.format, &summary)? {
        return Ok(());
    }
    println!("Fleet summary for '{}':", project.name);
    println!(
        "  Urgent:  {:>3} sections  {:>16.2}",
        summary.urgent_count, summary.urgent_repair_cost
    );
    println!(
        "  Planned: {:>3} sections  {:>16.2}",
        summary.planned_count, summary.planned_repair_cost
    );
    if summary.undetermined_count > 0 {
        println!("  Without components: {}", summary.undetermined_count);
    }
    println!("  Total:                 {:>16.2}", summary.total_repair_cost);
    Ok(())
}

fn cmd_templates(fluid: &str, template_id: Option<&str>) -> CliResult<()> {
    let fluid: FluidKind = fluid.parse()?;

    let Some(id) = template_id else {
        println!("Object templates ({fluid}):");
        for t in templates::templates(fluid) {
            println!("  {:<20} {} - {}", t.id, t.name, t.description);
        }
        println!("\nStandard diameters (mm -> recommended wall mm):");
        for (d, t) in PIPE_STANDARDS {
            println!("  {d:>6} -> {t}");
        }
        return Ok(());
    };

    let t = templates::template(fluid, id).ok_or_else(|| ProjectError::Template {
        what: format!("no {fluid} template '{id}'"),
    })?;
    println!("{} ({})", t.name, t.id);
    println!("{}", t.description);
    for c in t.components {
        let required = if c.required { "required" } else { "optional" };
        match c.shape {
            TemplateShape::Pipe {
                length_m,
                diameter_mm,
                thickness_mm,
            } => println!(
                "  {:<22} {:<34} {required:<8} pipe {length_m} m, Ø{diameter_mm} x {thickness_mm} mm, {}",
                c.id,
                c.name,
                templates::default_material(fluid, true)
            ),
            TemplateShape::Equipment {
                wall_thickness_mm,
                count,
                material,
            } => println!(
                "  {:<22} {:<34} {required:<8} equipment x{count}, wall {wall_thickness_mm} mm, {material}",
                c.id, c.name
            ),
        }
    }
    Ok(())
}

fn cmd_coefficients(output: Option<&Path>) -> CliResult<()> {
    let tables = Coefficients::default();
    match output {
        Some(path) => {
            tables.save_yaml(path)?;
            eprintln!("✓ Coefficient tables written to {}", path.display());
        }
        None => print!("{}", tables.to_yaml_string()?),
    }
    Ok(())
}
