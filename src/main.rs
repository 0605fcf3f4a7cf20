use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use supplyworks::catalog::{MaterialType, PriceUnit, VehicleType, DISTRICTS};
use supplyworks::config::Config;
use supplyworks::flows::{MaterialSupplierForm, VehicleOwnerForm};
use supplyworks::logging;
use supplyworks::submission::{JsonFileSink, SubmissionSink};
use supplyworks::wizard::{Attachment, FieldValue, FlowForm, Wizard};

#[derive(Parser)]
#[command(name = "supplyworks")]
#[command(about = "SupplyWorks partner registration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config file for editing
    Init,

    /// List the districts, vehicle types and material types sellers pick from
    Catalog,

    /// Walk through a partner registration, one step at a time
    Register {
        /// Which registration flow to run
        #[arg(value_enum)]
        flow: RegisterFlow,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RegisterFlow {
    VehicleOwner,
    MaterialSupplier,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let interactive = matches!(cli.command, Commands::Register { .. });
    let _logging_handle = logging::init_logging(&config, interactive, cli.debug)?;

    match cli.command {
        Commands::Init => cmd_init(&config),
        Commands::Catalog => cmd_catalog(),
        Commands::Register { flow } => match flow {
            RegisterFlow::VehicleOwner => cmd_register::<VehicleOwnerForm>(&config),
            RegisterFlow::MaterialSupplier => cmd_register::<MaterialSupplierForm>(&config),
        },
    }
}

fn cmd_init(config: &Config) -> Result<()> {
    config.save()?;
    println!("Wrote {}", Config::project_config_path().display());
    Ok(())
}

fn cmd_catalog() -> Result<()> {
    println!("Districts ({})", DISTRICTS.len());
    println!("{}", "─".repeat(40));
    for district in DISTRICTS {
        println!("  {district}");
    }

    println!();
    println!("Vehicle types");
    println!("{}", "─".repeat(40));
    for ty in VehicleType::all() {
        println!("  {}", ty.label());
    }

    println!();
    println!("Material types");
    println!("{}", "─".repeat(40));
    for ty in MaterialType::all() {
        println!("  {}", ty.label());
    }

    println!();
    println!("Price units");
    println!("{}", "─".repeat(40));
    for unit in PriceUnit::all() {
        println!("  {} ({})", unit.as_str(), unit.label());
    }

    Ok(())
}

/// Line-driven wizard session on stdin, one command per line.
fn cmd_register<F: FlowForm>(config: &Config) -> Result<()> {
    let mut wizard = Wizard::<F>::new();

    println!("{} registration", F::flow().label());
    print_step(&wizard);
    println!("Commands: set, attach, toggle, check, next, back, show, submit, quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "set" => apply_field(&mut wizard, rest, |value| FieldValue::Text(value.into())),
            "toggle" => apply_field(&mut wizard, rest, |value| FieldValue::Toggle(value.into())),
            "check" => apply_field(&mut wizard, rest, |value| {
                FieldValue::Flag(value.eq_ignore_ascii_case("true") || value == "yes")
            }),
            "attach" => attach_field(&mut wizard, rest),
            "next" => {
                if wizard.advance() {
                    print_step(&wizard);
                } else {
                    print_errors(&wizard);
                }
            }
            "back" => {
                wizard.retreat();
                print_step(&wizard);
            }
            "show" => {
                print_step(&wizard);
                print_errors(&wizard);
            }
            "submit" => match wizard.submit() {
                Ok(record) => {
                    let mut sink = JsonFileSink::new(config.submissions_path());
                    sink.submit(record)
                        .context("Failed to store registration")?;
                    println!("Registration Successful!");
                    println!("Stored under {}", sink.dir().display());
                    return Ok(());
                }
                Err(_) => print_errors(&wizard),
            },
            "quit" => break,
            other => println!("Unknown command: {other}"),
        }
    }

    println!("Registration abandoned");
    Ok(())
}

fn apply_field<F: FlowForm>(
    wizard: &mut Wizard<F>,
    rest: &str,
    make_value: impl FnOnce(&str) -> FieldValue,
) {
    let (name, value) = match rest.split_once(' ') {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };

    match F::field_from_name(name) {
        Some(field) => wizard.set_field(field, make_value(value)),
        None => println!("Unknown field: {name}"),
    }
}

/// A bad path must not abort the session; everything already typed into the
/// wizard stays intact.
fn attach_field<F: FlowForm>(wizard: &mut Wizard<F>, rest: &str) {
    let Some((name, path)) = rest.split_once(' ') else {
        println!("Usage: attach <field> <path>");
        return;
    };
    let path = path.trim();

    let Some(field) = F::field_from_name(name) else {
        println!("Unknown field: {name}");
        return;
    };

    match Attachment::from_path(path) {
        Ok(attachment) => wizard.set_field(field, FieldValue::Attach(attachment)),
        Err(err) => println!("Could not read {path}: {err}"),
    }
}

fn print_step<F: FlowForm>(wizard: &Wizard<F>) {
    println!(
        "Step {}/{}: {}",
        wizard.step(),
        Wizard::<F>::step_count(),
        wizard.step_title()
    );
}

fn print_errors<F: FlowForm>(wizard: &Wizard<F>) {
    if wizard.errors().is_empty() {
        println!("No errors on this step");
        return;
    }
    for (field, message) in wizard.errors().iter() {
        println!("  {field}: {message}");
    }
}
