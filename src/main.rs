//! Carelink CLI - healthcare facility directory and AI provider summaries
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use std::io::Read;

use anyhow::{bail, Context};
use carelink::{Config, Directory, Facility, FacilityKind, ProviderSummarizer, SummarizeRequest};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "carelink")]
#[command(author, version, about = "Healthcare facility directory with AI provider summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a healthcare provider's details
    Summarise {
        /// Provider details; read from stdin or an editor when omitted
        details: Option<String>,
        /// Summarise the bio of a listed doctor instead
        #[arg(long, conflicts_with = "details")]
        doctor: Option<String>,
    },
    /// List facilities
    Facilities {
        /// Only show hospitals or stores
        #[arg(long)]
        kind: Option<FacilityKind>,
    },
    /// Show one facility in detail
    Facility {
        /// Facility id
        id: String,
    },
    /// List doctors across all facilities
    Doctors,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let directory = Directory::builtin();

    match cli.command {
        Commands::Summarise { details, doctor } => {
            let details = match doctor {
                Some(id) => directory
                    .doctor_bio(&id)
                    .with_context(|| format!("no doctor with id {}", id))?,
                None => read_details(details)?,
            };

            let request = SummarizeRequest::new(details);
            if request.is_blank() {
                bail!("Provider details cannot be empty.");
            }

            let config = Config::load()?;
            let summarizer = ProviderSummarizer::from_config(&config)?;

            println!(
                "Summarising {} characters...\n",
                request.provider_details.len()
            );
            match summarizer.summarize(&request).await {
                Ok(result) => {
                    println!("{}", "✨ Generated Summary".bold());
                    println!("{}", result.summary);
                }
                Err(e) => bail!("Failed to generate summary: {}", e),
            }
        }
        Commands::Facilities { kind } => {
            let facilities: Vec<&Facility> = match kind {
                Some(kind) => directory.by_kind(kind).collect(),
                None => directory.all().iter().collect(),
            };

            if facilities.is_empty() {
                println!("No facilities found.");
            }
            for facility in facilities {
                print_facility_line(facility);
            }
        }
        Commands::Facility { id } => match directory.by_id(&id) {
            Some(facility) => print_facility(facility),
            None => bail!("Facility Not Found: no facility with id {}", id),
        },
        Commands::Doctors => {
            for doctor in directory.doctors() {
                println!(
                    "{} {} ({})",
                    format!("[{}]", doctor.id).dimmed(),
                    doctor.name.bold(),
                    doctor.specialty
                );
                println!("   {}", doctor.timings);
            }
        }
    }

    Ok(())
}

/// Take details from the argument, piped stdin, or an editor session
fn read_details(details: Option<String>) -> anyhow::Result<String> {
    if let Some(details) = details {
        return Ok(details);
    }

    if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read provider details from stdin")?;
        return Ok(buffer);
    }

    edit::edit("").context("failed to open editor for provider details")
}

fn print_facility_line(facility: &Facility) {
    let icon = match facility.kind {
        FacilityKind::Hospital => "🏥",
        FacilityKind::Store => "💊",
    };
    println!(
        "{} {} {}",
        icon,
        facility.name.bold(),
        format!("[{}]", facility.id).dimmed()
    );
    if let Some(distance) = &facility.distance {
        println!("   {}", distance);
    }
    println!("   {}\n", facility.address);
}

fn print_facility(facility: &Facility) {
    println!("=== {} ===", facility.name.bold());
    println!("{}\n", facility.kind.label());
    println!("📍 {}", facility.address);
    println!("📞 {}", facility.phone);

    if let Some(hours) = &facility.operating_hours {
        println!("🕒 {}", hours);
    }

    if !facility.services.is_empty() {
        println!("\n{}", "Services Offered:".bold());
        for service in &facility.services {
            println!("  • {}", service);
        }
    }

    if !facility.doctors.is_empty() {
        println!("\n{}", "Available Doctors:".bold());
        for doctor in &facility.doctors {
            println!("  • {} - {}", doctor.name, doctor.specialty);
            println!("    {}", doctor.timings.dimmed());
        }
    }

    if let Some(info) = &facility.appointment_booking_info {
        println!("\n{}", "Appointment Booking:".bold());
        println!("  {}", info);
    }
}
