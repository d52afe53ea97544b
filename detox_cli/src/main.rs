use clap::{Parser, Subcommand};
use detox_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "detox")]
#[command(about = "Biosculpter detox cycle treatment harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify affliction ids against the catalog
    Classify {
        /// Affliction ids (case-sensitive)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show whether the cycle is offered and what it would treat
    Preview {
        /// Subject fixture (JSON)
        #[arg(long)]
        subject: PathBuf,
    },

    /// Complete a detox cycle on the subject
    Treat {
        /// Subject fixture (JSON)
        #[arg(long)]
        subject: PathBuf,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the catalog tables
    Catalog,
}

fn main() -> Result<()> {
    // Initialize logging
    detox_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Catalog is built once and never modified afterwards
    let catalog = Catalog::with_extensions(&config.catalog);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    tracing::debug!(
        "Catalog ready: {} addictions, {} withdrawals, {} exclusions",
        catalog.addictions().count(),
        catalog.withdrawals().count(),
        catalog.exclusions().count()
    );

    let notifier = TracingNotifier;
    let engine = DetoxEngine::new(&catalog, &notifier);
    let cycle = DetoxCycle::new(&config.cycle, engine);

    match cli.command {
        Commands::Classify { ids } => cmd_classify(&catalog, &ids),
        Commands::Preview { subject } => cmd_preview(&cycle, &subject),
        Commands::Treat { subject, json } => cmd_treat(&cycle, &subject, json),
        Commands::Catalog => cmd_catalog(&catalog),
    }
}

fn cmd_classify(catalog: &Catalog, ids: &[String]) -> Result<()> {
    for raw in ids {
        let id = AfflictionId::from(raw.as_str());
        let outcome = classify(catalog, &id);
        let tolerance = classify_tolerance(catalog, &id);
        println!("{:<32} {:<20} {:?}", raw, format!("{:?}", outcome), tolerance);
    }
    Ok(())
}

fn cmd_preview(cycle: &DetoxCycle<'_>, path: &Path) -> Result<()> {
    let patient = Patient::load(path)?;
    let offer = cycle.offer(&patient);

    println!("Subject: {}", patient.name());
    println!(
        "Cycle '{}' [{}] ({} days): {}",
        offer.label,
        offer.key,
        cycle.duration().num_days(),
        if offer.available { "available" } else { "not available" }
    );
    if !offer.required_research.is_empty() {
        println!("Requires research: {}", offer.required_research.join(", "));
    }
    let [r, g, b] = offer.operating_color;
    println!(
        "Icon: {}  Operating color: ({:.2}, {:.2}, {:.2})",
        offer.icon_path, r, g, b
    );
    println!();
    println!("{}", offer.description);
    Ok(())
}

fn cmd_treat(cycle: &DetoxCycle<'_>, path: &Path, json: bool) -> Result<()> {
    let mut patient = Patient::load(path)?;
    let completion = cycle.complete(&mut patient);

    if json {
        let report = serde_json::json!({
            "subject": patient.name(),
            "result": completion.result,
            "letter": completion.letter,
            "remaining": patient.affliction_ids(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let result = &completion.result;
    if result.any_removed {
        println!("✓ Detox complete: removed {} afflictions", result.removed_count);
        for label in &result.removed_labels {
            println!("  → {}", label);
        }
    } else if patient.has_health_record() {
        println!("No addictions found - nothing to treat.");
    } else {
        println!("Subject has no health record - nothing to treat.");
    }

    if let Some(ref letter) = completion.letter {
        println!();
        println!("[{}] {}", letter.title, letter.text);
    }

    let remaining = patient.affliction_ids();
    if !remaining.is_empty() {
        println!();
        println!("Remaining: {}", remaining.join(", "));
    }
    Ok(())
}

fn cmd_catalog(catalog: &Catalog) -> Result<()> {
    let sections: [(&str, Vec<&AfflictionId>); 3] = [
        ("Addictions", catalog.addictions().collect()),
        ("Withdrawals", catalog.withdrawals().collect()),
        ("Never removed", catalog.exclusions().collect()),
    ];

    for (title, ids) in sections {
        println!("{}:", title);
        for id in ids {
            println!("  {:<28} {}", id.as_str(), catalog.default_label(id));
        }
    }
    Ok(())
}
