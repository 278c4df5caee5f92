use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vtcreg_registry::{RegistryClient, SearchCriteria};

#[derive(Debug, Parser)]
#[command(name = "vtcreg-cli")]
#[command(about = "Look up licensed VTC operators in the public French registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up an operator by registry registration number (e.g. EVTC075180001)
    RegistrationNumber { number: String },
    /// Look up an operator by SIREN number
    CompanyNumber { number: String },
    /// Fetch a registry detail page by its internal record id
    Record { id: u64 },
    /// Run an advanced search with any combination of criteria
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    registration_number: Option<String>,
    #[arg(long)]
    person_name: Option<String>,
    #[arg(long)]
    company_name: Option<String>,
    #[arg(long)]
    company_number: Option<String>,
    #[arg(long)]
    acronym: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    department: Option<String>,
}

impl From<SearchArgs> for SearchCriteria {
    fn from(args: SearchArgs) -> Self {
        Self {
            registration_number: args.registration_number,
            person_name: args.person_name,
            company_name: args.company_name,
            company_number: args.company_number,
            acronym: args.acronym,
            brand: args.brand,
            city: args.city,
            postal_code: args.postal_code,
            department: args.department,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = vtcreg_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = RegistryClient::from_config(&config)?;

    let record = match cli.command {
        Commands::RegistrationNumber { number } => {
            registry.fetch_by_registration_number(&number).await?
        }
        Commands::CompanyNumber { number } => registry.fetch_by_company_number(&number).await?,
        Commands::Record { id } => registry.fetch_by_record_id(id).await?,
        Commands::Search(args) => {
            let criteria = SearchCriteria::from(args);
            registry.fetch_by_advanced_search(&criteria).await?
        }
    };

    tracing::debug!(company_number = %record.company_number, "lookup succeeded");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
