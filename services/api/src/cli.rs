use crate::demo::{run_demo, DemoArgs};
use crate::infra::InMemoryBeneficiaryRepository;
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_portal::config::SimulationConfig;
use credit_portal::error::AppError;
use credit_portal::workflows::beneficiaries::{
    write_csv, BeneficiaryQuery, BeneficiaryService, QueryParams,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "credit-portal-api",
    about = "Run the CreditLend portal API or inspect its sample data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or export the beneficiary directory
    Beneficiaries {
        #[command(subcommand)]
        command: BeneficiaryCommand,
    },
    /// Walk a sample borrower through the wizard and print the dashboard summary
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BeneficiaryCommand {
    /// Print the filtered, sorted directory as a table
    List(FilterArgs),
    /// Write the filtered directory as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct FilterArgs {
    /// Case-insensitive match on name or email
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// approved, pending, rejected or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// low, medium, high or all
    #[arg(long)]
    pub(crate) risk: Option<String>,
    /// Column to sort by (name, email, incomeBand, creditScore, riskBand, applicationDate, status)
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub(crate) direction: Option<String>,
}

impl FilterArgs {
    fn query(self) -> Result<BeneficiaryQuery, AppError> {
        let params = QueryParams {
            search: self.search,
            status: self.status,
            risk: self.risk,
            sort: self.sort,
            direction: self.direction,
        };
        Ok(BeneficiaryQuery::try_from(params)?)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Destination file (stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Beneficiaries {
            command: BeneficiaryCommand::List(args),
        } => list_beneficiaries(args),
        Command::Beneficiaries {
            command: BeneficiaryCommand::Export(args),
        } => export_beneficiaries(args),
        Command::Demo(args) => run_demo(args).await,
    }
}

fn directory() -> BeneficiaryService<InMemoryBeneficiaryRepository> {
    BeneficiaryService::new(
        Arc::new(InMemoryBeneficiaryRepository::seeded()),
        SimulationConfig::instant(),
    )
}

fn list_beneficiaries(args: FilterArgs) -> Result<(), AppError> {
    let query = args.query()?;
    let rows = directory().list(&query)?;

    println!(
        "{:<4} {:<18} {:<28} {:<20} {:>5} {:<12} {:<10} {:<8}",
        "ID", "Name", "Email", "Income (₹)", "Score", "Risk", "Applied", "Status"
    );
    for row in &rows {
        println!(
            "{:<4} {:<18} {:<28} {:<20} {:>5} {:<12} {:<10} {:<8}",
            row.id,
            row.name,
            row.email,
            row.income_band.to_string(),
            row.credit_score,
            row.risk_band.label(),
            row.application_date.format("%Y-%m-%d").to_string(),
            row.status.label(),
        );
    }
    println!(
        "\n{} beneficiaries (sorted by {} {})",
        rows.len(),
        query.sort.key.key(),
        query.sort.direction.as_str()
    );
    Ok(())
}

fn export_beneficiaries(args: ExportArgs) -> Result<(), AppError> {
    let query = args.filter.query()?;
    let rows = directory().list(&query)?;

    match args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(&path)?);
            write_csv(&rows, file)?;
            eprintln!("wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_csv(&rows, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from([
            "credit-portal-api",
            "beneficiaries",
            "list",
            "--status",
            "approved",
            "--sort",
            "creditScore",
            "--direction",
            "desc",
        ]);
        let Some(Command::Beneficiaries {
            command: BeneficiaryCommand::List(args),
        }) = cli.command
        else {
            panic!("expected beneficiaries list");
        };
        let query = args.query().expect("valid query");
        assert_eq!(query.apply(&directory().rows().unwrap()).len(), 4);
    }

    #[test]
    fn bad_filter_is_a_query_error() {
        let args = FilterArgs {
            risk: Some("extreme".to_string()),
            ..FilterArgs::default()
        };
        assert!(matches!(args.query(), Err(AppError::Query(_))));
    }

    #[test]
    fn export_writes_csv_file() {
        let path = std::env::temp_dir().join(format!("beneficiaries-{}.csv", std::process::id()));
        export_beneficiaries(ExportArgs {
            filter: FilterArgs {
                status: Some("pending".to_string()),
                ..FilterArgs::default()
            },
            output: Some(path.clone()),
        })
        .expect("export succeeds");

        let written = std::fs::read_to_string(&path).expect("file written");
        std::fs::remove_file(&path).ok();
        assert_eq!(written.lines().count(), 4);
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::parse_from(["credit-portal-api"]);
        assert!(cli.command.is_none());
    }
}
