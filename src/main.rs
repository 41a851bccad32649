//! PICOL administrative command line interface.

use picol_admin::config::{self, DEFAULT_PROJECT, RunConfig};
use picol_admin::error::Error;
use picol_admin::import::{Entity, ImportOptions, Importer};
use picol_admin::model::Response;
use picol_admin::model::record::{Crop, Ingredient, Pest, Registrant, Resistance};

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use clap::{Args, Parser, Subcommand};
use std::{fs, io, process::ExitCode};

/// PICOL administrative command line interface.
#[derive(Debug, Parser)]
#[command(name = "picol", version)]
struct Cli {
    /// DynamoDB table prefix to use in addition to the project and
    /// environment names.
    #[arg(long, global = true, default_value = "")]
    table_prefix: String,

    /// Project name to prefix to DynamoDB table names.
    #[arg(long, global = true, default_value = DEFAULT_PROJECT)]
    project: String,

    /// Environment name to prefix to DynamoDB table names. Will be obtained
    /// from the PICOL_ENV environment variable if not specified.
    #[arg(long, global = true)]
    environment: Option<String>,

    /// The AWS profile to use. Defaults to the AWS_PROFILE environment
    /// variable if not specified.
    #[arg(long, global = true)]
    profile: Option<String>,

    /// The AWS region to use. Defaults to the AWS_REGION/AWS_DEFAULT_REGION
    /// environment variable if not specified.
    #[arg(long, global = true)]
    region: Option<String>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every import subcommand.
#[derive(Args, Debug)]
struct ImportArgs {
    /// Allow updating existing records.
    #[arg(long)]
    allow_update: bool,

    /// Only update the id sequence, do not import records.
    #[arg(long)]
    id_sequence_only: bool,

    /// JSON file to import, or - for standard input.
    filename: String,
}

impl ImportArgs {
    fn options(&self, clear_ingredients: bool) -> ImportOptions {
        ImportOptions {
            allow_update: self.allow_update,
            id_sequence_only: self.id_sequence_only,
            clear_ingredients,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import crop data from a JSON file.
    ImportCrops(ImportArgs),

    /// Import ingredient data from a JSON file. Resistances must be
    /// imported first.
    ImportIngredients(ImportArgs),

    /// Import pest data from a JSON file.
    ImportPests(ImportArgs),

    /// Import registrant data from a JSON file.
    ImportRegistrants(ImportArgs),

    /// Import resistance data from a JSON file.
    ImportResistances {
        #[command(flatten)]
        args: ImportArgs,

        /// Clear the ingredients list for each imported resistance.
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        clear_ingredients: bool,
    },
}

fn read_batch<E: Entity>(filename: &str) -> Result<Response<E>, Error> {
    if filename == "-" {
        Ok(serde_json::from_reader(io::stdin().lock())?)
    } else {
        let file = fs::File::open(filename)?;
        Ok(serde_json::from_reader(io::BufReader::new(file))?)
    }
}

async fn run_import<E: Entity>(
    importer: &Importer<'_>,
    filename: &str,
    options: ImportOptions,
) -> ExitCode {
    let batch: Response<E> = match read_batch(filename) {
        Ok(batch) => batch,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    match importer.run(batch, &options).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // clap routes help to stdout and usage errors to stderr.
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let environment = config::resolve_environment(cli.environment.as_deref());
    let run_config = RunConfig::new(&cli.table_prefix, &cli.project, &environment);

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = cli.region {
        loader = loader.region(Region::new(region));
    }
    if let Some(profile) = cli.profile.as_deref() {
        loader = loader.profile_name(profile);
    }
    let sdk_config = loader.load().await;
    let client = Client::new(&sdk_config);
    let importer = Importer::new(&client, &run_config);

    match cli.command {
        Command::ImportCrops(args) => {
            run_import::<Crop>(&importer, &args.filename, args.options(false)).await
        }
        Command::ImportIngredients(args) => {
            run_import::<Ingredient>(&importer, &args.filename, args.options(false)).await
        }
        Command::ImportPests(args) => {
            run_import::<Pest>(&importer, &args.filename, args.options(false)).await
        }
        Command::ImportRegistrants(args) => {
            run_import::<Registrant>(&importer, &args.filename, args.options(false)).await
        }
        Command::ImportResistances {
            args,
            clear_ingredients,
        } => {
            run_import::<Resistance>(&importer, &args.filename, args.options(clear_ingredients))
                .await
        }
    }
}
