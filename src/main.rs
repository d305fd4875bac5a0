//! Mongo realm - operator tool
//!
//! Checks credentials and looks up principals against the configured store,
//! and produces digests for stored credentials.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use mongo_realm::digest::{DigestAlgorithm, DigestPolicy};
use mongo_realm::error::RealmError;
use mongo_realm::store::FileConnector;
use mongo_realm::utils::logging::setup_logging;
use mongo_realm::{MongoRealm, Principal, RealmConfig};

#[derive(Parser, Debug)]
#[command(name = "mongo-realm")]
#[command(version)]
#[command(about = "Authenticate users against a document store", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./mongo-realm.toml when present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate a user; the credential is read from the first line of stdin
    Check { username: String },

    /// Show the principal stored for a user, without checking a credential
    Lookup { username: String },

    /// Print `credential:digest` for each credential
    Digest {
        #[arg(short = 'a', long = "algorithm", default_value = "SHA-256")]
        algorithm: DigestAlgorithm,

        #[arg(required = true)]
        credentials: Vec<String>,
    },
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool, RealmError> {
    match cli.command {
        Command::Digest {
            algorithm,
            credentials,
        } => {
            let policy = DigestPolicy::new(Some(algorithm));
            for credential in credentials {
                println!("{}:{}", credential, policy.transform(&credential));
            }
            Ok(true)
        }
        Command::Check { username } => {
            let realm = open_realm(cli.config)?;
            let credential = read_credential()?;

            let principal = realm.authenticate(Some(username.as_str()), credential.as_deref());
            Ok(report(principal))
        }
        Command::Lookup { username } => {
            let realm = open_realm(cli.config)?;
            Ok(report(realm.lookup_principal(&username)))
        }
    }
}

fn open_realm(path: Option<PathBuf>) -> Result<MongoRealm, RealmError> {
    let config = RealmConfig::load(path.as_deref())?;
    info!(
        "Using {} database {} collection {}",
        config.mongo_client_uri, config.database, config.user_collection
    );
    Ok(MongoRealm::with_connector(
        Arc::new(config),
        Arc::new(FileConnector),
    ))
}

fn read_credential() -> Result<Option<String>, RealmError> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn report(principal: Option<Principal>) -> bool {
    match principal {
        Some(principal) => {
            let roles = match &principal.roles {
                Some(roles) => roles.join(","),
                None => "-".to_string(),
            };
            println!("{} roles={}", principal.username, roles);
            true
        }
        None => {
            println!("denied");
            false
        }
    }
}
