use apiref::catalog::Catalog;
use apiref::{config, generate, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "apiref")]
#[command(about = "Static HTML reference generator for REST API catalogs")]
#[command(long_about = "\
Static HTML reference generator for REST API catalogs

Renders a catalog of endpoint descriptions into one self-contained HTML page:
a summary table of every endpoint, then per-endpoint details with parameter
and header tables, request-body schema, and example responses by status code.

Without --catalog the built-in Wedding OS catalog is used. Catalog shape:

  {
    \"base_url\": \"http://localhost:8101/api\",
    \"sections\": [
      { \"id\": \"1\", \"name\": \"인증 (Auth)\", \"apis\": [
        { \"id\": \"1.1\", \"name\": \"로그인\", \"method\": \"POST\",
          \"path\": \"/api/auth/login\", \"auth\": false,
          \"request\": \"LoginRequest\", \"response\": \"LoginResponse\",
          \"description\": \"...\",
          \"body\": { \"email\": \"string\", \"password\": \"string\" },
          \"body_required\": [\"email\", \"password\"],
          \"status_codes\": [ { \"code\": 200, \"message\": \"login_success\",
                              \"body\": { ... }, \"msg\": \"로그인 성공\" } ] }
      ] }
    ]
  }

Run 'apiref dump-catalog' for the full built-in catalog and
'apiref gen-config' for a documented apiref.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (optional; stock defaults when absent)
    #[arg(long, default_value = "apiref.toml", global = true)]
    config: PathBuf,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, default_value = "api_reference.html", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the HTML reference page (default)
    Generate,
    /// Load config and catalog, list endpoints and untyped body fields
    Check,
    /// Print a stock apiref.toml with all options documented
    GenConfig,
    /// Print the effective catalog as JSON
    DumpCatalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let doc_config = config::load_config(&cli.config)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let catalog = generate::arrange(&catalog, &doc_config.layout);
            generate::generate(&catalog, &doc_config, &cli.output)?;
            output::print_generate_output(&catalog, &cli.output);
        }
        Command::Check => {
            let doc_config = config::load_config(&cli.config)?;
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let catalog = generate::arrange(&catalog, &doc_config.layout);
            output::print_check_output(&catalog);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::DumpCatalog => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}

/// The catalog from `path`, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, apiref::catalog::CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::embedded(),
    }
}
