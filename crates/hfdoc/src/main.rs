#![allow(clippy::print_stderr, clippy::print_stdout)]

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand};

use hookform_content::{data, validate, ContentError};
use hookform_site::server::{serve, SiteServerConfig};
use hookform_site::static_site::{GenerateError, StaticSiteGenerator};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Documentation site generator for React Hook Form", long_about = None)]
pub struct Options {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate the static documentation site.
    Build {
        /// Output directory for the generated site.
        #[arg(long, default_value = "site")]
        out: Utf8PathBuf,
    },
    /// Validate the content registry without writing anything.
    Check,
    /// Serve the documentation site for local development.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Directory of extra static assets to serve under /assets.
        #[arg(long)]
        assets: Option<Utf8PathBuf>,
    },
    /// Dump the content registry as JSON.
    Json {
        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Generate shell completion scripts.
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "shell")]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let opts = Options::parse();
    run(&opts);
}

pub fn run(opts: &Options) {
    match &opts.command {
        Command::Build { out } => build_site(out),
        Command::Check => check_content(),
        Command::Serve { port, host, assets } => serve_site(*port, host, assets.as_deref()),
        Command::Json { output, pretty } => dump_json(output.as_deref(), *pretty),
        Command::Completion { shell } => {
            clap_complete::generate(
                *shell,
                &mut Options::command(),
                "hfdoc",
                &mut std::io::stdout(),
            );
        }
    }
}

fn build_site(out: &Utf8PathBuf) {
    let registry = data::registry();

    match StaticSiteGenerator::generate(&registry, out.as_std_path()) {
        Ok(()) => {
            let pages: usize = 1 + registry
                .collections()
                .iter()
                .map(|c| if c.key == data::API { c.entries.len() } else { 1 })
                .sum::<usize>();
            println!("Wrote {pages} pages to {out}");
        }
        Err(GenerateError::Invalid(defects)) => {
            report_defects(&defects);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn check_content() {
    let registry = data::registry();

    match validate(&registry) {
        Ok(()) => {
            println!(
                "{} entries, {} code samples, no defects",
                registry.entries().count(),
                registry.samples().len()
            );
        }
        Err(defects) => {
            report_defects(&defects);
            std::process::exit(1);
        }
    }
}

fn serve_site(port: u16, host: &str, assets: Option<&camino::Utf8Path>) {
    init_logging();

    let registry = data::registry();
    if let Err(defects) = validate(&registry) {
        report_defects(&defects);
        std::process::exit(1);
    }

    let config = SiteServerConfig {
        port,
        host: host.to_string(),
        assets_path: assets.map(|p| p.to_string()),
    };

    println!("Starting documentation server...");
    println!("Open http://{host}:{port} in your browser");
    println!("Press Ctrl+C to stop");

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Error creating async runtime: {e}");
        std::process::exit(1);
    });
    rt.block_on(async {
        if let Err(e) = serve(registry, config).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}

fn dump_json(output: Option<&camino::Utf8Path>, pretty: bool) {
    let registry = data::registry();

    let json = if pretty {
        serde_json::to_string_pretty(&registry)
    } else {
        serde_json::to_string(&registry)
    };
    let json = match json {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing registry: {e}");
            std::process::exit(1);
        }
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to {output_path}: {e}");
            std::process::exit(1);
        });
        println!("Wrote registry JSON to {output_path}");
    } else {
        println!("{json}");
    }
}

fn report_defects(defects: &[ContentError]) {
    eprintln!("Error: {} content defect(s):", defects.len());
    for defect in defects {
        eprintln!("  - {defect}");
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hfdoc=info,hookform_site=info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Options::command().debug_assert();
    }
}
