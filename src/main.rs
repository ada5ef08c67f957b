mod config;
mod error;
mod html_renderer;
mod lister;
mod naming;
mod output;
mod summary;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use config::SiteConfig;
use error::CatalogError;
use lister::{AwsCli, ObjectLister};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate the APK download catalog from an S3 bucket", long_about = None)]
struct Args {
    /// Bucket holding the APK objects
    #[arg(long, env = "S3_BUCKET", default_value = config::DEFAULT_BUCKET)]
    bucket: String,

    /// AWS region of the bucket
    #[arg(long, env = "AWS_REGION", default_value = config::DEFAULT_REGION)]
    region: String,

    /// Directory that receives index.html
    #[arg(long, short = 'o', env = "OUTPUT_DIR", default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// AWS CLI executable used for the object listing
    #[arg(long, env = "AWS_CLI", default_value = "aws")]
    aws_cli: String,

    /// Print the accepted catalog as a table
    #[arg(long, short = 'l')]
    list: bool,

    /// Print the HTML to stdout instead of writing index.html
    #[arg(long = "stdout", short = 'H')]
    to_stdout: bool,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        SiteConfig::new(&self.bucket, &self.region, &self.output_dir)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.site_config();
    let lister = AwsCli::new(&args.aws_cli);

    if let Err(e) = run(&config, &lister, args.list, args.to_stdout) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(e.exit_code());
    }
}

/// Fetch, render, then write or print. Returns the written path, if any.
fn run<L: ObjectLister>(
    config: &SiteConfig,
    lister: &L,
    list: bool,
    to_stdout: bool,
) -> Result<Option<PathBuf>, CatalogError> {
    if !to_stdout {
        println!(
            "{}",
            format!(
                "=== APK Catalog: {} ===",
                Local::now().format("%Y-%m-%d %H:%M")
            )
            .cyan()
        );
        println!(
            "Listing APKs from s3://{} ({})...",
            config.bucket, config.region
        );
    }

    let entries = lister::fetch_catalog(lister, config)?;

    if !to_stdout {
        println!("Found {} APKs.", entries.len().to_string().green());
        if list {
            summary::print_catalog(&entries);
        }
    }

    let html = html_renderer::render_catalog(&entries, config);

    if to_stdout {
        println!("{html}");
        return Ok(None);
    }

    let path = output::write_site(&config.output_dir, &html)?;
    println!("Written: {}", path.display());
    Ok(Some(path))
}
