//! # Tinta CLI
//!
//! Command-line interface for the thermal printer image gateway.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP gateway with defaults (0.0.0.0:8090, queue M200, lp)
//! tinta serve
//!
//! # Custom listen address and queue
//! tinta serve --listen 127.0.0.1:9000 --queue kitchen
//!
//! # Binarize photos with an explicit luminance cut
//! tinta serve --binarize threshold:96
//!
//! # Print a local file through the same pipeline, no HTTP involved
//! tinta print photo.jpg
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tinta::{
    PrinterConfig, Spooler, TintaError, protocol,
    raster::{self, Binarization},
    server::{self, ServerConfig},
    spool,
};

/// Tinta - thermal receipt printer image gateway
#[derive(Parser, Debug)]
#[command(name = "tinta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP print gateway
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8090")]
        listen: String,

        /// Spooler queue identifier
        #[arg(long, default_value = PrinterConfig::M200.queue)]
        queue: String,

        /// Spooler command
        #[arg(long, default_value = spool::DEFAULT_SPOOLER)]
        spooler: String,

        /// Binarization policy: passthrough, threshold, or threshold:N
        #[arg(long, default_value_t = Binarization::Passthrough)]
        binarize: Binarization,
    },

    /// Print an image file
    Print {
        /// Path to the encoded image (PNG/JPEG)
        image: PathBuf,

        /// Spooler queue identifier
        #[arg(long, default_value = PrinterConfig::M200.queue)]
        queue: String,

        /// Spooler command
        #[arg(long, default_value = spool::DEFAULT_SPOOLER)]
        spooler: String,

        /// Binarization policy: passthrough, threshold, or threshold:N
        #[arg(long, default_value_t = Binarization::Passthrough)]
        binarize: Binarization,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TintaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            queue,
            spooler,
            binarize,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                spooler,
                queue,
                binarization: binarize,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }

        Commands::Print {
            image,
            queue,
            spooler,
            binarize,
        } => {
            let raw = std::fs::read(&image)?;
            let printer = PrinterConfig::default();

            let img = raster::normalize(&raw, printer.width_dots as u32)?;
            let mono = raster::rasterize(&img, binarize);

            println!(
                "Printing {} ({}x{} dots, {})...",
                image.display(),
                mono.width_dots(),
                mono.height(),
                binarize
            );

            let job = protocol::encode_job(&mono)?;
            Spooler::new(spooler, queue).dispatch(&job)?;

            println!("Printed successfully!");
            Ok(())
        }
    }
}
