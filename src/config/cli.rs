// Command-line arguments
// Flags take precedence over environment variables and built-in defaults

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "category-stub",
    version,
    about = "HTTP stub answering category lookups from a fixed table"
)]
pub struct Cli {
    /// Address to bind (IPv4, IPv6 or host name)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of runtime worker threads (defaults to CPU cores)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Emit an access log line for every request
    #[arg(long)]
    pub access_log: bool,
}
