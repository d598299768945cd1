pub mod dispatch;
pub mod invoice;
pub mod message;
pub mod stats;
pub mod status;
pub mod sync;
pub mod view;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "request-desk",
    version,
    about = "View, search, and dispatch customer request records from the admin side"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pull the request collection from the record source into the local cache
    Sync,
    /// Render the request table
    View {
        /// Free-text search across name, email, address, phone, courier, and product links
        #[arg(long, default_value = "")]
        query: String,
        /// Sort key (name, email, phone, address, description, courier, quantity, time)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Show every column instead of the minimal set
        #[arg(long)]
        full: bool,
        /// Output format
        #[arg(long, default_value = "terminal", value_parser = ["terminal", "json", "html"])]
        format: String,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show summary statistics over the whole batch
    Stats,
    /// Generate a printable invoice for a record
    Invoice {
        /// Record id
        id: String,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the outbound messaging link for a record
    Message {
        /// Record id
        id: String,
    },
    /// Submit a courier order for a record
    Dispatch {
        /// Record id
        id: String,
        /// Courier service (steadfast, pathao); defaults to the record's courier field
        #[arg(long)]
        courier: Option<String>,
        /// Cash-on-delivery amount
        #[arg(long, default_value_t = 0.0)]
        cod_amount: f64,
        /// Note passed along to the courier
        #[arg(long)]
        note: Option<String>,
    },
    /// Show recorded action statuses
    Status,
    /// Run the courier submission proxy
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:8787")]
        addr: String,
    },
}
