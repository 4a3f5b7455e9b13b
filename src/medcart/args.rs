use clap::{Parser, Subcommand};
use medcart::model::UserType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medcart")]
#[command(about = "Wholesale medicine catalog search and quote-request cart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (cart and config storage)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog by name, active ingredient, manufacturer or country
    #[command(alias = "s")]
    Search {
        /// Free-text query (two characters minimum)
        term: String,
    },

    /// Show one medicine by id or active-ingredient/brand slug
    #[command(alias = "v")]
    View {
        /// Numeric id or slug (e.g. 5 or abemaciclib/verzenios)
        selector: String,
    },

    /// Add one unit of a medicine to the request list
    #[command(alias = "a")]
    Add {
        /// Catalog id of the medicine
        id: u32,
    },

    /// Show the request list
    #[command(alias = "ls")]
    Cart,

    /// Set the quantity for a request-list line (0 removes it)
    Qty {
        /// Catalog id of the medicine
        id: u32,

        /// New quantity (absolute, not a delta)
        quantity: u32,
    },

    /// Remove a medicine from the request list
    #[command(alias = "rm")]
    Remove {
        /// Catalog id of the medicine
        id: u32,
    },

    /// Empty the request list
    Clear,

    /// Submit the request list as a quote request
    Submit {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact e-mail address
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Free-text note to include
        #[arg(long, default_value = "")]
        message: String,

        /// Who the quote is requested as
        #[arg(long, value_enum)]
        user_type: Option<UserType>,
    },

    /// Get or set configuration (service-id, template-id, public-key, timeout-secs)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
