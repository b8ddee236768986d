use std::path::PathBuf;

/// County housing price dashboard
#[derive(clap::Parser, Debug)]
#[command(name = "countyprice", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file, otherwise $COUNTYPRICE_CONFIG or ./countyprice.toml
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the counties available for selection
    Counties,

    /// Predict the price for one county, or for manually entered values
    Predict(PredictArgs),

    /// Interactive session reading commands from stdin
    Dashboard(DashboardArgs),

    /// Write the normalized county outlines as JSON
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct PredictArgs {
    /// County name, e.g. "Los Angeles"
    #[arg(required_unless_present = "manual", conflicts_with = "manual")]
    pub county: Option<String>,

    /// Housing median age in years
    #[arg(long)]
    pub age: Option<f64>,

    /// Median income slider value, thousands of US$
    #[arg(long)]
    pub income: Option<f64>,

    /// Override the county's ocean proximity, e.g. "NEAR BAY"
    #[arg(long)]
    pub ocean_proximity: Option<String>,

    /// Also write the highlighted map to this SVG file
    #[arg(long, value_hint = clap::ValueHint::FilePath, conflicts_with = "manual")]
    pub map: Option<PathBuf>,

    /// Print the model input record as JSON
    #[arg(long)]
    pub json: bool,

    /// Enter location and totals by hand instead of picking a county
    #[arg(long)]
    pub manual: bool,

    #[command(flatten)]
    pub values: ManualValues,
}

#[derive(clap::Args, Debug)]
pub struct ManualValues {
    #[arg(long, requires = "manual", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    #[arg(long, requires = "manual", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long, requires = "manual")]
    pub total_rooms: Option<f64>,

    #[arg(long, requires = "manual")]
    pub total_bedrooms: Option<f64>,

    #[arg(long, requires = "manual")]
    pub population: Option<f64>,

    #[arg(long, requires = "manual")]
    pub households: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// Rewrite this SVG file whenever the selection changes
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub map: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output JSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}
