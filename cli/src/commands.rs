pub mod check;
pub mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "netforms")]
#[command(about = "Validate and render network address form input.")]
pub struct CommandLine {
    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean an IP address or network
    #[command(alias = "i")]
    Inet(CheckArgs),
    /// Clean a network base address (host bits must be zero)
    #[command(alias = "c")]
    Cidr(CheckArgs),
    /// Clean a MAC address
    #[command(alias = "m")]
    Mac(CheckArgs),
    /// Print the input markup for a field
    #[command(alias = "r")]
    Render(RenderArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Value as a user would type it; omit to test blank input
    pub value: Option<String>,
    /// Treat blank input as an error
    #[arg(long)]
    pub required: bool,
}

#[derive(Args)]
pub struct RenderArgs {
    pub field: FieldKind,
    /// Form field name
    pub name: String,
    pub value: Option<String>,
    /// Extra attribute as key=value, may be repeated
    #[arg(long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FieldKind {
    Inet,
    Cidr,
    Mac,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("expected key=value, got '{s}'"));
    };
    if key.is_empty() {
        return Err(format!("attribute name cannot be empty: '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
