mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, render};
use netforms_core::{CidrAddressField, InetAddressField, MacAddressField};
use terminal::logging;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let accepted: bool = match commands.command {
        Commands::Inet(args) => {
            let field = InetAddressField::new(check::config(&args));
            check::check("inet", &field, args)
        }
        Commands::Cidr(args) => {
            let field = CidrAddressField::new(check::config(&args));
            check::check("cidr", &field, args)
        }
        Commands::Mac(args) => {
            let field = MacAddressField::new(check::config(&args));
            check::check("mac", &field, args)
        }
        Commands::Render(args) => {
            println!("{}", render::render(args));
            true
        }
    };

    Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
