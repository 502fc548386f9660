use clap::Parser;
use metar_decoder::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_count) => process::exit(0),
        Err(error) => {
            // Error occurred - print the error chain to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Decoder - Aviation Weather Report Decoder");
    println!("===============================================");
    println!();
    println!("Decode METAR reports from the aviation weather JSON API into readable");
    println!("fields, derived metrics and a flight category.");
    println!();
    println!("USAGE:");
    println!("    metar-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode        Decode METAR JSON from a file or stdin");
    println!("    categories    Print the flight category criteria");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a saved API response:");
    println!("    metar-decoder decode kjfk.json");
    println!();
    println!("    # Pipe a live response, temperatures in Fahrenheit:");
    println!(
        "    curl -s 'https://aviationweather.gov/api/data/metar?ids=KJFK&format=json' \\"
    );
    println!("        | metar-decoder decode --temp-unit f");
    println!();
    println!("    # Emit rendered fields as JSON:");
    println!("    metar-decoder decode kjfk.json --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-decoder <COMMAND> --help");
}
