//! SafeParams CLI
//!
//! Coerce untrusted JSON into declared types from the command line.

use sp_cli::commands::{check_specs, coerce_command, EXIT_MALFORMED_SPEC, EXIT_OK, EXIT_USAGE};
use sp_cli::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "coerce" => {
            if args.len() != 4 {
                eprintln!("Usage: safeparams coerce <DATA> <SPECS>");
                eprintln!();
                eprintln!("DATA is JSON text, @path to read a file, or - for stdin.");
                eprintln!("SPECS is a spec string, or a JSON object of field specs.");
                std::process::exit(EXIT_USAGE);
            }
            match coerce_command(&args[2], &args[3], &mut std::io::stdin()) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(err.exit_code());
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: safeparams check <SPEC>...");
                std::process::exit(EXIT_USAGE);
            }
            let (lines, all_ok) = check_specs(&args[2..]);
            for line in lines {
                println!("{line}");
            }
            std::process::exit(if all_ok { EXIT_OK } else { EXIT_MALFORMED_SPEC });
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("safeparams {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn print_usage() {
    println!("SafeParams - coerce untrusted input into declared types");
    println!();
    println!("Usage: safeparams <command> [args]");
    println!();
    println!("Commands:");
    println!("  coerce <DATA> <SPECS>  Coerce JSON data and print the result as JSON");
    println!("  check <SPEC>...        Validate spec strings");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Specs:");
    println!("  int, float, bool, string, string.trim, uint64, array, array.<spec>");
    println!();
    println!("Exit codes:");
    println!("  0  success");
    println!("  1  malformed spec");
    println!("  2  usage or input error");
    println!();
    println!("Examples:");
    println!("  safeparams coerce '\"  42abc\"' int");
    println!("  safeparams coerce @request.json '{{\"id\":\"uint64\",\"tags\":\"array.string.trim\"}}'");
    println!("  echo '[1,\"x\",2.5]' | safeparams coerce - array.int");
    println!("  safeparams check string.trim array.array");
    println!();
    println!("Set RUST_LOG=trace to log each coercion to stderr.");
}
