//! ABC notation tokenizer CLI.

use std::process::ExitCode;

use abcc::commands::{check_file, clean_file, explain_error, lex_file, parse_options};
use abcc::CliError;

fn main() -> ExitCode {
    abcc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    let rest = args.get(2..).unwrap_or_default();

    let result = match command.as_str() {
        "lex" => parse_options(rest).and_then(|options| lex_file(&options)),
        "check" => parse_options(rest).and_then(|options| check_file(&options)),
        "clean" => parse_options(rest).and_then(|options| clean_file(&options)),
        "--explain" | "explain" => {
            let Some(code) = rest.first() else {
                eprintln!("Usage: abc explain <CODE>");
                eprintln!("Example: abc explain E1018");
                return ExitCode::from(2);
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(0)
        }
        "version" | "--version" | "-V" => {
            println!("abc {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(status) => ExitCode::from(status),
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(
                error,
                CliError::MissingPath | CliError::UnknownOption(_) | CliError::UnexpectedArgument(_)
            ) {
                eprintln!("Run `abc help` for usage.");
            }
            ExitCode::from(error.exit_code())
        }
    }
}

fn print_usage() {
    println!("ABC notation tokenizer");
    println!();
    println!("Usage: abc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.abc>       Print the token stream");
    println!("  check <file.abc>     Report diagnostics only");
    println!("  clean <file.abc>     Print every line after escape decoding");
    println!("  explain <code>       Describe a diagnostic code (e.g., E1018)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --line-ending=<lf|crlf|cr|auto>  Line terminator (default: auto)");
    println!("  --no-decode                      Keep escapes and entities in text values");
    println!("  --prefix=<char>                  Pseudo-comment prefix (default: %)");
    println!("  --color=<auto|always|never>      Diagnostic colors (default: auto)");
    println!();
    println!("Exit status: 0 clean, 1 error diagnostics, 2 usage, I/O or internal failure.");
    println!();
    println!("Examples:");
    println!("  abc lex tunes.abc");
    println!("  abc check tunes.abc --color=never");
    println!("  abc clean tunes.abc --prefix=!");
    println!("  abc explain W0003");
}
