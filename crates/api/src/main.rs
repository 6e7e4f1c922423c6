//! Tokentray - OAuth2 client-credentials token fetcher
//!
//! Run with: `tokentray <command>`
//!
//! Every tray menu action is a command. Command output (a token, an
//! identifier, a path) is the only thing written to stdout so it can be piped
//! into a clipboard tool; failures print their message to stderr and exit 1.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::ExitCode;

use anyhow::anyhow;
use tokentray_infra::observability::init_tracing;
use tokentray_lib::{
    environment_status, format_status, get_token, log_file_path, new_identifier, set_cert_path,
    set_environment_field, show_config, AppContext,
};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        ["token", environment] => run_token(environment),
        ["token", ..] => Err(anyhow!("Usage: tokentray token <ENV>")),
        ["uuid"] => {
            println!("{}", new_identifier());
            Ok(())
        }
        ["status"] => {
            print!("{}", format_status(&environment_status(&AppContext::new())));
            Ok(())
        }
        ["config", rest @ ..] => run_config(rest),
        ["log"] => run_log(),
        ["help"] | [] => {
            print_help();
            Ok(())
        }
        [unknown, ..] => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown command"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Tokentray");
    println!();
    println!("USAGE:");
    println!("    tokentray <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    token <ENV>                    Print a fresh access token for ENV");
    println!("    uuid                           Print a random UUID");
    println!("    status                         Show which environments are configured");
    println!("    config show                    Print the settings (secrets masked)");
    println!("    config set <ENV> <FIELD> <V>   Set url, client_id or client_secret of ENV");
    println!("    config cert <PATH>             Use PATH as CA bundle (\"\" for system roots)");
    println!("    log                            Print the failure log path, creating it if needed");
    println!("    help                           Show this help message");
    println!();
    println!("The install root is $TOKENTRAY_HOME, or the directory of this executable.");
}

fn run_token(environment: &str) -> anyhow::Result<()> {
    let token = get_token(&AppContext::new(), environment)?;
    println!("{token}");
    Ok(())
}

fn run_config(args: &[&str]) -> anyhow::Result<()> {
    let ctx = AppContext::new();

    match args {
        ["show"] => {
            println!("{}", show_config(&ctx)?);
            Ok(())
        }
        ["set", environment, field, value] => set_environment_field(&ctx, environment, field, value),
        ["cert", path] => set_cert_path(&ctx, path),
        _ => Err(anyhow!("Usage: tokentray config show | set <ENV> <FIELD> <VALUE> | cert <PATH>")),
    }
}

fn run_log() -> anyhow::Result<()> {
    let path = log_file_path(&AppContext::new())?;
    println!("{}", path.display());
    Ok(())
}
