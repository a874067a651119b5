// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common arguments: where the log line comes from
fn line_source_args() -> Vec<Arg> {
    vec![
        Arg::new("line")
            .short('l')
            .long("line")
            .value_name("TEXT")
            .help("The log line itself"),
        Arg::new("file")
            .short('f')
            .long("file")
            .value_name("PATH")
            .help("Log file to take the line from"),
        Arg::new("line_number")
            .short('n')
            .long("line-number")
            .value_name("N")
            .help("1-based line number within --file"),
        Arg::new("last")
            .long("last")
            .action(ArgAction::SetTrue)
            .help("Use the last non-empty line of --file"),
    ]
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

fn build_cli() -> Command {
    Command::new("rpmlog")
        .version(env!("CARGO_PKG_VERSION"))
        .author("rpmlog Contributors")
        .about("Review yum/dnf transaction log entries against the RPM database")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log parsed identities and rpm invocations to stderr"),
        )
        .subcommand(
            Command::new("query")
                .about("Run a query for the package named on a log line")
                .arg(
                    Arg::new("operation")
                        .required(true)
                        .value_parser([
                            "changelog",
                            "info",
                            "list",
                            "docfiles",
                            "configfiles",
                            "provides",
                            "requires",
                            "conflicts",
                            "news",
                        ])
                        .help("Operation name"),
                )
                .args(line_source_args())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Write the result to a file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Show the package identity parsed from a log line")
                .args(line_source_args())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("scan")
                .about("Parse every line of a transaction log")
                .arg(Arg::new("file").required(true).help("Log file"))
                .arg(json_arg()),
        )
        .subcommand(Command::new("operations").about("List the available query operations"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("rpmlog.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
