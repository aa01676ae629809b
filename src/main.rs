use clap::CommandFactory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use jemalloc on musl x86_64 for better performance
#[cfg(all(target_env = "musl", target_arch = "x86_64"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser)]
#[command(
    name = "rollbook",
    about = "Keep student records in a plain-text file from the terminal",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\n",
        "Build Information:\n",
        "  Timestamp:         ", env!("VERGEN_BUILD_TIMESTAMP"), "\n",
        "  Target Triple:     ", env!("VERGEN_CARGO_TARGET_TRIPLE"), "\n",
        "\n",
        "Source Control:\n",
        "  Commit SHA:        ", env!("VERGEN_GIT_SHA"), "\n",
        "  Commit Timestamp:  ", env!("VERGEN_GIT_COMMIT_TIMESTAMP"), "\n",
        "  Branch:            ", env!("VERGEN_GIT_BRANCH"), "\n",
        "\n",
        "Compiler:\n",
        "  Rustc Version:     ", env!("VERGEN_RUSTC_SEMVER"), "\n",
        "  Rustc Channel:     ", env!("VERGEN_RUSTC_CHANNEL"), "\n",
        "  Host Triple:       ", env!("VERGEN_RUSTC_HOST_TRIPLE"), "\n"
    ),
    disable_help_subcommand = true
)]
struct Cli {
    /// Record file the commands operate on
    #[arg(
        short,
        long,
        global = true,
        default_value = rollbook::consts::DEFAULT_RECORD_FILE,
        value_hint = clap::ValueHint::FilePath
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a single record to the record file.
    Add {
        roll_number: String,
        name: String,
        department: String,
    },

    /// Display every record in the record file.
    List {
        /// Output the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the first record with the given roll number.
    Find {
        roll_number: String,
        /// Output the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the first record with the given roll number and rewrite the file.
    Delete { roll_number: String },

    /// Run the interactive numbered menu against the record file.
    Shell,

    /// Show instructions for enabling shell completions.
    Completions,
}

fn main() {
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            roll_number,
            name,
            department,
        } => rollbook::commands::add::run(&cli.file, roll_number, name, department),
        Commands::List { json } => rollbook::commands::list::run(&cli.file, json),
        Commands::Find { roll_number, json } => {
            rollbook::commands::find::run(&cli.file, roll_number, json)
        }
        Commands::Delete { roll_number } => {
            rollbook::commands::delete::run(&cli.file, roll_number)
        }
        Commands::Shell => rollbook::commands::shell::run(cli.file),
        Commands::Completions => {
            println!(
                "Bash:\n\
                echo \"source <(COMPLETE=bash rollbook)\" >> ~/.bashrc\n\
                \n\
                Elvish:\n\
                echo \"eval (E:COMPLETE=elvish rollbook | slurp)\" >> ~/.elvish/rc.elv\n\
                \n\
                Fish:\n\
                echo \"COMPLETE=fish rollbook | source\" >> ~/.config/fish/config.fish\n\
                \n\
                Zsh:\n\
                echo \"source <(COMPLETE=zsh rollbook)\" >> ~/.zshrc\n"
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
