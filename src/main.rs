use clap::Parser;
use slugward::cli::{Cli, Commands, ConfigAction, TokenAction};

fn main() {
    let cli = Cli::parse();
    slugward::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Slug { ref id } => slugward::cli::commands::slug::execute(&cli, id),
        Commands::Verify { ref slug, ref id } => {
            slugward::cli::commands::verify::execute(&cli, slug, id)
        }
        Commands::Find {
            ref slug,
            ref candidates,
        } => slugward::cli::commands::find::execute(&cli, slug, candidates.as_deref()),
        Commands::Check { ref slug } => slugward::cli::commands::check::execute(slug),
        Commands::Attach {
            ref file,
            ref id_field,
            ref output,
        } => slugward::cli::commands::attach::execute(
            &cli,
            file,
            id_field.as_deref(),
            output.as_deref(),
        ),
        Commands::Token { ref action } => match action {
            TokenAction::Issue => slugward::cli::commands::token::execute_issue(&cli),
            TokenAction::Verify { ref token } => {
                slugward::cli::commands::token::execute_verify(&cli, token)
            }
        },
        Commands::Config { ref action } => match action {
            ConfigAction::Check => slugward::cli::commands::config_check::execute(&cli),
        },
        Commands::GenSecret { bytes } => slugward::cli::commands::gen_secret::execute(bytes),
        Commands::Completions { shell } => slugward::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        slugward::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
