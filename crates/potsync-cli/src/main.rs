use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use potsync_cli::commands::{
    PullArgs, PushArgs, ValidateArgs, run_pull, run_push, run_validate,
};

#[derive(Parser)]
#[command(name = "potsync")]
#[command(about = "Sync gettext templates and catalogs with a translation service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload the latest templates from the build host to the translation service
    Push(PushArgs),

    /// Pull completed translations and deploy compiled catalogs to the build host
    Pull(PullArgs),

    /// Validate (and auto-repair) a local directory of .pot templates
    Validate(ValidateArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .color(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Push(args) => run_push(args),
        Commands::Pull(args) => run_pull(args),
        Commands::Validate(args) => run_validate(args),
    };

    result.map_err(miette::Report::new)
}
