use clap::Parser;
use cranelog::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Inspect(args) => cranelog::cli::commands::inspect::run(args, &global),
        Commands::Import(args) => cranelog::cli::commands::import::run(args, &global),
        Commands::Parts(args) => cranelog::cli::commands::parts::run(args, &global),
    }
}
