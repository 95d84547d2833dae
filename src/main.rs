use clap::Parser;
use miette::Result;
use naradai::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for readable diagnostics
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
        Commands::Login(args) => naradai::cli::commands::login::run(args, &global),
        Commands::Logout(args) => naradai::cli::commands::logout::run(args, &global),
        Commands::Whoami(args) => naradai::cli::commands::whoami::run(args, &global),
        Commands::Dashboard(args) => naradai::cli::commands::dashboard::run(args, &global),
        Commands::Action(cmd) => naradai::cli::commands::action::run(cmd, &global),
        Commands::Stat(cmd) => naradai::cli::commands::stat::run(cmd, &global),
        Commands::Risk(cmd) => naradai::cli::commands::risk::run(cmd, &global),
        Commands::Opp(cmd) => naradai::cli::commands::opp::run(cmd, &global),
        Commands::Trend(cmd) => naradai::cli::commands::trend::run(cmd, &global),
        Commands::Topic(cmd) => naradai::cli::commands::topic::run(cmd, &global),
        Commands::Comp(cmd) => naradai::cli::commands::comp::run(cmd, &global),
        Commands::Cluster(cmd) => naradai::cli::commands::cluster::run(cmd, &global),
        Commands::Completions(args) => naradai::cli::commands::completions::run(args),
    }
}
