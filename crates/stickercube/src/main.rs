//! Command-line tool that scrambles an N×N×N cube and prints its net.

mod cli;
mod render;


fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        // `--help` and `--version`
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            e.print()?;
            std::process::exit(1);
        }
    };

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    cli::exec(args, &mut std::io::stdout().lock())
}
