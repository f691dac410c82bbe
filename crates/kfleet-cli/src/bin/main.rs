use clap::Parser;
use color_eyre::eyre::Result;
use fluvio_future::task::run_block_on;
use kfleet_cli::Root;

fn main() -> Result<()> {
    fluvio_future::subscriber::init_tracer(None);
    color_eyre::config::HookBuilder::blank()
        .display_env_section(false)
        .install()?;
    let root: Root = Root::parse();

    if let Err(e) = run_block_on(root.process()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
