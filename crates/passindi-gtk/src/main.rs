use clap::Parser;
use passindi_gtk::config;
use passindi_gtk::gui::app::AppModel;
use passindi_gtk::sys::runtime;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "passindi-gtk", version, about, long_about = None)]
struct Args {
    /// Write a default config file (if none exists) and print its path
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.marchosiax.passindi");

    app.run::<AppModel>((config, rx));
    Ok(())
}
