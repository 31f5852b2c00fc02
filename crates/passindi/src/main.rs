use clap::{Parser, Subcommand};
use passindi::ipc::{self, Command};
use passindi::units::{Density, Dp};
use passindi::{IndicatorConfig, Padding, PasswordIndicator};

#[derive(Parser, Debug)]
#[command(name = "passindi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Fill the next empty dot
    Advance,
    /// Empty the last filled dot
    Retreat,
    /// Empty every dot
    Reset,
    /// Print the size the indicator asks for, without a display
    Layout {
        /// Number of dots
        #[arg(short = 'n', long, default_value_t = passindi::config::DEFAULT_COUNT)]
        count: usize,

        /// Dot radius in dp
        #[arg(short, long, default_value_t = passindi::config::DEFAULT_RADIUS)]
        radius: f64,

        /// Spacing between dots in dp
        #[arg(short, long, default_value_t = passindi::config::DEFAULT_RING_MARGIN)]
        margin: f64,

        /// Padding on every side, in pixels
        #[arg(short, long, default_value_t = 0.0)]
        padding: f64,

        /// Pixels per dp
        #[arg(short, long, default_value_t = 1.0)]
        density: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Advance => ipc::send_command(Command::Advance)?,
        Commands::Retreat => ipc::send_command(Command::Retreat)?,
        Commands::Reset => ipc::send_command(Command::Reset)?,
        Commands::Layout {
            count,
            radius,
            margin,
            padding,
            density,
        } => {
            let config = IndicatorConfig {
                count,
                radius: Dp::new(radius),
                ring_margin: Dp::new(margin),
                ..Default::default()
            };
            let indicator = PasswordIndicator::new(config, Density::new(density))?;
            let size = indicator.desired_size(&Padding::uniform(padding));
            println!("{}x{}", size.width, size.height);
        }
    }

    Ok(())
}
