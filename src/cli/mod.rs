pub mod completions;
pub mod reveal;
pub mod simulate;

use clap::{Parser, Subcommand};

/// veil - colour-vision simulation and hidden-image extraction
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate colour-vision deficiency on RGB images
    Simulate(simulate::SimulateArgs),

    /// Extract images hidden in low-order pixel bits
    Reveal(reveal::RevealArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
