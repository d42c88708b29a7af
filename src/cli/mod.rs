pub mod completions;
pub mod plan;
pub mod presets;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// ringside - pixel-art wrestler avatar compositor
#[derive(Parser, Debug)]
#[command(name = "ringside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render wrestler avatars to PNG
    Render(render::RenderArgs),

    /// Print the paint plan for one wrestler as JSON
    Plan(plan::PlanArgs),

    /// Validate wrestler files without rendering
    Validate(validate::ValidateArgs),

    /// List the game's skin, hair, and costume swatches
    Presets(presets::PresetsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
