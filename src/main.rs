use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodlist::{cli, config, error, workflow::Mood};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Serve the playlist form
    Serve,

    /// Create a recommendation playlist without the form
    Recommend(RecommendOptions),

    /// Show the top artists used as recommendation seeds
    Artists,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Number of recommended tracks (1-100)
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub count: u32,

    /// Playlist type: Acoustic, Danceable, Instrumental, Live, Speechy or Loud
    #[clap(long, value_parser = parse_mood)]
    pub mood: Mood,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn parse_mood(s: &str) -> Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Serve => cli::serve().await,
        Command::Recommend(opt) => cli::recommend(opt.count, opt.mood).await,
        Command::Artists => cli::artists().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
