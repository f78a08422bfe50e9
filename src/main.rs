use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = emoji_chime::cli::Cli::parse();
    emoji_chime::run(cli)
}
