use clap::{Args, Parser, Subcommand};

use crate::sounds::Sound;

#[derive(Parser, Debug)]
#[command(name = "emoji-chime", version, about = "Plays sounds when emoji show up in chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Listen(ListenArgs),
    Check(CheckArgs),
    Play(PlayArgs),
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    #[arg(long, help = "Currently selected channel id")]
    pub channel: String,

    #[arg(long, help = "Treat the client window as unfocused")]
    pub unfocused: bool,

    #[arg(long, help = "Print playback requests as JSON instead of playing them")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(value_name = "TEXT", help = "Message text or emoji name")]
    pub text: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[arg(value_enum, value_name = "SOUND", help = "Sound to play")]
    pub sound: Sound,

    #[arg(long, help = "Print the playback request as JSON instead of playing it")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "Show current config as JSON")]
    pub show: bool,

    #[arg(long, help = "Create default config file")]
    pub init: bool,

    #[arg(long, help = "Validate configuration")]
    pub validate: bool,
}
