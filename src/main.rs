use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chordsync::song::parse_clock_time;
use chordsync::{ChordEvent, Player, PlayerConfig, Song};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Inspect and simulate chord timelines")]
struct Cli {
    /// Player configuration (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Skip timeline ordering checks when loading the song.
    #[arg(long, global = true)]
    no_validate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the unique chords of a song with every place they occur.
    Chords(SongArgs),
    /// Show the active event at a point in the track.
    At {
        #[command(flatten)]
        song: SongArgs,
        /// Elapsed time, in seconds or m:ss.
        #[arg(long)]
        time: String,
    },
    /// Play the song through on a simulated frame clock, printing each chord change.
    Simulate {
        #[command(flatten)]
        song: SongArgs,
        /// Start position as a percentage of the track.
        #[arg(long, default_value_t = 0.0)]
        from: f64,
    },
}

#[derive(Args)]
struct SongArgs {
    /// Song document (YAML or JSON).
    song: PathBuf,
    /// Semitones to transpose by (overrides the config file).
    #[arg(long, allow_hyphen_values = true)]
    transpose: Option<i32>,
    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => PlayerConfig::default(),
    };

    match cli.command {
        Commands::Chords(args) => {
            let player = open_player(&args, &mut config, cli.no_validate)?;
            print_chords(&player, args.json)
        }
        Commands::At { song, time } => {
            let player = open_player(&song, &mut config, cli.no_validate)?;
            // By seconds, not percent: the percent round trip can land just
            // before an event boundary
            let seconds = parse_clock_time(&time)?;
            print_event(&time, &player.event_at(seconds), song.json)
        }
        Commands::Simulate { song, from } => {
            let mut player = open_player(&song, &mut config, cli.no_validate)?;
            simulate(&mut player, &config, from, song.json)
        }
    }
}

fn read_config(path: &Path) -> Result<PlayerConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    PlayerConfig::from_yaml(&source)
        .with_context(|| format!("{} is not a valid config file", path.display()))
}

fn read_song(path: &Path, no_validate: bool) -> Result<Song> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read song file {}", path.display()))?;
    let song = if no_validate {
        chordsync::load_song_unchecked(&source)
    } else {
        chordsync::load_song(&source)
    };
    song.with_context(|| format!("{} is not a valid song", path.display()))
}

fn open_player(args: &SongArgs, config: &mut PlayerConfig, no_validate: bool) -> Result<Player> {
    if let Some(semitones) = args.transpose {
        config.transpose = semitones;
    }
    let song = read_song(&args.song, no_validate)?;
    Ok(Player::with_config(song, config))
}

fn print_chords(player: &Player, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(player.chord_groups())?);
        return Ok(());
    }

    let song = player.song();
    println!(
        "{} - {} (transpose {})",
        song.title,
        song.artist,
        player.transposition()
    );
    for group in player.chord_groups() {
        println!("{:<8} x{}", group.chord, group.occurrences.len());
        for occurrence in &group.occurrences {
            let percent = occurrence.time / song.duration * 100.0;
            println!(
                "    {:>5}  [{}] {}",
                chordsync::format_time(percent, song.duration),
                occurrence.section,
                occurrence.lyric
            );
        }
    }
    Ok(())
}

fn print_event(label: &str, event: &ChordEvent, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!(
            "{:>5}  {:<8} [{}] {}",
            label,
            event.chord,
            event.section,
            event.lyric
        );
    }
    Ok(())
}

/// Feed the player one tick per frame until the track completes
fn simulate(player: &mut Player, config: &PlayerConfig, from: f64, json: bool) -> Result<()> {
    let interval = config.frame_interval();
    player.seek(from);
    print_event(&player.formatted_time(), &player.active_event(), json)?;

    player.play();
    if !player.is_playing() {
        eprintln!("Nothing to play: the timeline is empty");
        return Ok(());
    }

    let mut now = 0.0;
    let mut frames: u64 = 0;
    player.tick(now);
    while player.is_playing() {
        now += interval;
        frames += 1;
        let changed = player.tick(now);
        // The completing tick rewinds to 0:00; don't report that as a change
        if !player.is_playing() {
            break;
        }
        if let Some(event) = changed {
            print_event(&player.formatted_time(), &event, json)?;
        }
    }

    tracing::info!(frames, seconds = now, "simulation finished");
    Ok(())
}
