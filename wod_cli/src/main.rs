use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use wod_core::*;

#[derive(Parser)]
#[command(name = "wod")]
#[command(about = "Workout countdown timer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override workouts directory
    #[arg(long, global = true)]
    workouts_dir: Option<PathBuf>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

/// Which workout document to use
#[derive(Args, Clone)]
struct WorkoutSource {
    /// Load the workout from a specific file
    #[arg(long, conflicts_with = "date")]
    file: Option<PathBuf>,

    /// Date whose workout to load (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full timeline
    Show {
        #[command(flatten)]
        source: WorkoutSource,

        /// Print sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what is active at a given elapsed time
    At {
        /// Elapsed seconds since the workout started
        seconds: u64,

        #[command(flatten)]
        source: WorkoutSource,
    },

    /// Run the countdown
    Run {
        #[command(flatten)]
        source: WorkoutSource,

        /// Start at this many elapsed seconds
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Do not sleep between ticks (for testing)
        #[arg(long)]
        no_wait: bool,

        /// Do not pause on rep-based exercises
        #[arg(long)]
        auto_advance: bool,

        /// Dry run - do not log the completed workout
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that a workout builds
    Validate {
        #[command(flatten)]
        source: WorkoutSource,
    },

    /// List completed workouts, newest first
    History {
        /// Only workouts done for this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only workouts of this type (circuit, amrap, tabata, emom)
        #[arg(long = "type")]
        workout_type: Option<WorkoutType>,
    },
}

/// A built workout together with where it came from
struct LoadedWorkout {
    workout_type: WorkoutType,
    date: NaiveDate,
    timeline: Timeline,
}

fn main() -> ExitCode {
    // Initialize logging
    wod_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }
    if let Some(dir) = cli.workouts_dir {
        config.workouts.dir = Some(dir);
    }

    let workouts_dir = config.workouts_dir();

    match cli.command {
        Commands::Show { source, json } => {
            let workout = load_workout(&source, &workouts_dir)?;
            cmd_show(&workout, json, &config)
        }
        Commands::At { seconds, source } => {
            let workout = load_workout(&source, &workouts_dir)?;
            cmd_at(&workout, seconds)
        }
        Commands::Run {
            source,
            from,
            no_wait,
            auto_advance,
            dry_run,
        } => {
            let workout = load_workout(&source, &workouts_dir)?;
            cmd_run(&workout, from, no_wait, auto_advance, dry_run, &config)
        }
        Commands::Validate { source } => {
            let workout = load_workout(&source, &workouts_dir)?;
            println!(
                "✓ {} workout is valid: {} sections, {} total",
                workout.workout_type,
                workout.timeline.len(),
                format_clock(workout.timeline.total_duration())
            );
            Ok(())
        }
        Commands::History { date, workout_type } => {
            let filter = JournalFilter {
                date,
                workout_type,
            };
            cmd_history(&Journal::new(config.journal_path()), &filter)
        }
    }
}

fn load_workout(source: &WorkoutSource, workouts_dir: &Path) -> Result<LoadedWorkout> {
    let date = source.date.unwrap_or_else(|| Local::now().date_naive());

    let spec = match &source.file {
        Some(path) => load_spec(path)?,
        None => load_spec_for_date(workouts_dir, date)?,
    };

    let workout_type: WorkoutType = spec.workout_type.parse()?;
    tracing::debug!("Building {} workout for {}", workout_type, date);
    let timeline = create_workout(spec)?;

    Ok(LoadedWorkout {
        workout_type,
        date,
        timeline,
    })
}

fn cmd_show(workout: &LoadedWorkout, json: bool, config: &Config) -> Result<()> {
    let timeline = &workout.timeline;

    if json {
        println!("{}", serde_json::to_string_pretty(timeline.sections())?);
        return Ok(());
    }

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} WORKOUT", workout.workout_type.as_str().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!(
        "  {} sections, total {}",
        timeline.len(),
        format_clock(timeline.total_duration())
    );
    println!();

    for (index, decorated) in decorate(timeline.sections(), &config.display.palette)
        .iter()
        .enumerate()
    {
        let section = &decorated.section;
        let start = timeline.section_start(index).unwrap_or(0);
        let length = match &section.reps {
            Some(reps) => format!("{} reps", reps),
            None => format_clock(u64::from(section.effective_duration)),
        };

        println!(
            "{:>4}  {}  {:>9}  {:<9}  {}  {}",
            index + 1,
            format_clock(start),
            length,
            decorated.role.label(),
            decorated.color,
            section.name
        );
        if let Some(ref description) = section.description {
            println!("                                             {}", description);
        }
    }

    println!();
    Ok(())
}

fn cmd_at(workout: &LoadedWorkout, seconds: u64) -> Result<()> {
    let timeline = &workout.timeline;
    let position = timeline
        .section_at(seconds)
        .ok_or_else(|| Error::Other("workout has no sections".into()))?;

    println!("Current:   {}", position.section.name);
    println!("Offset:    {}", format_clock(position.local_offset));
    println!(
        "Remaining: {}",
        format_clock(timeline.remaining_in_section(seconds))
    );
    match timeline.next_section(seconds) {
        Some(next) => println!("Next:      {}", next.name),
        None => println!("Next:      finish"),
    }
    println!("Progress:  {:.0}%", timeline.progress(seconds) * 100.0);

    Ok(())
}

fn cmd_run(
    workout: &LoadedWorkout,
    from: u64,
    no_wait: bool,
    auto_advance: bool,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    let timeline = &workout.timeline;
    let total = timeline.total_duration();
    let tick = Duration::from_millis(config.display.tick_millis);
    let started_at = Utc::now();

    if from >= total {
        println!(
            "Nothing left to run: {} is past the end of this {} workout",
            format_clock(from),
            format_clock(total)
        );
        return Ok(());
    }

    let mut elapsed = from;
    let mut current_index = None;

    while elapsed < total {
        let Some(position) = timeline.section_at(elapsed) else {
            break;
        };

        if current_index != Some(position.index) {
            current_index = Some(position.index);
            announce_section(timeline, elapsed, &config.display.palette);

            if position.section.is_rep_based() && !auto_advance {
                wait_for_enter()?;
            }
        }

        println!(
            "  {}  {:<28} {} left  {:>3.0}%",
            format_clock(elapsed),
            position.section.name,
            format_clock(timeline.remaining_in_section(elapsed)),
            timeline.progress(elapsed) * 100.0
        );

        if !no_wait {
            std::thread::sleep(tick);
        }
        elapsed += 1;
    }

    println!("\n✓ Workout complete ({})", format_clock(total));

    if dry_run {
        println!("[Dry run - not logging workout]");
        return Ok(());
    }

    let entry = JournalEntry::completed(workout.workout_type, workout.date, started_at, timeline);
    Journal::new(config.journal_path()).record(&entry)?;
    tracing::info!("Logged completed workout {}", entry.id);

    println!("✓ Workout logged!");
    Ok(())
}

fn announce_section(timeline: &Timeline, elapsed: u64, palette: &Palette) {
    let Some(section) = timeline.current_section(elapsed) else {
        return;
    };
    let role = SectionRole::of(section);

    println!();
    println!("▶ {} [{} {}]", section.name, role.label(), palette.color_for(role));
    if let Some(ref reps) = section.reps {
        println!("  → {} reps", reps);
    }
    if let Some(ref description) = section.description {
        println!("  {}", description);
    }
    if let Some(next) = timeline.next_section(elapsed) {
        println!("  Next: {}", next.name);
    }
}

fn wait_for_enter() -> Result<()> {
    print!("  Press Enter when done > ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}

fn cmd_history(journal: &Journal, filter: &JournalFilter) -> Result<()> {
    let entries = journal.query(filter)?;

    if entries.is_empty() {
        if *filter == JournalFilter::default() {
            println!("No completed workouts yet.");
        } else {
            println!("No completed workouts match.");
        }
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  {:<8} {}  {:>3} sections  (completed {})",
            entry.workout_date,
            entry.workout_type.as_str(),
            format_clock(entry.total_duration_seconds),
            entry.section_count,
            entry.completed_at.format("%Y-%m-%d %H:%M")
        );
    }

    let totals = JournalTotals::of(&entries);
    println!(
        "\n{} workouts, {} total",
        totals.workouts,
        format_clock(totals.seconds)
    );

    Ok(())
}
