use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use introreel::{
    Composition, EvalThreading, FrameIndex, FrameRange, JsonLinesSink, Session,
    StaticFontResolver, render_range, resolve_fonts,
};

#[derive(Parser, Debug)]
#[command(name = "introreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the composition manifest (id, duration, fps, size) as JSON.
    Manifest(InputArgs),
    /// Print the evaluated element tree of one frame as JSON.
    Frame(FrameArgs),
    /// Stream evaluated frames as JSON lines.
    Dump(DumpArgs),
    /// List the fonts the composition uses and how they resolve.
    Fonts(InputArgs),
    /// Print the composition definition as JSON.
    Export(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Composition JSON. Defaults to the built-in introduction.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Global frame index (0-based).
    #[arg(long)]
    frame: i64,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    input: InputArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Output path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Evaluate frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("introreel=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Manifest(args) => cmd_manifest(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Fonts(args) => cmd_fonts(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn load(args: &InputArgs) -> anyhow::Result<Composition> {
    match &args.in_path {
        Some(path) => Composition::from_path(path)
            .with_context(|| format!("load composition '{}'", path.display())),
        None => Ok(Composition::introduction()),
    }
}

fn session(args: &InputArgs) -> anyhow::Result<Session> {
    let comp = load(args)?;
    Session::new(&comp).with_context(|| format!("validate composition '{}'", comp.id))
}

fn cmd_manifest(args: InputArgs) -> anyhow::Result<()> {
    let session = session(&args)?;
    println!("{}", serde_json::to_string_pretty(&session.manifest())?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = session(&args.input)?;
    let frame = session
        .evaluate(args.frame)
        .with_context(|| format!("evaluate frame {}", args.frame))?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let session = session(&args.input)?;
    let range = FrameRange::new(
        FrameIndex(args.start),
        FrameIndex(args.end.unwrap_or(session.total_frames())),
    )?;
    let threading = EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        detect_holds: true,
    };

    let out: Box<dyn Write + Send> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    let mut sink = JsonLinesSink::new(out);
    let stats = render_range(&session, range, &threading, &mut sink)?;

    eprintln!(
        "dumped {} frames ({} blended, {} held)",
        stats.frames_total, stats.frames_blended, stats.frames_held
    );
    Ok(())
}

fn cmd_fonts(args: InputArgs) -> anyhow::Result<()> {
    let session = session(&args)?;
    let theme = &session.composition().theme;
    let resolver = StaticFontResolver::for_theme(theme);

    let requests = session.font_requests()?;
    let resolved = resolve_fonts(&resolver, &requests).with_context(|| {
        format!(
            "resolve fonts for families '{}' and '{}'",
            theme.display_family, theme.body_family
        )
    })?;
    for (req, handle) in &resolved {
        println!(
            "{} {} -> {} {} id={:016x}",
            req.family, req.weight, handle.family, handle.weight, handle.id
        );
    }
    Ok(())
}

fn cmd_export(args: InputArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    comp.validate()?;
    println!("{}", comp.to_json_pretty()?);
    Ok(())
}
