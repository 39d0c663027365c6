use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use whisper_cards::{
    AccessState, BrowseFilter, CardSession, Category, Color, ExportMode, ExportOpts,
    ExportOutcome, ExportPipeline, Fidelity, FontBook, FontStyle, HeaderStyle, Opacity, PatternId,
    Platform as _, Tier,
    catalog::ThemeRecord,
    export::DirPlatform,
    render::{drawing_to_svg, encode_png, rasterize_svg, scene_svg},
    store::browse,
};

#[derive(Parser, Debug)]
#[command(name = "whisper-cards", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog themes.
    Themes(ThemesArgs),
    /// Render one procedural pattern as SVG or PNG.
    Pattern(PatternArgs),
    /// Compose a message card and export it as a PNG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct ThemesArgs {
    /// Print catalog records as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Case-insensitive substring of the theme name.
    #[arg(long)]
    query: Option<String>,

    #[arg(long)]
    category: Option<Category>,

    #[arg(long)]
    tier: Option<Tier>,

    /// Highest tier the viewer has unlocked; locked themes are marked.
    #[arg(long, default_value_t = Tier::Free)]
    access: Tier,
}

#[derive(Parser, Debug)]
struct PatternArgs {
    /// Pattern identifier, e.g. `paper-grain`.
    id: PatternId,

    /// Opacity in (0, 1]; defaults to the pattern's own.
    #[arg(long)]
    opacity: Option<f64>,

    /// Output side length in pixels.
    #[arg(long, default_value_t = 600)]
    size: u32,

    /// Output path; `.svg` writes the vector document, anything else a PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// The message to put on the card.
    #[arg(long)]
    caption: String,

    #[arg(long, default_value = "ocean")]
    theme: String,

    #[arg(long, default_value_t = HeaderStyle::BrandedBadge)]
    header: HeaderStyle,

    #[arg(long, default_value_t = FontStyle::Modern)]
    font: FontStyle,

    #[arg(long, default_value_t = Color::WHITE)]
    text_color: Color,

    /// Directory the PNG is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Export options JSON (see `ExportOpts`).
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Overrides the pixel ratio from the options.
    #[arg(long)]
    pixel_ratio: Option<f32>,

    /// Extra font directory, may be repeated.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Also write the scene's SVG next to the PNG.
    #[arg(long)]
    svg: bool,

    #[arg(long, value_enum, default_value_t = ModeChoice::Download)]
    mode: ModeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Download,
    Share,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Themes(args) => cmd_themes(args),
        Command::Pattern(args) => cmd_pattern(args),
        Command::Export(args) => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("build tokio runtime")?;
            rt.block_on(cmd_export(args))
        }
    }
}

fn access_for(tier: Tier) -> AccessState {
    AccessState {
        free: true,
        pro: tier >= Tier::Pro,
        premium: tier >= Tier::Premium,
    }
}

fn cmd_themes(args: ThemesArgs) -> anyhow::Result<()> {
    let mut filter = BrowseFilter::default().query(args.query.unwrap_or_default());
    filter.category = args.category;
    filter.tier = args.tier;
    let listings = browse(&access_for(args.access), &filter);

    let mut out = std::io::stdout().lock();
    if args.json {
        let records: Vec<ThemeRecord> =
            listings.iter().map(|l| ThemeRecord::from(l.theme)).collect();
        serde_json::to_writer_pretty(&mut out, &records).context("serialize themes")?;
        writeln!(out)?;
        return Ok(());
    }

    for l in &listings {
        writeln!(
            out,
            "{:<16} {:<18} {:<9} {:<8} {:<18} {}",
            l.theme.id,
            l.theme.name,
            l.theme.category.as_str(),
            l.theme.tier.as_str(),
            l.theme.pattern.as_str(),
            if l.locked { "locked" } else { "" }
        )?;
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_pattern(args: PatternArgs) -> anyhow::Result<()> {
    let opacity = match args.opacity {
        Some(v) => Opacity::new(v)?,
        None => args.id.default_opacity(),
    };
    let drawing = args.id.render(opacity);
    let side = f64::from(args.size.max(1));
    let svg = drawing_to_svg(&drawing, side, side);

    let is_svg = args
        .out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        write_output(&args.out, svg.as_bytes())?;
    } else {
        let image = rasterize_svg(&svg, &FontBook::empty(), 1.0)?;
        write_output(&args.out, &encode_png(&image)?)?;
    }

    eprintln!(
        "wrote {} ({} primitives)",
        args.out.display(),
        drawing.primitive_count()
    );
    Ok(())
}

async fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut opts = match &args.opts {
        Some(path) => ExportOpts::from_path(path)?,
        None => ExportOpts::default(),
    };
    if let Some(ratio) = args.pixel_ratio {
        opts.pixel_ratio = ratio;
    }
    opts.fonts.font_dirs.extend(args.font_dirs.iter().cloned());

    let mut session = CardSession::open(args.caption.as_str());
    session.select_theme(&args.theme)?;
    session.set_header(args.header);
    session.set_font(args.font);
    session.set_text_color(args.text_color);

    let platform = DirPlatform::new(&args.out_dir, opts.fonts.clone());
    let pipeline = ExportPipeline::cpu(platform, opts)?;

    if args.svg {
        let fonts = pipeline.platform().fonts_ready().await;
        let scene = session.scene(Fidelity::Export)?;
        let svg_path = args.out_dir.join(format!("{}.svg", scene.source.theme_id));
        write_output(&svg_path, scene_svg(&scene, &fonts).as_bytes())?;
        eprintln!("wrote {}", svg_path.display());
    }

    let mode = match args.mode {
        ModeChoice::Download => ExportMode::Download,
        ModeChoice::Share => ExportMode::Share,
    };
    let report = session.export(&pipeline, mode).await?;

    match report.outcome {
        ExportOutcome::Downloaded { filename } | ExportOutcome::Shared { filename } => {
            eprintln!(
                "wrote {} ({}x{})",
                args.out_dir.join(filename).display(),
                report.width,
                report.height
            );
        }
        ExportOutcome::Fallback(artifact) => {
            let path = args.out_dir.join(&artifact.filename);
            write_output(&path, &artifact.png)?;
            eprintln!("wrote {} ({}x{})", path.display(), artifact.width, artifact.height);
        }
    }
    if report.fonts_timed_out {
        eprintln!("warning: fonts were not ready in time; captured with fallback fonts");
    }
    Ok(())
}
