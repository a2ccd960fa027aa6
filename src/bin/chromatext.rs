use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "chromatext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chrome/rainbow text effect as a PNG.
    Text(TextArgs),
    /// Write a background texture (image file, noise or clouds) as a PNG.
    Noise(NoiseArgs),
    /// Render cube viewer frames headlessly as PNGs.
    Cube(CubeArgs),
    /// Open the interactive cube viewer.
    #[cfg(feature = "window")]
    View(ViewArgs),
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// JSON effect config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text to render; use `\n` for line breaks.
    #[arg(long)]
    text: Option<String>,

    /// Font file (TTF/OTF). Falls back to the built-in font when missing.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in pixels.
    #[arg(long)]
    size: Option<f32>,

    /// Canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height.
    #[arg(long)]
    height: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print diagnostics about font resolution (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_font: bool,
}

#[derive(Parser, Debug)]
struct NoiseArgs {
    /// Image to load as a darkened texture; noise is used when it cannot be read.
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Generate multi-octave clouds instead of plain noise.
    #[arg(long, conflicts_with = "texture")]
    clouds: bool,

    /// Texture width.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Texture height.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Noise seed (defaults to $CHROMATEXT_NOISE_SEED, then the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Output PNG path.
    #[arg(long, default_value = "texture_noise.png")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CubeArgs {
    /// JSON viewer config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Output directory for `cube_NNNN.png` files.
    #[arg(long, default_value = "cube_frames")]
    out_dir: PathBuf,

    /// Render mode override.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Frame width override.
    #[arg(long)]
    width: Option<u32>,

    /// Frame height override.
    #[arg(long)]
    height: Option<u32>,
}

#[cfg(feature = "window")]
#[derive(Parser, Debug)]
struct ViewArgs {
    /// JSON viewer config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial render mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Textured,
    Shiny,
}

impl From<ModeChoice> for chromatext::RenderMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Textured => Self::TexturedFaces,
            ModeChoice::Shiny => Self::ShinyTextured,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Text(args) => cmd_text(args),
        Command::Noise(args) => cmd_noise(args),
        Command::Cube(args) => cmd_cube(args),
        #[cfg(feature = "window")]
        Command::View(args) => cmd_view(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config<T: serde::de::DeserializeOwned + Default>(path: Option<&Path>) -> anyhow::Result<T> {
    match path {
        Some(p) => chromatext::load_json_config(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(T::default()),
    }
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let mut cfg: chromatext::EffectConfig = read_config(args.config.as_deref())?;
    if let Some(text) = args.text {
        cfg.text = text.replace("\\n", "\n");
    }
    if let Some(font) = args.font {
        cfg.font_path = font;
    }
    if let Some(size) = args.size {
        cfg.font_size_px = size;
    }
    if let Some(width) = args.width {
        cfg.width = width;
    }
    if let Some(height) = args.height {
        cfg.height = height;
    }
    if let Some(out) = args.out {
        cfg.output_path = out;
    }
    cfg.validate()?;

    if args.dump_font {
        dump_font_diagnostics(&cfg)?;
    }

    let out = chromatext::render_to_file(&cfg)
        .with_context(|| format!("render text effect to '{}'", cfg.output_path.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_noise(args: NoiseArgs) -> anyhow::Result<()> {
    let canvas = chromatext::Canvas::new(args.width, args.height)?;
    let seed = chromatext::EffectConfig {
        noise_seed: args.seed,
        ..chromatext::EffectConfig::default()
    }
    .resolved_noise_seed();

    let img = match (&args.texture, args.clouds) {
        (Some(path), _) => chromatext::load_texture(path, canvas, seed)?,
        (None, true) => chromatext::generate_clouds_texture(canvas, seed)?,
        (None, false) => chromatext::generate_noise_texture(canvas, seed)?,
    };
    chromatext::write_rgb_png(&args.out, &img)
        .with_context(|| format!("write texture '{}'", args.out.display()))?;
    eprintln!("wrote {} (seed {seed})", args.out.display());
    Ok(())
}

fn cmd_cube(args: CubeArgs) -> anyhow::Result<()> {
    let mut cfg: chromatext::ViewerConfig = read_config(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        cfg.mode = mode.into();
    }
    if let Some(width) = args.width {
        cfg.width = width;
    }
    if let Some(height) = args.height {
        cfg.height = height;
    }

    let written = chromatext::run_headless(&cfg, args.frames, &args.out_dir)?;
    eprintln!("wrote {} frame(s) to {}", written.len(), args.out_dir.display());
    Ok(())
}

#[cfg(feature = "window")]
fn cmd_view(args: ViewArgs) -> anyhow::Result<()> {
    let mut cfg: chromatext::ViewerConfig = read_config(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        cfg.mode = mode.into();
    }
    chromatext::run_window(&cfg)?;
    Ok(())
}

fn dump_font_diagnostics(cfg: &chromatext::EffectConfig) -> anyhow::Result<()> {
    let font = chromatext::Font::load_or_builtin(&cfg.font_path, cfg.font_size_px)?;
    eprintln!("font diagnostics:");
    eprintln!("  font_source: {}", cfg.font_path.display());
    eprintln!("  family:      {}", font.family_name());
    match font.font_bytes() {
        Some(bytes) => eprintln!("  sha256:      {}", sha256_hex(bytes)),
        None => eprintln!("  sha256:      (built-in)"),
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
