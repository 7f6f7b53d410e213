use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;
const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=20;

#[derive(Parser, Debug)]
#[command(name = "wishcraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories and occasions.
    Occasions,
    /// Print the generated templates of an occasion as JSON.
    Templates(TemplatesArgs),
    /// Render every card of an occasion as PNG files.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Occasion id, e.g. `birthday-friend`.
    #[arg(long)]
    occasion: String,

    /// Number of templates (defaults to the catalog count).
    #[arg(long)]
    count: Option<usize>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Occasion id, e.g. `birthday-friend`.
    #[arg(long)]
    occasion: String,

    /// JPEG, PNG or WEBP photo, at most 10 MB.
    #[arg(long)]
    photo: PathBuf,

    /// Name printed on the cards (2-20 characters after trimming).
    #[arg(long)]
    name: String,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Extra font directory (repeatable). Adds to `WISHCRAFT_FONT_DIR`.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Do not scan platform font directories.
    #[arg(long)]
    no_system_fonts: bool,

    /// Print the number of font faces available for text.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wishcraft=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Occasions => cmd_occasions(),
        Command::Templates(args) => cmd_templates(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_occasions() -> anyhow::Result<()> {
    let catalog = wishcraft::Catalog::builtin();
    for cat in catalog.categories() {
        println!("{} {} ({})", cat.icon, cat.label, cat.id);
        for occ in &cat.occasions {
            println!(
                "  {} {:<24} {:>3} templates  {}",
                occ.emoji, occ.id, occ.template_count, occ.label
            );
        }
    }
    Ok(())
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    let catalog = wishcraft::Catalog::builtin();
    let themes = wishcraft::ThemeBook::builtin();
    let count = args
        .count
        .unwrap_or_else(|| catalog.template_count(&args.occasion));
    let templates = wishcraft::generate_templates(&themes, &args.occasion, count);
    let json = serde_json::to_string_pretty(&templates).context("serialize templates")?;
    println!("{json}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let name = validate_name(&args.name)?;
    let photo_bytes = read_photo(&args.photo)?;

    let mut fonts = wishcraft::FontConfig::from_env();
    fonts.load_system_fonts = !args.no_system_fonts;
    fonts.font_dirs.extend(args.font_dirs);

    let session = wishcraft::CardSession::builtin(wishcraft::CompositorOpts {
        fonts,
        ..Default::default()
    });
    if args.dump_fonts {
        eprintln!(
            "font faces: {}",
            session.compositor().text_engine().face_count()
        );
    }

    let photo = wishcraft::PhotoLoad::from_bytes(&photo_bytes);
    let cards = session.render_occasion(&args.occasion, &photo, name)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    let stem = file_stem_for(name);
    for (i, card) in cards.iter().enumerate() {
        let path = args.out.join(format!("wish-{stem}-{}.png", i + 1));
        std::fs::write(&path, &card.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn validate_name(raw: &str) -> anyhow::Result<&str> {
    let name = raw.trim();
    let n = name.chars().count();
    if !NAME_CHARS.contains(&n) {
        anyhow::bail!(
            "name must be {}-{} characters (got {n})",
            NAME_CHARS.start(),
            NAME_CHARS.end()
        );
    }
    Ok(name)
}

fn read_photo(path: &Path) -> anyhow::Result<Vec<u8>> {
    let meta =
        std::fs::metadata(path).with_context(|| format!("stat photo '{}'", path.display()))?;
    if meta.len() > MAX_PHOTO_BYTES {
        anyhow::bail!(
            "photo '{}' is {} bytes; the limit is 10 MB",
            path.display(),
            meta.len()
        );
    }
    let bytes = std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
    match wishcraft::sniff_format(&bytes) {
        Some(image::ImageFormat::Jpeg | image::ImageFormat::Png | image::ImageFormat::WebP) => {
            Ok(bytes)
        }
        other => anyhow::bail!(
            "photo '{}' must be JPEG, PNG or WEBP (detected {other:?})",
            path.display()
        ),
    }
}

/// Keep letters, digits, `-` and `_`; everything else becomes `_`.
fn file_stem_for(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
