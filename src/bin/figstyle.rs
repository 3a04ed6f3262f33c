use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use figstyle::{DocumentClass, OutputMode, Rgb, StyleOptions};

#[derive(Parser, Debug)]
#[command(
    name = "figstyle",
    version,
    about = "Derive paper or presentation chart styles"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the merged style configuration and post-build adjustments as JSON.
    Show(StyleArgs),
    /// Print the color, line style, marker and hatch of each series.
    Series(StyleArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ClassArg {
    Usenix,
    Ieee,
    Acm,
}

impl From<ClassArg> for DocumentClass {
    fn from(c: ClassArg) -> Self {
        match c {
            ClassArg::Usenix => DocumentClass::Usenix,
            ClassArg::Ieee => DocumentClass::Ieee,
            ClassArg::Acm => DocumentClass::Acm,
        }
    }
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Output mode: paper or presentation.
    #[arg(short, long, default_value = "paper")]
    mode: OutputMode,
    /// Number of series to style (default 10).
    #[arg(short = 'n', long, default_value_t = 10)]
    entries: usize,
    /// Document class the figures are sized for.
    #[arg(long, value_enum, default_value = "usenix")]
    class: ClassArg,
    /// Add markers to the property cycle.
    #[arg(long, default_value_t = false)]
    markers: bool,
    /// Keep the document's regular font sizes on paper.
    #[arg(long, default_value_t = false)]
    no_small_font: bool,
    /// Colors separated by comma or semicolon (e.g., #0173B2,#DE8F05).
    #[arg(short, long)]
    colors: Option<String>,
}

fn parse_colors(s: &str) -> Result<Vec<Rgb>> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| x.parse::<Rgb>().map_err(anyhow::Error::from))
        .collect()
}

fn options(args: &StyleArgs) -> Result<StyleOptions> {
    let mut opts = StyleOptions::default()
        .with_mode(args.mode)
        .with_num_entries(args.entries)
        .with_document_class(args.class.into())
        .with_markers(args.markers)
        .with_paper_small_font(!args.no_small_font);
    if let Some(colors) = &args.colors {
        let colors = parse_colors(colors)?;
        if colors.is_empty() {
            anyhow::bail!("--colors needs at least one #RRGGBB entry");
        }
        opts = opts.with_colors(colors);
    }
    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(args) => cmd_show(&args),
        Command::Series(args) => cmd_series(&args),
    }
}

fn cmd_show(args: &StyleArgs) -> Result<()> {
    let style = options(args)?.build()?;
    let out = serde_json::json!({
        "mode": style.mode(),
        "document_class": style.document_class(),
        "style": style.config(),
        "adjustments": style.adjustments(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_series(args: &StyleArgs) -> Result<()> {
    let style = options(args)?.build()?;
    for s in style.iter_series() {
        println!(
            "{:>3}  {}  {:<8} {:<2} {:?}",
            s.index,
            s.color,
            s.linestyle.token(),
            s.marker.token(),
            s.hatch.token()
        );
    }
    Ok(())
}
