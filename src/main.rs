use cardsheet::{PageSize, SheetConfig, SheetPipeline};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a printable sheet of cards arranged in a grid from YAML card documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to YAML, or Markdown with ```yaml blocks, containing card documents
    input: PathBuf,

    /// Output PDF path
    #[arg(short, long, default_value = "investigation_cards.pdf")]
    output: PathBuf,

    /// Rows per page
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Columns per page
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Replicate the full card set this many times
    #[arg(long, default_value_t = 1)]
    copies: i64,

    /// Page margin in inches
    #[arg(long, default_value_t = 0.25)]
    margin: f32,

    /// Gutter between cards in inches
    #[arg(long, default_value_t = 0.10)]
    gutter: f32,

    /// Corner radius in points
    #[arg(long, default_value_t = 10.0)]
    corner: f32,

    /// Title font size
    #[arg(long, default_value_t = 12.0)]
    title_size: f32,

    /// Body font size
    #[arg(long, default_value_t = 9.0)]
    body_size: f32,

    /// Page size: letter, a4 or legal
    #[arg(long, default_value_t = PageSize::Letter)]
    page_size: PageSize,
}

impl Args {
    fn to_config(&self) -> SheetConfig {
        SheetConfig {
            page_size: self.page_size,
            rows: self.rows as usize,
            cols: self.cols as usize,
            copies: self.copies.max(1) as usize,
            margin_in: self.margin,
            gutter_in: self.gutter,
            corner_radius: self.corner,
            title_size: self.title_size,
            body_size: self.body_size,
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cardsheet=warn"))
        .init();

    let args = Args::parse();
    let result = SheetPipeline::new(args.to_config())
        .and_then(|pipeline| pipeline.generate_to_file(&args.input, &args.output));

    match result {
        Ok(summary) => {
            println!(
                "Wrote {} with {} cards across {} page(s).",
                args.output.display(),
                summary.cards,
                summary.pages
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
