use anyhow::Result;
use catalog_renderer::catalog::CatalogSource;
use catalog_renderer::convert::{ConvertJob, DEFAULT_MUSIC_DIR};
use catalog_renderer::model::SortOrder;
use catalog_renderer::scan::{CatalogScanner, LoftyProber, ScanConfig, StubProber, DEFAULT_ARTIST};
use catalog_renderer::{SiteConfig, SitePipeline};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-renderer")]
#[command(about = "Render a music catalog into a static webpage", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the catalog page
    Render {
        /// Catalog location: path, file:// URI or http(s) URL
        #[arg(short = 's', long, default_value = "data/music_metadata.json")]
        source: String,

        /// Output directory for index.html
        #[arg(short = 'o', long, default_value = ".")]
        output: String,

        /// Initial order of the track list
        #[arg(long, value_enum, default_value = "recent")]
        sort: SortArg,

        /// Page title
        #[arg(long, default_value = "Music Library")]
        title: String,
    },

    /// Build the catalog JSON from public/music/{flac,mp3}
    Scan {
        /// Project root containing public/music
        #[arg(short = 'r', long, default_value = ".")]
        root: String,

        /// Catalog file to write (default: <root>/data/music_metadata.json)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Artist recorded for newly found tracks
        #[arg(long, default_value = DEFAULT_ARTIST)]
        artist: String,

        /// Skip reading audio properties (faster, file listing only)
        #[arg(long)]
        no_probe: bool,
    },

    /// Convert an audio file into FLAC and MP3 renditions
    Convert {
        /// Input audio file
        file: String,

        /// Output file name (without extension)
        #[arg(long)]
        name: Option<String>,

        /// Directory holding the flac/ and mp3/ subdirectories
        #[arg(long, default_value = DEFAULT_MUSIC_DIR)]
        music_dir: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Recent,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Recent => SortOrder::Recent,
            SortArg::Oldest => SortOrder::Oldest,
        }
    }
}

/// Expand ~ in a path given on the command line
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Render {
            source,
            output,
            sort,
            title,
        } => {
            let source = match CatalogSource::parse(&source) {
                CatalogSource::Path(path) => {
                    CatalogSource::Path(expand(&path.to_string_lossy()))
                }
                url => url,
            };

            let config = SiteConfig::new(expand(&output))
                .with_source(source)
                .with_title(title)
                .with_sort_order(sort.into());

            let path = SitePipeline::new(config).render()?;
            log::info!("Catalog page ready at: {:?}", path);
        }

        Command::Scan {
            root,
            output,
            artist,
            no_probe,
        } => {
            let mut config = ScanConfig::new(expand(&root)).with_artist(artist);
            if let Some(output) = output {
                config = config.with_output(expand(&output));
            }

            // Use LoftyProber for audio properties or StubProber if disabled
            let path = if no_probe {
                CatalogScanner::new(config, StubProber::new()).run()?
            } else {
                CatalogScanner::new(config, LoftyProber::new()).run()?
            };
            log::info!("Catalog written to: {:?}", path);
        }

        Command::Convert {
            file,
            name,
            music_dir,
        } => {
            let mut job = ConvertJob::new(expand(&file)).with_music_root(expand(&music_dir));
            if let Some(name) = name {
                job = job.with_name(name);
            }

            for output in job.run()? {
                log::info!("Wrote {:?}", output);
            }
        }
    }

    Ok(())
}
