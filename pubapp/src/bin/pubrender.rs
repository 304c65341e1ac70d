use clap::{Parser, Subcommand, ValueEnum};
use pubapp::{
    config::Config,
    page::Fragments,
    render_page,
    source::{
        DataSource,
        FileSource,
        HttpSource,
    },
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    config: Config,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the listings and print the markup for each container.
    Render {
        #[clap(long, value_enum)]
        section: Option<Section>,
    },
    /// Parse the document and report problems with it.
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Section {
    Journal,
    Working,
}

fn source(config: &Config) -> Box<dyn DataSource> {
    if config.is_remote() {
        Box::new(HttpSource::new(config.data_url.clone(), None))
    } else {
        Box::new(FileSource::new(&config.data_url))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("pubapp")
        .module("pubcore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let config = args.config;
    let source = source(&config);

    match args.command {
        Commands::Render { section } => {
            let mut page = match section {
                Some(Section::Journal) => Fragments::new([&config.journal_container]),
                Some(Section::Working) => Fragments::new([&config.working_container]),
                None => Fragments::new([
                    &config.journal_container,
                    &config.working_container,
                ]),
            };
            render_page(source.as_ref(), &mut page, &config).await?;
            for (id, html) in page.iter() {
                println!("<!-- {id} -->");
                println!("{html}");
            }
        },
        Commands::Check => {
            let data = source.fetch().await?;
            println!("journal publications: {}", data.journal_publications().len());
            println!("working papers: {}", data.working_papers().len());
            let duplicates = data.duplicate_ids();
            if !duplicates.is_empty() {
                for id in duplicates.iter() {
                    println!("duplicate entry id: {id}");
                }
                anyhow::bail!("{} duplicate entry id(s) found", duplicates.len());
            }
        },
    }

    Ok(())
}
