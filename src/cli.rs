//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "shelob", about = "CC license annotation for CommonCrawl.")]
/// Holds every command that is callable by the `shelob` command.
pub enum Shelob {
    #[structopt(about = "Run the annotation pipeline")]
    Pipeline(Pipeline),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "source (contains n.warc.gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to 176.lid.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "reference",
        help = "folder holding per-language reference corpus indexes (<lang>.csv)"
    )]
    pub reference: Option<PathBuf>,
    #[structopt(
        long = "dump",
        help = "crawl dump label (e.g. CC-MAIN-2024-10), used for containment lookups"
    )]
    pub dump: Option<String>,
    #[structopt(
        long = "ignore-langs",
        help = "languages to skip during containment lookups"
    )]
    pub ignore_langs: Vec<String>,
}
