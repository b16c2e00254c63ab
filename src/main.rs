//! # Shelob
//!
//! 🕸️ Shelob annotates CommonCrawl dumps with Creative Commons licensing
//! signals: every license reference found in a document's markup is
//! normalized and resolved into one best-guess license per document.
//!
//! This project can be used both as a tool to produce annotated corpora,
//! or as a lib to integrate license extraction into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! shelob 0.1.0
//! CC license annotation for CommonCrawl.
//!
//! USAGE:
//!     shelob <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the annotation pipeline
//! ```
use log::debug;
use structopt::StructOpt;

use shelob::cli;
use shelob::error::Error;
use shelob::pipelines::{CcDoc, Pipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Shelob::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Shelob::Pipeline(p) => {
            let p = CcDoc::new(
                p.src,
                p.dst,
                p.lid_path,
                p.reference,
                p.dump,
                p.ignore_langs,
            );
            p.run()?;
        }
    };
    Ok(())
}
