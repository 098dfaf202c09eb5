//! Reads each source named on the command line and prints every value read.
//!
//! Sources are read in command-line order, each to end-of-stream:
//!
//!   `scm - -c '(1 "two" three)' forms.scm`
//!
//! Run with `RUST_LOG=trace` to log each value as it is read.

use clap::{value_parser, Arg, ArgMatches, Command};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::process;

use scm::arena::Arena;
use scm::error::Error;
use scm::printer::print_value;
use scm::reader::Reader;
use scm::stream::ByteSource;


const SYNOPSIS: &str = "synopsis:
  scm [ - | -c form | file ] ...

    -          reads from standard input.
    -c form    reads from the string form.
    file       reads from the file.

";

#[derive(Debug, Eq, PartialEq)]
enum Source {
    Stdin,
    Form(String),
    File(String),
}


fn main() {
    // Setup logging.
    env_logger::Builder::from_default_env().init();

    // Diagnostics go to stderr, so its terminal decides highlighting.
    let force = env::var_os("CLICOLOR_FORCE").map_or(false, |v| v != "0");
    colored::control::set_override(diagnostic_color(
        io::stderr().is_terminal(),
        env::var_os("NO_COLOR").is_some(),
        force,
    ));

    let sources = match parse_args(std::env::args_os()) {
        Some(sources) => sources,
        None => usage(),
    };

    let mut arena = Arena::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for source in sources {
        if let Err(err) = run(&mut arena, &mut out, source) {
            if let Err(io_err) = out.flush() {
                debug!("Flushing stdout failed: {}", io_err);
            }
            if let Err(io_err) = err.report(&mut io::stderr()) {
                debug!("Reporting {} failed: {}", err, io_err);
            }
            process::exit(1);
        }
    }
}

fn diagnostic_color(stderr_is_terminal: bool, no_color: bool, force: bool) -> bool {
    force || (stderr_is_terminal && !no_color)
}

fn usage() -> ! {
    eprint!("{}", SYNOPSIS);
    process::exit(1);
}

fn command() -> Command<'static> {
    Command::new("scm")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("source")
                .value_name("file")
                .takes_value(true)
                .multiple_occurrences(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("form")
                .short('c')
                .value_name("form")
                .takes_value(true)
                .multiple_occurrences(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String)),
        )
}

/// Sources in command-line order; None on a usage error.
fn parse_args<I, T>(args: I) -> Option<Vec<Source>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            debug!("Argument parsing failed: {}", err);
            return None;
        }
    };

    // A repeated trailing -c is accepted by clap with no value attached.
    let forms = matches.get_many::<String>("form").map_or(0, |v| v.count());
    if matches.occurrences_of("form") != forms as u64 {
        debug!("-c without a form");
        return None;
    }

    let mut sources = indexed(&matches, "source", |path| {
        if path == "-" {
            Source::Stdin
        } else {
            Source::File(path)
        }
    });
    sources.extend(indexed(&matches, "form", Source::Form));
    if sources.is_empty() {
        return None;
    }

    sources.sort_by_key(|(index, _)| *index);
    Some(sources.into_iter().map(|(_, source)| source).collect())
}

fn indexed<F>(matches: &ArgMatches, id: &str, make: F) -> Vec<(usize, Source)>
where
    F: Fn(String) -> Source,
{
    match (matches.indices_of(id), matches.get_many::<String>(id)) {
        (Some(indices), Some(values)) => indices
            .zip(values)
            .map(|(index, value)| (index, make(value.clone())))
            .collect(),
        _ => Vec::new(),
    }
}

fn run<W: Write>(arena: &mut Arena, out: &mut W, source: Source) -> Result<(), Error> {
    let source = match source {
        Source::Stdin => ByteSource::open_stdin(),
        Source::Form(form) => ByteSource::open_buffer(form),
        Source::File(path) => ByteSource::open_file(path)?,
    };
    debug!("Reading {}", source.name());

    let mut reader = Reader::new(source);
    loop {
        let value = reader.read(arena)?;
        if value.is_eof() {
            break;
        }
        print_value(out, arena, value)?;
    }
    reader.close()
}


#[cfg(test)]
#[path = "./main_test.rs"]
mod main_test;
