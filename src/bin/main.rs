extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate lths;
extern crate shlex;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use lths::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            let broken_pipe = err
                .chain()
                .filter_map(|cause| cause.downcast_ref::<io::Error>())
                .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe);
            if broken_pipe {
                std::process::exit(0)
            }
            eprintln!("Error: {err:#}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> LthsOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("lths")));
    args.extend(
        env::var("LTHS_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    LthsOptions::parse_from(args)
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    let searcher = opts.searcher()?;
    let ending = opts.output_ending();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    //------------------------------------------------------------------------------
    // single text given on the command line
    let num_matched = if let Some(text) = &opts.text {
        let text = text.as_bytes();
        let mut num_matched = 0;
        for found in searcher.search(text)? {
            num_matched += 1;
            if !opts.count {
                write!(out, "{}{}", MatchReport::new(found, text, searcher.pattern_len()), ending)?;
            }
        }
        num_matched
    } else {
        let buf = read_input(opts.input.as_deref())?;
        let records = split_records(&buf, opts.line_ending());
        search_records(&searcher, &records, &opts, &mut out)?
    };

    if opts.count {
        write!(out, "{num_matched}{ending}")?;
    }
    out.flush()?;

    Ok(if num_matched == 0 { 1 } else { 0 })
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match input {
        None | Some("-") => {
            io::stdin().lock().read_to_end(&mut buf).wrap_err("failed to read stdin")?;
        }
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut buf))
                .wrap_err_with(|| format!("failed to read {path}"))?;
        }
    }
    Ok(buf)
}

fn search_records<W: Write>(
    searcher: &HammingSearcher,
    records: &[&[u8]],
    opts: &LthsOptions,
    out: &mut W,
) -> Result<usize> {
    let ending = opts.output_ending();
    let mut num_matched = 0;
    for (line, (record, result)) in records.iter().zip(search_batch(searcher, records)).enumerate() {
        match result {
            Ok(matches) => {
                num_matched += matches.len();
                if opts.count {
                    continue;
                }
                for found in matches {
                    let report = MatchReport::new(found, record, searcher.pattern_len()).record(line + 1);
                    write!(out, "{report}{ending}")?;
                }
            }
            Err(err) => warn!("skipping line {}: {err}", line + 1),
        }
    }
    Ok(num_matched)
}
