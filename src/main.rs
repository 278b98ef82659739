use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{bail, Context, Result};
use hexlist::DumpSession;

fn main() -> Result<()> {
    let mut args = env::args();
    args.next(); // skip name of executable

    let Some(arg) = args.next() else {
        bail!("missing file name (-h for help)");
    };
    if arg == "-h" {
        print_usage();
        return Ok(());
    }
    if args.next().is_some() {
        bail!("too many arguments (-h for help)");
    }

    let file = File::open(&arg).with_context(|| format!("can't open file {arg}"))?;
    let stdout = io::stdout().lock();
    DumpSession::new(stdout).run(&arg, &mut BufReader::new(file))?;

    Ok(())
}

fn print_usage() {
    println!("hexlist: fixed-width hex/ASCII file viewer");
    println!();
    println!("usage: hexlist <file>");
    println!("       hexlist -h");
    println!();
    println!("Prints the file 16 bytes per line: hex columns, the running");
    println!("byte offset, and a printable rendering of each byte.");
}
