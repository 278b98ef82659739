use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use hexlist::{probe, DirectSupport};

fn main() -> Result<()> {
    let mut args = env::args();
    args.next(); // skip name of executable

    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("usage: odirect_probe <path>");
    };

    let outcome =
        probe(&path).with_context(|| format!("can't create probe file {}", path.display()))?;

    match outcome {
        DirectSupport::Supported => {
            println!("open with O_DIRECT ok: {}", path.display());
        }
        DirectSupport::Unsupported(err) => {
            println!("open with O_DIRECT failed: {err}");
            if let Some(errno) = err.raw_os_error() {
                println!("errno = {errno}");
            }
        }
    }

    Ok(())
}
