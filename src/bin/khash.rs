//! `khash` — SHA3/cSHAKE256/KMACXOF256 over a file or stdin.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use keccrypt::sha3::{cshake256, kmac_xof256, sha3_hash};

#[derive(Debug, StructOpt)]
#[structopt(name = "khash", about = "Compute a SHA3 / cSHAKE256 / KMACXOF256 digest")]
struct Opt {
    /// Which function to run.
    #[structopt(short = "p", long = "op", default_value = "sha3")]
    op: String,

    /// Input file (reads stdin if omitted).
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Key file, required for `-op kmac`.
    #[structopt(short, long, parse(from_os_str))]
    key: Option<PathBuf>,

    /// Customization string, used only by `-op cshake`.
    #[structopt(long = "cs", default_value = "")]
    customize: String,

    /// Output length in bits. Must be one of 224/256/384/512 for `sha3`.
    #[structopt(short, long, default_value = "512")]
    length: u64,

    /// Write the raw digest bytes here in addition to printing hex.
    #[structopt(short, long, parse(from_os_str))]
    write: Option<PathBuf>,
}

fn read_input(file: &Option<PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn run(opt: Opt) -> Result<Vec<u8>> {
    let input = read_input(&opt.file)?;
    let digest = match opt.op.to_lowercase().as_str() {
        "sha3" => sha3_hash(&input, opt.length)?,
        "cshake" | "cshake256" => {
            cshake256(&input, opt.length, b"", opt.customize.as_bytes())?
        }
        "kmac" | "kmacxof256" => {
            let key_path = opt.key.as_ref().context("-k/--key is required for -op kmac")?;
            let key = fs::read(key_path).with_context(|| format!("reading {}", key_path.display()))?;
            kmac_xof256(&key, &input, opt.length, &opt.customize)?
        }
        other => bail!("unknown -op value: {other} (expected sha3, cshake, or kmac)"),
    };
    if let Some(path) = &opt.write {
        fs::write(path, &digest).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(digest)
}

fn main() {
    let opt = Opt::from_args();
    match run(opt) {
        Ok(digest) => println!("{}", hex::encode(digest)),
        Err(err) => {
            eprintln!("khash: {err:#}");
            std::process::exit(1);
        }
    }
}
