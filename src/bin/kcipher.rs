//! `kcipher` — password-keyed symmetric encryption/decryption (§4.4).

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use keccrypt::ae::{parse_record, serialize_record};
use keccrypt::{Message, PwEncryptable};

#[derive(Debug, StructOpt)]
#[structopt(name = "kcipher", about = "Password-keyed symmetric AE")]
struct Opt {
    /// Encrypt the input.
    #[structopt(short, long, conflicts_with = "decrypt")]
    encrypt: bool,

    /// Decrypt the input.
    #[structopt(short, long, conflicts_with = "encrypt")]
    decrypt: bool,

    /// Input file.
    #[structopt(short, long, parse(from_os_str))]
    file: PathBuf,

    /// Password given directly on the command line.
    #[structopt(long = "pws", conflicts_with = "password_file")]
    password: Option<String>,

    /// Password read from a file.
    #[structopt(long = "pwf", parse(from_os_str), conflicts_with = "password")]
    password_file: Option<PathBuf>,

    /// Output file.
    #[structopt(short, long, parse(from_os_str))]
    out: PathBuf,

    /// Ignore tag mismatch on decrypt and write the recovered plaintext
    /// anyway (default is to reject).
    #[structopt(short, long)]
    ignore_tag: bool,
}

fn password(opt: &Opt) -> Result<Vec<u8>> {
    if let Some(pw) = &opt.password {
        return Ok(pw.clone().into_bytes());
    }
    if let Some(path) = &opt.password_file {
        return fs::read(path).with_context(|| format!("reading {}", path.display()));
    }
    bail!("one of -pws or -pwf is required")
}

fn run(opt: Opt) -> Result<()> {
    if opt.encrypt == opt.decrypt {
        bail!("exactly one of -e or -d is required");
    }
    let pw = password(&opt)?;
    let input = fs::read(&opt.file).with_context(|| format!("reading {}", opt.file.display()))?;

    if opt.encrypt {
        let mut msg = Message::new(input);
        msg.pw_encrypt(&pw)?;
        let record = serialize_record(&msg)?;
        fs::write(&opt.out, record).with_context(|| format!("writing {}", opt.out.display()))?;
        return Ok(());
    }

    let mut msg = parse_record(&input)?;
    msg.pw_decrypt(&pw)?;
    match msg.op_result {
        Some(true) => {
            fs::write(&opt.out, &msg.msg)
                .with_context(|| format!("writing {}", opt.out.display()))?;
            Ok(())
        }
        _ if opt.ignore_tag => {
            eprintln!("kcipher: warning: tag mismatch, writing recovered plaintext anyway (-i)");
            fs::write(&opt.out, &msg.msg)
                .with_context(|| format!("writing {}", opt.out.display()))?;
            Ok(())
        }
        _ => bail!("tag mismatch: wrong password or corrupted input (use -i to override)"),
    }
}

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = run(opt) {
        eprintln!("kcipher: {err:#}");
        std::process::exit(1);
    }
}
