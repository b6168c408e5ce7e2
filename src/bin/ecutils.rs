//! `ecutils` — E_521 key generation, ECDHIES encrypt/decrypt, and Schnorr
//! sign/verify (§4.5).

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use keccrypt::asym::{parse_ec_record, parse_signature, serialize_ec_record, serialize_signature};
use keccrypt::curve::Point;
use keccrypt::{KeyEncryptable, KeyPair, Message, Signable};

#[derive(Debug, StructOpt)]
#[structopt(name = "ecutils", about = "E_521 key generation, ECDHIES, and Schnorr signatures")]
struct Opt {
    /// Operation: keygen | encrypt | decrypt | sign | verify.
    #[structopt(short = "p", long = "op")]
    op: String,

    /// Public key file (132 raw bytes).
    #[structopt(long = "pub", parse(from_os_str))]
    pub_key: Option<PathBuf>,

    /// Private key file (AE record over the derived key bytes).
    #[structopt(long = "prv", parse(from_os_str))]
    prv_key: Option<PathBuf>,

    /// Password the key pair is derived from (`keygen`, `decrypt`, `sign`).
    #[structopt(long = "pwd")]
    pwd: Option<String>,

    /// Password the private-key file is stored under (defaults to `-pwd`).
    #[structopt(long = "rpwd")]
    record_pwd: Option<String>,

    /// Data file: plaintext for `encrypt`, ciphertext for `decrypt`, the
    /// signed message for `sign`/`verify`.
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Signature file, required for `verify`.
    #[structopt(short, long, parse(from_os_str))]
    sig: Option<PathBuf>,

    /// Output file.
    #[structopt(short, long, parse(from_os_str))]
    out: PathBuf,
}

fn require_file(path: &Option<PathBuf>, flag: &str) -> Result<Vec<u8>> {
    let path = path.as_ref().with_context(|| format!("{flag} is required"))?;
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn pwd(opt: &Opt) -> Result<Vec<u8>> {
    Ok(opt.pwd.clone().context("-pwd is required")?.into_bytes())
}

fn run(opt: Opt) -> Result<()> {
    match opt.op.to_lowercase().as_str() {
        "keygen" => {
            let pw = pwd(&opt)?;
            let record_pw = opt.record_pwd.clone().map(String::into_bytes).unwrap_or_else(|| pw.clone());
            let kp = KeyPair::new(&pw, "ecutils")?;

            let pub_path = opt.pub_key.context("-pub is required")?;
            fs::write(&pub_path, kp.public_key_bytes())
                .with_context(|| format!("writing {}", pub_path.display()))?;

            if let Some(prv_path) = &opt.prv_key {
                let record = kp.private_key_record(&record_pw)?;
                fs::write(prv_path, record)
                    .with_context(|| format!("writing {}", prv_path.display()))?;
            }
            Ok(())
        }
        "encrypt" => {
            let pub_bytes = require_file(&opt.pub_key, "-pub")?;
            let pub_point = Point::from_bytes(&pub_bytes)?;
            let plaintext = require_file(&opt.file, "-f")?;

            let mut msg = Message::new(plaintext);
            msg.key_encrypt(&pub_point)?;
            let record = serialize_ec_record(&msg)?;
            fs::write(&opt.out, record).with_context(|| format!("writing {}", opt.out.display()))?;
            Ok(())
        }
        "decrypt" => {
            let pw = pwd(&opt)?;
            let prv_bytes = require_file(&opt.prv_key, "-prv")?;
            let record_pw = opt.record_pwd.clone().map(String::into_bytes).unwrap_or_else(|| pw.clone());
            let kp = KeyPair::from_private_key_record(&prv_bytes, &record_pw, "ecutils")?;

            let ciphertext = require_file(&opt.file, "-f")?;
            let mut msg = parse_ec_record(&ciphertext)?;
            msg.key_decrypt(&kp.prv_scalar)?;
            if msg.op_result != Some(true) {
                bail!("tag mismatch: wrong key or corrupted input");
            }
            fs::write(&opt.out, &msg.msg).with_context(|| format!("writing {}", opt.out.display()))?;
            Ok(())
        }
        "sign" => {
            let pw = pwd(&opt)?;
            let kp = KeyPair::new(&pw, "ecutils")?;
            let data = require_file(&opt.file, "-f")?;

            let mut msg = Message::new(data);
            msg.sign(&kp)?;
            let sig_bytes = serialize_signature(&msg.sig.expect("sign always sets sig"));
            fs::write(&opt.out, sig_bytes).with_context(|| format!("writing {}", opt.out.display()))?;
            Ok(())
        }
        "verify" => {
            let pub_bytes = require_file(&opt.pub_key, "-pub")?;
            let pub_point = Point::from_bytes(&pub_bytes)?;
            let data = require_file(&opt.file, "-f")?;
            let sig_bytes = require_file(&opt.sig, "-s")?;

            let mut msg = Message::new(data);
            msg.sig = Some(parse_signature(&sig_bytes)?);
            msg.verify(&pub_point)?;
            if msg.op_result == Some(true) {
                println!("signature valid");
                Ok(())
            } else {
                bail!("signature invalid")
            }
        }
        other => bail!("unknown -op value: {other} (expected keygen, encrypt, decrypt, sign, or verify)"),
    }
}

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = run(opt) {
        eprintln!("ecutils: {err:#}");
        std::process::exit(1);
    }
}
