//! Print the BLAKE2s digest of a file as lowercase hex.
//!
//! Usage:
//!   b2ssum [--length <n>] [--key <hex>] [--salt <hex>] [--personal <str>] [--verbose] <path>
//!
//! `$VAR` and `${VAR}` in the path are expanded from the environment.
//! `B2SSUM_KERNEL` forces a compression kernel by name.

use std::{
  env,
  fs::File,
  io::{self, Write},
  process::ExitCode,
};

use blake2s::{Blake2sKernelId, OUT_LEN_MAX, Params, kernels};

const KERNEL_ENV: &str = "B2SSUM_KERNEL";

/// CLI arguments.
#[derive(Debug)]
struct Args {
  /// File to hash.
  path: Option<String>,

  /// Digest length in bytes.
  length: usize,

  /// Raw key bytes.
  key: Vec<u8>,

  /// Raw salt bytes.
  salt: Vec<u8>,

  /// Raw personalization bytes.
  personal: Vec<u8>,

  /// Print parameters and kernel on stderr.
  verbose: bool,

  /// Show help.
  help: bool,
}

impl Default for Args {
  fn default() -> Self {
    Self {
      path: None,
      length: OUT_LEN_MAX,
      key: Vec::new(),
      salt: Vec::new(),
      personal: Vec::new(),
      verbose: false,
      help: false,
    }
  }
}

fn usage() {
  eprintln!("Usage: b2ssum [--length <n>] [--key <hex>] [--salt <hex>] [--personal <str>] [--verbose] <path>");
  eprintln!("Environment: {KERNEL_ENV}=<kernel> forces a compression kernel (portable)");
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args, String> {
  let mut args = Args::default();
  let mut it = argv.into_iter();

  while let Some(arg) = it.next() {
    match arg.as_str() {
      "-h" | "--help" => args.help = true,
      "-v" | "--verbose" => args.verbose = true,
      "-l" | "--length" => {
        let Some(value) = it.next() else {
          return Err("--length requires an integer".to_string());
        };
        args.length = value
          .parse::<usize>()
          .map_err(|_| format!("invalid --length value: {value}"))?;
      }
      "-k" | "--key" => {
        let Some(value) = it.next() else {
          return Err("--key requires a hex string".to_string());
        };
        args.key = decode_hex(&value).map_err(|e| format!("invalid --key: {e}"))?;
      }
      "-s" | "--salt" => {
        let Some(value) = it.next() else {
          return Err("--salt requires a hex string".to_string());
        };
        args.salt = decode_hex(&value).map_err(|e| format!("invalid --salt: {e}"))?;
      }
      "-p" | "--personal" => {
        let Some(value) = it.next() else {
          return Err("--personal requires a string".to_string());
        };
        args.personal = value.into_bytes();
      }
      other if other.starts_with('-') && other.len() > 1 => {
        return Err(format!("unknown argument: {other}"));
      }
      _ => {
        if args.path.is_some() {
          return Err(format!("unexpected extra path: {arg}"));
        }
        args.path = Some(arg);
      }
    }
  }
  Ok(args)
}

fn decode_hex(s: &str) -> Result<Vec<u8>, String> {
  if s.len() % 2 != 0 {
    return Err(format!("odd number of hex digits ({})", s.len()));
  }
  s.as_bytes()
    .chunks_exact(2)
    .map(|pair| {
      let digits = std::str::from_utf8(pair).map_err(|_| "non-ASCII input".to_string())?;
      u8::from_str_radix(digits, 16).map_err(|_| format!("bad hex digits {digits:?}"))
    })
    .collect()
}

/// Expand `$VAR` and `${VAR}` from `lookup`; unset variables become empty.
fn expand_env(s: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
  let mut out = String::with_capacity(s.len());
  let mut rest = s;
  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];
    let (name, tail) = if let Some(braced) = after.strip_prefix('{') {
      match braced.find('}') {
        Some(end) => (&braced[..end], &braced[end + 1..]),
        None => ("", after),
      }
    } else {
      let end = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
      (&after[..end], &after[end..])
    };
    if name.is_empty() {
      out.push('$');
    } else {
      out.push_str(&lookup(name).unwrap_or_default());
    }
    rest = tail;
  }
  out.push_str(rest);
  out
}

fn kernel_from_env() -> Result<Option<Blake2sKernelId>, String> {
  match env::var(KERNEL_ENV) {
    Ok(name) => kernels::id_from_name(&name)
      .map(Some)
      .ok_or_else(|| format!("{KERNEL_ENV}: unknown kernel {name:?}")),
    Err(env::VarError::NotPresent) => Ok(None),
    Err(e) => Err(format!("{KERNEL_ENV}: {e}")),
  }
}

fn run(args: &Args) -> Result<(), String> {
  let Some(raw_path) = args.path.as_deref() else {
    return Err("missing <path>".to_string());
  };
  let path = expand_env(raw_path, |name| env::var(name).ok());

  let mut params = Params::new();
  params
    .hash_length(args.length)
    .and_then(|p| p.key(&args.key))
    .and_then(|p| p.salt(&args.salt))
    .and_then(|p| p.personal(&args.personal))
    .map_err(|e| e.to_string())?;

  let mut state = params.to_state();
  if let Some(kernel) = kernel_from_env()? {
    state = state.with_kernel(kernel);
  }
  if args.verbose {
    eprintln!("b2ssum: {params:?} kernel={}", state.kernel().as_str());
  }

  let mut file = File::open(&path).map_err(|e| format!("failed to open {path}: {e}"))?;
  io::copy(&mut file, &mut state).map_err(|e| format!("failed to read {path}: {e}"))?;

  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{}", state.finalize()).map_err(|e| format!("failed to write digest: {e}"))?;
  stdout.flush().map_err(|e| format!("failed to write digest: {e}"))
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(e) => {
      eprintln!("error: {e}");
      usage();
      return ExitCode::FAILURE;
    }
  };
  if args.help {
    usage();
    return ExitCode::SUCCESS;
  }

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {e}");
      ExitCode::FAILURE
    }
  }
}
