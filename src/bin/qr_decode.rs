//! Command-line front end for the QR decoder.
//!
//! This binary owns the `--device-id <int>` flag (default `0`) that
//! identifies which camera to read frames from. Opening that device,
//! locating a QR symbol in a frame, and sampling it into a module matrix
//! is image-acquisition work outside this crate: it depends on a capture
//! backend (v4l/gstreamer/similar) that isn't part of this dependency
//! stack. This binary parses the flag and hands off to `rust_qr_decode::decode`
//! once a matrix is available; until a capture backend is wired in, opening
//! the device always fails, and we exit non-zero as the contract requires.

use std::env;
use std::process::ExitCode;

struct Args {
    device_id: i32,
}

fn parse_args() -> Result<Args, String> {
    let mut device_id = 0;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--device-id" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--device-id requires a value".to_string())?;
                device_id = value
                    .parse()
                    .map_err(|_| format!("invalid --device-id value: {value}"))?;
            }
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }
    Ok(Args { device_id })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("qr-decode: {message}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "qr-decode: no capture backend wired in; cannot open device {}",
        args.device_id
    );
    ExitCode::FAILURE
}
