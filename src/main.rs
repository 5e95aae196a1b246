use std::fs;
use std::thread;
use std::time::Duration;

use clap::Parser;

use autotimer::models::constant::DEFAULT_SLEEP_MS;
use autotimer::models::error::AppError;
use autotimer::AutoTimer;

const PATH: &str = "main";
const FN_RUN: &str = "run";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// label printed with the timing report
    label: String,

    /// time reading this file instead of sleeping
    #[clap(long)]
    file: Option<String>,

    /// milliseconds to sleep inside the timed scope
    #[clap(long, default_value_t = DEFAULT_SLEEP_MS)]
    sleep_ms: u64,
}

fn main() {
    let args = Args::parse();
    let res = run(&args);
    if let Err(err) = res {
        print!("{}", &err.msg);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let _timer = AutoTimer::new(&args.label);
    match &args.file {
        Some(path) => {
            let data = fs::read(path)
                .map_err(|e| AppError::new(PATH, FN_RUN, "00", &e.to_string()))?;
            println!("{}: {} bytes", path, data.len());
        }
        None => thread::sleep(Duration::from_millis(args.sleep_ms)),
    }
    Ok(())
}
