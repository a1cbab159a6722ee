use std::io::Write;

use clap::Parser;
use iconc::{run, Args, Error};
use log::info;

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            writeln!(
                buf,
                "{}: {:?}: {}: {}",
                ts,
                std::thread::current().id(),
                buf.default_level_style(record.level())
                    .value(record.level()),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let config_file = run(&args)?;
    info!("Wrote {config_file:?}");
    Ok(())
}
