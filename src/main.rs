#![warn(clippy::all, clippy::pedantic)]
use clap::Parser;
use parked_text_field::{app::App, config::Config};
use std::{fs::File, io::Error, path::Path};

// 原始模式下终端无法显示日志，因此只在指定了日志文件时才初始化 env_logger
fn initialize_logging(path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(Error::other)
}

fn main() {
    let config = Config::parse();
    if let Some(path) = &config.log_file {
        if let Err(err) = initialize_logging(path) {
            eprintln!("无法创建日志文件 {}: {err}", path.display());
        }
    }
    match App::new(&config) {
        Ok(mut app) => app.run(),
        Err(err) => eprintln!("无法初始化终端: {err}"),
    }
}
