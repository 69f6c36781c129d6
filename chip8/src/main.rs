use clap::Parser;

mod config;
mod keymap;
mod run;

fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::debug!("{:?}", config);

    run::run(&config)
}
