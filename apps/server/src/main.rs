use anyhow::Context;
use folio::domain::config::SiteConfig;
use folio::kernel::config::load_config;
use folio_logger::{Logger, parse_level};
use folio_runtime::RuntimeConfig;
use folio_server::Server;

/// Path of the config file (extension optional). Defaults to `folio` in the working directory.
const CONFIG_ENV: &str = "FOLIO_CONFIG";

fn site_config() -> anyhow::Result<SiteConfig> {
    load_config(std::env::var_os(CONFIG_ENV)).context("Critical: Configuration is malformed")
}

/// Applies the `[runtime]` section before the runtime is built.
fn tune_runtime(runtime: RuntimeConfig) -> anyhow::Result<RuntimeConfig> {
    let cfg = site_config()?;
    Ok(runtime.with_overrides(cfg.runtime.worker_threads, cfg.runtime.stack_size))
}

#[folio_runtime::main(server, with = tune_runtime)]
async fn main() -> anyhow::Result<()> {
    let cfg = site_config()?;

    let logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&cfg.logging.level)?)
        .json(cfg.logging.json);
    let _log = match &cfg.logging.directory {
        Some(dir) => logger.path(dir).init()?,
        None => logger.init()?,
    };

    Server::builder().config(cfg).build()?.run().await
}
