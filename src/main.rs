use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod api;
mod chaincode;
mod config;
mod http;
mod ledger;
mod logger;
mod server;

use chaincode::{Chaincode, HealthRecords};

/// Command line: `health_records_chaincode [CONFIG_PATH] [--print-config]`
struct Args {
    config_path: String,
    print_config: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = Self {
            config_path: config::DEFAULT_CONFIG_PATH.to_string(),
            print_config: false,
        };
        for arg in std::env::args().skip(1) {
            if arg == "--print-config" {
                args.print_config = true;
            } else {
                args.config_path = arg;
            }
        }
        args
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = config::Config::load_from(&args.config_path)?;

    if args.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    logger::init(&cfg)?;

    // Worker count from config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr, server::DEFAULT_BACKLOG)?;

    let chaincode: Arc<dyn Chaincode> = Arc::new(HealthRecords::new());
    let state = Arc::new(config::AppState::new(&cfg, chaincode));

    let init = state.ledger.init(state.chaincode.as_ref()).await;
    logger::log_chaincode_init(
        &cfg.chaincode.name,
        state.ledger.channel(),
        &init.tx_id,
        &init.response,
    );
    state.set_ready(init.response.is_success());

    server::start_signal_handler(Arc::clone(&state.shutdown_signal))?;
    logger::log_server_start(&addr, &cfg);

    let active_connections = Arc::new(AtomicUsize::new(0));

    // Connections are served with spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, active_connections))
        .await
}
