use btc_wbtc_swap_form::{
    swap::{AddressResolver, SubmissionRequest, SwapExecutor},
    wallet::{SigningStatus, WalletConnection},
    Direction, SubmitOutcome, SwapConfig, SwapSession,
};

use anyhow::Result;
use async_trait::async_trait;
use std::{
    env,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tracing::{error, info, warn};

// Configuration constants
const CONFIG_ENV: &str = "SWAP_FORM_CONFIG";
const DEMO_ADDRESS: &str = "bcrt1qdemo0receive0address0000000000000000000";

/// Wallet that connects as soon as it is asked to
#[derive(Default)]
struct LocalWallet {
    connected: AtomicBool,
}

#[async_trait]
impl WalletConnection for LocalWallet {
    async fn connect(&self) -> btc_wbtc_swap_form::Result<()> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

struct AlwaysSigned;

impl SigningStatus for AlwaysSigned {
    fn is_signed(&self) -> bool {
        true
    }
}

/// Executor that only logs what it would send
struct DryRunExecutor;

#[async_trait]
impl SwapExecutor for DryRunExecutor {
    async fn swap(&self, request: &SubmissionRequest) -> btc_wbtc_swap_form::Result<()> {
        info!("Dry run, would send: {}", serde_json::to_string(request)?);
        Ok(())
    }
}

struct DemoAddress;

#[async_trait]
impl AddressResolver for DemoAddress {
    async fn get_address(&self) -> btc_wbtc_swap_form::Result<String> {
        Ok(DEMO_ADDRESS.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    info!("Starting swap form v{}", btc_wbtc_swap_form::VERSION);

    let config = match env::var(CONFIG_ENV) {
        Ok(path) => SwapConfig::from_file(&path)?,
        Err(_) => SwapConfig::default(),
    };

    let mut args = env::args().skip(1);
    let direction: Direction = match args.next() {
        Some(label) => label.parse()?,
        None => Direction::default(),
    };
    let amount = args.next().unwrap_or_else(|| "1".to_string());

    let session = SwapSession::new(config, Arc::new(LocalWallet::default()), Arc::new(AlwaysSigned))
        .with_executor(Arc::new(DryRunExecutor))
        .with_address_resolver(Arc::new(DemoAddress));

    session.connect_wallet().await?;
    session.refresh_receive_address().await?;
    session.select_direction(direction);
    session.edit_amount(direction, &amount);

    println!("{}", serde_json::to_string_pretty(&session.view())?);

    match session.submit().await {
        Ok(SubmitOutcome::Submitted(request)) => info!("Swap submitted: {}", request),
        Ok(outcome) => warn!("Swap not submitted: {:?}", outcome),
        Err(e) => {
            error!("Swap failed: {}", e);
            return Err(e.into());
        }
    }

    info!("Swap form demo completed");
    Ok(())
}
