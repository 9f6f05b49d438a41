//! Swap session: the shared state of one form instance
//!
//! A [`SwapSession`] owns the form, the receive address and the submission
//! status, and wires them to the external wallet, signing and swap
//! providers. Every part of a presentation layer talks to the same session,
//! so there is no state living outside of it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use crate::{
    form::{FormState, ReceiveAddress},
    swap::{AddressResolver, AssetPair, Direction, SubmissionRequest, SwapExecutor},
    view::FormView,
    wallet::{SigningStatus, WalletConnection},
    Result, SwapConfig, SwapFormError,
};

/// What happened to a submit request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The executor accepted the swap
    Submitted(SubmissionRequest),
    /// No wallet connected; nothing was sent
    WalletDisconnected,
    /// No executor attached yet; nothing was sent
    NoExecutor,
    /// A previous submission has not settled; nothing was sent
    InFlight,
}

#[derive(Debug, Default)]
struct SessionState {
    form: FormState,
    address: ReceiveAddress,
    submitting: bool,
    last_error: Option<String>,
}

/// Releases the in-flight flag when a submission settles or is dropped.
///
/// While `previous` is still set the swap is not known to have gone
/// through, so the pre-submit form is put back unless it was edited since.
struct PendingSubmit<'a> {
    state: &'a Mutex<SessionState>,
    previous: Option<FormState>,
    cleared: FormState,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        state.submitting = false;
        if let Some(previous) = self.previous.take() {
            if state.form == self.cleared {
                state.form = previous;
            }
        }
    }
}

pub struct SwapSession {
    config: SwapConfig,
    assets: AssetPair,
    wallet: Arc<dyn WalletConnection>,
    signing: Arc<dyn SigningStatus>,
    executor: Mutex<Option<Arc<dyn SwapExecutor>>>,
    resolver: Mutex<Option<Arc<dyn AddressResolver>>>,
    state: Mutex<SessionState>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SwapSession {
    /// Create a session with no executor or address resolver attached
    pub fn new(
        config: SwapConfig,
        wallet: Arc<dyn WalletConnection>,
        signing: Arc<dyn SigningStatus>,
    ) -> Self {
        let assets = config.asset_pair();
        Self {
            config,
            assets,
            wallet,
            signing,
            executor: Mutex::new(None),
            resolver: Mutex::new(None),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn with_executor(self, executor: Arc<dyn SwapExecutor>) -> Self {
        self.attach_executor(Some(executor));
        self
    }

    pub fn with_address_resolver(self, resolver: Arc<dyn AddressResolver>) -> Self {
        self.attach_address_resolver(Some(resolver));
        self
    }

    /// Replace the swap executor handle; `None` detaches it
    pub fn attach_executor(&self, executor: Option<Arc<dyn SwapExecutor>>) {
        *lock(&self.executor) = executor;
    }

    /// Replace the address resolver; any fetch still running is dropped
    pub fn attach_address_resolver(&self, resolver: Option<Arc<dyn AddressResolver>>) {
        *lock(&self.resolver) = resolver;
        lock(&self.state).address.invalidate();
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Snapshot of the form
    pub fn form(&self) -> FormState {
        lock(&self.state).form.clone()
    }

    pub fn receive_address(&self) -> Option<String> {
        lock(&self.state).address.value().map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.state).submitting
    }

    /// Last swap or address error, for display
    pub fn last_error(&self) -> Option<String> {
        lock(&self.state).last_error.clone()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.is_connected()
    }

    /// Radio control changed
    pub fn select_direction(&self, direction: Direction) {
        lock(&self.state).form.select(direction);
    }

    /// User typed into the source field of `direction`
    pub fn edit_amount(&self, direction: Direction, raw: &str) {
        lock(&self.state)
            .form
            .on_edit(direction, raw, self.config.fee_percent);
    }

    /// User typed into the receive address field
    pub fn set_receive_address(&self, address: impl Into<String>) {
        lock(&self.state).address.set_manual(address);
    }

    /// Connect button clicked
    pub async fn connect_wallet(&self) -> Result<()> {
        self.wallet.connect().await.map_err(|e| {
            error!("Wallet connection failed: {}", e);
            e
        })?;
        info!("Wallet connected");
        Ok(())
    }

    /// Fill the receive address from the signer.
    ///
    /// Call whenever the signing status or the resolver changes. Returns
    /// `true` if an address was written. A fetch superseded by a later
    /// call never writes.
    pub async fn refresh_receive_address(&self) -> Result<bool> {
        let resolver = lock(&self.resolver).clone();
        let resolver = match resolver {
            Some(resolver) if self.signing.is_signed() => resolver,
            _ => {
                lock(&self.state).address.invalidate();
                return Ok(false);
            }
        };

        let ticket = lock(&self.state).address.begin_fetch();
        debug!("Fetching receive address");

        let fetched = resolver.get_address().await;
        let mut state = lock(&self.state);
        match fetched {
            Ok(address) => {
                if state.address.complete(ticket, address) {
                    debug!("Receive address updated");
                    Ok(true)
                } else {
                    warn!("Discarding superseded receive address");
                    Ok(false)
                }
            }
            Err(e) => {
                error!("Failed to resolve receive address: {}", e);
                if state.address.is_current(ticket) {
                    state.last_error = Some(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Swap button clicked.
    ///
    /// The form is cleared as soon as the request is handed to the
    /// executor. If the swap fails, or this future is dropped before the
    /// executor answers, the previous amounts are put back unless the user
    /// has edited the form in the meantime. The in-flight flag is released
    /// either way.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        if !self.wallet.is_connected() {
            warn!("Swap requested without a connected wallet");
            return Ok(SubmitOutcome::WalletDisconnected);
        }
        let executor = match lock(&self.executor).clone() {
            Some(executor) => executor,
            None => {
                debug!("No swap executor attached, ignoring submit");
                return Ok(SubmitOutcome::NoExecutor);
            }
        };

        let (request, previous, cleared) = {
            let mut state = lock(&self.state);
            if state.submitting {
                warn!("Swap already in flight, ignoring submit");
                return Ok(SubmitOutcome::InFlight);
            }
            let request = SubmissionRequest::from_form(
                &self.assets,
                state.form.direction(),
                state.form.amounts(),
                state.address.value(),
            )?;
            let previous = state.form.clone();
            state.form.clear(self.config.fee_percent);
            state.submitting = true;
            state.last_error = None;
            (request, previous, state.form.clone())
        };

        info!("Submitting swap: {}", request);
        let mut pending = PendingSubmit {
            state: &self.state,
            previous: Some(previous),
            cleared,
        };
        let result = executor.swap(&request).await;

        match result {
            Ok(()) => {
                pending.previous = None;
                drop(pending);
                info!("Swap submitted: {}", request);
                Ok(SubmitOutcome::Submitted(request))
            }
            Err(e) => {
                error!("Swap execution failed: {}", e);
                drop(pending);
                lock(&self.state).last_error = Some(e.to_string());
                Err(SwapFormError::SwapFailed(e.to_string()))
            }
        }
    }

    /// Everything a presentation layer needs to draw the form
    pub fn view(&self) -> FormView {
        let connected = self.wallet.is_connected();
        let state = lock(&self.state);
        FormView::new(
            &state.form,
            state.address.value(),
            connected,
            state.submitting,
            state.last_error.as_deref(),
        )
    }
}
