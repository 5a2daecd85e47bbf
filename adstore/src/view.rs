use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;

use crate::consultation::with_consultation;
use crate::error::LoadError;
use crate::models::{AdPackage, PlanQuery};
use crate::payload::parse_plans;
use crate::transport::PlanTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    InFlight,
}

/// State of the packages page.
#[derive(Debug, Clone, PartialEq)]
pub struct PackagesState {
    pub packages: Vec<AdPackage>,
    pub loading: bool,
    pub error: Option<String>,
    phase: LoadPhase,
}

impl Default for PackagesState {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            loading: true,
            error: None,
            phase: LoadPhase::Idle,
        }
    }
}

impl PackagesState {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Moves to `InFlight`. Returns false, changing nothing, when a load is
    /// already running.
    pub fn begin_load(&mut self) -> bool {
        if self.phase == LoadPhase::InFlight {
            return false;
        }
        self.phase = LoadPhase::InFlight;
        self.loading = true;
        self.error = None;
        true
    }

    /// Applies the outcome of the running load and returns to `Idle`.
    pub fn finish_load(&mut self, outcome: Result<Vec<AdPackage>, LoadError>) {
        match outcome {
            Ok(packages) => {
                self.packages = packages;
                self.error = None;
            }
            Err(e) => {
                self.packages.clear();
                self.error = Some(e.user_message().to_string());
            }
        }
        self.loading = false;
        self.phase = LoadPhase::Idle;
    }
}

/// Handle to the page state owned by a UI runtime.
///
/// `update` returns `None` once the page has been torn down, in which case
/// the closure is not run.
pub trait ViewState {
    fn update<R>(&self, f: impl FnOnce(&mut PackagesState) -> R) -> Option<R>;
}

/// Page state held outside any UI runtime.
#[derive(Clone)]
pub struct LocalView {
    state: Rc<RefCell<PackagesState>>,
    alive: Rc<Cell<bool>>,
}

impl LocalView {
    pub fn new() -> Self {
        Self {
            state: Rc::default(),
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn snapshot(&self) -> PackagesState {
        self.state.borrow().clone()
    }

    /// Tears the page down. Later updates are dropped.
    pub fn unmount(&self) {
        self.alive.set(false);
    }
}

impl Default for LocalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState for LocalView {
    fn update<R>(&self, f: impl FnOnce(&mut PackagesState) -> R) -> Option<R> {
        if !self.alive.get() {
            return None;
        }
        Some(f(&mut self.state.borrow_mut()))
    }
}

/// Fetches active plans and replaces the page's package list.
///
/// A call made while another load is in flight returns immediately.
pub async fn load_packages<S, T>(view: &S, transport: &T)
where
    S: ViewState,
    T: PlanTransport + ?Sized,
{
    if view.update(|state| state.begin_load()) != Some(true) {
        return;
    }

    let outcome = fetch_packages(transport).await;
    match &outcome {
        Ok(packages) => tracing::info!("Loaded {} packages", packages.len()),
        Err(e) => tracing::warn!("Failed to load packages: {}", e),
    }

    if view.update(|state| state.finish_load(outcome)).is_none() {
        tracing::debug!("Packages page gone before load finished, dropping result");
    }
}

async fn fetch_packages<T>(transport: &T) -> Result<Vec<AdPackage>, LoadError>
where
    T: PlanTransport + ?Sized,
{
    let payload = transport.fetch_plans(PlanQuery::active()).await?;
    let fetched = parse_plans(payload)?;
    Ok(with_consultation(fetched, Utc::now()))
}

/// Application navigation.
pub trait Navigator {
    fn goto(&self, path: &str);
}

pub fn checkout_path(id: &str) -> String {
    format!("/checkout/{}", id)
}

/// Sends the buyer to checkout for `id`. Nothing happens without an id.
pub fn select_package<N: Navigator + ?Sized>(navigator: &N, id: Option<&str>) {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return;
    };
    navigator.goto(&checkout_path(id));
}
