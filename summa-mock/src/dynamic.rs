use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use summa_core::{SummaError, SummaryAddress, SummaryReader};

/// Instruction for how a read should behave for a given address.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(SummaError),
}

type Series = (Vec<i64>, Vec<f64>);

#[derive(Default)]
struct InternalState {
    rules: HashMap<SummaryAddress, MockBehavior<Series>>,
    reads: HashMap<SummaryAddress, usize>,
}

fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Serve `time_steps`/`values` for `address`.
    pub fn set_series(&self, address: SummaryAddress, time_steps: Vec<i64>, values: Vec<f64>) {
        self.set_behavior(address, MockBehavior::Return((time_steps, values)));
    }

    /// Set the behavior for reads of `address`.
    pub fn set_behavior(&self, address: SummaryAddress, behavior: MockBehavior<Series>) {
        lock(&self.state).rules.insert(address, behavior);
    }

    /// Stop serving `address`.
    pub fn remove(&self, address: &SummaryAddress) {
        lock(&self.state).rules.remove(address);
    }

    /// Number of series reads issued for `address` so far.
    #[must_use]
    pub fn read_count(&self, address: &SummaryAddress) -> usize {
        lock(&self.state).reads.get(address).copied().unwrap_or(0)
    }

    /// Clear all configured behaviors and read counters.
    pub fn clear_all_behaviors(&self) {
        let mut guard = lock(&self.state);
        guard.rules.clear();
        guard.reads.clear();
    }
}

/// A reader that defers all behavior to an external controller.
pub struct DynamicMockReader {
    name: String,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockReader {
    /// Create a new dynamic mock reader and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: impl Into<String>,
    ) -> (Arc<dyn SummaryReader>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name: name.into(),
            state,
        });
        (me as Arc<dyn SummaryReader>, controller)
    }
}

impl SummaryReader for DynamicMockReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_address(&self, address: &SummaryAddress) -> bool {
        lock(&self.state).rules.contains_key(address)
    }

    fn time_steps(&self, address: &SummaryAddress) -> Result<Vec<i64>, SummaError> {
        self.series(address).map(|(t, _)| t)
    }

    fn values(&self, address: &SummaryAddress) -> Result<Vec<f64>, SummaError> {
        self.series(address).map(|(_, v)| v)
    }

    fn all_addresses(&self) -> BTreeSet<SummaryAddress> {
        lock(&self.state).rules.keys().cloned().collect()
    }

    fn series(&self, address: &SummaryAddress) -> Result<Series, SummaError> {
        let behavior = {
            let mut guard = lock(&self.state);
            *guard.reads.entry(address.clone()).or_insert(0) += 1;
            guard.rules.get(address).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(SummaError::not_found(format!("{address} in {}", self.name))),
        }
    }
}
