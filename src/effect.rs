//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch both forecast resources for cycle `seq`
    FetchForecast { seq: u64 },
}
