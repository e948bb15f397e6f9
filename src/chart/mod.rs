//! Chart lifecycle: an injected renderer capability plus a session manager
//! that enforces the single-live-handle discipline

use crate::processing::skills::SkillFrequency;

pub mod console;

pub use console::ConsoleChartRenderer;

/// Opaque resource representing one rendered visualization. Handles are
/// issued by a renderer and owned by the session; no other component keeps
/// one across calls.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
}

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub max_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Skills Count".to_string(),
            max_width: 40,
        }
    }
}

/// Rendering capability consumed by the session manager. Implementations
/// draw a labeled dataset and hand back a disposable handle; this crate does
/// not care how the drawing happens.
pub trait ChartRenderer: Send {
    fn create(&mut self, labels: &[String], values: &[usize], config: &ChartConfig) -> ChartHandle;
    fn dispose(&mut self, handle: ChartHandle);
}

/// Owns at most one live chart handle for the dashboard. The previous handle
/// is always disposed before a replacement is created; disposing when
/// nothing is live is a no-op.
pub struct ChartSession {
    renderer: Box<dyn ChartRenderer>,
    live: Option<ChartHandle>,
}

impl ChartSession {
    pub fn new(renderer: Box<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            live: None,
        }
    }

    /// Render a distribution, replacing any live chart. Labels and values
    /// are passed in the aggregator's emission order.
    pub fn render(&mut self, freq: &SkillFrequency, config: &ChartConfig) -> &ChartHandle {
        self.clear();
        let handle = self
            .renderer
            .create(&freq.labels(), &freq.values(), config);
        self.live.insert(handle)
    }

    /// Dispose the live handle, if any. Idempotent.
    pub fn clear(&mut self) {
        if let Some(handle) = self.live.take() {
            self.renderer.dispose(handle);
        }
    }

    pub fn live(&self) -> Option<&ChartHandle> {
        self.live.as_ref()
    }
}

impl Drop for ChartSession {
    fn drop(&mut self) {
        self.clear();
    }
}
