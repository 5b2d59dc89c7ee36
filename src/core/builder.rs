use std::sync::Arc;

use super::config::SubjectConfig;
use super::subject::Subject;
use crate::capabilities::OutputSink;
use crate::subscribers::ObserverHandle;

/// Builder for constructing a [`Subject`] with optional collaborators.
pub struct SubjectBuilder<S> {
    cfg: SubjectConfig,
    sink: Option<Arc<dyn OutputSink>>,
    observers: Vec<ObserverHandle<S>>,
}

impl<S: Send + Sync + 'static> SubjectBuilder<S> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: SubjectConfig) -> Self {
        Self {
            cfg,
            sink: None,
            observers: Vec::new(),
        }
    }

    /// Sets the sink used to report attach/detach outcomes.
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the initial observers, attached in the given order.
    ///
    /// Duplicates are collapsed exactly like repeated `attach` calls.
    pub fn with_observers(mut self, observers: Vec<ObserverHandle<S>>) -> Self {
        self.observers = observers;
        self
    }

    /// Builds the subject around `initial` state and returns it as a shared handle.
    ///
    /// The `Arc` lets observers keep a reference to the subject and attach or
    /// detach from inside `receive`.
    pub fn build(self, initial: S) -> Arc<Subject<S>> {
        let subject = Subject::with_parts(self.cfg, self.sink, initial);
        for h in self.observers {
            subject.attach(h);
        }
        Arc::new(subject)
    }
}
