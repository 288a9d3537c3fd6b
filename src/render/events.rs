/// Events emitted around walk generation that renderers can handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Generation started
    Started,

    /// Some steps have been taken
    Progress { done: usize, total: usize },

    /// The walk is complete
    Completed,
}
