/// How an engine call spreads its work.
///
/// `Parallel` fans out on the engine's worker pool and joins before returning;
/// both modes produce the same observable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionMode {
    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel)
    }
}
