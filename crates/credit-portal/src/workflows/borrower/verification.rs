use tokio::task::JoinHandle;

/// Owner of a scheduled verification task. Dropping the handle aborts the task.
#[derive(Debug)]
pub struct VerificationHandle {
    task: JoinHandle<()>,
}

impl VerificationHandle {
    pub fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for VerificationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
