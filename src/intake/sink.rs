/// Outbound boundary for finalized quote snapshots.
///
/// `accept` is invoked exactly once per successful validation pass. The
/// engine treats the call as fire-and-forget: persistence, transmission, and
/// failure handling belong to the host, and the pipeline never observes an
/// outcome.
pub trait SubmissionSink<S>: Send + Sync {
    fn accept(&self, snapshot: S);
}
