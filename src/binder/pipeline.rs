use crate::binder::sink::{AppliedUpdate, UpdateSink, UpdateTarget};
use crate::endpoint::endpoint_model::EndpointKind;
use crate::endpoint::synth::synthesize;
use crate::form::reader::FormSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Some control failed validation; nothing was touched.
    Invalid,
    /// The snapshot lacks a key the endpoint needs; nothing was touched.
    Unshaped,
    Applied(AppliedUpdate),
}

/// Second half of an update cycle: shape-guard, synthesize, apply.
///
/// Takes the snapshot already read by the caller (`None` when the form was
/// invalid) so reading and writing can borrow the page separately.
pub fn run_update<T: UpdateTarget + ?Sized>(
    snapshot: Option<&FormSnapshot>,
    kind: EndpointKind,
    sink: &UpdateSink,
    target: &mut T,
    trigger: &str,
    refresh_preview: bool,
) -> PipelineOutcome {
    let Some(snapshot) = snapshot else {
        return PipelineOutcome::Invalid;
    };
    let Some(descriptor) = synthesize(kind, snapshot) else {
        return PipelineOutcome::Unshaped;
    };

    PipelineOutcome::Applied(sink.apply(target, &descriptor, trigger, refresh_preview))
}
