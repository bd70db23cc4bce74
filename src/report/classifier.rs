use crate::model::{Millis, TestResult, Throwable, ThrowableKind};
use crate::report::text::{comma_separate, render_arguments, strip_thread_name};

/// Derived facts about a single result, as shown next to it in a report.
pub trait Classify {
    fn has_arguments(&self) -> bool;
    fn arguments_text(&self) -> String;
    fn has_dependent_groups(&self) -> bool;
    fn dependent_groups_text(&self) -> String;
    fn has_dependent_methods(&self) -> bool;
    fn dependent_methods_text(&self) -> String;
    /// Whether the result carries the framework's skip signal, as opposed
    /// to any other failure.
    fn was_skipped_deliberately(&self) -> bool;
    fn skip_reason(&self) -> String;
    fn duration(&self) -> Millis;
    fn thread_name(&self) -> &str;
    fn test_output(&self) -> &[String];
}

impl Classify for TestResult {
    fn has_arguments(&self) -> bool {
        !self.parameters.is_empty()
    }

    fn arguments_text(&self) -> String {
        render_arguments(&self.parameters)
    }

    fn has_dependent_groups(&self) -> bool {
        !self.method.groups_depended_upon.is_empty()
    }

    fn dependent_groups_text(&self) -> String {
        comma_separate(&self.method.groups_depended_upon)
    }

    fn has_dependent_methods(&self) -> bool {
        !self.method.methods_depended_upon.is_empty()
    }

    fn dependent_methods_text(&self) -> String {
        comma_separate(&self.method.methods_depended_upon)
    }

    fn was_skipped_deliberately(&self) -> bool {
        self.throwable
            .as_ref()
            .map_or(false, |t| t.kind == ThrowableKind::Skip)
    }

    fn skip_reason(&self) -> String {
        match &self.throwable {
            Some(t) if t.kind == ThrowableKind::Skip => t.message.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    #[inline]
    fn duration(&self) -> Millis {
        self.end_millis - self.start_millis
    }

    fn thread_name(&self) -> &str {
        strip_thread_name(&self.thread_id)
    }

    #[inline]
    fn test_output(&self) -> &[String] {
        &self.output
    }
}

/// Causes of `error`, nearest first, not including `error` itself.
pub fn cause_chain(error: &Throwable) -> Vec<&Throwable> {
    let mut causes = Vec::new();
    let mut next = error;
    while let Some(cause) = next.cause.as_deref() {
        causes.push(cause);
        next = cause;
    }
    causes
}
