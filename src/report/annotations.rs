use crate::model::{DefectRegistry, Suite, SuiteResult, TestClass, TestContext, TestResult};

/// Defect tracked for the result's method, or an empty string.
pub fn defect_number(context: &TestContext, result: &TestResult) -> String {
    let method = &result.method;
    context
        .configuration
        .defect(&method.class.name, &method.name)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Description declared on the class itself, else the one configured for
/// it on the context, else an empty string.
pub fn class_description(context: &TestContext, class: &TestClass) -> String {
    class
        .description
        .as_deref()
        .or_else(|| context.configuration.description(&class.name))
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Recording of the session the whole context ran in.
pub fn context_video(context: &TestContext) -> String {
    context.video_url.clone().unwrap_or_default()
}

/// Recording of a method that ran in a session of its own.
pub fn method_video(context: &TestContext, result: &TestResult) -> String {
    context
        .method_video_urls
        .get(&result.method.name)
        .cloned()
        .unwrap_or_default()
}

/// Open defects of the suite narrowed to the methods of one suite result.
pub fn open_defect_tests(suite: &Suite, result: &SuiteResult) -> DefectRegistry {
    narrow_registry(suite.open_defects.as_ref(), result, "open")
}

/// Fixed defects of the suite narrowed to the methods of one suite result.
pub fn fixed_defect_tests(suite: &Suite, result: &SuiteResult) -> DefectRegistry {
    narrow_registry(suite.fixed_defects.as_ref(), result, "fixed")
}

fn narrow_registry(
    registry: Option<&DefectRegistry>,
    result: &SuiteResult,
    kind: &str,
) -> DefectRegistry {
    let mut narrowed = DefectRegistry::new();
    let registry = match registry {
        Some(registry) => registry,
        None => {
            debug!("No {} defect registry attached, nothing to narrow", kind);
            return narrowed;
        }
    };
    for method in result.context.all_test_methods() {
        for test_result in registry.results(&method.id) {
            narrowed.add_result(&method.id, test_result.clone());
        }
    }
    narrowed
}
