use super::*;

pub(crate) fn class(name: &str, group: Option<&str>) -> TestClass {
    TestClass::builder()
        .name(name)
        .group(group.map(str::to_owned))
        .build()
        .unwrap()
}

/// Method whose id is `<class>.<name>`.
pub(crate) fn method(name: &str, class: &TestClass) -> TestMethod {
    TestMethod::builder()
        .id(format!("{}.{}", class.name, name))
        .name(name)
        .class(class.clone())
        .build()
        .unwrap()
}

pub(crate) fn result(method: &TestMethod, start: Millis, end: Millis) -> TestResult {
    TestResult::builder()
        .method(method.clone())
        .start_millis(start)
        .end_millis(end)
        .build()
        .unwrap()
}

pub(crate) fn context(name: &str, start: Millis, end: Millis) -> TestContextBuilder {
    let mut builder = TestContext::builder();
    builder.name(name).start_millis(start).end_millis(end);
    builder
}
