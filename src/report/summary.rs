use serde_derive::Serialize;

use crate::configuration::settings::Settings;
use crate::model::{Millis, Suite, SuiteResult, TestContext, TestResult, Throwable};
use crate::report::annotations::{
    class_description, context_video, defect_number, fixed_defect_tests, method_video,
    open_defect_tests,
};
use crate::report::classifier::{cause_chain, Classify};
use crate::report::groups::{groups_of, has_groups, results_by_group};
use crate::report::text::{escape_display, escape_plain, format_percentage, strip_thread_name};
use crate::report::timing::{aggregate_duration, earliest_start, EndTimeIndex};
use crate::report::Error;
use crate::time::format::{format_duration, format_duration_between, format_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteSummary {
    pub name: String,
    pub start: String,
    pub has_groups: bool,
    pub groups: Vec<GroupSummary>,
    pub timeline: Vec<InvocationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub results: Vec<ContextSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSummary {
    pub name: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub duration_millis: Millis,
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Absent when the context ran no tests.
    pub pass_rate: Option<String>,
    pub video: Option<String>,
    pub open_defects: usize,
    pub fixed_defects: usize,
    pub methods: Vec<MethodSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSummary {
    pub name: String,
    pub class: String,
    pub description: Option<String>,
    pub status: Status,
    pub configuration: bool,
    pub duration: String,
    pub thread: String,
    pub arguments: Option<String>,
    pub depends_on_groups: Option<String>,
    pub depends_on_methods: Option<String>,
    pub skip_reason: Option<String>,
    pub defect: Option<String>,
    pub video: Option<String>,
    pub message: Option<String>,
    pub causes: Vec<String>,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationSummary {
    pub method: String,
    pub thread: String,
    pub start: String,
    pub duration: String,
}

/// Builds the renderable view of one suite, restricted to `only_groups`
/// when that list is not empty.
pub fn summarize(
    suite: &Suite,
    settings: &Settings,
    only_groups: &[String],
) -> Result<SuiteSummary, Error> {
    let known = groups_of(suite);
    for group in only_groups {
        if !known.contains(group) {
            warn!("Group '{}' not found in suite '{}'", group, suite.name);
        }
    }

    let mut groups = Vec::new();
    for (name, results) in results_by_group(suite) {
        if !only_groups.is_empty() && !only_groups.contains(&name) {
            continue;
        }
        let results = results
            .into_iter()
            .map(|result| summarize_result(suite, result, settings))
            .collect::<Result<Vec<_>, Error>>()?;
        groups.push(GroupSummary {
            name: escape_plain(&name),
            results,
        });
    }

    let index = EndTimeIndex::build(suite);
    let mut timeline = Vec::with_capacity(suite.invoked_methods.len());
    for (position, invocation) in suite.invoked_methods.iter().enumerate() {
        let end = index.resolve_at(position, &suite.invoked_methods)?;
        timeline.push(InvocationSummary {
            method: escape_plain(invocation.method.as_str()),
            thread: escape_plain(strip_thread_name(&invocation.thread_id)),
            start: format_timestamp(invocation.date),
            duration: format_duration_between(invocation.date, end),
        });
    }

    Ok(SuiteSummary {
        name: escape_plain(&suite.name),
        start: format_timestamp(earliest_start(&suite.invoked_methods)),
        has_groups: has_groups(suite),
        groups,
        timeline,
    })
}

fn summarize_result(
    suite: &Suite,
    result: &SuiteResult,
    settings: &Settings,
) -> Result<ContextSummary, Error> {
    let context = &result.context;
    let total = context.total_tests();
    let pass_rate = if total > 0 {
        Some(format_percentage(context.passed_tests.len(), total)?)
    } else {
        None
    };

    let mut buckets = vec![
        (&context.failed_configurations, Status::Failed, true),
        (&context.failed_tests, Status::Failed, false),
        (&context.skipped_configurations, Status::Skipped, true),
        (&context.skipped_tests, Status::Skipped, false),
    ];
    if settings.show_passed {
        buckets.push((&context.passed_tests, Status::Passed, false));
    }
    let methods = buckets
        .into_iter()
        .flat_map(|(bucket, status, configuration)| {
            bucket
                .all_results()
                .iter()
                .map(move |test_result| (test_result, status, configuration))
        })
        .map(|(test_result, status, configuration)| {
            summarize_method(context, test_result, status, configuration, settings)
        })
        .collect();

    let duration_millis = aggregate_duration(context);
    Ok(ContextSummary {
        name: escape_plain(&context.name),
        start: format_timestamp(context.start_millis),
        end: format_timestamp(context.end_millis),
        duration: format_duration(duration_millis),
        duration_millis,
        passed: context.passed_tests.len(),
        skipped: context.skipped_tests.len(),
        failed: context.failed_tests.len(),
        pass_rate,
        video: non_empty(context_video(context)).map(|v| escape_plain(&v)),
        open_defects: open_defect_tests(suite, result).len(),
        fixed_defects: fixed_defect_tests(suite, result).len(),
        methods,
    })
}

fn summarize_method(
    context: &TestContext,
    result: &TestResult,
    status: Status,
    configuration: bool,
    settings: &Settings,
) -> MethodSummary {
    let text = |raw: &str| display_text(settings, raw);
    let method = &result.method;
    MethodSummary {
        name: escape_plain(&method.name),
        class: escape_plain(&method.class.name),
        description: non_empty(class_description(context, &method.class)).map(|d| text(&d)),
        status,
        configuration,
        duration: format_duration(result.duration()),
        thread: escape_plain(result.thread_name()),
        arguments: when(result.has_arguments(), || text(&result.arguments_text())),
        depends_on_groups: when(result.has_dependent_groups(), || {
            escape_plain(&result.dependent_groups_text())
        }),
        depends_on_methods: when(result.has_dependent_methods(), || {
            escape_plain(&result.dependent_methods_text())
        }),
        skip_reason: when(result.was_skipped_deliberately(), || {
            text(&result.skip_reason())
        }),
        defect: non_empty(defect_number(context, result)).map(|d| escape_plain(&d)),
        video: non_empty(method_video(context, result)).map(|v| escape_plain(&v)),
        message: result
            .throwable
            .as_ref()
            .and_then(|t| t.message.as_deref())
            .map(text),
        causes: result
            .throwable
            .as_ref()
            .map(|t| cause_chain(t).into_iter().map(|c| text(&describe(c))).collect())
            .unwrap_or_default(),
        output: result.test_output().iter().map(|line| text(line)).collect(),
    }
}

fn display_text(settings: &Settings, raw: &str) -> String {
    if settings.escape_output {
        escape_display(raw)
    } else {
        raw.to_owned()
    }
}

fn describe(throwable: &Throwable) -> String {
    match &throwable.message {
        Some(message) => format!("{}: {}", throwable.class_name, message),
        None => throwable.class_name.clone(),
    }
}

fn when<F: FnOnce() -> String>(condition: bool, value: F) -> Option<String> {
    if condition {
        Some(value())
    } else {
        None
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
