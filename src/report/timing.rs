use std::collections::HashMap;
use std::ptr;

use crate::model::{InvokedMethod, MethodId, Millis, Suite, TestContext, TestMethod};
use crate::report::classifier::Classify;
use crate::report::Error;

/// Sum of the recorded elapsed time of every result in all six buckets.
///
/// Skipped results count too: the framework records real durations for
/// them.
pub fn aggregate_duration(context: &TestContext) -> Millis {
    context
        .buckets()
        .iter()
        .flat_map(|bucket| bucket.all_results())
        .map(|result| result.duration())
        .sum()
}

/// Earliest invocation date, or the current time for an empty list.
pub fn earliest_start(methods: &[InvokedMethod]) -> Millis {
    methods
        .iter()
        .map(|method| method.date)
        .fold(crate::now!(), Millis::min)
}

/// Resolves when `target` finished. See [`EndTimeIndex::resolve`].
pub fn resolve_end_time(
    suite: &Suite,
    target: &InvokedMethod,
    invocations: &[InvokedMethod],
) -> Result<Millis, Error> {
    EndTimeIndex::build(suite).resolve(target, invocations)
}

/// Where a method was found while indexing a suite. Declaration order is
/// the lookup priority within one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    TestMethod,
    PassedConfiguration,
    FailedConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    pub context: &'a str,
    pub bucket: Bucket,
    pub end_millis: Millis,
}

/// Maps every method of a suite to the first context that holds it.
///
/// Contexts are visited in suite order, and within one context test methods
/// come before passed configurations, then failed configurations. The first
/// hit is kept, so lookups agree with a nested scan in that order.
#[derive(Debug)]
pub struct EndTimeIndex<'a> {
    entries: HashMap<&'a MethodId, Located<'a>>,
}

impl<'a> EndTimeIndex<'a> {
    pub fn build(suite: &'a Suite) -> Self {
        let mut entries: HashMap<&'a MethodId, Located<'a>> = HashMap::new();
        for result in suite.suite_results() {
            let context = &result.context;
            let buckets: [(Bucket, Vec<&'a TestMethod>); 3] = [
                (Bucket::TestMethod, context.all_test_methods().iter().collect()),
                (
                    Bucket::PassedConfiguration,
                    context.passed_configurations.all_methods(),
                ),
                (
                    Bucket::FailedConfiguration,
                    context.failed_configurations.all_methods(),
                ),
            ];
            for (bucket, methods) in buckets.iter() {
                for &method in methods {
                    entries.entry(&method.id).or_insert(Located {
                        context: &context.name,
                        bucket: *bucket,
                        end_millis: context.end_millis,
                    });
                }
            }
        }
        Self { entries }
    }

    pub fn locate(&self, method: &MethodId) -> Option<&Located<'a>> {
        self.entries.get(method)
    }

    /// Resolves when `target` finished.
    ///
    /// `target` is looked up in `invocations` by identity when it is one of
    /// its elements, otherwise by the first entry equal to it. See
    /// [`EndTimeIndex::resolve_at`].
    pub fn resolve(
        &self,
        target: &InvokedMethod,
        invocations: &[InvokedMethod],
    ) -> Result<Millis, Error> {
        let position = invocations
            .iter()
            .position(|m| ptr::eq(m, target))
            .or_else(|| invocations.iter().position(|m| m == target));
        match position {
            Some(position) => self.resolve_at(position, invocations),
            None => self.context_end(target),
        }
    }

    /// Resolves when the invocation at `position` finished.
    ///
    /// `invocations` must already be in chronological order; list order is
    /// trusted and never re-sorted. The next invocation of the same method
    /// after `position` marks its end, even when it carries the same date.
    /// Without one, the end of the context holding the method is used. A
    /// method held by no context is an inconsistent record and yields
    /// [`Error::Consistency`].
    ///
    /// Panics when `position` is out of bounds.
    pub fn resolve_at(
        &self,
        position: usize,
        invocations: &[InvokedMethod],
    ) -> Result<Millis, Error> {
        let target = &invocations[position];
        if let Some(next) = invocations[position + 1..]
            .iter()
            .find(|m| m.method == target.method)
        {
            trace!(
                "End of '{}' resolved from its next invocation at {}",
                target.method,
                next.date
            );
            return Ok(next.date);
        }
        self.context_end(target)
    }

    fn context_end(&self, target: &InvokedMethod) -> Result<Millis, Error> {
        match self.locate(&target.method) {
            Some(located) => {
                trace!(
                    "End of '{}' resolved from context '{}' ({:?})",
                    target.method,
                    located.context,
                    located.bucket
                );
                Ok(located.end_millis)
            }
            None => Err(Error::Consistency {
                method: target.method.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{class, context, method, result};
    use crate::model::{ResultSet, TestResult};

    #[test]
    fn test_aggregate_duration_sums_all_buckets() {
        let class = class("com.acme.ProfileTest", None);
        let m = method("edit", &class);
        let set = |spans: &[(Millis, Millis)]| -> ResultSet {
            spans.iter().map(|(s, e)| result(&m, *s, *e)).collect()
        };
        let context = context("profile", 0, 1_000)
            .passed_tests(set(&[(0, 10), (10, 30)]))
            .failed_tests(set(&[(30, 100)]))
            .skipped_tests(set(&[(100, 101)]))
            .passed_configurations(set(&[(200, 205)]))
            .failed_configurations(set(&[(300, 340)]))
            .skipped_configurations(set(&[(400, 402)]))
            .build()
            .unwrap();

        let expected: Millis = context
            .buckets()
            .iter()
            .flat_map(|b| b.all_results())
            .map(|r: &TestResult| r.end_millis - r.start_millis)
            .sum();
        assert_eq!(aggregate_duration(&context), expected);
        assert_eq!(aggregate_duration(&context), 10 + 20 + 70 + 1 + 5 + 40 + 2);
    }

    #[test]
    fn test_earliest_start() {
        let methods = vec![
            InvokedMethod::new("a", 300),
            InvokedMethod::new("b", 100),
            InvokedMethod::new("c", 200),
        ];
        assert_eq!(earliest_start(&methods), 100);

        let before = crate::now!();
        let start = earliest_start(&[]);
        assert!(start >= before);
    }

    fn suite_with_context() -> (Suite, TestMethod, TestMethod) {
        let class = class("com.acme.OrderTest", None);
        let place = method("place", &class);
        let setup = method("setUp", &class);
        let suite = Suite::new("orders").with_result(
            context("orders", 0, 9_000)
                .test_methods(vec![place.clone()])
                .passed_configurations(vec![result(&setup, 0, 5)])
                .build()
                .unwrap(),
        );
        (suite, place, setup)
    }

    #[test]
    fn test_next_invocation_of_same_method_ends_it() {
        let (suite, place, setup) = suite_with_context();
        let invocations = vec![
            InvokedMethod::new(place.id.clone(), 100),
            InvokedMethod::new(setup.id.clone(), 200),
            InvokedMethod::new(place.id.clone(), 300),
        ];

        assert_eq!(
            resolve_end_time(&suite, &invocations[0], &invocations),
            Ok(300)
        );
    }

    #[test]
    fn test_same_millisecond_reinvocation_ends_it() {
        let (suite, place, _) = suite_with_context();
        let invocations = vec![
            InvokedMethod::new(place.id.clone(), 100),
            InvokedMethod::new(place.id.clone(), 100),
        ];
        let index = EndTimeIndex::build(&suite);

        assert_eq!(
            resolve_end_time(&suite, &invocations[0], &invocations),
            Ok(100)
        );
        assert_eq!(index.resolve_at(0, &invocations), Ok(100));
        assert_eq!(index.resolve_at(1, &invocations), Ok(9_000));
        assert_eq!(
            resolve_end_time(&suite, &invocations[1], &invocations),
            Ok(9_000)
        );
    }

    #[test]
    fn test_list_order_is_trusted_over_dates() {
        let (suite, place, _) = suite_with_context();
        let invocations = vec![
            InvokedMethod::new(place.id.clone(), 500),
            InvokedMethod::new(place.id.clone(), 50),
        ];

        assert_eq!(
            resolve_end_time(&suite, &invocations[0], &invocations),
            Ok(50)
        );
    }

    #[test]
    fn test_falls_back_to_context_end() {
        let (suite, place, setup) = suite_with_context();
        let invocations = vec![
            InvokedMethod::new(setup.id.clone(), 10),
            InvokedMethod::new(place.id.clone(), 100),
        ];

        assert_eq!(
            resolve_end_time(&suite, &invocations[1], &invocations),
            Ok(9_000)
        );
        assert_eq!(
            resolve_end_time(&suite, &invocations[0], &invocations),
            Ok(9_000)
        );
    }

    #[test]
    fn test_unknown_method_is_inconsistent() {
        let (suite, _, _) = suite_with_context();
        let stray = InvokedMethod::new("com.acme.Ghost.boo", 10);

        assert_eq!(
            resolve_end_time(&suite, &stray, &[stray.clone()]),
            Err(Error::Consistency {
                method: "com.acme.Ghost.boo".into()
            })
        );
    }

    #[test]
    fn test_index_prefers_earlier_context_then_bucket_order() {
        let class = class("com.acme.SharedTest", None);
        let shared = method("shared", &class);
        let suite = Suite::new("shared")
            .with_result(
                context("a-first", 0, 1_000)
                    .failed_configurations(vec![result(&shared, 0, 1)])
                    .build()
                    .unwrap(),
            )
            .with_result(
                context("b-second", 0, 2_000)
                    .test_methods(vec![shared.clone()])
                    .build()
                    .unwrap(),
            )
            .with_result(
                context("c-third", 0, 3_000)
                    .test_methods(vec![shared.clone()])
                    .passed_configurations(vec![result(&shared, 0, 1)])
                    .build()
                    .unwrap(),
            );

        let index = EndTimeIndex::build(&suite);
        assert_eq!(
            index.locate(&shared.id),
            Some(&Located {
                context: "a-first",
                bucket: Bucket::FailedConfiguration,
                end_millis: 1_000,
            })
        );
    }

    #[test]
    fn test_index_follows_run_order_not_names() {
        let class = class("com.acme.SharedTest", None);
        let setup = method("setUp", &class);
        let suite = Suite::new("shared")
            .with_result(
                context("zulu", 0, 1_000)
                    .passed_configurations(vec![result(&setup, 0, 1)])
                    .build()
                    .unwrap(),
            )
            .with_result(
                context("alpha", 0, 2_000)
                    .passed_configurations(vec![result(&setup, 0, 1)])
                    .build()
                    .unwrap(),
            );

        assert_eq!(EndTimeIndex::build(&suite).locate(&setup.id).map(|l| l.context), Some("zulu"));
    }
}
