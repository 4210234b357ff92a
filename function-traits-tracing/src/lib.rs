#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Structured tracing events for function-traits descriptors.
//!
//! This crate turns the compile-time decomposition of a descriptor into a
//! `tracing` event, so that code generating bindings or dispatch tables can
//! log what it was instantiated with.
//!
//! # How It Works
//!
//! [`TraitsTracer::trace`] emits one `DEBUG` event on the
//! `function_traits` target. Every constant of
//! [`FunctionTraits`](function_traits::FunctionTraits) becomes a field, so
//! subscribers can filter and format them like any other event. Nothing is
//! emitted unless a subscriber is interested.
//!
//! # Quick Start
//!
//! ```
//! use function_traits_tracing::trace_function_traits;
//!
//! tracing_subscriber::fmt()
//!     .with_max_level(tracing::Level::DEBUG)
//!     .init();
//!
//! type Callback = extern "C-unwind" fn(i32, *const u8) -> bool;
//!
//! trace_function_traits::<Callback>("on_message");
//! ```
//!
//! Output:
//! ```text
//! DEBUG function_traits: descriptor layout label="on_message" descriptor=extern "C-unwind" fn(i32, *const u8) -> bool ...
//! ```
//!
//! ## Manual Attachment
//!
//! To trace a value-level [`Traits`] in the middle of an expression:
//!
//! ```
//! use function_traits::prelude::*;
//! use function_traits_tracing::TraitsExt;
//!
//! let add = |a: u32, b: u32| a + b;
//! let arity = of_closure::<(u32, u32), _>(&add).trace("add").arity();
//! assert_eq!(arity, 2);
//! ```
//!
//! # Environment Variables
//!
//! - `FUNCTION_TRAITS_TRACING` - Comma-separated options:
//!   - `short-names` - Strip module paths from type names
//!   - `verbose` - Also emit the full numbered report as a `TRACE` event

use std::{fmt, sync::OnceLock};

use function_traits::{
    FunctionTraits, Traits,
    iterate::{ArgVisitor, for_each_parameter},
    type_name::{ShortTypeName, type_name},
};

/// The target every event of this crate is emitted on.
pub const TARGET: &str = "function_traits";

/// Emits the decomposition of descriptors as tracing events.
///
/// # Examples
///
/// Basic usage with default settings:
///
/// ```
/// use function_traits_tracing::TraitsTracer;
///
/// TraitsTracer::new().trace::<fn(u8) -> u16>("widen");
/// ```
///
/// Custom configuration:
///
/// ```
/// use function_traits_tracing::TraitsTracer;
///
/// let tracer = TraitsTracer {
///     short_names: true,
///     verbose: false,
/// };
///
/// tracer.trace::<unsafe extern "C" fn(*const u8, ...) -> i32>("printf");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TraitsTracer {
    /// Whether type names are written without module paths.
    pub short_names: bool,
    /// Whether to also emit the full [`Traits`] report at `TRACE` level.
    pub verbose: bool,
}

#[derive(Debug)]
struct FunctionTraitsTracingEnvOptions {
    short_names: bool,
    verbose: bool,
}

impl FunctionTraitsTracingEnvOptions {
    fn get() -> &'static Self {
        static FUNCTION_TRAITS_TRACING_FLAGS: OnceLock<FunctionTraitsTracingEnvOptions> =
            OnceLock::new();

        FUNCTION_TRAITS_TRACING_FLAGS.get_or_init(|| {
            let mut short_names = false;
            let mut verbose = false;

            if let Some(var) = std::env::var_os("FUNCTION_TRAITS_TRACING") {
                for v in var.to_string_lossy().split(',') {
                    let v = v.trim();
                    if v.eq_ignore_ascii_case("short-names") {
                        short_names = true;
                    } else if v.eq_ignore_ascii_case("verbose") {
                        verbose = true;
                    }
                }
            }

            FunctionTraitsTracingEnvOptions {
                short_names,
                verbose,
            }
        })
    }
}

impl TraitsTracer {
    /// Creates a new [`TraitsTracer`] with default settings.
    ///
    /// Configuration is controlled by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FUNCTION_TRAITS_TRACING` - Comma-separated options:
    ///   - `short-names` - Strip module paths from type names
    ///   - `verbose` - Also emit the full numbered report as a `TRACE` event
    pub fn new() -> Self {
        let env_options = FunctionTraitsTracingEnvOptions::get();

        Self {
            short_names: env_options.short_names,
            verbose: env_options.verbose,
        }
    }

    /// Emits the decomposition of `F`, tagged with `label`.
    pub fn trace<F: FunctionTraits>(&self, label: &str) {
        if !tracing::enabled!(target: TARGET, tracing::Level::DEBUG) {
            return;
        }

        let names = TypeNames {
            short: self.short_names,
        };
        let traits = Traits::<F>::new();

        tracing::debug!(
            target: TARGET,
            label,
            descriptor = %names.of::<F>(),
            signature = %traits.signature(),
            classification = %traits.classification(),
            calling_convention = %traits.calling_convention(),
            return_type = %names.of::<F::Return>(),
            parameters = %Parameters::<F>::new(names),
            arity = traits.arity(),
            variadic = traits.is_variadic(),
            noexcept = traits.is_noexcept(),
            unsafe_ = traits.is_unsafe(),
            member = traits.is_member_function(),
            functor = traits.is_functor(),
            const_ = traits.is_const(),
            volatile = traits.is_volatile(),
            ref_qualifier = %traits.ref_qualifier(),
            class = %names.of::<F::Class>(),
            wrapping = %traits.wrapping(),
            "descriptor layout"
        );

        if self.verbose {
            tracing::trace!(target: TARGET, label, "{traits}");
        }
    }
}

impl Default for TraitsTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Emits the decomposition of `F` with a [`TraitsTracer`] configured from the
/// environment.
///
/// # Examples
///
/// ```
/// use function_traits::MemberFn;
/// use function_traits_tracing::trace_function_traits;
///
/// struct Widget;
///
/// trace_function_traits::<*const MemberFn<Widget, extern "C" fn(u32)>>("resize");
/// ```
pub fn trace_function_traits<F: FunctionTraits>(label: &str) {
    TraitsTracer::new().trace::<F>(label);
}

/// Extension trait for tracing a [`Traits`] value inline.
pub trait TraitsExt: Sized {
    /// Emits the decomposition with a [`TraitsTracer`] configured from the
    /// environment, and returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_traits::Traits;
    /// use function_traits_tracing::TraitsExt;
    ///
    /// let traits = Traits::<fn(f64) -> f64>::new().trace("sqrt");
    /// assert!(traits.is_free_function());
    /// ```
    fn trace(self, label: &str) -> Self;
}

impl<F: FunctionTraits> TraitsExt for Traits<F> {
    fn trace(self, label: &str) -> Self {
        trace_function_traits::<F>(label);
        self
    }
}

#[derive(Copy, Clone)]
struct TypeNames {
    short: bool,
}

impl TypeNames {
    fn of<T: ?Sized>(self) -> TypeNameDisplay {
        TypeNameDisplay {
            name: type_name::<T>(),
            short: self.short,
        }
    }
}

struct TypeNameDisplay {
    name: &'static str,
    short: bool,
}

impl fmt::Display for TypeNameDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.short {
            fmt::Display::fmt(&ShortTypeName::new(self.name), f)
        } else {
            f.write_str(self.name)
        }
    }
}

/// The parameter list of `F` as `[A0, A1, ..]`.
struct Parameters<F> {
    names: TypeNames,
    _descriptor: std::marker::PhantomData<fn() -> F>,
}

impl<F> Parameters<F> {
    fn new(names: TypeNames) -> Self {
        Self {
            names,
            _descriptor: std::marker::PhantomData,
        }
    }
}

impl<F: FunctionTraits> fmt::Display for Parameters<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct ListVisitor<'a, 'b> {
            f: &'a mut fmt::Formatter<'b>,
            names: TypeNames,
            result: fmt::Result,
        }

        impl ArgVisitor for ListVisitor<'_, '_> {
            fn visit<const INDEX: usize, T>(&mut self) -> bool {
                let separator = if INDEX == 0 { "" } else { ", " };
                self.result = write!(self.f, "{separator}{}", self.names.of::<T>());
                self.result.is_ok()
            }
        }

        f.write_str("[")?;
        let mut visitor = ListVisitor {
            f: &mut *f,
            names: self.names,
            result: Ok(()),
        };
        for_each_parameter::<F, _>(&mut visitor);
        visitor.result?;
        if F::IS_VARIADIC {
            f.write_str(if F::ARITY == 0 { "..." } else { ", ..." })?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use function_traits::{
        MemberFn,
        functor::{CallOperator, Functor},
        markers::{LvalueRef, Quals},
    };
    use tracing::{
        field::{Field, Visit},
        level_filters::LevelFilter,
    };
    use tracing_subscriber::{Registry, layer::SubscriberExt};

    use super::*;

    /// Records the fields of every event as `name=value` strings.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<Vec<(String, String)>>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            struct FieldVisitor(Vec<(String, String)>);

            impl Visit for FieldVisitor {
                fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                    self.0.push((field.name().to_string(), format!("{value:?}")));
                }

                fn record_str(&mut self, field: &Field, value: &str) {
                    self.0.push((field.name().to_string(), value.to_string()));
                }
            }

            assert_eq!(event.metadata().target(), TARGET);
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }

    impl Capture {
        fn field(&self, event: usize, name: &str) -> Option<String> {
            self.0.lock().unwrap()[event]
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value.clone())
        }

        fn len(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    fn capture(f: impl FnOnce()) -> Capture {
        capture_at(LevelFilter::TRACE, f)
    }

    fn capture_at(level: LevelFilter, f: impl FnOnce()) -> Capture {
        let capture = Capture::default();
        let subscriber = Registry::default().with(level).with(capture.clone());
        tracing::subscriber::with_default(subscriber, f);
        capture
    }

    struct Widget;

    impl CallOperator for Widget {
        type Operator = MemberFn<Self, extern "C" fn(u8), Quals<true, false, LvalueRef>>;
    }

    #[test]
    fn free_function_fields() {
        let tracer = TraitsTracer {
            short_names: false,
            verbose: false,
        };
        let events = capture(|| tracer.trace::<unsafe extern "C" fn(*const u8, ...) -> i32>("printf"));

        assert_eq!(events.len(), 1);
        assert_eq!(events.field(0, "label").as_deref(), Some("printf"));
        assert_eq!(events.field(0, "arity").as_deref(), Some("1"));
        assert_eq!(events.field(0, "variadic").as_deref(), Some("true"));
        assert_eq!(events.field(0, "noexcept").as_deref(), Some("true"));
        assert_eq!(events.field(0, "unsafe_").as_deref(), Some("true"));
        assert_eq!(events.field(0, "calling_convention").as_deref(), Some("cdecl"));
        assert_eq!(events.field(0, "parameters").as_deref(), Some("[*const u8, ...]"));
        assert_eq!(events.field(0, "classification").as_deref(), Some("free function"));
    }

    #[test]
    fn functor_fields_with_short_names() {
        let tracer = TraitsTracer {
            short_names: true,
            verbose: false,
        };
        let events = capture(|| tracer.trace::<Functor<Widget>>("widget"));

        assert_eq!(events.field(0, "descriptor").as_deref(), Some("Functor<Widget>"));
        assert_eq!(events.field(0, "class").as_deref(), Some("Widget"));
        assert_eq!(events.field(0, "functor").as_deref(), Some("true"));
        assert_eq!(events.field(0, "const_").as_deref(), Some("true"));
        assert_eq!(events.field(0, "ref_qualifier").as_deref(), Some("&"));
        assert_eq!(events.field(0, "parameters").as_deref(), Some("[u8]"));
    }

    #[test]
    fn full_names_by_default() {
        let tracer = TraitsTracer {
            short_names: false,
            verbose: false,
        };
        let events = capture(|| tracer.trace::<fn() -> Option<u8>>("none"));

        assert_eq!(
            events.field(0, "return_type").as_deref(),
            Some("core::option::Option<u8>")
        );
        assert_eq!(events.field(0, "parameters").as_deref(), Some("[]"));
    }

    #[test]
    fn verbose_adds_the_report() {
        let tracer = TraitsTracer {
            short_names: false,
            verbose: true,
        };
        let events = capture(|| tracer.trace::<&'static fn(u8)>("verbose"));

        assert_eq!(events.len(), 2);
        let report = events.field(1, "message").unwrap_or_default();
        assert!(report.contains("10. wrapping: reference"));
    }

    #[test]
    fn nothing_is_emitted_above_debug() {
        let tracer = TraitsTracer {
            short_names: true,
            verbose: true,
        };
        let events = capture_at(LevelFilter::INFO, || tracer.trace::<fn()>("silent"));
        assert_eq!(events.len(), 0);

        let events = capture_at(LevelFilter::DEBUG, || tracer.trace::<fn()>("loud"));
        assert_eq!(events.len(), 1);
    }
}
