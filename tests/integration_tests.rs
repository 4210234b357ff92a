//! Integration tests for function-traits.
//!
//! These exercise the public API the way downstream code uses it, through
//! the prelude:
//! - Replacing the parameter list with itself reproduces the descriptor
//! - Adding an attribute that is already present changes nothing
//! - Arity and empty-parameter-list agree, including for `fn(...)`
//! - Every descriptor falls into exactly one category
//! - Demoted conventions decompose as the default convention
//! - Parameters can be replaced by index, keeping a trailing `...`
//! - Qualifier mutators leave free functions alone
//! - Type names are recovered, natively and through the probe
//! - Functors decompose through their call operator

use core::any::TypeId;

use function_traits::{markers::Convention, prelude::*, type_name::probe};
use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};

struct Widget;

struct Scale;

impl CallOperator for Scale {
    type Operator = MemberFn<Self, fn(f32) -> i32, Quals<true>>;
}

type Free = extern "C" fn(i32, f32, f64) -> i32;
type VariadicOnly = unsafe extern "C" fn(...);
type Method = MemberFn<Widget, extern "C-unwind" fn(u8, u16) -> bool, Quals<false, true, RvalueRef>>;

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[test]
fn test_round_trip() {
    assert_type_eq_all!(ReplaceArgs<Free, ArgsOf<Free>>, Free);
    assert_type_eq_all!(ReplaceArgs<VariadicOnly, ArgsOf<VariadicOnly>>, VariadicOnly);
    assert_type_eq_all!(ReplaceArgs<Method, ArgsOf<Method>>, Method);
    assert_type_eq_all!(ReplaceArgs<*mut Method, ArgsOf<*mut Method>>, *mut Method);
    assert_type_eq_all!(
        ReplaceArgs<&'static Free, ArgsOf<&'static Free>>,
        &'static Free
    );
    assert_type_eq_all!(ReplaceReturn<Free, ReturnType<Free>>, Free);
    assert_type_eq_all!(ReplaceClass<Method, ClassOf<Method>>, Method);
}

#[test]
fn test_idempotence() {
    assert_type_eq_all!(AddNoexcept<Free>, Free);
    assert_type_eq_all!(RemoveNoexcept<RemoveNoexcept<Free>>, RemoveNoexcept<Free>);
    assert_type_eq_all!(AddVariadic<VariadicOnly>, VariadicOnly);
    assert_type_eq_all!(RemoveVariadic<Free>, Free);
    assert_type_eq_all!(AddVolatile<Method>, Method);
    assert_type_eq_all!(RemoveConst<Method>, Method);
    assert_type_eq_all!(AddConst<AddConst<Method>>, AddConst<Method>);
    assert_type_eq_all!(RemoveVolatile<RemoveVolatile<Method>>, RemoveVolatile<Method>);
    assert_type_eq_all!(AddUnsafe<VariadicOnly>, VariadicOnly);
}

#[test]
fn test_arity_law() {
    const_assert_eq!(<Free as FunctionTraits>::ARITY, 3);
    const_assert!(!<Free as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);

    const_assert_eq!(<VariadicOnly as FunctionTraits>::ARITY, 0);
    const_assert!(<VariadicOnly as FunctionTraits>::IS_VARIADIC);
    const_assert!(!<VariadicOnly as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);

    const_assert!(<RemoveVariadic<VariadicOnly> as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);
    const_assert!(<MemberFn<Widget, fn()> as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);

    let mut count = 0;
    assert!(for_each_parameter_index::<Method>(|_: usize| {
        count += 1;
        true
    }));
    assert_eq!(count, <Method as FunctionTraits>::ARITY);
}

#[test]
fn test_classification_exclusivity() {
    fn check<F: FunctionTraits>() {
        assert_ne!(F::IS_FREE_FUNCTION, F::IS_MEMBER_FUNCTION);
        assert!(!F::IS_FUNCTOR || F::IS_MEMBER_FUNCTION);
        assert_eq!(classify!(F), F::CLASSIFICATION);
    }

    check::<Free>();
    check::<&'static mut VariadicOnly>();
    check::<Method>();
    check::<*const Method>();
    check::<Functor<Scale>>();
    check::<Closure<fn(u8) -> u8, (u8,)>>();

    assert_eq!(classify!(Free), Classification::FreeFunction);
    assert_eq!(classify!(&'static Method), Classification::MemberFunctionPointer);
    assert_eq!(classify!(Functor<Scale>), Classification::Functor);
    assert_eq!(classify!(Scale), Classification::Unsupported);
    assert_eq!(classify!(Functor<Widget>), Classification::Unsupported);
}

#[test]
fn test_convention_demotion() {
    macro_rules! assert_effective {
        ($descriptor:ty, $is_free:expr; $($convention:ident)*) => {$(
            assert_eq!(
                <ReplaceCallingConvention<$descriptor, $convention> as FunctionTraits>::CALLING_CONVENTION,
                <$convention as Convention>::VALUE.effective($is_free),
                "{} on {}",
                stringify!($convention),
                stringify!($descriptor),
            );
        )*};
    }

    assert_effective!(extern "C" fn(i32), true; Rust Cdecl Stdcall Fastcall Vectorcall Regcall);
    assert_effective!(
        MemberFn<Widget, extern "C" fn(i32)>, false;
        Rust Cdecl Stdcall Fastcall Vectorcall Thiscall Regcall
    );

    for convention in CallingConvention::ALL {
        if convention.is_demoted_to_default(true) {
            assert_eq!(convention.effective(true), CallingConvention::DEFAULT);
        }
    }
    assert!(CallingConvention::Thiscall.is_demoted_to_default(true));
    assert!(CallingConvention::Regcall.is_demoted_to_default(false));
}

#[test]
fn test_replace_nth_arg() {
    assert_type_eq_all!(ReplaceNthArg<Free, 1, u8>, extern "C" fn(i32, u8, f64) -> i32);
    assert_type_eq_all!(
        ReplaceNthArg<*const Method, 0, i64>,
        *const MemberFn<Widget, extern "C-unwind" fn(i64, u16) -> bool, Quals<false, true, RvalueRef>>
    );
    assert_eq!(type_name::<ArgType<ReplaceNthArg<Free, 2, u8>, 2>>(), "u8");
}

#[test]
fn test_replacing_parameters_keeps_variadic() {
    type Printf = unsafe extern "C" fn(*const u8, ...) -> i32;
    type Log = MemberFn<Widget, extern "C-unwind" fn(i32, ...), Quals<false, true>>;

    assert_type_eq_all!(ReplaceNthArg<Printf, 0, *const i8>, unsafe extern "C" fn(*const i8, ...) -> i32);
    assert_type_eq_all!(ReplaceArgs<Printf, (u8, u16)>, unsafe extern "C" fn(u8, u16, ...) -> i32);
    assert_type_eq_all!(ReplaceArgs<VariadicOnly, (u8,)>, unsafe extern "C" fn(u8, ...));
    assert_type_eq_all!(
        ReplaceNthArg<&'static Log, 0, u64>,
        &'static MemberFn<Widget, extern "C-unwind" fn(u64, ...), Quals<false, true>>
    );

    const_assert!(<ReplaceArgs<Printf, ()> as FunctionTraits>::IS_VARIADIC);
    const_assert!(!<ReplaceArgs<Printf, ()> as FunctionTraits>::IS_EMPTY_PARAMETER_LIST);
    const_assert!(<ReplaceNthArg<Log, 0, u8> as FunctionTraits>::IS_VOLATILE);
}

#[test]
fn test_qualifiers_leave_free_functions_alone() {
    type Plain = fn(i32);

    assert_type_eq_all!(AddConst<Plain>, Plain);
    assert_type_eq_all!(AddVolatile<Plain>, Plain);
    assert_type_eq_all!(AddCv<Plain>, Plain);
    assert_type_eq_all!(AddLvalueRef<Plain>, Plain);
    assert_type_eq_all!(RemoveRefQualifier<&'static Plain>, &'static Plain);
    assert!(!<AddConst<Plain> as FunctionTraits>::IS_CONST);
}

#[test]
fn test_type_names() {
    assert_eq!(type_name::<i32>(), "i32");
    assert_eq!(probe::extract::<i32>(), Ok("i32"));
    assert_eq!(probe::extract::<probe::Calibration>(), Ok("f64"));
    assert_eq!(probe::self_test(), Ok(()));
    assert_eq!(short_type_name::<Option<Widget>>().to_string(), "Option<Widget>");
}

#[test]
fn test_functor() {
    type F = Functor<Scale>;

    const_assert!(<F as FunctionTraits>::IS_MEMBER_FUNCTION);
    const_assert!(<F as FunctionTraits>::IS_FUNCTOR);
    const_assert!(<F as FunctionTraits>::IS_CONST);
    const_assert_eq!(<F as FunctionTraits>::ARITY, 1);
    assert_type_eq_all!(ReturnType<F>, i32);
    assert_type_eq_all!(ArgsOf<F>, (f32,));
    assert_type_eq_all!(ArgType<F, 0>, f32);

    assert!(same::<AddNoexcept<F>, MemberFn<Scale, fn(f32) -> i32, Quals<true>>>());
    assert!(same::<
        AddNoexcept<ReplaceCallingConvention<F, Cdecl>>,
        MemberFn<Scale, extern "C" fn(f32) -> i32, Quals<true>>,
    >());
    assert!(same::<AsFreeFunction<F>, fn(*const Scale, f32) -> i32>());

    let offset = 2.5_f32;
    let scale = move |x: f32| (x * offset) as i32;
    let traits = of_closure::<(f32,), _>(&scale);
    assert!(traits.is_functor());
    assert!(traits.is_const());
    assert_eq!(traits.arity(), 1);
    assert_eq!(traits.return_type_name(), "i32");
}
