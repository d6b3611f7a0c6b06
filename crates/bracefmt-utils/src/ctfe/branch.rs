//! Branch selection on `const bool` conditions.
//!
//! Each branch is a zero-argument producer and only the selected one is invoked. Since the
//! choice is made by trait resolution, the branches are free to return unrelated types:
//!
//! ```
//! use bracefmt_utils::ctfe::branch::{else_if, if_};
//!
//! const WIDE: bool = false;
//! const NARROW: bool = true;
//!
//! let value: &str = if_::<WIDE, _, _>(|| 0u128, else_if::<NARROW, _, _>(|| "narrow", || 'x'));
//! assert_eq!(value, "narrow");
//! ```

// === Branch === //

/// A deferred computation selected at compile time.
pub trait Branch {
    type Output;

    fn run(self) -> Self::Output;
}

impl<F, R> Branch for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    fn run(self) -> R {
        self()
    }
}

/// The absent `else` arm. Selecting it produces `()`.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoBranch;

impl Branch for NoBranch {
    type Output = ();

    fn run(self) {}
}

// === If === //

#[derive(Debug, Copy, Clone)]
pub struct IfConst<const COND: bool, T, E = NoBranch> {
    then: T,
    otherwise: E,
}

impl<T: Branch, E> Branch for IfConst<true, T, E> {
    type Output = T::Output;

    fn run(self) -> Self::Output {
        self.then.run()
    }
}

impl<T, E: Branch> Branch for IfConst<false, T, E> {
    type Output = E::Output;

    fn run(self) -> Self::Output {
        self.otherwise.run()
    }
}

/// Runs `then` if `COND` holds and `otherwise` if it does not.
pub fn if_<const COND: bool, T, E>(then: T, otherwise: E) -> <IfConst<COND, T, E> as Branch>::Output
where
    IfConst<COND, T, E>: Branch,
{
    IfConst::<COND, T, E> { then, otherwise }.run()
}

/// Runs `then` if `COND` holds. Otherwise nothing is run and `()` is returned.
pub fn when<const COND: bool, T>(then: T) -> <IfConst<COND, T> as Branch>::Output
where
    IfConst<COND, T>: Branch,
{
    if_::<COND, T, NoBranch>(then, NoBranch)
}

/// An unevaluated `else if` arm to pass as the `otherwise` of [`if_`] or another `else_if`.
pub fn else_if<const COND: bool, T, E>(then: T, otherwise: E) -> IfConst<COND, T, E> {
    IfConst { then, otherwise }
}

/// The last `else if` of a chain, without a final `else`.
pub fn else_if_last<const COND: bool, T>(then: T) -> IfConst<COND, T> {
    IfConst {
        then,
        otherwise: NoBranch,
    }
}

// === Switch === //

#[derive(Debug, Copy, Clone)]
pub struct Case<const COND: bool, F>(F);

pub fn case<const COND: bool, F>(f: F) -> Case<COND, F> {
    Case(f)
}

/// A case that always matches. Cases after it are never considered.
pub fn default<F>(f: F) -> Case<true, F> {
    Case(f)
}

/// A cons cell of cases, built by [`switch!`](crate::switch).
#[derive(Debug, Copy, Clone)]
pub struct Switch<H, T>(pub H, pub T);

impl<F: Branch, T> Branch for Switch<Case<true, F>, T> {
    type Output = F::Output;

    fn run(self) -> Self::Output {
        self.0.0.run()
    }
}

impl<F, T: Branch> Branch for Switch<Case<false, F>, T> {
    type Output = T::Output;

    fn run(self) -> Self::Output {
        self.1.run()
    }
}

/// Runs the first case whose condition holds, or produces `()` if none does.
///
/// ```
/// use bracefmt_utils::{ctfe::branch::{case, default}, switch};
///
/// const MODE: u8 = 2;
///
/// let picked = switch!(
///     case::<{ MODE == 1 }, _>(|| 1u8),
///     case::<{ MODE == 2 }, _>(|| "two"),
///     default(|| 3.0),
/// );
/// assert_eq!(picked, "two");
///
/// let nothing: () = switch!(case::<false, _>(|| 1));
/// assert_eq!(nothing, ());
/// ```
#[macro_export]
macro_rules! switch {
    ($($case:expr),* $(,)?) => {
        $crate::ctfe::branch::Branch::run($crate::__switch_chain!($($case),*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __switch_chain {
    () => {
        $crate::ctfe::branch::NoBranch
    };
    ($head:expr $(, $rest:expr)*) => {
        $crate::ctfe::branch::Switch($head, $crate::__switch_chain!($($rest),*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_then_or_else() {
        let a: u32 = if_::<true, _, _>(|| 1u32, || "unused");
        let b: &str = if_::<false, _, _>(|| 1u32, || "taken");
        assert_eq!(a, 1);
        assert_eq!(b, "taken");
    }

    #[test]
    fn untaken_branch_is_not_run() {
        let mut hits = Vec::new();
        if_::<true, _, _>(|| hits.push("then"), || panic!("else ran"));
        assert_eq!(hits, ["then"]);
    }

    #[test]
    fn when_without_else() {
        let some: i32 = when::<true, _>(|| 5);
        assert_eq!(some, 5);

        let mut ran = false;
        let none: () = when::<false, _>(|| ran = true);
        assert_eq!(none, ());
        assert!(!ran);
    }

    #[test]
    fn else_if_chains() {
        const A: bool = false;
        const B: bool = false;
        const C: bool = true;

        let v: char = if_::<A, _, _>(
            || 1u8,
            else_if::<B, _, _>(|| "b", else_if::<C, _, _>(|| 'c', || 2.5f64)),
        );
        assert_eq!(v, 'c');

        let fell_through: () = if_::<A, _, _>(|| 1u8, else_if_last::<B, _>(|| "b"));
        assert_eq!(fell_through, ());
    }

    #[test]
    fn switch_takes_first_match() {
        let v: &str = crate::switch!(
            case::<false, _>(|| 1u8),
            case::<true, _>(|| "first"),
            case::<true, _>(|| "second"),
        );
        assert_eq!(v, "first");

        let d: f32 = crate::switch!(case::<false, _>(|| 'x'), default(|| 0.5f32));
        assert_eq!(d, 0.5);

        let empty: () = crate::switch!();
        assert_eq!(empty, ());
    }
}
