use tracing::trace;

/// Lift `f` to a function that applies it until the value no longer changes
///
/// Termination is up to `f`: it must eventually map some value to an equal one.
pub fn fixpoint<T, F>(f: F) -> impl Fn(T) -> T
where
    T: PartialEq,
    F: Fn(&T) -> T,
{
    fixpoint_with(f, |_: &T, _: &T| {})
}

/// Same as [`fixpoint`], calling `on_step(before, after)` after every application of `f`
pub fn fixpoint_with<T, F, H>(f: F, on_step: H) -> impl Fn(T) -> T
where
    T: PartialEq,
    F: Fn(&T) -> T,
    H: Fn(&T, &T),
{
    move |mut x| {
        let mut step = 0usize;
        loop {
            let next = f(&x);
            step += 1;
            trace!(step, "fixpoint step");
            on_step(&x, &next);
            if next == x {
                return x;
            }
            x = next;
        }
    }
}

/// Fallible [`fixpoint`]: stops at the first error returned by `f`
pub fn try_fixpoint<T, E, F>(f: F) -> impl Fn(T) -> Result<T, E>
where
    T: PartialEq,
    F: Fn(&T) -> Result<T, E>,
{
    try_fixpoint_with(f, |_: &T, _: &T| {})
}

/// Same as [`try_fixpoint`], calling `on_step(before, after)` after every successful application of `f`
pub fn try_fixpoint_with<T, E, F, H>(f: F, on_step: H) -> impl Fn(T) -> Result<T, E>
where
    T: PartialEq,
    F: Fn(&T) -> Result<T, E>,
    H: Fn(&T, &T),
{
    move |mut x| {
        let mut step = 0usize;
        loop {
            let next = f(&x)?;
            step += 1;
            trace!(step, "fixpoint step");
            on_step(&x, &next);
            if next == x {
                return Ok(x);
            }
            x = next;
        }
    }
}
