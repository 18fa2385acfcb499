/// Instantiate a test body once per random source. Inside the body the source type is `R`.
///
/// ```ignore
/// rng_t!(selects_last[R: WyRng | StdRng]() {
///     let mut rng = R::seed_from_u64(1);
/// });
/// ```
#[macro_export]
macro_rules! rng_t {
  ( #[should_panic(expected = $panic_msg:literal)]
    $name:ident[R: $($impl:ident)|*]() $body:tt ) => {$(
      ::paste::paste! {
          #[test]
          #[should_panic(expected = $panic_msg)]
          fn [<test_ $name _ $impl:snake>]() {
            #[allow(dead_code)]
            type R = $impl;
            $body
          }
      }
  )+};
  ($name:ident[R: $($impl:ident)|*]() $body:tt ) => {$(
      ::paste::paste! {
          #[test]
          fn [<test_ $name _ $impl:snake>]() {
            #[allow(dead_code)]
            type R = $impl;
            $body
          }
      }
  )+};
}

#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        $crate::assert_f64_approx!($l, $r, 1e-9)
    };
    ($l:expr, $r:expr, $tol:expr) => {
        assert!(
            ($l - $r).abs() < $tol,
            "assertion failed: {} !~ {} (tolerance {})",
            $l,
            $r,
            $tol
        )
    };
}
