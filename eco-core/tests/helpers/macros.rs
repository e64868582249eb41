// See https://stackoverflow.com/questions/34662713/how-can-i-create-parameterized-tests-in-rust
macro_rules! with_dollar_sign {
    ($($body:tt)*) => {
        macro_rules! __with_dollar_sign { $($body)* }
        __with_dollar_sign!($);
    }
}

#[macro_export]
macro_rules! parameterized_test {
    ($name:ident, $args:pat, $body:tt) => {
        with_dollar_sign! {
        ($d:tt) => {
            macro_rules! $name {
                ($d($d pname:ident: $d values:expr,)*) => {
                    mod $name {
                        use super::*;
                        $d(
                            #[test]
                            fn $d pname() {
                                let $args = $d values;
                                $body
                            }
                        )*
                    }}}}}
    };
}

#[macro_export]
macro_rules! assert_float_eq {
    ($left:expr, $right:expr) => {{
        assert_float_eq!($left, $right, 1E-9)
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        if (left - right).abs() > $eps * right.abs().max(1.) {
            panic!("assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`", left, right)
        }
    }};
}
