// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// `or_na!(text)` → owned text, or the "N/A" sentinel when it is empty.
#[macro_export]
macro_rules! or_na {
    ($expr:expr) => {{
        let v: ::std::string::String = ::std::string::String::from($expr);
        if v.is_empty() { ::std::string::String::from($crate::config::consts::NA) } else { v }
    }};
}
