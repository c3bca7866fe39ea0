// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! metrics {
    // Owned metric-name list from string literals:
    //   metrics!["total_points", "goals_scored"]
    ($($name:expr),* $(,)?) => {
        ::std::vec![$( ::std::string::String::from($name) ),*]
    };
}
