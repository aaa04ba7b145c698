pub mod bruteforce;
pub mod invocations;
pub mod js_extract;
