pub mod estimate_macros;
