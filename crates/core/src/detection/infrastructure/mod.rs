pub mod ort_engine;
