pub mod pacer;

pub use pacer::TokioPacer;
