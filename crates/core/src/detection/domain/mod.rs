pub mod detections;
pub mod inference_engine;
pub mod nms;
pub mod tensor;
