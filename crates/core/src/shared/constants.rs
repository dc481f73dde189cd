use crate::shared::color::Color;

/// Side length of the square network input tensor.
pub const NETWORK_INPUT_SIZE: u32 = 320;

/// Default detection confidence threshold.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Default NMS IoU threshold.
pub const DEFAULT_NMS_THRESHOLD: f32 = 0.3;

/// Default colors for annotation, in the image's own channel order.
pub const DEFAULT_BOX_COLOR: Color = Color(0, 0, 180);
pub const DEFAULT_TEXT_COLOR: Color = Color(255, 255, 255);

/// Label banner geometry: banner width grows 9 px per character, the
/// banner is 20 px tall, and text is inset 4 px from the banner top.
pub const LABEL_CHAR_WIDTH: i32 = 9;
pub const LABEL_BANNER_HEIGHT: i32 = 20;
pub const LABEL_TEXT_INSET: i32 = 4;

/// Default audio sample rate for wake-word recognition.
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Default recognition language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default recognizer grammar: one phrase covering the letters the wake
/// phrases are spelled from plus "key cute", and the unknown-word
/// catch-all. Passed to the recognizer as a JSON array of phrases.
pub const DEFAULT_GRAMMAR: &str =
    r#"[ "a b c d e f g h i j k l m n o p q r s t u v w x y z key cute", "[unk]" ]"#;
