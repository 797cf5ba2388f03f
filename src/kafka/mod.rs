pub mod appender;
pub mod producer;
pub mod serializer;


pub use appender::KafkaAppender;
pub use producer::KafkaProducer;
pub use serializer::{JsonSerializer, SerializationFormat};
