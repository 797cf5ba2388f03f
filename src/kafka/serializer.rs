use crate::record::LogEvent;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    Json,
    #[default]
    JsonCompact,
}

#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    format: SerializationFormat,
}

impl JsonSerializer {
    pub fn new(format: SerializationFormat) -> Self {
        Self { format }
    }

    pub fn serialize(&self, event: &LogEvent) -> Result<Vec<u8>> {
        let bytes = match self.format {
            SerializationFormat::Json => serde_json::to_vec_pretty(event)?,
            SerializationFormat::JsonCompact => serde_json::to_vec(event)?,
        };
        Ok(bytes)
    }
}
