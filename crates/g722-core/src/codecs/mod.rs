//! Codec implementations and factory

use crate::error::{CodecError, Result};
use crate::types::AudioCodec;

// Codec implementations
#[cfg(feature = "g722")]
pub mod g722;

/// Whether the G.722 codec is compiled into this build.
///
/// Resolved once at build time; callers check it instead of probing the
/// constructors.
pub const G722_ENABLED: bool = cfg!(feature = "g722");

/// Create a G.722 codec from a raw bitrate and options bitmask.
///
/// # Errors
///
/// Returns [`CodecError::FeatureNotEnabled`] when the crate was built
/// without the `g722` feature, or a configuration error for unsupported
/// values.
pub fn create_g722(bitrate: i64, options: u32) -> Result<Box<dyn AudioCodec>> {
    #[cfg(feature = "g722")]
    {
        let codec = g722::G722Codec::from_raw(bitrate, options)?;
        Ok(Box::new(codec))
    }

    #[cfg(not(feature = "g722"))]
    {
        let _ = (bitrate, options);
        Err(CodecError::feature_not_enabled("g722"))
    }
}

/// Codec factory for creating codec instances
pub struct CodecFactory;

impl CodecFactory {
    /// Create a codec by name
    pub fn create_by_name(name: &str, bitrate: i64, options: u32) -> Result<Box<dyn AudioCodec>> {
        match name.to_uppercase().as_str() {
            "G722" | "G.722" => create_g722(bitrate, options),
            _ => Err(CodecError::invalid_config(format!("Unsupported codec: {name}"))),
        }
    }

    /// Create a codec by RTP payload type
    pub fn create_by_payload_type(
        payload_type: u8,
        bitrate: i64,
        options: u32,
    ) -> Result<Box<dyn AudioCodec>> {
        match payload_type {
            9 => create_g722(bitrate, options),
            _ => Err(CodecError::invalid_config(format!(
                "Unsupported payload type: PT{payload_type}"
            ))),
        }
    }

    /// Get all supported codec names
    pub fn supported_codecs() -> Vec<&'static str> {
        vec![
            #[cfg(feature = "g722")]
            "G722",
        ]
    }

    /// Check if a codec is supported
    pub fn is_supported(name: &str) -> bool {
        let name = name.to_uppercase().replace('.', "");
        Self::supported_codecs().contains(&name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_flag() {
        assert_eq!(G722_ENABLED, cfg!(feature = "g722"));
        assert_eq!(CodecFactory::is_supported("g.722"), G722_ENABLED);
    }

    #[cfg(feature = "g722")]
    #[test]
    fn test_create_g722() {
        let codec = create_g722(48000, 0).unwrap();
        assert_eq!(codec.info().bitrate, 48000);
        assert_eq!(codec.info().payload_type, Some(9));

        assert!(create_g722(44100, 0).is_err());
        assert!(create_g722(64000, 0x0001).is_err());
    }

    #[cfg(feature = "g722")]
    #[test]
    fn test_factory_lookup() {
        assert!(CodecFactory::create_by_name("G722", 64000, 0).is_ok());
        assert!(CodecFactory::create_by_name("PCMU", 64000, 0).is_err());
        assert!(CodecFactory::create_by_payload_type(9, 56000, 0x0004).is_ok());
        assert!(CodecFactory::create_by_payload_type(0, 64000, 0).is_err());
    }

    #[cfg(not(feature = "g722"))]
    #[test]
    fn test_create_g722_disabled() {
        let err = create_g722(64000, 0).err().unwrap();
        assert!(matches!(err, CodecError::FeatureNotEnabled { .. }));
    }
}
