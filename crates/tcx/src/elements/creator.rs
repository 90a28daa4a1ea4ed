use pacer_serde_support::{DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder};
use serde::{Deserialize, Serialize};

/// Identifies the device that recorded an activity.
///
/// TCX declares the creator as the abstract `AbstractSource_t`, so the
/// concrete type travels in an `xsi:type` attribute. This model only carries
/// devices; the discriminator is fixed to `Device_t` at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    // AbstractSource_t
    #[serde(rename = "type", skip_deserializing, default = "device_source_type")]
    source_type: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<Version>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
}

fn device_source_type() -> String {
    Creator::DEVICE_TYPE.to_string()
}

impl Creator {
    /// The only discriminator this model writes.
    pub const DEVICE_TYPE: &'static str = "Device_t";

    const SOURCE_TYPE: &'static str = "xsi:type";
    const NAME: &'static str = "Name";
    const VERSION: &'static str = "Version";
    const UNIT_ID: &'static str = "UnitId";
    const PRODUCT_ID: &'static str = "ProductID";

    pub fn new(
        name: String,
        version: Option<Version>,
        unit_id: Option<String>,
        product_id: Option<String>,
    ) -> Self {
        Self {
            source_type: device_source_type(),
            name,
            version,
            unit_id,
            product_id,
        }
    }

    /// The `xsi:type` discriminator.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub fn unit_id(&self) -> Option<&str> {
        self.unit_id.as_deref()
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
}

impl XmlCodable for Creator {
    const ENTITY: &'static str = "Creator";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::SOURCE_TYPE => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::SOURCE_TYPE, &self.source_type);
        encoder.encode(Self::NAME, &self.name);
        encoder.encode_optional_entity(Self::VERSION, self.version.as_ref());
        encoder.encode_optional(Self::UNIT_ID, self.unit_id.as_ref());
        encoder.encode_optional(Self::PRODUCT_ID, self.product_id.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        let source_type: Option<String> = decoder.decode_optional(Self::SOURCE_TYPE)?;
        if let Some(source_type) = source_type.filter(|value| value != Self::DEVICE_TYPE) {
            return Err(DecodeError::UnrecognizedEnumCode {
                entity: Self::ENTITY,
                key: Self::SOURCE_TYPE,
                value: source_type,
            });
        }
        Ok(Self::new(
            decoder.decode(Self::NAME)?,
            decoder.decode_optional_entity(Self::VERSION)?,
            decoder.decode_optional(Self::UNIT_ID)?,
            decoder.decode_optional(Self::PRODUCT_ID)?,
        ))
    }
}

/// Software or firmware version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    // Version_t
    version_major: u16,
    version_minor: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_major: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_minor: Option<u16>,
}

impl Version {
    const VERSION_MAJOR: &'static str = "VersionMajor";
    const VERSION_MINOR: &'static str = "VersionMinor";
    const BUILD_MAJOR: &'static str = "BuildMajor";
    const BUILD_MINOR: &'static str = "BuildMinor";

    pub fn new(
        version_major: u16,
        version_minor: u16,
        build_major: Option<u16>,
        build_minor: Option<u16>,
    ) -> Self {
        Self {
            version_major,
            version_minor,
            build_major,
            build_minor,
        }
    }

    pub fn version_major(&self) -> u16 {
        self.version_major
    }

    pub fn version_minor(&self) -> u16 {
        self.version_minor
    }

    pub fn build_major(&self) -> Option<u16> {
        self.build_major
    }

    pub fn build_minor(&self) -> Option<u16> {
        self.build_minor
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.version_major, self.version_minor)?;
        if let Some(build_major) = self.build_major {
            write!(f, ".{}", build_major)?;
            if let Some(build_minor) = self.build_minor {
                write!(f, ".{}", build_minor)?;
            }
        }
        Ok(())
    }
}

impl XmlCodable for Version {
    const ENTITY: &'static str = "Version";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::VERSION_MAJOR, &self.version_major);
        encoder.encode(Self::VERSION_MINOR, &self.version_minor);
        encoder.encode_optional(Self::BUILD_MAJOR, self.build_major.as_ref());
        encoder.encode_optional(Self::BUILD_MINOR, self.build_minor.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::VERSION_MAJOR)?,
            decoder.decode(Self::VERSION_MINOR)?,
            decoder.decode_optional(Self::BUILD_MAJOR)?,
            decoder.decode_optional(Self::BUILD_MINOR)?,
        ))
    }
}
