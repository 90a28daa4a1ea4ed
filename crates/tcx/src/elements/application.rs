use pacer_serde_support::{DecodeError, XmlCodable, XmlDecoder, XmlEncoder};
use serde::{Deserialize, Serialize};

use crate::codes::BuildType;
use crate::elements::creator::Version;

/// Identifies a PC software application, typically the author of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    // Application_t
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build: Option<Build>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    part_number: Option<String>,
}

impl Application {
    const BUILD: &'static str = "Build";
    const LANGUAGE: &'static str = "LangID";
    const PART_NUMBER: &'static str = "PartNumber";

    pub fn new(build: Option<Build>, language: Option<String>, part_number: Option<String>) -> Self {
        Self {
            build,
            language,
            part_number,
        }
    }

    pub fn build(&self) -> Option<&Build> {
        self.build.as_ref()
    }

    /// Two character ISO 639-1 id of the installed language of the application.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Garmin part number, `XXX-XXXXX-XX`.
    pub fn part_number(&self) -> Option<&str> {
        self.part_number.as_deref()
    }
}

impl XmlCodable for Application {
    const ENTITY: &'static str = "Application";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional_entity(Self::BUILD, self.build.as_ref());
        encoder.encode_optional(Self::LANGUAGE, self.language.as_ref());
        encoder.encode_optional(Self::PART_NUMBER, self.part_number.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_optional_entity(Self::BUILD)?,
            decoder.decode_optional(Self::LANGUAGE)?,
            decoder.decode_optional(Self::PART_NUMBER)?,
        ))
    }
}

/// Build information of an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    // Build_t
    version: Version,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    build_type: Option<BuildType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    builder: Option<String>,
}

impl Build {
    const VERSION: &'static str = "Version";
    const BUILD_TYPE: &'static str = "Type";
    const TIME: &'static str = "Time";
    const BUILDER: &'static str = "Builder";

    pub fn new(
        version: Version,
        build_type: Option<BuildType>,
        time: Option<String>,
        builder: Option<String>,
    ) -> Self {
        Self {
            version,
            build_type,
            time,
            builder,
        }
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn build_type(&self) -> Option<BuildType> {
        self.build_type
    }

    /// Free-form build time as written by the application's build system.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn builder(&self) -> Option<&str> {
        self.builder.as_deref()
    }
}

impl XmlCodable for Build {
    const ENTITY: &'static str = "Build";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_entity(Self::VERSION, &self.version);
        encoder.encode_optional(Self::BUILD_TYPE, self.build_type.as_ref());
        encoder.encode_optional(Self::TIME, self.time.as_ref());
        encoder.encode_optional(Self::BUILDER, self.builder.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_entity(Self::VERSION)?,
            decoder.decode_optional(Self::BUILD_TYPE)?,
            decoder.decode_optional(Self::TIME)?,
            decoder.decode_optional(Self::BUILDER)?,
        ))
    }
}
