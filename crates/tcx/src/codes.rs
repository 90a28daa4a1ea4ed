//! Enumerated codes of the TCX schemas.
//!
//! Every code set is closed: text outside the set fails to decode instead of
//! mapping to a default.

/// Declares a closed code enumeration together with its text mapping.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The code as written in TCX documents.
            pub const fn as_code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = pacer_serde_support::ScalarError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(pacer_serde_support::ScalarError::UnrecognizedCode),
                }
            }
        }

        impl pacer_serde_support::XmlScalar for $name {
            fn to_xml_text(&self) -> String {
                self.as_code().to_string()
            }

            fn from_xml_text(text: &str) -> Result<Self, pacer_serde_support::ScalarError> {
                text.trim().parse()
            }
        }
    };
}

pub(crate) use code_enum;

code_enum! {
    /// Sport_t
    pub enum Sport {
        Running = "Running",
        Biking = "Biking",
        Other = "Other",
    }
}

code_enum! {
    /// Intensity_t
    pub enum Intensity {
        Active = "Active",
        Resting = "Resting",
    }
}

code_enum! {
    /// TriggerMethod_t: what closed a lap.
    pub enum TriggerMethod {
        Manual = "Manual",
        Distance = "Distance",
        Location = "Location",
        Time = "Time",
        HeartRate = "HeartRate",
    }
}

code_enum! {
    /// SensorState_t
    pub enum SensorState {
        Present = "Present",
        Absent = "Absent",
    }
}

code_enum! {
    /// TrainingType_t
    pub enum TrainingType {
        Workout = "Workout",
        Course = "Course",
    }
}

code_enum! {
    /// BuildType_t
    pub enum BuildType {
        Internal = "Internal",
        Alpha = "Alpha",
        Beta = "Beta",
        Release = "Release",
    }
}
