//! Closed categorical vocabularies shared by feature reports and building specs.
//!
//! Every vocabulary has a sentinel (`Unknown` or `None`) meaning "could not be
//! determined" and an `Other` variant for values that were determined but fall
//! outside the enumerated domain. Parsing is lenient: case, whitespace and
//! punctuation are ignored, so `"vinyl-siding"` and `"Vinyl Siding"` agree.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Strip everything but ASCII alphanumerics and lowercase the rest.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Strings treated as "undetermined" by every vocabulary.
fn is_undetermined(normalized: &str) -> bool {
    matches!(normalized, "" | "unknown" | "none" | "na" | "null" | "notvisible")
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            sentinel: $sentinel:ident => $sentinel_label:literal,
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
        #[serde(from = "Option<String>")]
        pub enum $name {
            $($variant,)+
            Other,
            #[default]
            $sentinel,
        }

        impl $name {
            /// Every variant, sentinel last.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+ $name::Other, $name::$sentinel];

            /// Canonical display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other => "Other",
                    $name::$sentinel => $sentinel_label,
                }
            }

            /// Whether this value carries information (is not the sentinel).
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::$sentinel)
            }

            pub fn parse(value: &str) -> Self {
                let key = normalize(value);
                if is_undetermined(&key) {
                    return $name::$sentinel;
                }
                $(
                    if key == normalize($label) $(|| key == normalize($alias))* {
                        return $name::$variant;
                    }
                )+
                $name::Other
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        /// `null` is undetermined.
        impl From<Option<String>> for $name {
            fn from(value: Option<String>) -> Self {
                value.map_or($name::$sentinel, |v| Self::parse(&v))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

categorical! {
    /// Occupancy class of the building.
    BuildingType {
        sentinel: Unknown => "Unknown",
        SingleFamilyResidential => "Single Family Residential" | "single family" | "residential",
        MultiFamilyResidential => "Multi-Family Residential" | "multi family",
        Commercial => "Commercial",
        Industrial => "Industrial",
        MixedUse => "Mixed Use",
    }
}

categorical! {
    RoofStyle {
        sentinel: Unknown => "Unknown",
        Gable => "Gable",
        Hip => "Hip" | "hipped",
        Flat => "Flat",
        Mansard => "Mansard",
        Gambrel => "Gambrel",
        Shed => "Shed",
        Butterfly => "Butterfly",
    }
}

categorical! {
    RoofMaterial {
        sentinel: Unknown => "Unknown",
        AsphaltShingle => "Asphalt Shingle" | "asphalt" | "shingle" | "asphalt shingles",
        Metal => "Metal",
        Tile => "Tile" | "clay tile" | "concrete tile",
        Slate => "Slate",
        WoodShake => "Wood Shake" | "cedar shake",
        Membrane => "Membrane" | "tpo" | "epdm",
    }
}

categorical! {
    /// Exterior cladding; also selects the exterior takeoff formula.
    ExteriorMaterial {
        sentinel: Unknown => "Unknown",
        VinylSiding => "Vinyl Siding" | "vinyl",
        WoodSiding => "Wood Siding" | "wood",
        FiberCement => "Fiber Cement" | "hardie" | "hardieboard",
        Brick => "Brick",
        Stone => "Stone",
        Stucco => "Stucco",
        Metal => "Metal",
        Eifs => "EIFS",
    }
}

categorical! {
    Condition {
        sentinel: Unknown => "Unknown",
        Excellent => "Excellent",
        Good => "Good",
        Fair => "Fair",
        Poor => "Poor",
    }
}

categorical! {
    ArchitecturalStyle {
        sentinel: Unknown => "Unknown",
        Colonial => "Colonial",
        Ranch => "Ranch",
        Craftsman => "Craftsman",
        Victorian => "Victorian",
        CapeCod => "Cape Cod",
        Tudor => "Tudor",
        Farmhouse => "Farmhouse",
        Modern => "Modern",
        Contemporary => "Contemporary",
        Mediterranean => "Mediterranean",
    }
}

categorical! {
    GarageType {
        sentinel: None => "None",
        Attached => "Attached",
        Detached => "Detached",
        Carport => "Carport",
        TuckUnder => "Tuck Under",
    }
}

categorical! {
    PorchType {
        sentinel: None => "None",
        Front => "Front" | "front porch",
        Wraparound => "Wraparound" | "wrap around",
        Screened => "Screened",
        Stoop => "Stoop",
    }
}

categorical! {
    DeckMaterial {
        sentinel: None => "None",
        Wood => "Wood" | "pressure treated",
        Composite => "Composite",
        Concrete => "Concrete",
        Stone => "Stone" | "pavers",
    }
}

categorical! {
    /// Photo quality as judged by the vision service.
    PhotoQuality {
        sentinel: Unknown => "unknown",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

categorical! {
    FoundationKind {
        sentinel: Unknown => "Unknown",
        Slab => "Slab" | "slab on grade",
        Crawl => "Crawl" | "crawl space" | "crawlspace",
        Basement => "Basement",
    }
}

impl PhotoQuality {
    /// Ordinal rank; anything not low/medium/high ranks below all of them.
    pub fn rank(&self) -> u8 {
        match self {
            PhotoQuality::Low => 1,
            PhotoQuality::Medium => 2,
            PhotoQuality::High => 3,
            PhotoQuality::Other | PhotoQuality::Unknown => 0,
        }
    }
}
