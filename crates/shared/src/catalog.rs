//! Static service catalog and duration table.

use crate::domain::{DurationCategory, ServiceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCatalogEntry {
    pub id: ServiceId,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

/// Catalog in display order.
pub const SERVICES: &[ServiceCatalogEntry] = &[
    ServiceCatalogEntry {
        id: ServiceId::Inspection,
        title: "Roof & Asset Inspection",
        description: "High-resolution aerial inspection with structured reporting.",
        bullets: &[
            "Detailed stills of roofs, façades and assets",
            "Annotated defect identification",
            "Client-ready PDF report",
            "Thermal capability launching soon",
        ],
    },
    ServiceCatalogEntry {
        id: ServiceId::Documentation,
        title: "Site Documentation",
        description: "Visual progress records for construction and property projects.",
        bullets: &[
            "Scheduled progress capture",
            "Consistent vantage points",
            "Secure digital delivery",
            "Clear file labelling for project teams",
        ],
    },
    ServiceCatalogEntry {
        id: ServiceId::Cinematography,
        title: "Aerial Cinematography",
        description: "Professional aerial capture for corporate and branded content.",
        bullets: &[
            "Stabilised 4K aerial video",
            "High-resolution still imagery",
            "Pre-flight planning and location checks",
            "Clear usage licensing",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationOption {
    pub id: DurationCategory,
    pub label: &'static str,
}

pub const DURATIONS: &[DurationOption] = &[
    DurationOption {
        id: DurationCategory::HalfDay,
        label: "Half Day",
    },
    DurationOption {
        id: DurationCategory::FullDay,
        label: "Full Day",
    },
    DurationOption {
        id: DurationCategory::MultiDay,
        label: "Multi-Day",
    },
];

impl ServiceId {
    pub fn entry(self) -> &'static ServiceCatalogEntry {
        match self {
            ServiceId::Inspection => &SERVICES[0],
            ServiceId::Documentation => &SERVICES[1],
            ServiceId::Cinematography => &SERVICES[2],
        }
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }
}

impl DurationCategory {
    pub fn label(self) -> &'static str {
        match self {
            DurationCategory::HalfDay => DURATIONS[0].label,
            DurationCategory::FullDay => DURATIONS[1].label,
            DurationCategory::MultiDay => DURATIONS[2].label,
        }
    }
}
