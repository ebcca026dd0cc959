//! Static resource definitions.

use super::types::{CardColor, Resource, ResourceKind};

/// The ten classifiable resources, in catalog order.
pub const RESOURCES: [Resource; 10] = [
    Resource {
        id: 1,
        name: "Solar Energy",
        kind: ResourceKind::Renewable,
        glyph: "☀",
        color: CardColor::Yellow,
    },
    Resource {
        id: 2,
        name: "Wind Energy",
        kind: ResourceKind::Renewable,
        glyph: "≋",
        color: CardColor::LightBlue,
    },
    Resource {
        id: 3,
        name: "Coal",
        kind: ResourceKind::NonRenewable,
        glyph: "⛰",
        color: CardColor::Gray,
    },
    Resource {
        id: 4,
        name: "Hydroelectric",
        kind: ResourceKind::Renewable,
        glyph: "≈",
        color: CardColor::Blue,
    },
    Resource {
        id: 5,
        name: "Natural Gas",
        kind: ResourceKind::NonRenewable,
        glyph: "▲",
        color: CardColor::Orange,
    },
    Resource {
        id: 6,
        name: "Biomass",
        kind: ResourceKind::Renewable,
        glyph: "♣",
        color: CardColor::Green,
    },
    Resource {
        id: 7,
        name: "Oil",
        kind: ResourceKind::NonRenewable,
        glyph: "◆",
        color: CardColor::Black,
    },
    Resource {
        id: 8,
        name: "Geothermal",
        kind: ResourceKind::Renewable,
        glyph: "⚡",
        color: CardColor::Red,
    },
    Resource {
        id: 9,
        name: "Nuclear",
        kind: ResourceKind::NonRenewable,
        glyph: "☢",
        color: CardColor::Purple,
    },
    Resource {
        id: 10,
        name: "Recycled Materials",
        kind: ResourceKind::Renewable,
        glyph: "♻",
        color: CardColor::LightGreen,
    },
];
