use crate::PlasticType;

/// One card on the recycling education page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCard {
    /// `None` for the general tips card.
    pub plastic: Option<PlasticType>,
    pub title: &'static str,
    pub summary: &'static str,
    pub tips: &'static [&'static str],
}

pub const EDUCATION_HEADING: &str = "Recycling Education";

pub const MATERIAL_CARDS: &[MaterialCard] = &[
    MaterialCard {
        plastic: Some(PlasticType::Pet),
        title: "PET (Polyethylene Terephthalate)",
        summary: "Commonly used in water bottles and food containers. PET is fully recyclable and can be turned into new bottles, clothing, and carpet fibers.",
        tips: &[
            "Rinse containers before recycling",
            "Remove caps and labels",
            "Flatten to save space",
        ],
    },
    MaterialCard {
        plastic: Some(PlasticType::Hdpe),
        title: "HDPE (High-Density Polyethylene)",
        summary: "Used in milk jugs, detergent bottles, and plastic bags. HDPE is one of the most commonly recycled plastics.",
        tips: &[
            "Clean and dry before recycling",
            "Remove any food residue",
            "Check local recycling guidelines",
        ],
    },
    MaterialCard {
        plastic: Some(PlasticType::Ldpe),
        title: "LDPE (Low-Density Polyethylene)",
        summary: "Found in plastic bags, shrink wrap, and squeezable bottles. LDPE is recyclable but not all facilities accept it.",
        tips: &[
            "Clean and dry plastic bags",
            "Bundle similar items together",
            "Check with local recycling centers",
        ],
    },
    MaterialCard {
        plastic: Some(PlasticType::Pp),
        title: "PP (Polypropylene)",
        summary: "Used in yogurt containers, medicine bottles, and bottle caps. PP is becoming more widely accepted in recycling programs.",
        tips: &[
            "Clean containers thoroughly",
            "Remove any food residue",
            "Check local recycling guidelines",
        ],
    },
    MaterialCard {
        plastic: Some(PlasticType::Ps),
        title: "PS (Polystyrene)",
        summary: "Found in foam cups, take-out containers, and packaging materials. PS is difficult to recycle and often not accepted.",
        tips: &[
            "Check local recycling guidelines",
            "Consider reusable alternatives",
            "Reduce usage when possible",
        ],
    },
    MaterialCard {
        plastic: None,
        title: "General Recycling Tips",
        summary: "Follow these general guidelines for better recycling practices.",
        tips: &[
            "Clean and dry all recyclables",
            "Check local recycling guidelines",
            "When in doubt, throw it out",
            "Reduce and reuse when possible",
        ],
    },
];

pub fn card_for(plastic: PlasticType) -> Option<&'static MaterialCard> {
    MATERIAL_CARDS.iter().find(|card| card.plastic == Some(plastic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plastic_has_a_card() {
        for plastic in PlasticType::all() {
            let card = card_for(*plastic).unwrap();
            assert_eq!(card.title, plastic.title());
        }
    }

    #[test]
    fn test_general_card_is_last() {
        let last = MATERIAL_CARDS.last().unwrap();
        assert_eq!(last.plastic, None);
        assert_eq!(last.tips.len(), 4);
    }

    #[test]
    fn test_cards_have_content() {
        assert_eq!(MATERIAL_CARDS.len(), PlasticType::all().len() + 1);
        for card in MATERIAL_CARDS {
            assert!(!card.summary.is_empty());
            assert!(!card.tips.is_empty(), "{} has no tips", card.title);
        }
    }
}
